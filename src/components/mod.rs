pub mod editor;
pub mod graph_view;
pub mod note_panel;

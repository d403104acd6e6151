mod buffer;
mod component;

pub use buffer::EditorBuffer;
pub use component::NoteEditor;

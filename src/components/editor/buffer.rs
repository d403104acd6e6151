use crate::api::Note;
use crate::markup::{Preview, ToolbarCommand, apply_toolbar_command, render_markup};

/// Unsaved editing state for one note. Nothing here reaches the note
/// service until the view commits it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EditorBuffer {
	note_id: String,
	title: String,
	text: String,
	committed: String,
}

impl EditorBuffer {
	pub fn open(note: &Note) -> Self {
		let body = note.body.clone().unwrap_or_default();
		Self {
			note_id: note.id.clone(),
			title: note.title.clone(),
			text: body.clone(),
			committed: body,
		}
	}

	pub fn note_id(&self) -> &str {
		&self.note_id
	}

	pub fn title(&self) -> &str {
		&self.title
	}

	pub fn text(&self) -> &str {
		&self.text
	}

	pub fn set_text(&mut self, text: String) {
		self.text = text;
	}

	pub fn apply(&mut self, command: ToolbarCommand) {
		self.text = apply_toolbar_command(&self.text, command);
	}

	pub fn is_dirty(&self) -> bool {
		self.text != self.committed
	}

	/// Record that `text` is now what the service holds.
	pub fn mark_committed(&mut self, text: &str) {
		self.committed = text.to_string();
	}

	/// Take a fresh copy of `note` from the service. Unsaved edits to the
	/// same note survive and are compared against the new body.
	pub fn reload(&mut self, note: &Note) {
		if self.note_id != note.id || !self.is_dirty() {
			*self = Self::open(note);
			return;
		}
		self.title = note.title.clone();
		self.committed = note.body.clone().unwrap_or_default();
	}

	pub fn preview(&self) -> Preview {
		render_markup(&self.text)
	}
}

use super::tree::HeadingLevel;

/// Formatting controls of the editor. Each rewrites the whole buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToolbarCommand {
	/// Prefix the buffer with `#`s and a space.
	Heading(HeadingLevel),
	/// Wrap the buffer in `**`.
	Bold,
	/// Wrap the buffer in `*`.
	Italic,
	/// Wrap the buffer in a ```` ``` ```` fence.
	Code,
}

impl ToolbarCommand {
	/// Toolbar order.
	pub const ALL: [Self; 6] = [
		Self::Heading(HeadingLevel::H1),
		Self::Heading(HeadingLevel::H2),
		Self::Heading(HeadingLevel::H3),
		Self::Bold,
		Self::Italic,
		Self::Code,
	];

	/// Button caption.
	pub fn label(self) -> &'static str {
		match self {
			Self::Heading(HeadingLevel::H1) => "H1",
			Self::Heading(HeadingLevel::H2) => "H2",
			Self::Heading(HeadingLevel::H3) => "H3",
			Self::Bold => "Bold",
			Self::Italic => "Italic",
			Self::Code => "Code",
		}
	}

	/// Rewrite the whole buffer. Never fails, whatever the buffer holds.
	pub fn apply(self, buffer: &str) -> String {
		match self {
			Self::Heading(level) => format!("{} {buffer}", "#".repeat(level.depth())),
			Self::Bold => format!("**{buffer}**"),
			Self::Italic => format!("*{buffer}*"),
			Self::Code => format!("```\n{buffer}\n```"),
		}
	}
}

/// Apply `command` to `buffer`, returning the new buffer.
pub fn apply_toolbar_command(buffer: &str, command: ToolbarCommand) -> String {
	command.apply(buffer)
}

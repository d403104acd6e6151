/// Heading depth; only the first three levels exist.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeadingLevel {
	/// `#`
	H1,
	/// `##`
	H2,
	/// `###`
	H3,
}

impl HeadingLevel {
	/// Number of `#` characters for this level.
	pub fn depth(self) -> usize {
		match self {
			Self::H1 => 1,
			Self::H2 => 2,
			Self::H3 => 3,
		}
	}
}

/// Inline content. Text is always already escaped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Inline {
	/// Plain text.
	Text(String),
	/// `**…**`
	Strong(Vec<Inline>),
	/// `*…*`
	Emphasis(Vec<Inline>),
	/// `` `…` ``, content verbatim.
	Code(String),
}

/// Top-level preview content, in document order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Block {
	/// A `#`, `##` or `###` line.
	Heading {
		/// Heading depth.
		level: HeadingLevel,
		/// Inline content after the hashes.
		content: Vec<Inline>,
	},
	/// Inline content outside headings.
	Inline(Inline),
	/// A ```` ``` ```` fenced block, content verbatim.
	CodeBlock(String),
	/// A blank line.
	Break,
}

/// Rendered preview of a markup buffer.
///
/// Only [`render_markup`](super::render_markup) builds one, so every text leaf
/// inside has been through escaping.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Preview {
	pub(super) blocks: Vec<Block>,
}

impl Preview {
	/// Blocks in document order.
	pub fn blocks(&self) -> &[Block] {
		&self.blocks
	}

	/// True for the preview of an empty buffer.
	pub fn is_empty(&self) -> bool {
		self.blocks.is_empty()
	}
}

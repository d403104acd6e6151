use super::tree::{Block, Inline, Preview};

/// HTML produced from a [`Preview`]. The only tags it can contain are the
/// fixed presentational ones written below, so it is safe to hand to
/// `inner_html`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SafeHtml(String);

impl SafeHtml {
	/// The markup, ready for `inner_html`.
	pub fn into_string(self) -> String {
		self.0
	}
}

impl From<&Preview> for SafeHtml {
	fn from(preview: &Preview) -> Self {
		let mut out = String::new();
		for block in preview.blocks() {
			write_block(&mut out, block);
		}
		Self(out)
	}
}

fn write_block(out: &mut String, block: &Block) {
	match block {
		Block::Heading { level, content } => {
			let depth = level.depth();
			out.push_str(&format!("<h{depth}>"));
			write_inlines(out, content);
			out.push_str(&format!("</h{depth}>"));
		}
		Block::Inline(inline) => write_inline(out, inline),
		Block::CodeBlock(code) => {
			out.push_str("<pre><code>");
			out.push_str(code);
			out.push_str("</code></pre>");
		}
		Block::Break => out.push_str("<br/><br/>"),
	}
}

fn write_inlines(out: &mut String, inlines: &[Inline]) {
	for inline in inlines {
		write_inline(out, inline);
	}
}

fn write_inline(out: &mut String, inline: &Inline) {
	match inline {
		Inline::Text(text) => out.push_str(text),
		Inline::Strong(children) => {
			out.push_str("<strong>");
			write_inlines(out, children);
			out.push_str("</strong>");
		}
		Inline::Emphasis(children) => {
			out.push_str("<em>");
			write_inlines(out, children);
			out.push_str("</em>");
		}
		Inline::Code(code) => {
			out.push_str("<code>");
			out.push_str(code);
			out.push_str("</code>");
		}
	}
}

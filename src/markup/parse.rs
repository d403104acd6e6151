use super::tree::{Block, HeadingLevel, Inline, Preview};

const FENCE: &str = "```";
const HEADINGS: [(HeadingLevel, &str); 3] = [
	(HeadingLevel::H3, "###"),
	(HeadingLevel::H2, "##"),
	(HeadingLevel::H1, "#"),
];

/// Turn a raw markup buffer into a preview tree.
///
/// Escaping runs over the whole buffer before anything else. Fenced blocks
/// are cut out next and kept verbatim; the prose between them is split on
/// blank lines and heading lines are recognised. Inline code spans are cut
/// out of each run and kept verbatim, then bold and italic run, in that
/// order, over the text between them.
pub fn render_markup(text: &str) -> Preview {
	let escaped = escape(text);
	let mut blocks = Vec::new();
	let mut rest = escaped.as_str();
	let mut line_start = true;

	while let Some((open, close)) = find_fence(rest) {
		prose(&rest[..open], line_start, &mut blocks);
		blocks.push(Block::CodeBlock(rest[open + FENCE.len()..close].to_string()));
		rest = &rest[close + FENCE.len()..];
		line_start = false;
	}
	prose(rest, line_start, &mut blocks);

	Preview { blocks }
}

fn escape(text: &str) -> String {
	let mut out = String::with_capacity(text.len());
	for ch in text.chars() {
		match ch {
			'&' => out.push_str("&amp;"),
			'<' => out.push_str("&lt;"),
			'>' => out.push_str("&gt;"),
			_ => out.push(ch),
		}
	}
	out
}

fn find_fence(s: &str) -> Option<(usize, usize)> {
	let open = s.find(FENCE)?;
	let inner = open + FENCE.len();
	let close = inner + s[inner..].find(FENCE)?;
	Some((open, close))
}

fn prose(s: &str, line_start: bool, blocks: &mut Vec<Block>) {
	if s.is_empty() {
		return;
	}
	for (i, part) in s.split("\n\n").enumerate() {
		if i > 0 {
			blocks.push(Block::Break);
		}
		lines(part, line_start || i > 0, blocks);
	}
}

fn lines(part: &str, mut line_start: bool, blocks: &mut Vec<Block>) {
	let mut run = String::new();
	for line in part.split_inclusive('\n') {
		let (body, newline) = match line.strip_suffix('\n') {
			Some(body) => (body, true),
			None => (line, false),
		};
		match heading(body).filter(|_| line_start) {
			Some((level, content)) => {
				flush(&mut run, blocks);
				blocks.push(Block::Heading { level, content: inlines(content) });
				if newline {
					run.push('\n');
				}
			}
			None => run.push_str(line),
		}
		line_start = true;
	}
	flush(&mut run, blocks);
}

fn heading(line: &str) -> Option<(HeadingLevel, &str)> {
	HEADINGS.iter().find_map(|&(level, hashes)| {
		let content = line.strip_prefix(hashes)?.strip_prefix(char::is_whitespace)?;
		(!content.is_empty()).then_some((level, content))
	})
}

fn flush(run: &mut String, blocks: &mut Vec<Block>) {
	if !run.is_empty() {
		blocks.extend(inlines(run).into_iter().map(Block::Inline));
		run.clear();
	}
}

fn inlines(s: &str) -> Vec<Inline> {
	code_spans(s)
		.into_iter()
		.flat_map(|node| match node {
			Inline::Text(text) => emphasis(&text),
			code => vec![code],
		})
		.collect()
}

fn emphasis(s: &str) -> Vec<Inline> {
	let nodes = vec![Inline::Text(s.to_string())];
	let nodes = rewrite_text(nodes, &|t: &str| split_pairs(t, "**", Inline::Strong));
	rewrite_text(nodes, &|t: &str| split_pairs(t, "*", Inline::Emphasis))
}

/// Apply `rule` to every text leaf, descending into strong and emphasis spans.
fn rewrite_text(nodes: Vec<Inline>, rule: &dyn Fn(&str) -> Vec<Inline>) -> Vec<Inline> {
	nodes
		.into_iter()
		.flat_map(|node| match node {
			Inline::Text(text) => rule(&text),
			Inline::Strong(children) => vec![Inline::Strong(rewrite_text(children, rule))],
			Inline::Emphasis(children) => vec![Inline::Emphasis(rewrite_text(children, rule))],
			code @ Inline::Code(_) => vec![code],
		})
		.collect()
}

fn split_pairs(text: &str, delim: &str, wrap: fn(Vec<Inline>) -> Inline) -> Vec<Inline> {
	let mut out = Vec::new();
	let mut rest = text;
	while let Some((open, close)) = find_pair(rest, delim) {
		if open > 0 {
			out.push(Inline::Text(rest[..open].to_string()));
		}
		let inner = rest[open + delim.len()..close].to_string();
		out.push(wrap(vec![Inline::Text(inner)]));
		rest = &rest[close + delim.len()..];
	}
	if !rest.is_empty() {
		out.push(Inline::Text(rest.to_string()));
	}
	out
}

/// Leftmost `delim … delim` with the shortest non-empty, single-line content.
fn find_pair(s: &str, delim: &str) -> Option<(usize, usize)> {
	let mut from = 0;
	while let Some(found) = s[from..].find(delim) {
		let open = from + found;
		let inner = open + delim.len();
		if let Some(first) = s[inner..].chars().next().filter(|&c| c != '\n') {
			let search = inner + first.len_utf8();
			if let Some(offset) = s[search..].find(delim) {
				let close = search + offset;
				if !s[inner..close].contains('\n') {
					return Some((open, close));
				}
			}
		}
		// delimiters are ASCII, so the next byte is a char boundary
		from = open + 1;
	}
	None
}

fn code_spans(text: &str) -> Vec<Inline> {
	let mut out = Vec::new();
	let mut rest = text;
	while let Some((open, close)) = find_code(rest) {
		if open > 0 {
			out.push(Inline::Text(rest[..open].to_string()));
		}
		out.push(Inline::Code(rest[open + 1..close].to_string()));
		rest = &rest[close + 1..];
	}
	if !rest.is_empty() {
		out.push(Inline::Text(rest.to_string()));
	}
	out
}

fn find_code(s: &str) -> Option<(usize, usize)> {
	let mut from = 0;
	while let Some(found) = s[from..].find('`') {
		let open = from + found;
		let close = open + 1 + s[open + 1..].find('`')?;
		if close > open + 1 {
			return Some((open, close));
		}
		from = close;
	}
	None
}

use log::{debug, warn};

use super::types::Graph;
use crate::api::NoteContent;
use crate::error::Result;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase<'a> {
	Idle,
	Loaded,
	Focused(&'a str),
}

/// Handed out by [`SelectionState::select`]; the fetch it starts must bring it
/// back to [`SelectionState::resolve`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchTicket {
	pub id: String,
	token: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
	Applied,
	Stale,
	Failed,
}

/// Graph view state: the loaded graph, the focused node and the note panel
/// contents. Every event is a method; the view only reads snapshots.
#[derive(Clone, Debug, Default)]
pub struct SelectionState {
	graph: Option<Graph>,
	focus: Option<String>,
	content: Option<NoteContent>,
	token: u64,
}

impl SelectionState {
	pub fn phase(&self) -> Phase<'_> {
		match (&self.graph, &self.focus) {
			(None, _) => Phase::Idle,
			(Some(_), None) => Phase::Loaded,
			(Some(_), Some(id)) => Phase::Focused(id),
		}
	}

	pub fn graph(&self) -> Option<&Graph> {
		self.graph.as_ref()
	}

	pub fn focus(&self) -> Option<&str> {
		self.focus.as_deref()
	}

	pub fn content(&self) -> Option<&NoteContent> {
		self.content.as_ref()
	}

	/// Replace the graph wholesale. Focus is cleared and any fetch still in
	/// flight becomes stale; the note panel keeps what it shows.
	pub fn load(&mut self, graph: Graph) {
		debug!(
			"graph loaded: {} nodes, {} edges",
			graph.nodes().len(),
			graph.edges().len()
		);
		self.graph = Some(graph);
		self.focus = None;
		self.token += 1;
	}

	/// Focus `id` and return the ticket for its note fetch. Ignored while no
	/// graph is loaded.
	pub fn select(&mut self, id: impl Into<String>) -> Option<FetchTicket> {
		if self.graph.is_none() {
			return None;
		}
		let id = id.into();
		self.token += 1;
		self.focus = Some(id.clone());
		Some(FetchTicket { id, token: self.token })
	}

	/// Apply a finished fetch if it is still the latest one for the current
	/// focus. Stale results are dropped; failures leave the panel untouched.
	pub fn resolve(&mut self, ticket: FetchTicket, result: Result<NoteContent>) -> Resolution {
		if ticket.token != self.token || self.focus.as_deref() != Some(ticket.id.as_str()) {
			debug!("discarding stale note response for {}", ticket.id);
			return Resolution::Stale;
		}
		match result {
			Ok(content) => {
				self.content = Some(content);
				Resolution::Applied
			}
			Err(err) => {
				warn!("loading note {} failed: {err}", ticket.id);
				Resolution::Failed
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::api::Note;
	use crate::components::graph_view::types::GraphNode;
	use crate::error::Error;

	fn graph() -> Graph {
		Graph::new(
			["A", "B", "C"]
				.iter()
				.map(|id| GraphNode { id: id.to_string(), label: id.to_string() })
				.collect(),
			vec![],
		)
	}

	fn content(id: &str) -> NoteContent {
		NoteContent {
			note: Note { id: id.into(), title: format!("Title {id}"), body: Some(format!("body of {id}")) },
			backlinks: vec![],
		}
	}

	fn failure() -> Error {
		Error::Status { status: 500, url: "/notes/x".into() }
	}

	#[test]
	fn starts_idle_and_ignores_select() {
		let mut state = SelectionState::default();
		assert_eq!(state.phase(), Phase::Idle);
		assert_eq!(state.select("A"), None);
		assert_eq!(state.phase(), Phase::Idle);
	}

	#[test]
	fn load_then_select_focuses() {
		let mut state = SelectionState::default();
		state.load(graph());
		assert_eq!(state.phase(), Phase::Loaded);
		let ticket = state.select("B").unwrap();
		assert_eq!(ticket.id, "B");
		assert_eq!(state.phase(), Phase::Focused("B"));
		assert_eq!(state.resolve(ticket, Ok(content("B"))), Resolution::Applied);
		assert_eq!(state.content().unwrap().note.id, "B");
	}

	#[test]
	fn last_select_wins() {
		let mut state = SelectionState::default();
		state.load(graph());
		let a = state.select("A").unwrap();
		let b = state.select("B").unwrap();

		assert_eq!(state.resolve(a, Ok(content("A"))), Resolution::Stale);
		assert!(state.content().is_none());

		assert_eq!(state.resolve(b, Ok(content("B"))), Resolution::Applied);
		assert_eq!(state.content().unwrap().note.id, "B");
		assert_eq!(state.focus(), Some("B"));
	}

	#[test]
	fn reselecting_same_id_discards_older_request() {
		let mut state = SelectionState::default();
		state.load(graph());
		let first = state.select("A").unwrap();
		let second = state.select("A").unwrap();
		assert_eq!(state.resolve(first, Ok(content("A"))), Resolution::Stale);
		assert_eq!(state.resolve(second, Ok(content("A"))), Resolution::Applied);
	}

	#[test]
	fn failure_keeps_previous_content_and_focus() {
		let mut state = SelectionState::default();
		state.load(graph());
		let a = state.select("A").unwrap();
		state.resolve(a, Ok(content("A")));

		let c = state.select("C").unwrap();
		assert_eq!(state.resolve(c, Err(failure())), Resolution::Failed);
		assert_eq!(state.content().unwrap().note.id, "A");
		assert_eq!(state.phase(), Phase::Focused("C"));
	}

	#[test]
	fn failure_with_nothing_shown_stays_empty() {
		let mut state = SelectionState::default();
		state.load(graph());
		let a = state.select("A").unwrap();
		assert_eq!(state.resolve(a, Err(failure())), Resolution::Failed);
		assert!(state.content().is_none());
	}

	#[test]
	fn reload_clears_focus_and_outstanding_fetches() {
		let mut state = SelectionState::default();
		state.load(graph());
		let a = state.select("A").unwrap();
		state.load(graph());
		assert_eq!(state.phase(), Phase::Loaded);
		assert_eq!(state.resolve(a, Ok(content("A"))), Resolution::Stale);
	}
}

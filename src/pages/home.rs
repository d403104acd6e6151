use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{error, info, warn};

use crate::api::ApiClient;
use crate::components::editor::{EditorBuffer, NoteEditor};
use crate::components::graph_view::{
	FetchTicket, GraphView, Phase, Resolution, SelectionState, render_graph,
};
use crate::components::note_panel::NotePanel;
use crate::config::AppConfig;

/// Graph view with the focused note's backlinks and editor.
#[component]
pub fn Home() -> impl IntoView {
	let config = use_context::<AppConfig>().unwrap_or_default();
	let client = match ApiClient::from_browser(&config.api) {
		Ok(client) => StoredValue::new_local(client),
		Err(err) => {
			error!("cannot reach the note service: {err}");
			return view! { <p class="error">{err.to_string()}</p> }.into_any();
		}
	};

	let state = RwSignal::new(SelectionState::default());
	let pending = RwSignal::new(None::<FetchTicket>);
	let buffer = RwSignal::new(None::<EditorBuffer>);

	let load_graph = move || {
		let client = client.get_value();
		spawn_local(async move {
			match client.get_graph().await {
				Ok(graph) => {
					info!("graph loaded with {} nodes", graph.nodes().len());
					state.update(|s| s.load(graph));
				}
				Err(err) => warn!("loading graph failed: {err}"),
			}
		});
	};
	Effect::new(move |_| load_graph());

	let select = Callback::new(move |id: String| {
		if let Some(ticket) = state.try_update(|s| s.select(id)).flatten() {
			pending.set(Some(ticket));
		}
	});

	// One fetch per ticket; `resolve` drops whatever has been overtaken.
	Effect::new(move |_| {
		let Some(ticket) = pending.get() else {
			return;
		};
		let client = client.get_value();
		spawn_local(async move {
			let result = client.get_note_content(&ticket.id).await;
			if state.try_update(|s| s.resolve(ticket, result)) == Some(Resolution::Applied) {
				let note = state.with_untracked(|s| s.content().map(|c| c.note.clone()));
				buffer.update(|b| {
					*b = match (b.take(), note) {
						(Some(mut current), Some(note)) => {
							current.reload(&note);
							Some(current)
						}
						(_, note) => note.as_ref().map(EditorBuffer::open),
					};
				});
			}
		});
	});

	let save = Callback::new(move |()| {
		let Some(draft) = buffer.get_untracked() else {
			return;
		};
		let client = client.get_value();
		spawn_local(async move {
			let id = draft.note_id().to_string();
			match client.save_note(&id, draft.title(), draft.text()).await {
				Ok(()) => {
					info!("saved note {id}");
					buffer.update(|b| {
						if let Some(b) = b.as_mut().filter(|b| b.note_id() == id) {
							b.mark_committed(draft.text());
						}
					});
					if state.with_untracked(|s| s.focus() == Some(id.as_str())) {
						select.run(id);
					}
				}
				Err(err) => warn!("saving note {id} failed: {err}"),
			}
		});
	});

	let graph_config = config.graph.clone();
	let scene = Memo::new(move |_| {
		state.with(|s| {
			s.graph()
				.map(|graph| render_graph(graph, s.focus(), &graph_config))
				.unwrap_or_default()
		})
	});
	let content = Signal::derive(move || state.with(|s| s.content().cloned()));
	let status = move || {
		state.with(|s| match s.phase() {
			Phase::Idle => "No graph loaded.".to_string(),
			Phase::Loaded if s.graph().is_some_and(|g| g.is_empty()) => "The graph is empty.".to_string(),
			Phase::Loaded => "Click a note to focus it.".to_string(),
			Phase::Focused(id) => format!("Focused: {id}"),
		})
	};
	let has_draft = Memo::new(move |_| buffer.with(Option::is_some));

	view! {
		<div class="note-graph" style="font-family: system-ui; padding: 16px;">
			<h3>"Graph"</h3>
			<div style="display: flex; gap: 8px; align-items: center;">
				<button on:click=move |_| load_graph()>"Load Graph"</button>
				<small>{status}</small>
			</div>
			<GraphView scene=scene config=config.graph on_select=select />
			<NotePanel content=content on_select=select />
			{move || has_draft.get().then(|| view! { <NoteEditor buffer=buffer on_save=save /> })}
		</div>
	}
	.into_any()
}

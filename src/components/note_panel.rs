use leptos::prelude::*;

use crate::api::NoteContent;

/// Title and backlinks of the focused note. Clicking a backlink focuses it.
#[component]
pub fn NotePanel(
	#[prop(into)] content: Signal<Option<NoteContent>>,
	on_select: Callback<String>,
) -> impl IntoView {
	move || {
		content.get().map(|content| {
			let backlinks = content
				.backlinks
				.into_iter()
				.map(|link| {
					let id = link.id.clone();
					view! {
						<li>
							<a href="#" on:click=move |ev| {
								ev.prevent_default();
								on_select.run(id.clone());
							}>{link.title}</a>
							" (" {link.count} ")"
						</li>
					}
				})
				.collect_view();
			view! {
				<div class="note-panel">
					<h2>{content.note.title}</h2>
					<h4>"Backlinks"</h4>
					<ul>{backlinks}</ul>
				</div>
			}
		})
	}
}

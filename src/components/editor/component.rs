use leptos::prelude::*;
use web_sys::MouseEvent;

use super::buffer::EditorBuffer;
use crate::markup::{SafeHtml, ToolbarCommand};

/// Toolbar, textarea and live preview for the open note. `on_save` is the
/// only path by which the buffer leaves the browser.
#[component]
pub fn NoteEditor(buffer: RwSignal<Option<EditorBuffer>>, on_save: Callback<()>) -> impl IntoView {
	let text = move || buffer.with(|b| b.as_ref().map(|b| b.text().to_string()).unwrap_or_default());
	let title = move || buffer.with(|b| b.as_ref().map(|b| b.title().to_string()).unwrap_or_default());
	let dirty = move || buffer.with(|b| b.as_ref().is_some_and(EditorBuffer::is_dirty));
	let preview = move || {
		buffer.with(|b| {
			b.as_ref()
				.map(EditorBuffer::preview)
				.filter(|preview| !preview.is_empty())
				.map(|preview| SafeHtml::from(&preview).into_string())
				.unwrap_or_else(|| "<em>Nothing to preview</em>".to_string())
		})
	};

	let toolbar = ToolbarCommand::ALL
		.into_iter()
		.map(|command| {
			let on_click = move |_: MouseEvent| {
				buffer.update(|b| {
					if let Some(b) = b {
						b.apply(command);
					}
				})
			};
			view! { <button on:click=on_click>{command.label()}</button> }
		})
		.collect_view();

	view! {
		<div class="note-editor">
			<h3>"Edit: " {title}</h3>
			<div class="note-editor-toolbar" style="display: flex; gap: 8px; margin-bottom: 8px;">
				{toolbar}
				<button disabled=move || !dirty() on:click=move |_| on_save.run(())>
					"Save"
				</button>
			</div>
			<div style="display: grid; grid-template-columns: 1fr 1fr; gap: 8px;">
				<textarea
					style="width: 100%; height: 200px;"
					prop:value=text
					on:input=move |ev| {
						let value = event_target_value(&ev);
						buffer.update(|b| {
							if let Some(b) = b {
								b.set_text(value);
							}
						});
					}
				/>
				<div class="markup-preview" style="border: 1px solid #eee; padding: 8px;" inner_html=preview />
			</div>
		</div>
	}
}

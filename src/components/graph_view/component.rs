use leptos::prelude::*;
use log::{debug, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

use super::render;
use super::scene::Scene;
use crate::config::GraphConfig;

/// Canvas drawing of a [`Scene`]. Clicking a node circle calls `on_select`
/// with the node id.
#[component]
pub fn GraphView(
	#[prop(into)] scene: Signal<Scene>,
	config: GraphConfig,
	on_select: Callback<String>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let (size, hit_radius) = (config.size, config.hit_radius);

	Effect::new(move |_| {
		let scene = scene.get();
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		canvas.set_width(size as u32);
		canvas.set_height(size as u32);

		let Some(ctx) = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
		else {
			warn!("canvas has no 2d context");
			return;
		};
		render::render(&scene, &config, &ctx);
	});

	let on_click = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let rect = canvas.get_bounding_client_rect();
		let (x, y) = canvas_point(
			(ev.client_x() as f64, ev.client_y() as f64),
			(rect.left(), rect.top()),
			(canvas.client_left() as f64, canvas.client_top() as f64),
		);
		let hit = scene.with_untracked(|s| s.node_at_position(x, y, hit_radius).map(str::to_string));
		if let Some(id) = hit {
			debug!("node {id} clicked");
			on_select.run(id);
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="note-graph-canvas"
			on:click=on_click
			style="display: block; cursor: pointer; border: 1px solid #eee;"
		/>
	}
}

/// Pointer position in canvas pixels. The bounding rect includes the
/// element's border, so the border widths are taken off as well.
fn canvas_point(client: (f64, f64), rect_origin: (f64, f64), border: (f64, f64)) -> (f64, f64) {
	(client.0 - rect_origin.0 - border.0, client.1 - rect_origin.1 - border.1)
}

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::scene::Scene;
use crate::config::GraphConfig;

pub fn render(scene: &Scene, config: &GraphConfig, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(&config.background);
	ctx.fill_rect(0.0, 0.0, config.size, config.size);
	draw_edges(scene, config, ctx);
	draw_nodes(scene, config, ctx);
}

fn draw_edges(scene: &Scene, config: &GraphConfig, ctx: &CanvasRenderingContext2d) {
	ctx.set_stroke_style_str(&config.edge_color);
	ctx.set_line_width(1.0);
	for line in &scene.lines {
		ctx.begin_path();
		ctx.move_to(line.x1, line.y1);
		ctx.line_to(line.x2, line.y2);
		ctx.stroke();
	}
}

fn draw_nodes(scene: &Scene, config: &GraphConfig, ctx: &CanvasRenderingContext2d) {
	for circle in &scene.circles {
		ctx.begin_path();
		let _ = ctx.arc(circle.x, circle.y, circle.r, 0.0, 2.0 * PI);
		let fill = if circle.is_focus { &config.focus_color } else { &config.node_color };
		ctx.set_fill_style_str(fill);
		ctx.fill();
	}

	ctx.set_fill_style_str(&config.label_color);
	ctx.set_font(&format!("{}px sans-serif", config.font_size));
	for label in &scene.labels {
		let _ = ctx.fill_text(&label.text, label.x, label.y);
	}
}

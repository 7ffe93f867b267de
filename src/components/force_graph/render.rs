use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::projection::RenderState;
use super::state::ForceGraphState;

const BACKGROUND: &str = "#ffffff";
const LINK_COLOR: &str = "rgba(153, 153, 153, 0.6)";
const NODE_STROKE: &str = "#fff";
const LABEL_COLOR: &str = "#333";

pub fn render(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	let (width, height) = (state.config.width, state.config.height);
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, width, height);

	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);
	let frame = state.render_state();
	draw_lines(&frame, ctx);
	draw_circles(&frame, ctx);
	draw_labels(&frame, ctx);
	ctx.restore();
}

fn draw_lines(frame: &RenderState<'_>, ctx: &CanvasRenderingContext2d) {
	ctx.set_stroke_style_str(LINK_COLOR);
	for line in &frame.lines {
		ctx.set_line_width(line.width);
		ctx.begin_path();
		ctx.move_to(line.x1, line.y1);
		ctx.line_to(line.x2, line.y2);
		ctx.stroke();
	}
}

fn draw_circles(frame: &RenderState<'_>, ctx: &CanvasRenderingContext2d) {
	ctx.set_stroke_style_str(NODE_STROKE);
	ctx.set_line_width(1.5);
	for circle in &frame.circles {
		ctx.begin_path();
		let _ = ctx.arc(circle.cx, circle.cy, circle.r, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(circle.fill);
		ctx.fill();
		ctx.stroke();
	}
}

fn draw_labels(frame: &RenderState<'_>, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(LABEL_COLOR);
	ctx.set_font("10px sans-serif");
	ctx.set_text_align("center");
	for label in &frame.labels {
		let _ = ctx.fill_text(label.text, label.x, label.y);
	}
}

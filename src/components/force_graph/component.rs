use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, error};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, WheelEvent};

use super::interaction::wheel_factor;
use super::render;
use super::state::ForceGraphState;
use crate::graph::{GraphData, LayoutConfig};

const FRAME_DT: f32 = 0.016;

/// Pointer position in viewbox units. The canvas keeps a fixed logical size
/// and is scaled by CSS to its container width.
fn pointer_position(
	canvas: &HtmlCanvasElement,
	ev: &MouseEvent,
	width: f64,
	height: f64,
) -> (f64, f64) {
	let rect = canvas.get_bounding_client_rect();
	let (scale_x, scale_y) = (
		width / rect.width().max(1.0),
		height / rect.height().max(1.0),
	);
	(
		(ev.client_x() as f64 - rect.left()) * scale_x,
		(ev.client_y() as f64 - rect.top()) * scale_y,
	)
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas.get_context("2d").ok()??.dyn_into().ok()
}

/// Force-directed rendering of a derived company / field / role graph.
#[component]
pub fn ForceGraphCanvas(
	#[prop(into)] data: Signal<GraphData>,
	#[prop(default = LayoutConfig::default())] config: LayoutConfig,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: Rc<RefCell<Option<ForceGraphState>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (state_init, animate_init) = (state.clone(), animate.clone());
	let (width, height) = (config.width, config.height);

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		canvas.set_width(width as u32);
		canvas.set_height(height as u32);

		let Some(ctx) = context_2d(&canvas) else {
			error!("Canvas 2D context unavailable");
			return;
		};
		let graph = data.get();
		debug!(
			"Starting simulation with {} nodes and {} edges",
			graph.nodes.len(),
			graph.edges.len()
		);
		*state_init.borrow_mut() = Some(ForceGraphState::new(&graph, config.clone()));

		if animate_init.borrow().is_some() {
			return;
		}
		let (state_anim, animate_inner) = (state_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut s) = *state_anim.borrow_mut() {
				s.tick(FRAME_DT);
				render::render(s, &ctx);
			}
			if let (Some(window), Some(cb)) =
				(web_sys::window(), animate_inner.borrow().as_ref())
			{
				let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let (Some(window), Some(cb)) = (web_sys::window(), animate_init.borrow().as_ref()) {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let state_md = state.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let (x, y) = pointer_position(&canvas, &ev, width, height);

		if let Some(ref mut s) = *state_md.borrow_mut() {
			if let Some(idx) = s.node_at_position(x, y) {
				s.start_drag(idx);
			} else {
				s.pan.active = true;
				s.pan.start_x = x;
				s.pan.start_y = y;
				s.pan.transform_start_x = s.transform.x;
				s.pan.transform_start_y = s.transform.y;
			}
		}
	};

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let (x, y) = pointer_position(&canvas, &ev, width, height);

		if let Some(ref mut s) = *state_mm.borrow_mut() {
			if s.drag.is_active() {
				s.drag_to(x, y);
			} else if s.pan.active {
				let (tx, ty) = (
					s.pan.transform_start_x + (x - s.pan.start_x),
					s.pan.transform_start_y + (y - s.pan.start_y),
				);
				s.transform.translate_to(tx, ty);
			}
		}
	};

	let state_mu = state.clone();
	let on_mouseup = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_mu.borrow_mut() {
			s.end_drag();
			s.pan.active = false;
		}
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_ml.borrow_mut() {
			s.end_drag();
			s.pan.active = false;
		}
	};

	let state_wh = state.clone();
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let (x, y) = pointer_position(&canvas, &ev, width, height);

		if let Some(ref mut s) = *state_wh.borrow_mut() {
			s.transform.scale_about(wheel_factor(ev.delta_y()), x, y);
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="force-graph-canvas"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			on:wheel=on_wheel
			style=format!(
				"display: block; width: 100%; max-width: {width}px; height: auto; margin: auto; cursor: grab;"
			)
		/>
	}
}

use leptos::prelude::*;

use crate::components::force_graph::ForceGraphCanvas;
use crate::graph::load_graph;

/// Edge list served next to the app.
const DATA_URL: &str = "data.csv";

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let graph = LocalResource::new(|| load_graph(DATA_URL.to_string()));

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="graph-page">
				<h1>"Companies, Fields and Roles"</h1>
				<p class="subtitle">"Drag nodes to reposition. Scroll to zoom. Drag background to pan."</p>
				<div id="chart">
					<Suspense fallback=|| view! { <p class="loading">"Loading graph data..."</p> }>
						{move || {
							graph
								.get()
								.map(|result| {
									result
										.map(|data| {
											view! { <ForceGraphCanvas data=Signal::derive(move || data.clone()) /> }
										})
								})
						}}
					</Suspense>
				</div>
			</div>
		</ErrorBoundary>
	}
}

use leptos::prelude::*;
use log::{info, warn};

use crate::components::sankey::{FilterMode, SankeyCanvas, SankeyData, dataset, ingest};

/// Track table served next to the app bundle; the embedded table covers for
/// it when the fetch or the parse fails.
const TRACK_TABLE_URL: &str = "data/final_df_cleaned.csv";

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let (graph, set_graph) = signal(None::<SankeyData>);
	let (mode, set_mode) = signal(FilterMode::Top10);

	// One bulk fetch at startup. Every outcome resolves the signal, so the
	// canvas always mounts with something to draw.
	ehttp::fetch(ehttp::Request::get(TRACK_TABLE_URL), move |result| {
		let data = match result {
			Ok(response) if response.ok => {
				match ingest::graph_from_track_csv(response.text().unwrap_or_default()) {
					Ok(data) => {
						info!("Loaded track table from {TRACK_TABLE_URL}");
						data
					}
					Err(err) => {
						warn!("Track table unusable ({err}), using the embedded table");
						dataset::hit_flows()
					}
				}
			}
			Ok(response) => {
				warn!(
					"Track table fetch returned {} {}, using the embedded table",
					response.status, response.status_text
				);
				dataset::hit_flows()
			}
			Err(err) => {
				warn!("Track table fetch failed ({err}), using the embedded table");
				dataset::hit_flows()
			}
		};
		set_graph.set(Some(data));
	});

	// Dropdown entries come from the loaded graph, alphabetical.
	let genre_names = move || {
		let mut names: Vec<String> = graph
			.get()
			.map(|g| g.genre_names().map(str::to_owned).collect())
			.unwrap_or_default();
		names.sort();
		names
	};

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

			<div class="fullscreen-graph">
				{move || match graph.get() {
					Some(_) => {
						let data = Signal::derive(move || graph.get().unwrap_or_default());
						view! { <SankeyCanvas data=data mode=mode fullscreen=true /> }.into_any()
					}
					None => view! { <div class="loading">"Loading data..."</div> }.into_any(),
				}}
				<div class="graph-overlay">
					<h1>"Hit Song Flows"</h1>
					<p class="subtitle">
						"Where each platform's hit songs land, genre by genre. Hover a band or node for details, drag nodes to reposition."
					</p>
					<label for="genre-filter">"Show: "</label>
					<select
						id="genre-filter"
						prop:value=move || mode.get().control_value()
						on:change=move |ev| {
							set_mode.set(FilterMode::from_control_value(&event_target_value(&ev)));
						}
					>
						<option value="top10">"Top 10 Genres"</option>
						<option value="all">"All Genres"</option>
						{move || {
							genre_names()
								.into_iter()
								.map(|g| view! { <option value=g.clone()>{g.clone()}</option> })
								.collect_view()
						}}
					</select>
					<button on:click=move |_| set_mode.set(FilterMode::Top10)>"Reset"</button>
				</div>
			</div>
		</ErrorBoundary>
	}
}

//! WASM boundary for the dashboard.
//!
//! JSON strings cross the boundary in both directions, mirroring the wire
//! format of the fetch layer on the way in and of the flow-diagram widget on
//! the way out. Parsing failures degrade to the empty graph instead of
//! throwing into JS.

use log::warn;
use wasm_bindgen::prelude::*;

use crate::init_logging;
use crate::journey::{self, JourneyGraph, JourneyMode, RawJourney};

/// Serialized empty graph, the fallback for any boundary failure.
const EMPTY_GRAPH_JSON: &str = r#"{"nodes":[],"links":[]}"#;

/// Module entrypoint: install the console logger and panic hook once.
#[wasm_bindgen(start)]
pub fn start() {
	init_logging();
}

/// Run the full pipeline: raw journey JSON in, finalized graph JSON out.
///
/// `mode` is the journey tab label (`"Paths"` or `"Exceptions"`); unknown
/// labels fall back to `Paths`. Malformed input yields the empty graph.
#[wasm_bindgen]
pub fn transform_journey(raw_json: &str, mode: &str) -> String {
	let raw: RawJourney = match serde_json::from_str(raw_json) {
		Ok(raw) => raw,
		Err(e) => {
			warn!("journey-graph: failed to parse raw journey: {}", e);
			return EMPTY_GRAPH_JSON.to_string();
		}
	};

	to_json(&journey::transform(raw, JourneyMode::from_label(mode)))
}

/// Project the search subgraph of a previously finalized graph.
///
/// Called per keystroke; an empty or unmatched `query` returns the graph
/// unchanged. Malformed input yields the empty graph.
#[wasm_bindgen]
pub fn project_journey(graph_json: &str, query: &str) -> String {
	let graph: JourneyGraph = match serde_json::from_str(graph_json) {
		Ok(graph) => graph,
		Err(e) => {
			warn!("journey-graph: failed to parse finalized graph: {}", e);
			return EMPTY_GRAPH_JSON.to_string();
		}
	};

	to_json(&journey::project(&graph, query))
}

/// The raw demo storefront journey, for the dashboard's demo mode.
#[wasm_bindgen]
pub fn demo_journey() -> String {
	match serde_json::to_string(&journey::demo_journey()) {
		Ok(json) => json,
		Err(e) => {
			warn!("journey-graph: failed to serialize demo journey: {}", e);
			"{}".to_string()
		}
	}
}

fn to_json(graph: &JourneyGraph) -> String {
	match serde_json::to_string(graph) {
		Ok(json) => json,
		Err(e) => {
			warn!("journey-graph: failed to serialize journey graph: {}", e);
			EMPTY_GRAPH_JSON.to_string()
		}
	}
}

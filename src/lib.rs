//! journey-graph: journey graph construction for mobile-app observability
//! dashboards.
//!
//! This crate turns raw screen-to-screen session-transition telemetry into a
//! bounded, cycle-free, issue-annotated directed graph for a flow-diagram
//! widget, and projects connectivity-preserving subgraphs for live node
//! search. It ships to the dashboard as a WASM module; see [`wasm`] for the
//! boundary surface and [`journey`] for the pipeline itself.

use log::{Level, info};

pub mod journey;
pub mod wasm;

pub use journey::{
	Issue, JourneyGraph, JourneyLink, JourneyMode, JourneyNode, JourneyPalette, NODE_LIMIT,
	NodeIssues, RawJourney, RawLink, RawNode, TransformConfig, project, transform, transform_with,
};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("journey-graph: logging initialized");
}

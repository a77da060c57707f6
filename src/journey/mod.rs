//! Journey graph construction pipeline.
//!
//! Builds the flow diagram shown on the user-journeys dashboard from raw
//! screen-to-screen session-transition telemetry:
//! - edges commit in input order, dropping any edge that would close a
//!   directed cycle (the flow renderer requires a DAG)
//! - nodes rank issue-first, then by out-degree, capped to a size budget,
//!   and nodes left without links are dropped
//! - a live text query projects a connectivity-preserving subgraph of the
//!   finalized graph
//!
//! Every stage is a pure function. The finalized graph is recomputed from
//! scratch whenever the raw dataset or journey mode changes; the search
//! projection is recomputed per keystroke against the cached result.

pub mod color;
mod cycle;
pub mod demo;
mod rank;
pub mod search;
pub mod transform;
pub mod types;

pub use color::{Color, JourneyPalette};
pub use demo::demo_journey;
pub use search::project;
pub use transform::{NODE_LIMIT, TransformConfig, transform, transform_with};
pub use types::{
	Issue, JourneyGraph, JourneyLink, JourneyMode, JourneyNode, NodeIssues, RawJourney, RawLink,
	RawNode,
};

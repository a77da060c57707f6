//! Pipeline orchestration: raw journey dataset in, finalized graph out.
//!
//! Runs the stages in order — normalize, commit edges acyclically, rank and
//! cap the node set, assign display colors — and is recomputed from scratch
//! whenever the raw dataset or journey mode changes. Every stage is a pure
//! function of its inputs; nothing is cached here.

use log::info;

use super::color::JourneyPalette;
use super::cycle;
use super::rank;
use super::types::{JourneyGraph, JourneyLink, JourneyMode, JourneyNode, RawJourney};

/// Default cap on the number of nodes in a finalized journey graph.
pub const NODE_LIMIT: usize = 100;

/// Tuning for a transform run, owned by the caller. The pipeline itself
/// holds no state between runs.
#[derive(Clone, Debug)]
pub struct TransformConfig {
	/// Maximum number of nodes in the finalized graph.
	pub node_limit: usize,
	/// Node and link display colors.
	pub palette: JourneyPalette,
}

impl Default for TransformConfig {
	fn default() -> Self {
		Self {
			node_limit: NODE_LIMIT,
			palette: JourneyPalette::default(),
		}
	}
}

/// Build the finalized journey graph with the default configuration.
pub fn transform(raw: RawJourney, mode: JourneyMode) -> JourneyGraph {
	transform_with(raw, mode, &TransformConfig::default())
}

/// Build the finalized journey graph for `mode` under `config`.
///
/// In [`JourneyMode::Paths`] link start/end colors stay unset and the
/// renderer applies its own palette; in every other mode both link ends get
/// the neutral color so the node colors carry the emphasis.
pub fn transform_with(
	raw: RawJourney,
	mode: JourneyMode,
	config: &TransformConfig,
) -> JourneyGraph {
	// Absent collections are empty datasets, never an error.
	let raw_nodes = raw.nodes.unwrap_or_default();
	let raw_links = raw.links.unwrap_or_default();
	let (nodes_in, links_in) = (raw_nodes.len(), raw_links.len());

	let committed = cycle::commit_links(&raw_links);
	let (nodes, links) = rank::apply_budget(raw_nodes, committed, config.node_limit);

	let link_ends = match mode {
		JourneyMode::Paths => None,
		JourneyMode::Exceptions => Some(config.palette.neutral_link.to_css()),
	};

	let graph = JourneyGraph {
		nodes: nodes
			.into_iter()
			.map(|node| {
				let node_color = config.palette.node_color(node.has_issues()).to_css();
				JourneyNode {
					id: node.id,
					node_color,
					issues: node.issues,
				}
			})
			.collect(),
		links: links
			.into_iter()
			.map(|link| JourneyLink {
				source: link.source,
				target: link.target,
				value: link.value,
				start_color: link_ends.clone(),
				end_color: link_ends.clone(),
			})
			.collect(),
	};

	info!(
		"journey-graph: finalized {} of {} nodes, {} of {} links",
		graph.nodes.len(),
		nodes_in,
		graph.links.len(),
		links_in
	);

	graph
}

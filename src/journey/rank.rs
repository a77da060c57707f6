//! Node importance ranking under a size budget.
//!
//! The dashboard caps the journey at a fixed number of nodes. Screens
//! carrying crash or ANR issues outrank issue-free ones; within a bucket,
//! screens with more committed outgoing transitions come first. The sort is
//! stable, so ties keep their input order. After truncation, links are
//! restricted to surviving endpoints and nodes left without any link are
//! dropped.

use std::collections::HashSet;

use log::debug;

use super::cycle::CommittedLinks;
use super::types::{RawLink, RawNode};

/// Rank `nodes`, cap them at `limit`, and restrict the committed links to
/// the surviving set.
///
/// Returns the final node and link lists. Nodes that no final link
/// references are dropped, so zero committed links yields an empty graph no
/// matter how many nodes came in.
pub fn apply_budget(
	nodes: Vec<RawNode>,
	committed: CommittedLinks,
	limit: usize,
) -> (Vec<RawNode>, Vec<RawLink>) {
	let CommittedLinks { links, adjacency } = committed;

	let mut ranked: Vec<(RawNode, usize)> = nodes
		.into_iter()
		.map(|node| {
			let connections = adjacency.get(&node.id).map_or(0, Vec::len);
			(node, connections)
		})
		.collect();

	// Issue-bearing screens first, then by descending out-degree. The sort
	// is stable, so ties keep input order.
	ranked.sort_by(|a, b| {
		b.0.has_issues()
			.cmp(&a.0.has_issues())
			.then(b.1.cmp(&a.1))
	});
	if ranked.len() > limit {
		debug!(
			"journey-graph: capping journey to {} of {} nodes",
			limit,
			ranked.len()
		);
	}
	ranked.truncate(limit);

	let ranked_ids: HashSet<&str> = ranked.iter().map(|(node, _)| node.id.as_str()).collect();
	let final_links: Vec<RawLink> = links
		.into_iter()
		.filter(|l| {
			ranked_ids.contains(l.source.as_str()) && ranked_ids.contains(l.target.as_str())
		})
		.collect();

	// The node set is exactly what the final links reference; ranked nodes
	// that lost all their links drop out here.
	let linked_ids: HashSet<&str> = final_links
		.iter()
		.flat_map(|l| [l.source.as_str(), l.target.as_str()])
		.collect();
	let final_nodes: Vec<RawNode> = ranked
		.into_iter()
		.map(|(node, _)| node)
		.filter(|node| linked_ids.contains(node.id.as_str()))
		.collect();

	(final_nodes, final_links)
}

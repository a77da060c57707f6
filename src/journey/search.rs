//! Search-driven subgraph projection.
//!
//! While the user types into the node search box, the finalized graph is
//! narrowed to the screens whose id matches the query plus their direct
//! link neighbors, keeping every link between nodes of that set. The
//! projection is a pure, non-destructive transform recomputed per keystroke
//! against the cached finalized graph.

use std::collections::HashSet;

use super::types::JourneyGraph;

/// Project the subgraph of `graph` around nodes whose id contains `query`,
/// case-insensitively.
///
/// An empty or whitespace query, or a query matching no node, returns the
/// graph unchanged — a search that finds nothing never blanks the diagram.
/// The connected set extends exactly one hop from the matches: a node is
/// kept if it matches or shares a link with a match, and a link survives
/// only when both of its endpoints are kept.
pub fn project(graph: &JourneyGraph, query: &str) -> JourneyGraph {
	let query = query.trim();
	if query.is_empty() {
		return graph.clone();
	}

	let needle = query.to_lowercase();
	let matches: HashSet<&str> = graph
		.nodes
		.iter()
		.filter(|node| node.id.to_lowercase().contains(&needle))
		.map(|node| node.id.as_str())
		.collect();

	if matches.is_empty() {
		return graph.clone();
	}

	// One hop out: whatever sits on the far side of a link touching a match.
	let mut connected = matches.clone();
	for link in &graph.links {
		if matches.contains(link.source.as_str()) {
			connected.insert(link.target.as_str());
		}
		if matches.contains(link.target.as_str()) {
			connected.insert(link.source.as_str());
		}
	}

	JourneyGraph {
		nodes: graph
			.nodes
			.iter()
			.filter(|node| connected.contains(node.id.as_str()))
			.cloned()
			.collect(),
		links: graph
			.links
			.iter()
			.filter(|link| {
				connected.contains(link.source.as_str())
					&& connected.contains(link.target.as_str())
			})
			.cloned()
			.collect(),
	}
}

#[cfg(test)]
mod tests {
	use super::super::types::{JourneyLink, JourneyNode};
	use super::*;

	fn node(id: &str) -> JourneyNode {
		JourneyNode {
			id: id.to_string(),
			node_color: "#059467".to_string(),
			issues: None,
		}
	}

	fn link(source: &str, target: &str) -> JourneyLink {
		JourneyLink {
			source: source.to_string(),
			target: target.to_string(),
			value: 1,
			start_color: None,
			end_color: None,
		}
	}

	fn ids(graph: &JourneyGraph) -> Vec<&str> {
		graph.nodes.iter().map(|n| n.id.as_str()).collect()
	}

	/// a → b → c → d, in a line.
	fn chain() -> JourneyGraph {
		JourneyGraph {
			nodes: vec![node("alpha"), node("bravo"), node("charlie"), node("delta")],
			links: vec![
				link("alpha", "bravo"),
				link("bravo", "charlie"),
				link("charlie", "delta"),
			],
		}
	}

	#[test]
	fn empty_query_returns_the_graph_unchanged() {
		let graph = chain();
		assert_eq!(project(&graph, ""), graph);
		assert_eq!(project(&graph, "   "), graph);
	}

	#[test]
	fn unmatched_query_falls_back_to_the_full_graph() {
		let graph = chain();
		assert_eq!(project(&graph, "zulu"), graph);
	}

	#[test]
	fn matching_is_case_insensitive_substring() {
		let graph = chain();
		assert_eq!(ids(&project(&graph, "BRAV")), vec!["alpha", "bravo", "charlie"]);
	}

	/// The projection reaches one hop from the match, never two.
	#[test]
	fn projection_stops_at_one_hop() {
		let graph = chain();
		let projected = project(&graph, "bravo");

		assert_eq!(ids(&projected), vec!["alpha", "bravo", "charlie"]);
		let kept: Vec<_> = projected
			.links
			.iter()
			.map(|l| (l.source.as_str(), l.target.as_str()))
			.collect();
		assert_eq!(kept, vec![("alpha", "bravo"), ("bravo", "charlie")]);
	}

	/// Links between two one-hop neighbors survive along with the match's
	/// own links.
	#[test]
	fn links_between_neighbors_survive() {
		let graph = JourneyGraph {
			nodes: vec![node("alpha"), node("bravo"), node("charlie")],
			links: vec![
				link("alpha", "bravo"),
				link("alpha", "charlie"),
				link("charlie", "bravo"),
			],
		};

		let projected = project(&graph, "alpha");
		assert_eq!(ids(&projected), vec!["alpha", "bravo", "charlie"]);
		assert_eq!(projected.links.len(), 3);
	}

	/// Multiple matches project the union of their neighborhoods.
	#[test]
	fn multiple_matches_union_their_neighborhoods() {
		let graph = JourneyGraph {
			nodes: vec![
				node("alpha-1"),
				node("alpha-2"),
				node("bravo"),
				node("charlie"),
				node("delta"),
			],
			links: vec![
				link("alpha-1", "bravo"),
				link("alpha-2", "charlie"),
				link("charlie", "delta"),
			],
		};

		let projected = project(&graph, "alpha");
		assert_eq!(
			ids(&projected),
			vec!["alpha-1", "alpha-2", "bravo", "charlie"]
		);
	}

	/// Node order of the finalized graph is preserved in the projection.
	#[test]
	fn projection_preserves_node_order() {
		let graph = chain();
		let projected = project(&graph, "charlie");
		assert_eq!(ids(&projected), vec!["bravo", "charlie", "delta"]);
	}
}

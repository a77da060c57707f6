//! Data model for the journey pipeline.
//!
//! Raw types mirror the wire format produced by the journey fetch layer;
//! finalized types mirror what the flow-diagram widget consumes. Field names
//! are camelCase on the wire.

use log::warn;
use serde::{Deserialize, Serialize};

/// A single crash or ANR group attributed to a screen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
	/// Issue group identifier.
	pub id: String,
	/// Human-readable issue title.
	pub title: String,
	/// Number of occurrences within the queried window.
	pub count: u64,
}

/// Crash and ANR issue groups attached to a screen.
///
/// Either list may be absent on the wire; both default to empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeIssues {
	/// Crash groups.
	#[serde(default)]
	pub crashes: Vec<Issue>,
	/// ANR (application-not-responding) groups.
	#[serde(default)]
	pub anrs: Vec<Issue>,
}

impl NodeIssues {
	/// True if at least one crash or ANR group is present.
	pub fn any(&self) -> bool {
		!self.crashes.is_empty() || !self.anrs.is_empty()
	}

	/// Total crash occurrences across all groups.
	pub fn crash_count(&self) -> u64 {
		self.crashes.iter().map(|issue| issue.count).sum()
	}

	/// Total ANR occurrences across all groups.
	pub fn anr_count(&self) -> u64 {
		self.anrs.iter().map(|issue| issue.count).sum()
	}
}

/// A screen in the raw journey dataset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawNode {
	/// Fully-qualified screen/activity identifier, unique per journey.
	pub id: String,
	/// Issues attributed to this screen. Absent in journey modes that do
	/// not annotate issues; an explicit no-issues state, not a default.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub issues: Option<NodeIssues>,
}

impl RawNode {
	/// True if this screen carries at least one crash or ANR issue.
	pub fn has_issues(&self) -> bool {
		self.issues.as_ref().is_some_and(NodeIssues::any)
	}
}

/// A screen-to-screen transition in the raw journey dataset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawLink {
	/// Source node id.
	pub source: String,
	/// Target node id.
	pub target: String,
	/// Number of sessions that took this transition.
	pub value: u64,
}

/// Raw journey dataset as handed over by the fetch layer.
///
/// `links` and `nodes` may be JSON `null` or missing entirely; both degrade
/// to empty collections instead of raising an error.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawJourney {
	/// Transitions, possibly absent.
	#[serde(default)]
	pub links: Option<Vec<RawLink>>,
	/// Screens, possibly absent.
	#[serde(default)]
	pub nodes: Option<Vec<RawNode>>,
	/// Total issue count across the journey, as reported by the backend.
	#[serde(default)]
	pub total_issues: u64,
}

/// Journey rendering mode, selected by the dashboard's plot-type tab.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum JourneyMode {
	/// Session path exploration; the renderer applies its own link palette.
	Paths,
	/// Exception-focused journeys; link ends are neutral so that problem
	/// nodes stand out.
	Exceptions,
}

impl JourneyMode {
	/// Parse a mode from its tab label.
	///
	/// Unknown labels fall back to [`JourneyMode::Paths`] with a warning.
	pub fn from_label(label: &str) -> Self {
		match label {
			"Paths" => Self::Paths,
			"Exceptions" => Self::Exceptions,
			other => {
				warn!(
					"journey-graph: unknown journey mode {:?}, defaulting to Paths",
					other
				);
				Self::Paths
			}
		}
	}
}

/// A node in the finalized journey graph.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyNode {
	/// Fully-qualified screen/activity identifier.
	pub id: String,
	/// CSS display color; issue-bearing screens get a distinct color from
	/// issue-free ones.
	pub node_color: String,
	/// Issues carried over from the raw node, if any.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub issues: Option<NodeIssues>,
}

/// A link in the finalized journey graph.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyLink {
	/// Source node id.
	pub source: String,
	/// Target node id.
	pub target: String,
	/// Number of sessions that took this transition.
	pub value: u64,
	/// Link start color; unset in [`JourneyMode::Paths`] so the renderer
	/// picks from its own palette.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub start_color: Option<String>,
	/// Link end color; unset in [`JourneyMode::Paths`].
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub end_color: Option<String>,
}

/// Finalized journey graph: acyclic, size-bounded, with no isolated nodes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JourneyGraph {
	/// Nodes, in ranked order.
	pub nodes: Vec<JourneyNode>,
	/// Links, in committed input order.
	pub links: Vec<JourneyLink>,
}

impl JourneyGraph {
	/// True when there is nothing to display and the dashboard should show
	/// its no-data state.
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn null_collections_parse_to_empty() {
		let raw: RawJourney =
			serde_json::from_str(r#"{"links":null,"nodes":null,"totalIssues":5}"#)
				.expect("parses");
		assert_eq!(raw.links, None);
		assert_eq!(raw.nodes, None);
		assert_eq!(raw.total_issues, 5);
	}

	#[test]
	fn absent_fields_parse_to_defaults() {
		let raw: RawJourney = serde_json::from_str("{}").expect("parses");
		assert_eq!(raw, RawJourney::default());
	}

	#[test]
	fn node_without_issues_field_has_no_issues() {
		let node: RawNode = serde_json::from_str(r#"{"id":"com.app.MainActivity"}"#)
			.expect("parses");
		assert_eq!(node.issues, None);
		assert!(!node.has_issues());
	}

	#[test]
	fn present_but_empty_issue_lists_count_as_no_issues() {
		let node: RawNode = serde_json::from_str(
			r#"{"id":"com.app.MainActivity","issues":{"crashes":[],"anrs":[]}}"#,
		)
		.expect("parses");
		assert!(node.issues.is_some());
		assert!(!node.has_issues());
	}

	#[test]
	fn issue_totals_sum_occurrence_counts() {
		let issues: NodeIssues = serde_json::from_str(
			r#"{
				"crashes": [
					{"id": "c1", "title": "NullPointerException", "count": 12},
					{"id": "c2", "title": "IllegalStateException", "count": 3}
				],
				"anrs": [
					{"id": "a1", "title": "Input dispatching timed out", "count": 7}
				]
			}"#,
		)
		.expect("parses");
		assert!(issues.any());
		assert_eq!(issues.crash_count(), 15);
		assert_eq!(issues.anr_count(), 7);
	}

	#[test]
	fn mode_labels_parse_with_paths_fallback() {
		assert_eq!(JourneyMode::from_label("Paths"), JourneyMode::Paths);
		assert_eq!(JourneyMode::from_label("Exceptions"), JourneyMode::Exceptions);
		assert_eq!(JourneyMode::from_label("Timeline"), JourneyMode::Paths);
	}

	#[test]
	fn finalized_node_serializes_camel_case_and_omits_absent_issues() {
		let node = JourneyNode {
			id: "com.app.MainActivity".to_string(),
			node_color: "#059467".to_string(),
			issues: None,
		};
		let json = serde_json::to_string(&node).expect("serializes");
		assert!(json.contains(r##""nodeColor":"#059467""##));
		assert!(!json.contains("issues"));
	}

	#[test]
	fn finalized_link_omits_unset_end_colors() {
		let link = JourneyLink {
			source: "a".to_string(),
			target: "b".to_string(),
			value: 3,
			start_color: None,
			end_color: None,
		};
		let json = serde_json::to_string(&link).expect("serializes");
		assert!(!json.contains("startColor"));
		assert!(!json.contains("endColor"));

		let link = JourneyLink {
			start_color: Some("#cfcfcf".to_string()),
			end_color: Some("#cfcfcf".to_string()),
			..link
		};
		let json = serde_json::to_string(&link).expect("serializes");
		assert!(json.contains(r##""startColor":"#cfcfcf""##));
		assert!(json.contains(r##""endColor":"#cfcfcf""##));
	}
}

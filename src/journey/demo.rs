//! Canned journey dataset for the dashboard's demo mode.
//!
//! A small storefront app journey with fully-qualified activity ids,
//! back-navigation transitions that exercise the cycle guard, and crash/ANR
//! annotations on the checkout path. Deterministic, so demo pages and tests
//! always see the same graph.

use super::types::{Issue, NodeIssues, RawJourney, RawLink, RawNode};

const PKG: &str = "com.acme.storefront";

fn activity(name: &str) -> String {
	format!("{}.{}", PKG, name)
}

fn node(name: &str, issues: Option<NodeIssues>) -> RawNode {
	RawNode {
		id: activity(name),
		issues,
	}
}

fn link(source: &str, target: &str, value: u64) -> RawLink {
	RawLink {
		source: activity(source),
		target: activity(target),
		value,
	}
}

/// The demo storefront journey, in raw (pre-transform) form.
///
/// The link list deliberately contains back-navigation transitions
/// (product detail back to the list, order confirmation back home) that
/// would close cycles; the pipeline drops them while keeping the forward
/// flow intact.
pub fn demo_journey() -> RawJourney {
	let checkout_issues = NodeIssues {
		crashes: vec![Issue {
			id: "7d1f9c42".to_string(),
			title: "java.lang.NullPointerException: CheckoutSummaryView.bind".to_string(),
			count: 41,
		}],
		anrs: Vec::new(),
	};
	let payment_issues = NodeIssues {
		crashes: Vec::new(),
		anrs: vec![Issue {
			id: "b83aa1e0".to_string(),
			title: "Input dispatching timed out (PaymentActivity)".to_string(),
			count: 17,
		}],
	};

	RawJourney {
		nodes: Some(vec![
			node("MainActivity", None),
			node("LoginActivity", None),
			node("ProductListActivity", Some(NodeIssues::default())),
			node("ProductDetailActivity", None),
			node("SearchActivity", None),
			node("CartActivity", None),
			node("CheckoutActivity", Some(checkout_issues)),
			node("PaymentActivity", Some(payment_issues)),
			node("OrderConfirmationActivity", None),
			node("ProfileActivity", None),
			node("SettingsActivity", None),
		]),
		links: Some(vec![
			link("LoginActivity", "MainActivity", 260),
			link("MainActivity", "ProductListActivity", 1800),
			link("MainActivity", "SearchActivity", 950),
			link("MainActivity", "ProfileActivity", 310),
			link("ProductListActivity", "ProductDetailActivity", 1500),
			// Back navigation; closes a cycle and gets dropped.
			link("ProductDetailActivity", "ProductListActivity", 400),
			link("SearchActivity", "ProductDetailActivity", 720),
			link("ProductDetailActivity", "CartActivity", 980),
			link("CartActivity", "CheckoutActivity", 640),
			link("ProductDetailActivity", "CheckoutActivity", 120),
			link("MainActivity", "CheckoutActivity", 45),
			link("CheckoutActivity", "PaymentActivity", 590),
			link("PaymentActivity", "OrderConfirmationActivity", 545),
			// Back home after purchase; closes a cycle and gets dropped.
			link("OrderConfirmationActivity", "MainActivity", 430),
			link("ProfileActivity", "SettingsActivity", 140),
		]),
		total_issues: 58,
	}
}

//! Shared fixtures for integration tests.

use std::path::PathBuf;

use route_breadcrumbs::routing::{BreadcrumbItem, RouteNode, RouteTree};

/// Leaf breadcrumb with a target.
pub fn link(label: &str, target: &str) -> BreadcrumbItem {
    BreadcrumbItem::new(label, Some(target.to_string()))
}

/// Inert category breadcrumb.
pub fn label(label: &str) -> BreadcrumbItem {
    BreadcrumbItem::new(label, None)
}

/// A small console tree built in code.
#[allow(dead_code)]
pub fn console_tree() -> RouteTree {
    RouteTree::new(vec![
        RouteNode::new("home").with_title("Home"),
        RouteNode::new("items").with_title("Items").with_children(vec![
            RouteNode::new(":id").with_title("Item Detail"),
        ]),
        RouteNode::new("admin").with_children(vec![
            RouteNode::new("audit").with_title("Audit log"),
            RouteNode::new("/reports").with_title("Reports"),
        ]),
    ])
}

/// Path of the route tree shipped at the repository root.
#[allow(dead_code)]
pub fn shipped_config() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("routes.toml")
}

//! Breadcrumb resolution.
//!
//! # Responsibilities
//! - Walk the route tree against the current location
//! - Collect titled nodes along the matching branch, root first
//! - Return an empty trail when nothing matches
//!
//! # Design Decisions
//! - Depth-first, declaration order, first match wins
//! - A match anywhere ends the whole search (no ranking of candidates)
//! - Group nodes are never navigable from their own breadcrumb
//! - Targets keep their parameter markers; substitution is opt-in

use serde::Serialize;

use crate::routing::matcher::{PathTemplate, RouteParams, PARAM_SIGIL};
use crate::routing::tree::{compose_path, RouteNode, RouteTree, SEPARATOR};

/// One rendered step of the trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreadcrumbItem {
    pub label: String,

    /// Composed template of a leaf node. `None` marks an inert category label.
    pub target: Option<String>,
}

impl BreadcrumbItem {
    pub fn new(label: impl Into<String>, target: Option<String>) -> Self {
        Self {
            label: label.into(),
            target,
        }
    }

    pub fn is_navigable(&self) -> bool {
        self.target.is_some()
    }

    /// The target with every marker replaced by its captured value.
    ///
    /// Markers without a captured value are left as written.
    pub fn concrete_target(&self, params: &RouteParams) -> Option<String> {
        let target = self.target.as_deref()?;
        let substituted: Vec<String> = target
            .split(SEPARATOR)
            .map(|fragment| match fragment.split_once(PARAM_SIGIL) {
                Some((prefix, name)) if !name.is_empty() => match params.get(name) {
                    Some(value) => format!("{prefix}{value}"),
                    None => fragment.to_string(),
                },
                _ => fragment.to_string(),
            })
            .collect();
        Some(substituted.join(SEPARATOR.to_string().as_str()))
    }
}

/// Root-first sequence of breadcrumb items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BreadcrumbTrail {
    items: Vec<BreadcrumbItem>,
}

impl BreadcrumbTrail {
    pub fn items(&self) -> &[BreadcrumbItem] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BreadcrumbItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Last entry, the one describing the current location.
    pub fn current(&self) -> Option<&BreadcrumbItem> {
        self.items.last()
    }
}

impl From<Vec<BreadcrumbItem>> for BreadcrumbTrail {
    fn from(items: Vec<BreadcrumbItem>) -> Self {
        Self { items }
    }
}

impl IntoIterator for BreadcrumbTrail {
    type Item = BreadcrumbItem;
    type IntoIter = std::vec::IntoIter<BreadcrumbItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a BreadcrumbTrail {
    type Item = &'a BreadcrumbItem;
    type IntoIter = std::slice::Iter<'a, BreadcrumbItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Outcome of a successful resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub trail: BreadcrumbTrail,

    /// Values captured by the matching node's template.
    pub params: RouteParams,
}

/// Resolve the breadcrumb trail for a location.
///
/// Never fails: an unmatched location yields an empty trail.
pub fn resolve_breadcrumbs(tree: &RouteTree, location: &str) -> BreadcrumbTrail {
    resolve(tree, location)
        .map(|resolution| resolution.trail)
        .unwrap_or_default()
}

/// Resolve a location, keeping the captured parameters of the matching node.
pub fn resolve(tree: &RouteTree, location: &str) -> Option<Resolution> {
    let mut trail = Vec::new();
    let resolution = walk(tree.routes(), "", &mut trail, location);
    if resolution.is_none() {
        tracing::trace!(location, "no route matched");
    }
    resolution
}

/// Try each sibling in order. `trail` holds the accumulated entries of the
/// ancestors and is restored before returning `None`.
fn walk(
    nodes: &[RouteNode],
    parent: &str,
    trail: &mut Vec<BreadcrumbItem>,
    location: &str,
) -> Option<Resolution> {
    for node in nodes {
        let composed = compose_path(parent, &node.segment);

        let pushed = match &node.title {
            Some(title) => {
                let target = node.is_leaf().then(|| composed.clone());
                trail.push(BreadcrumbItem::new(title.clone(), target));
                true
            }
            None => false,
        };

        if let Some(params) = PathTemplate::parse(&composed).captures(location) {
            tracing::trace!(
                location,
                template = %composed,
                depth = trail.len(),
                "route matched"
            );
            return Some(Resolution {
                trail: BreadcrumbTrail::from(std::mem::take(trail)),
                params,
            });
        }

        if node.is_group() {
            if let Some(resolution) = walk(node.children(), &composed, trail, location) {
                return Some(resolution);
            }
        }

        if pushed {
            trail.pop();
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> RouteTree {
        RouteTree::new(vec![
            RouteNode::new("items").with_title("Items").with_children(vec![
                RouteNode::new("new").with_title("New item"),
                RouteNode::new(":id").with_title("Item Detail"),
            ]),
        ])
    }

    #[test]
    fn test_literal_before_param() {
        let trail = resolve_breadcrumbs(&catalog(), "/items/new");
        assert_eq!(
            trail.items(),
            &[
                BreadcrumbItem::new("Items", None),
                BreadcrumbItem::new("New item", Some("/items/new".into())),
            ]
        );
    }

    #[test]
    fn test_trail_restored_after_failed_subtree() {
        let tree = RouteTree::new(vec![
            RouteNode::new("a")
                .with_title("A")
                .with_child(RouteNode::new("x").with_title("AX")),
            RouteNode::new("b").with_title("B"),
        ]);

        let trail = resolve_breadcrumbs(&tree, "/b");
        assert_eq!(trail.items(), &[BreadcrumbItem::new("B", Some("/b".into()))]);
    }

    #[test]
    fn test_empty_children_list_is_not_navigable() {
        let tree = RouteTree::new(vec![
            RouteNode::new("x").with_title("X").with_children(Vec::new()),
            RouteNode::new("x/y").with_title("XY"),
        ]);

        assert_eq!(
            resolve_breadcrumbs(&tree, "/x").items(),
            &[BreadcrumbItem::new("X", None)]
        );
        // Nothing to walk below an empty list; the next sibling still matches.
        assert_eq!(
            resolve_breadcrumbs(&tree, "/x/y").items(),
            &[BreadcrumbItem::new("XY", Some("/x/y".into()))]
        );
    }

    #[test]
    fn test_resolution_params() {
        let resolution = resolve(&catalog(), "/items/42").unwrap();
        assert_eq!(resolution.params.get("id"), Some("42"));

        let current = resolution.trail.current().unwrap();
        assert_eq!(current.target.as_deref(), Some("/items/:id"));
        assert_eq!(
            current.concrete_target(&resolution.params).as_deref(),
            Some("/items/42")
        );
    }

    #[test]
    fn test_concrete_target_keeps_unknown_markers() {
        let item = BreadcrumbItem::new("Order", Some("/shops/:shop/orders/:order".into()));
        let resolution = resolve(
            &RouteTree::new(vec![RouteNode::new("/shops/:shop").with_title("Shop")]),
            "/shops/9",
        )
        .unwrap();
        assert_eq!(
            item.concrete_target(&resolution.params).as_deref(),
            Some("/shops/9/orders/:order")
        );

        let inert = BreadcrumbItem::new("Orders", None);
        assert_eq!(inert.concrete_target(&resolution.params), None);
    }

    #[test]
    fn test_unmatched_is_none() {
        assert!(resolve(&catalog(), "/nowhere").is_none());
        assert!(resolve_breadcrumbs(&catalog(), "/nowhere").is_empty());
    }
}

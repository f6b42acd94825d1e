//! Route tree data model.
//!
//! # Responsibilities
//! - Describe every navigable location as an ordered tree of segments
//! - Derive composed path templates from parent path + segment
//! - Flatten the tree for auditing declaration order
//!
//! # Design Decisions
//! - Built once at startup, never mutated afterwards
//! - Passed by reference into every resolution; no global registry
//! - Sibling order is part of the configuration (first match wins)

use serde::{Deserialize, Serialize};

/// Path separator used by composed templates and locations.
pub const SEPARATOR: char = '/';

/// One entry in the route tree.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RouteNode {
    /// Path fragment. Absolute when it starts with `/`.
    #[serde(alias = "path", default)]
    pub segment: String,

    /// Label shown in the breadcrumb trail. Untitled nodes are structural only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Nested routes, tried in declaration order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<RouteNode>>,
}

impl RouteNode {
    pub fn new(segment: impl Into<String>) -> Self {
        Self {
            segment: segment.into(),
            title: None,
            children: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Append a child, turning this node into a group.
    pub fn with_child(mut self, child: RouteNode) -> Self {
        self.children.get_or_insert_with(Vec::new).push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = RouteNode>) -> Self {
        self.children
            .get_or_insert_with(Vec::new)
            .extend(children);
        self
    }

    /// Children of this node, empty for leaves.
    pub fn children(&self) -> &[RouteNode] {
        self.children.as_deref().unwrap_or_default()
    }

    /// A group node has at least one child.
    pub fn is_group(&self) -> bool {
        !self.children().is_empty()
    }

    /// A leaf declares no `children` at all. A node with an empty list is
    /// neither a leaf nor a group: it is not navigable and has nothing to walk.
    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }
}

/// The ordered top-level sibling list of the application's routes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct RouteTree {
    routes: Vec<RouteNode>,
}

impl RouteTree {
    pub fn new(routes: Vec<RouteNode>) -> Self {
        Self { routes }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn routes(&self) -> &[RouteNode] {
        &self.routes
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Total number of nodes at every depth.
    pub fn node_count(&self) -> usize {
        fn count(nodes: &[RouteNode]) -> usize {
            nodes.iter().map(|n| 1 + count(n.children())).sum()
        }
        count(&self.routes)
    }

    /// Flatten the tree depth-first, in declaration order.
    pub fn entries(&self) -> Vec<RouteEntry> {
        let mut out = Vec::new();
        collect_entries(&self.routes, "", 0, &mut out);
        out
    }
}

impl From<Vec<RouteNode>> for RouteTree {
    fn from(routes: Vec<RouteNode>) -> Self {
        Self::new(routes)
    }
}

/// A flattened view of one node and its composed template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteEntry {
    pub path: String,
    pub title: Option<String>,
    pub depth: usize,
    pub is_group: bool,
}

fn collect_entries(nodes: &[RouteNode], parent: &str, depth: usize, out: &mut Vec<RouteEntry>) {
    for node in nodes {
        let path = compose_path(parent, &node.segment);
        out.push(RouteEntry {
            path: path.clone(),
            title: node.title.clone(),
            depth,
            is_group: node.is_group(),
        });
        collect_entries(node.children(), &path, depth + 1, out);
    }
}

/// Derive a node's composed path template from its parent's.
///
/// Absolute segments replace the parent path. Runs of separators collapse to
/// one and a trailing separator is dropped, except for the root `/`.
pub fn compose_path(parent: &str, segment: &str) -> String {
    let joined = if segment.starts_with(SEPARATOR) {
        segment.to_string()
    } else {
        format!("{parent}{SEPARATOR}{segment}")
    };

    let mut composed = String::with_capacity(joined.len());
    for ch in joined.chars() {
        if ch == SEPARATOR && composed.ends_with(SEPARATOR) {
            continue;
        }
        composed.push(ch);
    }

    if composed.len() > 1 && composed.ends_with(SEPARATOR) {
        composed.pop();
    }
    composed
}

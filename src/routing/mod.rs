//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Current location ("/items/42")
//!     → breadcrumb.rs (depth-first walk of the route tree)
//!     → tree.rs (compose each node's path template)
//!     → matcher.rs (anchored match against the location)
//!     → Return: BreadcrumbTrail, empty on no match
//!
//! Route Tree (at startup):
//!     code builders or [[routes]] tables from config
//!     → RouteTree (immutable)
//!     → passed by reference into every resolution
//! ```
//!
//! # Design Decisions
//! - Route tree built at startup, immutable at runtime
//! - No regex in hot path (fragment comparison only)
//! - Deterministic: same input always yields the same trail
//! - First match wins (declaration order)

pub mod breadcrumb;
pub mod matcher;
pub mod tree;

pub use breadcrumb::{resolve, resolve_breadcrumbs, BreadcrumbItem, BreadcrumbTrail, Resolution};
pub use matcher::{normalize_location, Matcher, PathTemplate, RouteParams};
pub use tree::{compose_path, RouteEntry, RouteNode, RouteTree};

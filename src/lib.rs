//! Route-tree breadcrumb resolver for the admin console navigation bar.

pub mod config;
pub mod observability;
pub mod routing;

pub use config::schema::AppConfig;
pub use routing::{resolve, resolve_breadcrumbs, BreadcrumbItem, BreadcrumbTrail, RouteNode, RouteTree};

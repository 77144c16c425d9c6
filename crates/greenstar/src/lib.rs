//! # Greenstar
//!
//! The pieces behind a small personal blog: the application shell that maps
//! URLs to views, and a singly linked list kept alongside it as a
//! data-structure exercise.
//!
//! ## Architecture
//!
//! - **List**: a chain of boxed nodes with indexed add/get/set/remove
//! - **Router**: path patterns (`/post/:type/:id`, catch-all), ranking,
//!   redirects, base path, history
//! - **Views**: the components the route table points at
//! - **Site**: blog content and configuration (JSON via serde)
//! - **App**: plugin registration, mounting, navigation and rendering
//!
//! Everything is single-threaded and synchronous.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod app;
pub mod error;
pub mod list;
pub mod router;
pub mod site;
pub mod view;

// Re-export main types
pub use app::{App, Page, Plugin, Stylesheets};
pub use error::{AppError, GreenstarError, ListError, Result, RouteError, SiteError};
pub use list::LinkedList;
pub use router::{
    History, ParamValue, ResolvedRoute, RouteParams, RoutePattern, RouteRecord, RouteTarget,
    Router, Segment, MAX_REDIRECTS,
};
pub use site::{Post, SiteConfig};
pub use view::View;

/// Greenstar version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

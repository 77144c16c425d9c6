//! Error types for greenstar

use thiserror::Error;

/// Errors raised by [`LinkedList`](crate::list::LinkedList) operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    /// The index does not name a node in the chain
    #[error("Index out of bounds: index {index}, size {size}")]
    IndexOutOfBounds {
        /// Requested index
        index: usize,
        /// Size of the list at the time of the request
        size: usize,
    },
}

/// Errors raised while parsing route patterns or resolving locations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// Malformed route pattern
    #[error("Invalid route pattern {pattern:?}: {reason}")]
    InvalidPattern {
        /// The offending pattern
        pattern: String,
        /// What is wrong with it
        reason: String,
    },

    /// No route matched and the table has no catch-all
    #[error("No route matches {path:?}")]
    NoMatch {
        /// The requested path
        path: String,
    },

    /// Redirects did not settle within the hop limit
    #[error("Redirect loop while resolving {path:?} (more than {max} hops)")]
    RedirectLoop {
        /// The originally requested path
        path: String,
        /// Hop limit
        max: usize,
    },

    /// `href` was asked for a route name that is not in the table
    #[error("Unknown route name: {0}")]
    UnknownRouteName(String),

    /// `href` was not given a parameter the pattern needs
    #[error("Missing parameter {param:?} for route {route:?}")]
    MissingParam {
        /// Route name
        route: String,
        /// Parameter name
        param: String,
    },
}

/// Errors raised while loading or validating site configuration.
#[derive(Error, Debug)]
pub enum SiteError {
    /// Config file could not be read
    #[error("Failed to read site config: {0}")]
    Io(#[from] std::io::Error),

    /// Config document is not valid JSON for a site
    #[error("Failed to parse site config: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two posts share an id
    #[error("Duplicate post id: {0}")]
    DuplicatePostId(u32),

    /// Base URL must be an absolute path
    #[error("Invalid base URL {0:?}: must start with '/'")]
    InvalidBaseUrl(String),
}

/// Errors raised by the application lifecycle and rendering.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// Operation requires an unmounted app
    #[error("Application is already mounted on {0}")]
    AlreadyMounted(String),

    /// Operation requires a mounted app
    #[error("Application is not mounted")]
    NotMounted,

    /// Mount selector is not an id selector
    #[error("Invalid mount target {0:?}: expected an id selector like \"#app\"")]
    InvalidMountTarget(String),

    /// Mount or navigation without an installed router
    #[error("No router installed")]
    NoRouter,

    /// A route parameter could not be interpreted by its view
    #[error("Invalid value {value:?} for parameter {param:?}")]
    InvalidParam {
        /// Parameter name
        param: String,
        /// Raw value
        value: String,
    },

    /// The Post view referenced a post that does not exist
    #[error("Post not found: {0}")]
    PostNotFound(u32),

    /// History has no entry in the requested direction
    #[error("No history entry to go {0}")]
    NoHistory(&'static str),

    /// Route resolution failed
    #[error(transparent)]
    Route(#[from] RouteError),
}

/// Main error type for greenstar operations
#[derive(Error, Debug)]
pub enum GreenstarError {
    /// Linked list error
    #[error(transparent)]
    List(#[from] ListError),

    /// Routing error
    #[error(transparent)]
    Route(#[from] RouteError),

    /// Site configuration error
    #[error(transparent)]
    Site(#[from] SiteError),

    /// Application error
    #[error(transparent)]
    App(#[from] AppError),
}

/// Result type alias for greenstar operations
pub type Result<T> = std::result::Result<T, GreenstarError>;

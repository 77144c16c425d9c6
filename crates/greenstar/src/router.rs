//! Client-side router: a route table mapping path patterns to views

mod history;
mod params;
mod pattern;

pub use history::History;
pub use params::{ParamValue, RouteParams};
pub use pattern::{RoutePattern, Segment};

use tracing::debug;

use crate::error::RouteError;
use crate::view::View;

use pattern::{percent_encode_segment, split_segments};

/// Maximum number of redirects followed by a single resolution.
pub const MAX_REDIRECTS: usize = 10;

/// What a matched route leads to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteTarget {
    /// Render a view
    View(View),

    /// Resolve another location instead
    Redirect(String),
}

/// One row of the route table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRecord {
    pattern: RoutePattern,
    name: Option<String>,
    target: RouteTarget,
}

impl RouteRecord {
    /// A route rendering `view`.
    pub fn view(pattern: &str, view: View) -> Result<Self, RouteError> {
        Ok(Self {
            pattern: RoutePattern::parse(pattern)?,
            name: None,
            target: RouteTarget::View(view),
        })
    }

    /// A route redirecting to `to`.
    pub fn redirect(pattern: &str, to: impl Into<String>) -> Result<Self, RouteError> {
        Ok(Self {
            pattern: RoutePattern::parse(pattern)?,
            name: None,
            target: RouteTarget::Redirect(to.into()),
        })
    }

    /// Give the route a name usable with [`Router::href`].
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The route's pattern.
    pub fn pattern(&self) -> &RoutePattern {
        &self.pattern
    }

    /// The route's name, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Where the route leads.
    pub fn target(&self) -> &RouteTarget {
        &self.target
    }
}

/// The outcome of resolving a location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRoute {
    /// View to render
    pub view: View,

    /// Normalized path that matched (base stripped, no trailing slash)
    pub path: String,

    /// Pattern of the matched route
    pub matched: String,

    /// Name of the matched route
    pub name: Option<String>,

    /// Captured parameters
    pub params: RouteParams,

    /// Raw query string, without `?`
    pub query: Option<String>,

    /// Fragment, without `#`
    pub hash: Option<String>,

    /// First path that was redirected, if any redirect happened
    pub redirected_from: Option<String>,
}

impl ResolvedRoute {
    /// Path with query and fragment re-attached, base not included.
    pub fn full_path(&self) -> String {
        let mut full = self.path.clone();
        if let Some(query) = &self.query {
            full.push('?');
            full.push_str(query);
        }
        if let Some(hash) = &self.hash {
            full.push('#');
            full.push_str(hash);
        }
        full
    }
}

/// A location split into path, query and fragment.
struct Location {
    path: String,
    query: Option<String>,
    hash: Option<String>,
}

impl Location {
    fn parse(raw: &str) -> Self {
        let (rest, hash) = match raw.split_once('#') {
            Some((rest, hash)) => (rest, Some(hash.to_string())),
            None => (raw, None),
        };
        let (path, query) = match rest.split_once('?') {
            Some((path, query)) => (path, Some(query.to_string())),
            None => (rest, None),
        };
        let path = format!("/{}", split_segments(path).collect::<Vec<_>>().join("/"));
        Self { path, query, hash }
    }
}

/// The route table plus the base path it is served under.
///
/// # Example
///
/// ```
/// use greenstar::{Router, View};
///
/// let router = Router::blog("/").unwrap();
///
/// let post = router.resolve("/post/algorithm/1").unwrap();
/// assert_eq!(post.view, View::Post);
/// assert_eq!(post.params.get_str("id"), Some("1"));
///
/// let lost = router.resolve("/no/such/page").unwrap();
/// assert_eq!(lost.view, View::Home);
/// assert_eq!(lost.redirected_from.as_deref(), Some("/no/such/page"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Router {
    /// Base path without trailing slash; empty for `/`
    base: String,
    routes: Vec<RouteRecord>,
}

impl Router {
    /// Create an empty router served under `base`.
    pub fn new(base: &str) -> Self {
        let trimmed = base.trim_matches('/');
        let base = if trimmed.is_empty() {
            String::new()
        } else {
            format!("/{}", trimmed)
        };
        Self {
            base,
            routes: Vec::new(),
        }
    }

    /// The blog's route table.
    pub fn blog(base: &str) -> Result<Self, RouteError> {
        Ok(Self::new(base)
            .with_route(RouteRecord::view("/", View::Home)?.named("home"))
            .with_route(RouteRecord::view("/algorithm/:type", View::Algorithm)?)
            .with_route(RouteRecord::view("/webdev/:type", View::WebDev)?)
            .with_route(RouteRecord::view("/db/:type", View::Database)?)
            .with_route(RouteRecord::view("/portfolio/:id", View::Portfolio)?)
            .with_route(RouteRecord::redirect("/:pathMatch(.*)*", "/")?)
            .with_route(RouteRecord::view("/post/:type/:id", View::Post)?))
    }

    /// Add a route (builder style).
    pub fn with_route(mut self, record: RouteRecord) -> Self {
        self.add_route(record);
        self
    }

    /// Add a route.
    pub fn add_route(&mut self, record: RouteRecord) {
        self.routes.push(record);
    }

    /// Base path, `/` when served from the root.
    pub fn base(&self) -> &str {
        if self.base.is_empty() {
            "/"
        } else {
            &self.base
        }
    }

    /// Routes in declaration order.
    pub fn routes(&self) -> &[RouteRecord] {
        &self.routes
    }

    /// Prefix a router-relative path with the base, so that [`resolve`]
    /// maps it back to the same route.
    ///
    /// [`resolve`]: Self::resolve
    pub fn with_base(&self, path: &str) -> String {
        match (self.base.is_empty(), path) {
            (true, _) => path.to_string(),
            (false, "/") => self.base.clone(),
            (false, _) => format!("{}{}", self.base, path),
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Resolution
    // ═══════════════════════════════════════════════════════════════════

    /// Resolve a location to the view it renders.
    ///
    /// The base path is stripped, then the highest-ranked matching route
    /// wins; routes of equal rank keep declaration order. Redirects are
    /// followed up to [`MAX_REDIRECTS`] times.
    ///
    /// # Errors
    ///
    /// - `NoMatch` if no route matches (only possible without a catch-all)
    /// - `RedirectLoop` if redirects do not settle
    pub fn resolve(&self, location: &str) -> Result<ResolvedRoute, RouteError> {
        let mut loc = Location::parse(self.strip_base(location));
        let mut redirected_from: Option<String> = None;

        for _ in 0..=MAX_REDIRECTS {
            let (record, params) =
                self.best_match(&loc.path)
                    .ok_or_else(|| RouteError::NoMatch {
                        path: loc.path.clone(),
                    })?;

            match &record.target {
                RouteTarget::View(view) => {
                    debug!(
                        location,
                        path = %loc.path,
                        pattern = %record.pattern,
                        view = %view,
                        "Resolved route"
                    );
                    return Ok(ResolvedRoute {
                        view: *view,
                        path: loc.path,
                        matched: record.pattern.as_str().to_string(),
                        name: record.name.clone(),
                        params,
                        query: loc.query,
                        hash: loc.hash,
                        redirected_from,
                    });
                }
                RouteTarget::Redirect(to) => {
                    debug!(from = %loc.path, to = %to, "Following redirect");
                    // A target without its own query or fragment keeps ours
                    let mut next = Location::parse(to);
                    if next.query.is_none() {
                        next.query = loc.query.take();
                    }
                    if next.hash.is_none() {
                        next.hash = loc.hash.take();
                    }
                    redirected_from.get_or_insert(loc.path);
                    loc = next;
                }
            }
        }

        Err(RouteError::RedirectLoop {
            path: location.to_string(),
            max: MAX_REDIRECTS,
        })
    }

    /// Build the full path (base included) for a named route.
    ///
    /// Single parameters are percent-encoded; a catch-all value is
    /// inserted as given and may be omitted.
    pub fn href(&self, name: &str, params: &RouteParams) -> Result<String, RouteError> {
        let record = self
            .routes
            .iter()
            .find(|r| r.name.as_deref() == Some(name))
            .ok_or_else(|| RouteError::UnknownRouteName(name.to_string()))?;

        let mut parts = Vec::new();
        for segment in record.pattern.segments() {
            match segment {
                Segment::Static(text) => parts.push(text.clone()),
                Segment::Param(param) => {
                    let value = params
                        .get(param)
                        .ok_or_else(|| RouteError::MissingParam {
                            route: name.to_string(),
                            param: param.clone(),
                        })?;
                    parts.push(percent_encode_segment(&value.to_string()));
                }
                Segment::CatchAll(param) => {
                    if let Some(value) = params.get(param) {
                        let value = value.to_string();
                        if !value.is_empty() {
                            parts.push(value.trim_matches('/').to_string());
                        }
                    }
                }
            }
        }

        let path = parts.join("/");
        Ok(match (self.base.is_empty(), path.is_empty()) {
            (true, _) => format!("/{}", path),
            (false, true) => self.base.clone(),
            (false, false) => format!("{}/{}", self.base, path),
        })
    }

    fn strip_base<'a>(&self, location: &'a str) -> &'a str {
        if self.base.is_empty() {
            return location;
        }
        match location.strip_prefix(self.base.as_str()) {
            Some("") => "/",
            Some(rest) if rest.starts_with(['/', '?', '#']) => rest,
            _ => location,
        }
    }

    fn best_match(&self, path: &str) -> Option<(&RouteRecord, RouteParams)> {
        let parts: Vec<&str> = split_segments(path).collect();
        let mut best: Option<(&RouteRecord, RouteParams)> = None;

        for record in &self.routes {
            let Some(params) = record.pattern.match_segments(&parts) else {
                continue;
            };
            let better = match &best {
                Some((current, _)) => record.pattern.score() > current.pattern.score(),
                None => true,
            };
            if better {
                best = Some((record, params));
            }
        }

        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_normalizes_base() {
        assert_eq!(Router::new("").base(), "/");
        assert_eq!(Router::new("/").base(), "/");
        assert_eq!(Router::new("blog/").base(), "/blog");
        assert_eq!(Router::new("/blog/").base(), "/blog");
    }

    #[test]
    fn test_location_parse_splits_query_and_hash() {
        let loc = Location::parse("/db/sql/?page=2#top");
        assert_eq!(loc.path, "/db/sql");
        assert_eq!(loc.query.as_deref(), Some("page=2"));
        assert_eq!(loc.hash.as_deref(), Some("top"));

        let bare = Location::parse("webdev//vue");
        assert_eq!(bare.path, "/webdev/vue");
        assert_eq!(bare.query, None);
    }

    #[test]
    fn test_strip_base() {
        let router = Router::new("/blog");
        assert_eq!(router.strip_base("/blog"), "/");
        assert_eq!(router.strip_base("/blog/db/x"), "/db/x");
        assert_eq!(router.strip_base("/blog?x=1"), "?x=1");
        assert_eq!(router.strip_base("/blogger"), "/blogger");
        assert_eq!(router.strip_base("/db/x"), "/db/x");
    }

    #[test]
    fn test_with_base_round_trips_through_strip_base() {
        let router = Router::new("/post");
        assert_eq!(router.with_base("/"), "/post");
        assert_eq!(router.with_base("/post/webdev/1"), "/post/post/webdev/1");
        assert_eq!(router.strip_base(&router.with_base("/post/webdev/1")), "/post/webdev/1");
        assert_eq!(router.strip_base(&router.with_base("/?x=1")), "/?x=1");
        assert_eq!(Router::new("/").with_base("/db/x"), "/db/x");
    }

    #[test]
    fn test_equal_rank_keeps_declaration_order() {
        let router = Router::new("/")
            .with_route(RouteRecord::view("/:a", View::Portfolio).unwrap())
            .with_route(RouteRecord::view("/:b", View::Post).unwrap());
        assert_eq!(router.resolve("/x").unwrap().view, View::Portfolio);
    }

    #[test]
    fn test_redirect_loop_is_reported() {
        let router = Router::new("/")
            .with_route(RouteRecord::redirect("/a", "/b").unwrap())
            .with_route(RouteRecord::redirect("/b", "/a").unwrap());
        assert_eq!(
            router.resolve("/a"),
            Err(RouteError::RedirectLoop {
                path: "/a".into(),
                max: MAX_REDIRECTS
            })
        );
    }

    #[test]
    fn test_no_match_without_catch_all() {
        let router = Router::new("/").with_route(RouteRecord::view("/", View::Home).unwrap());
        assert_eq!(
            router.resolve("/missing"),
            Err(RouteError::NoMatch {
                path: "/missing".into()
            })
        );
    }
}

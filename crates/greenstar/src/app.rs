//! Application bootstrap: plugins, mounting, navigation and rendering

use tracing::{debug, info, warn};

use crate::error::AppError;
use crate::router::{History, ResolvedRoute, RouteParams, Router};
use crate::site::SiteConfig;
use crate::view::View;

/// An extension installed into an [`App`] before it is mounted.
pub trait Plugin {
    /// Unique plugin name; a second plugin with the same name is ignored.
    fn name(&self) -> &str;

    /// Register the plugin with the app.
    fn install(self, app: &mut App) -> Result<(), AppError>;
}

impl Plugin for Router {
    fn name(&self) -> &str {
        "router"
    }

    fn install(self, app: &mut App) -> Result<(), AppError> {
        app.router = Some(self);
        Ok(())
    }
}

/// Global stylesheets loaded before the app renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stylesheets(pub Vec<String>);

impl Default for Stylesheets {
    fn default() -> Self {
        Self(vec![
            "bootstrap/dist/css/bootstrap.min.css".to_string(),
            "highlight.js/styles/github-dark.css".to_string(),
        ])
    }
}

impl Plugin for Stylesheets {
    fn name(&self) -> &str {
        "stylesheets"
    }

    fn install(self, app: &mut App) -> Result<(), AppError> {
        app.stylesheets.extend(self.0);
        Ok(())
    }
}

/// A rendered view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Rendered view
    pub view: View,

    /// Path that was rendered (after redirects)
    pub path: String,

    /// Rendered path with query and fragment, base not included
    pub full_path: String,

    /// Page title
    pub title: String,

    /// Route parameters
    pub params: RouteParams,

    /// Body lines
    pub body: Vec<String>,

    /// Original path when the navigation was redirected
    pub redirected_from: Option<String>,
}

/// The application: site content, installed plugins and mount state.
///
/// # Example
///
/// ```
/// use greenstar::{App, SiteConfig, View};
///
/// let mut app = App::blog(SiteConfig::default()).unwrap();
/// let home = app.mount("#app").unwrap();
/// assert_eq!(home.view, View::Home);
///
/// let post = app.navigate("/post/webdev/2").unwrap();
/// assert_eq!(post.title, "두 번째 글");
///
/// let back = app.back().unwrap();
/// assert_eq!(back.view, View::Home);
/// ```
#[derive(Debug)]
pub struct App {
    site: SiteConfig,
    router: Option<Router>,
    plugins: Vec<String>,
    stylesheets: Vec<String>,
    mount_point: Option<String>,
    history: History,
}

impl App {
    /// Create an app with no plugins.
    pub fn new(site: SiteConfig) -> Self {
        Self {
            site,
            router: None,
            plugins: Vec::new(),
            stylesheets: Vec::new(),
            mount_point: None,
            history: History::new(),
        }
    }

    /// Create the blog app: stylesheets plus the blog route table served
    /// under the site's base URL.
    pub fn blog(site: SiteConfig) -> Result<Self, AppError> {
        let router = Router::blog(&site.base_url)?;
        let mut app = Self::new(site);
        app.use_plugin(Stylesheets::default())?
            .use_plugin(router)?;
        Ok(app)
    }

    // ═══════════════════════════════════════════════════════════════════
    // Lifecycle
    // ═══════════════════════════════════════════════════════════════════

    /// Install a plugin. Plugins install in call order.
    ///
    /// # Errors
    ///
    /// - `AlreadyMounted` once the app is mounted
    /// - whatever the plugin's `install` returns
    pub fn use_plugin<P: Plugin>(&mut self, plugin: P) -> Result<&mut Self, AppError> {
        if let Some(target) = &self.mount_point {
            return Err(AppError::AlreadyMounted(target.clone()));
        }

        let name = plugin.name().to_string();
        if self.plugins.contains(&name) {
            warn!(plugin = %name, "Plugin already installed, ignoring");
            return Ok(self);
        }

        plugin.install(self)?;
        debug!(plugin = %name, "Installed plugin");
        self.plugins.push(name);
        Ok(self)
    }

    /// Mount the app on an id selector and render the initial location.
    ///
    /// # Errors
    ///
    /// - `AlreadyMounted` if called twice
    /// - `InvalidMountTarget` unless `selector` looks like `#id`
    /// - `NoRouter` if no router plugin was installed
    pub fn mount(&mut self, selector: &str) -> Result<Page, AppError> {
        if let Some(target) = &self.mount_point {
            return Err(AppError::AlreadyMounted(target.clone()));
        }
        let valid = selector
            .strip_prefix('#')
            .is_some_and(|id| !id.is_empty() && !id.contains(char::is_whitespace));
        if !valid {
            return Err(AppError::InvalidMountTarget(selector.to_string()));
        }
        if self.router.is_none() {
            return Err(AppError::NoRouter);
        }

        self.mount_point = Some(selector.to_string());
        info!(selector, plugins = ?self.plugins, "Mounted app");
        self.navigate("/")
    }

    /// Check if the app is mounted.
    pub fn is_mounted(&self) -> bool {
        self.mount_point.is_some()
    }

    /// The mount selector, once mounted.
    pub fn mount_point(&self) -> Option<&str> {
        self.mount_point.as_deref()
    }

    // ═══════════════════════════════════════════════════════════════════
    // Navigation
    // ═══════════════════════════════════════════════════════════════════

    /// Navigate to `location`, record it in history and render it.
    ///
    /// History stores the full location, base included, so that `back`
    /// and `forward` resolve it exactly like the original request.
    pub fn navigate(&mut self, location: &str) -> Result<Page, AppError> {
        self.ensure_mounted()?;
        let router = self.router.as_ref().ok_or(AppError::NoRouter)?;
        let page = self.render(location)?;
        self.history.push(router.with_base(&page.full_path));
        Ok(page)
    }

    /// Go back one history entry and render it.
    pub fn back(&mut self) -> Result<Page, AppError> {
        self.ensure_mounted()?;
        let location = self
            .history
            .back()
            .ok_or(AppError::NoHistory("back"))?
            .to_string();
        self.render(&location)
    }

    /// Go forward one history entry and render it.
    pub fn forward(&mut self) -> Result<Page, AppError> {
        self.ensure_mounted()?;
        let location = self
            .history
            .forward()
            .ok_or(AppError::NoHistory("forward"))?
            .to_string();
        self.render(&location)
    }

    /// Resolve and render `location` without touching history.
    pub fn render(&self, location: &str) -> Result<Page, AppError> {
        let router = self.router.as_ref().ok_or(AppError::NoRouter)?;
        let resolved = router.resolve(location)?;
        self.render_resolved(resolved)
    }

    fn render_resolved(&self, resolved: ResolvedRoute) -> Result<Page, AppError> {
        let full_path = resolved.full_path();
        let ResolvedRoute {
            view,
            path,
            params,
            redirected_from,
            ..
        } = resolved;

        let (title, body) = match view {
            View::Home => (
                self.site.title.clone(),
                self.site
                    .posts
                    .iter()
                    .map(|p| format!("#{} {}", p.id, p.title))
                    .collect(),
            ),
            View::Algorithm | View::WebDev | View::Database => {
                let category = params.get_str("type").unwrap_or_default();
                let body: Vec<String> = self
                    .site
                    .posts_in(category)
                    .map(|p| format!("#{} {}", p.id, p.title))
                    .collect();
                let body = if body.is_empty() {
                    vec!["No posts yet.".to_string()]
                } else {
                    body
                };
                (view.title(&params), body)
            }
            View::Portfolio => (view.title(&params), Vec::new()),
            View::Post => {
                let raw = params.get_str("id").unwrap_or_default();
                let id: u32 = raw.parse().map_err(|_| AppError::InvalidParam {
                    param: "id".to_string(),
                    value: raw.to_string(),
                })?;
                let post = self.site.post(id).ok_or(AppError::PostNotFound(id))?;
                (post.title.clone(), vec![post.content.clone()])
            }
        };

        Ok(Page {
            view,
            path,
            full_path,
            title,
            params,
            body,
            redirected_from,
        })
    }

    fn ensure_mounted(&self) -> Result<(), AppError> {
        if self.is_mounted() {
            Ok(())
        } else {
            Err(AppError::NotMounted)
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Inspection
    // ═══════════════════════════════════════════════════════════════════

    /// Site content.
    pub fn site(&self) -> &SiteConfig {
        &self.site
    }

    /// The installed router.
    pub fn router(&self) -> Option<&Router> {
        self.router.as_ref()
    }

    /// Installed plugin names, in installation order.
    pub fn plugins(&self) -> &[String] {
        &self.plugins
    }

    /// Registered stylesheets, in registration order.
    pub fn stylesheets(&self) -> &[String] {
        &self.stylesheets
    }

    /// Navigation history.
    pub fn history(&self) -> &History {
        &self.history
    }
}

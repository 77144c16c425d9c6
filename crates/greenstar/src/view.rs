//! Views rendered for matched routes

use std::fmt;

use serde::Serialize;

use crate::router::RouteParams;

/// The view components the blog's route table points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    /// Landing page listing every post
    Home,

    /// Algorithm notes, by topic (`:type`)
    Algorithm,

    /// Web development notes, by topic (`:type`)
    WebDev,

    /// Database notes, by topic (`:type`)
    Database,

    /// A portfolio entry (`:id`)
    Portfolio,

    /// A single post (`:type`, `:id`)
    Post,
}

impl View {
    /// Every view, in route table order.
    pub const ALL: [View; 6] = [
        View::Home,
        View::Algorithm,
        View::WebDev,
        View::Database,
        View::Portfolio,
        View::Post,
    ];

    /// Component name, e.g. `"AlgorithmView"`.
    pub fn component_name(self) -> &'static str {
        match self {
            View::Home => "HomeView",
            View::Algorithm => "AlgorithmView",
            View::WebDev => "WebDevView",
            View::Database => "DatabaseView",
            View::Portfolio => "PortfolioView",
            View::Post => "PostView",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            View::Home => "Home",
            View::Algorithm => "Algorithm",
            View::WebDev => "Web Dev",
            View::Database => "Database",
            View::Portfolio => "Portfolio",
            View::Post => "Post",
        }
    }

    /// Whether this view lists posts of the `:type` category.
    pub fn is_category(self) -> bool {
        matches!(self, View::Algorithm | View::WebDev | View::Database)
    }

    /// Page title for this view with the given params.
    ///
    /// ```
    /// use greenstar::{RouteParams, View};
    ///
    /// let params: RouteParams = [("type", "sorting")].into_iter().collect();
    /// assert_eq!(View::Algorithm.title(&params), "Algorithm · sorting");
    /// ```
    pub fn title(self, params: &RouteParams) -> String {
        let detail: Vec<String> = match self {
            View::Home => Vec::new(),
            View::Algorithm | View::WebDev | View::Database => {
                params.get("type").map(ToString::to_string).into_iter().collect()
            }
            View::Portfolio => params.get("id").map(ToString::to_string).into_iter().collect(),
            View::Post => ["type", "id"]
                .iter()
                .filter_map(|name| params.get(name).map(ToString::to_string))
                .collect(),
        };

        std::iter::once(self.label().to_string())
            .chain(detail)
            .collect::<Vec<_>>()
            .join(" · ")
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.component_name())
    }
}

//! Route table tests

use greenstar::*;
use pretty_assertions::assert_eq;

fn blog() -> Router {
    Router::blog("/").unwrap()
}

// ═══════════════════════════════════════════════════════════════════════
// Route Table
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_every_route_resolves_to_its_view() {
    let router = blog();
    let cases = [
        ("/", View::Home),
        ("/algorithm/sorting", View::Algorithm),
        ("/webdev/vue", View::WebDev),
        ("/db/mysql", View::Database),
        ("/portfolio/greenstar", View::Portfolio),
        ("/post/algorithm/1", View::Post),
    ];
    for (path, view) in cases {
        let resolved = router.resolve(path).unwrap();
        assert_eq!(resolved.view, view, "{path}");
        assert_eq!(resolved.redirected_from, None, "{path}");
    }
}

#[test]
fn test_route_table_shape() {
    let router = blog();
    let patterns: Vec<&str> = router.routes().iter().map(|r| r.pattern().as_str()).collect();
    assert_eq!(
        patterns,
        vec![
            "/",
            "/algorithm/:type",
            "/webdev/:type",
            "/db/:type",
            "/portfolio/:id",
            "/:pathMatch(.*)*",
            "/post/:type/:id",
        ]
    );
    assert_eq!(router.routes()[0].name(), Some("home"));
    assert_eq!(
        router.routes()[5].target(),
        &RouteTarget::Redirect("/".to_string())
    );
}

#[test]
fn test_params_are_captured() {
    let resolved = blog().resolve("/post/db/42").unwrap();
    assert_eq!(resolved.params.get_str("type"), Some("db"));
    assert_eq!(resolved.params.get_str("id"), Some("42"));
    assert_eq!(resolved.matched, "/post/:type/:id");
}

#[test]
fn test_post_route_beats_earlier_catch_all() {
    let resolved = blog().resolve("/post/webdev/2").unwrap();
    assert_eq!(resolved.view, View::Post);
}

// ═══════════════════════════════════════════════════════════════════════
// Fallback
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_unknown_paths_redirect_home() {
    let router = blog();
    for path in ["/nope", "/algorithm", "/post/only-type", "/portfolio/1/extra"] {
        let resolved = router.resolve(path).unwrap();
        assert_eq!(resolved.view, View::Home, "{path}");
        assert_eq!(resolved.path, "/");
        assert_eq!(resolved.redirected_from.as_deref(), Some(path));
        assert_eq!(resolved.name.as_deref(), Some("home"));
    }
}

#[test]
fn test_redirect_keeps_query_and_hash() {
    let resolved = blog().resolve("/nope?x=1#h").unwrap();
    assert_eq!(resolved.view, View::Home);
    assert_eq!(resolved.redirected_from.as_deref(), Some("/nope"));
    assert_eq!(resolved.query.as_deref(), Some("x=1"));
    assert_eq!(resolved.hash.as_deref(), Some("h"));
    assert_eq!(resolved.full_path(), "/?x=1#h");
}

#[test]
fn test_redirect_target_query_wins() {
    let router = Router::new("/")
        .with_route(RouteRecord::view("/", View::Home).unwrap())
        .with_route(RouteRecord::redirect("/old", "/?from=old").unwrap());

    let resolved = router.resolve("/old?x=1#h").unwrap();
    assert_eq!(resolved.view, View::Home);
    assert_eq!(resolved.query.as_deref(), Some("from=old"));
    assert_eq!(resolved.hash.as_deref(), Some("h"));
}

// ═══════════════════════════════════════════════════════════════════════
// Normalization
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_trailing_slash_query_and_hash() {
    let resolved = blog().resolve("/webdev/vue/?page=2#comments").unwrap();
    assert_eq!(resolved.view, View::WebDev);
    assert_eq!(resolved.path, "/webdev/vue");
    assert_eq!(resolved.query.as_deref(), Some("page=2"));
    assert_eq!(resolved.hash.as_deref(), Some("comments"));
}

#[test]
fn test_params_are_percent_decoded() {
    let resolved = blog().resolve("/algorithm/dynamic%20programming").unwrap();
    assert_eq!(resolved.params.get_str("type"), Some("dynamic programming"));
}

#[test]
fn test_static_segments_ignore_case() {
    assert_eq!(blog().resolve("/DB/postgres").unwrap().view, View::Database);
}

#[test]
fn test_base_path_is_stripped() {
    let router = Router::blog("/greenstar-front/").unwrap();
    assert_eq!(router.base(), "/greenstar-front");

    let resolved = router.resolve("/greenstar-front/db/redis").unwrap();
    assert_eq!(resolved.view, View::Database);
    assert_eq!(resolved.path, "/db/redis");

    assert_eq!(router.resolve("/greenstar-front").unwrap().view, View::Home);
}

// ═══════════════════════════════════════════════════════════════════════
// Named Routes
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_href_for_named_routes() {
    let router = Router::new("/blog")
        .with_route(RouteRecord::view("/", View::Home).unwrap().named("home"))
        .with_route(
            RouteRecord::view("/post/:type/:id", View::Post)
                .unwrap()
                .named("post"),
        );

    assert_eq!(router.href("home", &RouteParams::new()), Ok("/blog".to_string()));

    let params: RouteParams = [("type", "web dev"), ("id", "7")].into_iter().collect();
    let href = router.href("post", &params).unwrap();
    assert_eq!(href, "/blog/post/web%20dev/7");

    let resolved = router.resolve(&href).unwrap();
    assert_eq!(resolved.params.get_str("type"), Some("web dev"));
}

#[test]
fn test_href_errors() {
    let router = Router::new("/").with_route(
        RouteRecord::view("/portfolio/:id", View::Portfolio)
            .unwrap()
            .named("portfolio"),
    );
    assert_eq!(
        router.href("missing", &RouteParams::new()),
        Err(RouteError::UnknownRouteName("missing".into()))
    );
    assert_eq!(
        router.href("portfolio", &RouteParams::new()),
        Err(RouteError::MissingParam {
            route: "portfolio".into(),
            param: "id".into()
        })
    );
}

#[test]
fn test_href_with_catch_all() {
    let router = Router::new("/").with_route(
        RouteRecord::view("/docs/:rest(.*)*", View::Home)
            .unwrap()
            .named("docs"),
    );
    let mut params = RouteParams::new();
    params.insert(
        "rest",
        ParamValue::Repeated(vec!["guide".into(), "intro".into()]),
    );
    assert_eq!(router.href("docs", &params), Ok("/docs/guide/intro".to_string()));
    assert_eq!(router.href("docs", &RouteParams::new()), Ok("/docs".to_string()));
}

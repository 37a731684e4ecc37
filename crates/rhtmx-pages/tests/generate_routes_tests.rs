//! Integration tests for rhtmx-pages
//!
//! Tests are organized by feature area and cover:
//! - Static, index, dynamic and catch-all paths
//! - Nesting under shared-prefix routes
//! - Finalization (names, relative child paths, props)
//! - The extend_route hook
//! - Options and configuration
//! - JSON output for client routers

use pretty_assertions::assert_eq;
use rhtmx_pages::*;
use rstest::rstest;
use serde_json::json;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

fn generate(files: &[&'static str]) -> Vec<Route<&'static str>> {
    init_tracing();
    generate_routes(files.iter().map(|file| (*file, *file)), None).unwrap()
}

fn walk<'a>(routes: &'a [Route<&'static str>], out: &mut Vec<&'a Route<&'static str>>) {
    for route in routes {
        out.push(route);
        walk(route.children(), out);
    }
}

fn all_routes<'a>(routes: &'a [Route<&'static str>]) -> Vec<&'a Route<&'static str>> {
    let mut out = Vec::new();
    walk(routes, &mut out);
    out
}

// ============================================================================
// Single page paths
// ============================================================================

#[rstest]
#[case("./pages/index.vue", Some("index"), "/")]
#[case("./pages/about.vue", Some("about"), "/about")]
#[case("./pages/blog/posts.md", Some("blog-posts"), "/blog/posts")]
#[case("./pages/users/index.vue", Some("users"), "/users")]
#[case("./pages/users/[id].vue", Some("users-id"), "/users/:id?")]
#[case("./pages/[team]/members.vue", Some("team-members"), "/:team/members")]
#[case("./pages/docs/[...slug].md", Some("docs-slug"), "/docs/:slug(.*)")]
#[case("./pages/a/index/b.vue", Some("a-index-b"), "/a/b")]
#[case("./pages/Blog/[PostId].vue", Some("blog-postid"), "/blog/:postid?")]
fn test_single_page(
    #[case] file: &'static str,
    #[case] name: Option<&str>,
    #[case] path: &str,
) {
    let routes = generate(&[file]);

    assert_eq!(routes.len(), 1);
    assert_eq!(routes[0].name.as_deref(), name);
    assert_eq!(routes[0].path, path);
    assert_eq!(routes[0].component, file);
    assert!(routes[0].props);
    assert!(routes[0].children.is_none());
}

#[test]
fn test_unrelated_pages_stay_top_level() {
    let routes = generate(&[
        "./pages/about.vue",
        "./pages/blog/posts.vue",
        "./pages/contact.md",
    ]);

    let paths: Vec<&str> = routes.iter().map(|route| route.path.as_str()).collect();
    assert_eq!(paths, vec!["/about", "/blog/posts", "/contact"]);
}

#[test]
fn test_unmatched_pages_dir_is_a_literal_segment() {
    let routes = generate(&["./views/about.vue"]);
    assert_eq!(routes[0].path, "/./views/about");
    assert_eq!(routes[0].name.as_deref(), Some(".-views-about"));
}

#[test]
fn test_non_page_extension_is_kept() {
    let routes = generate(&["./pages/feed.xml"]);
    assert_eq!(routes[0].path, "/feed.xml");
}

// ============================================================================
// Nesting
// ============================================================================

#[test]
fn test_users_section_nests_under_users_page() {
    let routes = generate(&[
        "./pages/index.vue",
        "./pages/users.vue",
        "./pages/users/[id].vue",
        "./pages/users/index.vue",
    ]);

    let expected: Vec<Route<&'static str>> = vec![
        Route {
            name: Some("index".to_string()),
            path: "/".to_string(),
            component: "./pages/index.vue",
            children: None,
            props: true,
            meta: None,
        },
        Route {
            name: None,
            path: "/users".to_string(),
            component: "./pages/users.vue",
            children: Some(vec![
                Route {
                    name: Some("users-id".to_string()),
                    path: ":id".to_string(),
                    component: "./pages/users/[id].vue",
                    children: None,
                    props: true,
                    meta: None,
                },
                Route {
                    name: Some("users".to_string()),
                    path: "".to_string(),
                    component: "./pages/users/index.vue",
                    children: None,
                    props: true,
                    meta: None,
                },
            ]),
            props: true,
            meta: None,
        },
    ];

    assert_eq!(routes, expected);
}

#[test]
fn test_shared_prefix_yields_single_parent() {
    let routes = generate(&[
        "./pages/settings.vue",
        "./pages/settings/profile.vue",
        "./pages/settings/billing.vue",
    ]);

    assert_eq!(routes.len(), 1);
    let children: Vec<&str> = routes[0]
        .children()
        .iter()
        .map(|child| child.path.as_str())
        .collect();
    assert_eq!(children, vec!["profile", "billing"]);
}

#[test]
fn test_parent_must_precede_children() {
    // Children seen before their parent cannot nest under it.
    let routes = generate(&["./pages/users/[id].vue", "./pages/users.vue"]);

    assert_eq!(routes.len(), 2);
    assert!(routes.iter().all(|route| route.children.is_none()));
}

#[test]
fn test_nested_catch_all_and_dynamic_children() {
    let routes = generate(&[
        "./pages/docs.vue",
        "./pages/docs/[...slug].md",
        "./pages/docs/[version]/changelog.md",
    ]);

    let children = routes[0].children();
    assert_eq!(children[0].path, ":slug(.*)");
    assert_eq!(children[1].path, ":version/changelog");
    assert_eq!(children[1].name.as_deref(), Some("docs-version-changelog"));
}

#[test]
fn test_three_levels() {
    let routes = generate(&[
        "./pages/admin.vue",
        "./pages/admin/users.vue",
        "./pages/admin/users/[id].vue",
        "./pages/admin/users/[id]/edit.vue",
    ]);

    let admin = &routes[0];
    let users = &admin.children()[0];
    let user_routes: Vec<(Option<&str>, &str)> = users
        .children()
        .iter()
        .map(|route| (route.name.as_deref(), route.path.as_str()))
        .collect();

    assert_eq!(admin.name, None);
    assert_eq!(users.name, None);
    assert_eq!(users.path, "users");
    // `[id]/edit` nests under the `[id]` page, which then loses its name
    assert_eq!(user_routes, vec![(None::<&str>, ":id")]);
    assert_eq!(
        users.children()[0].children()[0].name.as_deref(),
        Some("admin-users-id-edit")
    );
    assert_eq!(users.children()[0].children()[0].path, "edit");
}

// ============================================================================
// Finalization properties
// ============================================================================

const SITE: &[&str] = &[
    "./pages/index.vue",
    "./pages/about.md",
    "./pages/blog.vue",
    "./pages/blog/index.vue",
    "./pages/blog/[slug].vue",
    "./pages/blog/tags/[tag].vue",
    "./pages/docs/[...path].md",
    "./pages/account.vue",
    "./pages/account/settings.vue",
    "./pages/account/settings/security.vue",
];

#[test]
fn test_name_and_children_are_exclusive() {
    let routes = generate(SITE);
    for route in all_routes(&routes) {
        assert!(
            !(route.name.is_some() && route.children.is_some()),
            "route {} has both a name and children",
            route.path
        );
    }
}

#[test]
fn test_props_always_true() {
    let routes = generate(SITE);
    assert!(all_routes(&routes).iter().all(|route| route.props));
}

#[test]
fn test_child_paths_are_relative() {
    let routes = generate(SITE);
    for route in &routes {
        for child in all_routes(route.children()) {
            assert!(!child.path.starts_with('/'), "{}", child.path);
            assert!(!child.path.ends_with('?'), "{}", child.path);
        }
    }
}

#[test]
fn test_generation_is_repeatable() {
    let pages: Vec<(&str, PageComponent<&str>)> = SITE
        .iter()
        .map(|file| (*file, PageComponent::lazy(move || *file)))
        .collect();

    let first = generate_routes(pages.clone(), None).unwrap();
    let second = generate_routes(pages, None).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_lazy_components_pass_through() {
    let routes = generate_routes(
        vec![("./pages/about.vue", PageComponent::lazy(|| "About"))],
        None,
    )
    .unwrap();

    assert!(routes[0].component.is_lazy());
    assert_eq!(routes[0].component.resolve(), "About");
}

// ============================================================================
// extend_route hook
// ============================================================================

#[test]
fn test_extend_route_adds_meta() {
    let options = UserOptions::new().with_extend_route(|route: &Route<&'static str>, _parent| {
        Ok((route.name.as_deref() == Some("account-settings"))
            .then(|| RoutePatch::new().with_meta_entry("auth", true)))
    });

    let routes = generate_routes(
        vec![("./pages/account/settings.vue", "Settings"), ("./pages/about.vue", "About")],
        Some(options),
    )
    .unwrap();

    let settings = &routes[0];
    assert_eq!(settings.meta_value("auth"), Some(&json!(true)));
    assert_eq!(settings.name.as_deref(), Some("account-settings"));
    assert_eq!(settings.path, "/account/settings");
    assert_eq!(settings.component, "Settings");
    assert!(settings.props);
    assert_eq!(routes[1].meta, None);
}

#[test]
fn test_extend_route_receives_parent() {
    let options = UserOptions::new().with_extend_route(
        |_route: &Route<&'static str>, parent: Option<&Route<&'static str>>| {
            let section = parent.map(|p| p.path.trim_start_matches('/').to_string());
            Ok(section.map(|section| RoutePatch::new().with_meta_entry("section", section)))
        },
    );

    let routes = generate_routes(
        vec![
            ("./pages/blog.vue", "Blog"),
            ("./pages/blog/[slug].vue", "Post"),
        ],
        Some(options),
    )
    .unwrap();

    assert_eq!(routes[0].meta, None);
    assert_eq!(routes[0].children()[0].meta_value("section"), Some(&json!("blog")));
}

#[test]
fn test_extend_route_can_override_path() {
    let options = UserOptions::new().with_extend_route(|route: &Route<&'static str>, _parent| {
        Ok((route.path == "/about").then(|| RoutePatch::new().with_path("/about-us")))
    });

    let routes = generate_routes(vec![("./pages/about.vue", "About")], Some(options)).unwrap();
    assert_eq!(routes[0].path, "/about-us");
}

#[test]
fn test_extend_route_error_propagates() {
    let options = UserOptions::new().with_extend_route(|route: &Route<&'static str>, _parent| {
        anyhow::ensure!(!route.path.contains("secret"), "secret pages are not routable");
        Ok(None)
    });

    let result = generate_routes(
        vec![("./pages/about.vue", "About"), ("./pages/secret.vue", "Secret")],
        Some(options),
    );

    let err = result.unwrap_err();
    assert!(format!("{:#}", err).contains("secret pages are not routable"));
    assert!(err.to_string().contains("/secret"));
}

// ============================================================================
// Options and configuration
// ============================================================================

#[test]
fn test_custom_pages_dir_and_extensions() {
    let options = UserOptions::new()
        .with_pages_dir("views")
        .with_extensions(["rsx"]);

    let routes = generate_routes(
        vec![
            ("./views/index.rsx", "Home"),
            ("./views/users/[id].rsx", "User"),
            ("./views/readme.md", "Readme"),
        ],
        Some(options),
    )
    .unwrap();

    let paths: Vec<&str> = routes.iter().map(|route| route.path.as_str()).collect();
    assert_eq!(paths, vec!["/", "/users/:id?", "/readme.md"]);
}

#[test]
fn test_options_from_config() {
    let config = PagesConfig::from_toml(
        r#"
        [pages]
        pages_dir = "app"
        extensions = ["page.vue"]
        "#,
    )
    .unwrap();

    let routes = generate_routes(
        vec![("./app/home.page.vue", "Home")],
        Some(config.into_user_options()),
    )
    .unwrap();

    assert_eq!(routes[0].path, "/home");
}

#[test]
fn test_resolved_options_can_be_reused() {
    let options = resolve_options::<&str>(None);

    let first = generate_routes_with(vec![("./pages/about.vue", "About")], &options).unwrap();
    let second = generate_routes_with(vec![("./pages/contact.vue", "Contact")], &options).unwrap();

    assert_eq!(first[0].path, "/about");
    assert_eq!(second[0].path, "/contact");
}

// ============================================================================
// JSON output
// ============================================================================

#[test]
fn test_serialized_route_tree() {
    let routes = generate(&[
        "./pages/index.vue",
        "./pages/users.vue",
        "./pages/users/[id].vue",
    ]);

    assert_eq!(
        serde_json::to_value(&routes).unwrap(),
        json!([
            { "name": "index", "path": "/", "component": "./pages/index.vue", "props": true },
            {
                "path": "/users",
                "component": "./pages/users.vue",
                "children": [
                    {
                        "name": "users-id",
                        "path": ":id",
                        "component": "./pages/users/[id].vue",
                        "props": true
                    }
                ],
                "props": true
            }
        ])
    );
}

//! # RHTMX Pages
//!
//! File-based route generation for client-side routers. Feed it the page files
//! your bundler globbed and it returns a nested route tree with:
//! - Static routes (`pages/about.vue` → `/about`)
//! - Dynamic parameters (`pages/users/[id].vue` → `/users/:id?`)
//! - Catch-all routes (`pages/docs/[...slug].md` → `/docs/:slug(.*)`)
//! - Index routes (`pages/index.vue` → `/`)
//! - Nested routes (`pages/users.vue` + `pages/users/*.vue` → `users` with children)
//!
//! ## Nesting
//!
//! Route names are the lowercased segments joined with `-`. A file nests under
//! an earlier route whose name matches a prefix of its own, so `users.vue`
//! must come before `users/[id].vue` in the input (glob results are sorted
//! that way). Parents keep their path but lose their name; child paths are
//! relative.
//!
//! ## Example
//!
//! ```
//! use rhtmx_pages::generate_routes;
//!
//! let pages = vec![
//!     ("./pages/index.vue", "Home"),
//!     ("./pages/users.vue", "Users"),
//!     ("./pages/users/[id].vue", "UserDetail"),
//! ];
//!
//! let routes = generate_routes(pages, None).unwrap();
//! assert_eq!(routes[0].path, "/");
//! assert_eq!(routes[1].name, None);
//! assert_eq!(routes[1].children()[0].path, ":id");
//! ```

use anyhow::Result;
use tracing::debug;

// ============================================================================
// Module Declarations
// ============================================================================

mod component;
pub mod config;
pub mod options;
pub mod path;
pub mod route;
pub mod tree;

pub use component::{LazyComponent, LoaderFn, PageComponent};
pub use config::PagesConfig;
pub use options::{resolve_options, ExtendRoute, Options, UserOptions};
pub use path::PageFileMatcher;
pub use route::pattern::{classify_segment, is_dynamic_segment, SegmentKind};
pub use route::{Route, RouteMeta, RoutePatch};
pub use tree::{finalize_routes, RouteTreeBuilder};

// ============================================================================
// Route Generation
// ============================================================================

/// Builds the route tree for the given page files
///
/// `files` maps page file paths (e.g. `./pages/users/[id].vue`) to their
/// components, in iteration order. Components are moved into the routes
/// without being inspected. Missing options fall back to
/// [`Options::default`].
///
/// Fails only when the extension pattern cannot be compiled or the
/// `extend_route` hook returns an error.
///
/// # Examples
///
/// ```
/// use rhtmx_pages::{generate_routes, PageComponent, RoutePatch, UserOptions};
///
/// let pages = vec![
///     ("./pages/docs/[...slug].md", PageComponent::lazy(|| "Docs")),
///     ("./pages/admin.vue", PageComponent::value("Admin")),
/// ];
/// let options = UserOptions::new().with_extend_route(|route, _parent| {
///     Ok((route.path == "/admin").then(|| RoutePatch::new().with_meta_entry("auth", true)))
/// });
///
/// let routes = generate_routes(pages, Some(options)).unwrap();
/// assert_eq!(routes[0].path, "/docs/:slug(.*)");
/// assert_eq!(routes[1].meta_value("auth"), Some(&serde_json::json!(true)));
/// ```
pub fn generate_routes<K, C, I>(
    files: I,
    user_options: Option<UserOptions<C>>,
) -> Result<Vec<Route<C>>>
where
    I: IntoIterator<Item = (K, C)>,
    K: AsRef<str>,
{
    let options = resolve_options(user_options);
    generate_routes_with(files, &options)
}

/// Like [`generate_routes`] with already resolved options
pub fn generate_routes_with<K, C, I>(files: I, options: &Options<C>) -> Result<Vec<Route<C>>>
where
    I: IntoIterator<Item = (K, C)>,
    K: AsRef<str>,
{
    let matcher = PageFileMatcher::new(options.extensions.as_slice(), &options.pages_dir)?;
    let mut builder = RouteTreeBuilder::new(matcher);

    for (file_path, component) in files {
        builder.insert(file_path.as_ref(), component);
    }

    let mut routes = builder.into_routes();
    finalize_routes(&mut routes, options, None)?;

    debug!(
        routes = routes.len(),
        pages_dir = %options.pages_dir,
        "generated page routes"
    );

    Ok(routes)
}

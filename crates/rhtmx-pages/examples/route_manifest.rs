//! Prints the route manifest for a small site as JSON
//!
//! Run with: cargo run -p rhtmx-pages --example route_manifest
//!
//! Reads `rhtmx-pages.toml` from the working directory when present.

use anyhow::Result;
use rhtmx_pages::{generate_routes, PagesConfig, RoutePatch};
use tracing::info;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let config = PagesConfig::load_default()?;
    let pages_dir = config.pages.pages_dir.clone();

    // What a bundler glob such as `./pages/**/*.{vue,md}` would hand over,
    // with each page mapped to the module it should import.
    let files = [
        "index.vue",
        "about.md",
        "users.vue",
        "users/index.vue",
        "users/[id].vue",
        "admin/dashboard.vue",
        "docs/[...slug].md",
    ]
    .iter()
    .map(|file| {
        let path = format!("./{}/{}", pages_dir, file);
        (path.clone(), path)
    });

    let options = config.into_user_options().with_extend_route(|route, _parent| {
        Ok(route
            .path
            .starts_with("/admin")
            .then(|| RoutePatch::new().with_meta_entry("auth", true)))
    });

    let routes = generate_routes(files, Some(options))?;
    info!("Generated {} top-level routes", routes.len());

    println!("{}", serde_json::to_string_pretty(&routes)?);
    Ok(())
}

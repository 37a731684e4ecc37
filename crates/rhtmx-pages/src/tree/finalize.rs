//! Finalizes a freshly built route forest in place
//!
//! Per route, in order: strip a trailing `-index` from the name, make child
//! paths relative, set `props`, drop the name of parents and recurse into
//! their children, then run the `extend_route` hook.

use anyhow::{Context, Result};

use crate::options::Options;
use crate::route::Route;

/// Finalizes `routes` (and every descendant) for the given parent
///
/// While a route's children are finalized, the parent handed to the hook has
/// its `children` detached; every other field is already final apart from the
/// parent's own hook, which runs after its children.
pub fn finalize_routes<C>(
    routes: &mut [Route<C>],
    options: &Options<C>,
    parent: Option<&Route<C>>,
) -> Result<()> {
    for route in routes.iter_mut() {
        finalize_route(route, options, parent)?;
    }
    Ok(())
}

fn finalize_route<C>(
    route: &mut Route<C>,
    options: &Options<C>,
    parent: Option<&Route<C>>,
) -> Result<()> {
    if let Some(name) = route.name.as_mut() {
        if let Some(stripped) = name.strip_suffix("-index") {
            *name = stripped.to_string();
        }
    }

    if parent.is_some() {
        route.path = relative_path(&route.path).to_string();
    }

    route.props = true;

    if let Some(mut children) = route.children.take() {
        route.name = None;
        finalize_routes(&mut children, options, Some(&*route))?;
        route.children = Some(children);
    }

    if let Some(extend_route) = &options.extend_route {
        let patch = extend_route(&*route, parent)
            .with_context(|| format!("extend_route failed for route {:?}", route.path))?;
        if let Some(patch) = patch {
            route.apply(patch);
        }
    }

    Ok(())
}

/// Drops one leading `/` and one trailing `?`
fn relative_path(path: &str) -> &str {
    let path = path.strip_prefix('/').unwrap_or(path);
    path.strip_suffix('?').unwrap_or(path)
}

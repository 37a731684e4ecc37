//! Inserts page files into the route forest
//!
//! Each file walks its segments from the top-level list downwards. A node
//! whose name equals the name accumulated so far becomes the parent for the
//! rest of the walk; everything else accretes onto the new route's path.

use tracing::{debug, trace};

use crate::path::PageFileMatcher;
use crate::route::pattern::{classify_segment, normalize_segment, SegmentKind};
use crate::route::Route;

/// Accumulates unfinalized routes, one page file at a time
#[derive(Debug)]
pub struct RouteTreeBuilder<C> {
    matcher: PageFileMatcher,
    routes: Vec<Route<C>>,
}

impl<C> RouteTreeBuilder<C> {
    pub fn new(matcher: PageFileMatcher) -> Self {
        Self {
            matcher,
            routes: Vec::new(),
        }
    }

    /// Adds one page file
    pub fn insert(&mut self, file_path: &str, component: C) {
        let segments = self.matcher.segments(file_path);
        let route = insert_segments(&mut self.routes, &segments, component);

        debug!(
            file = file_path,
            name = route.name.as_deref().unwrap_or_default(),
            path = %route.path,
            "inserted page route"
        );
    }

    /// Routes built so far, not yet finalized
    pub fn routes(&self) -> &[Route<C>] {
        &self.routes
    }

    pub fn into_routes(self) -> Vec<Route<C>> {
        self.routes
    }
}

/// Walks `segments` into `routes` and returns the inserted route
fn insert_segments<'a, C>(
    routes: &'a mut Vec<Route<C>>,
    segments: &[String],
    component: C,
) -> &'a Route<C> {
    let mut name = String::new();
    let mut path = String::new();
    let mut siblings = routes;
    let last = segments.len().saturating_sub(1);

    for (i, segment) in segments.iter().enumerate() {
        let kind = classify_segment(segment);
        let part = normalize_segment(segment, kind);

        if !name.is_empty() {
            name.push('-');
        }
        name.push_str(&part);

        let existing = siblings
            .iter()
            .position(|route| route.name.as_deref() == Some(name.as_str()));

        match existing {
            Some(index) => {
                trace!(name = %name, "nesting under existing route");
                siblings = siblings[index].children.get_or_insert_with(Vec::new);
                path.clear();
            }
            None if part == "index" => {
                // A non-leading index adds nothing
                if path.is_empty() {
                    path.push('/');
                }
            }
            None => push_segment(&mut path, &part, kind, i == last),
        }
    }

    let mut route = Route::new(component);
    route.name = Some(name);
    route.path = path;
    siblings.push(route);
    &siblings[siblings.len() - 1]
}

fn push_segment(path: &mut String, part: &str, kind: SegmentKind, is_last: bool) {
    match kind {
        SegmentKind::Static => {
            path.push('/');
            path.push_str(part);
        }
        SegmentKind::Dynamic => {
            path.push_str("/:");
            path.push_str(part);
            if is_last {
                path.push('?');
            }
        }
        SegmentKind::CatchAll => {
            path.push_str("/:");
            path.push_str(part);
            path.push_str("(.*)");
        }
    }
}

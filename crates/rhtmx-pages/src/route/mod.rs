//! Route module for generated route trees
//!
//! Contains the `Route` node handed to the client router, the partial
//! `RoutePatch` returned from the `extend_route` hook, and segment
//! classification in [`pattern`].

use serde::Serialize;

pub mod pattern;

// Re-export commonly used types
pub use pattern::{classify_segment, is_dynamic_segment, SegmentKind};

/// Arbitrary route metadata (titles, permissions, guards, etc.)
pub type RouteMeta = serde_json::Map<String, serde_json::Value>;

/// A node in the generated route tree
///
/// Leaf routes keep their `name`; parent routes are addressed by path only and
/// lose their name once they gain children.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route<C> {
    /// Dash-joined normalized segments, e.g. `users-id`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Path pattern, absolute at the top level and relative inside `children`
    pub path: String,
    /// Page component, passed through untouched
    pub component: C,
    /// Nested routes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Route<C>>>,
    /// Pass route params to the component as props
    pub props: bool,
    /// Metadata, only ever set by the `extend_route` hook
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<RouteMeta>,
}

impl<C> Route<C> {
    /// Creates an unfinalized route with an empty name and path
    pub fn new(component: C) -> Self {
        Route {
            name: Some(String::new()),
            path: String::new(),
            component,
            children: None,
            props: false,
            meta: None,
        }
    }

    pub fn has_children(&self) -> bool {
        self.children.is_some()
    }

    /// Nested routes, empty for leaves
    pub fn children(&self) -> &[Route<C>] {
        self.children.as_deref().unwrap_or(&[])
    }

    /// Looks up a metadata value by key
    pub fn meta_value(&self, key: &str) -> Option<&serde_json::Value> {
        self.meta.as_ref().and_then(|meta| meta.get(key))
    }

    /// Applies a patch, replacing every field the patch sets
    pub fn apply(&mut self, patch: RoutePatch<C>) {
        let RoutePatch {
            name,
            path,
            component,
            children,
            props,
            meta,
        } = patch;

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(path) = path {
            self.path = path;
        }
        if let Some(component) = component {
            self.component = component;
        }
        if let Some(children) = children {
            self.children = children;
        }
        if let Some(props) = props {
            self.props = props;
        }
        if let Some(meta) = meta {
            self.meta = meta;
        }
    }
}

/// Partial route returned from the `extend_route` hook
///
/// Only fields that are set replace the route's fields. `name`, `children`
/// and `meta` take an inner `Option` so the hook can clear them too.
///
/// # Examples
///
/// ```
/// use rhtmx_pages::{Route, RoutePatch};
/// use serde_json::json;
///
/// let mut route = Route::new("Admin");
/// route.apply(RoutePatch::new().with_meta_entry("auth", json!(true)));
///
/// assert_eq!(route.meta_value("auth"), Some(&json!(true)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RoutePatch<C> {
    pub name: Option<Option<String>>,
    pub path: Option<String>,
    pub component: Option<C>,
    pub children: Option<Option<Vec<Route<C>>>>,
    pub props: Option<bool>,
    pub meta: Option<Option<RouteMeta>>,
}

impl<C> Default for RoutePatch<C> {
    fn default() -> Self {
        RoutePatch {
            name: None,
            path: None,
            component: None,
            children: None,
            props: None,
            meta: None,
        }
    }
}

impl<C> RoutePatch<C> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(Some(name.into()));
        self
    }

    pub fn without_name(mut self) -> Self {
        self.name = Some(None);
        self
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_component(mut self, component: C) -> Self {
        self.component = Some(component);
        self
    }

    pub fn with_children(mut self, children: Vec<Route<C>>) -> Self {
        self.children = Some(Some(children));
        self
    }

    pub fn with_props(mut self, props: bool) -> Self {
        self.props = Some(props);
        self
    }

    /// Replaces the whole metadata map
    pub fn with_meta(mut self, meta: RouteMeta) -> Self {
        self.meta = Some(Some(meta));
        self
    }

    /// Adds one entry to the metadata map set by this patch
    ///
    /// The resulting map still replaces the route's `meta` as a whole.
    pub fn with_meta_entry(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        let meta = self
            .meta
            .get_or_insert_with(|| Some(RouteMeta::new()))
            .get_or_insert_with(RouteMeta::new);
        meta.insert(key.into(), value.into());
        self
    }
}

//! Route generation options
//!
//! `UserOptions` is what callers pass in (every field optional);
//! [`resolve_options`] fills the gaps with defaults.

use std::fmt;
use std::sync::Arc;

use anyhow::Result;

use crate::route::{Route, RoutePatch};

/// Hook called for every route during finalization with `(route, parent)`
///
/// Returning `Ok(Some(patch))` merges the patch into the route, `Ok(None)`
/// leaves it alone and `Err` aborts route generation.
///
/// Children are finalized before their parent, and while that happens the
/// parent passed in has `children` set to `None`. Its other fields are
/// already final except for anything its own hook call will patch.
pub type ExtendRoute<C> =
    Arc<dyn Fn(&Route<C>, Option<&Route<C>>) -> Result<Option<RoutePatch<C>>> + Send + Sync>;

pub const DEFAULT_EXTENSIONS: [&str; 2] = ["vue", "md"];
pub const DEFAULT_PAGES_DIR: &str = "pages";

/// Fully resolved options
pub struct Options<C> {
    /// File extensions treated as pages (without the dot)
    pub extensions: Vec<String>,
    /// Pages directory stripped from file paths
    pub pages_dir: String,
    pub extend_route: Option<ExtendRoute<C>>,
}

/// Caller-supplied options, unset fields fall back to defaults
pub struct UserOptions<C> {
    pub extensions: Option<Vec<String>>,
    pub pages_dir: Option<String>,
    pub extend_route: Option<ExtendRoute<C>>,
}

impl<C> Default for Options<C> {
    fn default() -> Self {
        Options {
            extensions: DEFAULT_EXTENSIONS.iter().map(|ext| ext.to_string()).collect(),
            pages_dir: DEFAULT_PAGES_DIR.to_string(),
            extend_route: None,
        }
    }
}

impl<C> Clone for Options<C> {
    fn clone(&self) -> Self {
        Options {
            extensions: self.extensions.clone(),
            pages_dir: self.pages_dir.clone(),
            extend_route: self.extend_route.clone(),
        }
    }
}

impl<C> fmt::Debug for Options<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("extensions", &self.extensions)
            .field("pages_dir", &self.pages_dir)
            .field("extend_route", &self.extend_route.is_some())
            .finish()
    }
}

impl<C> Default for UserOptions<C> {
    fn default() -> Self {
        UserOptions {
            extensions: None,
            pages_dir: None,
            extend_route: None,
        }
    }
}

impl<C> Clone for UserOptions<C> {
    fn clone(&self) -> Self {
        UserOptions {
            extensions: self.extensions.clone(),
            pages_dir: self.pages_dir.clone(),
            extend_route: self.extend_route.clone(),
        }
    }
}

impl<C> fmt::Debug for UserOptions<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserOptions")
            .field("extensions", &self.extensions)
            .field("pages_dir", &self.pages_dir)
            .field("extend_route", &self.extend_route.is_some())
            .finish()
    }
}

impl<C> UserOptions<C> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = Some(extensions.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_pages_dir(mut self, pages_dir: impl Into<String>) -> Self {
        self.pages_dir = Some(pages_dir.into());
        self
    }

    /// Sets the per-route hook
    ///
    /// # Examples
    ///
    /// ```
    /// use rhtmx_pages::{RoutePatch, UserOptions};
    ///
    /// let options = UserOptions::<&str>::new().with_extend_route(|route, _parent| {
    ///     Ok(route
    ///         .path
    ///         .starts_with("/admin")
    ///         .then(|| RoutePatch::new().with_meta_entry("auth", true)))
    /// });
    /// assert!(options.extend_route.is_some());
    /// ```
    pub fn with_extend_route<F>(mut self, hook: F) -> Self
    where
        F: Fn(&Route<C>, Option<&Route<C>>) -> Result<Option<RoutePatch<C>>> + Send + Sync + 'static,
    {
        self.extend_route = Some(Arc::new(hook));
        self
    }
}

/// Fills unset fields with defaults (`["vue", "md"]`, `"pages"`, no hook)
///
/// No validation happens here; an empty extension list is taken as given.
pub fn resolve_options<C>(user_options: Option<UserOptions<C>>) -> Options<C> {
    let defaults = Options::default();
    let Some(user) = user_options else {
        return defaults;
    };

    Options {
        extensions: user.extensions.unwrap_or(defaults.extensions),
        pages_dir: user.pages_dir.unwrap_or(defaults.pages_dir),
        extend_route: user.extend_route,
    }
}

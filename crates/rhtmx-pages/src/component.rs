//! Page component references
//!
//! The generator never looks inside a component: whatever the caller hands in
//! for a page file ends up on the route unchanged. `PageComponent` is the
//! shape most bootstraps want, either a ready value or a loader that produces
//! it on first navigation.

use std::fmt;
use std::sync::Arc;

/// Loader function for a lazily resolved component
pub type LoaderFn<C> = Arc<dyn Fn() -> C + Send + Sync>;

/// A component that is produced on demand by calling its loader
///
/// Two lazy components are equal when they share the same loader, so cloning
/// an input map and generating routes from both copies yields equal trees.
pub struct LazyComponent<C> {
    loader: LoaderFn<C>,
}

impl<C> LazyComponent<C> {
    /// Wraps a loader closure
    pub fn new(loader: impl Fn() -> C + Send + Sync + 'static) -> Self {
        Self {
            loader: Arc::new(loader),
        }
    }

    /// Calls the loader
    pub fn load(&self) -> C {
        (self.loader)()
    }
}

impl<C> Clone for LazyComponent<C> {
    fn clone(&self) -> Self {
        Self {
            loader: Arc::clone(&self.loader),
        }
    }
}

impl<C> PartialEq for LazyComponent<C> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.loader, &other.loader)
    }
}

impl<C> fmt::Debug for LazyComponent<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyComponent").finish_non_exhaustive()
    }
}

/// Component attached to a page file: a direct value or a lazy loader
///
/// # Examples
///
/// ```
/// use rhtmx_pages::PageComponent;
///
/// let eager = PageComponent::value("Home");
/// let lazy = PageComponent::lazy(|| "About");
///
/// assert_eq!(eager.resolve(), "Home");
/// assert_eq!(lazy.resolve(), "About");
/// assert!(lazy.is_lazy());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum PageComponent<C> {
    /// Component available up front
    Value(C),
    /// Component produced by a loader
    Lazy(LazyComponent<C>),
}

impl<C> PageComponent<C> {
    pub fn value(component: C) -> Self {
        PageComponent::Value(component)
    }

    pub fn lazy(loader: impl Fn() -> C + Send + Sync + 'static) -> Self {
        PageComponent::Lazy(LazyComponent::new(loader))
    }

    pub fn is_lazy(&self) -> bool {
        matches!(self, PageComponent::Lazy(_))
    }
}

impl<C: Clone> PageComponent<C> {
    /// Produces the component, calling the loader for lazy components
    pub fn resolve(&self) -> C {
        match self {
            PageComponent::Value(component) => component.clone(),
            PageComponent::Lazy(lazy) => lazy.load(),
        }
    }
}

impl<C> From<LazyComponent<C>> for PageComponent<C> {
    fn from(lazy: LazyComponent<C>) -> Self {
        PageComponent::Lazy(lazy)
    }
}

//! Page file path normalization
//!
//! Turns a glob key such as `./pages/users/[id].vue` into the ordered
//! segments `["users", "[id]"]`. Keys that do not carry the configured pages
//! directory or extension pass through with whatever they do carry.

use anyhow::{Context, Result};
use regex::Regex;

/// Strips page extensions and the pages directory from file paths
#[derive(Debug, Clone)]
pub struct PageFileMatcher {
    extension: Regex,
    pages_prefix: String,
}

impl PageFileMatcher {
    /// Builds a matcher for the given extensions and pages directory
    ///
    /// # Examples
    ///
    /// ```
    /// use rhtmx_pages::path::PageFileMatcher;
    ///
    /// let matcher = PageFileMatcher::new(&["vue", "md"], "pages").unwrap();
    /// assert_eq!(matcher.strip("./pages/users/[id].vue"), "users/[id]");
    /// assert_eq!(matcher.segments("./pages/docs/intro.md"), vec!["docs", "intro"]);
    /// ```
    pub fn new<S: AsRef<str>>(extensions: &[S], pages_dir: &str) -> Result<Self> {
        let alternation = extensions
            .iter()
            .map(|ext| regex::escape(ext.as_ref()))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = format!(r"\.({})$", alternation);
        let extension = Regex::new(&pattern)
            .with_context(|| format!("Invalid page extension pattern: {}", pattern))?;

        Ok(Self {
            extension,
            pages_prefix: format!("./{}/", pages_dir),
        })
    }

    /// Removes the page extension, then the first `./<pages_dir>/`
    pub fn strip(&self, file_path: &str) -> String {
        let without_ext = self.extension.replace(file_path, "");
        without_ext.replacen(&self.pages_prefix, "", 1)
    }

    /// Stripped path split on `/`
    pub fn segments(&self, file_path: &str) -> Vec<String> {
        self.strip(file_path).split('/').map(str::to_string).collect()
    }
}

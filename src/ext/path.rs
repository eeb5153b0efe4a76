use std::path::{Component, Path};

/// Extension trait for Path to provide convenient string conversion methods
pub trait PathExt {
    /// Joins the normal components of a relative path with `/`, whatever the
    /// platform separator is. Manifest entries are always written this way.
    ///
    /// # Examples
    /// ```
    /// use stencil::ext::PathExt;
    /// use std::path::Path;
    ///
    /// assert_eq!(Path::new("lib").join("My").join("App.pm").to_slash_string(), "lib/My/App.pm");
    /// ```
    fn to_slash_string(&self) -> String;
}

impl PathExt for Path {
    fn to_slash_string(&self) -> String {
        self.components()
            .filter_map(|component| match component {
                Component::Normal(part) => Some(part.to_string_lossy()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("/")
    }
}

use std::collections::{BTreeMap, HashSet};

use dioxus_logger::tracing;

use crate::{error::route::RouteTableError, routing::Page};

/// Association between a URL path and the page rendered for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: String,
    pub page: Page,
    pub name: Option<String>,
}

/// Immutable mapping of literal URL paths to pages with a required fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    entries: BTreeMap<String, RouteEntry>,
    fallback: Page,
}

impl RouteTable {
    /// The table shipped with the dashboard.
    ///
    /// - `/login` renders [`Page::Login`] (named `login`)
    /// - `/logout` renders [`Page::Logout`]
    /// - anything else falls back to [`Page::Login`]
    pub fn standard() -> Self {
        let entries = [
            RouteEntry {
                path: "/login".to_string(),
                page: Page::Login,
                name: Some("login".to_string()),
            },
            RouteEntry {
                path: "/logout".to_string(),
                page: Page::Logout,
                name: None,
            },
        ]
        .into_iter()
        .map(|entry| (entry.path.clone(), entry))
        .collect();

        Self {
            entries,
            fallback: Page::Login,
        }
    }

    pub fn builder(fallback: Page) -> RouteTableBuilder {
        RouteTableBuilder {
            entries: Vec::new(),
            fallback,
        }
    }

    /// Returns the page for `path`, or the fallback page when no entry matches.
    ///
    /// Matching is exact on the path string, so `/login/` and `/Login` do not match `/login`.
    pub fn resolve(&self, path: &str) -> Page {
        match self.entries.get(path) {
            Some(entry) => entry.page,
            None => {
                tracing::debug!("No route for {:?}, rendering fallback {}", path, self.fallback);
                self.fallback
            }
        }
    }

    pub fn get(&self, path: &str) -> Option<&RouteEntry> {
        self.entries.get(path)
    }

    pub fn by_name(&self, name: &str) -> Option<&RouteEntry> {
        self.entries
            .values()
            .find(|entry| entry.name.as_deref() == Some(name))
    }

    pub fn fallback(&self) -> Page {
        self.fallback
    }

    /// Entries ordered by path.
    pub fn entries(&self) -> impl Iterator<Item = &RouteEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// Collects route entries and validates them into a [`RouteTable`].
#[derive(Debug, Clone)]
pub struct RouteTableBuilder {
    entries: Vec<RouteEntry>,
    fallback: Page,
}

impl RouteTableBuilder {
    pub fn route(mut self, path: impl Into<String>, page: Page) -> Self {
        self.entries.push(RouteEntry {
            path: path.into(),
            page,
            name: None,
        });
        self
    }

    pub fn named_route(
        mut self,
        name: impl Into<String>,
        path: impl Into<String>,
        page: Page,
    ) -> Self {
        self.entries.push(RouteEntry {
            path: path.into(),
            page,
            name: Some(name.into()),
        });
        self
    }

    /// Builds the table.
    ///
    /// # Errors
    /// - [`RouteTableError::InvalidPath`] if a path does not start with `/`
    /// - [`RouteTableError::DuplicatePath`] if two entries share a path
    /// - [`RouteTableError::DuplicateName`] if two entries share a name
    pub fn build(self) -> Result<RouteTable, RouteTableError> {
        let mut entries = BTreeMap::new();
        let mut names = HashSet::new();

        for entry in self.entries {
            if !entry.path.starts_with('/') {
                return Err(RouteTableError::InvalidPath(entry.path));
            }
            if let Some(name) = &entry.name {
                if !names.insert(name.clone()) {
                    return Err(RouteTableError::DuplicateName(name.clone()));
                }
            }
            if entries.contains_key(&entry.path) {
                return Err(RouteTableError::DuplicatePath(entry.path));
            }
            entries.insert(entry.path.clone(), entry);
        }

        Ok(RouteTable {
            entries,
            fallback: self.fallback,
        })
    }
}

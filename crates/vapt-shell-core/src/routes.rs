use std::collections::BTreeMap;

pub const ROOT_PATH: &str = "/";
pub const NOT_FOUND_FRAGMENT: &str = "pages/404.html";

/// The console's screens, keyed by hash path.
pub const DEFAULT_ROUTES: [(&str, &str); 11] = [
    ("/", "pages/auth/login.html"),
    ("/dashboard", "pages/dashboard.html"),
    ("/projects", "pages/projects/list.html"),
    ("/projects/create", "pages/projects/create.html"),
    ("/project", "pages/projects/overview.html"),
    ("/vuln/add", "pages/vulns/add.html"),
    ("/vuln", "pages/vulns/details.html"),
    ("/reports", "pages/reports/preview.html"),
    ("/settings", "pages/settings.html"),
    ("/users", "pages/users/list.html"),
    ("/forgot-password", "pages/auth/forgot-password.html"),
];

pub fn default_route_entries() -> BTreeMap<String, String> {
    DEFAULT_ROUTES
        .iter()
        .map(|(path, fragment)| ((*path).to_string(), (*fragment).to_string()))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteTableError {
    #[error("route table must map the root path `/`")]
    MissingRoot,
    #[error("not-found fragment path must not be empty")]
    EmptyNotFound,
    #[error("route `{0}` maps to an empty fragment path")]
    EmptyFragment(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteMatch {
    Exact,
    Root,
    NotFound,
}

/// Outcome of resolving a location hash against the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRoute {
    pub path: String,
    pub fragment: String,
    pub params: BTreeMap<String, String>,
    pub matched: RouteMatch,
}

impl ResolvedRoute {
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }
}

/// Immutable hash-path to fragment-path mapping with a guaranteed root entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    entries: BTreeMap<String, String>,
    not_found: String,
}

impl Default for RouteTable {
    fn default() -> Self {
        Self {
            entries: default_route_entries(),
            not_found: NOT_FOUND_FRAGMENT.to_string(),
        }
    }
}

impl RouteTable {
    pub fn new(
        entries: BTreeMap<String, String>,
        not_found: impl Into<String>,
    ) -> Result<Self, RouteTableError> {
        let not_found = not_found.into();
        if not_found.trim().is_empty() {
            return Err(RouteTableError::EmptyNotFound);
        }
        if !entries.contains_key(ROOT_PATH) {
            return Err(RouteTableError::MissingRoot);
        }
        if let Some((path, _)) = entries
            .iter()
            .find(|(_, fragment)| fragment.trim().is_empty())
        {
            return Err(RouteTableError::EmptyFragment(path.clone()));
        }
        Ok(Self { entries, not_found })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.entries.get(path).map(String::as_str)
    }

    pub fn not_found(&self) -> &str {
        &self.not_found
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(path, fragment)| (path.as_str(), fragment.as_str()))
    }

    /// Resolves a raw `location.hash` value (`""`, `"#/"`, `"#/vuln?id=3"`).
    pub fn resolve(&self, hash: &str) -> ResolvedRoute {
        let hash = if hash.is_empty() { "#/" } else { hash };
        let clean = hash.strip_prefix('#').unwrap_or(hash);
        let (path, query) = match clean.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (clean, None),
        };
        let params = query.map(parse_query).unwrap_or_default();

        if let Some(fragment) = self.get(path) {
            return ResolvedRoute {
                path: path.to_string(),
                fragment: fragment.to_string(),
                params,
                matched: RouteMatch::Exact,
            };
        }

        if path.is_empty() || path == ROOT_PATH {
            let fragment = self.get(ROOT_PATH).unwrap_or(self.not_found.as_str());
            return ResolvedRoute {
                path: ROOT_PATH.to_string(),
                fragment: fragment.to_string(),
                params,
                matched: RouteMatch::Root,
            };
        }

        ResolvedRoute {
            path: path.to_string(),
            fragment: self.not_found.clone(),
            params,
            matched: RouteMatch::NotFound,
        }
    }
}

fn parse_query(query: &str) -> BTreeMap<String, String> {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((key, value)) => (key.to_string(), value.to_string()),
            None => (pair.to_string(), String::new()),
        })
        .filter(|(key, _)| !key.is_empty())
        .collect()
}

//! Static route table: path patterns, metadata, and lazy page components.
//!
//! # Design
//! A route record is plain data fixed at table construction: a path pattern
//! (literal segments plus `:name` parameters), a unique symbolic name for
//! programmatic navigation, a display title, and a component loader. The
//! loader runs the first time the route's component is requested and the
//! result is cached in a `OnceCell` for the process lifetime, mirroring a
//! deferred-import component that is fetched once and reused. Matching is
//! segment-wise and returns the extracted parameter values as strings.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use once_cell::sync::OnceCell;

/// Minimal surface a page component exposes to the navigation mechanism.
/// Hosts implement this; the core never defines concrete pages.
pub trait Page: Send + Sync {
    /// Called when the route becomes current, with the parameters extracted
    /// from the matched path. Returns the rendered view.
    fn mount(&self, params: &RouteParams) -> String;
}

/// A loaded page component, shared between the cache and callers.
pub type Component = Arc<dyn Page>;

/// Deferred component construction, invoked at most once per route.
pub type ComponentLoader = Box<dyn Fn() -> Component + Send + Sync>;

/// Per-route metadata consumable by the host page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMeta {
    pub title: String,
}

/// Parameter values extracted from a matched path, keyed by the `:name`
/// segments of the pattern.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams(HashMap<String, String>);

impl RouteParams {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn insert(&mut self, name: &str, value: &str) {
        self.0.insert(name.to_string(), value.to_string());
    }
}

/// Errors raised while building a route table.
#[derive(Debug, PartialEq, Eq)]
pub enum RouteError {
    /// The path pattern could not be parsed.
    InvalidPattern { pattern: String, reason: &'static str },

    /// Two routes share the same symbolic name.
    DuplicateName(String),
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteError::InvalidPattern { pattern, reason } => {
                write!(f, "invalid route pattern {pattern:?}: {reason}")
            }
            RouteError::DuplicateName(name) => {
                write!(f, "duplicate route name {name:?}")
            }
        }
    }
}

impl std::error::Error for RouteError {}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(String),
}

/// A parsed path pattern such as `/` or `/post/:postId`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    raw: String,
    segments: Vec<Segment>,
}

impl PathPattern {
    pub fn parse(pattern: &str) -> Result<Self, RouteError> {
        if !pattern.starts_with('/') {
            return Err(RouteError::InvalidPattern {
                pattern: pattern.to_string(),
                reason: "pattern must start with '/'",
            });
        }
        let mut segments = Vec::new();
        for part in split_path(pattern) {
            if let Some(name) = part.strip_prefix(':') {
                if name.is_empty() {
                    return Err(RouteError::InvalidPattern {
                        pattern: pattern.to_string(),
                        reason: "parameter segment has no name",
                    });
                }
                segments.push(Segment::Param(name.to_string()));
            } else {
                segments.push(Segment::Literal(part.to_string()));
            }
        }
        Ok(Self {
            raw: pattern.to_string(),
            segments,
        })
    }

    /// Match `path` against this pattern, extracting parameter values.
    /// Returns `None` when the path does not fit.
    pub fn matches(&self, path: &str) -> Option<RouteParams> {
        let parts = split_path(path);
        if parts.len() != self.segments.len() {
            return None;
        }
        let mut params = RouteParams::default();
        for (segment, part) in self.segments.iter().zip(parts) {
            match segment {
                Segment::Literal(lit) if lit == part => {}
                Segment::Literal(_) => return None,
                Segment::Param(name) => params.insert(name, part),
            }
        }
        Some(params)
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

/// Path segments, ignoring leading and trailing slashes. `/` yields no
/// segments, so it only matches the root pattern.
fn split_path(path: &str) -> Vec<&str> {
    path.trim_matches('/')
        .split('/')
        .filter(|part| !part.is_empty())
        .collect()
}

/// One entry of the route table: pattern, name, metadata, and the lazily
/// constructed page component.
pub struct Route {
    pattern: PathPattern,
    name: String,
    meta: RouteMeta,
    loader: ComponentLoader,
    component: OnceCell<Component>,
}

impl Route {
    pub fn new(
        path: &str,
        name: &str,
        title: &str,
        loader: ComponentLoader,
    ) -> Result<Self, RouteError> {
        Ok(Self {
            pattern: PathPattern::parse(path)?,
            name: name.to_string(),
            meta: RouteMeta {
                title: title.to_string(),
            },
            loader,
            component: OnceCell::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn meta(&self) -> &RouteMeta {
        &self.meta
    }

    /// The page component, constructed on first access and cached for the
    /// process lifetime.
    pub fn component(&self) -> &Component {
        self.component.get_or_init(|| (self.loader)())
    }

    /// True once the loader has run.
    pub fn is_loaded(&self) -> bool {
        self.component.get().is_some()
    }
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("path", &self.pattern.as_str())
            .field("name", &self.name)
            .field("meta", &self.meta)
            .field("loaded", &self.is_loaded())
            .finish()
    }
}

/// A resolved path: the matched record and its extracted parameters.
#[derive(Debug)]
pub struct RouteMatch<'a> {
    pub route: &'a Route,
    pub params: RouteParams,
}

/// The static route table. Immutable after construction; route names are
/// unique within a table.
#[derive(Debug)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn new(routes: Vec<Route>) -> Result<Self, RouteError> {
        for (i, route) in routes.iter().enumerate() {
            if routes[..i].iter().any(|other| other.name == route.name) {
                return Err(RouteError::DuplicateName(route.name.clone()));
            }
        }
        Ok(Self { routes })
    }

    /// First record whose pattern matches `path`, with extracted params.
    /// `None` means no route is defined for the path; what happens next is
    /// the navigation mechanism's business.
    pub fn resolve(&self, path: &str) -> Option<RouteMatch<'_>> {
        self.routes.iter().find_map(|route| {
            route
                .pattern
                .matches(path)
                .map(|params| RouteMatch { route, params })
        })
    }

    /// Lookup by symbolic name, for programmatic navigation.
    pub fn route_named(&self, name: &str) -> Option<&Route> {
        self.routes.iter().find(|route| route.name == name)
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }
}

/// The application's canonical two-route table: `/` (Home) and
/// `/post/:postId` (Post). The host supplies the page loaders.
pub fn app_routes(home: ComponentLoader, post: ComponentLoader) -> RouteTable {
    let routes = vec![
        Route::new("/", "Home", "Home", home).expect("static home route is well-formed"),
        Route::new("/post/:postId", "Post", "Post", post)
            .expect("static post route is well-formed"),
    ];
    RouteTable::new(routes).expect("static route names are unique")
}

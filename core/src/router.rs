//! History-based navigation over a route table.
//!
//! # Design
//! `Router` keeps a browser-style history stack: `push` truncates any
//! forward entries, `back` and `forward` move along the stack without
//! discarding it. Undefined paths are still recorded — the table simply
//! resolves them to nothing, and what the host shows then is its own
//! affair. The router never mutates the table; components load lazily on
//! first mount via the table's cells.

use crate::routes::{RouteMatch, RouteTable};

/// Single-owner navigation state machine: one current location, one
/// history stack.
#[derive(Debug)]
pub struct Router {
    table: RouteTable,
    stack: Vec<String>,
    index: usize,
}

impl Router {
    /// A fresh session starts at the root location.
    pub fn new(table: RouteTable) -> Self {
        Self {
            table,
            stack: vec!["/".to_string()],
            index: 0,
        }
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn current_path(&self) -> &str {
        &self.stack[self.index]
    }

    /// The record matching the current location, if any.
    pub fn current(&self) -> Option<RouteMatch<'_>> {
        self.table.resolve(self.current_path())
    }

    /// The matched route's `meta.title`, for the host to set as the
    /// document title.
    pub fn current_title(&self) -> Option<&str> {
        self.current().map(|m| m.route.meta().title.as_str())
    }

    /// Navigate to `path`: forward entries are dropped, the new location
    /// becomes current. Returns the resolved match, `None` for an
    /// undefined path.
    pub fn push(&mut self, path: &str) -> Option<RouteMatch<'_>> {
        self.stack.truncate(self.index + 1);
        self.stack.push(path.to_string());
        self.index = self.stack.len() - 1;
        self.current()
    }

    /// Navigate by route name, substituting `param` into the single `:name`
    /// segment if the pattern has one. Unknown names navigate nowhere.
    pub fn push_named(&mut self, name: &str, param: Option<&str>) -> Option<RouteMatch<'_>> {
        let path = {
            let route = self.table.route_named(name)?;
            expand(route.path(), param)
        };
        self.push(&path)
    }

    /// Step back in history. No-op at the oldest entry.
    pub fn back(&mut self) -> Option<RouteMatch<'_>> {
        self.index = self.index.saturating_sub(1);
        self.current()
    }

    /// Step forward in history. No-op at the newest entry.
    pub fn forward(&mut self) -> Option<RouteMatch<'_>> {
        if self.index + 1 < self.stack.len() {
            self.index += 1;
        }
        self.current()
    }

    /// Lazily load the current route's component and mount it with the
    /// extracted params.
    pub fn mount_current(&self) -> Option<String> {
        let m = self.current()?;
        Some(m.route.component().mount(&m.params))
    }
}

/// Replace the pattern's parameter segments with `param`. Literal-only
/// patterns come back unchanged.
fn expand(pattern: &str, param: Option<&str>) -> String {
    pattern
        .split('/')
        .map(|segment| match (segment.strip_prefix(':'), param) {
            (Some(_), Some(value)) => value,
            _ => segment,
        })
        .collect::<Vec<_>>()
        .join("/")
}

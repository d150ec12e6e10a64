//! Declarative route table mapping URL paths to page identities.
//!
//! The table is data, not code: an ordered list of (pattern, page) entries
//! built once and immutable afterward. [`resolve`] is pure and consults no
//! backend state, so matching and tie-break rules are testable in isolation
//! from rendering, which lives in `crate::app`.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Identity of a renderable page. Rendering belongs to `crate::pages`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    HomeFeed,
    UserFeed,
    MessageGroups,
    MessageGroup,
    Signup,
    Signin,
    Confirmation,
    Recover,
}

/// One segment of a path pattern.
#[derive(Clone, Copy, Debug)]
pub enum Segment {
    /// Literal segment, matched exactly.
    Static(&'static str),
    /// `@`-prefixed user handle. The capture excludes the `@`; an empty
    /// handle (`/@`) does not match.
    Handle(&'static str),
    /// Whole-segment capture under the given name. Empty segments do not
    /// match, so `/confirm/` stays unrouted.
    Param(&'static str),
}

/// A (pattern, page identity) binding.
#[derive(Clone, Copy, Debug)]
pub struct RouteEntry {
    pub pattern: &'static [Segment],
    pub page: Page,
}

/// The complete route table. No two entries share identical static
/// structure, so at most one entry matches any concrete path.
pub const ROUTE_TABLE: &[RouteEntry] = &[
    RouteEntry { pattern: &[], page: Page::HomeFeed },
    RouteEntry {
        pattern: &[Segment::Handle("handle")],
        page: Page::UserFeed,
    },
    RouteEntry {
        pattern: &[Segment::Static("messages")],
        page: Page::MessageGroups,
    },
    RouteEntry {
        pattern: &[Segment::Static("messages"), Segment::Handle("handle")],
        page: Page::MessageGroup,
    },
    RouteEntry {
        pattern: &[Segment::Static("signup")],
        page: Page::Signup,
    },
    RouteEntry {
        pattern: &[Segment::Static("signin")],
        page: Page::Signin,
    },
    RouteEntry {
        pattern: &[Segment::Static("confirm"), Segment::Param("email")],
        page: Page::Confirmation,
    },
    RouteEntry {
        pattern: &[Segment::Static("forgot")],
        page: Page::Recover,
    },
];

/// A successful resolution: the page plus any captured segments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteMatch {
    pub page: Page,
    params: Vec<(&'static str, String)>,
}

impl RouteMatch {
    /// Looks up a named capture such as `handle` or `email`.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Routing errors. Resolution never retries and never falls back; an
/// unrouted path is reported to the caller, which decides what to render.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error("no route matches `{0}`")]
    NoMatch(String),
}

/// Resolves a concrete URL path against the table.
///
/// Paths must carry a leading `/`; anything else is `NoMatch`. Among
/// matching entries the one with the most static segments wins, so a
/// literal path can never lose to a parametric pattern of the same length.
///
/// # Errors
///
/// Returns [`RouteError::NoMatch`] when no entry matches.
pub fn resolve(path: &str) -> Result<RouteMatch, RouteError> {
    let Some(rest) = path.strip_prefix('/') else {
        return Err(RouteError::NoMatch(path.to_owned()));
    };
    let segments: Vec<&str> = if rest.is_empty() {
        Vec::new()
    } else {
        rest.split('/').collect()
    };

    ROUTE_TABLE
        .iter()
        .filter_map(|entry| match_entry(entry, &segments))
        .max_by_key(|(statics, _)| *statics)
        .map(|(_, matched)| matched)
        .ok_or_else(|| RouteError::NoMatch(path.to_owned()))
}

/// Matches one entry, returning its static-segment count for tie-breaking.
fn match_entry(entry: &RouteEntry, segments: &[&str]) -> Option<(usize, RouteMatch)> {
    if entry.pattern.len() != segments.len() {
        return None;
    }

    let mut statics = 0;
    let mut params = Vec::new();
    for (pat, seg) in entry.pattern.iter().zip(segments.iter().copied()) {
        match pat {
            Segment::Static(lit) => {
                if seg != *lit {
                    return None;
                }
                statics += 1;
            }
            Segment::Handle(name) => {
                let handle = seg.strip_prefix('@')?;
                if handle.is_empty() {
                    return None;
                }
                params.push((*name, handle.to_owned()));
            }
            Segment::Param(name) => {
                if seg.is_empty() {
                    return None;
                }
                params.push((*name, seg.to_owned()));
            }
        }
    }

    Some((
        statics,
        RouteMatch {
            page: entry.page,
            params,
        },
    ))
}

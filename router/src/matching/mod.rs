mod path_segment;
pub use path_segment::*;

use crate::params::ParamsMap;
use std::{borrow::Cow, fmt};

/// The pattern every unmatched path falls back to, if registered.
pub const ROOT_PATTERN: &str = "/";

/// The result of testing a path against a [`RoutePattern`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathMatch {
    /// The pattern that matched.
    pub pattern: String,
    /// Params captured from the path, raw.
    pub params: ParamsMap,
}

/// A parsed route template such as `/orders/:id`.
///
/// Patterns are never validated: a malformed pattern simply fails to match
/// anything useful.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct RoutePattern {
    raw: Cow<'static, str>,
    segments: Vec<PathSegment>,
}

impl fmt::Debug for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RoutePattern").field(&self.raw).finish()
    }
}

impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl RoutePattern {
    /// Parses a pattern using `:` as the param marker.
    pub fn new(raw: impl Into<Cow<'static, str>>) -> Self {
        Self::with_marker(raw, ':')
    }

    /// Parses a pattern using a custom param marker.
    pub fn with_marker(
        raw: impl Into<Cow<'static, str>>,
        marker: char,
    ) -> Self {
        let raw = raw.into();
        let segments = get_segments(&raw)
            .map(|segment| PathSegment::parse(segment, marker))
            .collect();
        Self { raw, segments }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Whether this is the literal root pattern `/`.
    pub fn is_root(&self) -> bool {
        self.raw == ROOT_PATTERN
    }

    /// Tests `path` against this pattern.
    ///
    /// Both sides are split on `/` with empty segments dropped; the segment
    /// counts must be equal, every static segment must be equal, and every
    /// param segment captures the corresponding path segment verbatim.
    pub fn test(&self, path: &str) -> Option<PathMatch> {
        let loc_segments = get_segments(path).collect::<Vec<_>>();
        if loc_segments.len() != self.segments.len() {
            return None;
        }

        let mut params = ParamsMap::with_capacity(self.segments.len());
        for (segment, loc_segment) in self.segments.iter().zip(loc_segments) {
            if let Some(name) = segment.test(loc_segment)? {
                params.insert(name.to_string(), loc_segment.to_string());
            }
        }

        Some(PathMatch {
            pattern: self.raw.to_string(),
            params,
        })
    }
}

impl From<&'static str> for RoutePattern {
    fn from(raw: &'static str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for RoutePattern {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

/// Matches `path` against the raw `pattern`, returning the captured params.
pub fn match_route(path: &str, pattern: &str) -> Option<ParamsMap> {
    RoutePattern::new(pattern.to_string())
        .test(path)
        .map(|matched| matched.params)
}

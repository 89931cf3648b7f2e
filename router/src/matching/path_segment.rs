use std::borrow::Cow;

/// One `/`-delimited piece of a route pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// Must equal the path segment exactly.
    Static(Cow<'static, str>),
    /// Matches any single path segment and captures it under this name.
    Param(Cow<'static, str>),
}

impl PathSegment {
    /// Classifies a raw pattern segment by its leading `marker`.
    pub fn parse(segment: &str, marker: char) -> Self {
        match segment.strip_prefix(marker) {
            Some(name) => PathSegment::Param(name.to_string().into()),
            None => PathSegment::Static(segment.to_string().into()),
        }
    }

    /// Tests a single path segment against this one, returning the captured
    /// param name if this is a param segment.
    pub(crate) fn test<'s>(&'s self, segment: &str) -> Option<Option<&'s str>> {
        match self {
            PathSegment::Static(expected) => {
                (expected == segment).then_some(None)
            }
            PathSegment::Param(name) => Some(Some(name.as_ref())),
        }
    }
}

/// Splits a path or pattern on `/`, dropping the empty pieces left by
/// leading, trailing or doubled slashes.
pub fn get_segments(path: &str) -> impl Iterator<Item = &str> + '_ {
    path.split('/').filter(|p| !p.is_empty())
}

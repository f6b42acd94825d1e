//! Path template matching.
//!
//! # Responsibilities
//! - Compile a composed path template into fragments
//! - Match a concrete location against a template (anchored, whole string)
//! - Capture parameter values for the matched fragments
//!
//! # Design Decisions
//! - A parameter marker (`:name`) matches exactly one non-empty fragment
//! - The marker swallows the rest of its fragment, so `v:rev` matches `v12`
//! - Trailing separators on the location are ignored; `/` stays the root
//! - No regex to guarantee O(n) matching

use crate::routing::tree::SEPARATOR;

/// Sigil that opens a parameter marker inside a fragment.
pub const PARAM_SIGIL: char = ':';

/// Trait for matching locations against a route condition.
pub trait Matcher: Send + Sync + std::fmt::Debug {
    /// Returns true if the whole location satisfies this condition.
    fn matches(&self, location: &str) -> bool;
}

/// One `/`-delimited piece of a template.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Fragment {
    Literal(String),
    Param { prefix: String, name: String },
}

impl Fragment {
    fn parse(raw: &str) -> Self {
        match raw.split_once(PARAM_SIGIL) {
            Some((prefix, name)) if !name.is_empty() => Fragment::Param {
                prefix: prefix.to_string(),
                name: name.to_string(),
            },
            _ => Fragment::Literal(raw.to_string()),
        }
    }

    /// Returns the captured value for parameters, or `""` for literal hits.
    fn capture<'a>(&self, candidate: &'a str) -> Option<&'a str> {
        match self {
            Fragment::Literal(literal) => (literal == candidate).then_some(""),
            Fragment::Param { prefix, .. } => candidate
                .strip_prefix(prefix.as_str())
                .filter(|rest| !rest.is_empty()),
        }
    }
}

/// A compiled path template such as `/items/:id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathTemplate {
    rooted: bool,
    fragments: Vec<Fragment>,
}

impl PathTemplate {
    pub fn parse(template: &str) -> Self {
        let (rooted, fragments) = split_fragments(template);
        Self {
            rooted,
            fragments: fragments.map(Fragment::parse).collect(),
        }
    }

    /// Match the location and collect the value of every parameter marker.
    ///
    /// Returns `None` when the location does not match.
    pub fn captures(&self, location: &str) -> Option<RouteParams> {
        let (rooted, candidate) = split_fragments(location);
        if rooted != self.rooted {
            return None;
        }

        let candidate: Vec<&str> = candidate.collect();
        if candidate.len() != self.fragments.len() {
            return None;
        }

        let mut params = RouteParams::default();
        for (fragment, value) in self.fragments.iter().zip(candidate) {
            let captured = fragment.capture(value)?;
            if let Fragment::Param { name, .. } = fragment {
                params.push(name, captured);
            }
        }
        Some(params)
    }
}

impl Matcher for PathTemplate {
    fn matches(&self, location: &str) -> bool {
        self.captures(location).is_some()
    }
}

/// Parameter values captured from a matched location, in template order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams {
    values: Vec<(String, String)>,
}

impl RouteParams {
    fn push(&mut self, name: &str, value: &str) {
        self.values.push((name.to_string(), value.to_string()));
    }

    /// Value of the first marker with this name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }
}

/// Strip trailing separators. The root and the empty string become `/`.
pub fn normalize_location(location: &str) -> &str {
    let trimmed = location.trim_end_matches(SEPARATOR);
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}

fn split_fragments(path: &str) -> (bool, impl Iterator<Item = &str>) {
    let normalized = normalize_location(path);
    let (rooted, rest) = match normalized.strip_prefix(SEPARATOR) {
        Some(rest) => (true, rest),
        None => (false, normalized),
    };
    // The root itself has no fragments.
    let rest = if rest.is_empty() { None } else { Some(rest) };
    (rooted, rest.into_iter().flat_map(|r| r.split(SEPARATOR)))
}

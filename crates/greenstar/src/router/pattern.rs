//! Route path patterns: parsing, matching and ranking

use std::collections::HashSet;
use std::fmt;

use super::params::{ParamValue, RouteParams};
use crate::error::RouteError;

/// Rank of a static segment (and of the root pattern `/`).
const STATIC_SCORE: i32 = 80;

/// Rank of a single-segment parameter.
const PARAM_SCORE: i32 = 40;

/// Rank of a catch-all parameter; below everything else.
const CATCH_ALL_SCORE: i32 = -20;

/// Suffix marking a parameter as catch-all: `:name(.*)*`.
const CATCH_ALL_SUFFIX: &str = "(.*)*";

/// One `/`-separated piece of a pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal text, compared case-insensitively
    Static(String),

    /// `:name` — exactly one non-empty segment
    Param(String),

    /// `:name(.*)*` — zero or more trailing segments
    CatchAll(String),
}

impl Segment {
    fn score(&self) -> i32 {
        match self {
            Segment::Static(_) => STATIC_SCORE,
            Segment::Param(_) => PARAM_SCORE,
            Segment::CatchAll(_) => CATCH_ALL_SCORE,
        }
    }
}

/// A parsed route pattern such as `/post/:type/:id`.
///
/// # Example
///
/// ```
/// use greenstar::RoutePattern;
///
/// let pattern = RoutePattern::parse("/post/:type/:id").unwrap();
/// let params = pattern.match_path("/post/algorithm/7").unwrap();
///
/// assert_eq!(params.get_str("type"), Some("algorithm"));
/// assert_eq!(params.get_str("id"), Some("7"));
/// assert!(pattern.match_path("/post/algorithm").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    source: String,
    segments: Vec<Segment>,
    score: Vec<i32>,
}

impl RoutePattern {
    /// Parse a pattern string.
    ///
    /// # Errors
    ///
    /// `InvalidPattern` when the pattern does not start with `/`, a
    /// parameter has an empty or repeated name, a parameter uses a custom
    /// regex other than the catch-all form, or a catch-all is not last.
    pub fn parse(pattern: &str) -> Result<Self, RouteError> {
        let invalid = |reason: &str| RouteError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: reason.to_string(),
        };

        if !pattern.starts_with('/') {
            return Err(invalid("must start with '/'"));
        }

        let pieces: Vec<&str> = split_segments(pattern).collect();
        let mut segments = Vec::with_capacity(pieces.len());
        let mut seen = HashSet::new();

        for (i, piece) in pieces.iter().enumerate() {
            let segment = match piece.strip_prefix(':') {
                Some(rest) => {
                    let (name, catch_all) = match rest.strip_suffix(CATCH_ALL_SUFFIX) {
                        Some(name) => (name, true),
                        None => (rest, false),
                    };
                    if name.is_empty() {
                        return Err(invalid("empty parameter name"));
                    }
                    if !name.chars().all(|c| c.is_alphanumeric() || c == '_') {
                        return Err(invalid("unsupported parameter syntax"));
                    }
                    if !seen.insert(name) {
                        return Err(invalid("duplicate parameter name"));
                    }
                    if catch_all {
                        if i + 1 != pieces.len() {
                            return Err(invalid("catch-all parameter must be last"));
                        }
                        Segment::CatchAll(name.to_string())
                    } else {
                        Segment::Param(name.to_string())
                    }
                }
                None => Segment::Static((*piece).to_string()),
            };
            segments.push(segment);
        }

        let score = if segments.is_empty() {
            vec![STATIC_SCORE]
        } else {
            segments.iter().map(Segment::score).collect()
        };

        Ok(Self {
            source: pattern.to_string(),
            segments,
            score,
        })
    }

    /// The pattern as written.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Parsed segments.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Names of all parameters, in pattern order.
    pub fn param_names(&self) -> Vec<&str> {
        self.segments
            .iter()
            .filter_map(|s| match s {
                Segment::Param(name) | Segment::CatchAll(name) => Some(name.as_str()),
                Segment::Static(_) => None,
            })
            .collect()
    }

    /// Ranking key; a higher key wins when several patterns match.
    ///
    /// Keys compare lexicographically, so a longer key beats any of its
    /// own prefixes.
    pub fn score(&self) -> &[i32] {
        &self.score
    }

    /// Whether this pattern ends in a catch-all parameter.
    pub fn is_catch_all(&self) -> bool {
        matches!(self.segments.last(), Some(Segment::CatchAll(_)))
    }

    /// Match a path (no query or fragment) against this pattern.
    ///
    /// Empty segments are ignored, so trailing and doubled slashes are
    /// tolerated. Parameter values are percent-decoded.
    pub fn match_path(&self, path: &str) -> Option<RouteParams> {
        let parts: Vec<&str> = split_segments(path).collect();
        self.match_segments(&parts)
    }

    pub(crate) fn match_segments(&self, parts: &[&str]) -> Option<RouteParams> {
        let mut params = RouteParams::new();
        let mut i = 0;

        for segment in &self.segments {
            match segment {
                Segment::Static(text) => {
                    let part = parts.get(i)?;
                    if !part.eq_ignore_ascii_case(text) {
                        return None;
                    }
                    i += 1;
                }
                Segment::Param(name) => {
                    let part = parts.get(i)?;
                    params.insert(name.clone(), ParamValue::Single(percent_decode(part)));
                    i += 1;
                }
                Segment::CatchAll(name) => {
                    let rest = parts[i..].iter().map(|p| percent_decode(p)).collect();
                    params.insert(name.clone(), ParamValue::Repeated(rest));
                    i = parts.len();
                }
            }
        }

        (i == parts.len()).then_some(params)
    }
}

impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Non-empty `/`-separated pieces of a path.
pub(crate) fn split_segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

/// Decode `%XX` escapes. Malformed escapes are kept literally and invalid
/// UTF-8 is replaced.
pub(crate) fn percent_decode(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'%' {
            let hi = bytes.get(i + 1).and_then(hex_value);
            let lo = bytes.get(i + 2).and_then(hex_value);
            if let (Some(hi), Some(lo)) = (hi, lo) {
                out.push((hi << 4) | lo);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }

    String::from_utf8_lossy(&out).into_owned()
}

/// Escape the characters that would change how a segment is parsed.
pub(crate) fn percent_encode_segment(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '%' => out.push_str("%25"),
            '/' => out.push_str("%2F"),
            '?' => out.push_str("%3F"),
            '#' => out.push_str("%23"),
            ' ' => out.push_str("%20"),
            _ => out.push(c),
        }
    }
    out
}

fn hex_value(b: &u8) -> Option<u8> {
    (*b as char).to_digit(16).map(|d| d as u8)
}

//! Path normalization and tokenization.
//!
//! # Responsibilities
//! - Strip a single leading `/`
//! - Recognize the zero-length path (`""` and `"/"`)
//! - Produce the token sequence `[segment_count, segment_0, ..]` shared by
//!   insertion and lookup
//!
//! # Design Decisions
//! - No other normalization: trailing and doubled slashes yield empty segments
//! - Segments borrow from the input path; only the count token allocates

/// Prefix marking a parameter segment (`:id`).
pub const PARAM_PREFIX: char = ':';

/// Strip one leading `/`.
///
/// Returns `None` for the zero-length path, which is stored on the tree root.
pub fn normalize(path: &str) -> Option<&str> {
    if path.is_empty() || path == "/" {
        return None;
    }
    Some(path.strip_prefix('/').unwrap_or(path))
}

/// Name bound by a parameter segment, or `None` for a literal segment.
pub fn param_name(segment: &str) -> Option<&str> {
    segment.strip_prefix(PARAM_PREFIX)
}

/// A non-empty path split into tree tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathTokens<'a> {
    count: String,
    segments: Vec<&'a str>,
}

impl<'a> PathTokens<'a> {
    /// Split a path (pattern or concrete) into tokens.
    ///
    /// Returns `None` for the zero-length path.
    pub fn parse(path: &'a str) -> Option<Self> {
        let segments: Vec<&str> = normalize(path)?.split('/').collect();
        Some(Self {
            count: segments.len().to_string(),
            segments,
        })
    }

    /// The `/`-delimited segments, without the count token.
    pub fn segments(&self) -> &[&'a str] {
        &self.segments
    }

    /// Full token sequence, starting with the segment count.
    pub fn tokens(&self) -> Vec<&str> {
        let mut tokens = Vec::with_capacity(self.segments.len() + 1);
        tokens.push(self.count.as_str());
        tokens.extend_from_slice(&self.segments);
        tokens
    }

    /// Owned token sequence, used as a shape key when comparing patterns.
    pub fn to_shape(&self) -> Vec<String> {
        self.tokens().into_iter().map(str::to_owned).collect()
    }
}

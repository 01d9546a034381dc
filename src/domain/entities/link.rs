//! Short link entities.

/// A stored mapping from a short id to its target URL.
///
/// Created once per distinct target URL string and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortLink {
    pub short_id: String,
    pub target_url: String,
}

impl ShortLink {
    /// Creates a new ShortLink instance.
    pub fn new(short_id: impl Into<String>, target_url: impl Into<String>) -> Self {
        Self {
            short_id: short_id.into(),
            target_url: target_url.into(),
        }
    }
}

/// Read-only view of a short link together with its click counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkDetails {
    pub short_id: String,
    pub target_url: String,
    pub click_count: u64,
}

//! Parsing options and configuration.

/// Options for parsing CV Markdown.
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    /// What to do with unrecognized contact-block keys.
    pub link_policy: LinkPolicy,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the link policy.
    pub fn with_link_policy(mut self, policy: LinkPolicy) -> Self {
        self.link_policy = policy;
        self
    }

    /// Keep only `linkedin`/`github` contact keys as links.
    pub fn known_links_only(mut self) -> Self {
        self.link_policy = LinkPolicy::KnownOnly;
        self
    }
}

/// Policy for contact-block keys that are not one of the modeled
/// fields (`title`, `phone`, `location`, `email`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinkPolicy {
    /// Keep every unrecognized `key: value` pair as a link, in
    /// encounter order. Lossless: serialization reproduces the pair.
    #[default]
    Preserve,
    /// Keep only `linkedin` and `github`; drop everything else.
    KnownOnly,
}

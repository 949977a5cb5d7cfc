//! Scan Options
//!
//! Configuration for a traversal session. The defaults match the lenient
//! behaviour expected by service-response consumers.

/// What to do when a tag declares more attributes than a node can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AttributeOverflow {
    /// Keep the first [`MAX_ATTRIBUTES`](crate::MAX_ATTRIBUTES) and drop the rest
    #[default]
    Truncate,
    /// Fail with [`ScanError::TooManyAttributes`](crate::ScanError::TooManyAttributes)
    Reject,
}

/// Default bound on the scope stack
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Options controlling a [`Context`](crate::Context)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanOptions {
    /// Attribute overflow policy
    pub attribute_overflow: AttributeOverflow,
    /// Maximum number of simultaneously open scopes (document level included)
    pub max_depth: usize,
}

impl ScanOptions {
    /// Lenient options: truncate surplus attributes
    pub const fn new() -> Self {
        ScanOptions {
            attribute_overflow: AttributeOverflow::Truncate,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Strict options: surplus attributes are an error
    pub const fn strict() -> Self {
        ScanOptions {
            attribute_overflow: AttributeOverflow::Reject,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Override the nesting bound
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Override the attribute overflow policy
    pub const fn with_attribute_overflow(mut self, policy: AttributeOverflow) -> Self {
        self.attribute_overflow = policy;
        self
    }
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_lenient() {
        let opts = ScanOptions::default();
        assert_eq!(opts.attribute_overflow, AttributeOverflow::Truncate);
        assert_eq!(opts.max_depth, DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn test_builders() {
        let opts = ScanOptions::strict().with_max_depth(3);
        assert_eq!(opts.attribute_overflow, AttributeOverflow::Reject);
        assert_eq!(opts.max_depth, 3);

        let relaxed = opts.with_attribute_overflow(AttributeOverflow::Truncate);
        assert_eq!(relaxed.attribute_overflow, AttributeOverflow::Truncate);
    }
}

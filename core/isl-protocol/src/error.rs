use alloc::string::String;
use core::fmt;

/// The tagging collaborator could not process a sentence.
///
/// Callers of the reorderer recover from this locally with the
/// uppercase fallback gloss; it is never surfaced to end users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaggingFailure {
    /// Nothing taggable in the input.
    EmptyInput,
    /// A tagger record failed boundary validation.
    MalformedToken { index: usize, reason: String },
    /// The tagger itself reported an error.
    Collaborator(String),
}

impl fmt::Display for TaggingFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaggingFailure::EmptyInput => write!(f, "nothing to tag in input"),
            TaggingFailure::MalformedToken { index, reason } => {
                write!(f, "malformed token at index {}: {}", index, reason)
            }
            TaggingFailure::Collaborator(msg) => write!(f, "tagger failed: {}", msg),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TaggingFailure {}

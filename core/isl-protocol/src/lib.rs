#![no_std] // Shared with the wasm platform

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod error;
pub mod ids;
pub mod tagging;

pub use error::TaggingFailure;
pub use ids::{LemmaId, SubmissionId};
pub use tagging::*;

pub mod model;
pub use model::*;

use alloc::vec::Vec;

/// Part-of-speech / dependency tagger.
///
/// Implementations return one [`TaggedToken`] per word or punctuation unit,
/// in sentence order.
pub trait Tagger {
    fn tag(&self, sentence: &str) -> Result<Vec<TaggedToken>, TaggingFailure>;
}

impl<T: Tagger + ?Sized> Tagger for &T {
    fn tag(&self, sentence: &str) -> Result<Vec<TaggedToken>, TaggingFailure> {
        (**self).tag(sentence)
    }
}

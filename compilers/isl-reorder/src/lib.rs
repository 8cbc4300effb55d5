//! English -> Indian Sign Language gloss reordering.
//!
//! Tagged tokens are sorted into role buckets and emitted in signing order:
//! time, subject, object, other nouns, adjectives, verbs. Duplicates are
//! dropped at assembly. [`GlossPipeline`] wires the reorderer to the
//! optional translation and emotion steps.

pub mod buckets;
pub mod emotion;
pub mod pipeline;
pub mod reorder;

pub use buckets::{classify, classify_token, Bucket, Buckets};
pub use emotion::KeywordEmotionClassifier;
pub use pipeline::{
    select_emotion, EmotionClassifier, GlossPipeline, GlossReport, PipelineError, SpeechText,
    Translator,
};
pub use reorder::{
    assemble, convert_sentence, convert_to_gloss, gloss_sentence, try_convert_sentence,
    GlossOutcome,
};

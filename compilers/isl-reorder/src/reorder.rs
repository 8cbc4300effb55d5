use isl_protocol::{GlossSentence, TaggedToken, Tagger, TaggingFailure};

use crate::buckets::{classify, Buckets};

/// Concatenates the buckets in signing order and keeps the first
/// occurrence of every lemma.
pub fn assemble(buckets: &Buckets) -> GlossSentence {
    GlossSentence::dedup_from(buckets.concat().cloned())
}

/// Reorders tagged tokens into ISL gloss order.
///
/// Total over any token sequence: unclassifiable tokens are dropped and an
/// empty sequence gives an empty gloss.
pub fn convert_to_gloss(tokens: &[TaggedToken]) -> GlossSentence {
    assemble(&classify(tokens))
}

/// Tags `sentence` and reorders it, reporting tagger failures to the caller.
pub fn try_convert_sentence<T>(tagger: &T, sentence: &str) -> Result<GlossSentence, TaggingFailure>
where
    T: Tagger + ?Sized,
{
    let tokens = tagger.tag(sentence)?;
    Ok(convert_to_gloss(&tokens))
}

/// Result of glossing a sentence, remembering whether the fallback was used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GlossOutcome {
    Reordered(GlossSentence),
    Fallback {
        gloss: GlossSentence,
        failure: TaggingFailure,
    },
}

impl GlossOutcome {
    pub fn gloss(&self) -> &GlossSentence {
        match self {
            GlossOutcome::Reordered(gloss) => gloss,
            GlossOutcome::Fallback { gloss, .. } => gloss,
        }
    }

    pub fn into_gloss(self) -> GlossSentence {
        match self {
            GlossOutcome::Reordered(gloss) => gloss,
            GlossOutcome::Fallback { gloss, .. } => gloss,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, GlossOutcome::Fallback { .. })
    }

    pub fn failure(&self) -> Option<&TaggingFailure> {
        match self {
            GlossOutcome::Reordered(_) => None,
            GlossOutcome::Fallback { failure, .. } => Some(failure),
        }
    }
}

/// Glosses a sentence, degrading to the uppercased whitespace split when
/// tagging fails.
pub fn gloss_sentence<T>(tagger: &T, sentence: &str) -> GlossOutcome
where
    T: Tagger + ?Sized,
{
    match try_convert_sentence(tagger, sentence) {
        Ok(gloss) => GlossOutcome::Reordered(gloss),
        Err(failure) => {
            tracing::warn!(%failure, "tagging failed, using fallback gloss");
            GlossOutcome::Fallback {
                gloss: GlossSentence::fallback(sentence),
                failure,
            }
        }
    }
}

/// Like [`gloss_sentence`] but only returns the gloss.
pub fn convert_sentence<T>(tagger: &T, sentence: &str) -> GlossSentence
where
    T: Tagger + ?Sized,
{
    gloss_sentence(tagger, sentence).into_gloss()
}

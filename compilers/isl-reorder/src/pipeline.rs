//! Sentence -> (translation) -> gloss -> emotion.
//!
//! Collaborators are handed in by the caller; the pipeline keeps no state
//! of its own between requests.

use isl_protocol::{Emotion, GlossSentence, Language, Tagger};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::reorder::gloss_sentence;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum PipelineError {
    #[error("unsupported source language: {0:?}")]
    UnsupportedLanguage(String),
    #[error("no translator configured for source language {0}")]
    TranslatorUnavailable(Language),
    #[error("translation failed: {0}")]
    Translation(String),
    #[error("emotion classification failed: {0}")]
    Classification(String),
}

/// Scores text against a set of emotion labels.
pub trait EmotionClassifier {
    /// A distribution over labels; the pipeline picks the strongest.
    fn classify(&self, text: &str) -> Result<Vec<Emotion>, PipelineError>;
}

/// Maps text in a supported language to English.
pub trait Translator {
    fn translate(&self, text: &str, source: Language) -> Result<String, PipelineError>;
}

/// Incoming request, as posted by the speech front-end.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechText {
    pub text: String,
    #[serde(default, alias = "lang")]
    pub source_language: Option<String>,
}

impl SpeechText {
    pub fn english(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source_language: None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GlossReport {
    pub original_text: String,
    /// English text the gloss was built from, when translation ran.
    pub translated_text: Option<String>,
    pub isl_text: String,
    pub gloss: GlossSentence,
    pub emotion: Option<Emotion>,
    /// The tagger failed and `gloss` is the uppercase fallback.
    pub fallback: bool,
}

/// Picks the highest-confidence label. Ties keep the earlier label, NaN
/// scores are ignored and confidences are clamped to `[0, 1]`.
pub fn select_emotion(scores: Vec<Emotion>) -> Option<Emotion> {
    let mut best: Option<Emotion> = None;
    for score in scores.into_iter().filter(|s| !s.confidence.is_nan()) {
        match &best {
            Some(current) if score.confidence <= current.confidence => {}
            _ => best = Some(score),
        }
    }
    best.map(|mut e| {
        e.confidence = e.confidence.clamp(0.0, 1.0);
        e
    })
}

pub struct GlossPipeline<'a> {
    tagger: &'a dyn Tagger,
    classifier: Option<&'a dyn EmotionClassifier>,
    translator: Option<&'a dyn Translator>,
}

impl<'a> GlossPipeline<'a> {
    pub fn new(tagger: &'a dyn Tagger) -> Self {
        Self {
            tagger,
            classifier: None,
            translator: None,
        }
    }

    pub fn with_classifier(mut self, classifier: &'a dyn EmotionClassifier) -> Self {
        self.classifier = Some(classifier);
        self
    }

    pub fn with_translator(mut self, translator: &'a dyn Translator) -> Self {
        self.translator = Some(translator);
        self
    }

    /// Returns the English rendering of `text`, or `None` when it already is
    /// English. A blank language code counts as English.
    pub fn to_english(&self, text: &str, source: Option<&str>) -> Result<Option<String>, PipelineError> {
        let code = match source.map(str::trim) {
            Some(code) if !code.is_empty() => code,
            _ => return Ok(None),
        };

        let language = Language::from_code(code)
            .ok_or_else(|| PipelineError::UnsupportedLanguage(code.to_string()))?;
        if language == Language::English {
            return Ok(None);
        }

        let translator = self
            .translator
            .ok_or(PipelineError::TranslatorUnavailable(language))?;
        let english = translator.translate(text, language)?;
        tracing::debug!(%language, "translated to English");
        Ok(Some(english))
    }

    pub fn process(&self, request: &SpeechText) -> Result<GlossReport, PipelineError> {
        let translated = self.to_english(&request.text, request.source_language.as_deref())?;
        let english = translated.as_deref().unwrap_or(&request.text);

        let outcome = gloss_sentence(self.tagger, english);
        let fallback = outcome.is_fallback();
        let gloss = outcome.into_gloss();

        let emotion = match self.classifier {
            Some(classifier) => select_emotion(classifier.classify(english)?),
            None => None,
        };

        tracing::debug!(gloss = %gloss, fallback, "processed sentence");
        Ok(GlossReport {
            original_text: request.text.clone(),
            translated_text: translated,
            isl_text: gloss.to_gloss_string(),
            gloss,
            emotion,
            fallback,
        })
    }
}

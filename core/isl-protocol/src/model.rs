use alloc::collections::BTreeSet;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use rkyv::{Archive, Deserialize, Serialize};

use crate::ids::LemmaId;
use crate::tagging::PartOfSpeech;

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// One word or punctuation unit as produced by a tagger.
///
/// Fields are read-only once built; taggers validate their output before
/// constructing it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(SerdeSerialize))]
pub struct TaggedToken {
    surface: String,
    lemma: String,
    pos: PartOfSpeech,
    dep: String,
}

impl TaggedToken {
    pub fn new(
        surface: impl Into<String>,
        lemma: impl Into<String>,
        pos: PartOfSpeech,
        dep: impl Into<String>,
    ) -> Self {
        Self {
            surface: surface.into(),
            lemma: lemma.into(),
            pos,
            dep: dep.into(),
        }
    }

    pub fn surface(&self) -> &str {
        &self.surface
    }

    pub fn lemma(&self) -> &str {
        &self.lemma
    }

    pub fn pos(&self) -> PartOfSpeech {
        self.pos
    }

    /// Dependency relation label (`"nsubj"`, `"dobj"`, `"ROOT"`, ...).
    pub fn dep(&self) -> &str {
        &self.dep
    }
}

/// Uppercase lemmas in ISL signing order.
///
/// Built through [`GlossSentence::dedup_from`] no lemma appears twice.
/// [`GlossSentence::fallback`] is the exception: it keeps the sentence
/// verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct GlossSentence {
    tokens: Vec<String>,
}

impl GlossSentence {
    /// Keeps the first occurrence of every token, in order.
    pub fn dedup_from<I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut seen = BTreeSet::new();
        let tokens = tokens
            .into_iter()
            .filter(|token| seen.insert(token.clone()))
            .collect();
        Self { tokens }
    }

    /// Last-resort gloss: the uppercased sentence split on whitespace.
    pub fn fallback(sentence: &str) -> Self {
        Self {
            tokens: sentence.split_whitespace().map(str::to_uppercase).collect(),
        }
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn into_tokens(self) -> Vec<String> {
        self.tokens
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Space-delimited form handed to string-based collaborators.
    pub fn to_gloss_string(&self) -> String {
        self.tokens.join(" ")
    }
}

impl fmt::Display for GlossSentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(token)?;
        }
        Ok(())
    }
}

/// A label with its classifier confidence in `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct Emotion {
    pub label: String,
    pub confidence: f32,
}

impl Emotion {
    pub fn new(label: impl Into<String>, confidence: f32) -> Self {
        Self {
            label: label.into(),
            confidence,
        }
    }
}

/// Source languages the translation step accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub enum Language {
    English,
    Hindi,
    Bengali,
    Tamil,
    Telugu,
    Marathi,
    Gujarati,
    Kannada,
    Malayalam,
    Punjabi,
    Urdu,
}

impl Language {
    pub const ALL: [Language; 11] = [
        Language::English,
        Language::Hindi,
        Language::Bengali,
        Language::Tamil,
        Language::Telugu,
        Language::Marathi,
        Language::Gujarati,
        Language::Kannada,
        Language::Malayalam,
        Language::Punjabi,
        Language::Urdu,
    ];

    /// ISO-639-1 code.
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Hindi => "hi",
            Language::Bengali => "bn",
            Language::Tamil => "ta",
            Language::Telugu => "te",
            Language::Marathi => "mr",
            Language::Gujarati => "gu",
            Language::Kannada => "kn",
            Language::Malayalam => "ml",
            Language::Punjabi => "pa",
            Language::Urdu => "ur",
        }
    }

    /// Resolve `"hi"`, `" HI "` or `"hi-IN"`. Unknown codes give `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        let primary = code.trim().split(['-', '_']).next().unwrap_or_default();
        Self::ALL
            .iter()
            .copied()
            .find(|lang| lang.code().eq_ignore_ascii_case(primary))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct LexEntry {
    pub id: LemmaId,
    pub surface: String,
    pub lemma: String,
    pub pos: PartOfSpeech,
}

/// Word list consumed by the rule tagger, compiled to rkyv by `gloss-tool`.
#[derive(Debug, Clone, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct Lexicon {
    pub version: u32,
    pub entries: Vec<LexEntry>,
}

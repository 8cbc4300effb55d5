//! Boundary for external taggers.
//!
//! Tagger services hand back JSON token records; they are validated here
//! into fixed-shape [`TaggedToken`]s before anything downstream sees them.

use isl_protocol::{PartOfSpeech, TaggedToken, TaggingFailure};
use serde::Deserialize;

/// One token record as emitted by an external tagger. spaCy's attribute
/// names (`lemma_`, `pos_`, `dep_`) are accepted as aliases.
#[derive(Debug, Clone, Deserialize)]
pub struct TaggerRecord {
    #[serde(alias = "orth", alias = "surface")]
    pub text: String,
    #[serde(alias = "lemma_")]
    pub lemma: String,
    #[serde(alias = "pos_", alias = "upos")]
    pub pos: String,
    #[serde(alias = "dep_", alias = "deprel")]
    pub dep: String,
}

impl TaggerRecord {
    pub fn validate(self, index: usize) -> Result<TaggedToken, TaggingFailure> {
        if self.lemma.trim().is_empty() {
            return Err(TaggingFailure::MalformedToken {
                index,
                reason: format!("empty lemma for {:?}", self.text),
            });
        }
        if self.dep.trim().is_empty() {
            return Err(TaggingFailure::MalformedToken {
                index,
                reason: format!("empty dependency relation for {:?}", self.text),
            });
        }

        Ok(TaggedToken::new(
            self.text,
            self.lemma.trim(),
            PartOfSpeech::from_tag(&self.pos),
            self.dep.trim(),
        ))
    }
}

/// Validates a batch of records. Whitespace-only tokens (which some taggers
/// emit for repeated spaces) are dropped rather than rejected.
pub fn validate_records(records: Vec<TaggerRecord>) -> Result<Vec<TaggedToken>, TaggingFailure> {
    records
        .into_iter()
        .enumerate()
        .filter(|(index, record)| {
            let blank = record.text.trim().is_empty();
            if blank {
                tracing::debug!(index, "dropping whitespace token");
            }
            !blank
        })
        .map(|(index, record)| record.validate(index))
        .collect()
}

/// Parses a JSON array of tagger records.
pub fn parse_tagger_output(json: &str) -> Result<Vec<TaggedToken>, TaggingFailure> {
    let records: Vec<TaggerRecord> = serde_json::from_str(json)
        .map_err(|e| TaggingFailure::Collaborator(format!("invalid tagger output: {e}")))?;
    validate_records(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_and_spacy_names() {
        let json = r#"[
            {"text": "I", "lemma": "I", "pos": "PRON", "dep": "nsubj"},
            {"text": "eat", "lemma_": "eat", "pos_": "VERB", "dep_": "ROOT"},
            {"orth": "rice", "lemma": "rice", "upos": "NOUN", "deprel": "dobj"}
        ]"#;

        let tokens = parse_tagger_output(json).unwrap();
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].pos(), PartOfSpeech::Other);
        assert_eq!(tokens[1].pos(), PartOfSpeech::Verb);
        assert_eq!(tokens[2].surface(), "rice");
        assert_eq!(tokens[2].dep(), "dobj");
    }

    #[test]
    fn test_invalid_json_is_collaborator_failure() {
        let err = parse_tagger_output("{not json").unwrap_err();
        assert!(matches!(err, TaggingFailure::Collaborator(_)));

        let err = parse_tagger_output(r#"[{"text": "x"}]"#).unwrap_err();
        assert!(matches!(err, TaggingFailure::Collaborator(_)));
    }

    #[test]
    fn test_empty_lemma_is_malformed() {
        let json = r#"[
            {"text": "cat", "lemma": "cat", "pos": "NOUN", "dep": "nsubj"},
            {"text": "sat", "lemma": "  ", "pos": "VERB", "dep": "ROOT"}
        ]"#;
        let err = parse_tagger_output(json).unwrap_err();
        assert!(matches!(err, TaggingFailure::MalformedToken { index: 1, .. }));
    }

    #[test]
    fn test_whitespace_tokens_dropped() {
        let json = r#"[
            {"text": "hi", "lemma": "hi", "pos": "INTJ", "dep": "ROOT"},
            {"text": "  ", "lemma": "  ", "pos": "SPACE", "dep": ""}
        ]"#;
        let tokens = parse_tagger_output(json).unwrap();
        assert_eq!(tokens.len(), 1);
    }

    #[test]
    fn test_empty_array_is_valid() {
        assert_eq!(parse_tagger_output("[]").unwrap(), Vec::new());
    }
}

use isl_protocol::{ArchivedLexicon, Lexicon};
use rkyv::ser::{serializers::AllocSerializer, Serializer};
use rkyv::AlignedVec;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("lexicon archive failed validation: {0}")]
    Corrupt(String),
    #[error("lexicon entry {index} has an empty {field}")]
    EmptyField { index: usize, field: &'static str },
    #[error("failed to serialize lexicon: {0}")]
    Serialize(String),
}

/// Checks entries and serializes the lexicon to an rkyv archive.
pub fn compile_lexicon(lexicon: &Lexicon) -> Result<AlignedVec, LexiconError> {
    for (index, entry) in lexicon.entries.iter().enumerate() {
        if entry.surface.trim().is_empty() {
            return Err(LexiconError::EmptyField { index, field: "surface" });
        }
        if entry.lemma.trim().is_empty() {
            return Err(LexiconError::EmptyField { index, field: "lemma" });
        }
    }

    let mut serializer = AllocSerializer::<256>::default();
    serializer
        .serialize_value(lexicon)
        .map_err(|e| LexiconError::Serialize(format!("{e:?}")))?;
    Ok(serializer.into_serializer().into_inner())
}

/// Validates archive bytes and returns the zero-copy view.
///
/// `bytes` must be aligned for the archive; [`aligned`] copies arbitrary
/// bytes (e.g. read from disk) into a suitable buffer.
pub fn load_lexicon(bytes: &[u8]) -> Result<&ArchivedLexicon, LexiconError> {
    rkyv::check_archived_root::<Lexicon>(bytes).map_err(|e| LexiconError::Corrupt(e.to_string()))
}

pub fn aligned(bytes: &[u8]) -> AlignedVec {
    let mut buf = AlignedVec::with_capacity(bytes.len());
    buf.extend_from_slice(bytes);
    buf
}

#[cfg(test)]
mod tests {
    use super::*;
    use isl_protocol::{LemmaId, LexEntry, PartOfSpeech};

    fn entry(id: u32, surface: &str, lemma: &str) -> LexEntry {
        LexEntry {
            id: LemmaId(id),
            surface: surface.to_string(),
            lemma: lemma.to_string(),
            pos: PartOfSpeech::Noun,
        }
    }

    #[test]
    fn test_compile_then_load() {
        let lexicon = Lexicon {
            version: 1,
            entries: vec![entry(1, "dogs", "dog")],
        };
        let bytes = compile_lexicon(&lexicon).unwrap();
        let archived = load_lexicon(&bytes).unwrap();
        assert_eq!(archived.entries.len(), 1);
        assert_eq!(archived.entries[0].surface.as_str(), "dogs");

        let copied = aligned(bytes.as_slice());
        assert!(load_lexicon(&copied).is_ok());
    }

    #[test]
    fn test_empty_lemma_rejected() {
        let lexicon = Lexicon {
            version: 1,
            entries: vec![entry(1, "dogs", "dog"), entry(2, "cats", " ")],
        };
        assert!(matches!(
            compile_lexicon(&lexicon),
            Err(LexiconError::EmptyField { index: 1, field: "lemma" })
        ));
    }

    #[test]
    fn test_garbage_bytes_rejected() {
        let garbage = aligned(&[0xFF; 3]);
        assert!(matches!(load_lexicon(&garbage), Err(LexiconError::Corrupt(_))));
    }
}

use rkyv::{Archive, Deserialize, Serialize};

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

use bitflags::bitflags;

/// Coarse part-of-speech classes the reorderer distinguishes.
///
/// Every Universal-POS tag outside the five named classes (PRON, DET, AUX,
/// ADP, PUNCT, ...) collapses into [`PartOfSpeech::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum PartOfSpeech {
    Verb = 0,
    Noun = 1,
    Propn = 2,
    Adj = 3,
    Adv = 4,
    Other = 5,
}

impl PartOfSpeech {
    /// Parse a Universal-POS tag (`"VERB"`, `"propn"`, ...). Never fails.
    pub fn from_tag(tag: &str) -> Self {
        let tag = tag.trim();
        if tag.eq_ignore_ascii_case("VERB") {
            Self::Verb
        } else if tag.eq_ignore_ascii_case("NOUN") {
            Self::Noun
        } else if tag.eq_ignore_ascii_case("PROPN") {
            Self::Propn
        } else if tag.eq_ignore_ascii_case("ADJ") {
            Self::Adj
        } else if tag.eq_ignore_ascii_case("ADV") {
            Self::Adv
        } else {
            Self::Other
        }
    }

    pub fn as_tag(&self) -> &'static str {
        match self {
            Self::Verb => "VERB",
            Self::Noun => "NOUN",
            Self::Propn => "PROPN",
            Self::Adj => "ADJ",
            Self::Adv => "ADV",
            Self::Other => "OTHER",
        }
    }

    pub fn flag(&self) -> PosFlags {
        match self {
            Self::Verb => PosFlags::VERB,
            Self::Noun => PosFlags::NOUN,
            Self::Propn => PosFlags::PROPN,
            Self::Adj => PosFlags::ADJ,
            Self::Adv => PosFlags::ADV,
            Self::Other => PosFlags::OTHER,
        }
    }

    pub fn is_any(&self, set: PosFlags) -> bool {
        set.contains(self.flag())
    }
}

impl From<&ArchivedPartOfSpeech> for PartOfSpeech {
    fn from(archived: &ArchivedPartOfSpeech) -> Self {
        match archived {
            ArchivedPartOfSpeech::Verb => Self::Verb,
            ArchivedPartOfSpeech::Noun => Self::Noun,
            ArchivedPartOfSpeech::Propn => Self::Propn,
            ArchivedPartOfSpeech::Adj => Self::Adj,
            ArchivedPartOfSpeech::Adv => Self::Adv,
            ArchivedPartOfSpeech::Other => Self::Other,
        }
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    #[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
    pub struct PosFlags: u8 {
        const VERB = 1;
        const NOUN = 2;
        const PROPN = 4;
        const ADJ = 8;
        const ADV = 16;
        const OTHER = 32;

        // Nouns the reorderer treats alike
        const NOMINAL = Self::NOUN.bits() | Self::PROPN.bits();
    }
}

use isl_protocol::{PartOfSpeech, PosFlags};

/// Adverb lemmas fronted as time markers.
pub const TIME_ADVERBS: [&str; 4] = ["now", "today", "tomorrow", "yesterday"];

/// Suffix rewrites tried when a surface form is not in the lexicon.
/// Each rule only yields lemmas of the listed classes.
const INFLECTIONS: &[(&str, &str, PosFlags)] = &[
    ("ies", "y", PosFlags::NOMINAL.union(PosFlags::VERB)),
    ("ves", "f", PosFlags::NOMINAL),
    ("ing", "", PosFlags::VERB),
    ("ing", "e", PosFlags::VERB),
    ("ied", "y", PosFlags::VERB),
    ("ed", "", PosFlags::VERB),
    ("ed", "e", PosFlags::VERB),
    ("es", "", PosFlags::NOMINAL.union(PosFlags::VERB)),
    ("s", "", PosFlags::NOMINAL.union(PosFlags::VERB)),
    ("er", "", PosFlags::ADJ),
    ("est", "", PosFlags::ADJ),
];

/// Gloss form of a lemma: trimmed and uppercased.
pub fn normalize_lemma(lemma: &str) -> String {
    lemma.trim().to_uppercase()
}

pub fn is_time_adverb(lemma: &str) -> bool {
    let lemma = lemma.trim();
    TIME_ADVERBS.iter().any(|t| t.eq_ignore_ascii_case(lemma))
}

/// Candidate `(stem, allowed classes)` pairs for an inflected word, most
/// specific rule first. The word itself is not included.
pub fn candidate_stems(surface: &str) -> Vec<(String, PosFlags)> {
    let lower = surface.to_lowercase();
    let mut out = Vec::new();

    for (suffix, replacement, classes) in INFLECTIONS {
        if let Some(stem) = lower.strip_suffix(suffix) {
            // Keep at least two characters of stem ("is" is not "i" + "s")
            if stem.chars().count() < 2 {
                continue;
            }
            let mut candidate = String::from(stem);
            candidate.push_str(replacement);
            out.push((candidate, *classes));
        }
    }

    out
}

/// Resolves a surface form to a known lemma.
///
/// `known` looks a lowercase lemma up and reports its part of speech.
/// Exact forms win; otherwise the first suffix rule whose stem is known
/// with a matching class.
pub fn lemmatize<F>(surface: &str, known: F) -> Option<(String, PartOfSpeech)>
where
    F: Fn(&str) -> Option<PartOfSpeech>,
{
    let lower = surface.to_lowercase();
    if let Some(pos) = known(&lower) {
        return Some((lower, pos));
    }

    candidate_stems(surface)
        .into_iter()
        .find_map(|(stem, classes)| match known(&stem) {
            Some(pos) if pos.is_any(classes) => Some((stem, pos)),
            _ => None,
        })
}

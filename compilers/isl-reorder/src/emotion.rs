use isl_lexicon::candidate_stems;
use isl_protocol::Emotion;

use crate::pipeline::{EmotionClassifier, PipelineError};

pub const NEUTRAL: &str = "neutral";

/// Labels scored by [`KeywordEmotionClassifier`], in tie-break order.
pub const LABELS: [&str; 6] = ["joy", "sadness", "anger", "fear", "surprise", NEUTRAL];

const KEYWORDS: &[(&str, &[&str])] = &[
    (
        "joy",
        &[
            "happy", "glad", "joy", "love", "like", "enjoy", "great", "wonderful", "smile",
            "laugh", "celebrate", "excite", "thank", "good", "nice", "fun",
        ],
    ),
    (
        "sadness",
        &[
            "sad", "unhappy", "cry", "tear", "miss", "lonely", "sorry", "lose", "lost", "hurt",
            "grief", "depress", "upset", "die",
        ],
    ),
    (
        "anger",
        &[
            "angry", "anger", "hate", "furious", "mad", "annoy", "shout", "fight", "rude",
            "stupid", "worst",
        ],
    ),
    (
        "fear",
        &[
            "afraid", "scare", "fear", "worry", "nervous", "danger", "panic", "anxious",
            "terrify", "help",
        ],
    ),
    (
        "surprise",
        &[
            "surprise", "wow", "amaze", "shock", "unexpected", "sudden", "suddenly", "really",
            "unbelievable",
        ],
    ),
];

/// Lexicon-driven stand-in for a trained emotion model.
///
/// Counts keyword hits per label (inflected forms included) and returns the
/// hit counts normalised to a distribution over [`LABELS`]. Text with no hits
/// is entirely neutral.
#[derive(Debug, Default, Clone, Copy)]
pub struct KeywordEmotionClassifier;

impl KeywordEmotionClassifier {
    pub fn new() -> Self {
        Self
    }

    fn label_of(word: &str) -> Option<&'static str> {
        let direct = KEYWORDS
            .iter()
            .find(|(_, words)| words.contains(&word))
            .map(|(label, _)| *label);

        direct.or_else(|| {
            candidate_stems(word).into_iter().find_map(|(stem, _)| {
                KEYWORDS
                    .iter()
                    .find(|(_, words)| words.contains(&stem.as_str()))
                    .map(|(label, _)| *label)
            })
        })
    }

    /// Raw keyword hit counts, one per label in [`LABELS`] order.
    pub fn hits(&self, text: &str) -> [u32; LABELS.len()] {
        let mut counts = [0u32; LABELS.len()];
        let words = text
            .split(|c: char| !c.is_alphabetic() && c != '\'')
            .filter(|w| !w.is_empty())
            .map(str::to_lowercase);

        for word in words {
            if let Some(label) = Self::label_of(&word) {
                if let Some(slot) = LABELS.iter().position(|l| *l == label) {
                    counts[slot] += 1;
                }
            }
        }
        counts
    }
}

impl EmotionClassifier for KeywordEmotionClassifier {
    fn classify(&self, text: &str) -> Result<Vec<Emotion>, PipelineError> {
        let counts = self.hits(text);
        let total: u32 = counts.iter().sum();

        let scores = LABELS
            .iter()
            .zip(counts)
            .map(|(label, count)| {
                let confidence = match total {
                    0 if *label == NEUTRAL => 1.0,
                    0 => 0.0,
                    _ => count as f32 / total as f32,
                };
                Emotion::new(*label, confidence)
            })
            .collect();

        Ok(scores)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::select_emotion;

    fn top(text: &str) -> Emotion {
        let scores = KeywordEmotionClassifier::new().classify(text).unwrap();
        select_emotion(scores).unwrap()
    }

    #[test]
    fn test_neutral_without_keywords() {
        let scores = KeywordEmotionClassifier.classify("I eat rice").unwrap();
        assert_eq!(scores.len(), LABELS.len());
        assert_eq!(top("I eat rice"), Emotion::new(NEUTRAL, 1.0));
        assert_eq!(top(""), Emotion::new(NEUTRAL, 1.0));
    }

    #[test]
    fn test_inflected_keywords() {
        assert_eq!(top("She was crying all night").label, "sadness");
        assert_eq!(top("We are so happy and laughing").label, "joy");
        assert_eq!(top("Dogs scared the children").label, "fear");
    }

    #[test]
    fn test_scores_are_a_distribution() {
        let scores = KeywordEmotionClassifier
            .classify("I love you but I hate this rain")
            .unwrap();
        let sum: f32 = scores.iter().map(|e| e.confidence).sum();
        assert!((sum - 1.0).abs() < 1e-6);

        // joy and anger tie; joy is listed first
        let best = select_emotion(scores).unwrap();
        assert_eq!(best, Emotion::new("joy", 0.5));
    }

    #[test]
    fn test_hits_ignore_punctuation_and_case() {
        let hits = KeywordEmotionClassifier.hits("WOW! Really?");
        assert_eq!(hits[4], 2);
        assert_eq!(hits.iter().sum::<u32>(), 2);
    }
}

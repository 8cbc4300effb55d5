use std::collections::HashMap;

use isl_lexicon::lemmatize;
use isl_protocol::{ArchivedLexicon, PartOfSpeech, TaggedToken, Tagger, TaggingFailure};

use crate::parser::{parse_with_spans, RawToken};
use crate::syntax::{assign_relations, closed_class, resolve_ambiguous, WordClass};
use crate::token::{Token, TokenKind};

/// Rule-based tagger over an archived [`isl_protocol::Lexicon`].
///
/// Stands in for a statistical tagger: lemmas and parts of speech come from
/// the lexicon (plus suffix stripping), dependency labels from the greedy
/// heuristics in [`crate::syntax`].
pub struct LexiconTagger<'a> {
    by_surface: HashMap<String, (&'a str, PartOfSpeech)>,
    by_lemma: HashMap<String, PartOfSpeech>,
}

#[derive(Debug, Clone)]
struct Analysis {
    lemma: String,
    class: WordClass,
}

impl<'a> LexiconTagger<'a> {
    pub fn new(lexicon: &'a ArchivedLexicon) -> Self {
        let mut by_surface = HashMap::with_capacity(lexicon.entries.len());
        let mut by_lemma = HashMap::with_capacity(lexicon.entries.len());

        for entry in lexicon.entries.iter() {
            let pos = PartOfSpeech::from(&entry.pos);
            by_surface
                .entry(entry.surface.as_str().to_lowercase())
                .or_insert((entry.lemma.as_str(), pos));
            by_lemma
                .entry(entry.lemma.as_str().to_lowercase())
                .or_insert(pos);
        }

        tracing::debug!(
            surfaces = by_surface.len(),
            lemmas = by_lemma.len(),
            "lexicon tagger ready"
        );
        Self { by_surface, by_lemma }
    }

    /// Text -> spanned tokens, without lexical analysis.
    pub fn tokenize<'i>(&self, input: &'i str) -> Vec<Token<'i>> {
        parse_with_spans(input)
            .into_iter()
            .map(|(span, raw)| {
                let kind = match raw {
                    RawToken::Word(_) => TokenKind::Word,
                    RawToken::Number(_) => TokenKind::Number,
                    RawToken::Punct(c) => TokenKind::Punctuation(c),
                };
                Token {
                    span,
                    text: &input[span.start..span.end],
                    kind,
                }
            })
            .collect()
    }

    fn analyze(&self, token: &Token<'_>, sentence_initial: bool) -> Analysis {
        match token.kind {
            TokenKind::Punctuation(_) => {
                return Analysis {
                    lemma: token.text.to_string(),
                    class: WordClass::Punctuation,
                }
            }
            TokenKind::Number => {
                return Analysis {
                    lemma: token.text.to_string(),
                    class: WordClass::Number,
                }
            }
            TokenKind::Word => {}
        }

        let lower = token.text.to_lowercase();

        if let Some((class, lemma)) = closed_class(&lower) {
            return Analysis {
                lemma: lemma.to_string(),
                class,
            };
        }

        if let Some((lemma, pos)) = self.by_surface.get(&lower) {
            return Analysis {
                lemma: lemma.to_string(),
                class: WordClass::Content(*pos),
            };
        }

        if let Some((lemma, pos)) = lemmatize(token.text, |w| self.by_lemma.get(w).copied()) {
            return Analysis {
                lemma,
                class: WordClass::Content(pos),
            };
        }

        // Unknown: capitalised mid-sentence words are taken as names
        let capitalised = token.text.chars().next().is_some_and(char::is_uppercase);
        let pos = if capitalised && !sentence_initial {
            PartOfSpeech::Propn
        } else {
            PartOfSpeech::Noun
        };
        tracing::debug!(word = token.text, pos = pos.as_tag(), "word not in lexicon");

        Analysis {
            lemma: if pos == PartOfSpeech::Propn {
                token.text.to_string()
            } else {
                lower
            },
            class: WordClass::Content(pos),
        }
    }
}

impl Tagger for LexiconTagger<'_> {
    fn tag(&self, sentence: &str) -> Result<Vec<TaggedToken>, TaggingFailure> {
        let tokens = self.tokenize(sentence);
        if !tokens.iter().any(Token::is_word) {
            return Err(TaggingFailure::EmptyInput);
        }

        let mut sentence_initial = true;
        let analyses: Vec<Analysis> = tokens
            .iter()
            .map(|token| {
                let analysis = self.analyze(token, sentence_initial);
                if token.is_word() {
                    sentence_initial = false;
                } else if token.ends_sentence() {
                    sentence_initial = true;
                }
                analysis
            })
            .collect();

        let mut classes: Vec<WordClass> = analyses.iter().map(|a| a.class).collect();
        resolve_ambiguous(&mut classes);
        let deps = assign_relations(&classes);

        Ok(tokens
            .iter()
            .zip(analyses)
            .zip(classes.iter().zip(deps))
            .map(|((token, analysis), (class, dep))| {
                TaggedToken::new(token.text, analysis.lemma, class.pos(), dep)
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::{compile_lexicon, load_lexicon};
    use isl_protocol::{LemmaId, LexEntry, Lexicon};

    fn lexicon_bytes() -> rkyv::AlignedVec {
        let words = [
            ("eat", "eat", PartOfSpeech::Verb),
            ("bought", "buy", PartOfSpeech::Verb),
            ("go", "go", PartOfSpeech::Verb),
            ("went", "go", PartOfSpeech::Verb),
            ("rice", "rice", PartOfSpeech::Noun),
            ("car", "car", PartOfSpeech::Noun),
            ("school", "school", PartOfSpeech::Noun),
            ("dog", "dog", PartOfSpeech::Noun),
            ("red", "red", PartOfSpeech::Adj),
            ("yesterday", "yesterday", PartOfSpeech::Adv),
        ];
        let lexicon = Lexicon {
            version: 1,
            entries: words
                .iter()
                .enumerate()
                .map(|(i, (surface, lemma, pos))| LexEntry {
                    id: LemmaId(i as u32),
                    surface: surface.to_string(),
                    lemma: lemma.to_string(),
                    pos: *pos,
                })
                .collect(),
        };
        compile_lexicon(&lexicon).unwrap()
    }

    fn triples(tokens: &[TaggedToken]) -> Vec<(&str, PartOfSpeech, &str)> {
        tokens.iter().map(|t| (t.lemma(), t.pos(), t.dep())).collect()
    }

    #[test]
    fn test_tag_simple_svo() {
        let bytes = lexicon_bytes();
        let tagger = LexiconTagger::new(load_lexicon(&bytes).unwrap());

        let tokens = tagger.tag("I eat rice").unwrap();
        assert_eq!(
            triples(&tokens),
            vec![
                ("I", PartOfSpeech::Other, "nsubj"),
                ("eat", PartOfSpeech::Verb, "ROOT"),
                ("rice", PartOfSpeech::Noun, "dobj"),
            ]
        );
        assert_eq!(tokens[0].surface(), "I");
    }

    #[test]
    fn test_tag_lemmatizes_and_orders() {
        let bytes = lexicon_bytes();
        let tagger = LexiconTagger::new(load_lexicon(&bytes).unwrap());

        let tokens = tagger.tag("Yesterday she bought a red car.").unwrap();
        assert_eq!(
            triples(&tokens),
            vec![
                ("yesterday", PartOfSpeech::Adv, "advmod"),
                ("she", PartOfSpeech::Other, "nsubj"),
                ("buy", PartOfSpeech::Verb, "ROOT"),
                ("a", PartOfSpeech::Other, "det"),
                ("red", PartOfSpeech::Adj, "amod"),
                ("car", PartOfSpeech::Noun, "dobj"),
                (".", PartOfSpeech::Other, "punct"),
            ]
        );
    }

    #[test]
    fn test_suffix_stripping_and_unknown_names() {
        let bytes = lexicon_bytes();
        let tagger = LexiconTagger::new(load_lexicon(&bytes).unwrap());

        let tokens = tagger.tag("Dogs eat with Ravi").unwrap();
        assert_eq!(tokens[0].lemma(), "dog");
        assert_eq!(tokens[0].pos(), PartOfSpeech::Noun);
        assert_eq!(tokens[0].dep(), "nsubj");
        assert_eq!(tokens[3].lemma(), "Ravi");
        assert_eq!(tokens[3].pos(), PartOfSpeech::Propn);
        assert_eq!(tokens[3].dep(), "pobj");
    }

    #[test]
    fn test_empty_input_fails() {
        let bytes = lexicon_bytes();
        let tagger = LexiconTagger::new(load_lexicon(&bytes).unwrap());

        assert_eq!(tagger.tag(""), Err(TaggingFailure::EmptyInput));
        assert_eq!(tagger.tag(" ?! 42 "), Err(TaggingFailure::EmptyInput));
    }

    #[test]
    fn test_tokenize_spans() {
        let bytes = lexicon_bytes();
        let tagger = LexiconTagger::new(load_lexicon(&bytes).unwrap());

        let tokens = tagger.tokenize("go, dog");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[1].kind, TokenKind::Punctuation(','));
        assert_eq!(tokens[2].span.start, 4);
        assert_eq!(tokens[2].text, "dog");
    }
}

use isl_protocol::PartOfSpeech;

/// Grammatical class the rule tagger assigns before relations are known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordClass {
    /// Open-class word with its part of speech
    Content(PartOfSpeech),
    Pronoun,
    /// "her": object pronoun or possessive, settled by the next word
    PronounOrDeterminer,
    Determiner,
    Preposition,
    Conjunction,
    /// Auxiliary that may also be a main verb ("is", "have", "did")
    Auxiliary { main_verb: bool },
    Number,
    Punctuation,
}

impl WordClass {
    pub fn pos(&self) -> PartOfSpeech {
        match self {
            WordClass::Content(pos) => *pos,
            _ => PartOfSpeech::Other,
        }
    }

    pub fn is_verb(&self) -> bool {
        *self == WordClass::Content(PartOfSpeech::Verb)
    }

    pub fn is_noun(&self) -> bool {
        matches!(
            self,
            WordClass::Content(PartOfSpeech::Noun | PartOfSpeech::Propn)
        )
    }

    /// Can fill a subject or object slot.
    pub fn is_nominal(&self) -> bool {
        self.is_noun() || *self == WordClass::Pronoun
    }
}

const PRONOUNS: &[(&str, &str)] = &[
    ("i", "I"),
    ("me", "I"),
    ("you", "you"),
    ("he", "he"),
    ("him", "he"),
    ("she", "she"),
    ("it", "it"),
    ("we", "we"),
    ("us", "we"),
    ("they", "they"),
    ("them", "they"),
    ("myself", "myself"),
    ("yourself", "yourself"),
    ("himself", "himself"),
    ("herself", "herself"),
    ("itself", "itself"),
    ("ourselves", "ourselves"),
    ("themselves", "themselves"),
    ("someone", "someone"),
    ("everyone", "everyone"),
    ("something", "something"),
    ("everything", "everything"),
];

const DETERMINERS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "my", "your", "his", "its", "our",
    "their", "some", "any", "every", "each", "no",
];

const PREPOSITIONS: &[&str] = &[
    "in", "on", "at", "to", "from", "with", "by", "for", "of", "about", "into", "under",
    "over", "after", "before", "near", "without", "through",
];

const CONJUNCTIONS: &[&str] = &["and", "or", "but", "so", "because", "if", "then"];

// (form, lemma, can stand as the main verb)
const AUXILIARIES: &[(&str, &str, bool)] = &[
    ("am", "be", true),
    ("is", "be", true),
    ("are", "be", true),
    ("was", "be", true),
    ("were", "be", true),
    ("be", "be", true),
    ("been", "be", true),
    ("being", "be", true),
    ("isn't", "be", true),
    ("aren't", "be", true),
    ("wasn't", "be", true),
    ("do", "do", true),
    ("does", "do", true),
    ("did", "do", true),
    ("don't", "do", false),
    ("doesn't", "do", false),
    ("didn't", "do", false),
    ("have", "have", true),
    ("has", "have", true),
    ("had", "have", true),
    ("will", "will", false),
    ("won't", "will", false),
    ("would", "would", false),
    ("shall", "shall", false),
    ("should", "should", false),
    ("can", "can", false),
    ("can't", "can", false),
    ("could", "could", false),
    ("may", "may", false),
    ("might", "might", false),
    ("must", "must", false),
];

/// Looks up a lowercase word in the closed-class tables.
pub fn closed_class(lower: &str) -> Option<(WordClass, &'static str)> {
    let lower = lower.replace('’', "'");
    let lower = lower.as_str();

    if lower == "her" {
        return Some((WordClass::PronounOrDeterminer, "she"));
    }
    if let Some((_, lemma)) = PRONOUNS.iter().find(|(form, _)| *form == lower) {
        return Some((WordClass::Pronoun, *lemma));
    }
    if let Some(det) = DETERMINERS.iter().find(|d| **d == lower) {
        return Some((WordClass::Determiner, *det));
    }
    if let Some(prep) = PREPOSITIONS.iter().find(|p| **p == lower) {
        return Some((WordClass::Preposition, *prep));
    }
    if let Some(conj) = CONJUNCTIONS.iter().find(|c| **c == lower) {
        return Some((WordClass::Conjunction, *conj));
    }
    AUXILIARIES
        .iter()
        .find(|(form, _, _)| *form == lower)
        .map(|(_, lemma, main_verb)| (WordClass::Auxiliary { main_verb: *main_verb }, *lemma))
}

/// Settles classes that depend on their neighbours.
///
/// - "her" before a noun or adjective is a possessive determiner, otherwise
///   an object pronoun.
/// - An auxiliary with no verb later in its clause is the main verb
///   ("I have a dog").
pub fn resolve_ambiguous(classes: &mut [WordClass]) {
    for i in 0..classes.len() {
        let class = classes[i];
        match class {
            WordClass::PronounOrDeterminer => {
                let next = classes.get(i + 1).copied();
                let modifies = matches!(
                    next,
                    Some(WordClass::Content(
                        PartOfSpeech::Noun | PartOfSpeech::Propn | PartOfSpeech::Adj
                    ))
                );
                classes[i] = if modifies {
                    WordClass::Determiner
                } else {
                    WordClass::Pronoun
                };
            }
            WordClass::Auxiliary { main_verb: true } => {
                let verb_follows = classes[i + 1..]
                    .iter()
                    .take_while(|c| !matches!(c, WordClass::Punctuation | WordClass::Conjunction))
                    .any(WordClass::is_verb);
                if !verb_follows {
                    classes[i] = WordClass::Content(PartOfSpeech::Verb);
                }
            }
            _ => {}
        }
    }
}

/// Greedy dependency labelling for SVO English.
///
/// The first verb is the root (the first noun when there is no verb). The
/// last free nominal before the root is its subject and the first free
/// nominal after it the direct object; later free nominals are conjuncts.
/// Nominals inside prepositional phrases, coordinations or noun compounds
/// are labelled as such and never fill the subject/object slots.
pub fn assign_relations(classes: &[WordClass]) -> Vec<&'static str> {
    let root = classes
        .iter()
        .position(WordClass::is_verb)
        .or_else(|| classes.iter().position(WordClass::is_noun));

    let mut deps = vec!["dep"; classes.len()];
    let mut open_preposition = false;
    let mut after_conjunction = false;
    let mut object_taken = false;
    let mut subject = None;

    for (i, class) in classes.iter().enumerate() {
        if Some(i) == root {
            deps[i] = "ROOT";
            open_preposition = false;
            after_conjunction = false;
            continue;
        }

        deps[i] = match class {
            WordClass::Punctuation => {
                open_preposition = false;
                after_conjunction = false;
                "punct"
            }
            WordClass::Number => "nummod",
            WordClass::Determiner => "det",
            WordClass::Preposition => {
                open_preposition = true;
                "prep"
            }
            WordClass::Conjunction => {
                after_conjunction = true;
                "cc"
            }
            WordClass::Auxiliary { .. } => "aux",
            WordClass::Content(PartOfSpeech::Adj) => "amod",
            WordClass::Content(PartOfSpeech::Adv) => "advmod",
            WordClass::Content(PartOfSpeech::Verb) => {
                open_preposition = false;
                after_conjunction = false;
                "xcomp"
            }
            c if c.is_nominal() => {
                let compound = c.is_noun() && classes.get(i + 1).is_some_and(WordClass::is_noun);
                if compound {
                    "compound"
                } else if open_preposition {
                    open_preposition = false;
                    "pobj"
                } else if after_conjunction {
                    after_conjunction = false;
                    "conj"
                } else if root.is_some_and(|r| i < r) {
                    subject = Some(i);
                    "dep"
                } else if !object_taken {
                    object_taken = true;
                    "dobj"
                } else {
                    "conj"
                }
            }
            _ => "dep",
        };
    }

    if let Some(s) = subject {
        deps[s] = "nsubj";
    }
    deps
}

use isl_lexicon::{is_time_adverb, normalize_lemma};
use isl_protocol::{PartOfSpeech, PosFlags, TaggedToken};

/// Gloss categories, declared in signing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bucket {
    Time,
    Subject,
    Object,
    Noun,
    Adjective,
    Verb,
}

impl Bucket {
    /// Assembly order: time markers first, verbs last.
    pub const ORDER: [Bucket; 6] = [
        Bucket::Time,
        Bucket::Subject,
        Bucket::Object,
        Bucket::Noun,
        Bucket::Adjective,
        Bucket::Verb,
    ];
}

/// Normalized lemmas sorted into categories, in sentence order within each.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Buckets {
    time: Vec<String>,
    subject: Vec<String>,
    object: Vec<String>,
    noun: Vec<String>,
    adjective: Vec<String>,
    verb: Vec<String>,
}

impl Buckets {
    pub fn get(&self, bucket: Bucket) -> &[String] {
        match bucket {
            Bucket::Time => &self.time,
            Bucket::Subject => &self.subject,
            Bucket::Object => &self.object,
            Bucket::Noun => &self.noun,
            Bucket::Adjective => &self.adjective,
            Bucket::Verb => &self.verb,
        }
    }

    fn get_mut(&mut self, bucket: Bucket) -> &mut Vec<String> {
        match bucket {
            Bucket::Time => &mut self.time,
            Bucket::Subject => &mut self.subject,
            Bucket::Object => &mut self.object,
            Bucket::Noun => &mut self.noun,
            Bucket::Adjective => &mut self.adjective,
            Bucket::Verb => &mut self.verb,
        }
    }

    pub fn push(&mut self, bucket: Bucket, lemma: String) {
        self.get_mut(bucket).push(lemma);
    }

    /// All buckets concatenated in [`Bucket::ORDER`].
    pub fn concat(&self) -> impl Iterator<Item = &String> {
        Bucket::ORDER.into_iter().flat_map(move |b| self.get(b))
    }

    pub fn len(&self) -> usize {
        Bucket::ORDER.iter().map(|b| self.get(*b).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Already captured as a grammatical argument.
    fn is_argument(&self, lemma: &str) -> bool {
        self.subject.iter().chain(&self.object).any(|l| l == lemma)
    }
}

/// Decides the bucket for one token given what the pass has collected so
/// far. The first matching rule wins; `None` discards the token.
pub fn classify_token(token: &TaggedToken, lemma: &str, buckets: &Buckets) -> Option<Bucket> {
    let dep = token.dep();
    let pos = token.pos();

    if dep.contains("subj") {
        Some(Bucket::Subject)
    } else if dep.contains("obj") {
        Some(Bucket::Object)
    } else if pos == PartOfSpeech::Verb {
        Some(Bucket::Verb)
    } else if pos.is_any(PosFlags::NOMINAL) {
        // A noun already taken as subject/object is not repeated
        (!buckets.is_argument(lemma)).then_some(Bucket::Noun)
    } else if pos == PartOfSpeech::Adj {
        Some(Bucket::Adjective)
    } else if pos == PartOfSpeech::Adv && is_time_adverb(token.lemma()) {
        Some(Bucket::Time)
    } else {
        None
    }
}

/// Single pass over the tokens; each lands in at most one bucket.
pub fn classify(tokens: &[TaggedToken]) -> Buckets {
    let mut buckets = Buckets::default();

    for token in tokens {
        let lemma = normalize_lemma(token.lemma());
        if lemma.is_empty() {
            continue;
        }

        match classify_token(token, &lemma, &buckets) {
            Some(bucket) => {
                tracing::trace!(lemma = %lemma, dep = token.dep(), ?bucket, "classified");
                buckets.push(bucket, lemma);
            }
            None => {
                tracing::trace!(lemma = %lemma, pos = token.pos().as_tag(), "discarded");
            }
        }
    }

    buckets
}

pub mod lexicon;
pub mod parser;
pub mod records;
pub mod syntax;
pub mod tagger;
pub mod token;

pub use lexicon::{aligned, compile_lexicon, load_lexicon, LexiconError};
pub use records::{parse_tagger_output, validate_records, TaggerRecord};
pub use tagger::LexiconTagger;

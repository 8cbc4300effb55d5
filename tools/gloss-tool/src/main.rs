use clap::{Parser, Subcommand};
use isl_parser::{aligned, compile_lexicon, load_lexicon, parse_tagger_output, LexiconTagger};
use isl_protocol::{GlossSentence, Lexicon, Tagger, TaggingFailure};
use isl_reorder::{
    convert_to_gloss, GlossPipeline, GlossReport, KeywordEmotionClassifier, PipelineError,
    SpeechText,
};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(author, version, about = "English to ISL gloss tooling")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compile a JSON lexicon to an rkyv archive
    Compile {
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,
    },
    /// Tag a sentence with a compiled lexicon and print the gloss report
    Gloss {
        #[arg(short, long, value_name = "FILE")]
        lexicon: PathBuf,

        /// Also classify the sentence's emotion
        #[arg(short, long)]
        emotion: bool,

        /// Source language code; only English is glossed without a translator
        #[arg(long, value_name = "CODE")]
        lang: Option<String>,

        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Reorder pre-tagged tokens (JSON records from an external tagger)
    Reorder {
        #[arg(short, long, value_name = "FILE")]
        tokens: PathBuf,
    },
}

fn compile(input: &Path, output: &Path) -> anyhow::Result<()> {
    tracing::info!(input = %input.display(), "reading lexicon");
    let lexicon: Lexicon = serde_json::from_str(&fs::read_to_string(input)?)?;

    tracing::info!(
        version = lexicon.version,
        entries = lexicon.entries.len(),
        "compiling lexicon"
    );
    let bytes = compile_lexicon(&lexicon)?;
    fs::write(output, &bytes)?;

    println!("Wrote {} bytes to {}", bytes.len(), output.display());
    Ok(())
}

/// Runs the pipeline without a translator: non-English requests fail with
/// [`PipelineError::TranslatorUnavailable`].
fn build_report(
    tagger: &dyn Tagger,
    emotion: bool,
    request: &SpeechText,
) -> Result<GlossReport, PipelineError> {
    let classifier = KeywordEmotionClassifier::new();
    let mut pipeline = GlossPipeline::new(tagger);
    if emotion {
        pipeline = pipeline.with_classifier(&classifier);
    }
    pipeline.process(request)
}

fn gloss(lexicon: &Path, emotion: bool, lang: Option<String>, text: &[String]) -> anyhow::Result<()> {
    let bytes = aligned(&fs::read(lexicon)?);
    let archived = load_lexicon(&bytes)?;
    let tagger = LexiconTagger::new(archived);

    let request = SpeechText {
        text: text.join(" "),
        source_language: lang,
    };
    let report = build_report(&tagger, emotion, &request)?;
    if report.fallback {
        tracing::warn!("tagger failed; printing the fallback gloss");
    }

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn reorder_json(json: &str) -> Result<GlossSentence, TaggingFailure> {
    let tagged = parse_tagger_output(json)?;
    tracing::debug!(tokens = tagged.len(), "loaded tagged tokens");
    Ok(convert_to_gloss(&tagged))
}

fn reorder(tokens: &Path) -> anyhow::Result<()> {
    let gloss = reorder_json(&fs::read_to_string(tokens)?)?;
    println!("{}", gloss);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    match Cli::parse().command {
        Command::Compile { input, output } => compile(&input, &output),
        Command::Gloss {
            lexicon,
            emotion,
            lang,
            text,
        } => gloss(&lexicon, emotion, lang, &text),
        Command::Reorder { tokens } => reorder(&tokens),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_gloss_args() {
        let cli = Cli::try_parse_from([
            "gloss-tool", "gloss", "--lexicon", "lex.rkyv", "--emotion", "I", "eat", "rice",
        ])
        .unwrap();

        match cli.command {
            Command::Gloss {
                lexicon,
                emotion,
                lang,
                text,
            } => {
                assert_eq!(lexicon, PathBuf::from("lex.rkyv"));
                assert!(emotion);
                assert!(lang.is_none());
                assert_eq!(text, ["I", "eat", "rice"]);
            }
            _ => panic!("expected gloss subcommand"),
        }
    }

    #[test]
    fn test_gloss_requires_text() {
        assert!(Cli::try_parse_from(["gloss-tool", "gloss", "--lexicon", "lex.rkyv"]).is_err());
    }

    fn sample_archive() -> impl std::ops::Deref<Target = [u8]> {
        let json = include_str!("../data/lexicon.json");
        let lexicon: Lexicon = serde_json::from_str(json).unwrap();
        compile_lexicon(&lexicon).unwrap()
    }

    #[test]
    fn test_sample_lexicon_compiles() {
        let bytes = sample_archive();
        let archived = load_lexicon(&bytes).unwrap();
        assert_eq!(archived.entries.len(), 60);

        let tagger = LexiconTagger::new(archived);
        let request = SpeechText::english("Yesterday she bought a red car");
        let report = build_report(&tagger, false, &request).unwrap();
        assert_eq!(report.isl_text, "YESTERDAY SHE CAR RED BUY");
        assert!(report.emotion.is_none());
    }

    #[test]
    fn test_gloss_with_emotion() {
        let bytes = sample_archive();
        let tagger = LexiconTagger::new(load_lexicon(&bytes).unwrap());

        let report = build_report(&tagger, true, &SpeechText::english("I love tea")).unwrap();
        assert_eq!(report.isl_text, "I TEA LOVE");
        assert_eq!(report.emotion.map(|e| e.label), Some("joy".to_string()));
    }

    #[test]
    fn test_non_english_needs_translator() {
        let bytes = sample_archive();
        let tagger = LexiconTagger::new(load_lexicon(&bytes).unwrap());
        let request = SpeechText {
            text: "main chawal khata hoon".to_string(),
            source_language: Some("hi".to_string()),
        };

        let err = build_report(&tagger, false, &request).unwrap_err();
        assert_eq!(err, PipelineError::TranslatorUnavailable(isl_protocol::Language::Hindi));
    }

    #[test]
    fn test_reorder_json() {
        let json = r#"[
            {"text": "I", "lemma_": "I", "pos_": "PRON", "dep_": "nsubj"},
            {"text": "drank", "lemma_": "drink", "pos_": "VERB", "dep_": "ROOT"},
            {"text": "hot", "lemma_": "hot", "pos_": "ADJ", "dep_": "amod"},
            {"text": "tea", "lemma_": "tea", "pos_": "NOUN", "dep_": "dobj"}
        ]"#;
        let gloss = reorder_json(json).unwrap();
        assert_eq!(gloss.to_string(), "I TEA HOT DRINK");
    }

    #[test]
    fn test_reorder_json_rejects_bad_records() {
        assert!(matches!(reorder_json("not json"), Err(TaggingFailure::Collaborator(_))));

        let json = r#"[{"text": "go", "lemma": "", "pos": "VERB", "dep": "ROOT"}]"#;
        assert!(matches!(
            reorder_json(json),
            Err(TaggingFailure::MalformedToken { index: 0, .. })
        ));
    }
}

use isl_parser::{aligned, load_lexicon, parse_tagger_output, LexiconError, LexiconTagger};
use isl_protocol::{ArchivedLexicon, GlossSentence, Lexicon, SubmissionId, TaggingFailure};
use isl_registry::{InMemorySignStore, SignStore, Submission};
use isl_reorder::{
    convert_to_gloss, GlossPipeline, GlossReport, KeywordEmotionClassifier, PipelineError,
    SpeechText,
};
use rkyv::AlignedVec;
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// A gloss token paired with its approved sign video, if one exists.
#[derive(Debug, Serialize)]
pub struct SignLookup {
    pub token: String,
    pub file_path: Option<String>,
}

/// The structured response sent back to JavaScript
#[derive(Debug, Serialize)]
pub struct ConversionReport {
    #[serde(flatten)]
    pub report: GlossReport,
    pub videos: Vec<SignLookup>,
}

/// Glosses `request` and attaches approved videos. Independent of the JS
/// host so it can be exercised natively.
pub fn analyze(
    lexicon: &ArchivedLexicon,
    signs: &impl SignStore,
    request: &SpeechText,
) -> Result<ConversionReport, PipelineError> {
    let tagger = LexiconTagger::new(lexicon);
    let classifier = KeywordEmotionClassifier::new();
    let report = GlossPipeline::new(&tagger)
        .with_classifier(&classifier)
        .process(request)?;

    let videos = signs
        .videos_for(&report.gloss)
        .into_iter()
        .map(|(token, video)| SignLookup {
            token: token.to_string(),
            file_path: video.map(|s| s.file_path.clone()),
        })
        .collect();

    Ok(ConversionReport { report, videos })
}

/// Glosses records produced by an external tagger.
pub fn reorder_records(tokens_json: &str) -> Result<GlossSentence, TaggingFailure> {
    let tokens = parse_tagger_output(tokens_json)?;
    Ok(convert_to_gloss(&tokens))
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(JsValue::from)
}

fn js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// The engine instance running in the browser
#[wasm_bindgen]
pub struct GlossEngine {
    // Raw lexicon archive (loaded via fetch() in JS), validated on construction
    data: AlignedVec,
    signs: InMemorySignStore,
}

impl GlossEngine {
    fn from_bytes(data: &[u8]) -> Result<Self, LexiconError> {
        let data = aligned(data);
        load_lexicon(&data)?;
        Ok(Self {
            data,
            signs: InMemorySignStore::new(),
        })
    }

    fn lexicon(&self) -> &ArchivedLexicon {
        // SAFETY: `data` passed check_archived_root in `from_bytes` and is
        // never mutated afterwards.
        unsafe { rkyv::archived_root::<Lexicon>(&self.data) }
    }
}

#[wasm_bindgen]
impl GlossEngine {
    #[wasm_bindgen(constructor)]
    pub fn new(data: Vec<u8>) -> Result<GlossEngine, JsValue> {
        Self::from_bytes(&data).map_err(js_error)
    }

    /// Text -> gloss report with emotion and sign videos.
    /// `lang` defaults to English.
    pub fn convert(&self, text: &str, lang: Option<String>) -> Result<JsValue, JsValue> {
        let request = SpeechText {
            text: text.to_string(),
            source_language: lang,
        };
        let report = analyze(self.lexicon(), &self.signs, &request).map_err(js_error)?;
        to_js(&report)
    }

    /// Pre-tagged JSON records -> gloss tokens.
    pub fn reorder(&self, tokens_json: &str) -> Result<JsValue, JsValue> {
        let gloss = reorder_records(tokens_json).map_err(js_error)?;
        to_js(&gloss)
    }

    #[wasm_bindgen(js_name = submitSign)]
    pub fn submit_sign(
        &mut self,
        word: &str,
        file_path: &str,
        submitted_by: Option<String>,
    ) -> Result<u32, JsValue> {
        let id = self
            .signs
            .submit(word, file_path, submitted_by.as_deref())
            .map_err(js_error)?;
        Ok(id.into())
    }

    #[wasm_bindgen(js_name = pendingSigns)]
    pub fn pending_signs(&self) -> Result<JsValue, JsValue> {
        let pending: Vec<&Submission> = self.signs.pending();
        to_js(&pending)
    }

    #[wasm_bindgen(js_name = approveSign)]
    pub fn approve_sign(&mut self, id: u32) -> Result<JsValue, JsValue> {
        let approved = self
            .signs
            .approve(SubmissionId::new(id))
            .map_err(js_error)?;
        to_js(approved)
    }

    #[wasm_bindgen(js_name = lexiconSize)]
    pub fn lexicon_size(&self) -> usize {
        self.lexicon().entries.len()
    }
}

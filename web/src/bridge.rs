//! Browser implementations of the classifier, clipboard and download seams.

use review_insight::{
    Classification, Classifier, ClassifierError, Clipboard, ClipboardError, Download,
    ExportError, ModelLoader, RawPrediction, decode_batch,
};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

/// Model id on the Hugging Face hub (ONNX export).
pub const MODEL_ID: &str = "Xenova/distilbert-base-uncased-finetuned-sst-2-english";

#[wasm_bindgen(module = "/js/classifier.js")]
extern "C" {
    #[wasm_bindgen(js_name = loadSentimentModel, catch)]
    async fn load_sentiment_model(model: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_name = classifyBatch, catch)]
    async fn classify_batch_json(texts_json: &str) -> Result<JsValue, JsValue>;
}

/// Loads the transformers.js pipeline once per page.
#[derive(Clone, Debug)]
pub struct BrowserModelLoader {
    model: String,
}

impl Default for BrowserModelLoader {
    fn default() -> Self {
        Self {
            model: MODEL_ID.to_string(),
        }
    }
}

impl ModelLoader for BrowserModelLoader {
    type Classifier = BrowserClassifier;

    async fn load(&self) -> Result<BrowserClassifier, ClassifierError> {
        load_sentiment_model(&self.model)
            .await
            .map_err(|err| ClassifierError::Load(js_error_message(&err)))?;
        Ok(BrowserClassifier)
    }
}

/// Handle to the loaded pipeline; the pipeline itself lives in the JS module.
#[derive(Clone, Copy, Debug)]
pub struct BrowserClassifier;

impl Classifier for BrowserClassifier {
    async fn classify_batch(&self, texts: &[String]) -> Result<Vec<Classification>, ClassifierError> {
        let request =
            serde_json::to_string(texts).map_err(|err| ClassifierError::Inference(err.to_string()))?;
        let response = classify_batch_json(&request)
            .await
            .map_err(|err| ClassifierError::Inference(js_error_message(&err)))?;
        let json = response
            .as_string()
            .ok_or_else(|| ClassifierError::Inference("pipeline returned no JSON".into()))?;
        parse_predictions(&json, texts.len())
    }
}

/// Decode the pipeline's JSON output for a batch of `expected` inputs.
pub fn parse_predictions(json: &str, expected: usize) -> Result<Vec<Classification>, ClassifierError> {
    let raw: Vec<RawPrediction> =
        serde_json::from_str(json).map_err(|err| ClassifierError::Inference(err.to_string()))?;
    decode_batch(expected, raw)
}

/// `navigator.clipboard`, fire and forget.
pub struct BrowserClipboard;

impl Clipboard for BrowserClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let window = web_sys::window().ok_or_else(|| ClipboardError("no window".into()))?;
        // The returned promise is not awaited; a rejection only means no copy.
        let _ = window.navigator().clipboard().write_text(text);
        Ok(())
    }
}

/// Saves bytes through a temporary object URL and a clicked `<a download>`.
pub struct BrowserDownload;

impl Download for BrowserDownload {
    fn save(&self, filename: &str, mime: &str, bytes: &[u8]) -> Result<(), ExportError> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| ExportError::Download("no document".into()))?;

        let parts = js_sys::Array::new();
        parts.push(&js_sys::Uint8Array::from(bytes));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type(mime);
        let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
            .map_err(download_error)?;

        let url = ObjectUrl::for_blob(&blob)?;
        let anchor: web_sys::HtmlAnchorElement = document
            .create_element("a")
            .map_err(download_error)?
            .dyn_into()
            .map_err(|_| ExportError::Download("anchor is not an HtmlAnchorElement".into()))?;
        anchor.set_href(url.as_str());
        anchor.set_download(filename);

        let body = document
            .body()
            .ok_or_else(|| ExportError::Download("no body".into()))?;
        body.append_child(&anchor).map_err(download_error)?;
        anchor.click();
        body.remove_child(&anchor).map_err(download_error)?;
        Ok(())
    }
}

/// Object URL revoked when dropped, on success and on every error path.
struct ObjectUrl(String);

impl ObjectUrl {
    fn for_blob(blob: &web_sys::Blob) -> Result<Self, ExportError> {
        web_sys::Url::create_object_url_with_blob(blob)
            .map(Self)
            .map_err(download_error)
    }

    fn as_str(&self) -> &str {
        &self.0
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        let _ = web_sys::Url::revoke_object_url(&self.0);
    }
}

fn download_error(err: JsValue) -> ExportError {
    ExportError::Download(js_error_message(&err))
}

fn js_error_message(err: &JsValue) -> String {
    err.dyn_ref::<js_sys::Error>()
        .map(|err| String::from(err.message()))
        .or_else(|| err.as_string())
        .unwrap_or_else(|| format!("{err:?}"))
}

/// Console logging for the browser app.
pub fn console_warn(message: &str) {
    web_sys::console::warn_1(&JsValue::from_str(message));
}

pub fn console_info(message: &str) {
    web_sys::console::info_1(&JsValue::from_str(message));
}

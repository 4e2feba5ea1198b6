//! Remote sentiment classifier over HTTP.
//!
//! Speaks the Hugging Face inference API shape: `POST {"inputs": [...]}` and
//! a reply that is either one `{label, score}` per input or, for
//! text-classification pipelines returning every label, a list of candidates
//! per input (the best-scoring candidate wins).

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use review_insight::config::ClassifierConfig;
use review_insight::{Classification, Classifier, ClassifierError, ModelLoader, RawPrediction, decode_batch};

/// Text used to check the endpoint answers before the session goes ready.
const WARM_UP_INPUT: &str = "warm up";

#[derive(Debug, Serialize)]
struct ClassifyRequest<'a> {
    inputs: &'a [String],
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ClassifyResponse {
    PerLabel(Vec<Vec<RawPrediction>>),
    Top(Vec<RawPrediction>),
}

impl ClassifyResponse {
    fn into_top(self) -> Vec<RawPrediction> {
        match self {
            ClassifyResponse::Top(top) => top,
            ClassifyResponse::PerLabel(candidates) => candidates
                .into_iter()
                .filter_map(|labels| {
                    labels
                        .into_iter()
                        .max_by(|a, b| a.score.total_cmp(&b.score))
                })
                .collect(),
        }
    }
}

/// Builds an [`HttpClassifier`] and checks the endpoint responds.
pub struct HttpModelLoader {
    config: ClassifierConfig,
    token: Option<String>,
}

impl HttpModelLoader {
    pub fn new(config: ClassifierConfig) -> Self {
        let token = config
            .token_env
            .as_deref()
            .and_then(|var| std::env::var(var).ok())
            .filter(|t| !t.trim().is_empty());
        Self { config, token }
    }
}

impl ModelLoader for HttpModelLoader {
    type Classifier = HttpClassifier;

    async fn load(&self) -> Result<HttpClassifier, ClassifierError> {
        let mut builder = Client::builder();
        if let Some(secs) = self.config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| ClassifierError::Load(e.to_string()))?;

        let classifier = HttpClassifier {
            client,
            url: self.config.resolved_endpoint(),
            token: self.token.clone(),
        };
        info!("Loading sentiment model {} via {}", self.config.model, classifier.url);

        classifier
            .classify_batch(&[WARM_UP_INPUT.to_string()])
            .await
            .map_err(|e| ClassifierError::Load(e.to_string()))?;
        Ok(classifier)
    }
}

/// Batch classifier backed by a remote inference endpoint.
pub struct HttpClassifier {
    client: Client,
    url: String,
    token: Option<String>,
}

impl Classifier for HttpClassifier {
    async fn classify_batch(&self, texts: &[String]) -> Result<Vec<Classification>, ClassifierError> {
        debug!(batch = texts.len(), "POST {}", self.url);
        let mut request = self.client.post(&self.url).json(&ClassifyRequest { inputs: texts });
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ClassifierError::Inference(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClassifierError::Inference(format!(
                "{status}: {}",
                body.trim()
            )));
        }

        let parsed: ClassifyResponse = response
            .json()
            .await
            .map_err(|e| ClassifierError::Inference(format!("unexpected response: {e}")))?;
        decode_batch(texts.len(), parsed.into_top())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use review_insight::Polarity;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config(server: &MockServer) -> ClassifierConfig {
        ClassifierConfig {
            endpoint: format!("{}/models/{{model}}", server.uri()),
            model: "sst2".into(),
            token_env: None,
            timeout_secs: Some(5),
        }
    }

    fn warm_up_mock() -> Mock {
        Mock::given(method("POST"))
            .and(path("/models/sst2"))
            .and(body_json(json!({ "inputs": [WARM_UP_INPUT] })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "label": "POSITIVE", "score": 0.6 }
            ])))
    }

    #[tokio::test]
    async fn classifies_flat_responses_in_order() {
        let server = MockServer::start().await;
        warm_up_mock().mount(&server).await;
        Mock::given(method("POST"))
            .and(path("/models/sst2"))
            .and(body_json(json!({ "inputs": ["I love this", "This is bad"] })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "label": "POSITIVE", "score": 0.99 },
                { "label": "NEGATIVE", "score": 0.85 }
            ])))
            .mount(&server)
            .await;

        let classifier = HttpModelLoader::new(config(&server)).load().await.unwrap();
        let out = classifier
            .classify_batch(&["I love this".into(), "This is bad".into()])
            .await
            .unwrap();
        assert_eq!(
            out,
            vec![
                Classification::new(Polarity::Positive, 0.99),
                Classification::new(Polarity::Negative, 0.85),
            ]
        );
    }

    #[tokio::test]
    async fn picks_best_label_from_per_label_responses() {
        let server = MockServer::start().await;
        warm_up_mock().mount(&server).await;
        Mock::given(method("POST"))
            .and(path("/models/sst2"))
            .and(body_json(json!({ "inputs": ["meh"] })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([[
                { "label": "POSITIVE", "score": 0.3 },
                { "label": "NEGATIVE", "score": 0.7 }
            ]])))
            .mount(&server)
            .await;

        let classifier = HttpModelLoader::new(config(&server)).load().await.unwrap();
        let out = classifier.classify_batch(&["meh".into()]).await.unwrap();
        assert_eq!(out, vec![Classification::new(Polarity::Negative, 0.7)]);
    }

    #[tokio::test]
    async fn load_fails_when_endpoint_errors() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503).set_body_string("model is loading"))
            .mount(&server)
            .await;

        let err = HttpModelLoader::new(config(&server)).load().await.err().unwrap();
        match err {
            ClassifierError::Load(reason) => assert!(reason.contains("model is loading")),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[tokio::test]
    async fn sends_bearer_token_when_configured() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(header("authorization", "Bearer secret"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "label": "POSITIVE", "score": 0.6 }
            ])))
            .mount(&server)
            .await;

        let mut loader = HttpModelLoader::new(config(&server));
        loader.token = Some("secret".into());
        assert!(loader.load().await.is_ok());
    }

    #[tokio::test]
    async fn short_reply_is_a_length_mismatch() {
        let server = MockServer::start().await;
        warm_up_mock().mount(&server).await;
        Mock::given(method("POST"))
            .and(body_json(json!({ "inputs": ["a", "b"] })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "label": "POSITIVE", "score": 0.6 }
            ])))
            .mount(&server)
            .await;

        let classifier = HttpModelLoader::new(config(&server)).load().await.unwrap();
        let err = classifier
            .classify_batch(&["a".into(), "b".into()])
            .await
            .unwrap_err();
        assert_eq!(err, ClassifierError::LengthMismatch { expected: 2, got: 1 });
    }
}

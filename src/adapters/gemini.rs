use crate::domain::model::{Generated, GroundingSource};
use crate::domain::ports::{ConfigProvider, GroundingTool, TextGenerator};
use crate::utils::error::{PlannerError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

/// `generateContent` client for the hosted Gemini API.
///
/// One request per call, no retry or backoff; transport and status failures
/// surface as [`PlannerError::Api`]. The search-grounded trip model and the
/// maps-grounded place model are configured separately because the API pairs
/// each grounding tool with a different model tier.
pub struct GeminiClient {
    client: Client,
    endpoint: String,
    api_key: String,
    trip_model: String,
    place_model: String,
}

impl GeminiClient {
    pub fn new(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        trip_model: impl Into<String>,
        place_model: impl Into<String>,
    ) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            trip_model: trip_model.into(),
            place_model: place_model.into(),
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C, api_key: impl Into<String>) -> Self {
        Self::new(
            config.api_endpoint(),
            api_key,
            config.trip_model(),
            config.place_model(),
        )
    }

    fn model_for(&self, grounding: GroundingTool) -> &str {
        match grounding {
            GroundingTool::WebSearch => &self.trip_model,
            GroundingTool::Maps => &self.place_model,
        }
    }
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GroundingMetadata {
    #[serde(default)]
    grounding_chunks: Vec<GroundingChunk>,
}

#[derive(Debug, Deserialize)]
struct GroundingChunk {
    web: Option<WebSource>,
}

#[derive(Debug, Deserialize)]
struct WebSource {
    uri: Option<String>,
    title: Option<String>,
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str, grounding: GroundingTool) -> Result<Generated> {
        let model = self.model_for(grounding);
        let url = format!("{}/v1beta/models/{}:generateContent", self.endpoint, model);

        let tool = match grounding {
            GroundingTool::WebSearch => serde_json::json!({ "googleSearch": {} }),
            GroundingTool::Maps => serde_json::json!({ "googleMaps": {} }),
        };
        // No responseMimeType/responseSchema here: the API rejects them when
        // grounding tools are enabled, so the prompt carries the format.
        let body = serde_json::json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "tools": [tool],
        });

        tracing::debug!("POST {} ({} byte prompt)", url, prompt.len());
        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        let decoded: GenerateContentResponse = response.json().await?;
        let candidate = decoded
            .candidates
            .into_iter()
            .next()
            .ok_or(PlannerError::EmptyResponse)?;

        let text: String = candidate
            .content
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();
        if text.is_empty() {
            return Err(PlannerError::EmptyResponse);
        }

        let sources = candidate
            .grounding_metadata
            .map(|metadata| {
                metadata
                    .grounding_chunks
                    .into_iter()
                    .filter_map(|chunk| chunk.web)
                    .map(|web| GroundingSource {
                        title: web.title,
                        uri: web.uri,
                    })
                    .collect()
            })
            .unwrap_or_default();

        Ok(Generated { text, sources })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn client(server: &MockServer) -> GeminiClient {
        GeminiClient::new(
            server.base_url(),
            "test-key",
            "trip-model",
            "place-model",
        )
    }

    #[tokio::test]
    async fn test_generate_joins_parts_and_maps_sources() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/v1beta/models/trip-model:generateContent")
                .query_param("key", "test-key")
                .json_body_partial(r#"{"tools": [{"googleSearch": {}}]}"#);
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "candidates": [{
                        "content": { "parts": [ {"text": "{\"tripName\": "}, {"text": "\"X\"}"} ] },
                        "groundingMetadata": {
                            "groundingChunks": [
                                { "web": { "uri": "https://a.example", "title": "A" } },
                                { "retrievedContext": { "uri": "ignored" } }
                            ]
                        }
                    }]
                }));
        });

        let generated = client(&server)
            .generate("plan me a trip", GroundingTool::WebSearch)
            .await
            .unwrap();

        api_mock.assert();
        assert_eq!(generated.text, "{\"tripName\": \"X\"}");
        assert_eq!(generated.sources.len(), 1);
        assert_eq!(generated.sources[0].uri.as_deref(), Some("https://a.example"));
    }

    #[tokio::test]
    async fn test_maps_grounding_selects_place_model_and_tool() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/v1beta/models/place-model:generateContent")
                .json_body_partial(r#"{"tools": [{"googleMaps": {}}]}"#);
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "candidates": [{ "content": { "parts": [{"text": "ok"}] } }]
                }));
        });

        let generated = client(&server)
            .generate("where is this", GroundingTool::Maps)
            .await
            .unwrap();

        api_mock.assert();
        assert_eq!(generated.text, "ok");
        assert!(generated.sources.is_empty());
    }

    #[tokio::test]
    async fn test_no_candidates_is_empty_response() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST);
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({ "candidates": [] }));
        });

        let err = client(&server)
            .generate("hello", GroundingTool::WebSearch)
            .await
            .unwrap_err();
        assert!(matches!(err, PlannerError::EmptyResponse));
    }

    #[tokio::test]
    async fn test_candidate_without_text_is_empty_response() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST);
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "candidates": [{ "content": { "parts": [] } }]
                }));
        });

        let err = client(&server)
            .generate("hello", GroundingTool::WebSearch)
            .await
            .unwrap_err();
        assert!(matches!(err, PlannerError::EmptyResponse));
    }

    #[tokio::test]
    async fn test_http_error_status_maps_to_api_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST);
            then.status(429);
        });

        let err = client(&server)
            .generate("hello", GroundingTool::WebSearch)
            .await
            .unwrap_err();
        assert!(matches!(err, PlannerError::Api(_)));
    }
}

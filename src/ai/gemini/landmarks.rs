use super::client::GeminiHttpClient;
use super::schema;
use super::types::{Content, GenerateContentRequest, GenerationConfig, Part};
use crate::ai::LandmarkService;
use crate::models::{Config, EncodedImage, PoseLandmarks};
use crate::{prompts, Error, Result};
use async_trait::async_trait;
use std::time::Duration;

/// Best-effort landmark extraction. Unlike the other coaching clients this
/// one never surfaces an error: landmarks only feed an optional overlay.
pub struct GeminiLandmarkClient {
    http: GeminiHttpClient,
    model: String,
}

impl GeminiLandmarkClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self::new_with_client(api_key, model, reqwest::Client::new())
    }

    pub fn new_with_client(api_key: String, model: String, client: reqwest::Client) -> Self {
        Self {
            http: GeminiHttpClient::new_with_client(api_key, Duration::from_secs(30), client),
            model,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.gemini_api_key.clone(), config.scene_model.clone())
    }

    async fn try_extract(&self, image: &EncodedImage) -> Result<PoseLandmarks> {
        let request = GenerateContentRequest {
            contents: vec![Content::user(vec![
                Part::image(image),
                Part::text(prompts::POSE_LANDMARKS),
            ])],
            generation_config: Some(GenerationConfig::json(schema::landmarks())),
        };

        let response = self.http.generate_content(&self.model, &request).await?;

        let text = response.first_text().ok_or_else(|| {
            Error::AiProvider("No text in Gemini landmark response".to_string())
        })?;

        serde_json::from_str(text)
            .map_err(|e| Error::SchemaMismatch(format!("landmarks: {}", e)))
    }
}

#[cfg(test)]
super::impl_with_gemini_base_url!(GeminiLandmarkClient);

#[async_trait]
impl LandmarkService for GeminiLandmarkClient {
    async fn extract_landmarks(&self, image: &EncodedImage) -> Option<PoseLandmarks> {
        match self.try_extract(image).await {
            Ok(landmarks) => Some(landmarks),
            Err(e) => {
                tracing::warn!("Landmark extraction failed, continuing without: {}", e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::gemini::test_support;
    use crate::models::LandmarkPoint;
    use wiremock::{MockServer, ResponseTemplate};

    const DEFAULT_MODEL: &str = "gemini-2.5-flash";

    fn make_client(server: &MockServer) -> GeminiLandmarkClient {
        GeminiLandmarkClient::new("test-key".to_string(), DEFAULT_MODEL.to_string())
            .with_base_url(server.uri())
    }

    fn text_response(text: &str) -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "candidates": [{ "content": { "parts": [{ "text": text }] } }]
        }))
    }

    #[tokio::test]
    async fn test_extract_landmarks_parses_partial_set() {
        let server = MockServer::start().await;

        test_support::post_path_regex(test_support::GENERATE_CONTENT_PATH_REGEX)
            .respond_with(text_response(
                r#"{"nose":{"x":0.51,"y":0.2},"leftHip":{"x":0.45,"y":0.6}}"#,
            ))
            .mount(&server)
            .await;

        let landmarks = make_client(&server)
            .extract_landmarks(&EncodedImage::jpeg("QUJD"))
            .await
            .unwrap();

        assert_eq!(landmarks.nose, Some(LandmarkPoint { x: 0.51, y: 0.2 }));
        assert_eq!(landmarks.left_hip, Some(LandmarkPoint { x: 0.45, y: 0.6 }));
        assert!(landmarks.right_wrist.is_none());
    }

    #[tokio::test]
    async fn test_transport_failure_yields_none() {
        let server = MockServer::start().await;

        test_support::post_path_regex(test_support::GENERATE_CONTENT_PATH_REGEX)
            .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
            .mount(&server)
            .await;

        let landmarks = make_client(&server)
            .extract_landmarks(&EncodedImage::jpeg("QUJD"))
            .await;
        assert!(landmarks.is_none());
    }

    #[tokio::test]
    async fn test_unparseable_body_yields_none() {
        let server = MockServer::start().await;

        test_support::post_path_regex(test_support::GENERATE_CONTENT_PATH_REGEX)
            .respond_with(text_response("not json at all"))
            .mount(&server)
            .await;

        let landmarks = make_client(&server)
            .extract_landmarks(&EncodedImage::jpeg("QUJD"))
            .await;
        assert!(landmarks.is_none());
    }

    #[tokio::test]
    async fn test_missing_text_part_yields_none() {
        let server = MockServer::start().await;

        test_support::post_path_regex(test_support::GENERATE_CONTENT_PATH_REGEX)
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "candidates": [] })),
            )
            .mount(&server)
            .await;

        let landmarks = make_client(&server)
            .extract_landmarks(&EncodedImage::jpeg("QUJD"))
            .await;
        assert!(landmarks.is_none());
    }
}

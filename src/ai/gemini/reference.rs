use super::client::GeminiHttpClient;
use super::types::{Content, GenerateContentRequest, GenerationConfig, Part};
use crate::ai::PoseReferenceService;
use crate::models::{Config, Gender, PoseStyle};
use crate::{prompts, Result};
use async_trait::async_trait;
use std::time::Duration;

// Portrait framing for phone screens.
const ASPECT_RATIO: &str = "3:4";

pub struct GeminiPoseReferenceClient {
    http: GeminiHttpClient,
    model: String,
}

impl GeminiPoseReferenceClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self::new_with_client(api_key, model, reqwest::Client::new())
    }

    pub fn new_with_client(api_key: String, model: String, client: reqwest::Client) -> Self {
        Self {
            http: GeminiHttpClient::new_with_client(api_key, Duration::from_secs(120), client),
            model,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.gemini_api_key.clone(), config.image_model.clone())
    }
}

#[cfg(test)]
super::impl_with_gemini_base_url!(GeminiPoseReferenceClient);

#[async_trait]
impl PoseReferenceService for GeminiPoseReferenceClient {
    async fn generate_pose_reference(
        &self,
        pose_description: &str,
        gender: Gender,
        style: PoseStyle,
    ) -> Result<String> {
        let prompt = prompts::render(
            prompts::POSE_REFERENCE,
            &[
                ("pose", pose_description),
                ("gender", &gender.to_string()),
                ("style", &style.to_string()),
            ],
        );

        let request = GenerateContentRequest {
            contents: vec![Content::user(vec![Part::text(prompt)])],
            generation_config: Some(GenerationConfig::image(ASPECT_RATIO)),
        };

        let response = self.http.generate_content(&self.model, &request).await?;

        match response.first_inline_data() {
            Some(inline_data) => {
                tracing::debug!(
                    "Gemini returned reference image with mime_type: {}",
                    inline_data.mime_type
                );
                Ok(inline_data.data.clone())
            }
            None => {
                tracing::warn!("No image data in Gemini pose reference response");
                Ok(String::new())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::gemini::test_support;
    use crate::Error;
    use wiremock::matchers::body_string_contains;
    use wiremock::{MockServer, ResponseTemplate};

    const DEFAULT_MODEL: &str = "gemini-2.5-flash-image";

    fn make_client(server: &MockServer) -> GeminiPoseReferenceClient {
        GeminiPoseReferenceClient::new("test-key".to_string(), DEFAULT_MODEL.to_string())
            .with_base_url(server.uri())
    }

    #[tokio::test]
    async fn test_generate_pose_reference_returns_base64_payload() {
        let server = MockServer::start().await;

        test_support::post_path_regex(test_support::GENERATE_CONTENT_PATH_REGEX)
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "candidates": [{
                    "content": {
                        "parts": [{
                            "inlineData": { "mimeType": "image/png", "data": "iVBORw0KGgo=" }
                        }]
                    }
                }]
            })))
            .mount(&server)
            .await;

        let data = make_client(&server)
            .generate_pose_reference("arms crossed", Gender::Female, PoseStyle::Elegant)
            .await
            .unwrap();
        assert_eq!(data, "iVBORw0KGgo=");
    }

    #[tokio::test]
    async fn test_missing_image_data_returns_empty_string() {
        let server = MockServer::start().await;

        test_support::post_path_regex(test_support::GENERATE_CONTENT_PATH_REGEX)
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "candidates": [{
                    "content": { "parts": [{ "text": "no image produced" }] }
                }]
            })))
            .mount(&server)
            .await;

        let data = make_client(&server)
            .generate_pose_reference("arms crossed", Gender::Male, PoseStyle::Casual)
            .await
            .unwrap();
        assert_eq!(data, "");
    }

    #[tokio::test]
    async fn test_request_uses_portrait_aspect_ratio_and_pose_text() {
        let server = MockServer::start().await;

        test_support::post_path_regex(test_support::GENERATE_CONTENT_PATH_REGEX)
            .and(body_string_contains("\"aspectRatio\":\"3:4\""))
            .and(body_string_contains("\"responseModalities\":[\"IMAGE\"]"))
            .and(body_string_contains("Pose: hands on hips"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "candidates": [{
                    "content": {
                        "parts": [{
                            "inlineData": { "mimeType": "image/png", "data": "AA==" }
                        }]
                    }
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        make_client(&server)
            .generate_pose_reference("hands on hips", Gender::Female, PoseStyle::Playful)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_api_error_returns_ai_provider_error() {
        let server = MockServer::start().await;

        test_support::post_path_regex(test_support::GENERATE_CONTENT_PATH_REGEX)
            .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
            .mount(&server)
            .await;

        let err = make_client(&server)
            .generate_pose_reference("arms crossed", Gender::Female, PoseStyle::Sporty)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::AiProvider(_)));
    }
}

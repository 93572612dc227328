use super::client::GeminiHttpClient;
use super::schema;
use super::types::{Content, GenerateContentRequest, GenerationConfig, Part};
use crate::ai::PoseEvaluationService;
use crate::models::{Config, EncodedImage, PoseFeedback};
use crate::{prompts, Error, Result};
use async_trait::async_trait;
use std::time::Duration;

pub struct GeminiPoseEvaluationClient {
    http: GeminiHttpClient,
    model: String,
}

impl GeminiPoseEvaluationClient {
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
}

#[cfg(test)]
super::impl_with_gemini_base_url!(GeminiPoseEvaluationClient);

#[async_trait]
impl PoseEvaluationService for GeminiPoseEvaluationClient {
    async fn evaluate_pose_match(
        &self,
        image: &EncodedImage,
        target_pose_description: &str,
    ) -> Result<PoseFeedback> {
        let prompt = prompts::render(
            prompts::POSE_FEEDBACK,
            &[("target", target_pose_description)],
        );

        let request = GenerateContentRequest {
            contents: vec![Content::user(vec![Part::image(image), Part::text(prompt)])],
            generation_config: Some(GenerationConfig::json(schema::feedback())),
        };

        let response = self.http.generate_content(&self.model, &request).await?;

        let text = response.first_text().ok_or_else(|| {
            Error::AiProvider("No text in Gemini pose evaluation response".to_string())
        })?;

        serde_json::from_str(text).map_err(|e| {
            tracing::error!(
                "Pose evaluation response did not match the contract: {}\nBody: {}",
                e,
                text
            );
            Error::SchemaMismatch(format!("pose evaluation: {}", e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::gemini::test_support;
    use crate::models::MatchStatus;
    use wiremock::matchers::body_string_contains;
    use wiremock::{MockServer, ResponseTemplate};

    const DEFAULT_MODEL: &str = "gemini-2.5-flash";

    fn make_client(server: &MockServer) -> GeminiPoseEvaluationClient {
        GeminiPoseEvaluationClient::new("test-key".to_string(), DEFAULT_MODEL.to_string())
            .with_base_url(server.uri())
    }

    fn text_response(text: &str) -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "candidates": [{ "content": { "parts": [{ "text": text }] } }]
        }))
    }

    #[tokio::test]
    async fn test_evaluate_pose_match_parses_feedback() {
        let server = MockServer::start().await;

        test_support::post_path_regex(test_support::GENERATE_CONTENT_PATH_REGEX)
            .respond_with(text_response(
                r#"{"score":87,"matchStatus":"Good","adjustments":["turn your head left"]}"#,
            ))
            .mount(&server)
            .await;

        let feedback = make_client(&server)
            .evaluate_pose_match(&EncodedImage::jpeg("QUJD"), "arms crossed, chin up")
            .await
            .unwrap();

        assert_eq!(feedback.score, 87);
        assert_eq!(feedback.match_status, MatchStatus::Good);
        assert_eq!(feedback.adjustments, vec!["turn your head left"]);
    }

    #[tokio::test]
    async fn test_needs_improvement_status_round_trips() {
        let server = MockServer::start().await;

        test_support::post_path_regex(test_support::GENERATE_CONTENT_PATH_REGEX)
            .respond_with(text_response(
                r#"{"score":41,"matchStatus":"Needs Improvement","adjustments":[]}"#,
            ))
            .mount(&server)
            .await;

        let feedback = make_client(&server)
            .evaluate_pose_match(&EncodedImage::jpeg("QUJD"), "profile stance")
            .await
            .unwrap();
        assert_eq!(feedback.match_status, MatchStatus::NeedsImprovement);
    }

    #[tokio::test]
    async fn test_request_embeds_target_description() {
        let server = MockServer::start().await;

        test_support::post_path_regex(test_support::GENERATE_CONTENT_PATH_REGEX)
            .and(body_string_contains("Target pose: \\\"lean on the wall\\\""))
            .and(body_string_contains("\"responseSchema\""))
            .respond_with(text_response(
                r#"{"score":99,"matchStatus":"Perfect","adjustments":[]}"#,
            ))
            .expect(1)
            .mount(&server)
            .await;

        make_client(&server)
            .evaluate_pose_match(&EncodedImage::jpeg("QUJD"), "lean on the wall")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_transport_failure_propagates() {
        let server = MockServer::start().await;

        test_support::post_path_regex(test_support::GENERATE_CONTENT_PATH_REGEX)
            .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
            .mount(&server)
            .await;

        let err = make_client(&server)
            .evaluate_pose_match(&EncodedImage::jpeg("QUJD"), "arms crossed")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::AiProvider(_)));
    }

    #[tokio::test]
    async fn test_contract_violation_returns_schema_mismatch() {
        let server = MockServer::start().await;

        test_support::post_path_regex(test_support::GENERATE_CONTENT_PATH_REGEX)
            .respond_with(text_response(
                r#"{"score":"very good","matchStatus":"Good","adjustments":[]}"#,
            ))
            .mount(&server)
            .await;

        let err = make_client(&server)
            .evaluate_pose_match(&EncodedImage::jpeg("QUJD"), "arms crossed")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::SchemaMismatch(_)));
    }
}

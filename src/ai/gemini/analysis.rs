use super::client::GeminiHttpClient;
use super::schema;
use super::types::{Content, GenerateContentRequest, GenerationConfig, Part};
use crate::ai::SceneAnalysisService;
use crate::models::{AnalysisResult, Config, EncodedImage, Gender, PoseStyle};
use crate::{prompts, Error, Result};
use async_trait::async_trait;
use std::time::Duration;

pub struct GeminiSceneAnalysisClient {
    http: GeminiHttpClient,
    model: String,
}

impl GeminiSceneAnalysisClient {
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
super::impl_with_gemini_base_url!(GeminiSceneAnalysisClient);

#[async_trait]
impl SceneAnalysisService for GeminiSceneAnalysisClient {
    async fn analyze_scene(
        &self,
        image: &EncodedImage,
        gender: Gender,
        style: PoseStyle,
    ) -> Result<AnalysisResult> {
        let prompt = prompts::render(
            prompts::SCENE_ANALYSIS,
            &[
                ("gender", &gender.to_string()),
                ("style", &style.to_string()),
            ],
        );

        let request = GenerateContentRequest {
            contents: vec![Content::user(vec![Part::image(image), Part::text(prompt)])],
            generation_config: Some(GenerationConfig::json(schema::analysis())),
        };

        let response = self.http.generate_content(&self.model, &request).await?;

        let text = response.first_text().ok_or_else(|| {
            Error::AiProvider("No text in Gemini scene analysis response".to_string())
        })?;

        serde_json::from_str(text).map_err(|e| {
            tracing::error!(
                "Scene analysis response did not match the contract: {}\nBody: {}",
                e,
                text
            );
            Error::SchemaMismatch(format!("scene analysis: {}", e))
        })
    }
}

//! AI coaching services backed by Gemini
//!
//! Exposes one trait per coaching operation so callers can inject the real
//! Gemini clients or the mock clients interchangeably.

pub mod gemini;
pub mod mime;
pub mod mock;

pub use gemini::{
    GeminiLandmarkClient, GeminiPoseEvaluationClient, GeminiPoseReferenceClient,
    GeminiSceneAnalysisClient,
};
pub use mock::{
    MockLandmarkClient, MockPoseEvaluationClient, MockPoseReferenceClient,
    MockSceneAnalysisClient,
};

use crate::models::{AnalysisResult, EncodedImage, Gender, PoseFeedback, PoseLandmarks, PoseStyle};
use crate::Result;
use async_trait::async_trait;

/// Analyzes a camera scene and recommends a pose.
#[async_trait]
pub trait SceneAnalysisService: Send + Sync {
    async fn analyze_scene(
        &self,
        image: &EncodedImage,
        gender: Gender,
        style: PoseStyle,
    ) -> Result<AnalysisResult>;
}

/// Generates a reference image demonstrating a pose.
#[async_trait]
pub trait PoseReferenceService: Send + Sync {
    /// Returns the base64 payload of the generated image, or an empty string
    /// when the service responds without image data.
    async fn generate_pose_reference(
        &self,
        pose_description: &str,
        gender: Gender,
        style: PoseStyle,
    ) -> Result<String>;
}

/// Scores a pose attempt against a target pose description.
#[async_trait]
pub trait PoseEvaluationService: Send + Sync {
    async fn evaluate_pose_match(
        &self,
        image: &EncodedImage,
        target_pose_description: &str,
    ) -> Result<PoseFeedback>;
}

/// Best-effort body landmark extraction.
#[async_trait]
pub trait LandmarkService: Send + Sync {
    /// Returns `None` on any failure; landmark overlays are optional and
    /// callers must not treat a missing result as an error.
    async fn extract_landmarks(&self, image: &EncodedImage) -> Option<PoseLandmarks>;
}

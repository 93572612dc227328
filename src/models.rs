//! Data models and structures
//!
//! Defines the coaching domain records exchanged with Gemini: scene
//! analysis, pose feedback, body landmarks, and the caller-supplied image.

use serde::{Deserialize, Serialize};

/// Subject gender, interpolated verbatim into prompt text.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Gender {
    Female,
    Male,
    NonBinary,
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Gender::Female => "Female",
            Gender::Male => "Male",
            Gender::NonBinary => "Non-binary",
        };
        f.write_str(s)
    }
}

/// Requested posing style, interpolated verbatim into prompt text.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PoseStyle {
    Casual,
    Elegant,
    Sporty,
    Editorial,
    Playful,
}

impl std::fmt::Display for PoseStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PoseStyle::Casual => "Casual",
            PoseStyle::Elegant => "Elegant",
            PoseStyle::Sporty => "Sporty",
            PoseStyle::Editorial => "Editorial",
            PoseStyle::Playful => "Playful",
        };
        f.write_str(s)
    }
}

// Scene analysis response models. Field names follow the JSON contract
// requested from Gemini, hence the camelCase renames.

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub environment: String,
    pub lighting: Lighting,
    pub background: Background,
    pub suggested_pose: SuggestedPose,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Lighting {
    pub quality: LightingQuality,
    pub direction: String,
    pub suggestion: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum LightingQuality {
    Excellent,
    Good,
    Fair,
    Poor,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Background {
    pub clutter_level: ClutterLevel,
    pub suggestion: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ClutterLevel {
    Clean,
    Moderate,
    Cluttered,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SuggestedPose {
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub steps: Vec<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Scoring of a pose attempt against a target pose description.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PoseFeedback {
    pub score: i32,
    pub match_status: MatchStatus,
    pub adjustments: Vec<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum MatchStatus {
    Perfect,
    Good,
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
}

/// Normalized 2D body landmarks. Any subset of points may be absent when
/// the model cannot locate them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PoseLandmarks {
    pub nose: Option<LandmarkPoint>,
    pub left_shoulder: Option<LandmarkPoint>,
    pub right_shoulder: Option<LandmarkPoint>,
    pub left_elbow: Option<LandmarkPoint>,
    pub right_elbow: Option<LandmarkPoint>,
    pub left_wrist: Option<LandmarkPoint>,
    pub right_wrist: Option<LandmarkPoint>,
    pub left_hip: Option<LandmarkPoint>,
    pub right_hip: Option<LandmarkPoint>,
}

/// Image coordinates as fractions of width/height in the 0-1 range.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct LandmarkPoint {
    pub x: f64,
    pub y: f64,
}

/// A base64-encoded image supplied by the caller.
///
/// The payload is forwarded to Gemini as an inline data part and is never
/// decoded or inspected by this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    data: String,
    mime_type: String,
}

impl EncodedImage {
    /// Wrap an already base64-encoded JPEG.
    pub fn jpeg(base64_data: impl Into<String>) -> Self {
        Self {
            data: base64_data.into(),
            mime_type: "image/jpeg".to_string(),
        }
    }

    /// Base64-encode raw image bytes, sniffing the MIME type.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        use base64::Engine as _;
        Self {
            data: base64::engine::general_purpose::STANDARD.encode(bytes),
            mime_type: crate::ai::mime::detect_image_mime(bytes).to_string(),
        }
    }

    pub fn as_base64(&self) -> &str {
        &self.data
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }
}

// Configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub scene_model: String,
    pub image_model: String,
}

impl Config {
    pub fn from_env() -> crate::Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            gemini_api_key: std::env::var("GEMINI_API_KEY")
                .map_err(|_| crate::Error::Config("GEMINI_API_KEY not set".to_string()))?,
            scene_model: std::env::var("POSECOACH_SCENE_MODEL")
                .unwrap_or_else(|_| "gemini-2.5-flash".to_string()),
            image_model: std::env::var("POSECOACH_IMAGE_MODEL")
                .unwrap_or_else(|_| "gemini-2.5-flash-image".to_string()),
        })
    }
}

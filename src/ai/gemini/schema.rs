//! Response schema contracts requested from Gemini
//!
//! Gemini's structured-output dialect: nested objects carrying `type`,
//! `properties`, `items`, `enum`, and `required`. The three contracts here
//! mirror the coaching records in `crate::models`, so a response that
//! honors its contract deserializes cleanly into the matching record.

use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize)]
pub struct Schema {
    #[serde(rename = "type")]
    kind: SchemaType,
    #[serde(skip_serializing_if = "Option::is_none")]
    properties: Option<BTreeMap<&'static str, Schema>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    items: Option<Box<Schema>>,
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    enum_values: Option<Vec<&'static str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    required: Option<Vec<&'static str>>,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
enum SchemaType {
    Object,
    Array,
    String,
    Integer,
    Number,
}

impl Schema {
    fn leaf(kind: SchemaType) -> Self {
        Self {
            kind,
            properties: None,
            items: None,
            enum_values: None,
            required: None,
        }
    }

    pub fn string() -> Self {
        Self::leaf(SchemaType::String)
    }

    pub fn integer() -> Self {
        Self::leaf(SchemaType::Integer)
    }

    pub fn number() -> Self {
        Self::leaf(SchemaType::Number)
    }

    pub fn string_enum(values: &[&'static str]) -> Self {
        Self {
            enum_values: Some(values.to_vec()),
            ..Self::leaf(SchemaType::String)
        }
    }

    pub fn array(items: Schema) -> Self {
        Self {
            items: Some(Box::new(items)),
            ..Self::leaf(SchemaType::Array)
        }
    }

    /// Object schema; pass an empty `required` slice for all-optional
    /// properties.
    pub fn object(
        properties: impl IntoIterator<Item = (&'static str, Schema)>,
        required: &[&'static str],
    ) -> Self {
        Self {
            properties: Some(properties.into_iter().collect()),
            required: if required.is_empty() {
                None
            } else {
                Some(required.to_vec())
            },
            ..Self::leaf(SchemaType::Object)
        }
    }
}

/// Contract for scene analysis responses (`AnalysisResult`).
pub fn analysis() -> Schema {
    Schema::object(
        [
            ("environment", Schema::string()),
            (
                "lighting",
                Schema::object(
                    [
                        (
                            "quality",
                            Schema::string_enum(&["Excellent", "Good", "Fair", "Poor"]),
                        ),
                        ("direction", Schema::string()),
                        ("suggestion", Schema::string()),
                    ],
                    &["quality", "direction", "suggestion"],
                ),
            ),
            (
                "background",
                Schema::object(
                    [
                        (
                            "clutterLevel",
                            Schema::string_enum(&["Clean", "Moderate", "Cluttered"]),
                        ),
                        ("suggestion", Schema::string()),
                    ],
                    &["clutterLevel", "suggestion"],
                ),
            ),
            (
                "suggestedPose",
                Schema::object(
                    [
                        ("title", Schema::string()),
                        ("description", Schema::string()),
                        (
                            "difficulty",
                            Schema::string_enum(&["Easy", "Medium", "Hard"]),
                        ),
                        ("steps", Schema::array(Schema::string())),
                    ],
                    &["title", "description", "difficulty", "steps"],
                ),
            ),
        ],
        &["environment", "lighting", "background", "suggestedPose"],
    )
}

/// Contract for pose evaluation responses (`PoseFeedback`).
pub fn feedback() -> Schema {
    Schema::object(
        [
            ("score", Schema::integer()),
            (
                "matchStatus",
                Schema::string_enum(&["Perfect", "Good", "Needs Improvement"]),
            ),
            ("adjustments", Schema::array(Schema::string())),
        ],
        &["score", "matchStatus", "adjustments"],
    )
}

/// Contract for landmark responses (`PoseLandmarks`). No point is required;
/// the model omits landmarks it cannot locate.
pub fn landmarks() -> Schema {
    Schema::object(
        [
            ("nose", point()),
            ("leftShoulder", point()),
            ("rightShoulder", point()),
            ("leftElbow", point()),
            ("rightElbow", point()),
            ("leftWrist", point()),
            ("rightWrist", point()),
            ("leftHip", point()),
            ("rightHip", point()),
        ],
        &[],
    )
}

fn point() -> Schema {
    Schema::object([("x", Schema::number()), ("y", Schema::number())], &[])
}

use super::{LandmarkService, PoseEvaluationService, PoseReferenceService, SceneAnalysisService};
use crate::models::{
    AnalysisResult, Background, ClutterLevel, Difficulty, EncodedImage, Gender, LandmarkPoint,
    Lighting, LightingQuality, MatchStatus, PoseFeedback, PoseLandmarks, PoseStyle, SuggestedPose,
};
use crate::{Error, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

type Queued<T> = Arc<Mutex<Vec<std::result::Result<T, String>>>>;

fn next_response<T: Clone>(queue: &Queued<T>, call: usize) -> Option<Result<T>> {
    let responses = queue.lock().unwrap();
    if responses.is_empty() {
        return None;
    }
    let index = (call - 1) % responses.len();
    Some(
        responses[index]
            .clone()
            .map_err(Error::AiProvider),
    )
}

pub struct MockSceneAnalysisClient {
    responses: Queued<AnalysisResult>,
    call_count: Arc<Mutex<usize>>,
}

impl MockSceneAnalysisClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    pub fn with_analysis(self, analysis: AnalysisResult) -> Self {
        self.responses.lock().unwrap().push(Ok(analysis));
        self
    }

    pub fn with_error(self, message: impl Into<String>) -> Self {
        self.responses.lock().unwrap().push(Err(message.into()));
        self
    }

    pub fn get_call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

impl Default for MockSceneAnalysisClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SceneAnalysisService for MockSceneAnalysisClient {
    async fn analyze_scene(
        &self,
        _image: &EncodedImage,
        gender: Gender,
        style: PoseStyle,
    ) -> Result<AnalysisResult> {
        let mut count = self.call_count.lock().unwrap();
        *count += 1;

        match next_response(&self.responses, *count) {
            Some(response) => response,
            None => Ok(AnalysisResult {
                environment: "outdoor park".to_string(),
                lighting: Lighting {
                    quality: LightingQuality::Good,
                    direction: "side".to_string(),
                    suggestion: "face the light".to_string(),
                },
                background: Background {
                    clutter_level: ClutterLevel::Moderate,
                    suggestion: "step away from the bench".to_string(),
                },
                suggested_pose: SuggestedPose {
                    title: format!("{} {} lean", gender, style),
                    description: "lean against a wall, ankles crossed".to_string(),
                    difficulty: Difficulty::Easy,
                    steps: vec![
                        "find a wall".to_string(),
                        "cross your ankles".to_string(),
                    ],
                },
            }),
        }
    }
}

pub struct MockPoseReferenceClient {
    responses: Queued<String>,
    call_count: Arc<Mutex<usize>>,
}

impl MockPoseReferenceClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Queue a base64 payload; pass an empty string to simulate the
    /// no-image-data degraded path.
    pub fn with_image_base64(self, base64_data: impl Into<String>) -> Self {
        self.responses.lock().unwrap().push(Ok(base64_data.into()));
        self
    }

    pub fn with_error(self, message: impl Into<String>) -> Self {
        self.responses.lock().unwrap().push(Err(message.into()));
        self
    }

    pub fn get_call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

impl Default for MockPoseReferenceClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PoseReferenceService for MockPoseReferenceClient {
    async fn generate_pose_reference(
        &self,
        _pose_description: &str,
        _gender: Gender,
        _style: PoseStyle,
    ) -> Result<String> {
        let mut count = self.call_count.lock().unwrap();
        *count += 1;

        match next_response(&self.responses, *count) {
            Some(response) => response,
            // base64 of a JPEG magic prefix, enough for callers to forward
            None => Ok("/9j/4AA=".to_string()),
        }
    }
}

pub struct MockPoseEvaluationClient {
    responses: Queued<PoseFeedback>,
    call_count: Arc<Mutex<usize>>,
}

impl MockPoseEvaluationClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    pub fn with_feedback(self, feedback: PoseFeedback) -> Self {
        self.responses.lock().unwrap().push(Ok(feedback));
        self
    }

    pub fn with_error(self, message: impl Into<String>) -> Self {
        self.responses.lock().unwrap().push(Err(message.into()));
        self
    }

    pub fn get_call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

impl Default for MockPoseEvaluationClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PoseEvaluationService for MockPoseEvaluationClient {
    async fn evaluate_pose_match(
        &self,
        _image: &EncodedImage,
        _target_pose_description: &str,
    ) -> Result<PoseFeedback> {
        let mut count = self.call_count.lock().unwrap();
        *count += 1;

        match next_response(&self.responses, *count) {
            Some(response) => response,
            None => Ok(PoseFeedback {
                score: 82,
                match_status: MatchStatus::Good,
                adjustments: vec!["drop your left shoulder slightly".to_string()],
            }),
        }
    }
}

pub struct MockLandmarkClient {
    responses: Arc<Mutex<Vec<Option<PoseLandmarks>>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockLandmarkClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    pub fn with_landmarks(self, landmarks: PoseLandmarks) -> Self {
        self.responses.lock().unwrap().push(Some(landmarks));
        self
    }

    /// Queue a suppressed failure (`None`).
    pub fn with_failure(self) -> Self {
        self.responses.lock().unwrap().push(None);
        self
    }

    pub fn get_call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

impl Default for MockLandmarkClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LandmarkService for MockLandmarkClient {
    async fn extract_landmarks(&self, _image: &EncodedImage) -> Option<PoseLandmarks> {
        let mut count = self.call_count.lock().unwrap();
        *count += 1;

        let responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            Some(PoseLandmarks {
                nose: Some(LandmarkPoint { x: 0.5, y: 0.18 }),
                left_shoulder: Some(LandmarkPoint { x: 0.42, y: 0.33 }),
                right_shoulder: Some(LandmarkPoint { x: 0.58, y: 0.33 }),
                ..PoseLandmarks::default()
            })
        } else {
            let index = (*count - 1) % responses.len();
            responses[index].clone()
        }
    }
}

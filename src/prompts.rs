pub const SCENE_ANALYSIS: &str = include_str!("../data/prompts/scene_analysis.txt");
pub const POSE_REFERENCE: &str = include_str!("../data/prompts/pose_reference.txt");
pub const POSE_FEEDBACK: &str = include_str!("../data/prompts/pose_feedback.txt");
pub const POSE_LANDMARKS: &str = include_str!("../data/prompts/pose_landmarks.txt");

/// Replace `{{key}}` placeholders in a template string.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut result = template.to_string();
    for (key, value) in vars {
        result = result.replace(&format!("{{{{{}}}}}", key), value);
    }
    result
}

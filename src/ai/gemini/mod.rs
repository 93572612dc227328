pub mod analysis;
pub mod client;
pub mod feedback;
pub mod landmarks;
pub mod reference;
pub mod schema;
pub mod types;

pub use analysis::GeminiSceneAnalysisClient;
pub use feedback::GeminiPoseEvaluationClient;
pub use landmarks::GeminiLandmarkClient;
pub use reference::GeminiPoseReferenceClient;

/// Adds a test-only builder that points a coaching client at a local
/// wiremock server.
#[cfg(test)]
macro_rules! impl_with_gemini_base_url {
    ($client:ty) => {
        impl $client {
            pub(crate) fn with_base_url(mut self, base_url: String) -> Self {
                self.http = self.http.with_base_url(base_url);
                self
            }
        }
    };
}

#[cfg(test)]
pub(crate) use impl_with_gemini_base_url;

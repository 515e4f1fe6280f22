use crate::core::{MatchResult, WelfareScheme};
use crate::models::domain::ScoredVenue;
use serde::{Deserialize, Serialize};

/// Response for a group match
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResponse {
    pub matches: Vec<ScoredVenue>,
    pub scheme: WelfareScheme,
    pub participants: usize,
    #[serde(rename = "unknownParticipants")]
    pub unknown_participants: usize,
    #[serde(rename = "generatedAt")]
    pub generated_at: chrono::DateTime<chrono::Utc>,
}

impl From<MatchResult> for MatchResponse {
    fn from(result: MatchResult) -> Self {
        Self {
            matches: result.matches,
            scheme: result.scheme,
            participants: result.participants,
            unknown_participants: result.unknown_participants,
            generated_at: chrono::Utc::now(),
        }
    }
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

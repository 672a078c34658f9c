//! Self-learning challenges.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How hard a challenge is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChallengeDifficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

/// Progress of a challenge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChallengeStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

/// A challenge generated for the user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Challenge {
    #[serde(deserialize_with = "crate::models::deserialize_id")]
    pub id: String,

    pub title: String,

    #[serde(default)]
    pub description: Option<String>,

    /// Subject the challenge is about (e.g. a language or a skill).
    #[serde(default)]
    pub topic: Option<String>,

    #[serde(default)]
    pub difficulty: ChallengeDifficulty,

    #[serde(default)]
    pub status: ChallengeStatus,

    /// Points awarded on completion.
    #[serde(default)]
    pub points: u32,

    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,

    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
}

impl Challenge {
    /// Returns `true` once the challenge has been completed.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.status == ChallengeStatus::Completed
    }
}

/// Request for the server to generate a new challenge.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateChallenge {
    pub topic: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<ChallengeDifficulty>,
}

impl GenerateChallenge {
    /// Requests a challenge on `topic` at the server's default difficulty.
    #[must_use]
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            difficulty: None,
        }
    }

    /// Sets the requested difficulty.
    #[must_use]
    pub const fn difficulty(mut self, difficulty: ChallengeDifficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_challenge_deserializes_api_shape() {
        let challenge: Challenge = serde_json::from_value(json!({
            "id": 12,
            "title": "Order coffee in Portuguese",
            "topic": "portuguese",
            "difficulty": "easy",
            "status": "in_progress",
            "points": 10
        }))
        .unwrap();

        assert_eq!(challenge.id, "12");
        assert_eq!(challenge.difficulty, ChallengeDifficulty::Easy);
        assert_eq!(challenge.status, ChallengeStatus::InProgress);
        assert!(!challenge.is_completed());
    }

    #[test]
    fn test_completed_challenge() {
        let challenge: Challenge = serde_json::from_value(json!({
            "id": "c1",
            "title": "Hike 20km",
            "status": "completed",
            "completedAt": "2026-06-01T18:00:00Z"
        }))
        .unwrap();

        assert!(challenge.is_completed());
        assert!(challenge.completed_at.is_some());
        assert_eq!(challenge.points, 0);
    }

    #[test]
    fn test_generate_request_payload() {
        let request = GenerateChallenge::new("cooking").difficulty(ChallengeDifficulty::Hard);
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"topic": "cooking", "difficulty": "hard"})
        );
        assert_eq!(
            serde_json::to_value(GenerateChallenge::new("maps")).unwrap(),
            json!({"topic": "maps"})
        );
    }
}

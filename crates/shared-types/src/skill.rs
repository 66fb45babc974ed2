use serde::{Deserialize, Serialize};

/// A skill taxonomy entry as stored in the `skill` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct Skill {
    pub id: i64,
    pub preferred_label: String,
    pub skill_type: Option<String>,
    pub reuse_level: Option<String>,
    /// Comma-separated alternate labels, matched by the skill search.
    pub alt_labels: Option<String>,
}

/// Direction of a vote on a suggested skill.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SkillVote {
    Up,
    Down,
}

impl SkillVote {
    /// Score delta applied to the suggestion: +5 for up, -5 for down.
    pub fn score_change(&self) -> f32 {
        match self {
            SkillVote::Up => 5.0,
            SkillVote::Down => -5.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SkillVote::Up => "up",
            SkillVote::Down => "down",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vote_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&SkillVote::Up).unwrap(), "\"up\"");
        assert_eq!(serde_json::to_string(&SkillVote::Down).unwrap(), "\"down\"");
    }

    #[test]
    fn vote_score_changes() {
        assert_eq!(SkillVote::Up.score_change(), 5.0);
        assert_eq!(SkillVote::Down.score_change(), -5.0);
    }
}

use serde::{Deserialize, Serialize};

pub const FLIP_BONUS: i64 = 15;
pub const DEFAULT_TARGET_SCORE: i64 = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleSet {
    #[serde(default = "default_flip_bonus")]
    pub flip_bonus: i64,
    #[serde(default = "default_target_score")]
    pub target_score: i64,
}

fn default_flip_bonus() -> i64 {
    FLIP_BONUS
}

fn default_target_score() -> i64 {
    DEFAULT_TARGET_SCORE
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            flip_bonus: FLIP_BONUS,
            target_score: DEFAULT_TARGET_SCORE,
        }
    }
}

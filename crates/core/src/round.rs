use crate::RoundHand;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PlayerRoundState {
    #[default]
    InRound,
    Banked,
    Busted,
    Frozen,
}

impl PlayerRoundState {
    pub fn is_busted(self) -> bool {
        self == PlayerRoundState::Busted
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRound {
    #[serde(default)]
    pub state: PlayerRoundState,
    #[serde(default)]
    pub hand: RoundHand,
    #[serde(default)]
    pub manual_score_override: Option<i64>,
}

impl PlayerRound {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn set_override(&mut self, score: i64) {
        self.manual_score_override = Some(score);
    }

    pub fn clear_override(&mut self) {
        self.manual_score_override = None;
    }
}

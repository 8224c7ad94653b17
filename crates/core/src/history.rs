use crate::{PlayerId, PlayerRoundState, RoundHand};
use serde::{Deserialize, Serialize};

pub const ROUND_RESULT_SCHEMA_VERSION: u32 = 2;
pub const LEGACY_ROUND_RESULT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RoundResultRecord", into = "RoundResultRecord")]
pub struct RoundResult {
    pub player_id: PlayerId,
    pub player_name: String,
    pub round_score: i64,
    pub state: Option<PlayerRoundState>,
    pub manual_score_override: Option<i64>,
    pub hand_snapshot: Option<RoundHand>,
    pub auto_score: Option<i64>,
}

impl RoundResult {
    /// Falls back to `round_score == 0` when the state was not recorded.
    pub fn is_busted(&self) -> bool {
        match self.state {
            Some(state) => state.is_busted(),
            None => self.round_score == 0,
        }
    }

    pub fn was_overridden(&self) -> bool {
        self.manual_score_override.is_some()
    }

    pub fn has_flip_bonus(&self) -> bool {
        self.hand_snapshot
            .as_ref()
            .is_some_and(RoundHand::has_flip7_bonus)
    }

    pub fn x2_count(&self) -> u32 {
        self.hand_snapshot.as_ref().map_or(0, RoundHand::x2_count)
    }

    pub fn modifier_sum(&self) -> i64 {
        self.hand_snapshot.as_ref().map_or(0, RoundHand::modifier_sum)
    }

    pub fn number_card_count(&self) -> usize {
        self.hand_snapshot
            .as_ref()
            .map_or(0, |hand| hand.selected_numbers().len())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRound {
    pub round_number: u32,
    pub results: Vec<RoundResult>,
}

impl GameRound {
    pub fn result_for(&self, player_id: PlayerId) -> Option<&RoundResult> {
        self.results
            .iter()
            .find(|result| result.player_id == player_id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RoundResultRecord {
    #[serde(default = "legacy_schema_version")]
    schema_version: u32,
    player_id: PlayerId,
    player_name: String,
    round_score: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    state: Option<PlayerRoundState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    manual_score_override: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    hand_snapshot: Option<RoundHand>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    auto_score: Option<i64>,
}

fn legacy_schema_version() -> u32 {
    LEGACY_ROUND_RESULT_SCHEMA_VERSION
}

impl From<RoundResultRecord> for RoundResult {
    fn from(record: RoundResultRecord) -> Self {
        Self {
            player_id: record.player_id,
            player_name: record.player_name,
            round_score: record.round_score,
            state: record.state,
            manual_score_override: record.manual_score_override,
            hand_snapshot: record.hand_snapshot,
            auto_score: record.auto_score,
        }
    }
}

impl From<RoundResult> for RoundResultRecord {
    fn from(result: RoundResult) -> Self {
        Self {
            schema_version: ROUND_RESULT_SCHEMA_VERSION,
            player_id: result.player_id,
            player_name: result.player_name,
            round_score: result.round_score,
            state: result.state,
            manual_score_override: result.manual_score_override,
            hand_snapshot: result.hand_snapshot,
            auto_score: result.auto_score,
        }
    }
}

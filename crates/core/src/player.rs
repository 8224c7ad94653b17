use crate::{calculate_score_with_rules, PlayerRound, RuleSet};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

pub type PlayerId = Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    id: PlayerId,
    pub name: String,
    pub total_score: i64,
    #[serde(default)]
    pub current_round: PlayerRound,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), name)
    }

    pub fn with_id(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            total_score: 0,
            current_round: PlayerRound::new(),
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn pending_score(&self, rules: &RuleSet) -> i64 {
        calculate_score_with_rules(&self.current_round, rules).max(0)
    }

    pub fn bank_round(&mut self) -> i64 {
        self.bank_round_with_rules(&RuleSet::default())
    }

    pub fn bank_round_with_rules(&mut self, rules: &RuleSet) -> i64 {
        let points = self.pending_score(rules);
        self.total_score = self.total_score.saturating_add(points);
        debug!(
            player = %self.name,
            state = ?self.current_round.state,
            points,
            total = self.total_score,
            "banked round"
        );
        self.current_round.reset();
        points
    }

    pub fn clear_round(&mut self) {
        self.current_round.reset();
    }
}

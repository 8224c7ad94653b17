use crate::{PlayerRound, PlayerRoundState, RoundHand, RuleSet};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub busted: bool,
    pub number_sum: i64,
    pub multiplier: i64,
    pub modifier_sum: i64,
    pub flip_bonus: i64,
    pub total: i64,
}

pub fn breakdown(hand: &RoundHand, state: PlayerRoundState) -> ScoreBreakdown {
    breakdown_with_rules(hand, state, &RuleSet::default())
}

pub fn breakdown_with_rules(
    hand: &RoundHand,
    state: PlayerRoundState,
    rules: &RuleSet,
) -> ScoreBreakdown {
    if state.is_busted() {
        return ScoreBreakdown {
            busted: true,
            multiplier: 1,
            ..ScoreBreakdown::default()
        };
    }

    let number_sum = hand.number_sum();
    let multiplier = 2i64.saturating_pow(hand.x2_count());
    let modifier_sum = hand.modifier_sum();
    let flip_bonus = if hand.has_flip7_bonus() {
        rules.flip_bonus.max(0)
    } else {
        0
    };
    // Doubles multiply only the number total; modifiers and bonus are added after.
    let total = number_sum
        .saturating_mul(multiplier)
        .saturating_add(modifier_sum)
        .saturating_add(flip_bonus);

    ScoreBreakdown {
        busted: false,
        number_sum,
        multiplier,
        modifier_sum,
        flip_bonus,
        total,
    }
}

pub fn score_round(hand: &RoundHand, state: PlayerRoundState) -> i64 {
    breakdown(hand, state).total
}

pub fn score_round_with_rules(hand: &RoundHand, state: PlayerRoundState, rules: &RuleSet) -> i64 {
    breakdown_with_rules(hand, state, rules).total
}

pub fn calculate_auto_score(round: &PlayerRound) -> i64 {
    calculate_auto_score_with_rules(round, &RuleSet::default())
}

pub fn calculate_auto_score_with_rules(round: &PlayerRound, rules: &RuleSet) -> i64 {
    score_round_with_rules(&round.hand, round.state, rules)
}

pub fn calculate_score(round: &PlayerRound) -> i64 {
    calculate_score_with_rules(round, &RuleSet::default())
}

pub fn calculate_score_with_rules(round: &PlayerRound, rules: &RuleSet) -> i64 {
    round
        .manual_score_override
        .unwrap_or_else(|| calculate_auto_score_with_rules(round, rules))
}

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const MIN_RANK: u8 = 0;
pub const MAX_RANK: u8 = 12;

pub const STANDARD_MODIFIERS: [i64; 5] = [2, 4, 6, 8, 10];

pub const ACTION_FREEZE: &str = "freeze";
pub const ACTION_FLIP_THREE: &str = "flipThree";
pub const ACTION_SECOND_CHANCE: &str = "secondChance";

pub fn number_rank(rank: i32) -> Option<u8> {
    u8::try_from(rank)
        .ok()
        .filter(|rank| (MIN_RANK..=MAX_RANK).contains(rank))
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Card {
    Number(u8),
    Modifier(i64),
    Double,
    Action(String),
}

impl Card {
    pub fn is_action(&self) -> bool {
        matches!(self, Card::Action(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeckProfile {
    pub number_counts: BTreeMap<u8, i64>,
    pub modifier_counts: BTreeMap<i64, i64>,
    pub double_count: i64,
    pub action_counts: BTreeMap<String, i64>,
}

impl DeckProfile {
    pub fn standard() -> Self {
        let mut number_counts = BTreeMap::new();
        number_counts.insert(0, 1);
        for rank in 1..=MAX_RANK {
            number_counts.insert(rank, i64::from(rank));
        }
        let modifier_counts = STANDARD_MODIFIERS.iter().map(|value| (*value, 1)).collect();
        let action_counts = [ACTION_FREEZE, ACTION_FLIP_THREE, ACTION_SECOND_CHANCE]
            .iter()
            .map(|name| (name.to_string(), 3))
            .collect();
        Self {
            number_counts,
            modifier_counts,
            double_count: 1,
            action_counts,
        }
    }

    pub fn empty() -> Self {
        Self {
            number_counts: BTreeMap::new(),
            modifier_counts: BTreeMap::new(),
            double_count: 0,
            action_counts: BTreeMap::new(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.double_count >= 0
            && self.number_counts.values().all(|count| *count >= 0)
            && self.modifier_counts.values().all(|count| *count >= 0)
            && self.action_counts.values().all(|count| *count >= 0)
    }

    pub fn number_card_count(&self) -> i64 {
        saturating_sum(self.number_counts.values())
    }

    pub fn modifier_card_count(&self) -> i64 {
        saturating_sum(self.modifier_counts.values())
    }

    pub fn action_card_count(&self) -> i64 {
        saturating_sum(self.action_counts.values())
    }

    pub fn total_card_count(&self) -> i64 {
        saturating_sum(&[
            self.number_card_count(),
            self.modifier_card_count(),
            self.double_count,
            self.action_card_count(),
        ])
    }

    pub fn number_count(&self, rank: u8) -> i64 {
        self.number_counts.get(&rank).copied().unwrap_or(0)
    }

    pub fn modifier_count(&self, value: i64) -> i64 {
        self.modifier_counts.get(&value).copied().unwrap_or(0)
    }

    pub fn action_count(&self, name: &str) -> i64 {
        self.action_counts.get(name).copied().unwrap_or(0)
    }

    pub fn with_number_count(&self, rank: u8, count: i64) -> Self {
        let mut next = self.clone();
        next.number_counts.insert(rank, count);
        next
    }

    pub fn with_modifier_count(&self, value: i64, count: i64) -> Self {
        let mut next = self.clone();
        next.modifier_counts.insert(value, count);
        next
    }

    pub fn with_double_count(&self, count: i64) -> Self {
        Self {
            double_count: count,
            ..self.clone()
        }
    }

    pub fn with_action_count(&self, name: &str, count: i64) -> Self {
        let mut next = self.clone();
        next.action_counts.insert(name.to_string(), count);
        next
    }
}

fn saturating_sum<'a>(counts: impl IntoIterator<Item = &'a i64>) -> i64 {
    counts
        .into_iter()
        .fold(0i64, |acc, count| acc.saturating_add(*count))
}

impl Default for DeckProfile {
    fn default() -> Self {
        Self::standard()
    }
}

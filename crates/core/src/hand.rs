use crate::{number_rank, Card};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

pub const FLIP_BONUS_CARDS: usize = 7;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RoundHandRecord")]
pub struct RoundHand {
    selected_numbers: BTreeSet<u8>,
    x2_count: u32,
    add_mods: BTreeMap<i64, u32>,
}

impl RoundHand {
    pub fn new(
        numbers: impl IntoIterator<Item = i32>,
        x2_count: i64,
        add_mods: impl IntoIterator<Item = (i64, i64)>,
    ) -> Self {
        let selected_numbers = numbers.into_iter().filter_map(number_rank).collect();
        let mut mods: BTreeMap<i64, u32> = BTreeMap::new();
        for (value, count) in add_mods {
            if value <= 0 || count <= 0 {
                continue;
            }
            let count = u32::try_from(count).unwrap_or(u32::MAX);
            let entry = mods.entry(value).or_insert(0);
            *entry = entry.saturating_add(count);
        }
        Self {
            selected_numbers,
            x2_count: u32::try_from(x2_count.max(0)).unwrap_or(u32::MAX),
            add_mods: mods,
        }
    }

    pub fn selected_numbers(&self) -> &BTreeSet<u8> {
        &self.selected_numbers
    }

    pub fn x2_count(&self) -> u32 {
        self.x2_count
    }

    pub fn add_mods(&self) -> &BTreeMap<i64, u32> {
        &self.add_mods
    }

    pub fn is_empty(&self) -> bool {
        self.selected_numbers.is_empty() && self.x2_count == 0 && self.add_mods.is_empty()
    }

    /// Adds a number card. Returns `true` when the rank was already held,
    /// which is the bust signal the caller must act on.
    pub fn add_number(&mut self, rank: i32) -> bool {
        match number_rank(rank) {
            Some(rank) => !self.selected_numbers.insert(rank),
            None => false,
        }
    }

    pub fn remove_number(&mut self, rank: i32) {
        if let Some(rank) = number_rank(rank) {
            self.selected_numbers.remove(&rank);
        }
    }

    pub fn add_modifier(&mut self, value: i64) {
        if value <= 0 {
            return;
        }
        let count = self.add_mods.entry(value).or_insert(0);
        *count = count.saturating_add(1);
    }

    pub fn remove_modifier(&mut self, value: i64) {
        let Some(count) = self.add_mods.get_mut(&value) else {
            return;
        };
        *count = count.saturating_sub(1);
        if *count == 0 {
            self.add_mods.remove(&value);
        }
    }

    pub fn add_x2(&mut self) {
        self.x2_count = self.x2_count.saturating_add(1);
    }

    pub fn remove_x2(&mut self) {
        self.x2_count = self.x2_count.saturating_sub(1);
    }

    pub fn apply_card(&mut self, card: &Card) -> bool {
        match card {
            Card::Number(rank) => self.add_number(i32::from(*rank)),
            Card::Modifier(value) => {
                self.add_modifier(*value);
                false
            }
            Card::Double => {
                self.add_x2();
                false
            }
            Card::Action(_) => false,
        }
    }

    pub fn has_flip7_bonus(&self) -> bool {
        self.selected_numbers.len() >= FLIP_BONUS_CARDS
    }

    pub fn number_sum(&self) -> i64 {
        self.selected_numbers.iter().map(|rank| i64::from(*rank)).sum()
    }

    pub fn modifier_sum(&self) -> i64 {
        self.add_mods
            .iter()
            .map(|(value, count)| value.saturating_mul(i64::from(*count)))
            .fold(0i64, |acc, part| acc.saturating_add(part))
    }

    pub fn modifier_card_count(&self) -> u32 {
        self.add_mods.values().sum()
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RoundHandRecord {
    selected_numbers: Vec<i32>,
    x2_count: i64,
    add_mods: BTreeMap<i64, i64>,
}

impl From<RoundHandRecord> for RoundHand {
    fn from(record: RoundHandRecord) -> Self {
        RoundHand::new(record.selected_numbers, record.x2_count, record.add_mods)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructor_normalizes_input() {
        let hand = RoundHand::new([3, 3, 13, -1, 12], -4, [(2, 1), (0, 3), (-4, 1), (6, 0), (2, 2)]);
        assert_eq!(
            hand.selected_numbers().iter().copied().collect::<Vec<_>>(),
            vec![3, 12]
        );
        assert_eq!(hand.x2_count(), 0);
        assert_eq!(hand.add_mods().len(), 1);
        assert_eq!(hand.add_mods().get(&2), Some(&3));
    }

    #[test]
    fn repeat_number_signals_bust() {
        let mut hand = RoundHand::default();
        assert!(!hand.add_number(5));
        assert!(hand.add_number(5));
        assert_eq!(hand.selected_numbers().len(), 1);
    }

    #[test]
    fn out_of_range_number_is_ignored() {
        let mut hand = RoundHand::default();
        assert!(!hand.add_number(13));
        assert!(!hand.add_number(-2));
        assert!(hand.is_empty());
    }

    #[test]
    fn remove_number_absent_is_noop() {
        let mut hand = RoundHand::new([4], 0, []);
        hand.remove_number(9);
        hand.remove_number(4);
        hand.remove_number(4);
        assert!(hand.selected_numbers().is_empty());
    }

    #[test]
    fn modifiers_count_and_drop_at_zero() {
        let mut hand = RoundHand::default();
        hand.add_modifier(4);
        hand.add_modifier(4);
        hand.add_modifier(0);
        hand.add_modifier(-2);
        assert_eq!(hand.add_mods().get(&4), Some(&2));
        assert_eq!(hand.modifier_sum(), 8);
        assert_eq!(hand.modifier_card_count(), 2);
        hand.remove_modifier(4);
        hand.remove_modifier(4);
        assert!(hand.add_mods().is_empty());
        hand.remove_modifier(4);
        assert!(hand.add_mods().is_empty());
    }

    #[test]
    fn x2_floors_at_zero() {
        let mut hand = RoundHand::default();
        hand.remove_x2();
        assert_eq!(hand.x2_count(), 0);
        hand.add_x2();
        hand.add_x2();
        hand.remove_x2();
        assert_eq!(hand.x2_count(), 1);
    }

    #[test]
    fn flip_bonus_needs_seven_ranks() {
        let six = RoundHand::new(0..6, 0, []);
        let seven = RoundHand::new(0..7, 0, []);
        assert!(!six.has_flip7_bonus());
        assert!(seven.has_flip7_bonus());
        assert_eq!(seven.number_sum(), 21);
    }

    #[test]
    fn apply_card_routes_by_kind() {
        let mut hand = RoundHand::default();
        assert!(!hand.apply_card(&Card::Number(7)));
        assert!(!hand.apply_card(&Card::Modifier(10)));
        assert!(!hand.apply_card(&Card::Double));
        assert!(!hand.apply_card(&Card::Action("freeze".to_string())));
        assert!(hand.apply_card(&Card::Number(7)));
        assert_eq!(hand.number_sum(), 7);
        assert_eq!(hand.modifier_sum(), 10);
        assert_eq!(hand.x2_count(), 1);
    }
}

use crate::{Card, DeckProfile};
use rand::seq::SliceRandom;
use rand::Rng;

pub const MAX_COPIES_PER_CARD: i64 = 1_000;

#[derive(Debug, Default, Clone)]
pub struct Deck {
    pub draw: Vec<Card>,
    pub discard: Vec<Card>,
}

impl Deck {
    pub fn from_profile(profile: &DeckProfile) -> Self {
        let mut draw = Vec::new();
        for (rank, count) in &profile.number_counts {
            push_copies(&mut draw, Card::Number(*rank), *count);
        }
        for (value, count) in &profile.modifier_counts {
            push_copies(&mut draw, Card::Modifier(*value), *count);
        }
        push_copies(&mut draw, Card::Double, profile.double_count);
        for (name, count) in &profile.action_counts {
            push_copies(&mut draw, Card::Action(name.clone()), *count);
        }
        Self {
            draw,
            discard: Vec::new(),
        }
    }

    pub fn standard() -> Self {
        Self::from_profile(&DeckProfile::standard())
    }

    pub fn shuffled<R: Rng + ?Sized>(profile: &DeckProfile, rng: &mut R) -> Self {
        let mut deck = Self::from_profile(profile);
        deck.shuffle(rng);
        deck
    }

    pub fn len(&self) -> usize {
        self.draw.len()
    }

    pub fn is_empty(&self) -> bool {
        self.draw.is_empty()
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.draw.shuffle(rng);
    }

    pub fn draw(&mut self) -> Option<Card> {
        self.draw.pop()
    }

    pub fn discard(&mut self, mut cards: Vec<Card>) {
        self.discard.append(&mut cards);
    }

    pub fn reshuffle_discard<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.discard.is_empty() {
            return;
        }
        self.draw.append(&mut self.discard);
        self.draw.shuffle(rng);
    }
}

fn push_copies(draw: &mut Vec<Card>, card: Card, count: i64) {
    for _ in 0..count.clamp(0, MAX_COPIES_PER_CARD) {
        draw.push(card.clone());
    }
}

use crate::{
    calculate_auto_score_with_rules, DeckProfile, GameRound, Player, PlayerId, RoundResult,
    RuleSet,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub players: Vec<Player>,
    pub current_round_index: u32,
    #[serde(default)]
    pub game_history: Vec<GameRound>,
    #[serde(default)]
    pub deck_profile: DeckProfile,
    #[serde(default)]
    pub rules: RuleSet,
}

impl Game {
    pub fn new(players: Vec<Player>) -> Self {
        Self::with_rules(players, RuleSet::default())
    }

    pub fn with_rules(players: Vec<Player>, rules: RuleSet) -> Self {
        Self {
            players,
            current_round_index: 0,
            game_history: Vec::new(),
            deck_profile: DeckProfile::standard(),
            rules,
        }
    }

    pub fn from_names<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Self {
        Self::new(names.into_iter().map(Player::new).collect())
    }

    pub fn current_round_number(&self) -> u32 {
        self.current_round_index + 1
    }

    pub fn start_new_round(&mut self) -> &GameRound {
        self.finalize_round();
        self.current_round_index += 1;
        self.last_round_unchecked()
    }

    pub fn end_round(&mut self) -> &GameRound {
        self.finalize_round();
        self.last_round_unchecked()
    }

    fn finalize_round(&mut self) {
        // Snapshot first: banking clears every hand.
        let results: Vec<RoundResult> = self
            .players
            .iter()
            .map(|player| self.snapshot(player))
            .collect();
        let round_number = self.current_round_number();
        debug!(round = round_number, players = results.len(), "finalized round");
        self.game_history.push(GameRound {
            round_number,
            results,
        });
        let rules = self.rules;
        for player in &mut self.players {
            player.bank_round_with_rules(&rules);
        }
    }

    fn snapshot(&self, player: &Player) -> RoundResult {
        let round = &player.current_round;
        RoundResult {
            player_id: player.id(),
            player_name: player.name.clone(),
            round_score: player.pending_score(&self.rules),
            state: Some(round.state),
            manual_score_override: round.manual_score_override,
            hand_snapshot: Some(round.hand.clone()),
            auto_score: Some(calculate_auto_score_with_rules(round, &self.rules)),
        }
    }

    fn last_round_unchecked(&self) -> &GameRound {
        let index = self.game_history.len() - 1;
        &self.game_history[index]
    }

    pub fn last_round(&self) -> Option<&GameRound> {
        self.game_history.last()
    }

    pub fn has_winner(&self) -> bool {
        self.players
            .iter()
            .any(|player| player.total_score >= self.target_score())
    }

    pub fn winners(&self) -> Vec<&Player> {
        self.players
            .iter()
            .filter(|player| player.total_score >= self.target_score())
            .collect()
    }

    pub fn leader(&self) -> Option<&Player> {
        self.players.iter().fold(None, |best: Option<&Player>, player| match best {
            Some(best) if best.total_score >= player.total_score => Some(best),
            _ => Some(player),
        })
    }

    pub fn standings(&self) -> Vec<&Player> {
        let mut ranked: Vec<&Player> = self.players.iter().collect();
        ranked.sort_by(|a, b| b.total_score.cmp(&a.total_score));
        ranked
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|player| player.id() == id)
    }

    pub fn player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|player| player.id() == id)
    }

    pub fn add_player(&mut self, name: impl Into<String>) -> PlayerId {
        let player = Player::new(name);
        let id = player.id();
        self.players.push(player);
        id
    }

    pub fn remove_player(&mut self, id: PlayerId) -> Option<Player> {
        let index = self.players.iter().position(|player| player.id() == id)?;
        Some(self.players.remove(index))
    }

    pub fn move_player(&mut self, from: usize, to: usize) {
        if from >= self.players.len() || to >= self.players.len() || from == to {
            return;
        }
        let player = self.players.remove(from);
        self.players.insert(to, player);
    }

    pub fn roster_names(&self) -> Vec<String> {
        self.players.iter().map(|player| player.name.clone()).collect()
    }

    pub fn target_score(&self) -> i64 {
        self.rules.target_score
    }

    pub fn set_target_score(&mut self, target_score: i64) {
        self.rules.target_score = target_score;
    }

    pub fn set_deck_profile(&mut self, profile: DeckProfile) {
        self.deck_profile = profile;
    }

    pub fn restart(&mut self) {
        for player in &mut self.players {
            player.total_score = 0;
            player.clear_round();
        }
        self.game_history.clear();
        self.current_round_index = 0;
    }
}

use flip7_core::{DeckProfile, Game, PlayerRoundState, ACTION_FREEZE};
use flip7_data::{
    decode_history, deck_profile_repository, encode_history, roster_repository, JsonFileStore,
    KeyValueStore, Repository, LAST_DECK_PROFILE_KEY, LAST_PLAYER_ROSTER_KEY,
};

#[test]
fn fresh_store_starts_with_standard_deck_and_no_roster() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut store = JsonFileStore::new(dir.path());
    assert_eq!(
        deck_profile_repository(&mut store).load_or_standard(),
        DeckProfile::standard()
    );
    assert_eq!(roster_repository(&mut store).load(), None);
}

#[test]
fn session_state_survives_reopen() {
    let dir = tempfile::tempdir().expect("tempdir");
    let profile = DeckProfile::standard().with_action_count(ACTION_FREEZE, 0);

    let history_raw = {
        let mut store = JsonFileStore::new(dir.path());
        let mut game = Game::from_names(["Ada", "Grace", "Linus"]);
        game.set_deck_profile(profile.clone());
        game.players[0].current_round.hand.add_number(9);
        game.players[0].current_round.state = PlayerRoundState::Banked;
        game.end_round();

        deck_profile_repository(&mut store)
            .save(&game.deck_profile)
            .expect("save deck");
        roster_repository(&mut store)
            .save(&game.roster_names())
            .expect("save roster");
        encode_history(&game.game_history).expect("encode history")
    };

    let mut store = JsonFileStore::new(dir.path());
    assert!(store.get(LAST_DECK_PROFILE_KEY).expect("get").is_some());
    assert!(store.get(LAST_PLAYER_ROSTER_KEY).expect("get").is_some());

    let restored_profile = deck_profile_repository(&mut store).load_or_standard();
    assert_eq!(restored_profile, profile);
    assert_eq!(restored_profile.total_card_count(), 91);

    let names = roster_repository(&mut store).load().expect("roster stored");
    let game = Game::from_names(names);
    assert_eq!(game.roster_names(), vec!["Ada", "Grace", "Linus"]);
    assert!(game.players.iter().all(|player| player.total_score == 0));

    let history = decode_history(&history_raw).expect("decode history");
    assert_eq!(history[0].results[0].round_score, 9);
    assert_eq!(history[0].results.len(), 3);
}

#[test]
fn corrupt_file_degrades_to_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(dir.path().join("last_deck_profile.json"), "[1, 2").expect("write");
    std::fs::write(dir.path().join("last_player_roster.json"), "{}").expect("write");
    let mut store = JsonFileStore::new(dir.path());
    assert_eq!(
        deck_profile_repository(&mut store).load_or_standard(),
        DeckProfile::standard()
    );
    assert_eq!(roster_repository(&mut store).load(), None);
}

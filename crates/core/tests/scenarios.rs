use flip7_core::{
    score_round, DeckProfile, Game, Player, PlayerRoundState, RoundHand,
};

#[test]
fn scenario_a_plain_numbers() {
    let hand = RoundHand::new([3, 5, 9], 0, []);
    assert_eq!(score_round(&hand, PlayerRoundState::InRound), 17);
}

#[test]
fn scenario_b_double_then_modifier() {
    let hand = RoundHand::new([3, 5, 9], 1, [(2, 1)]);
    assert_eq!(score_round(&hand, PlayerRoundState::Banked), 36);
}

#[test]
fn scenario_c_flip_bonus() {
    let hand = RoundHand::new([0, 1, 2, 3, 4, 5, 6], 0, []);
    assert_eq!(score_round(&hand, PlayerRoundState::InRound), 36);
}

#[test]
fn scenario_d_bust() {
    let hand = RoundHand::new([0, 1, 2, 3, 4, 5, 6, 12], 2, [(10, 1)]);
    assert_eq!(score_round(&hand, PlayerRoundState::Busted), 0);
}

#[test]
fn scenario_e_override_banks_exactly() {
    let mut player = Player::new("Ada");
    player.total_score = 20;
    player.current_round.hand = RoundHand::new([12, 11, 10], 1, [(8, 1)]);
    player.current_round.state = PlayerRoundState::Banked;
    player.current_round.set_override(50);
    player.bank_round();
    assert_eq!(player.total_score, 70);
}

#[test]
fn scenario_f_standard_deck_size() {
    assert_eq!(DeckProfile::standard().total_card_count(), 94);
}

#[test]
fn full_game_reaches_target() {
    let mut game = Game::from_names(["Ada", "Grace"]);
    game.set_target_score(60);
    let ada = game.players[0].id();
    let grace = game.players[1].id();

    for _ in 0..2 {
        if let Some(player) = game.player_mut(ada) {
            for rank in [12, 11, 10] {
                player.current_round.hand.add_number(rank);
            }
            player.current_round.state = PlayerRoundState::Banked;
        }
        if let Some(player) = game.player_mut(grace) {
            player.current_round.hand.add_number(8);
            if player.current_round.hand.add_number(8) {
                player.current_round.state = PlayerRoundState::Busted;
            }
        }
        assert!(!game.has_winner());
        game.start_new_round();
    }

    assert_eq!(game.current_round_number(), 3);
    assert!(game.has_winner());
    let winners: Vec<&str> = game.winners().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(winners, vec!["Ada"]);
    assert_eq!(game.player(ada).map(|p| p.total_score), Some(66));
    assert_eq!(game.player(grace).map(|p| p.total_score), Some(0));
    assert!(game.game_history.iter().all(|round| {
        round
            .result_for(grace)
            .is_some_and(|result| result.is_busted())
    }));
}

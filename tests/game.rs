//! Game integration tests.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use kusokurae::{
    Card, CardFlags, DECK_SIZE, ErrorCode, GameConfig, GameError, GameState, GameStatus, Legality,
    RandomSource, RoundStatus, RoundSummary, Suit, deck, rules,
};

fn card(suit: Suit, rank: u8) -> Card {
    kusokurae::global_init();
    deck::find_card(suit, rank).unwrap()
}

fn cards(suit: Suit, ranks: &[u8]) -> Vec<Card> {
    ranks.iter().map(|&rank| card(suit, rank)).collect()
}

/// Orders a deck so that dealing hands it out as `hands`.
fn deck_from_hands(hands: &[Vec<Card>]) -> Vec<Card> {
    let longest = hands.iter().map(Vec::len).max().unwrap_or(0);
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for position in 0..longest {
        for hand in hands {
            if let Some(card) = hand.get(position) {
                deck.push(*card);
            }
        }
    }
    deck
}

/// Three hands: 1P holds the Ghost and Bun 7, 2P the high Buns, 3P no Bun.
fn scenario_hands() -> Vec<Vec<Card>> {
    let mut first = vec![card(Suit::Special, 10)];
    first.extend(cards(Suit::Bun, &[0, 1, 2, 3, 7]));
    first.extend(cards(Suit::Stick, &[0, 1, 2, 3, 4]));

    let mut second = cards(Suit::Bun, &[4, 5, 6, 8, 9, 10]);
    second.extend(cards(Suit::Stick, &[5, 6, 7, 8, 9]));

    let mut third = cards(Suit::Stick, &[10]);
    third.extend(cards(Suit::Shit, &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]));

    vec![first, second, third]
}

fn started_game(players: u8, hands: &[Vec<Card>]) -> GameState {
    kusokurae::global_init();
    let mut game = GameState::new();
    game.init(GameConfig::default().with_players(players), None)
        .unwrap();
    game.start_with_deck(&deck_from_hands(hands)).unwrap();
    game
}

fn active_index(game: &GameState) -> u8 {
    game.active_player().unwrap().index()
}

/// Yields the values that make the shuffle swap every card with itself.
struct Countdown(u16);

impl RandomSource for Countdown {
    fn next_u16(&mut self) -> u16 {
        let value = self.0;
        self.0 = self.0.saturating_sub(1);
        value
    }
}

#[test]
fn card_table_is_complete_and_ordered() {
    kusokurae::global_init();
    kusokurae::global_init();
    let table = kusokurae::card_table().unwrap();

    assert_eq!(table.len(), DECK_SIZE);
    for (position, card) in table.iter().enumerate() {
        assert_eq!(usize::from(card.display_order), position + 1);
    }
    assert_eq!(table.iter().filter(|card| card.is_ghost()).count(), 1);
    assert!(table[DECK_SIZE - 1].is_ghost());
    assert_eq!(table.iter().filter(|c| c.suit == Suit::Shit).count(), 10);
    assert_eq!(table.iter().filter(|c| c.suit == Suit::Stick).count(), 11);
    assert_eq!(table.iter().filter(|c| c.suit == Suit::Bun).count(), 11);
}

#[test]
fn card_flags_round_trip_preserves_reserved_bits() {
    let flags = CardFlags::from_bits(0x0001_0000 | 0x80 | 5);
    assert_eq!(flags.round_played(), 5);
    assert!(flags.is_playable());
    assert_eq!(flags.bits(), 0x0001_0085);

    let played = card(Suit::Bun, 1).with_flags(CardFlags::from_bits(1));
    assert!(!kusokurae::is_playable(&played));
    assert_eq!(kusokurae::round_played(&played), 1);
    assert_eq!(played, card(Suit::Bun, 1));
}

#[test]
fn card_display() {
    assert_eq!(card(Suit::Shit, 8).to_string(), "8(-1)");
    assert_eq!(card(Suit::Special, 10).to_string(), "10(x2)");
    assert_eq!(Suit::from_value(-1), Some(Suit::Shit));
    assert_eq!(Suit::from_value(Suit::Special.value()), Some(Suit::Special));
    assert_eq!(Suit::from_value(3), None);
    assert_eq!(
        card(Suit::Bun, 1)
            .with_flags(CardFlags::from_bits(1))
            .to_string(),
        "1(1),played=1"
    );
}

#[test]
fn config_builder_sets_fields() {
    let config = GameConfig::default().with_players(4).with_seed(99);
    assert_eq!(config.players, 4);
    assert_eq!(config.seed, 99);

    kusokurae::global_init();
    let mut game = GameState::new();
    game.init(config, None).unwrap();
    assert_eq!(*game.config(), config);
    assert!(config.is_valid());
    assert!(!GameConfig::default().with_players(2).is_valid());
}

#[test]
fn init_rejects_bad_player_counts() {
    let mut game = GameState::new();
    for players in [0, 1, 2, 5] {
        assert_eq!(
            game.init(GameConfig::default().with_players(players), None),
            Err(GameError::BadNumberOfPlayers)
        );
        assert_eq!(game.status(), GameStatus::Null);
    }

    game.init(GameConfig::default().with_players(3), None)
        .unwrap();
    assert_eq!(game.status(), GameStatus::Init);
    let indices: Vec<u8> = game.players().iter().map(|p| p.index()).collect();
    assert_eq!(indices, [1, 2, 3]);
    assert!(game.active_player().is_none());
}

#[test]
fn commands_fail_in_wrong_status() {
    kusokurae::global_init();
    let mut game = GameState::new();
    assert_eq!(game.start(), Err(GameError::Uninitialized));
    assert_eq!(
        game.play(card(Suit::Bun, 1)).unwrap_err(),
        GameError::NotInGame
    );
    assert_eq!(game.round_state(), kusokurae::RoundSnapshot::default());
    assert!(game.round_state().is_empty());
    assert!(!game.is_final_round());

    game.init(GameConfig::default(), None).unwrap();
    assert_eq!(
        game.play(card(Suit::Bun, 1)).unwrap_err(),
        GameError::NotInGame
    );

    game.start().unwrap();
    assert_eq!(game.start(), Err(GameError::Uninitialized));
}

#[test]
fn start_deals_every_card_once() {
    for players in [3, 4] {
        kusokurae::global_init();
        let mut game = GameState::new();
        game.init(
            GameConfig::default().with_players(players).with_seed(7),
            None,
        )
        .unwrap();
        game.start().unwrap();

        let mut seen = HashSet::new();
        for player in game.players() {
            for card in player.hand().cards() {
                assert!(seen.insert(*card), "duplicate card {card}");
            }
        }
        assert_eq!(seen.len(), DECK_SIZE);

        let sizes: Vec<usize> = game.players().iter().map(|p| p.hand().len()).collect();
        if players == 3 {
            assert_eq!(sizes, [11, 11, 11]);
        } else {
            assert_eq!(sizes, [9, 8, 8, 8]);
        }

        let holder = game.ghost_holder().unwrap();
        assert!(game.player(holder).unwrap().hand().has_ghost());
        assert_eq!(active_index(&game), holder);
        assert_eq!(game.status(), GameStatus::Play);
    }
}

#[test]
fn start_with_deck_rejects_incomplete_deck() {
    kusokurae::global_init();
    let mut game = GameState::new();
    game.init(GameConfig::default(), None).unwrap();

    let mut short = kusokurae::standard_deck().unwrap();
    short.pop();
    assert_eq!(game.start_with_deck(&short), Err(GameError::CardNotFound));

    let mut doubled = kusokurae::standard_deck().unwrap();
    doubled[0] = doubled[1];
    assert_eq!(game.start_with_deck(&doubled), Err(GameError::CardNotFound));
    assert_eq!(game.status(), GameStatus::Init);
}

#[test]
fn injected_source_drives_the_shuffle() {
    kusokurae::global_init();
    let mut game = GameState::with_random_source(Box::new(Countdown(32)));
    game.init(GameConfig::default(), None).unwrap();
    game.start().unwrap();

    let table = kusokurae::card_table().unwrap();
    for (seat, player) in game.players().iter().enumerate() {
        let expected: Vec<Card> = table.iter().skip(seat).step_by(3).copied().collect();
        assert_eq!(player.hand().cards(), expected.as_slice());
    }
    assert_eq!(game.ghost_holder(), Some(3));
}

#[test]
fn same_seed_deals_same_hands() {
    kusokurae::global_init();
    let deal = |seed| {
        let mut game = GameState::with_random_source(Box::new(
            <rand_chacha::ChaCha8Rng as rand::SeedableRng>::seed_from_u64(seed),
        ));
        game.init(GameConfig::default().with_seed(seed), None)
            .unwrap();
        game.start().unwrap();
        game.players()
            .iter()
            .map(|p| p.hand().cards().to_vec())
            .collect::<Vec<_>>()
    };

    assert_eq!(deal(5), deal(5));
    assert_ne!(deal(5), deal(6));
}

#[test]
fn follower_must_follow_led_suit() {
    let mut game = started_game(3, &scenario_hands());
    assert_eq!(active_index(&game), 1);

    game.play(card(Suit::Bun, 7)).unwrap();
    assert_eq!(active_index(&game), 2);

    let before_hand = game.player(2).unwrap().hand().cards().to_vec();
    let before_round = game.round_state();
    assert_eq!(
        game.play(card(Suit::Stick, 5)).unwrap_err(),
        GameError::ForbiddenMove
    );
    assert_eq!(game.player(2).unwrap().hand().cards(), before_hand.as_slice());
    assert_eq!(game.round_state(), before_round);
    assert_eq!(active_index(&game), 2);

    let legal = game.legal_moves();
    assert!(legal.iter().all(|card| card.suit == Suit::Bun));
    assert!(
        game.player(2)
            .unwrap()
            .hand()
            .cards()
            .iter()
            .all(|card| card.is_playable() == (card.suit == Suit::Bun))
    );

    let outcome = game.play(card(Suit::Bun, 10)).unwrap();
    assert!(!outcome.busted);
    assert!(outcome.round.is_none());

    let snapshot = game.round_state();
    assert_eq!(snapshot.seq, 1);
    assert_eq!(snapshot.round_winner, Some(2));
    assert_eq!(snapshot.moves[0], Some(card(Suit::Bun, 7)));
    assert_eq!(snapshot.moves[1], Some(card(Suit::Bun, 10)));
    assert_eq!(snapshot.moves[2], None);
    assert_eq!(snapshot.moves[3], None);
    assert_eq!(snapshot.moves[1].unwrap().round_played(), 1);
}

#[test]
fn player_without_led_suit_is_busted() {
    let mut game = started_game(3, &scenario_hands());
    game.play(card(Suit::Bun, 7)).unwrap();
    game.play(card(Suit::Bun, 10)).unwrap();

    assert!(
        game.player(3)
            .unwrap()
            .hand()
            .cards()
            .iter()
            .all(|card| card.is_playable())
    );

    let outcome = game.play(card(Suit::Shit, 4)).unwrap();
    assert!(outcome.busted);
    let summary = outcome.round.unwrap();
    assert_eq!(summary.seq, 1);
    assert_eq!(summary.winner, 2);
    assert_eq!(summary.cards_taken, 3);
    assert_eq!(summary.score_on_board, 1);
    assert!(!summary.is_doubled);
    assert_eq!(summary.awarded, 1);

    let busted = game.player(3).unwrap();
    assert!(busted.is_busted());
    assert_eq!(busted.times_busted(), 1);

    let winner = game.player(2).unwrap();
    assert_eq!(winner.cards_taken(), 3);
    assert_eq!(winner.score(), 1);
    assert_eq!(game.rounds_finished(), 1);
    assert_eq!(active_index(&game), 2);

    let last = game.round_state();
    assert_eq!(last.seq, 1);
    assert_eq!(last.round_winner, Some(2));
    assert_eq!(last.played().count(), 3);
}

#[test]
fn ghost_wins_and_doubles_the_round() {
    let mut game = started_game(3, &scenario_hands());
    game.play(card(Suit::Bun, 7)).unwrap();
    game.play(card(Suit::Bun, 10)).unwrap();
    game.play(card(Suit::Shit, 4)).unwrap();

    // Round 2, led by 2P.
    game.play(card(Suit::Bun, 8)).unwrap();
    let outcome = game.play(card(Suit::Stick, 10)).unwrap();
    assert!(outcome.busted);
    assert_eq!(game.round_state().round_winner, Some(2));

    // 1P holds Buns, so a Stick is out, but the Ghost is always allowed.
    assert_eq!(
        game.play(card(Suit::Stick, 0)).unwrap_err(),
        GameError::ForbiddenMove
    );
    let outcome = game.play(card(Suit::Special, 10)).unwrap();
    assert!(!outcome.busted);

    let summary = outcome.round.unwrap();
    assert_eq!(summary.winner, 1);
    assert!(summary.is_doubled);
    assert_eq!(summary.score_on_board, 1);
    assert_eq!(summary.awarded, 2);
    assert_eq!(game.player(1).unwrap().score(), 2);
    assert_eq!(game.player(1).unwrap().cards_taken(), 3);
    assert!(!game.player(1).unwrap().is_busted());
    assert_eq!(active_index(&game), 1);

    let snapshot = game.round_state();
    assert!(snapshot.is_doubled);
    assert_eq!(snapshot.round_winner, Some(1));
}

#[test]
fn ghost_lead_sets_no_suit() {
    let mut game = started_game(3, &scenario_hands());
    game.play(card(Suit::Special, 10)).unwrap();

    // Nothing to follow yet, so 2P plays freely without busting.
    let outcome = game.play(card(Suit::Stick, 9)).unwrap();
    assert!(!outcome.busted);

    // The Stick now sets the suit 3P must follow.
    assert_eq!(
        game.play(card(Suit::Shit, 0)).unwrap_err(),
        GameError::ForbiddenMove
    );
    let summary = game.play(card(Suit::Stick, 10)).unwrap().round.unwrap();
    assert_eq!(summary.winner, 1);
    assert_eq!(summary.score_on_board, 0);
    assert!(summary.is_doubled);
}

#[test]
fn play_rejects_unknown_and_blank_cards() {
    let mut game = started_game(3, &scenario_hands());
    assert_eq!(
        game.play(card(Suit::Shit, 0)).unwrap_err(),
        GameError::CardNotFound
    );
    assert_eq!(
        game.play(Card::new(0, Suit::Stick, 0)).unwrap_err(),
        GameError::NullPointer
    );
    assert_eq!(
        game.play(Card::new(40, Suit::Bun, 3)).unwrap_err(),
        GameError::CardNotFound
    );
    assert_eq!(game.player(1).unwrap().hand().len(), 11);
}

#[test]
fn removal_keeps_hand_order() {
    let mut game = started_game(3, &scenario_hands());
    let before = game.player(1).unwrap().hand().cards().to_vec();
    game.play(card(Suit::Bun, 2)).unwrap();

    let expected: Vec<Card> = before
        .into_iter()
        .filter(|held| *held != card(Suit::Bun, 2))
        .collect();
    assert_eq!(game.player(1).unwrap().hand().cards(), expected.as_slice());
}

fn play_out(game: &mut GameState) -> Vec<RoundSummary> {
    let total = game.players().iter().map(|p| p.hand().len()).max().unwrap() as u32;
    let mut rounds = Vec::new();

    while game.status() == GameStatus::Play {
        assert_eq!(game.cards_accounted(), DECK_SIZE);
        assert_eq!(game.is_final_round(), game.rounds_finished() + 1 == total);

        let move_ = game.legal_moves()[0];
        if let Some(summary) = game.play(move_).unwrap().round {
            rounds.push(summary);
        }
        assert_eq!(game.cards_accounted(), DECK_SIZE);
    }

    assert_eq!(game.status(), GameStatus::Finish);
    assert!(game.is_final_round());
    assert!(game.active_player().is_none());
    assert_eq!(rounds.len() as u32, total);
    let taken: u32 = game.players().iter().map(|p| p.cards_taken()).sum();
    assert_eq!(taken as usize, DECK_SIZE);
    rounds
}

#[test]
fn three_player_game_runs_to_finish() {
    kusokurae::global_init();
    let mut game = GameState::new();
    game.init(GameConfig::default().with_seed(1234), None)
        .unwrap();
    game.start().unwrap();

    let rounds = play_out(&mut game);
    assert!(rounds.iter().all(|round| round.cards_taken == 3));
    assert_eq!(rounds.iter().filter(|round| round.is_doubled).count(), 1);
    for round in &rounds {
        let factor = if round.is_doubled { 2 } else { 1 };
        assert_eq!(round.awarded, round.score_on_board * factor);
    }

    let results = game.results().unwrap();
    assert_eq!(results.rounds, 11);
    let awarded: i32 = rounds.iter().map(|round| round.awarded).sum();
    let scored: i32 = results.players.iter().map(|p| p.score).sum();
    assert_eq!(awarded, scored);

    let best = results.players.iter().map(|p| p.score).max().unwrap();
    assert!(!results.winners.is_empty());
    for winner in &results.winners {
        assert_eq!(results.players[usize::from(*winner) - 1].score, best);
    }
    assert!(game.players().iter().all(|p| p.cards_taken() % 3 == 0));
}

#[test]
fn four_player_game_ends_with_single_card_round() {
    kusokurae::global_init();
    let mut game = GameState::new();
    game.init(GameConfig::default().with_players(4).with_seed(99), None)
        .unwrap();
    game.start().unwrap();

    let rounds = play_out(&mut game);
    assert_eq!(rounds.len(), 9);
    assert!(rounds[..8].iter().all(|round| round.cards_taken == 4));
    assert_eq!(rounds[8].cards_taken, 1);
    assert_eq!(game.results().unwrap().rounds, 9);
}

#[test]
fn final_round_only_when_last_cards_remain() {
    let mut game = started_game(3, &scenario_hands());
    for _ in 0..10 {
        for _ in 0..3 {
            assert!(!game.is_final_round());
            let move_ = game.legal_moves()[0];
            game.play(move_).unwrap();
        }
    }
    for _ in 0..3 {
        assert!(game.is_final_round());
        let move_ = game.legal_moves()[0];
        game.play(move_).unwrap();
    }
    assert_eq!(game.status(), GameStatus::Finish);
    assert!(game.is_final_round());
}

#[test]
fn observer_sees_every_transition() {
    kusokurae::global_init();
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    let rounds = Rc::new(RefCell::new(Vec::new()));
    let rounds_seen = Rc::clone(&rounds);

    let mut game = GameState::new();
    game.init(
        GameConfig::default().with_seed(3),
        Some(Box::new(move |game: &GameState, next: GameStatus| {
            sink.borrow_mut().push((game.status(), next));
            if game.status() == GameStatus::Play && next == GameStatus::Play {
                let round = game.round_state();
                let winner = game.player(round.round_winner.unwrap()).unwrap();
                assert!(!round.is_empty());
                assert_eq!(round.seq, game.rounds_finished());
                rounds_seen.borrow_mut().push((round, winner.score()));
            }
        })),
    )
    .unwrap();
    assert_eq!(*events.borrow(), [(GameStatus::Null, GameStatus::Init)]);

    game.start().unwrap();
    assert_eq!(events.borrow()[1], (GameStatus::Init, GameStatus::Play));

    while game.status() == GameStatus::Play {
        let move_ = game.legal_moves()[0];
        game.play(move_).unwrap();
    }

    let events = events.borrow();
    assert_eq!(events.len(), 2 + 11 + 1);
    assert!(
        events[2..13]
            .iter()
            .all(|event| *event == (GameStatus::Play, GameStatus::Play))
    );
    assert_eq!(events[13], (GameStatus::Play, GameStatus::Finish));

    let rounds = rounds.borrow();
    assert_eq!(rounds.len(), 11);
    for (seq, (round, _)) in rounds.iter().enumerate() {
        assert_eq!(round.seq as usize, seq + 1);
        assert_eq!(round.played().count(), 3);
    }

    let (last, winner_score) = rounds[10];
    let winner = last.round_winner.unwrap();
    assert_eq!(game.player(winner).unwrap().score(), winner_score);
    assert_eq!(game.round_state(), last);
}

#[test]
fn game_can_be_reinitialized_after_finish() {
    kusokurae::global_init();
    let mut game = GameState::new();
    game.init(GameConfig::default().with_seed(8), None).unwrap();
    game.start().unwrap();
    while game.status() == GameStatus::Play {
        let move_ = game.legal_moves()[0];
        game.play(move_).unwrap();
    }
    assert!(game.results().is_some());

    game.init(GameConfig::default().with_players(4), None)
        .unwrap();
    assert_eq!(game.status(), GameStatus::Init);
    assert!(game.results().is_none());
    assert_eq!(game.round_state(), kusokurae::RoundSnapshot::default());
    game.start().unwrap();
    assert_eq!(game.players().len(), 4);
    assert!(game.players().iter().all(|p| p.score() == 0));
}

#[test]
fn waiting_players_have_round_status() {
    let mut game = started_game(3, &scenario_hands());
    game.play(card(Suit::Bun, 7)).unwrap();
    let statuses: Vec<RoundStatus> = game.players().iter().map(|p| p.status()).collect();
    assert_eq!(
        statuses,
        [RoundStatus::Done, RoundStatus::Active, RoundStatus::Waiting]
    );
}

/// 1P holds the Ghost but no Bun when 2P leads Bun in round 2.
fn ghost_without_led_suit_hands() -> Vec<Vec<Card>> {
    let mut first = vec![card(Suit::Special, 10), card(Suit::Stick, 0)];
    first.extend(cards(Suit::Shit, &[0, 1, 2, 3, 4, 5, 6, 7, 8]));

    let mut second = cards(Suit::Stick, &[10]);
    second.extend(cards(Suit::Bun, &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]));

    let mut third = cards(Suit::Stick, &[1, 2, 3, 4, 5, 6, 7, 8, 9]);
    third.extend([card(Suit::Shit, 9), card(Suit::Bun, 10)]);

    vec![first, second, third]
}

#[test]
fn ghost_holder_without_led_suit_may_play_anything() {
    let mut game = started_game(3, &ghost_without_led_suit_hands());

    game.play(card(Suit::Stick, 0)).unwrap();
    game.play(card(Suit::Stick, 10)).unwrap();
    let first = game.play(card(Suit::Stick, 1)).unwrap().round.unwrap();
    assert_eq!(first.winner, 2);

    game.play(card(Suit::Bun, 0)).unwrap();
    game.play(card(Suit::Bun, 10)).unwrap();
    assert_eq!(active_index(&game), 1);

    let holder = game.player(1).unwrap();
    assert_eq!(holder.seat(), 0);
    assert!(holder.hand().has_ghost());
    assert!(!holder.hand().has_suit(Suit::Bun));
    let ghost = holder
        .hand()
        .cards()
        .iter()
        .find(|held| held.is_ghost())
        .unwrap();
    assert!(ghost.is_playable());
    assert!(holder.hand().cards().iter().all(Card::is_playable));

    let moves = game.legal_moves();
    assert_eq!(moves.len(), holder.hand().len());
    assert!(moves.iter().all(|held| holder.hand().contains(held)));

    let outcome = game.play(card(Suit::Shit, 3)).unwrap();
    assert!(outcome.busted);
    let round = outcome.round.unwrap();
    assert_eq!(round.winner, 3);
    assert_eq!(round.score_on_board, 1);

    let holder = game.player(1).unwrap();
    assert!(holder.is_busted());
    assert_eq!(holder.times_busted(), 1);
    assert!(!holder.hand().contains(&card(Suit::Shit, 3)));
    assert!(holder.hand().has_ghost());
}

#[test]
fn rules_judge_legality() {
    let hand = kusokurae::Hand::from_cards(vec![card(Suit::Bun, 3), card(Suit::Shit, 2)]);
    let led = Some(Suit::Bun);
    assert_eq!(
        rules::legality(&card(Suit::Bun, 3), &hand, led),
        Legality::Legal
    );
    assert_eq!(
        rules::legality(&card(Suit::Shit, 2), &hand, led),
        Legality::Forbidden
    );
    assert_eq!(
        rules::legality(&card(Suit::Shit, 2), &hand, Some(Suit::Stick)),
        Legality::Forced
    );
    assert_eq!(
        rules::legality(&card(Suit::Shit, 2), &hand, None),
        Legality::Legal
    );

    assert!(rules::beats(&card(Suit::Bun, 9), &card(Suit::Bun, 2), led));
    assert!(!rules::beats(&card(Suit::Shit, 9), &card(Suit::Bun, 2), led));
    assert!(rules::beats(&card(Suit::Special, 10), &card(Suit::Bun, 10), led));
    assert!(!rules::beats(&card(Suit::Bun, 10), &card(Suit::Special, 10), led));
    assert_eq!(rules::award(-3, true), -6);

    let ghost_hand =
        kusokurae::Hand::from_cards(vec![card(Suit::Special, 10), card(Suit::Shit, 3)]);
    assert_eq!(
        rules::legality(&card(Suit::Shit, 3), &ghost_hand, led),
        Legality::Forced
    );
    assert_eq!(
        rules::legality(&card(Suit::Special, 10), &ghost_hand, led),
        Legality::Legal
    );

    let board = [card(Suit::Bun, 1), card(Suit::Shit, 4), card(Suit::Shit, 0)];
    assert_eq!(rules::board_value(&board), -1);
    assert_eq!(rules::board_value(&[card(Suit::Special, 10)]), 0);
}

#[test]
fn error_codes_map_results() {
    assert_eq!(ErrorCode::from(Ok::<(), GameError>(())), ErrorCode::Success);
    assert_eq!(
        ErrorCode::from(GameError::ForbiddenMove),
        ErrorCode::ForbiddenMove
    );
    assert_eq!(ErrorCode::BugNobodyActive as i32, 5);
    assert!(GameError::ForbiddenMove.is_rule_violation());
    assert!(GameError::NotInGame.is_contract_violation());
    assert!(GameError::BugNobodyActive.is_internal());
}

//! CLI Kusokurae example. Seat 1 is yours; the other seats play their first
//! legal card.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use kusokurae::{Card, GameConfig, GameState, GameStatus, Player, TransitionObserver};
use tracing_subscriber::EnvFilter;

const HUMAN: u8 = 1;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("Kusokurae CLI example (type 'q' to quit)");

    let Some(players) = prompt_usize("Players (3 or 4): ") else {
        return;
    };

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let config = GameConfig::default()
        .with_players(players as u8)
        .with_seed(seed);

    kusokurae::global_init();
    let mut game = GameState::new();
    let observer: Box<dyn TransitionObserver> = Box::new(|game: &GameState, next: GameStatus| {
        if game.status() == GameStatus::Play && next == GameStatus::Play {
            let round = game.round_state();
            let moves: Vec<String> = round.played().map(format_card).collect();
            println!(
                "Round {} to player {}: {} | board {}{}",
                round.seq,
                round.round_winner.unwrap_or(0),
                moves.join(" "),
                round.score_on_board,
                if round.is_doubled { " x2" } else { "" }
            );
        }
    });

    if let Err(err) = game.init(config, Some(observer)) {
        println!("Init error: {err}");
        return;
    }
    if let Err(err) = game.start() {
        println!("Start error: {err}");
        return;
    }

    while game.status() == GameStatus::Play {
        let Some(active) = game.active_player().map(Player::index) else {
            println!("Nobody is active.");
            return;
        };

        let card = if active == HUMAN {
            print_table(&game);
            let Some(card) = prompt_card(&game) else {
                println!("Goodbye.");
                return;
            };
            card
        } else {
            game.legal_moves()[0]
        };

        match game.play(card) {
            Ok(outcome) if outcome.busted => println!("Player {active} is busted."),
            Ok(_) => {}
            Err(err) => println!("Move error: {err}"),
        }
    }

    print_results(&game);
}

fn prompt_card(game: &GameState) -> Option<Card> {
    let hand = game.player(HUMAN)?.hand().cards().to_vec();
    loop {
        let index = prompt_usize("Card number: ")?;
        match hand.get(index) {
            Some(card) => return Some(*card),
            None => println!("No such card."),
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn prompt_usize(prompt: &str) -> Option<usize> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<usize>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn print_table(game: &GameState) {
    let round = game.round_state();
    let board: Vec<String> = round.played().map(format_card).collect();
    let final_marker = if game.is_final_round() { " (final)" } else { "" };
    println!("\nRound {}{final_marker}: {}", round.seq, board.join(" "));

    for player in game.players() {
        println!(
            "Player {} | cards {} | taken {} | score {}",
            player.index(),
            player.hand().len(),
            player.cards_taken(),
            player.score()
        );
    }

    if let Some(me) = game.player(HUMAN) {
        let cards: Vec<String> = me
            .hand()
            .cards()
            .iter()
            .enumerate()
            .map(|(index, card)| {
                let text = format!("[{index}]{}", format_card(card));
                if card.is_playable() {
                    colorize(&text, "32")
                } else {
                    colorize(&text, "90")
                }
            })
            .collect();
        println!("Your hand: {}", cards.join(" "));
    }
    println!();
}

fn print_results(game: &GameState) {
    let Some(results) = game.results() else {
        return;
    };

    println!("\nGame over after {} rounds.", results.rounds);
    for player in &results.players {
        println!(
            "Player {}: score {} | taken {} | busted {} times",
            player.index, player.score, player.cards_taken, player.times_busted
        );
    }
    let winners: Vec<String> = results.winners.iter().map(u8::to_string).collect();
    println!("Winner: {}", winners.join(", "));
}

fn format_card(card: &Card) -> String {
    card.to_string()
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

//! Plays one fixed round and prints the result.

use crupier::{Card, Dealer, Deck, DeckError, Game, Hand, Player};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), DeckError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let dealer = Dealer::new(
        Hand::from_cards(&[Card::Six, Card::Four]),
        Deck::from_cards(&[Card::Jack, Card::Two]),
    );
    let players = vec![
        Player::new("Player1", Hand::from_cards(&[Card::Ace, Card::Queen])),
        Player::new(
            "Player2",
            Hand::from_cards(&[Card::King, Card::King, Card::King]),
        ),
        Player::new(
            "Player3",
            Hand::from_cards(&[Card::Seven, Card::Three, Card::Jack]),
        ),
    ];

    let mut game = Game::new(dealer, players);
    let result = game.showdown()?;

    let dealer_cards: Vec<String> = game
        .dealer()
        .peek_hand()
        .cards()
        .iter()
        .map(ToString::to_string)
        .collect();
    println!(
        "Dealer: {} = {}",
        dealer_cards.join(" "),
        result.dealer_value
    );

    for (player, settled) in game.players().iter().zip(&result.players) {
        println!(
            "{player}: {} -> {:?}",
            settled.player_value, settled.outcome
        );
    }

    println!("Winners: {:?}", game.winner_names()?);
    Ok(())
}

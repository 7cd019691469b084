//! A blackjack scoring engine with optional `no_std` support.
//!
//! The crate values hands, plays out the dealer's hand from a fixed deck,
//! and decides which players beat the dealer. Hands are presented fully
//! dealt; there is no betting, shuffling, or player decision making.
//!
//! # Example
//!
//! ```
//! use crupier::{Card, Dealer, Deck, Game, Hand, Player};
//!
//! let dealer = Dealer::new(
//!     Hand::from_cards(&[Card::Six, Card::Jack, Card::Four]),
//!     Deck::from_cards(&[Card::Jack, Card::Two]),
//! );
//! let players = vec![
//!     Player::new("Player1", Hand::from_cards(&[Card::Ace, Card::Queen])),
//!     Player::new("Player2", Hand::from_cards(&[Card::King, Card::King, Card::King])),
//!     Player::new("Player3", Hand::from_cards(&[Card::Seven, Card::Three, Card::Jack])),
//! ];
//!
//! let mut game = Game::new(dealer, players);
//! assert_eq!(game.winner_names()?, ["Player1"]);
//! # Ok::<(), crupier::DeckError>(())
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod dealer;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod player;
pub mod result;
pub mod rules;

// Re-export main types
pub use card::Card;
pub use dealer::Dealer;
pub use deck::{DECK_SIZE, Deck};
pub use error::DeckError;
pub use game::{Game, hand_beats, player_wins_dealer};
pub use hand::{BLACKJACK, Hand, HandStatus};
pub use player::Player;
pub use result::{HandOutcome, PlayerResult, RoundResult};
pub use rules::{DEALER_STANDS_AT, TableRules};

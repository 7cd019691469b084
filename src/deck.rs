//! A fixed-order, finite source of cards.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::error::DeckError;

/// Number of cards in a standard deck.
pub const DECK_SIZE: usize = 52;

/// An ordered deck, drawn front to back.
///
/// The deck is never shuffled; cards come out in the order they were given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
    /// Index of the next card to draw.
    cursor: usize,
}

impl Deck {
    /// Creates a deck that yields `cards` in order.
    #[must_use]
    pub fn from_cards(cards: &[Card]) -> Self {
        Self {
            cards: cards.to_vec(),
            cursor: 0,
        }
    }

    /// Creates an unshuffled 52-card deck: four runs of Ace through King.
    #[must_use]
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for _ in 0..4 {
            cards.extend_from_slice(&Card::ALL);
        }
        Self { cards, cursor: 0 }
    }

    /// Takes the next card from the deck.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Exhausted`] if every card has been drawn.
    pub fn take_card(&mut self) -> Result<Card, DeckError> {
        let card = *self.cards.get(self.cursor).ok_or(DeckError::Exhausted)?;
        self.cursor += 1;
        Ok(card)
    }

    /// Returns the number of cards left to draw.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len() - self.cursor
    }

    /// Returns whether every card has been drawn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }
}

impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards, cursor: 0 }
    }
}

impl FromIterator<Card> for Deck {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
            cursor: 0,
        }
    }
}

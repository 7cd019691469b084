//! Hand representation and valuation.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// Value a hand must not exceed.
pub const BLACKJACK: u8 = 21;

/// Extra value gained by counting one Ace as 11 instead of 1.
const ACE_BONUS: u8 = 10;

/// Evaluates cards, returning the value and whether an Ace was counted as 11.
///
/// Every Ace counts as 1; a single Ace is promoted to 11 when the promoted
/// total stays within 21.
fn evaluate_cards(cards: &[Card]) -> (u8, bool) {
    let mut base: u8 = 0;
    let mut has_ace = false;

    for card in cards {
        has_ace |= card.is_ace();
        base = base.saturating_add(card.value());
    }

    if has_ace && base.saturating_add(ACE_BONUS) <= BLACKJACK {
        (base + ACE_BONUS, true)
    } else {
        (base, false)
    }
}

/// Scoring status of a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandStatus {
    /// Neither bust nor blackjack.
    Live,
    /// Hand has busted (over 21).
    Bust,
    /// Hand is a blackjack (two cards worth 21).
    Blackjack,
}

/// An ordered set of cards, in draw order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a pre-dealt hand.
    #[must_use]
    pub fn from_cards(cards: &[Card]) -> Self {
        Self {
            cards: cards.to_vec(),
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the value of the hand.
    ///
    /// Aces are worth 1, except that one Ace is worth 11 when that keeps the
    /// hand at 21 or below. Only one Ace is ever promoted, so two Aces are
    /// worth 12.
    #[must_use]
    pub fn value(&self) -> u8 {
        evaluate_cards(&self.cards).0
    }

    /// Returns whether the hand is soft (contains an Ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards).1
    }

    /// Returns whether the hand is a blackjack: exactly two cards worth 21.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.value() == BLACKJACK
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > BLACKJACK
    }

    /// Returns the scoring status of the hand.
    #[must_use]
    pub fn status(&self) -> HandStatus {
        if self.is_blackjack() {
            HandStatus::Blackjack
        } else if self.is_bust() {
            HandStatus::Bust
        } else {
            HandStatus::Live
        }
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

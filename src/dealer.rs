//! The dealer (crupier) and its draw rule.

use tracing::{debug, warn};

use crate::deck::Deck;
use crate::error::DeckError;
use crate::hand::Hand;
use crate::rules::TableRules;

/// The house player.
///
/// The dealer owns its hand and the deck it draws from. The hand is
/// completed lazily: the first call to [`Dealer::hand`] draws until the
/// hand reaches the stand value, later calls find nothing left to do.
#[derive(Debug, Clone)]
pub struct Dealer {
    hand: Hand,
    deck: Deck,
    rules: TableRules,
}

impl Dealer {
    /// Creates a dealer with the default table rules.
    #[must_use]
    pub fn new(hand: Hand, deck: Deck) -> Self {
        Self::with_rules(hand, deck, TableRules::default())
    }

    /// Creates a dealer with custom table rules.
    #[must_use]
    pub const fn with_rules(hand: Hand, deck: Deck, rules: TableRules) -> Self {
        Self { hand, deck, rules }
    }

    /// Returns the dealer's hand after playing it out.
    ///
    /// Draws from the deck while the hand is below the stand value (and on
    /// soft 17 when the rules say so).
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Exhausted`] if the deck runs out before the hand
    /// reaches the stand value. Cards drawn before that stay in the hand.
    pub fn hand(&mut self) -> Result<&Hand, DeckError> {
        self.play()?;
        Ok(&self.hand)
    }

    /// Returns the dealer's hand as it stands, without drawing.
    #[must_use]
    pub const fn peek_hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns the table rules.
    #[must_use]
    pub const fn rules(&self) -> &TableRules {
        &self.rules
    }

    /// Returns the number of cards left in the dealer's deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.remaining()
    }

    fn play(&mut self) -> Result<(), DeckError> {
        while self
            .rules
            .dealer_draws(self.hand.value(), self.hand.is_soft())
        {
            let card = self.deck.take_card().inspect_err(|_| {
                warn!(value = self.hand.value(), "dealer deck exhausted");
            })?;
            self.hand.add_card(card);
            debug!(%card, value = self.hand.value(), "dealer drew");
        }

        debug!(
            value = self.hand.value(),
            cards = self.hand.len(),
            "dealer stands"
        );
        Ok(())
    }
}

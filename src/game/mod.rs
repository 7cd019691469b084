//! Game orchestration and the win predicate.

use alloc::vec::Vec;

use tracing::debug;

use crate::dealer::Dealer;
use crate::error::DeckError;
use crate::hand::Hand;
use crate::player::Player;

mod showdown;

/// Returns whether `player` beats `dealer`, given both final hands.
///
/// A blackjack beats any dealer hand that is not itself a blackjack.
/// Otherwise a player who has not busted wins by outscoring the dealer or
/// when the dealer busts. Ties go to the dealer.
#[must_use]
pub fn hand_beats(dealer: &Hand, player: &Hand) -> bool {
    (player.is_blackjack() && !dealer.is_blackjack())
        || ((player.value() > dealer.value() || dealer.is_bust()) && !player.is_bust())
}

/// Returns whether `player` beats `dealer`, playing out the dealer's hand first.
///
/// # Errors
///
/// Returns [`DeckError::Exhausted`] if the dealer's deck runs out while drawing.
pub fn player_wins_dealer(dealer: &mut Dealer, player: &Player) -> Result<bool, DeckError> {
    Ok(hand_beats(dealer.hand()?, player.hand()))
}

/// A single round: one dealer against a fixed, ordered list of players.
#[derive(Debug, Clone)]
pub struct Game {
    dealer: Dealer,
    players: Vec<Player>,
}

impl Game {
    /// Creates a game.
    ///
    /// # Example
    ///
    /// ```
    /// use crupier::{Card, Dealer, Deck, Game, Hand, Player};
    ///
    /// let dealer = Dealer::new(
    ///     Hand::from_cards(&[Card::Nine, Card::Ten]),
    ///     Deck::default(),
    /// );
    /// let players = vec![Player::new("Ana", Hand::from_cards(&[Card::Ten, Card::King]))];
    /// let mut game = Game::new(dealer, players);
    /// assert_eq!(game.winner_names().unwrap(), ["Ana"]);
    /// ```
    #[must_use]
    pub const fn new(dealer: Dealer, players: Vec<Player>) -> Self {
        Self { dealer, players }
    }

    /// Returns the players, in seating order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the dealer.
    #[must_use]
    pub const fn dealer(&self) -> &Dealer {
        &self.dealer
    }

    /// Returns the players who beat the dealer, in seating order.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Exhausted`] if the dealer's deck runs out while drawing.
    pub fn winners(&mut self) -> Result<Vec<&Player>, DeckError> {
        let dealer_hand = self.dealer.hand()?;

        let winners = self
            .players
            .iter()
            .filter(|player| {
                let wins = hand_beats(dealer_hand, player.hand());
                debug!(
                    player = player.name(),
                    player_value = player.hand().value(),
                    dealer_value = dealer_hand.value(),
                    wins,
                    "player judged"
                );
                wins
            })
            .collect();

        Ok(winners)
    }

    /// Returns the names of the players who beat the dealer, in seating order.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Exhausted`] if the dealer's deck runs out while drawing.
    pub fn winner_names(&mut self) -> Result<Vec<&str>, DeckError> {
        Ok(self.winners()?.into_iter().map(Player::name).collect())
    }
}

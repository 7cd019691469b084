use alloc::string::ToString;
use alloc::vec::Vec;

use tracing::debug;

use crate::error::DeckError;
use crate::hand::Hand;
use crate::result::{HandOutcome, PlayerResult, RoundResult};

use super::{Game, hand_beats};

/// Classifies a player's hand against the dealer's final hand.
fn outcome(dealer: &Hand, player: &Hand) -> HandOutcome {
    if hand_beats(dealer, player) {
        if player.is_blackjack() && !dealer.is_blackjack() {
            HandOutcome::Blackjack
        } else {
            HandOutcome::Win
        }
    } else if player.is_bust() {
        HandOutcome::Bust
    } else {
        HandOutcome::Lose
    }
}

impl Game {
    /// Plays out the dealer's hand and settles every player against it.
    ///
    /// Winners in the result agree with [`Game::winners`].
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Exhausted`] if the dealer's deck runs out while drawing.
    pub fn showdown(&mut self) -> Result<RoundResult, DeckError> {
        let dealer = self.dealer.hand()?;
        let dealer_value = dealer.value();

        let mut players = Vec::with_capacity(self.players.len());
        for player in &self.players {
            let outcome = outcome(dealer, player.hand());
            let player_value = player.hand().value();
            debug!(
                player = player.name(),
                player_value,
                dealer_value,
                ?outcome,
                "hand settled"
            );

            players.push(PlayerResult {
                name: player.name().to_string(),
                outcome,
                player_value,
            });
        }

        Ok(RoundResult {
            players,
            dealer_value,
            dealer_bust: dealer.is_bust(),
            dealer_blackjack: dealer.is_blackjack(),
        })
    }
}

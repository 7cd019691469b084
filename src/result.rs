//! Round result types for showdown.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

/// How a single player's hand fared against the dealer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandOutcome {
    /// Player wins with a blackjack the dealer does not match.
    Blackjack,
    /// Player wins (dealer busts or player has the higher value).
    Win,
    /// Player loses without busting, ties included.
    Lose,
    /// Player busted.
    Bust,
}

impl HandOutcome {
    /// Returns whether the outcome counts as a win for the player.
    #[must_use]
    pub const fn won(self) -> bool {
        matches!(self, Self::Blackjack | Self::Win)
    }
}

/// Result for a single player after showdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerResult {
    /// The player's name.
    pub name: String,
    /// The outcome of the player's hand.
    pub outcome: HandOutcome,
    /// The player's hand value.
    pub player_value: u8,
}

/// Result of the entire round after showdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Results for each player, in seating order.
    pub players: Vec<PlayerResult>,
    /// The dealer's final hand value.
    pub dealer_value: u8,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
    /// Whether the dealer had blackjack.
    pub dealer_blackjack: bool,
}

impl RoundResult {
    /// Returns the names of the winning players, in seating order.
    pub fn winner_names(&self) -> impl Iterator<Item = &str> {
        self.players
            .iter()
            .filter(|result| result.outcome.won())
            .map(|result| result.name.as_str())
    }
}

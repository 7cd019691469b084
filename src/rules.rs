//! Table rule configuration.

/// Hand value at which the dealer stops drawing.
pub const DEALER_STANDS_AT: u8 = 17;

/// Rules governing the dealer's draw.
///
/// Use the builder methods to customize rules:
///
/// ```
/// use crupier::TableRules;
///
/// let rules = TableRules::default()
///     .with_dealer_stands_at(18)
///     .with_hit_soft_17(true);
/// assert_eq!(rules.dealer_stands_at, 18);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableRules {
    /// The dealer draws while the hand is worth less than this.
    pub dealer_stands_at: u8,
    /// Whether the dealer also draws on a soft hand worth exactly
    /// `dealer_stands_at`.
    pub hit_soft_17: bool,
}

impl Default for TableRules {
    fn default() -> Self {
        Self {
            dealer_stands_at: DEALER_STANDS_AT,
            hit_soft_17: false,
        }
    }
}

impl TableRules {
    /// Sets the value at which the dealer stands.
    ///
    /// # Example
    ///
    /// ```
    /// use crupier::TableRules;
    ///
    /// let rules = TableRules::default().with_dealer_stands_at(16);
    /// assert_eq!(rules.dealer_stands_at, 16);
    /// ```
    #[must_use]
    pub const fn with_dealer_stands_at(mut self, value: u8) -> Self {
        self.dealer_stands_at = value;
        self
    }

    /// Sets whether the dealer hits a soft hand at the stand value.
    ///
    /// # Example
    ///
    /// ```
    /// use crupier::TableRules;
    ///
    /// let rules = TableRules::default().with_hit_soft_17(true);
    /// assert!(rules.hit_soft_17);
    /// ```
    #[must_use]
    pub const fn with_hit_soft_17(mut self, hit: bool) -> Self {
        self.hit_soft_17 = hit;
        self
    }

    /// Returns whether the dealer must draw on a hand with this value and softness.
    #[must_use]
    pub const fn dealer_draws(&self, value: u8, is_soft: bool) -> bool {
        value < self.dealer_stands_at
            || (value == self.dealer_stands_at && is_soft && self.hit_soft_17)
    }
}

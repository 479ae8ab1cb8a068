//! Game configuration options.

use crate::card::DECK_SIZE;

/// Bet sizes offered at the table, smallest first.
pub const BET_OPTIONS: [u16; 5] = [10, 20, 30, 40, 50];

/// Smallest bet; a purse below this ends the game.
pub const MIN_BET: u16 = BET_OPTIONS[0];

/// Returns the bet sizes the player can afford.
///
/// # Example
///
/// ```
/// use bjsave::options::bet_options;
///
/// assert_eq!(bet_options(35), &[10, 20, 30]);
/// assert!(bet_options(9).is_empty());
/// ```
#[must_use]
pub fn bet_options(money: u16) -> &'static [u16] {
    let affordable = BET_OPTIONS.iter().take_while(|&&bet| bet <= money).count();
    &BET_OPTIONS[..affordable]
}

/// Natural blackjack payout ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Payout {
    /// Pays 3:2.
    #[default]
    ThreeToTwo,
    /// Pays 7:5.
    SevenToFive,
    /// Pays 6:5.
    SixToFive,
}

impl Payout {
    /// All payouts in menu order.
    pub const ALL: [Self; 3] = [Self::ThreeToTwo, Self::SevenToFive, Self::SixToFive];

    /// Payout numerator in tenths: a natural returns `bet * (10 + n) / 10`.
    #[must_use]
    pub const fn numerator(self) -> u8 {
        match self {
            Self::ThreeToTwo => 15,
            Self::SevenToFive => 14,
            Self::SixToFive => 12,
        }
    }
}

/// Share of the shoe dealt before a reshuffle is scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Penetration {
    /// Reshuffle after every round.
    None,
    /// 25%.
    Quarter,
    /// 50%.
    #[default]
    Half,
    /// 75%, only offered with two or more decks.
    ThreeQuarters,
}

impl Penetration {
    /// Returns the penetration as a percentage.
    #[must_use]
    pub const fn percent(self) -> u8 {
        match self {
            Self::None => 0,
            Self::Quarter => 25,
            Self::Half => 50,
            Self::ThreeQuarters => 75,
        }
    }

    /// Maps a percentage to a penetration, falling back to 50% for values
    /// that are not on the menu.
    #[must_use]
    pub fn from_percent(percent: u8) -> Self {
        match percent {
            0 => Self::None,
            25 => Self::Quarter,
            50 => Self::Half,
            75 => Self::ThreeQuarters,
            other => {
                tracing::warn!(percent = other, "unknown penetration, using 50%");
                Self::Half
            }
        }
    }

    /// Returns the penetrations offered for a shoe of `deck_count` decks.
    #[must_use]
    pub const fn options(deck_count: u8) -> &'static [Self] {
        if deck_count >= 2 {
            &[Self::None, Self::Quarter, Self::Half, Self::ThreeQuarters]
        } else {
            &[Self::None, Self::Quarter, Self::Half]
        }
    }

    /// Number of cards dealt from a `deck_count` shoe before a reshuffle is
    /// scheduled.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsave::Penetration;
    ///
    /// assert_eq!(Penetration::Half.threshold(1), 26);
    /// assert_eq!(Penetration::ThreeQuarters.threshold(6), 234);
    /// ```
    #[must_use]
    pub fn threshold(self, deck_count: u8) -> u16 {
        let total = u32::from(deck_count) * DECK_SIZE as u32;
        (total * u32::from(self.percent()) / 100) as u16
    }
}

/// Extracts a deck count from a menu label such as `"6 Decks"`.
///
/// The first run of ASCII digits is used. Labels without digits, or with a
/// count outside 1..=255, fall back to a single deck.
#[must_use]
pub fn parse_deck_count(label: &str) -> u8 {
    let digits = label
        .trim_start_matches(|c: char| !c.is_ascii_digit())
        .split(|c: char| !c.is_ascii_digit())
        .next()
        .unwrap_or_default();

    match digits.parse::<u8>() {
        Ok(count) if count >= 1 => count,
        _ => {
            tracing::warn!(label, "failed to extract number of decks, using 1");
            1
        }
    }
}

/// Configuration options for a blackjack game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjsave::{GameOptions, Payout, Penetration};
///
/// let options = GameOptions::default()
///     .with_decks(6)
///     .with_payout(Payout::SixToFive)
///     .with_hit_on_soft_17(true)
///     .with_penetration(Penetration::ThreeQuarters);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Natural blackjack payout.
    pub payout: Payout,
    /// Whether the dealer hits a soft 17.
    pub hit_on_soft_17: bool,
    /// Number of decks in the shoe (at least 1).
    pub decks: u8,
    /// Deck penetration before a reshuffle is scheduled.
    pub penetration: Penetration,
    /// Money the player starts with.
    pub starting_money: u16,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            payout: Payout::ThreeToTwo,
            hit_on_soft_17: false,
            decks: 1,
            penetration: Penetration::Half,
            starting_money: 100,
        }
    }
}

impl GameOptions {
    /// Sets the natural blackjack payout.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsave::{GameOptions, Payout};
    ///
    /// let options = GameOptions::default().with_payout(Payout::SevenToFive);
    /// assert_eq!(options.payout, Payout::SevenToFive);
    /// ```
    #[must_use]
    pub const fn with_payout(mut self, payout: Payout) -> Self {
        self.payout = payout;
        self
    }

    /// Sets whether the dealer hits a soft 17.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsave::GameOptions;
    ///
    /// let options = GameOptions::default().with_hit_on_soft_17(true);
    /// assert!(options.hit_on_soft_17);
    /// ```
    #[must_use]
    pub const fn with_hit_on_soft_17(mut self, hit: bool) -> Self {
        self.hit_on_soft_17 = hit;
        self
    }

    /// Sets the number of decks. Zero is raised to one.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsave::GameOptions;
    ///
    /// assert_eq!(GameOptions::default().with_decks(6).decks, 6);
    /// assert_eq!(GameOptions::default().with_decks(0).decks, 1);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = if decks == 0 { 1 } else { decks };
        self
    }

    /// Sets the deck penetration.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsave::{GameOptions, Penetration};
    ///
    /// let options = GameOptions::default().with_penetration(Penetration::Quarter);
    /// assert_eq!(options.penetration, Penetration::Quarter);
    /// ```
    #[must_use]
    pub const fn with_penetration(mut self, penetration: Penetration) -> Self {
        self.penetration = penetration;
        self
    }

    /// Sets the starting money.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsave::GameOptions;
    ///
    /// let options = GameOptions::default().with_starting_money(500);
    /// assert_eq!(options.starting_money, 500);
    /// ```
    #[must_use]
    pub const fn with_starting_money(mut self, money: u16) -> Self {
        self.starting_money = money;
        self
    }

    /// Reshuffle threshold implied by the deck count and penetration.
    #[must_use]
    pub fn reshuffle_threshold(&self) -> u16 {
        self.penetration.threshold(self.decks)
    }
}

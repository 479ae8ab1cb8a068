//! Player and dealer hand representations.

use alloc::vec::Vec;

use crate::card::Card;

/// Lowest total that counts as a bust.
pub const BUST: u8 = 22;

/// Evaluates a hand, returning its total and whether it is a soft 17.
///
/// Every ace starts at 11. While the total is 22 or more and an ace is still
/// counted high, that ace drops to 1. The hand is a soft 17 when the final
/// total is exactly 17 and at least one ace is still counted high after the
/// reductions; with several aces this is a count of unreduced aces, so
/// `A A 5` (17 after one reduction) is soft.
///
/// # Example
///
/// ```
/// use bjsave::{Card, Rank, Suit, hand::evaluate};
///
/// let hand = [Card::new(Rank::Ace, Suit::Spades), Card::new(Rank::Six, Suit::Hearts)];
/// assert_eq!(evaluate(&hand), (17, true));
/// ```
#[must_use]
pub fn evaluate(cards: &[Card]) -> (u8, bool) {
    let mut total: usize = 0;
    let mut high_aces: usize = 0;

    for card in cards {
        if card.is_ace() {
            high_aces += 1;
        }
        total += usize::from(card.value());
    }

    while total >= usize::from(BUST) && high_aces > 0 {
        total -= 10;
        high_aces -= 1;
    }

    let soft_17 = total == 17 && high_aces > 0;
    (u8::try_from(total).unwrap_or(u8::MAX), soft_17)
}

/// The player's hand.
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

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the total of the hand.
    #[must_use]
    pub fn value(&self) -> u8 {
        evaluate(&self.cards).0
    }

    /// Returns whether the hand is a soft 17.
    #[must_use]
    pub fn is_soft_17(&self) -> bool {
        evaluate(&self.cards).1
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() >= BUST
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

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

/// The dealer's hand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DealerHand {
    /// Cards in the hand.
    cards: Vec<Card>,
    /// Whether the hole card is revealed.
    hole_revealed: bool,
}

impl DealerHand {
    /// Creates a new empty dealer hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            hole_revealed: false,
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns all cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the visible card (first card).
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Returns whether the hole card is revealed.
    #[must_use]
    pub const fn is_hole_revealed(&self) -> bool {
        self.hole_revealed
    }

    /// Reveals the hole card.
    pub const fn reveal_hole(&mut self) {
        self.hole_revealed = true;
    }

    /// Calculates the visible value (only up card if hole not revealed).
    #[must_use]
    pub fn visible_value(&self) -> u8 {
        if self.hole_revealed {
            self.value()
        } else {
            self.cards.first().map_or(0, |c| c.value())
        }
    }

    /// Calculates the full value of the hand.
    #[must_use]
    pub fn value(&self) -> u8 {
        evaluate(&self.cards).0
    }

    /// Returns whether the hand is a soft 17.
    #[must_use]
    pub fn is_soft_17(&self) -> bool {
        evaluate(&self.cards).1
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() >= BUST
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.hole_revealed = false;
    }
}

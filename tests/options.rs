//! Table option tests.

use bjsave::options::{BET_OPTIONS, MIN_BET, bet_options, parse_deck_count};
use bjsave::{
    Card, GameOptions, HOUSE_LIMIT, Outcome, Payout, Penetration, Rank, STANDARD_DECK, Suit,
    settle,
};

#[test]
fn defaults_match_a_fresh_table() {
    let options = GameOptions::default();
    assert_eq!(options.payout, Payout::ThreeToTwo);
    assert!(!options.hit_on_soft_17);
    assert_eq!(options.decks, 1);
    assert_eq!(options.penetration, Penetration::Half);
    assert_eq!(options.starting_money, 100);
    assert_eq!(options.reshuffle_threshold(), 26);
}

#[test]
fn payout_numerators() {
    let numerators: Vec<u8> = Payout::ALL.iter().map(|p| p.numerator()).collect();
    assert_eq!(numerators, [15, 14, 12]);
}

#[test]
fn three_quarter_penetration_needs_two_decks() {
    assert!(!Penetration::options(1).contains(&Penetration::ThreeQuarters));
    assert_eq!(Penetration::options(2).len(), 4);
    assert_eq!(Penetration::None.threshold(8), 0);
    assert_eq!(Penetration::Quarter.threshold(1), 13);
    assert_eq!(Penetration::ThreeQuarters.threshold(255), 9945);
}

#[test]
fn penetration_from_unknown_percent_is_half() {
    assert_eq!(Penetration::from_percent(25), Penetration::Quarter);
    assert_eq!(Penetration::from_percent(75), Penetration::ThreeQuarters);
    assert_eq!(Penetration::from_percent(33), Penetration::Half);
}

#[test]
fn deck_labels() {
    assert_eq!(parse_deck_count("6 Decks"), 6);
    assert_eq!(parse_deck_count("Decks: 2"), 2);
    assert_eq!(parse_deck_count("1 Deck"), 1);
    assert_eq!(parse_deck_count("many"), 1);
    assert_eq!(parse_deck_count("0 Decks"), 1);
    assert_eq!(parse_deck_count("300 Decks"), 1);
}

#[test]
fn bets_step_by_ten() {
    assert_eq!(BET_OPTIONS, [10, 20, 30, 40, 50]);
    assert_eq!(MIN_BET, 10);
    assert_eq!(bet_options(1000), &BET_OPTIONS);
    assert_eq!(bet_options(20), &[10, 20]);
}

#[test]
fn settlement_table() {
    let cases = [
        (Outcome::NaturalBlackjackWin, 15, 125),
        (Outcome::NormalWin, 15, 120),
        (Outcome::DoubleWin, 15, 130),
        (Outcome::NormalDraw, 15, 110),
        (Outcome::DoubleDraw, 15, 110),
        (Outcome::NormalLoss, 15, 100),
        (Outcome::DoubleLoss, 15, 90),
        (Outcome::Surrender, 15, 105),
    ];
    for (outcome, numerator, money) in cases {
        let settled = settle(numerator, 10, 100, outcome);
        assert_eq!(settled.money, money, "{outcome:?}");
        assert!(!settled.house_broke);
    }

    // 6:5 on a 10 bet pays 22 back in total
    assert_eq!(settle(12, 10, 0, Outcome::NaturalBlackjackWin).money, 22);
    assert_eq!(settle(14, 30, 0, Outcome::NaturalBlackjackWin).money, 72);
    assert_eq!(settle(15, 50, 0, Outcome::Surrender).money, 25);
}

#[test]
fn house_limit_blocks_every_win() {
    for outcome in [
        Outcome::NaturalBlackjackWin,
        Outcome::NormalWin,
        Outcome::DoubleWin,
    ] {
        let settled = settle(15, 50, HOUSE_LIMIT, outcome);
        assert!(settled.house_broke);
        assert_eq!(settled.money, HOUSE_LIMIT);
    }

    let settled = settle(15, 50, HOUSE_LIMIT, Outcome::NormalDraw);
    assert!(!settled.house_broke);
    assert_eq!(settled.money, HOUSE_LIMIT + 50);

    assert_eq!(settle(15, 50, u16::MAX - 10, Outcome::NormalDraw).money, u16::MAX);
}

#[test]
fn standard_deck_has_52_distinct_cards() {
    assert_eq!(STANDARD_DECK.len(), 52);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            assert!(STANDARD_DECK.contains(&Card::new(rank, suit)));
        }
    }
    assert_eq!(Card::new(Rank::Ten, Suit::Diamonds).to_string(), "10♦");
    assert_eq!(Card::new(Rank::Ace, Suit::Spades).value(), 11);
    assert_eq!(Card::new(Rank::Queen, Suit::Hearts).value(), 10);
}

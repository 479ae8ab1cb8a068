//! Save-string codec tests.

use bjsave::error::{Alphabet, LengthField};
use bjsave::save::{self, base45, checksum};
use bjsave::{Action, DecodeError, GameOptions, GameState, Phase, SavableGameState};

fn sample() -> SavableGameState {
    SavableGameState {
        seed: 42,
        reshuffle_threshold: 26,
        cards_dealt: 4,
        deck_count: 1,
        hit_on_soft_17: true,
        need_reshuffle: false,
        money: 100,
        payout_numerator: 15,
    }
}

#[test]
fn record_layout_is_little_endian() {
    let bytes = sample().to_bytes();
    assert_eq!(
        bytes,
        [0x2a, 0, 0, 0, 0x1a, 0, 0x04, 0, 0x01, 0x01, 0x64, 0, 0x0f]
    );
    assert_eq!(SavableGameState::from_bytes(&bytes), Ok(sample()));
}

#[test]
fn record_requires_thirteen_bytes() {
    assert_eq!(
        SavableGameState::from_bytes(&[0; 12]),
        Err(DecodeError::Length {
            field: LengthField::Record,
            expected: 13,
            found: 12,
        })
    );
}

#[test]
fn base45_known_vectors() {
    assert_eq!(base45::encode(&[0; 13]), "1111111111111");
    assert_eq!(base45::encode(&[0xFF; 13]), "jP43SsDErgWAFCAFFbd");
    assert_eq!(base45::encode(&[0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]), "119cafgZWh41WXHCe");
    assert_eq!(base45::encode(&[]), "");

    assert_eq!(base45::decode("1111111111111").unwrap(), [0; 13]);
    assert_eq!(base45::decode("jP43SsDErgWAFCAFFbd").unwrap(), [0xFF; 13]);
    assert_eq!(base45::decode("").unwrap(), Vec::<u8>::new());
}

#[test]
fn base45_emits_most_significant_digit_first() {
    // 0x0100 = 256 = 5 * 45 + 31
    assert_eq!(base45::encode(&[0x01, 0x00]), "6e");
    assert_eq!(base45::decode("6e").unwrap(), [0x01, 0x00]);
}

#[test]
fn base45_accepts_exactly_its_alphabet() {
    for (digit, &c) in base45::ALPHABET.iter().enumerate() {
        let decoded = base45::decode(&char::from(c).to_string()).unwrap();
        assert_eq!(decoded, [digit as u8], "{:?}", char::from(c));
    }
    for c in ['0', 'I', 'l', 'O', 'Q', 'u', ' ', '=', 'é'] {
        assert_eq!(
            base45::decode(&c.to_string()),
            Err(DecodeError::Alphabet {
                alphabet: Alphabet::Base45,
                position: 0,
                found: c,
            }),
            "{c:?} should be rejected"
        );
    }
}

#[test]
fn base45_reports_first_bad_character() {
    assert_eq!(
        base45::decode("6kW0eHPs"),
        Err(DecodeError::Alphabet {
            alphabet: Alphabet::Base45,
            position: 3,
            found: '0',
        })
    );
}

#[test]
fn checksum_is_low_20_bits_of_crc32() {
    assert_eq!(checksum::checksum(b"123456789"), 0xcbf43926 & 0xF_FFFF);
    assert_eq!(checksum::checksum(&[0; 13]), checksum::decode("8HM2").unwrap());
    assert_eq!(checksum::checksum(&[0xFF; 13]), checksum::decode("DWY1").unwrap());
}

#[test]
fn checksum_decode_ignores_case() {
    assert_eq!(checksum::decode("KDRN"), Ok(0x9_b715));
    assert_eq!(checksum::decode("kdrn"), Ok(0x9_b715));
}

#[test]
fn checksum_decode_errors() {
    assert_eq!(
        checksum::decode("KDR"),
        Err(DecodeError::Length {
            field: LengthField::Checksum,
            expected: 4,
            found: 3,
        })
    );
    assert_eq!(
        checksum::decode("KDRU"),
        Err(DecodeError::Alphabet {
            alphabet: Alphabet::Base32,
            position: 3,
            found: 'U',
        })
    );
}

#[test]
fn encodes_known_states() {
    assert_eq!(save::encode_save(&sample()), "6kWeeHPsEj63sekd78s=KDRN");

    let state = SavableGameState {
        seed: 0xDEAD_BEEF,
        reshuffle_threshold: 156,
        cards_dealt: 37,
        deck_count: 6,
        hit_on_soft_17: true,
        need_reshuffle: true,
        money: 245,
        payout_numerator: 12,
    };
    assert_eq!(save::encode_save(&state), "g8rBsYbeEp75Xx2apfr=QBQY");
    assert_eq!(save::decode_save("t g8rBsYbeEp75Xx2apfr=QBQY"), Ok(state));
}

#[test]
fn line_must_have_one_space_and_one_equals() {
    assert_eq!(
        save::decode_save("6kWeeHPsEj63sekd78s=KDRN"),
        Err(DecodeError::Format {
            separator: ' ',
            found: 0,
        })
    );
    assert_eq!(
        save::decode_save("a b 6kWeeHPsEj63sekd78s=KDRN"),
        Err(DecodeError::Format {
            separator: ' ',
            found: 2,
        })
    );
    assert_eq!(
        save::decode_save("t 6kWeeHPsEj63sekd78sKDRN"),
        Err(DecodeError::Format {
            separator: '=',
            found: 0,
        })
    );
    assert_eq!(
        save::decode_save("t 6kWeeHPsEj63sekd78s==KDRN"),
        Err(DecodeError::Format {
            separator: '=',
            found: 2,
        })
    );
}

#[test]
fn parse_line_splits_segments() {
    let parts = save::parse_line("2024-01-01-12:00:00 6kWeeHPsEj63sekd78s=KDRN").unwrap();
    assert_eq!(parts.timestamp, "2024-01-01-12:00:00");
    assert_eq!(parts.payload, "6kWeeHPsEj63sekd78s");
    assert_eq!(parts.checksum, "KDRN");
}

#[test]
fn decode_rejects_wrong_record_length() {
    assert_eq!(
        save::decode_save("t 111111111111=0000"),
        Err(DecodeError::Length {
            field: LengthField::Record,
            expected: 13,
            found: 12,
        })
    );
    assert_eq!(
        save::decode_save("t 11111111111111=0000"),
        Err(DecodeError::Length {
            field: LengthField::Record,
            expected: 13,
            found: 14,
        })
    );
}

#[test]
fn decode_rejects_checksum_mismatch() {
    assert_eq!(
        save::decode_save("t 6kWeeHPsEj63sekd78s=KDRP"),
        Err(DecodeError::ChecksumMismatch {
            expected: 0x9_b715,
            found: 0x9_b716,
        })
    );
}

#[test]
fn decode_accepts_lowercase_checksum() {
    assert_eq!(save::decode_save("t 6kWeeHPsEj63sekd78s=kdrn"), Ok(sample()));
}

#[test]
fn restore_rejects_impossible_shoes() {
    let overdealt = save::decode_save("t 7BAFdXKDtZWGkJR6A2=D2P0").unwrap();
    assert_eq!(overdealt.cards_dealt, 53);
    assert_eq!(
        GameState::restore(overdealt),
        Err(DecodeError::ImpossibleShoe {
            deck_count: 1,
            cards_dealt: 53,
        })
    );

    let no_decks = save::decode_save("t 7BAFdXKDRsFt2ceky8=TAC5").unwrap();
    assert_eq!(no_decks.deck_count, 0);
    assert_eq!(
        GameState::restore(no_decks),
        Err(DecodeError::ImpossibleShoe {
            deck_count: 0,
            cards_dealt: 0,
        })
    );
}

#[test]
fn restore_accepts_exhausted_shoe() {
    let state = SavableGameState {
        cards_dealt: 52,
        ..sample()
    };
    let game = GameState::restore(state).unwrap();
    assert!(game.draw_stack().is_empty());
    assert_eq!(game.phase(), Phase::Bet);
}

#[test]
fn save_and_restore_resume_the_shoe() {
    let options = GameOptions::default().with_decks(2).with_hit_on_soft_17(true);
    let game = GameState::new_game(options, 0x0BAD_CAFE);
    let (mut game, result) = game.apply(Action::Bet(50));
    assert!(result.is_ok());
    if game.phase() == Phase::Play {
        game = game.apply(Action::Stand).0;
    }

    let line = game.save_line("2024-12-31-23:59:59");
    assert!(line.starts_with("2024-12-31-23:59:59 "));

    let saved = save::decode_save(&line).unwrap();
    assert_eq!(saved, SavableGameState::from(&game));

    let restored = GameState::restore(saved).unwrap();
    assert_eq!(restored.seed(), 0x0BAD_CAFE);
    assert_eq!(restored.money(), game.money());
    assert_eq!(restored.cards_dealt(), game.cards_dealt());
    assert_eq!(restored.draw_stack().len(), 104 - usize::from(game.cards_dealt()));
    assert_eq!(restored.draw_stack().first(), game.draw_stack().first());
    assert_eq!(restored.draw_stack(), game.draw_stack());
    assert!(restored.hit_on_soft_17());
}

#[test]
fn save_file_lists_newest_first() {
    let older = save::format_line("2024-01-01-00:00:00", &sample());
    let newer = save::format_line(
        "2024-01-02-00:00:00",
        &SavableGameState {
            money: 140,
            ..sample()
        },
    );

    let contents = save::prepend("", &older);
    let contents = save::prepend(&contents, &newer);
    let contents = format!("{contents}\n   \n");

    let lines: Vec<&str> = save::candidates(&contents).collect();
    assert_eq!(lines, [newer.as_str(), older.as_str()]);
    assert_eq!(save::decode_save(lines[0]).map(|s| s.money), Ok(140));
}

#[test]
fn errors_render_readably() {
    let err = DecodeError::ChecksumMismatch {
        expected: 0x9_b715,
        found: 0x9_b716,
    };
    assert_eq!(
        err.to_string(),
        "checksum mismatch: expected 0x9b715, got 0x9b716"
    );
}

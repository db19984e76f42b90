//! Integration tests for the chord drill engine
//!
//! Tests full rounds: pool building, drawing, answering and scoring.

use std::collections::HashSet;
use std::time::{Duration, Instant};

use chord_drill::{
    build_pool, draw_progression, format_chord_display, format_key_display, grade,
    is_fully_correct, parse_roman_numeral, roman_numeral_for, ChordTypes, DrillSettings, Key,
    Progression, Quality, Screen, Session, SlotAnswer,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Draw until the random key lands on `key`.
fn progression_in(key: Key, types: ChordTypes, length: usize) -> Progression {
    let pool = build_pool(types);
    (0u64..10_000)
        .map(|seed| draw_progression(&pool, length, &mut StdRng::seed_from_u64(seed)).unwrap())
        .find(|p| p.key() == key)
        .expect("some seed should draw the requested key")
}

#[test]
fn test_f_major_triad_round() {
    let progression = progression_in(Key::F, ChordTypes::TRIADS, 4);
    let allowed = [
        ("F", "I"),
        ("Gm", "ii"),
        ("Am", "iii"),
        ("Bb", "IV"),
        ("C", "V"),
        ("Dm", "vi"),
        ("Edim", "vii°"),
    ];

    let mut seen = HashSet::new();
    for entry in progression.chords() {
        assert_eq!(entry.key, Key::F);
        assert!(allowed.contains(&(entry.name, entry.roman.as_str())));
        assert!(seen.insert(entry.roman.clone()), "repeated {}", entry.roman);
    }

    let answers = progression.romans();
    assert!(is_fully_correct(&progression, &answers));

    let mut wrong: Vec<&str> = answers.clone();
    wrong[3] = if wrong[3] == "ii" { "iii" } else { "ii" };
    assert!(!is_fully_correct(&progression, &wrong));
}

#[test]
fn test_every_key_yields_seven_per_chord_type() {
    for (types, expected) in [
        (ChordTypes::TRIADS, 7),
        (ChordTypes::SEVENTHS, 7),
        (ChordTypes::BOTH, 14),
    ] {
        let pool = build_pool(types);
        for key in Key::ALL {
            assert_eq!(pool.for_key(key).len(), expected, "{} {:?}", key, types);
        }
    }
}

#[test]
fn test_no_repeats_up_to_available_chords() {
    let mut rng = StdRng::seed_from_u64(77);
    for (types, available) in [(ChordTypes::TRIADS, 7), (ChordTypes::BOTH, 14)] {
        let pool = build_pool(types);
        for length in 1..=available {
            let progression = draw_progression(&pool, length, &mut rng).unwrap();
            assert_eq!(progression.len(), length);
            let unique: HashSet<&str> = progression.romans().into_iter().collect();
            assert_eq!(unique.len(), length);
        }
    }
}

#[test]
fn test_structured_and_text_answers_agree() {
    let progression = progression_in(Key::EFlat, ChordTypes::BOTH, 6);
    let structured: Vec<SlotAnswer> = progression
        .romans()
        .iter()
        .map(|r| SlotAnswer::from_roman(r).unwrap())
        .collect();
    assert!(is_fully_correct(&progression, &structured));
    assert!(is_fully_correct(&progression, &progression.romans()));
}

#[test]
fn test_roman_numeral_examples() {
    assert_eq!(roman_numeral_for(5, Quality::DominantSeventh).unwrap(), "V7");
    assert_eq!(
        roman_numeral_for(7, Quality::HalfDiminishedSeventh).unwrap(),
        "vii\u{f8}7"
    );
    assert_eq!(roman_numeral_for(2, Quality::Minor).unwrap(), "ii");
    let (degree, quality) = parse_roman_numeral("IVmaj7").unwrap();
    assert_eq!((degree.get(), quality), (4, Quality::MajorSeventh));
}

#[test]
fn test_display_formatting() {
    assert_eq!(format_chord_display("Bbm7b5"), "B♭m7b5");
    assert_eq!(format_key_display("Db"), "D♭");
    assert_eq!(format_chord_display("C"), "C");
}

#[test]
fn test_feedback_shows_expected_and_submitted() {
    let progression = progression_in(Key::D, ChordTypes::TRIADS, 2);
    let result = grade(&progression, &["I", "  "]);
    assert_eq!(result.key_display, "D");
    assert_eq!(result.slots.len(), 2);
    assert_eq!(result.slots[1].submitted, None);
    assert!(!result.slots[1].correct);
    assert!(!result.correct);
}

#[test]
fn test_timed_game_from_yaml_settings() {
    let settings = DrillSettings::from_yaml(
        "triads: true\nsevenths: true\nprogression-length: 3\ntimer-seconds: 30\n",
    )
    .unwrap();
    let mut rng = StdRng::seed_from_u64(5);
    let start = Instant::now();
    let mut session = Session::new(settings).unwrap();
    session.start_game(&mut rng, start).unwrap();

    let mut clock = start;
    while session.screen() != Screen::GameOver {
        let answers: Vec<String> = session
            .progression()
            .unwrap()
            .romans()
            .iter()
            .map(|r| r.to_string())
            .collect();
        session.submit_text(&answers).unwrap();
        clock += Duration::from_secs(7);
        session.next_round(&mut rng, clock).unwrap();
    }

    let score = session.scoreboard();
    assert_eq!(score.incorrect, 0);
    assert_eq!(score.correct, 5);
    assert_eq!(score.score, 5);
}

#[test]
fn test_catalog_shared_across_threads() {
    let handles: Vec<_> = (0..4u64)
        .map(|seed| {
            std::thread::spawn(move || {
                let pool = build_pool(ChordTypes::BOTH);
                let mut rng = StdRng::seed_from_u64(seed);
                let progression = draw_progression(&pool, 4, &mut rng).unwrap();
                is_fully_correct(&progression, &progression.romans())
            })
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap());
    }
}

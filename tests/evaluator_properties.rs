//! Property tests for guess evaluation

use proptest::prelude::*;
use wordle_game::core::{Classification, WORD_LENGTH, Word, evaluate};

fn word() -> impl Strategy<Value = Word> {
    // A small alphabet makes repeated letters common
    "[A-F]{5}".prop_map(|s| Word::new(&s).unwrap())
}

fn count_of(word: &Word, letter: u8) -> usize {
    word.chars().iter().filter(|&&c| c == letter).count()
}

proptest! {
    #[test]
    fn guessing_the_target_is_all_correct(target in word()) {
        prop_assert!(evaluate(&target, &target).is_all_correct());
    }

    #[test]
    fn correct_matches_positions(guess in word(), target in word()) {
        let result = evaluate(&guess, &target);
        for i in 0..WORD_LENGTH {
            let same = guess.chars()[i] == target.chars()[i];
            prop_assert_eq!(result.get(i) == Classification::Correct, same);
        }
    }

    #[test]
    fn marks_never_exceed_target_count(guess in word(), target in word()) {
        let result = evaluate(&guess, &target);
        for &letter in guess.chars() {
            let marked = (0..WORD_LENGTH)
                .filter(|&i| guess.chars()[i] == letter && result.get(i) != Classification::Absent)
                .count();
            prop_assert_eq!(marked, count_of(&guess, letter).min(count_of(&target, letter)));
        }
    }

    #[test]
    fn absent_letters_only_when_exhausted(guess in word(), target in word()) {
        let result = evaluate(&guess, &target);
        for i in 0..WORD_LENGTH {
            if result.get(i) == Classification::Absent {
                let letter = guess.chars()[i];
                prop_assert!(count_of(&guess, letter) > count_of(&target, letter));
            }
        }
    }
}

#[test]
fn repeated_letters_in_guess() {
    use Classification::{Absent, Present};
    let result = evaluate(&Word::new("speed").unwrap(), &Word::new("erase").unwrap());
    assert_eq!(result.classifications(), &[Present, Absent, Absent, Present, Present]);
}

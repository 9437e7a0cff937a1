use expedition_lib::model::dice::{Dice, NIBBLES_PER_BLOCK};
use expedition_lib::model::{DiceError, Seed};
use proptest::prelude::*;

prop_compose! {
    fn arb_dice()(entropy in any::<[u8; 32]>(), skip in 0usize..200) -> Dice {
        let mut dice = Dice::from_entropy(entropy);
        for _ in 0..skip {
            dice.roll_in_place(16).unwrap();
        }
        dice
    }
}

proptest! {
    #[test]
    fn test_roll_is_in_range(dice in arb_dice(), n in 1i64..1_000_000_000) {
        let (value, next) = dice.roll(n).unwrap();
        prop_assert!(value < n as u64);
        prop_assert!(next.cursor() < NIBBLES_PER_BLOCK);
    }

    #[test]
    fn test_roll_one_is_free(dice in arb_dice()) {
        prop_assert_eq!(dice.roll(1).unwrap(), (0, dice));
    }

    #[test]
    fn test_non_positive_range_fails(dice in arb_dice(), n in i64::MIN..=0) {
        prop_assert_eq!(dice.roll(n), Err(DiceError::InvalidRange(n)));
    }

    #[test]
    fn test_replay_from_any_state(dice in arb_dice(), ranges in prop::collection::vec(1i64..10_000, 1..50)) {
        let mut a = dice;
        let mut b = dice;
        for &n in &ranges {
            prop_assert_eq!(a.roll_in_place(n).unwrap(), b.roll_in_place(n).unwrap());
        }
        prop_assert_eq!(a, b);
    }
}

#[test]
fn test_rolls_are_roughly_uniform() {
    let mut dice = Dice::new(&Seed::from_u64(2024));
    let mut buckets = [0u32; 6];
    for _ in 0..60_000 {
        buckets[dice.roll_in_place(6).unwrap() as usize] += 1;
    }
    for (face, &count) in buckets.iter().enumerate() {
        assert!((9_000..11_000).contains(&count), "face {face} rolled {count} times");
    }
}

#[test]
fn test_large_range_uses_high_values() {
    let mut dice = Dice::new(&Seed::from_u64(1));
    let n = 1i64 << 40;
    let high = (0..1_000)
        .filter(|_| dice.roll_in_place(n).unwrap() >= (n as u64) / 2)
        .count();
    assert!((400..600).contains(&high), "{high} of 1000 in upper half");
}

//! Generation with injected clocks, ordering, and text form.

use rand::SeedableRng;
use rand::rngs::SmallRng;
use trove_id::{FixedClock, Uuid};

// =============================================================================
// Injected clock and RNG
// =============================================================================

#[test]
fn same_millisecond_differs_only_in_random_bits() {
    let clock = FixedClock(1_722_470_400_000);
    let mut rng = SmallRng::seed_from_u64(12345);

    let a = Uuid::new_v7(&clock, &mut rng);
    let b = Uuid::new_v7(&clock, &mut rng);

    assert_ne!(a, b);
    assert_eq!(a.as_bytes()[..6], b.as_bytes()[..6]);
    assert_eq!(a.timestamp_ms(), 1_722_470_400_000);
}

#[test]
fn same_seed_same_id() {
    let clock = FixedClock(42);
    let a = Uuid::new_v7(&clock, &mut SmallRng::seed_from_u64(9));
    let b = Uuid::new_v7(&clock, &mut SmallRng::seed_from_u64(9));
    assert_eq!(a, b);
}

#[test]
fn later_milliseconds_sort_later() {
    let mut rng = SmallRng::seed_from_u64(12345);

    let mut ids: Vec<Uuid> = (0..200u64)
        .map(|ms| Uuid::new_v7(&FixedClock(1_000 + ms), &mut rng))
        .collect();
    let expected = ids.clone();

    ids.reverse();
    ids.sort();
    assert_eq!(ids, expected);

    // Lowercase hex text sorts the same way as the bytes.
    let mut text: Vec<String> = expected.iter().rev().map(ToString::to_string).collect();
    text.sort();
    let from_text: Vec<Uuid> = text.iter().map(|s| s.parse().unwrap()).collect();
    assert_eq!(from_text, expected);
}

#[test]
fn text_roundtrip_for_random_ids() {
    let mut rng = SmallRng::seed_from_u64(777);
    for ms in [0, 1, 1_700_000_000_000, (1 << 48) - 1] {
        let id = Uuid::new_v7(&FixedClock(ms), &mut rng);
        let text = id.to_string();

        assert_eq!(text.parse::<Uuid>(), Ok(id));
        assert_eq!(text.to_uppercase().parse::<Uuid>(), Ok(id));
        assert_eq!(text.replace('-', "").parse::<Uuid>(), Ok(id));
        assert_eq!(id.timestamp_ms(), ms);
    }
}

#[test]
fn parse_error_messages() {
    let err = "xyz".parse::<Uuid>().unwrap_err();
    assert_eq!(err.to_string(), "invalid length 3: expected 32 or 36 characters");

    let err = "z1891234-5678-7bab-abab-abababababab".parse::<Uuid>().unwrap_err();
    assert_eq!(err.to_string(), "invalid character 'z' at offset 0");
}

#[cfg(feature = "std")]
#[test]
fn parse_error_is_std_error() {
    let err = "xyz".parse::<Uuid>().unwrap_err();
    let boxed: Box<dyn std::error::Error> = Box::new(err);
    assert!(boxed.to_string().contains("length 3"));
}

#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn entropy_seed_comes_from_the_clock_natively() {
    // Nanoseconds since 1970 are far past 2^60 for any current clock.
    assert!(entropy_seed() > 1 << 60);
}

#[test]
fn entropy_seed_changes_between_calls() {
    let first = entropy_seed();
    std::thread::sleep(std::time::Duration::from_millis(1));
    assert_ne!(first, entropy_seed());
}

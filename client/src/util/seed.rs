//! Entropy for the quiz picker.
//!
//! In the browser the seed comes from `Math.random()` and the clock. Native
//! builds (SSR, tests) fall back to the system clock. The server never draws a
//! target, so its seed only has to exist.

#[cfg(test)]
#[path = "seed_test.rs"]
mod seed_test;

/// Seed for a fresh [`quiz::picker::RandomPicker`].
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn entropy_seed() -> u64 {
    #[cfg(feature = "hydrate")]
    {
        let word = || (js_sys::Math::random() * f64::from(u32::MAX)) as u64;
        (word() << 32) ^ word() ^ (js_sys::Date::now() as u64)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| d.as_nanos() as u64)
    }
}

//! Random source for grid fills

/// Used whenever a seed would be zero (xorshift never leaves zero)
const FALLBACK_SEED: u32 = 12345;

/// Xorshift32 random number generator
#[inline]
pub fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

/// Uniform sample in `[0, 1)`
#[inline]
pub fn next_unit(state: &mut u32) -> f64 {
    xorshift32(state) as f64 / (u32::MAX as f64 + 1.0)
}

/// Normalize a caller-provided seed into a valid xorshift state
#[inline]
pub fn seed_state(seed: u32) -> u32 {
    if seed == 0 { FALLBACK_SEED } else { seed }
}

/// Seed from the host: `Math.random()` in the browser, the clock natively
pub fn entropy_seed() -> u32 {
    #[cfg(target_arch = "wasm32")]
    {
        seed_state((js_sys::Math::random() * u32::MAX as f64) as u32)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::time::{SystemTime, UNIX_EPOCH};
        let mixed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32).rotate_left(16))
            .unwrap_or(FALLBACK_SEED);
        seed_state(mixed)
    }
}

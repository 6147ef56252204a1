//! Small randomness helpers for placement jitter.

/// Returns a uniformly distributed value in `[0, 1]`.
///
/// Falls back to `0.5` (no jitter) if the host entropy source is unavailable.
pub fn unit_random() -> f64 {
    let mut bytes = [0u8; 4];
    match getrandom::getrandom(&mut bytes) {
        Ok(()) => f64::from(u32::from_le_bytes(bytes)) / f64::from(u32::MAX),
        Err(_) => 0.5,
    }
}

/// Maps a `[0, 1]` sample onto the integer range `[-max, max]`.
pub fn signed_jitter(sample: f64, max: i32) -> i32 {
    let sample = sample.clamp(0.0, 1.0);
    ((sample * 2.0 - 1.0) * f64::from(max)).round() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jitter_covers_the_symmetric_range() {
        assert_eq!(signed_jitter(0.0, 20), -20);
        assert_eq!(signed_jitter(0.5, 20), 0);
        assert_eq!(signed_jitter(1.0, 20), 20);
        assert_eq!(signed_jitter(7.0, 20), 20);
    }

    #[test]
    fn unit_random_stays_in_range() {
        for _ in 0..64 {
            let sample = unit_random();
            assert!((0.0..=1.0).contains(&sample));
        }
    }
}

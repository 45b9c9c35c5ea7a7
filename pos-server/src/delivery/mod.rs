//! Delivery tracking codes

use rand::Rng;
use std::collections::HashSet;

const TRACKING_PREFIX: &str = "TRK";
const MAX_ATTEMPTS: usize = 64;

/// `TRK` + 6 digits taken from the clock, bumped with randomness on collision
///
/// Returns `None` only when every attempt collided with `taken`.
pub fn generate_tracking_code(now_millis: i64, taken: &HashSet<String>) -> Option<String> {
    let seed = now_millis.rem_euclid(1_000_000);
    let mut rng = rand::thread_rng();

    (0..MAX_ATTEMPTS).find_map(|attempt| {
        let digits = if attempt == 0 {
            seed
        } else {
            rng.gen_range(0..1_000_000)
        };
        let code = format!("{}{:06}", TRACKING_PREFIX, digits);
        (!taken.contains(&code)).then_some(code)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_format_from_clock() {
        let code = generate_tracking_code(1_700_000_123_456, &HashSet::new()).unwrap();
        assert_eq!(code, "TRK123456");
    }

    #[test]
    fn test_short_clock_is_zero_padded() {
        let code = generate_tracking_code(42, &HashSet::new()).unwrap();
        assert_eq!(code, "TRK000042");
    }

    #[test]
    fn test_collision_picks_another_code() {
        let mut taken = HashSet::new();
        taken.insert("TRK123456".to_string());
        let code = generate_tracking_code(1_700_000_123_456, &taken).unwrap();
        assert_ne!(code, "TRK123456");
        assert!(code.starts_with("TRK"));
        assert_eq!(code.len(), 9);
        assert!(code[3..].chars().all(|c| c.is_ascii_digit()));
    }
}

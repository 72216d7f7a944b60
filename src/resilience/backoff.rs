//! Exponential backoff with jitter.

use std::time::Duration;

use rand::Rng;

/// Calculate exponential backoff delay with symmetric jitter.
///
/// The delay doubles with each attempt (`base * 2^(attempt-1)`), is capped
/// at `max_ms`, and is then shifted by a random amount within
/// `+/- jitter_factor` of the capped delay.
pub fn calculate_backoff(attempt: u32, base_ms: u64, max_ms: u64, jitter_factor: f64) -> Duration {
    if attempt == 0 {
        return Duration::from_millis(0);
    }

    let exponential_base = 2u64.saturating_pow(attempt - 1);
    let delay_ms = base_ms.saturating_mul(exponential_base);
    let capped_delay = delay_ms.min(max_ms);

    let jitter_span = (capped_delay as f64 * jitter_factor).round() as i64;
    let jittered = if jitter_span > 0 {
        let offset = rand::thread_rng().gen_range(-jitter_span..=jitter_span);
        (capped_delay as i64 + offset).max(0) as u64
    } else {
        capped_delay
    };

    Duration::from_millis(jittered)
}

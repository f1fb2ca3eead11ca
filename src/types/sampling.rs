//! Random sampling helpers shared by the generators
//!
//! Timestamp windows, hash-shaped hex strings, and network address strings.
//! All helpers draw exclusively from the caller's RNG so that seeded runs
//! stay reproducible.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use rand::rngs::StdRng;
use rand::Rng;

/// Uniformly sample a timestamp in `[start, end)`.
///
/// If the window is empty or inverted, `start` is returned unchanged.
pub fn datetime_between(
    rng: &mut StdRng,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> DateTime<Utc> {
    let span = (end - start).num_seconds();
    if span <= 0 {
        return start;
    }
    start + Duration::seconds(rng.gen_range(0..span))
}

/// Uniformly sample a timestamp within the `days` days before `reference`.
pub fn datetime_within_days_before(
    rng: &mut StdRng,
    reference: DateTime<Utc>,
    days: i64,
) -> DateTime<Utc> {
    datetime_between(rng, reference - Duration::days(days), reference)
}

/// Uniformly sample a calendar date within the `days` days before `reference`.
pub fn date_within_days_before(rng: &mut StdRng, reference: DateTime<Utc>, days: i64) -> NaiveDate {
    (reference - Duration::days(rng.gen_range(0..days.max(1)))).date_naive()
}

/// Uniformly pick one element of a non-empty slice.
///
/// Callers guarantee non-emptiness; every call site draws from a fixed
/// catalog or a pool validated earlier in the pipeline.
pub fn pick<'a, T>(rng: &mut StdRng, items: &'a [T]) -> &'a T {
    &items[rng.gen_range(0..items.len())]
}

/// A lowercase hex string of `bytes * 2` characters drawn from the RNG.
///
/// Stands in for a content digest; generated documents have no content to
/// hash, so the digest is sampled directly.
pub fn random_hex(rng: &mut StdRng, bytes: usize) -> String {
    const HEX: &[u8; 16] = b"0123456789abcdef";
    let mut out = String::with_capacity(bytes * 2);
    for _ in 0..bytes {
        let b: u8 = rng.gen();
        out.push(HEX[(b >> 4) as usize] as char);
        out.push(HEX[(b & 0x0f) as usize] as char);
    }
    out
}

/// A dotted-quad IPv4 address string with non-zero octets.
pub fn random_ipv4(rng: &mut StdRng) -> String {
    format!(
        "{}.{}.{}.{}",
        rng.gen_range(1..=223u8),
        rng.gen_range(1..=254u8),
        rng.gen_range(1..=254u8),
        rng.gen_range(1..=254u8),
    )
}

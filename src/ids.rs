use std::sync::atomic::{AtomicI64, Ordering};

use time::OffsetDateTime;

static LAST_ID: AtomicI64 = AtomicI64::new(0);

/// Time-based record id: the current unix time in milliseconds, rendered as a
/// decimal string. Bumped past the previously issued id so two inserts inside
/// the same millisecond still get distinct ids.
pub fn next_record_id() -> String {
    let now_millis = (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as i64;
    let mut prev = LAST_ID.load(Ordering::Relaxed);
    loop {
        let candidate = now_millis.max(prev + 1);
        match LAST_ID.compare_exchange(prev, candidate, Ordering::Relaxed, Ordering::Relaxed) {
            Ok(_) => return candidate.to_string(),
            Err(actual) => prev = actual,
        }
    }
}

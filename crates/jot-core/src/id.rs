//! Note id generation
//!
//! Ids come from the OS random source as v4 UUIDs. If that source cannot be
//! read, a time + pseudo-random composite is used instead; such ids look like
//! `id-k3v9q0x2m1lq8cw4z`.

use std::sync::atomic::{AtomicU64, Ordering};

use rand::rngs::{OsRng, StdRng};
use rand::{Rng, RngCore, SeedableRng};
use uuid::Builder;

use crate::models::NoteId;
use crate::util::{to_base36, unix_millis_now};

const FALLBACK_PREFIX: &str = "id-";

static FALLBACK_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Generate a fresh note id.
pub fn generate_note_id() -> NoteId {
    let mut bytes = [0u8; 16];
    match OsRng.try_fill_bytes(&mut bytes) {
        Ok(()) => NoteId::from(Builder::from_random_bytes(bytes).into_uuid().to_string()),
        Err(error) => {
            tracing::warn!("OS random source unavailable, using fallback id: {}", error);
            fallback_note_id(unix_millis_now())
        }
    }
}

/// Build a `id-<random><time>` id from the clock and a seeded generator.
#[allow(clippy::cast_sign_loss)]
pub fn fallback_note_id(now_ms: i64) -> NoteId {
    let counter = FALLBACK_COUNTER.fetch_add(1, Ordering::Relaxed);
    let nanos = chrono::Utc::now()
        .timestamp_nanos_opt()
        .unwrap_or(now_ms.saturating_mul(1_000_000));
    let seed = (nanos as u64) ^ counter.rotate_left(32);
    let random: u64 = StdRng::seed_from_u64(seed).gen();

    NoteId::from(format!(
        "{FALLBACK_PREFIX}{}{}",
        to_base36(random),
        to_base36(now_ms.max(0) as u64)
    ))
}

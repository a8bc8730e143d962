//! Shuffle selection
//!
//! Shuffle does not reorder the queue. Each "next" is an independent uniform
//! pick over the whole queue, current episode included.

use rand::Rng;

/// Pick the next index for a queue of `len` episodes
///
/// Returns `None` for an empty queue.
pub fn pick_next_index<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }

    Some(rng.gen_range(0..len))
}

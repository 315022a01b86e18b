// ABOUTME: Sources of concatenation reference numbers shared by concurrent encoders
// ABOUTME: Random, sequential and closure-backed generators behind one thread-safe trait

use std::sync::atomic::{AtomicU16, Ordering};

/// Supplies one reference number per concatenated message.
///
/// 8-bit concatenation uses the low byte. Two messages in flight to the same
/// recipient with the same reference can be mixed up by the handset; nothing
/// here prevents that.
pub trait ReferenceGenerator: Send + Sync {
    fn next_reference(&self) -> u16;
}

impl<F> ReferenceGenerator for F
where
    F: Fn() -> u16 + Send + Sync,
{
    fn next_reference(&self) -> u16 {
        self()
    }
}

/// Draws references from the thread-local RNG
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomReference;

impl ReferenceGenerator for RandomReference {
    fn next_reference(&self) -> u16 {
        rand::random::<u16>()
    }
}

/// Hands out consecutive references, wrapping at `u16::MAX`
#[derive(Debug, Default)]
pub struct SequentialReference {
    next: AtomicU16,
}

impl SequentialReference {
    pub fn new(start: u16) -> Self {
        Self {
            next: AtomicU16::new(start),
        }
    }
}

impl ReferenceGenerator for SequentialReference {
    fn next_reference(&self) -> u16 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}

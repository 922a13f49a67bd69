//! Removal rules for falling raindrops
//!
//! Both rules are pure so they can be checked in isolation; `tick` applies
//! them miss-first.

use super::rect::Rect;
use crate::consts::CATCH_TOLERANCE;

/// Outcome of testing one raindrop against the field and the bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// Still falling
    Falling,
    /// Passed below the bottom edge
    Missed,
    /// Landed in the bucket
    Caught,
}

/// Drop has fully left the field through the bottom edge
#[inline]
pub fn is_missed(drop: &Rect) -> bool {
    drop.top() < 0.0
}

/// Drop overlaps the bucket and its bottom is within tolerance of the bucket top
pub fn is_caught(drop: &Rect, bucket: &Rect) -> bool {
    drop.overlaps(bucket) && bucket.top() - drop.y <= CATCH_TOLERANCE
}

/// Classify a drop; a drop satisfying both rules counts as missed
pub fn classify(drop: &Rect, bucket: &Rect) -> DropOutcome {
    if is_missed(drop) {
        DropOutcome::Missed
    } else if is_caught(drop, bucket) {
        DropOutcome::Caught
    } else {
        DropOutcome::Falling
    }
}

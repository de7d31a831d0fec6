//! Cosmetic "settle" transition after a reconciliation.
//!
//! The geometric state is always updated synchronously. The settle hint only
//! tells the render layer to animate toward it; the host schedules a one-shot
//! timer from the returned ticket and hands the ticket back when it fires.
//! A newer reconciliation bumps the generation, so stale timers become
//! no-ops instead of clearing a transition that was just set.

use serde::Serialize;

/// How long the settle transition stays enabled.
pub const SETTLE_DELAY_MS: u32 = 300;

/// Handle for one scheduled settle timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettleTicket {
    pub generation: u64,
    pub delay_ms: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settle {
    generation: u64,
    active: bool,
}

impl Settle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Turn the transition on, cancelling any ticket issued earlier.
    pub fn begin(&mut self) -> SettleTicket {
        self.generation += 1;
        self.active = true;
        SettleTicket {
            generation: self.generation,
            delay_ms: SETTLE_DELAY_MS,
        }
    }

    /// Clear the transition if `ticket` is still the latest one.
    ///
    /// Returns whether the transition was cleared.
    pub fn finish(&mut self, ticket: SettleTicket) -> bool {
        if ticket.generation != self.generation || !self.active {
            return false;
        }
        self.active = false;
        true
    }

    /// Ticket for the transition currently waiting to be cleared.
    pub fn pending(&self) -> Option<SettleTicket> {
        self.active.then_some(SettleTicket {
            generation: self.generation,
            delay_ms: SETTLE_DELAY_MS,
        })
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::warn;
use std::sync::Arc;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::state::SharedState;
use crate::shared::PassengerEvent;

/**
 * Two-beam passenger crossing detector.
 *
 * A single beam cannot tell an entry from an exit; with two beams, the
 * first edge of a crossing is latched and the matching second edge on the
 * other beam completes it. Entering the car blocks sensor A first, then
 * sensor B; leaving blocks B first, then A.
 *
 * The latches are private to the door dwell loop that feeds this detector.
 * The occupancy count lives in the shared state so the door controller can
 * read it for the overload check.
 */
pub struct PassengerCounter {
    shared: Arc<SharedState>,
    enter_latch: bool,
    exit_latch: bool,
}

impl PassengerCounter {
    pub fn new(shared: Arc<SharedState>) -> PassengerCounter {
        PassengerCounter {
            shared,
            enter_latch: false,
            exit_latch: false,
        }
    }

    /// Feeds one (sensor A, sensor B) reading. Returns the crossing this
    /// reading completed, if any. The caller applies the settle delay after
    /// a completed crossing so a passenger still between the beams is not
    /// counted twice.
    pub fn observe(&mut self, a_blocked: bool, b_blocked: bool) -> Option<PassengerEvent> {
        match (a_blocked, b_blocked) {
            // A alone: either the first edge of an entry, or the second
            // edge of an exit that started on B.
            (true, false) => {
                if self.exit_latch {
                    self.exit_latch = false;
                    if !self.shared.remove_passenger() {
                        warn!("exit detected with occupancy already zero; count clamped");
                    }
                    Some(PassengerEvent::Exited)
                } else {
                    self.enter_latch = true;
                    None
                }
            }
            // B alone: the mirror image.
            (false, true) => {
                if self.enter_latch {
                    self.enter_latch = false;
                    self.shared.add_passenger();
                    Some(PassengerEvent::Entered)
                } else {
                    self.exit_latch = true;
                    None
                }
            }
            // Both clear or both blocked: no transition.
            _ => None,
        }
    }
}

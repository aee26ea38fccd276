/***************************************/
/*        3rd party libraries          */
/***************************************/
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::DoorState;

/**
 * Per-floor request flags shared between the input sampler and the
 * dispatcher.
 *
 * The sampler sets flags with an atomic OR and the dispatcher clears them
 * with an atomic swap, so a button press landing in the middle of a
 * clear-on-arrival is never lost. A flag stays set until the car reaches
 * that floor; the dispatcher then clears all three flags in one visit,
 * whichever call direction was requested.
 */
pub struct RequestBoard {
    car: Vec<AtomicBool>,
    hall_up: Vec<AtomicBool>,
    hall_down: Vec<AtomicBool>,
}

impl RequestBoard {
    pub fn new(n_floors: u8) -> RequestBoard {
        RequestBoard {
            car: (0..n_floors).map(|_| AtomicBool::new(false)).collect(),
            hall_up: (0..n_floors).map(|_| AtomicBool::new(false)).collect(),
            hall_down: (0..n_floors).map(|_| AtomicBool::new(false)).collect(),
        }
    }

    /// Returns true if the flag was newly latched.
    pub fn press_car(&self, floor: u8) -> bool {
        !self.car[floor as usize].fetch_or(true, Ordering::SeqCst)
    }

    /// Returns true if the flag was newly latched.
    pub fn press_hall_up(&self, floor: u8) -> bool {
        !self.hall_up[floor as usize].fetch_or(true, Ordering::SeqCst)
    }

    /// Returns true if the flag was newly latched.
    pub fn press_hall_down(&self, floor: u8) -> bool {
        !self.hall_down[floor as usize].fetch_or(true, Ordering::SeqCst)
    }

    /// True if any of the three flags at `floor` is set.
    pub fn any_at(&self, floor: u8) -> bool {
        let f = floor as usize;
        self.car[f].load(Ordering::SeqCst)
            || self.hall_up[f].load(Ordering::SeqCst)
            || self.hall_down[f].load(Ordering::SeqCst)
    }

    /// Clears all three flags at `floor` and returns true if any was set.
    pub fn take_at(&self, floor: u8) -> bool {
        let f = floor as usize;
        let car = self.car[f].swap(false, Ordering::SeqCst);
        let up = self.hall_up[f].swap(false, Ordering::SeqCst);
        let down = self.hall_down[f].swap(false, Ordering::SeqCst);
        car || up || down
    }
}

/**
 * Cells shared between the sampler thread and the control loop.
 *
 * Every field is an atomic: the sampler may fire at any point of the
 * control loop, including mid-clear of a request flag, and neither side
 * takes a lock.
 *
 * # Fields
 * - `requests`:       Pending car and landing calls, one flag set per floor.
 * - `door_open`:      Door state; the sampler reads it to gate manual open.
 * - `occupancy`:      Passengers in the car, mutated by the counter only.
 * - `manual_open`:    Latched manual-open trigger, consumed by the dispatcher.
 */
pub struct SharedState {
    pub requests: RequestBoard,
    door_open: AtomicBool,
    occupancy: AtomicU8,
    manual_open: AtomicBool,
}

impl SharedState {
    pub fn new(n_floors: u8) -> SharedState {
        SharedState {
            requests: RequestBoard::new(n_floors),
            door_open: AtomicBool::new(false),
            occupancy: AtomicU8::new(0),
            manual_open: AtomicBool::new(false),
        }
    }

    pub fn door_state(&self) -> DoorState {
        if self.door_open.load(Ordering::SeqCst) {
            DoorState::Open
        } else {
            DoorState::Closed
        }
    }

    pub fn set_door_state(&self, state: DoorState) {
        self.door_open
            .store(state == DoorState::Open, Ordering::SeqCst);
    }

    pub fn occupancy(&self) -> u8 {
        self.occupancy.load(Ordering::SeqCst)
    }

    pub fn add_passenger(&self) {
        self.occupancy.fetch_add(1, Ordering::SeqCst);
    }

    /// Decrements the occupancy count, saturating at zero. Returns false
    /// if the count was already zero, so the caller can report the anomaly.
    pub fn remove_passenger(&self) -> bool {
        self.occupancy
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok()
    }

    pub fn latch_manual_open(&self) {
        self.manual_open.fetch_or(true, Ordering::SeqCst);
    }

    /// Consumes the manual-open trigger if one is latched.
    pub fn take_manual_open(&self) -> bool {
        self.manual_open.swap(false, Ordering::SeqCst)
    }
}

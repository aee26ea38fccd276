/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::warn;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::ElevatorConfig;
use crate::elevator::io::ElevatorIo;
use crate::elevator::passenger::PassengerCounter;
use crate::shared::state::SharedState;
use crate::shared::DoorState;

/**
 * Door open/hold/close sequence.
 *
 * `open` raises the door indicator, runs a full dwell window while feeding
 * presence-sensor readings to the passenger counter, and then checks the
 * occupancy against the capacity. An overloaded car must not move: the
 * door re-enters a full dwell window with the overload indicator raised,
 * once per window, until the occupancy drops back under the limit. Only
 * then is the door marked closed and the indicator dropped.
 *
 * The door controller reads the occupancy, it never mutates it.
 *
 * # Fields
 * - `io`:              Shared handle to the pin-level boundary.
 * - `shared`:          Door state and occupancy cells.
 * - `capacity`:        Passenger limit; above it the door refuses to close.
 * - `dwell`:           Duration the door stays open per hold window.
 * - `settle`:          Pause after a counted crossing, against double counts.
 * - `sensor_poll`:     Presence-sensor sampling period during the dwell.
 */
pub struct DoorController {
    io: Arc<dyn ElevatorIo>,
    shared: Arc<SharedState>,
    capacity: u8,
    dwell: Duration,
    settle: Duration,
    sensor_poll: Duration,
}

impl DoorController {
    pub fn new(
        config: &ElevatorConfig,
        io: Arc<dyn ElevatorIo>,
        shared: Arc<SharedState>,
    ) -> DoorController {
        DoorController {
            io,
            shared,
            capacity: config.capacity,
            dwell: Duration::from_millis(config.door_dwell_ms),
            settle: Duration::from_millis(config.settle_ms),
            sensor_poll: Duration::from_millis(config.sensor_poll_ms),
        }
    }

    /// Runs the full open sequence and blocks until the door is closed
    /// again. The car must not be driven while this is in progress.
    pub fn open(&self, counter: &mut PassengerCounter) {
        self.shared.set_door_state(DoorState::Open);
        self.io.set_door_indicator(true);

        loop {
            self.dwell_once(counter);

            let occupancy = self.shared.occupancy();
            if occupancy > self.capacity {
                self.io.set_overload_indicator(true);
                warn!(
                    "overloaded: {} passengers with capacity {}, holding door",
                    occupancy, self.capacity
                );
                continue;
            }

            self.io.set_overload_indicator(false);
            break;
        }

        self.shared.set_door_state(DoorState::Closed);
        self.io.set_door_indicator(false);
    }

    /// One dwell window: sample the presence sensors at the poll rate and
    /// feed them to the passenger counter until the window elapses.
    fn dwell_once(&self, counter: &mut PassengerCounter) {
        let deadline = Instant::now() + self.dwell;

        while Instant::now() < deadline {
            let (a_blocked, b_blocked) = self.io.presence_sensors();
            if counter.observe(a_blocked, b_blocked).is_some() {
                thread::sleep(self.settle);
            } else {
                thread::sleep(self.sensor_poll);
            }
        }
    }
}

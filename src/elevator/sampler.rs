/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossbeam_channel as cbc;
use log::debug;
use std::sync::Arc;
use std::time::Duration;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::HardwareConfig;
use crate::elevator::io::ElevatorIo;
use crate::shared::state::SharedState;
use crate::shared::DoorState;

/**
 * Periodic input sampler.
 *
 * Stands in for the timer interrupt of the target hardware: on every tick
 * it reads every call button and the manual-open button, and latches the
 * matching flag in the shared state. Flags are only ever set here, never
 * cleared; latching an already-set flag is a no-op. The tick handler does
 * no other work and never blocks, so it always completes well inside one
 * tick period.
 *
 * A manual-open press is latched only while the door is closed; the
 * dispatcher consumes the latch and runs the door sequence on the control
 * loop, so the sampler itself stays non-blocking.
 *
 * # Fields
 * - `io`:              Shared handle to the pin-level boundary.
 * - `shared`:          Request flags and door state shared with the control loop.
 * - `n_floors`:        The total number of floors serviced by the elevator.
 * - `tick_period`:     Sampling period of the tick source.
 * - `terminate_rx`:    Receiver used to stop the sampler in tests.
 */
pub struct InputSampler {
    io: Arc<dyn ElevatorIo>,
    shared: Arc<SharedState>,
    n_floors: u8,
    tick_period: Duration,
    terminate_rx: cbc::Receiver<()>,
}

impl InputSampler {
    pub fn new(
        config: &HardwareConfig,
        io: Arc<dyn ElevatorIo>,
        shared: Arc<SharedState>,
        terminate_rx: cbc::Receiver<()>,
    ) -> InputSampler {
        InputSampler {
            io,
            shared,
            n_floors: config.n_floors,
            tick_period: Duration::from_millis(config.tick_period_ms),
            terminate_rx,
        }
    }

    pub fn run(self) {
        let ticker = cbc::tick(self.tick_period);

        loop {
            cbc::select! {
                recv(ticker) -> _ => {
                    self.sample_once();
                }
                recv(self.terminate_rx) -> _ => {
                    return;
                }
            }
        }
    }

    fn sample_once(&self) {
        for floor in 0..self.n_floors {
            if self.io.car_button(floor) && self.shared.requests.press_car(floor) {
                debug!("latched car call at floor {}", floor);
            }
            if self.io.hall_up_button(floor) && self.shared.requests.press_hall_up(floor) {
                debug!("latched hall up call at floor {}", floor);
            }
            if self.io.hall_down_button(floor) && self.shared.requests.press_hall_down(floor) {
                debug!("latched hall down call at floor {}", floor);
            }
        }

        if self.io.manual_open_button() && self.shared.door_state() == DoorState::Closed {
            self.shared.latch_manual_open();
        }
    }
}

/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossbeam_channel as cbc;
use log::info;
use std::sync::Arc;
use std::time::Duration;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::ElevatorConfig;
use crate::elevator::door::DoorController;
use crate::elevator::io::ElevatorIo;
use crate::elevator::motor::MotorDriver;
use crate::elevator::passenger::PassengerCounter;
use crate::shared::state::SharedState;
use crate::shared::{Direction, Status};

/**
 * Request dispatch control loop.
 *
 * Each outer iteration runs a full upward sweep followed by a full
 * downward sweep over the request flags. The upward sweep takes every
 * flagged floor strictly above the car, ascending; the downward sweep the
 * mirror image. Travel is one open-loop motor pulse per floor, and every
 * newly reached floor with any flag set is a stop: all three flags there
 * are cleared and the door sequence runs. Flagless floors are passed
 * through without stopping.
 *
 * The up-before-down ordering is fixed. It finishes all reachable upward
 * stops before reversing, and a downward call can wait for as long as
 * upward calls keep arriving.
 *
 * The door sequence returns only after the door is closed, so a motor
 * pulse is never issued while the door is open.
 *
 * # Fields
 * - `io`:              Shared handle to the pin-level boundary.
 * - `shared`:          Request flags, door state, occupancy, manual-open latch.
 * - `motor`:           Open-loop single-floor drive.
 * - `door`:            Door open/hold/close sequence.
 * - `counter`:         Passenger crossing detector fed during door dwells.
 * - `status_tx`:       Broadcasts controller snapshots.
 * - `terminate_rx`:    Receiver used to stop the loop in tests.
 * - `n_floors`:        The total number of floors serviced by the elevator.
 * - `floor`:           Current resting floor, updated after each pulse.
 * - `direction`:       Current travel direction.
 * - `idle_poll`:       Poll period of the outer loop while idle.
 */
pub struct Dispatcher {
    io: Arc<dyn ElevatorIo>,
    shared: Arc<SharedState>,
    motor: MotorDriver,
    door: DoorController,
    counter: PassengerCounter,
    status_tx: cbc::Sender<Status>,
    terminate_rx: cbc::Receiver<()>,
    n_floors: u8,
    floor: u8,
    direction: Direction,
    idle_poll: Duration,
}

impl Dispatcher {
    pub fn new(
        config: &ElevatorConfig,
        io: Arc<dyn ElevatorIo>,
        shared: Arc<SharedState>,
        motor: MotorDriver,
        door: DoorController,
        counter: PassengerCounter,
        status_tx: cbc::Sender<Status>,
        terminate_rx: cbc::Receiver<()>,
    ) -> Dispatcher {
        Dispatcher {
            io,
            shared,
            motor,
            door,
            counter,
            status_tx,
            terminate_rx,
            n_floors: config.n_floors,
            floor: 0,
            direction: Direction::Stop,
            idle_poll: Duration::from_millis(config.idle_poll_ms),
        }
    }

    pub fn run(mut self) {
        self.io.set_floor_display(self.floor);
        self.publish_status();

        loop {
            cbc::select! {
                recv(self.terminate_rx) -> _ => {
                    return;
                }
                default(self.idle_poll) => {
                    if self.shared.take_manual_open() {
                        self.open_door_here();
                    }

                    self.sweep_up();
                    self.sweep_down();

                    if self.direction != Direction::Stop {
                        self.direction = Direction::Stop;
                        self.publish_status();
                    }
                }
            }
        }
    }

    /// Ascending pass over every flagged floor strictly above the car.
    fn sweep_up(&mut self) {
        for target in 0..self.n_floors {
            if target > self.floor && self.shared.requests.any_at(target) {
                self.travel_to(target);
            }
        }
    }

    /// Descending pass over every flagged floor strictly below the car.
    fn sweep_down(&mut self) {
        for target in (0..self.n_floors).rev() {
            if target < self.floor && self.shared.requests.any_at(target) {
                self.travel_to(target);
            }
        }
    }

    /// Single-floor pulses toward `target`. Every flagged floor reached on
    /// the way is serviced in passing; flagless floors are passed through.
    fn travel_to(&mut self, target: u8) {
        while self.floor != target {
            if target > self.floor {
                self.direction = Direction::Up;
                self.motor.raise_one_floor();
                self.floor += 1;
            } else {
                self.direction = Direction::Down;
                self.motor.lower_one_floor();
                self.floor -= 1;
            }

            self.io.set_floor_display(self.floor);
            self.publish_status();

            if self.shared.requests.take_at(self.floor) {
                info!("stopping at floor {}", self.floor);
                self.open_door_here();
            }
        }
    }

    fn open_door_here(&mut self) {
        self.door.open(&mut self.counter);
        self.publish_status();
    }

    fn publish_status(&self) {
        let _ = self.status_tx.send(Status {
            floor: self.floor,
            direction: self.direction,
            door: self.shared.door_state(),
            occupancy: self.shared.occupancy(),
        });
    }
}

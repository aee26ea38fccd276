/***************************************/
/*        3rd party libraries          */
/***************************************/
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::MotorConfig;
use crate::elevator::io::{ElevatorIo, MotorDrive};

/// Open-loop single-floor drive: a fixed travel pulse, a shorter pulse of
/// the opposite polarity to brake, then both lines low. There is no
/// position feedback; a pulse is assumed to land the car exactly one floor
/// away.
pub struct MotorDriver {
    io: Arc<dyn ElevatorIo>,
    travel_pulse: Duration,
    brake_pulse: Duration,
}

impl MotorDriver {
    pub fn new(config: &MotorConfig, io: Arc<dyn ElevatorIo>) -> MotorDriver {
        MotorDriver {
            io,
            travel_pulse: Duration::from_millis(config.travel_pulse_ms),
            brake_pulse: Duration::from_millis(config.brake_pulse_ms),
        }
    }

    pub fn raise_one_floor(&self) {
        self.pulse(MotorDrive::Raise, MotorDrive::Lower);
    }

    pub fn lower_one_floor(&self) {
        self.pulse(MotorDrive::Lower, MotorDrive::Raise);
    }

    fn pulse(&self, drive: MotorDrive, brake: MotorDrive) {
        self.io.set_motor(drive);
        thread::sleep(self.travel_pulse);
        self.io.set_motor(brake);
        thread::sleep(self.brake_pulse);
        self.io.set_motor(MotorDrive::Stop);
    }
}

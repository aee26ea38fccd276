/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossbeam_channel as cbc;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

/***************************************/
/*       Public data structures        */
/***************************************/

/// H-bridge drive state. Both lines low is `Stop`; exactly one line high
/// drives the car. Both lines high never leaves this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotorDrive {
    Stop,
    Raise,
    Lower,
}

/// Output-pin write mirrored by `PinBank` for observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoEvent {
    Motor(MotorDrive),
    DoorIndicator(bool),
    OverloadIndicator(bool),
    FloorDisplay(u8),
}

/**
 * Pin-level boundary of the controller.
 *
 * Implementations map these calls onto the pin image of the target board.
 * Reads and writes go through `&self` so one handle can be shared between
 * the sampler thread and the control loop, in the same way the hardware
 * driver handle is shared between polling threads.
 *
 * Pin map notes: landing buttons that do not exist at a floor (e.g. no
 * down button at the bottom floor) are simply wired to read false. The
 * floor display value is translated to segments by the display hardware.
 */
pub trait ElevatorIo: Send + Sync {
    // Input pins
    fn car_button(&self, floor: u8) -> bool;
    fn hall_up_button(&self, floor: u8) -> bool;
    fn hall_down_button(&self, floor: u8) -> bool;
    fn manual_open_button(&self) -> bool;
    /// (sensor A, sensor B); true means the beam is blocked.
    fn presence_sensors(&self) -> (bool, bool);

    // Output pins
    fn set_motor(&self, drive: MotorDrive);
    fn set_door_indicator(&self, open: bool);
    fn set_overload_indicator(&self, on: bool);
    fn set_floor_display(&self, floor: u8);
}

/**
 * In-memory pin image.
 *
 * Input pins are written by whatever drives the deployment (a hardware
 * bridge, or the unit tests); output pins are written by the controller
 * and can additionally be mirrored onto a channel so observers see every
 * write in order.
 */
pub struct PinBank {
    car_buttons: Vec<AtomicBool>,
    hall_up_buttons: Vec<AtomicBool>,
    hall_down_buttons: Vec<AtomicBool>,
    manual_open: AtomicBool,
    sensor_a: AtomicBool,
    sensor_b: AtomicBool,
    motor: AtomicU8,
    door_indicator: AtomicBool,
    overload_indicator: AtomicBool,
    floor_display: AtomicU8,
    event_tx: Option<cbc::Sender<IoEvent>>,
}

const MOTOR_STOP: u8 = 0;
const MOTOR_RAISE: u8 = 1;
const MOTOR_LOWER: u8 = 2;

impl PinBank {
    pub fn new(n_floors: u8) -> PinBank {
        PinBank {
            car_buttons: (0..n_floors).map(|_| AtomicBool::new(false)).collect(),
            hall_up_buttons: (0..n_floors).map(|_| AtomicBool::new(false)).collect(),
            hall_down_buttons: (0..n_floors).map(|_| AtomicBool::new(false)).collect(),
            manual_open: AtomicBool::new(false),
            sensor_a: AtomicBool::new(false),
            sensor_b: AtomicBool::new(false),
            motor: AtomicU8::new(MOTOR_STOP),
            door_indicator: AtomicBool::new(false),
            overload_indicator: AtomicBool::new(false),
            floor_display: AtomicU8::new(0),
            event_tx: None,
        }
    }

    /// Like `new`, but every output-pin write is also sent on `event_tx`.
    pub fn with_events(n_floors: u8, event_tx: cbc::Sender<IoEvent>) -> PinBank {
        PinBank {
            event_tx: Some(event_tx),
            ..PinBank::new(n_floors)
        }
    }

    fn emit(&self, event: IoEvent) {
        if let Some(tx) = &self.event_tx {
            let _ = tx.send(event);
        }
    }

    // Input-side writes
    pub fn set_car_button(&self, floor: u8, pressed: bool) {
        self.car_buttons[floor as usize].store(pressed, Ordering::SeqCst);
    }

    pub fn set_hall_up_button(&self, floor: u8, pressed: bool) {
        self.hall_up_buttons[floor as usize].store(pressed, Ordering::SeqCst);
    }

    pub fn set_hall_down_button(&self, floor: u8, pressed: bool) {
        self.hall_down_buttons[floor as usize].store(pressed, Ordering::SeqCst);
    }

    pub fn set_manual_open_button(&self, pressed: bool) {
        self.manual_open.store(pressed, Ordering::SeqCst);
    }

    pub fn set_presence_sensors(&self, a_blocked: bool, b_blocked: bool) {
        self.sensor_a.store(a_blocked, Ordering::SeqCst);
        self.sensor_b.store(b_blocked, Ordering::SeqCst);
    }

    // Output-side reads
    pub fn motor(&self) -> MotorDrive {
        match self.motor.load(Ordering::SeqCst) {
            MOTOR_RAISE => MotorDrive::Raise,
            MOTOR_LOWER => MotorDrive::Lower,
            _ => MotorDrive::Stop,
        }
    }

    pub fn door_indicator(&self) -> bool {
        self.door_indicator.load(Ordering::SeqCst)
    }

    pub fn overload_indicator(&self) -> bool {
        self.overload_indicator.load(Ordering::SeqCst)
    }

    pub fn floor_display(&self) -> u8 {
        self.floor_display.load(Ordering::SeqCst)
    }
}

impl ElevatorIo for PinBank {
    fn car_button(&self, floor: u8) -> bool {
        self.car_buttons[floor as usize].load(Ordering::SeqCst)
    }

    fn hall_up_button(&self, floor: u8) -> bool {
        self.hall_up_buttons[floor as usize].load(Ordering::SeqCst)
    }

    fn hall_down_button(&self, floor: u8) -> bool {
        self.hall_down_buttons[floor as usize].load(Ordering::SeqCst)
    }

    fn manual_open_button(&self) -> bool {
        self.manual_open.load(Ordering::SeqCst)
    }

    fn presence_sensors(&self) -> (bool, bool) {
        (
            self.sensor_a.load(Ordering::SeqCst),
            self.sensor_b.load(Ordering::SeqCst),
        )
    }

    fn set_motor(&self, drive: MotorDrive) {
        let encoded = match drive {
            MotorDrive::Stop => MOTOR_STOP,
            MotorDrive::Raise => MOTOR_RAISE,
            MotorDrive::Lower => MOTOR_LOWER,
        };
        self.motor.store(encoded, Ordering::SeqCst);
        self.emit(IoEvent::Motor(drive));
    }

    fn set_door_indicator(&self, open: bool) {
        self.door_indicator.store(open, Ordering::SeqCst);
        self.emit(IoEvent::DoorIndicator(open));
    }

    fn set_overload_indicator(&self, on: bool) {
        self.overload_indicator.store(on, Ordering::SeqCst);
        self.emit(IoEvent::OverloadIndicator(on));
    }

    fn set_floor_display(&self, floor: u8) {
        self.floor_display.store(floor, Ordering::SeqCst);
        self.emit(IoEvent::FloorDisplay(floor));
    }
}

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Stop,
}

/// The car may only move while the door is `Closed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoorState {
    Open,
    Closed,
}

/// A completed crossing through the door's sensor pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassengerEvent {
    Entered,
    Exited,
}

/// Snapshot of the controller, published by the dispatcher whenever the
/// floor, travel direction or door changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Status {
    pub floor: u8,
    pub direction: Direction,
    pub door: DoorState,
    pub occupancy: u8,
}

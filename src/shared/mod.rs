pub mod macros;
pub mod state;
pub mod state_tests;
pub mod structs;

pub use state::RequestBoard;
pub use state::SharedState;
pub use structs::Direction;
pub use structs::DoorState;
pub use structs::PassengerEvent;
pub use structs::Status;

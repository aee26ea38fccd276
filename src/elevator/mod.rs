pub mod dispatcher;
pub mod door;
pub mod io;
pub mod motor;
pub mod passenger;
pub mod passenger_tests;
pub mod sampler;
pub mod sampler_tests;

pub use dispatcher::Dispatcher;
pub use door::DoorController;
pub use io::ElevatorIo;
pub use io::PinBank;
pub use motor::MotorDriver;
pub use passenger::PassengerCounter;
pub use sampler::InputSampler;

/* 3rd party libraries */
use clap::{Arg, Command};
use crossbeam_channel as cbc;
use log::{error, info};
use std::sync::Arc;
use std::thread::Builder;

/* Custom libraries */
use elevator::{
    Dispatcher, DoorController, ElevatorIo, InputSampler, MotorDriver, PassengerCounter, PinBank,
};
use shared::state::SharedState;
use shared::Status;

/* Modules */
mod config;
mod elevator;
mod shared;

/* Main */
fn main() {
    env_logger::init();

    // Parse the command line
    let matches = Command::new("liftctl")
        .about("Single-car elevator controller")
        .arg(
            Arg::new("config")
                .long("config")
                .takes_value(true)
                .default_value("config.toml")
                .help("Path to the configuration file"),
        )
        .get_matches();

    // Load the configuration
    let config = unwrap_or_exit!(config::load_config(matches.value_of("config").unwrap()));

    // The pin image and the cells shared between the two threads
    let pins: Arc<PinBank> = Arc::new(PinBank::new(config.hardware.n_floors));
    let io: Arc<dyn ElevatorIo> = pins.clone();
    let shared = Arc::new(SharedState::new(config.elevator.n_floors));

    // Initialize channels
    let (status_tx, status_rx) = cbc::unbounded::<Status>();
    let (_sampler_terminate_tx, sampler_terminate_rx) = cbc::unbounded::<()>();
    let (_dispatcher_terminate_tx, dispatcher_terminate_rx) = cbc::unbounded::<()>();

    // Start the input sampler
    let sampler = InputSampler::new(
        &config.hardware,
        io.clone(),
        shared.clone(),
        sampler_terminate_rx,
    );
    let sampler_thread = Builder::new().name("input_sampler".into());
    sampler_thread.spawn(move || sampler.run()).unwrap();

    // Start the dispatcher
    let motor = MotorDriver::new(&config.motor, io.clone());
    let door = DoorController::new(&config.elevator, io.clone(), shared.clone());
    let counter = PassengerCounter::new(shared.clone());
    let dispatcher = Dispatcher::new(
        &config.elevator,
        io,
        shared.clone(),
        motor,
        door,
        counter,
        status_tx,
        dispatcher_terminate_rx,
    );
    let dispatcher_thread = Builder::new().name("dispatcher".into());
    dispatcher_thread.spawn(move || dispatcher.run()).unwrap();

    info!(
        "controller up: {} floors, capacity {}",
        config.elevator.n_floors, config.elevator.capacity
    );

    // The controller runs until the process is killed
    for status in status_rx.iter() {
        info!(
            "floor {} direction {:?} door {:?} occupancy {}",
            status.floor, status.direction, status.door, status.occupancy
        );
    }
}

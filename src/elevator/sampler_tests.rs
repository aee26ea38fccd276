/*
 * Unit tests for the input sampler
 *
 * The unit tests follows the Arrange, Act, Assert pattern.
 *
 * Tests:
 * - test_sampler_latches_pressed_buttons
 * - test_manual_open_gated_by_door_state
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod sampler_tests {
    use crate::config::HardwareConfig;
    use crate::elevator::io::{ElevatorIo, PinBank};
    use crate::elevator::sampler::InputSampler;
    use crate::shared::state::SharedState;
    use crate::shared::DoorState;
    use crossbeam_channel::unbounded;
    use std::sync::Arc;
    use std::thread::{sleep, spawn};
    use std::time::Duration;

    fn setup_sampler() -> (
        InputSampler,
        Arc<PinBank>,
        Arc<SharedState>,
        crossbeam_channel::Sender<()>,
    ) {
        let config = HardwareConfig {
            n_floors: 5,
            tick_period_ms: 5,
        };
        let (terminate_tx, terminate_rx) = unbounded::<()>();
        let pins = Arc::new(PinBank::new(config.n_floors));
        let io: Arc<dyn ElevatorIo> = pins.clone();
        let shared = Arc::new(SharedState::new(config.n_floors));
        let sampler = InputSampler::new(&config, io, shared.clone(), terminate_rx);

        (sampler, pins, shared, terminate_tx)
    }

    #[test]
    fn test_sampler_latches_pressed_buttons() {
        // Arrange
        let (sampler, pins, shared, terminate_tx) = setup_sampler();
        let sampler_thread = spawn(move || sampler.run());

        // Act
        pins.set_car_button(1, true);
        pins.set_hall_up_button(3, true);
        pins.set_hall_down_button(0, true);
        sleep(Duration::from_millis(30));

        // Assert
        assert_eq!(shared.requests.any_at(1), true);
        assert_eq!(shared.requests.any_at(3), true);
        assert_eq!(shared.requests.any_at(0), true);
        assert_eq!(shared.requests.any_at(2), false);
        assert_eq!(shared.requests.any_at(4), false);

        // Cleanup
        terminate_tx.send(()).unwrap();
        sampler_thread.join().unwrap();
    }

    #[test]
    fn test_manual_open_gated_by_door_state() {
        // Arrange: the door is already open
        let (sampler, pins, shared, terminate_tx) = setup_sampler();
        shared.set_door_state(DoorState::Open);
        let sampler_thread = spawn(move || sampler.run());

        // Act
        pins.set_manual_open_button(true);
        sleep(Duration::from_millis(30));

        // Assert: no latch while the door is open
        assert_eq!(shared.take_manual_open(), false);

        // Once the door closes, the held button is latched on the next tick
        shared.set_door_state(DoorState::Closed);
        sleep(Duration::from_millis(30));
        assert_eq!(shared.take_manual_open(), true);

        // Cleanup
        terminate_tx.send(()).unwrap();
        sampler_thread.join().unwrap();
    }
}

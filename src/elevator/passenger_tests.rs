/*
 * Unit tests for the passenger counter
 *
 * The unit tests follows the Arrange, Act, Assert pattern.
 *
 * Tests:
 * - test_entry_sequence_counts_once
 * - test_exit_sequence_counts_once
 * - test_exit_at_zero_is_clamped
 * - test_both_beams_cause_no_transition
 * - test_interleaved_crossings
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod passenger_tests {
    use crate::elevator::passenger::PassengerCounter;
    use crate::shared::state::SharedState;
    use crate::shared::PassengerEvent;
    use std::sync::Arc;

    fn setup_counter() -> (PassengerCounter, Arc<SharedState>) {
        let shared = Arc::new(SharedState::new(5));
        (PassengerCounter::new(shared.clone()), shared)
    }

    #[test]
    fn test_entry_sequence_counts_once() {
        // Arrange
        let (mut counter, shared) = setup_counter();

        // Act: beam A first, held over several polls, then beam B
        assert_eq!(counter.observe(true, false), None);
        assert_eq!(counter.observe(true, false), None);
        let completed = counter.observe(false, true);

        // Assert
        assert_eq!(completed, Some(PassengerEvent::Entered));
        assert_eq!(shared.occupancy(), 1);

        // The sequence completed exactly once
        assert_eq!(counter.observe(false, false), None);
        assert_eq!(shared.occupancy(), 1);
    }

    #[test]
    fn test_exit_sequence_counts_once() {
        // Arrange
        let (mut counter, shared) = setup_counter();
        shared.add_passenger();
        shared.add_passenger();

        // Act: beam B first, then beam A
        assert_eq!(counter.observe(false, true), None);
        let completed = counter.observe(true, false);

        // Assert
        assert_eq!(completed, Some(PassengerEvent::Exited));
        assert_eq!(shared.occupancy(), 1);
    }

    #[test]
    fn test_exit_at_zero_is_clamped() {
        // Arrange
        let (mut counter, shared) = setup_counter();

        // Act: a full exit sequence with nobody on board
        counter.observe(false, true);
        let completed = counter.observe(true, false);

        // Assert: the crossing is reported but the count does not wrap
        assert_eq!(completed, Some(PassengerEvent::Exited));
        assert_eq!(shared.occupancy(), 0);
    }

    #[test]
    fn test_both_beams_cause_no_transition() {
        // Arrange
        let (mut counter, shared) = setup_counter();

        // Act
        assert_eq!(counter.observe(false, false), None);
        assert_eq!(counter.observe(true, true), None);

        // Assert
        assert_eq!(shared.occupancy(), 0);
    }

    #[test]
    fn test_interleaved_crossings() {
        // Arrange
        let (mut counter, shared) = setup_counter();

        // Act: one entry, then one exit
        counter.observe(true, false);
        assert_eq!(counter.observe(false, true), Some(PassengerEvent::Entered));
        counter.observe(false, true);
        assert_eq!(counter.observe(true, false), Some(PassengerEvent::Exited));

        // Assert
        assert_eq!(shared.occupancy(), 0);
    }
}

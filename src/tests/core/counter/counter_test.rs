#[cfg(test)]
mod tests {
    use tracing_test::traced_test;

    use crate::core::counter::{Counter, CounterConfig, CounterControls};

    #[test]
    fn test_new() {
        let counter = Counter::new();
        assert_eq!(counter.count(), 0);
    }

    #[test]
    fn test_with_config() {
        let counter = Counter::with_config(CounterConfig { initial_count: 42, step: 1 });
        assert_eq!(counter.count(), 42);
    }

    #[test]
    fn test_increment() {
        let mut counter = Counter::new();
        counter.increment();
        assert_eq!(counter.count(), 1);

        counter.increment();
        assert_eq!(counter.count(), 2);
    }

    #[test]
    fn test_decrement_goes_negative() {
        let mut counter = Counter::new();
        counter.decrement();
        assert_eq!(counter.count(), -1);
    }

    #[test]
    fn test_increment_then_decrement_restores_count() {
        let mut counter = Counter::with_config(CounterConfig { initial_count: 7, step: 3 });
        counter.increment();
        counter.decrement();
        assert_eq!(counter.count(), 7);
    }

    #[test]
    fn test_sequence_tallies_increments_minus_decrements() {
        let mut counter = Counter::new();
        let mut increments = 0i64;
        let mut decrements = 0i64;
        for i in 0..20 {
            if i % 3 == 0 {
                counter.decrement();
                decrements += 1;
            } else {
                counter.increment();
                increments += 1;
            }
        }
        assert_eq!(counter.count(), increments - decrements);
    }

    #[test]
    fn test_step_applies_in_both_directions() {
        let mut counter = Counter::with_config(CounterConfig { initial_count: 0, step: 5 });
        counter.increment();
        assert_eq!(counter.count(), 5);
        counter.increment();
        assert_eq!(counter.count(), 10);
        counter.decrement();
        assert_eq!(counter.count(), 5);
    }

    #[test]
    fn test_direct_increment_decrement_trajectory() {
        let mut counter = Counter::new();
        assert_eq!(counter.count(), 0);
        counter.increment();
        assert_eq!(counter.count(), 1);
        counter.increment();
        assert_eq!(counter.count(), 2);
        counter.decrement();
        assert_eq!(counter.count(), 1);
    }

    #[traced_test]
    #[test]
    fn test_increment_is_logged() {
        let mut counter = Counter::new();
        counter.increment();
        assert!(logs_contain("Counter incremented to: 1"));
    }
}

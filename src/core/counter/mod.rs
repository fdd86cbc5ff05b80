use tracing::instrument;

/// Capability surface a front end binds its controls to.
pub trait CounterControls {
    fn increment(&mut self);
    fn decrement(&mut self);
    fn count(&self) -> i64;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterConfig {
    pub initial_count: i64,
    pub step: i64,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self { initial_count: 0, step: 1 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Counter {
    count: i64,
    step: i64,
}

impl Counter {
    pub fn new() -> Self {
        Self::with_config(CounterConfig::default())
    }

    pub fn with_config(config: CounterConfig) -> Self {
        tracing::info!("Creating a new counter with initial value: {}", config.initial_count);
        Self { count: config.initial_count, step: config.step }
    }
}

impl Default for Counter {
    fn default() -> Self {
        Self::new()
    }
}

impl CounterControls for Counter {
    #[instrument(name = "increment_counter", level = "debug")]
    fn increment(&mut self) {
        self.count += self.step;
        tracing::info!("Counter incremented to: {}", self.count);
    }

    #[instrument(name = "decrement_counter", level = "debug")]
    fn decrement(&mut self) {
        self.count -= self.step;
        tracing::info!("Counter decremented to: {}", self.count);
    }

    fn count(&self) -> i64 {
        self.count
    }
}

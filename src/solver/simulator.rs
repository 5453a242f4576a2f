//! Fixed-step simulation driver.

use tracing::info;

use crate::circuit::{Circuit, SolveSummary};
use crate::error::{CircuitError, Result};

use super::DEFAULT_TIME_STEP;

/// Configuration for the simulator.
#[derive(Debug, Clone)]
pub struct SimulatorConfig {
    /// Simulated seconds per step.
    pub time_step: f64,
    /// Zero all consumption counters when the simulator is created.
    pub reset_consumption_on_start: bool,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            time_step: DEFAULT_TIME_STEP,
            reset_consumption_on_start: false,
        }
    }
}

impl SimulatorConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the simulated time per step (seconds).
    ///
    /// A step of `0` makes every step a reset: currents read zero and
    /// nothing accumulates.
    pub fn with_time_step(mut self, time_step: f64) -> Self {
        self.time_step = time_step;
        self
    }

    /// Zero consumption counters before the first step.
    pub fn with_reset_consumption(mut self, reset: bool) -> Self {
        self.reset_consumption_on_start = reset;
        self
    }
}

/// Steps a circuit forward in fixed time increments.
pub struct Simulator {
    /// The circuit being simulated
    circuit: Circuit,
    config: SimulatorConfig,
    /// Number of steps taken
    steps: u64,
}

impl Simulator {
    /// Create a new simulator with default configuration.
    pub fn new(circuit: Circuit) -> Self {
        Self {
            circuit,
            config: SimulatorConfig::default(),
            steps: 0,
        }
    }

    /// Create a new simulator with custom configuration.
    pub fn with_config(mut circuit: Circuit, config: SimulatorConfig) -> Result<Self> {
        if !config.time_step.is_finite() || config.time_step < 0.0 {
            return Err(CircuitError::invalid_param(format!(
                "time step must be finite and non-negative, got {}",
                config.time_step
            )));
        }
        if config.reset_consumption_on_start {
            circuit.reset_consumption();
        }
        info!(time_step = config.time_step, components = circuit.len(), "simulator created");
        Ok(Self {
            circuit,
            config,
            steps: 0,
        })
    }

    /// Solve one step.
    pub fn step(&mut self) -> SolveSummary {
        self.steps += 1;
        self.circuit.simulate(self.config.time_step)
    }

    /// Solve `steps` steps and return the last summary. With zero steps,
    /// returns the circuit's cached summary.
    pub fn run(&mut self, steps: u64) -> SolveSummary {
        let mut summary = self.circuit.summary();
        for _ in 0..steps {
            summary = self.step();
        }
        summary
    }

    /// Simulated time elapsed so far, in seconds.
    pub fn elapsed(&self) -> f64 {
        self.steps as f64 * self.config.time_step
    }

    /// Number of steps taken.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Get the simulator configuration.
    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Get a reference to the circuit.
    pub fn circuit(&self) -> &Circuit {
        &self.circuit
    }

    /// Get a mutable reference to the circuit, for edits between steps.
    pub fn circuit_mut(&mut self) -> &mut Circuit {
        &mut self.circuit
    }

    /// Take the circuit back.
    pub fn into_circuit(self) -> Circuit {
        self.circuit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::ComponentId;
    use crate::components::Component;
    use approx::assert_relative_eq;

    fn lamp_circuit() -> (Circuit, ComponentId) {
        let mut circuit = Circuit::with_root(
            Component::power_source(6.0, 0.0, 100.0),
            Default::default(),
        );
        let lamp = circuit.insert(ComponentId::ROOT, Component::lamp(3.0, 5.0)).unwrap();
        (circuit, lamp)
    }

    #[test]
    fn test_run_accumulates_consumption() {
        let (circuit, lamp) = lamp_circuit();
        let config = SimulatorConfig::new().with_time_step(0.5);
        let mut sim = Simulator::with_config(circuit, config).unwrap();

        let summary = sim.run(4);
        assert_relative_eq!(summary.current, 2.0);
        assert_relative_eq!(sim.elapsed(), 2.0);
        // 6 V * 2 A * 2 s
        let lamp = sim.circuit().component(lamp).unwrap();
        assert_relative_eq!(lamp.consumption, 24.0);
    }

    #[test]
    fn test_reset_on_start() {
        let (mut circuit, lamp) = lamp_circuit();
        circuit.component_mut(lamp).unwrap().consumption = 9.0;
        let config = SimulatorConfig::new().with_reset_consumption(true);
        let sim = Simulator::with_config(circuit, config).unwrap();
        assert_eq!(sim.circuit().component(lamp).unwrap().consumption, 0.0);
    }

    #[test]
    fn test_rejects_bad_time_step() {
        for bad in [f64::NAN, f64::INFINITY, -1.0] {
            let (circuit, _) = lamp_circuit();
            let config = SimulatorConfig::new().with_time_step(bad);
            assert!(matches!(
                Simulator::with_config(circuit, config),
                Err(CircuitError::InvalidSimulationParam { .. })
            ));
        }
    }

    #[test]
    fn test_run_zero_steps_returns_cached_summary() {
        let (circuit, _) = lamp_circuit();
        let mut sim = Simulator::new(circuit);
        assert_eq!(sim.run(0), SolveSummary::default());
        assert_eq!(sim.steps(), 0);
    }
}

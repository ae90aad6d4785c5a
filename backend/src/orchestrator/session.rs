//! Interactive session: last configuration wins
//!
//! A presentation layer re-runs the whole pipeline every time the operator
//! changes a control. The session keeps only the newest successful report;
//! each update replaces it wholesale, nothing is merged across runs.
//! A rejected configuration leaves the current report in place.

use crate::config::ScenarioConfig;

use super::engine::{Orchestrator, SimulationError};
use super::report::SimulationReport;

/// Holds the report for the most recent valid configuration
#[derive(Debug, Default)]
pub struct SimulationSession {
    current: Option<SimulationReport>,
    /// Number of successful runs so far
    runs: u64,
}

impl SimulationSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `config` from scratch and make it the current report
    ///
    /// # Example
    /// ```
    /// use runway_simulator_core_rs::{ScenarioConfig, SimulationSession};
    ///
    /// let mut session = SimulationSession::new();
    /// session.update(ScenarioConfig::default()).unwrap();
    ///
    /// let bad = ScenarioConfig { flight_count: 0, ..Default::default() };
    /// assert!(session.update(bad).is_err());
    /// assert_eq!(session.current().unwrap().flights.len(), 20);
    /// ```
    pub fn update(&mut self, config: ScenarioConfig) -> Result<&SimulationReport, SimulationError> {
        let report = Orchestrator::new(config)?.run()?;
        self.runs += 1;
        Ok(&*self.current.insert(report))
    }

    pub fn current(&self) -> Option<&SimulationReport> {
        self.current.as_ref()
    }

    pub fn runs(&self) -> u64 {
        self.runs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PerformanceTier;

    #[test]
    fn test_update_replaces_previous_report() {
        let mut session = SimulationSession::new();
        assert!(session.current().is_none());

        session.update(ScenarioConfig::default()).unwrap();
        let next = ScenarioConfig {
            performance_tier: PerformanceTier::Bad,
            flight_count: 40,
            ..Default::default()
        };
        session.update(next.clone()).unwrap();

        let current = session.current().unwrap();
        assert_eq!(current.config, next);
        assert_eq!(current.flights.len(), 40);
        assert_eq!(session.runs(), 2);
    }
}

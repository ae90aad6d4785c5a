//! PyO3 wrappers for the scenario pipeline
//!
//! # Example (from Python)
//!
//! ```python
//! from runway_simulator_core_rs import RunwaySimulation, run_scenario
//!
//! report = run_scenario({"performance_tier": "Bad", "weather_condition": "Fog"})
//! print(report["summary"]["feedback"])
//!
//! sim = RunwaySimulation()
//! sim.update({"flight_count": 40, "runway_count": 20})
//! table = sim.current()["flights"]
//! ```

use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::orchestrator::{simulate, SimulationSession};

use super::types::{parse_scenario_config, report_to_py, to_py_err};

/// Run one scenario and return its report as a dict
///
/// # Errors
///
/// Raises ValueError for unknown labels or out-of-range counts.
#[pyfunction]
pub fn run_scenario(py: Python<'_>, config: &Bound<'_, PyDict>) -> PyResult<Py<PyDict>> {
    let rust_config = parse_scenario_config(config)?;
    let report = simulate(rust_config).map_err(to_py_err)?;
    report_to_py(py, &report)
}

/// Python wrapper for an interactive session
///
/// Each `update` recomputes from scratch; the newest valid configuration
/// wins and an invalid one leaves the current report untouched.
#[pyclass(name = "RunwaySimulation")]
pub struct PyRunwaySimulation {
    inner: SimulationSession,
}

#[pymethods]
impl PyRunwaySimulation {
    #[new]
    fn new() -> Self {
        PyRunwaySimulation {
            inner: SimulationSession::new(),
        }
    }

    /// Re-run with a new configuration dict and return the report
    fn update(&mut self, py: Python<'_>, config: &Bound<'_, PyDict>) -> PyResult<Py<PyDict>> {
        let rust_config = parse_scenario_config(config)?;
        let report = self.inner.update(rust_config).map_err(to_py_err)?;
        report_to_py(py, report)
    }

    /// Current report, or None before the first successful update
    fn current(&self, py: Python<'_>) -> PyResult<Option<Py<PyDict>>> {
        self.inner
            .current()
            .map(|report| report_to_py(py, report))
            .transpose()
    }

    /// Current report as JSON, including the event log
    fn to_json(&self) -> PyResult<Option<String>> {
        self.inner
            .current()
            .map(|report| report.to_json().map_err(to_py_err))
            .transpose()
    }

    /// Number of successful runs
    fn runs(&self) -> u64 {
        self.inner.runs()
    }
}

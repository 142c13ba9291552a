/*!
 * Process Validation
 * Admission checks run before a simulation starts
 */

use super::types::ProcessSpec;
use crate::core::errors::SimulationError;
use crate::core::types::{BlockCount, Pid, SimResult};

/// Reject specs that could never run or never finish
pub(crate) fn validate_spec(pid: Pid, spec: &ProcessSpec) -> SimResult<()> {
    if spec.duration == 0 {
        return Err(SimulationError::InvalidProcess {
            pid,
            reason: "duration must be positive".to_string(),
        });
    }
    if spec.memory_needed == 0 {
        return Err(SimulationError::InvalidProcess {
            pid,
            reason: "memory_needed must be positive".to_string(),
        });
    }
    Ok(())
}

/// A process larger than the whole pool can never be loaded, even alone
pub(crate) fn check_feasible(pid: Pid, spec: &ProcessSpec, pool: BlockCount) -> SimResult<()> {
    if spec.memory_needed > pool {
        return Err(SimulationError::Unschedulable {
            pid,
            needed: spec.memory_needed,
            pool,
        });
    }
    Ok(())
}

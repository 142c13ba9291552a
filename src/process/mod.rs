/*!
 * Process Module
 * Process records, registry, input parsing and admission checks
 */

pub mod input;
pub mod registry;
pub mod types;
pub(crate) mod validation;

// Re-export public API
pub use input::parse_specs;
pub use registry::ProcessRegistry;
pub use types::{Process, ProcessSnapshot, ProcessSpec, ProcessState};

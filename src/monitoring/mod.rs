/*!
 * Monitoring
 * Scheduling events, the bounded run log and tracing setup
 */

mod events;
mod log;
mod tracer;

pub use events::{Payload, SchedulerEvent, Severity};
pub use log::EventLog;
pub use tracer::{init_tracing, ENV_TRACE_JSON};

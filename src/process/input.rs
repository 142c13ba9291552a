/*!
 * Process Input
 * Parses `arrival_time duration memory_needed` triples supplied by the host
 */

use super::types::ProcessSpec;
use crate::core::errors::InputError;

/// Parse exactly `count` whitespace-separated triples from `text`
///
/// Extra tokens after the last triple are ignored.
pub fn parse_specs(text: &str, count: usize) -> Result<Vec<ProcessSpec>, InputError> {
    let mut tokens = text.split_whitespace();
    let mut specs = Vec::with_capacity(count);

    for index in 0..count {
        let mut field = || -> Result<u64, InputError> {
            let token = tokens.next().ok_or(InputError::Truncated {
                expected: count,
                found: index,
            })?;
            token.parse::<u64>().map_err(|_| InputError::NotANumber {
                index,
                token: token.to_string(),
            })
        };

        let arrival_time = field()?;
        let duration = field()?;
        let memory_needed = field()? as usize;
        specs.push(ProcessSpec::new(arrival_time, duration, memory_needed));
    }

    Ok(specs)
}

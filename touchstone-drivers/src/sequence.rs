//! Command sequencer
//!
//! One command/confirm exchange with the golden references object:
//! write the command byte, wait for the object's status report, then
//! check the reported state against the expected outcome.

use embedded_hal::delay::DelayNs;

use touchstone_core::config::CalibrationConfig;
use touchstone_core::objects::{cmd, GR_CTRL};
use touchstone_core::status::FcalPhase;
use touchstone_core::traits::Transport;

use crate::error::SequenceError;
use crate::poll::await_calibration_state;

/// Success predicate for one command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ExpectedOutcome {
    /// Sequence phase the device must reach
    pub phase: FcalPhase,
    /// Status bits that must all be set in the reply
    pub flag_mask: u8,
}

/// Issue one command and await its confirmation
///
/// `command` is the operation subfield only; the capability enable and
/// report enable bits are OR-ed on here, so the object is never
/// commanded with reporting disabled. The reply must match `expected`
/// in both phase and flags: a matching phase with a missing or wrong
/// flag still fails.
pub fn run_command<T: Transport, D: DelayNs>(
    transport: &mut T,
    delay: &mut D,
    config: &CalibrationConfig,
    address: u16,
    command: u8,
    expected: ExpectedOutcome,
) -> Result<(), SequenceError<T::Error>> {
    let command = command | cmd::ENABLE | cmd::REPORT_ENABLE;

    #[cfg(feature = "defmt")]
    defmt::info!("writing {=u8:#x} to ctrl register", command);
    transport
        .write_register(address + GR_CTRL, &[command])
        .map_err(SequenceError::Transport)?;

    let state = await_calibration_state(transport, delay, config)?;

    if state.phase == expected.phase && state.raw & expected.flag_mask == expected.flag_mask {
        Ok(())
    } else {
        #[cfg(feature = "defmt")]
        defmt::warn!("failed to enter correct state: {}", state);
        Err(SequenceError::UnexpectedState(state))
    }
}

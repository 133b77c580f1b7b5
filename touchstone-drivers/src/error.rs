//! Calibration error taxonomy
//!
//! Every error is fatal to the current run. There is no partial commit:
//! if the store phase is never reached, the device keeps whatever golden
//! references it had before. The variants carry enough context to tell
//! "device too slow" from "device rejected the calibration quality" from
//! "device not present".

use core::fmt;

use touchstone_core::status::CalibrationState;

use crate::calibrate::CalStep;

/// Failure while waiting for a calibration status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PollError<E> {
    /// Message queue access failed
    Transport(E),
    /// No calibration status arrived within the response window
    Timeout,
}

/// Failure of a single command/confirm exchange
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SequenceError<E> {
    /// Register write or message queue access failed
    Transport(E),
    /// Confirmation did not arrive within the response window
    Timeout,
    /// Device responded, but not with the required phase and flags
    UnexpectedState(CalibrationState),
}

impl<E> From<PollError<E>> for SequenceError<E> {
    fn from(err: PollError<E>) -> Self {
        match err {
            PollError::Transport(e) => SequenceError::Transport(e),
            PollError::Timeout => SequenceError::Timeout,
        }
    }
}

/// Failure of the whole calibration procedure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CalibrationError<E> {
    /// Transport access failed
    Transport(E),
    /// No golden references object on this device
    ObjectNotFound,
    /// A phase received no confirmation within the response window
    Timeout {
        /// The phase that timed out
        step: CalStep,
    },
    /// A phase completed in the wrong state
    UnexpectedState {
        /// The phase that failed
        step: CalStep,
        /// The state the device actually reported
        state: CalibrationState,
    },
}

impl<E> CalibrationError<E> {
    /// Attach the failing step to a sequence error
    pub(crate) fn from_step(step: CalStep, err: SequenceError<E>) -> Self {
        match err {
            SequenceError::Transport(e) => CalibrationError::Transport(e),
            SequenceError::Timeout => CalibrationError::Timeout { step },
            SequenceError::UnexpectedState(state) => {
                CalibrationError::UnexpectedState { step, state }
            }
        }
    }
}

impl<E: fmt::Display> fmt::Display for CalibrationError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalibrationError::Transport(e) => write!(f, "transport failure: {e}"),
            CalibrationError::ObjectNotFound => {
                f.write_str("golden references object not present on this device")
            }
            CalibrationError::Timeout { step } => {
                write!(f, "no response to {step} command within the timeout")
            }
            CalibrationError::UnexpectedState { step, state } => {
                write!(f, "{step} left the device in unexpected state {state}")
            }
        }
    }
}

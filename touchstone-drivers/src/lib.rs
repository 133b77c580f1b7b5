//! Golden reference calibration engine
//!
//! Drives the three-phase golden reference handshake on a maXTouch-class
//! touch sensor controller: prime the baseline capture, generate and
//! qualify the baseline, then store it to non-volatile memory. Each
//! phase is one control register write confirmed by an asynchronous
//! status report, with a hard per-phase timeout.
//!
//! The engine is transport-agnostic: it talks to the device through
//! [`touchstone_core::traits::Transport`] and sleeps through
//! [`embedded_hal::delay::DelayNs`].

#![no_std]
#![deny(unsafe_code)]

pub mod calibrate;
pub mod error;
pub mod poll;
pub mod sequence;

#[cfg(test)]
pub(crate) mod mock;

pub use calibrate::{CalStep, GoldenRefCalibrator};
pub use error::{CalibrationError, PollError, SequenceError};
pub use sequence::ExpectedOutcome;

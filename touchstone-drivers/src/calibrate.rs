//! Golden reference calibration procedure
//!
//! The full handshake is three command/confirm exchanges run in order:
//!
//! 1. Prime - the object arms a baseline capture (phase goes Primed)
//! 2. Generate - the baseline is captured and qualified (phase goes
//!    Generated with FCALPASS; FCALFAIL means the firmware rejected the
//!    calibration quality)
//! 3. Store - the baseline is committed to non-volatile storage (phase
//!    returns to Idle with FCALSEQDONE)
//!
//! The first failing phase terminates the run. Nothing is retried and
//! nothing is partially committed: until store completes, the device
//! keeps its previous golden references.

use core::fmt;

use embedded_hal::delay::DelayNs;

use touchstone_core::config::CalibrationConfig;
use touchstone_core::objects::{cmd, state, SPT_GOLDEN_REFERENCES};
use touchstone_core::status::FcalPhase;
use touchstone_core::traits::Transport;

use crate::error::CalibrationError;
use crate::sequence::{run_command, ExpectedOutcome};

/// One phase of the calibration procedure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CalStep {
    /// Arm a baseline capture
    Prime,
    /// Capture and qualify the baseline
    Generate,
    /// Commit the baseline to non-volatile storage
    Store,
}

impl CalStep {
    /// The three phases in execution order
    pub const SEQUENCE: [CalStep; 3] = [CalStep::Prime, CalStep::Generate, CalStep::Store];

    /// Operation subfield for this phase's command byte
    ///
    /// Store is both command bits raised together - the device's
    /// documented encoding, distinct from prime or generate alone.
    pub fn command_bits(self) -> u8 {
        match self {
            CalStep::Prime => cmd::PRIME,
            CalStep::Generate => cmd::GENERATE,
            CalStep::Store => cmd::STORE,
        }
    }

    /// The state the device must report for this phase to pass
    pub fn expected(self) -> ExpectedOutcome {
        match self {
            CalStep::Prime => ExpectedOutcome {
                phase: FcalPhase::Primed,
                flag_mask: state::PRIMED,
            },
            CalStep::Generate => ExpectedOutcome {
                phase: FcalPhase::Generated,
                flag_mask: state::FCAL_PASS,
            },
            CalStep::Store => ExpectedOutcome {
                phase: FcalPhase::Idle,
                flag_mask: state::SEQ_DONE,
            },
        }
    }

    /// Progress label announced when the phase starts
    pub fn progress_label(self) -> &'static str {
        match self {
            CalStep::Prime => "Priming",
            CalStep::Generate => "Generating",
            CalStep::Store => "Storing",
        }
    }
}

impl fmt::Display for CalStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalStep::Prime => f.write_str("prime"),
            CalStep::Generate => f.write_str("generate"),
            CalStep::Store => f.write_str("store"),
        }
    }
}

/// Golden reference calibration driver
///
/// Owns the transport and delay for the duration of the run; callers
/// get them back with [`GoldenRefCalibrator::release`].
pub struct GoldenRefCalibrator<T, D> {
    transport: T,
    delay: D,
    config: CalibrationConfig,
}

impl<T: Transport, D: DelayNs> GoldenRefCalibrator<T, D> {
    /// Create a calibrator with the default timing configuration
    pub fn new(transport: T, delay: D) -> Self {
        Self::with_config(transport, delay, CalibrationConfig::default())
    }

    /// Create a calibrator with explicit timing configuration
    pub fn with_config(transport: T, delay: D, config: CalibrationConfig) -> Self {
        Self {
            transport,
            delay,
            config,
        }
    }

    /// Get the active configuration
    pub fn config(&self) -> &CalibrationConfig {
        &self.config
    }

    /// Give the transport and delay back
    pub fn release(self) -> (T, D) {
        (self.transport, self.delay)
    }

    /// Run the full golden reference calibration procedure
    ///
    /// Clears the message backlog, locates the golden references
    /// object, then primes, generates and stores. Returns on the first
    /// failure with the failing step (and, where the device answered,
    /// the decoded state) attached.
    pub fn run(&mut self) -> Result<(), CalibrationError<T::Error>> {
        self.transport
            .reset_messages()
            .map_err(CalibrationError::Transport)?;

        let address = self
            .transport
            .object_address(SPT_GOLDEN_REFERENCES, self.config.instance)
            .ok_or(CalibrationError::ObjectNotFound)?;

        for step in CalStep::SEQUENCE {
            #[cfg(feature = "defmt")]
            defmt::info!("{=str}", step.progress_label());

            run_command(
                &mut self.transport,
                &mut self.delay,
                &self.config,
                address,
                step.command_bits(),
                step.expected(),
            )
            .map_err(|err| CalibrationError::from_step(step, err))?;
        }

        #[cfg(feature = "defmt")]
        defmt::info!("golden references stored");
        Ok(())
    }
}

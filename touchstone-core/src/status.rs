//! Status byte decoding
//!
//! Both status sources deliver a single byte of independent flags; the
//! golden references byte additionally carries a 2-bit sequence phase.
//! Decoding is pure and total - every byte value maps to a valid state.
//! Past this boundary the raw integer is only kept for diagnostics and
//! mask checks; control decisions read the named fields.

use core::fmt;

use crate::objects::{state, t6};

/// Sequence phase of the golden references object
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FcalPhase {
    /// No sequence in progress
    Idle,
    /// Primed, waiting for generate
    Primed,
    /// Baseline generated, waiting for store
    Generated,
    /// Both phase bits set - reserved by the firmware
    Reserved,
}

impl FcalPhase {
    /// Decode the 2-bit phase field from a status byte
    pub fn from_bits(byte: u8) -> Self {
        match byte & state::PHASE_MASK {
            0 => FcalPhase::Idle,
            state::PRIMED => FcalPhase::Primed,
            state::GENERATED => FcalPhase::Generated,
            _ => FcalPhase::Reserved,
        }
    }
}

/// Decoded golden references status byte
///
/// Constructed fresh from each message, never mutated. The raw byte is
/// retained so callers can log it and check expectation masks against
/// the exact bits the device sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CalibrationState {
    /// Raw status byte as received
    pub raw: u8,
    /// Stored reference data failed its integrity check
    pub bad_stored_data: bool,
    /// Current sequence phase
    pub phase: FcalPhase,
    /// Command issued out of sequence
    pub sequence_error: bool,
    /// Firmware-side sequence timeout
    pub sequence_timeout: bool,
    /// Store sequence completed
    pub sequence_done: bool,
    /// Field calibration passed quality checks
    pub fcal_pass: bool,
    /// Field calibration rejected by firmware
    pub fcal_fail: bool,
}

impl CalibrationState {
    /// Decode a raw status byte
    pub fn from_byte(byte: u8) -> Self {
        Self {
            raw: byte,
            bad_stored_data: byte & state::BAD_STORED_DATA != 0,
            phase: FcalPhase::from_bits(byte),
            sequence_error: byte & state::SEQ_ERROR != 0,
            sequence_timeout: byte & state::SEQ_TIMEOUT != 0,
            sequence_done: byte & state::SEQ_DONE != 0,
            fcal_pass: byte & state::FCAL_PASS != 0,
            fcal_fail: byte & state::FCAL_FAIL != 0,
        }
    }

    /// Check whether the firmware reported a sequencing fault
    pub fn sequence_fault(&self) -> bool {
        self.sequence_error || self.sequence_timeout
    }
}

impl fmt::Display for CalibrationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02X}", self.raw)?;
        if self.fcal_fail {
            f.write_str(" FCALFAIL")?;
        }
        if self.fcal_pass {
            f.write_str(" FCALPASS")?;
        }
        if self.sequence_done {
            f.write_str(" FCALSEQDONE")?;
        }
        if self.sequence_timeout {
            f.write_str(" FCALSEQTO")?;
        }
        if self.sequence_error {
            f.write_str(" FCALSEQERR")?;
        }
        match self.phase {
            FcalPhase::Idle => f.write_str(" Idle")?,
            FcalPhase::Primed => f.write_str(" Primed")?,
            FcalPhase::Generated => f.write_str(" Generated")?,
            FcalPhase::Reserved => f.write_str(" Reserved")?,
        }
        if self.bad_stored_data {
            f.write_str(" BADSTOREDATA")?;
        }
        Ok(())
    }
}

/// Decoded command processor status byte
///
/// Informational only: the calibration engine logs these but never
/// bases control decisions on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ControllerStatus {
    /// Raw status byte as received
    pub raw: u8,
    /// Checksum / communication error
    pub comms_error: bool,
    /// Configuration error
    pub config_error: bool,
    /// Touch surface calibration in progress
    pub calibrating: bool,
    /// Signal acquisition error
    pub signal_error: bool,
    /// Acquisition cycle overflow
    pub overflow: bool,
    /// Device reset occurred
    pub reset_occurred: bool,
}

impl ControllerStatus {
    /// Decode a raw status byte
    pub fn from_byte(byte: u8) -> Self {
        Self {
            raw: byte,
            comms_error: byte & t6::COMS_ERROR != 0,
            config_error: byte & t6::CFG_ERROR != 0,
            calibrating: byte & t6::CALIBRATING != 0,
            signal_error: byte & t6::SIG_ERROR != 0,
            overflow: byte & t6::OVERFLOW != 0,
            reset_occurred: byte & t6::RESET != 0,
        }
    }

    /// Check whether any error condition is flagged
    pub fn has_fault(&self) -> bool {
        self.comms_error || self.config_error || self.signal_error || self.overflow
    }
}

impl fmt::Display for ControllerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02X}", self.raw)?;
        if self.comms_error {
            f.write_str(" COMSERR")?;
        }
        if self.config_error {
            f.write_str(" CFGERR")?;
        }
        if self.calibrating {
            f.write_str(" CAL")?;
        }
        if self.signal_error {
            f.write_str(" SIGERR")?;
        }
        if self.overflow {
            f.write_str(" OFL")?;
        }
        if self.reset_occurred {
            f.write_str(" RESET")?;
        }
        Ok(())
    }
}

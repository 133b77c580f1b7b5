//! Object type numbers and register layout
//!
//! Object numbering follows the controller's information block: every
//! capability is an object identified by a type number, and report ids
//! in inbound messages map back to the object that produced them.

/// Command processor object (T6) - reports global device status
pub const GEN_COMMAND_PROCESSOR: u8 = 6;

/// Golden references object (T66) - owns baseline capture and storage
pub const SPT_GOLDEN_REFERENCES: u8 = 66;

/// Offset of the control register within the golden references object
pub const GR_CTRL: u16 = 0;

/// Maximum inbound message length in bytes, report id included
pub const MAX_MESSAGE_LEN: usize = 10;

/// Golden references control register bits
pub mod cmd {
    /// Enable the golden references capability
    pub const ENABLE: u8 = 1 << 0;
    /// Enable status reporting from the object
    pub const REPORT_ENABLE: u8 = 1 << 1;
    /// Prime: begin a baseline capture sequence
    pub const PRIME: u8 = 1 << 2;
    /// Generate: capture and qualify the baseline
    pub const GENERATE: u8 = 1 << 3;
    /// Store: commit the baseline to non-volatile storage
    ///
    /// The device's documented convention is that both command bits
    /// raised together mean "store", not "redo prime and generate".
    pub const STORE: u8 = PRIME | GENERATE;
    /// Mask covering the command subfield
    pub const COMMAND_MASK: u8 = STORE;
    /// Re-check stored references against baseline on init
    pub const TEST_ON_INIT: u8 = 1 << 4;
    /// Re-check stored references after each calibration
    pub const TEST_ON_CAL: u8 = 1 << 5;
}

/// Golden references status byte bits
pub mod state {
    /// Stored reference data failed its integrity check
    pub const BAD_STORED_DATA: u8 = 1 << 0;
    /// Sequence phase: primed
    pub const PRIMED: u8 = 1 << 1;
    /// Sequence phase: generated
    pub const GENERATED: u8 = 1 << 2;
    /// Mask covering the 2-bit sequence phase
    pub const PHASE_MASK: u8 = PRIMED | GENERATED;
    /// Command issued out of sequence
    pub const SEQ_ERROR: u8 = 1 << 3;
    /// Firmware-side sequence timeout
    pub const SEQ_TIMEOUT: u8 = 1 << 4;
    /// Store sequence completed
    pub const SEQ_DONE: u8 = 1 << 5;
    /// Field calibration passed quality checks
    pub const FCAL_PASS: u8 = 1 << 6;
    /// Field calibration rejected by firmware
    pub const FCAL_FAIL: u8 = 1 << 7;
}

/// Command processor status byte bits
pub mod t6 {
    /// Checksum / communication error
    pub const COMS_ERROR: u8 = 1 << 2;
    /// Configuration error
    pub const CFG_ERROR: u8 = 1 << 3;
    /// Touch surface calibration in progress
    pub const CALIBRATING: u8 = 1 << 4;
    /// Signal acquisition error
    pub const SIG_ERROR: u8 = 1 << 5;
    /// Acquisition cycle overflow
    pub const OVERFLOW: u8 = 1 << 6;
    /// Device reset occurred
    pub const RESET: u8 = 1 << 7;
}

//! Inbound message classification
//!
//! The controller multiplexes status reports from every object onto one
//! message queue. Classification keys on the source object type and
//! decodes the payload into the matching status variant. Adding a new
//! source means adding a variant and an arm here; the poll loop never
//! changes.

use crate::objects::{GEN_COMMAND_PROCESSOR, SPT_GOLDEN_REFERENCES};
use crate::status::{CalibrationState, ControllerStatus};

/// A classified status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DeviceMessage {
    /// Status report from the golden references object
    Calibration(CalibrationState),
    /// Status report from the command processor object
    CommandProcessor(ControllerStatus),
    /// Message from a source the calibration engine does not handle
    Other,
}

/// Classify a message by its source object type
///
/// `payload` is the message body after the report id; its first byte is
/// the source's status byte. Messages with an empty payload carry
/// nothing to decode and classify as [`DeviceMessage::Other`].
pub fn classify(object_type: u8, payload: &[u8]) -> DeviceMessage {
    let Some(&status) = payload.first() else {
        return DeviceMessage::Other;
    };

    match object_type {
        SPT_GOLDEN_REFERENCES => DeviceMessage::Calibration(CalibrationState::from_byte(status)),
        GEN_COMMAND_PROCESSOR => DeviceMessage::CommandProcessor(ControllerStatus::from_byte(status)),
        _ => DeviceMessage::Other,
    }
}

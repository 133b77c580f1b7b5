//! Device transport trait
//!
//! maXTouch-class controllers expose a register map partitioned into
//! objects, and deliver asynchronous status reports through a message
//! processor. The transport owns both: register access and the inbound
//! message queue, plus the object/report-id tables read from the
//! information block at enumeration time.

/// Transport to a touch sensor controller
///
/// Implementations handle the specific link (i2c-dev, HID-over-i2c,
/// a test double, ...). The calibration engine never caches addresses
/// or handles across calls; it goes through this trait every time.
pub trait Transport {
    /// Error type for transport operations
    type Error;

    /// Write raw bytes to a device register address
    fn write_register(&mut self, address: u16, data: &[u8]) -> Result<(), Self::Error>;

    /// Number of inbound messages currently queued
    ///
    /// Non-blocking: returns whatever has arrived so far, possibly zero.
    fn message_count(&mut self) -> Result<usize, Self::Error>;

    /// Read the next queued message into `buf`
    ///
    /// The first byte of a message is its report id. Returns the number
    /// of bytes read; zero means nothing was available.
    fn read_message(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error>;

    /// Discard any pending message backlog
    fn reset_messages(&mut self) -> Result<(), Self::Error>;

    /// Map a report id to the object type number that produced it
    fn report_source(&self, report_id: u8) -> u8;

    /// Register base address of an object instance
    ///
    /// Returns `None` when the object is not present on this device.
    fn object_address(&self, object_type: u8, instance: u8) -> Option<u16>;
}

//! Transport abstraction
//!
//! The trait here defines the interface between the calibration engine
//! and whatever actually moves bytes to and from the controller
//! (i2c-dev, sysfs, a bus simulator, ...).

pub mod transport;

pub use transport::Transport;

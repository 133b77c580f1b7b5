//! Board-agnostic core types for golden reference calibration
//!
//! This crate contains everything the calibration engine needs that does
//! not depend on a specific transport implementation:
//!
//! - Transport abstraction trait (register writes, message queue, object table)
//! - Object type numbers and register bit layouts
//! - Status byte decoding into typed bitfields
//! - Inbound message classification
//! - Tunable configuration with compatibility defaults

#![no_std]
#![deny(unsafe_code)]

// Host-side tests run with std (proptest needs it)
#[cfg(test)]
extern crate std;

pub mod config;
pub mod message;
pub mod objects;
pub mod status;
pub mod traits;

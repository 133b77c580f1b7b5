//! Calibration engine configuration

/// Tunables for a golden reference calibration run
///
/// The defaults match the controller's characterization: a 1 second
/// poll interval and a 30 second per-command response window.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CalibrationConfig {
    /// Sleep between message queue drain attempts (ms)
    pub poll_interval_ms: u32,
    /// How long to wait for a confirmation after each command (ms)
    ///
    /// A command whose confirmation does not arrive within this window
    /// fails the whole run; the timeout is not a retry trigger.
    pub response_timeout_ms: u32,
    /// Which golden references object instance to address
    pub instance: u8,
}

impl Default for CalibrationConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: 1_000,
            response_timeout_ms: 30_000,
            instance: 0,
        }
    }
}

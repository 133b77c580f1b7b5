//! Message poller
//!
//! Waits for a status report from the golden references object while
//! the command issued to it is being processed. Draining the queue is
//! non-blocking; the poller sleeps a configured interval between drain
//! attempts and gives up once the response window is exhausted.
//!
//! Messages are handled in queue order within a batch, and batches are
//! drained in arrival order, so the first calibration status seen is
//! the first one the device sent after the command.

use embedded_hal::delay::DelayNs;

use touchstone_core::config::CalibrationConfig;
use touchstone_core::message::{classify, DeviceMessage};
use touchstone_core::objects::MAX_MESSAGE_LEN;
use touchstone_core::status::CalibrationState;
use touchstone_core::traits::Transport;

use crate::error::PollError;

/// Wait for the next golden references status report
///
/// Command processor reports seen while waiting are logged and skipped;
/// reports from any other source are ignored. Returns the first
/// calibration status decoded, or [`PollError::Timeout`] once
/// `config.response_timeout_ms` has elapsed without one.
pub fn await_calibration_state<T: Transport, D: DelayNs>(
    transport: &mut T,
    delay: &mut D,
    config: &CalibrationConfig,
) -> Result<CalibrationState, PollError<T::Error>> {
    let mut buf = [0u8; MAX_MESSAGE_LEN];
    let mut elapsed_ms: u32 = 0;

    loop {
        if elapsed_ms > config.response_timeout_ms {
            #[cfg(feature = "defmt")]
            defmt::warn!("timeout waiting for calibration status");
            return Err(PollError::Timeout);
        }

        let count = transport.message_count().map_err(PollError::Transport)?;
        for _ in 0..count {
            let len = transport.read_message(&mut buf).map_err(PollError::Transport)?;
            // Do not trust the transport to respect the buffer size
            let len = len.min(buf.len());
            if len == 0 {
                continue;
            }

            let source = transport.report_source(buf[0]);
            #[cfg(feature = "defmt")]
            defmt::debug!("received message from T{}", source);

            match classify(source, &buf[1..len]) {
                DeviceMessage::Calibration(state) => {
                    #[cfg(feature = "defmt")]
                    defmt::debug!("T66 message: {=[u8]:x}", &buf[1..len]);
                    #[cfg(feature = "defmt")]
                    defmt::info!("T66 state: {}", state);
                    return Ok(state);
                }
                DeviceMessage::CommandProcessor(_status) => {
                    #[cfg(feature = "defmt")]
                    defmt::info!("T6 status: {}", _status);
                }
                DeviceMessage::Other => {}
            }
        }

        delay.delay_ms(config.poll_interval_ms);
        elapsed_ms = elapsed_ms.saturating_add(config.poll_interval_ms);
    }
}

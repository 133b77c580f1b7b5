//! Test doubles for the transport and delay seams

use embedded_hal::delay::DelayNs;
use heapless::{Deque, Vec};

use touchstone_core::objects::{GEN_COMMAND_PROCESSOR, MAX_MESSAGE_LEN, SPT_GOLDEN_REFERENCES};
use touchstone_core::traits::Transport;

/// Report id the mock maps to the command processor object
pub const RPT_T6: u8 = 0x01;
/// Report id the mock maps to the golden references object
pub const RPT_GR: u8 = 0x02;

pub type Msg = Vec<u8, MAX_MESSAGE_LEN>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockError;

impl core::fmt::Display for MockError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("mock transport error")
    }
}

/// Scripted transport double
///
/// Messages pushed with `queue_message` are available immediately.
/// Batches pushed with `script_reply` are released one batch per
/// register write, modeling the device answering each command.
#[derive(Default)]
pub struct MockTransport {
    /// Messages currently queued for draining
    pub queue: Deque<Msg, 32>,
    /// Reply batches released by successive register writes
    pub scripts: Deque<Vec<Msg, 8>, 8>,
    /// Recorded register writes
    pub writes: Vec<(u16, Msg), 16>,
    /// Number of reset_messages calls
    pub resets: usize,
    /// Address of the golden references object, if present
    pub gr_address: Option<u16>,
    /// Force register writes to fail
    pub fail_writes: bool,
    /// Force message queue access to fail
    pub fail_messages: bool,
    /// Report message lengths larger than the caller's buffer
    pub misreport_len: bool,
}

impl MockTransport {
    pub fn with_object(address: u16) -> Self {
        Self {
            gr_address: Some(address),
            ..Default::default()
        }
    }

    fn message(report_id: u8, status: u8) -> Msg {
        let mut msg = Msg::new();
        msg.push(report_id).unwrap();
        msg.push(status).unwrap();
        msg
    }

    /// Queue a message for immediate delivery
    pub fn queue_message(&mut self, report_id: u8, status: u8) {
        self.queue.push_back(Self::message(report_id, status)).unwrap();
    }

    /// Queue a zero-length message for immediate delivery
    pub fn queue_empty_message(&mut self) {
        self.queue.push_back(Msg::new()).unwrap();
    }

    /// Script a single-message reply to the next unanswered write
    pub fn script_reply(&mut self, report_id: u8, status: u8) {
        let mut batch = Vec::new();
        batch.push(Self::message(report_id, status)).unwrap();
        self.scripts.push_back(batch).unwrap();
    }

    /// Script a multi-message reply batch to the next unanswered write
    pub fn script_batch(&mut self, messages: &[(u8, u8)]) {
        let mut batch = Vec::new();
        for &(report_id, status) in messages {
            batch.push(Self::message(report_id, status)).unwrap();
        }
        self.scripts.push_back(batch).unwrap();
    }
}

impl Transport for MockTransport {
    type Error = MockError;

    fn write_register(&mut self, address: u16, data: &[u8]) -> Result<(), MockError> {
        if self.fail_writes {
            return Err(MockError);
        }
        let mut bytes = Msg::new();
        bytes.extend_from_slice(data).unwrap();
        self.writes.push((address, bytes)).unwrap();
        if let Some(batch) = self.scripts.pop_front() {
            for msg in batch {
                self.queue.push_back(msg).unwrap();
            }
        }
        Ok(())
    }

    fn message_count(&mut self) -> Result<usize, MockError> {
        if self.fail_messages {
            return Err(MockError);
        }
        Ok(self.queue.len())
    }

    fn read_message(&mut self, buf: &mut [u8]) -> Result<usize, MockError> {
        if self.fail_messages {
            return Err(MockError);
        }
        match self.queue.pop_front() {
            Some(msg) => {
                buf[..msg.len()].copy_from_slice(&msg);
                if self.misreport_len {
                    return Ok(buf.len() + 4);
                }
                Ok(msg.len())
            }
            None => Ok(0),
        }
    }

    fn reset_messages(&mut self) -> Result<(), MockError> {
        self.resets += 1;
        self.queue.clear();
        Ok(())
    }

    fn report_source(&self, report_id: u8) -> u8 {
        match report_id {
            RPT_T6 => GEN_COMMAND_PROCESSOR,
            RPT_GR => SPT_GOLDEN_REFERENCES,
            _ => 0,
        }
    }

    fn object_address(&self, object_type: u8, instance: u8) -> Option<u16> {
        if object_type == SPT_GOLDEN_REFERENCES && instance == 0 {
            self.gr_address
        } else {
            None
        }
    }
}

/// Delay double that only accounts time
#[derive(Default)]
pub struct MockDelay {
    slept_ns: u64,
}

impl MockDelay {
    pub fn slept_ms(&self) -> u64 {
        self.slept_ns / 1_000_000
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.slept_ns += ns as u64;
    }
}

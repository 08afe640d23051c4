use std::{collections::TryReserveError, fmt};

use super::symbols::{KeyCode, Modifiers};

/// Size of one boot-keyboard input report.
pub const REPORT_LEN: usize = 8;

/// Key slots in a report; the device cannot see more keys held at once.
pub const MAX_KEYS: usize = 6;

/// Polling interval of the playback device, in milliseconds.
pub const POLL_INTERVAL_MS: u64 = 12;

/// Release reports emitted after every key-down report.
const RELEASES_PER_PRESS: usize = 2;

/// One HID boot-keyboard input report:
/// `[modifiers, reserved, key0, key1, key2, key3, key4, key5]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Report([u8; REPORT_LEN]);

impl Report {
    /// All keys up.
    pub const RELEASE: Report = Report([0; REPORT_LEN]);

    /// Builds a key-down report. Keys past the sixth are dropped.
    pub fn key_down(modifiers: Modifiers, keys: &[KeyCode]) -> Self {
        let mut bytes = [0; REPORT_LEN];
        bytes[0] = modifiers.bits();
        for (slot, key) in bytes[2..].iter_mut().zip(keys) {
            *slot = *key;
        }
        Report(bytes)
    }

    pub fn modifiers(&self) -> Modifiers {
        Modifiers::from_bits_truncate(self.0[0])
    }

    pub fn keys(&self) -> &[KeyCode] {
        &self.0[2..]
    }

    pub fn is_release(&self) -> bool {
        *self == Self::RELEASE
    }

    pub const fn as_bytes(&self) -> &[u8; REPORT_LEN] {
        &self.0
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Number of idle reports that cover `ms` milliseconds, rounded to the
/// nearest poll and never less than one.
pub fn delay_frames(ms: u32) -> usize {
    let frames = (u64::from(ms) + 10) / POLL_INTERVAL_MS;
    frames.max(1) as usize
}

/// Flat concatenation of reports; its length is always a multiple of
/// [`REPORT_LEN`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompiledStream {
    bytes: Vec<u8>,
}

impl CompiledStream {
    pub const fn new() -> Self {
        Self { bytes: Vec::new() }
    }

    pub fn push(&mut self, report: Report) {
        self.bytes.extend_from_slice(report.as_bytes());
    }

    /// Key-down report followed by a full release, so that the next press of
    /// the same key registers as a new keystroke.
    pub fn press(&mut self, modifiers: Modifiers, keys: &[KeyCode]) {
        let report = Report::key_down(modifiers, keys);
        log::trace!("press {report}");
        self.push(report);
        for _ in 0..RELEASES_PER_PRESS {
            self.push(Report::RELEASE);
        }
    }

    /// Appends `frames` all-zero reports. Fails without touching the stream
    /// when the buffer cannot grow that far.
    pub fn idle(&mut self, frames: usize) -> Result<(), TryReserveError> {
        let len = frames.saturating_mul(REPORT_LEN);
        self.bytes.try_reserve_exact(len)?;
        self.bytes.resize(self.bytes.len() + len, 0);
        Ok(())
    }

    pub fn append(&mut self, other: CompiledStream) {
        self.bytes.extend(other.bytes);
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn report_count(&self) -> usize {
        self.bytes.len() / REPORT_LEN
    }

    pub fn reports(&self) -> impl Iterator<Item = Report> + '_ {
        self.bytes.chunks_exact(REPORT_LEN).map(|chunk| {
            let mut bytes = [0; REPORT_LEN];
            bytes.copy_from_slice(chunk);
            Report(bytes)
        })
    }

    /// One report per line, as 16 lowercase hex digits.
    pub fn to_hex_lines(&self) -> String {
        self.reports().map(|report| format!("{report}\n")).collect()
    }
}

//! Capturing writer for diagnostics and usage text.
//!
//! A flag set takes ownership of its output writer, so tests hand it a clone
//! of a [`SharedBuffer`] and read the captured text through the original.
//!
//! # Examples
//!
//! ```
//! use std::io::Write;
//! use autoflags_test_helpers::output::SharedBuffer;
//!
//! let buffer = SharedBuffer::default();
//! let mut writer = buffer.clone();
//! writer.write_all(b"Usage of app:\n").unwrap();
//! assert_eq!(buffer.contents(), "Usage of app:\n");
//! ```

use std::io;
use std::sync::Arc;

use parking_lot::Mutex;


/// Cloneable in-memory writer; every clone appends to the same bytes.
#[derive(Debug, Default, Clone)]
pub struct SharedBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    /// Returns everything written so far, replacing invalid UTF-8.
    #[must_use]
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.bytes.lock()).into_owned()
    }

    /// Discards everything written so far.
    pub fn clear(&self) {
        self.bytes.lock().clear();
    }

    /// Reports whether nothing has been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.lock().is_empty()
    }
}

impl io::Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

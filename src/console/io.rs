//! Character device abstraction the shell reads from and writes to.

/// A byte-oriented console.
///
/// `read_byte` is a non-blocking poll: `None` means no data is available yet
/// and the caller retries. The shell never closes or reconfigures the device.
pub trait Console {
    /// Read one byte if one is available.
    fn read_byte(&mut self) -> Option<u8>;

    /// Write raw bytes to the device.
    fn write_bytes(&mut self, bytes: &[u8]);

    /// Writes a byte to the console.
    fn putchar(&mut self, c: u8) {
        self.write_bytes(&[c]);
    }

    /// Writes a string to the console.
    fn puts(&mut self, s: &str) {
        self.write_bytes(s.as_bytes());
    }

    /// Move the terminal cursor back `n` columns.
    fn backspaces(&mut self, n: usize) {
        for _ in 0..n {
            self.putchar(b'\x08');
        }
    }
}

impl<C: Console + ?Sized> Console for &mut C {
    fn read_byte(&mut self) -> Option<u8> {
        (**self).read_byte()
    }

    fn write_bytes(&mut self, bytes: &[u8]) {
        (**self).write_bytes(bytes)
    }
}

//! Console print macros.
//!
//! Output is formatted into a fixed-size stack buffer and handed to the
//! console in chunks, so printing never allocates.

use core::fmt::{self, Write};

use super::io::Console;

/// Buffer size for formatting output before sending it to the console.
const PRINT_BUFFER_SIZE: usize = 128;

/// A printer that formats into a fixed-size buffer, then flushes to the console.
struct BufferedPrinter<'a> {
    console: &'a mut dyn Console,
    buffer: [u8; PRINT_BUFFER_SIZE],
    pos: usize,
}

impl<'a> BufferedPrinter<'a> {
    fn new(console: &'a mut dyn Console) -> Self {
        Self {
            console,
            buffer: [0; PRINT_BUFFER_SIZE],
            pos: 0,
        }
    }

    fn flush(&mut self) {
        if self.pos > 0 {
            self.console.write_bytes(&self.buffer[..self.pos]);
            self.pos = 0;
        }
    }
}

impl Write for BufferedPrinter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for &byte in s.as_bytes() {
            if self.pos >= PRINT_BUFFER_SIZE {
                self.flush();
            }
            self.buffer[self.pos] = byte;
            self.pos += 1;
        }
        Ok(())
    }
}

impl Drop for BufferedPrinter<'_> {
    fn drop(&mut self) {
        self.flush();
    }
}

pub fn _print(console: &mut dyn Console, args: fmt::Arguments) {
    let mut printer = BufferedPrinter::new(console);
    // Ignore write errors - printing should not panic
    let _ = printer.write_fmt(args);
}

/// Print formatted text to a console.
#[macro_export]
macro_rules! shell_print {
    ($console:expr, $($arg:tt)*) => ({
        $crate::console::print::_print($console, format_args!($($arg)*))
    });
}

/// Print formatted text to a console, terminated by `\r\n`.
#[macro_export]
macro_rules! shell_println {
    ($console:expr) => ($crate::shell_print!($console, "\r\n"));
    ($console:expr, $($arg:tt)*) => ($crate::shell_print!($console, "{}\r\n", format_args!($($arg)*)));
}

//! Console module - device I/O, printing, logging and the line editor.

pub mod io;

#[macro_use]
pub mod print;

pub mod auth;
pub mod history;
pub mod line;
pub mod logger;
pub mod tty;

pub use io::Console;
pub use line::{Line, LineBuffer};
pub use logger::init as init_logger;
pub use tty::{LineEditor, Terminal};

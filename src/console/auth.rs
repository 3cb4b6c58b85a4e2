//! Password gate run before the shell accepts commands.
//!
//! Typed characters are masked with `*` and backspace corrects them. The
//! comparison is a plain fixed-size buffer compare; this is a convenience
//! gate for a serial console, not a hardened login.

use crate::config::{PASSWORD_MAX, PASSWORD_MIN};
use crate::console::Console;
use crate::ShellResult;

const LOGIN_PROMPT: &str = "Password for login: ";

/// Stored password, zero-padded to `PASSWORD_MAX` bytes.
#[derive(Clone, PartialEq, Eq)]
pub struct Password {
    bytes: [u8; PASSWORD_MAX],
    len: usize,
}

impl Password {
    /// Accepts passwords of `PASSWORD_MIN..=PASSWORD_MAX` bytes.
    pub fn new(password: &str) -> ShellResult<Self> {
        let len = password.len();
        anyhow::ensure!(
            (PASSWORD_MIN..=PASSWORD_MAX).contains(&len),
            "password must be {}..={} bytes, got {}",
            PASSWORD_MIN,
            PASSWORD_MAX,
            len
        );
        let mut bytes = [0; PASSWORD_MAX];
        bytes[..len].copy_from_slice(password.as_bytes());
        Ok(Self { bytes, len })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    fn matches(&self, typed: &[u8; PASSWORD_MAX]) -> bool {
        self.bytes == *typed
    }
}

impl core::fmt::Debug for Password {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Password(****)")
    }
}

/// Outcome of one byte fed to the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthEvent {
    /// More input needed.
    Pending,
    Granted,
    /// Wrong password; input was reset for another attempt.
    Denied,
}

/// Masked password entry.
pub struct PasswordPrompt {
    typed: [u8; PASSWORD_MAX],
    len: usize,
}

impl PasswordPrompt {
    pub const fn new() -> Self {
        Self {
            typed: [0; PASSWORD_MAX],
            len: 0,
        }
    }

    /// Process one byte of password input.
    pub fn feed(&mut self, c: u8, password: &Password, console: &mut dyn Console) -> AuthEvent {
        match c {
            b' '..=b'~' if self.len < PASSWORD_MAX => {
                self.typed[self.len] = c;
                self.len += 1;
                console.putchar(b'*');
            }
            0x08 | 0x7F if self.len > 0 => {
                self.len -= 1;
                self.typed[self.len] = 0;
                console.puts("\x08 \x08");
            }
            b'\r' | b'\n' => {
                console.puts("\r\n");
                let granted = password.matches(&self.typed);
                self.reset();
                if granted {
                    return AuthEvent::Granted;
                }
                warn!("login failed");
                console.puts("Sorry, try again.\r\n");
                return AuthEvent::Denied;
            }
            _ => {}
        }
        AuthEvent::Pending
    }

    fn reset(&mut self) {
        self.typed = [0; PASSWORD_MAX];
        self.len = 0;
    }
}

impl Default for PasswordPrompt {
    fn default() -> Self {
        Self::new()
    }
}

/// Block until `password` is typed on `console`. Loops forever on mismatch.
pub fn wait_auth(console: &mut dyn Console, password: &Password) {
    let mut prompt = PasswordPrompt::new();
    console.puts(LOGIN_PROMPT);
    loop {
        let Some(c) = console.read_byte() else {
            core::hint::spin_loop();
            continue;
        };
        match prompt.feed(c, password, console) {
            AuthEvent::Granted => return,
            AuthEvent::Denied => console.puts(LOGIN_PROMPT),
            AuthEvent::Pending => {}
        }
    }
}

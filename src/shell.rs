//! Shell session: owns the console, the command registry and the line
//! editor, and runs the read-edit-dispatch loop.

use crate::config::{CMD_MAX, CONSOLEBUF_SIZE, DEFAULT_PASSWORD, DEFAULT_PROMPT};
use crate::console::auth::{self, Password};
use crate::console::{Console, Line, LineEditor, Terminal};
use crate::error::{DispatchError, ShellResult};
use crate::user::{CommandEntry, Registry};

bitflags::bitflags! {
    /// Runtime display options.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ShellMode: u8 {
        /// Echo typed input back to the console.
        const ECHO = 0x01;
        /// Print the prompt before each line.
        const PROMPT = 0x02;
    }
}

/// Options fixed when the shell is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellConfig {
    pub echo_mode: bool,
    pub prompt_mode: bool,
    /// Ask for a password before the first prompt.
    pub auth: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            echo_mode: true,
            prompt_mode: true,
            auth: false,
        }
    }
}

impl ShellConfig {
    fn mode(&self) -> ShellMode {
        let mut mode = ShellMode::empty();
        mode.set(ShellMode::ECHO, self.echo_mode);
        mode.set(ShellMode::PROMPT, self.prompt_mode);
        mode
    }
}

type Prompt = heapless::String<CONSOLEBUF_SIZE>;

fn prompt_str(mode: ShellMode, custom: &Option<Prompt>) -> &str {
    if !mode.contains(ShellMode::PROMPT) {
        return "";
    }
    custom.as_deref().unwrap_or(DEFAULT_PROMPT)
}

/// An interactive shell session on one console.
pub struct Shell<C: Console> {
    console: C,
    registry: Registry,
    editor: LineEditor,
    mode: ShellMode,
    prompt: Option<Prompt>,
    auth: bool,
    password: Option<Password>,
}

impl<C: Console> Shell<C> {
    /// Create a shell whose registry holds the built-in commands.
    pub fn new(console: C, config: ShellConfig) -> Self {
        Self {
            console,
            registry: Registry::new(),
            editor: LineEditor::new(),
            mode: config.mode(),
            prompt: None,
            auth: config.auth,
            password: None,
        }
    }

    /// Add a command. Must happen before [`Shell::run`].
    pub fn register(&mut self, entry: CommandEntry) -> ShellResult<()> {
        self.registry.register(entry)
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn editor(&self) -> &LineEditor {
        &self.editor
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn console_mut(&mut self) -> &mut C {
        &mut self.console
    }

    pub fn mode(&self) -> ShellMode {
        self.mode
    }

    pub fn set_echo(&mut self, echo: bool) {
        self.mode.set(ShellMode::ECHO, echo);
    }

    pub fn echo(&self) -> bool {
        self.mode.contains(ShellMode::ECHO)
    }

    pub fn set_prompt_mode(&mut self, prompt_mode: bool) {
        self.mode.set(ShellMode::PROMPT, prompt_mode);
    }

    pub fn prompt_mode(&self) -> bool {
        self.mode.contains(ShellMode::PROMPT)
    }

    /// Replace the default prompt.
    pub fn set_prompt(&mut self, prompt: &str) -> ShellResult<()> {
        let mut custom = Prompt::new();
        custom.push_str(prompt).map_err(|_| {
            anyhow::anyhow!(
                "prompt too long: {} bytes, at most {}",
                prompt.len(),
                CONSOLEBUF_SIZE
            )
        })?;
        self.prompt = Some(custom);
        Ok(())
    }

    /// Go back to the default prompt.
    pub fn clear_prompt(&mut self) {
        self.prompt = None;
    }

    /// Prompt as printed, empty when prompt mode is off.
    pub fn prompt(&self) -> &str {
        prompt_str(self.mode, &self.prompt)
    }

    pub fn set_password(&mut self, password: &str) -> ShellResult<()> {
        self.password = Some(Password::new(password)?);
        Ok(())
    }

    pub fn password(&self) -> Option<&Password> {
        self.password.as_ref()
    }

    /// Authenticate if enabled, then print the first prompt.
    pub fn start(&mut self) {
        info!(
            "shell started: {} commands, echo={}, prompt={}",
            self.registry.len(),
            self.echo(),
            self.prompt_mode()
        );

        if self.auth {
            if self.password.is_none() {
                match Password::new(DEFAULT_PASSWORD) {
                    Ok(password) => self.password = Some(password),
                    Err(err) => {
                        error!("default password rejected: {}", err);
                        shell_println!(&mut self.console, "Shell password set failed.");
                    }
                }
            }
            if let Some(password) = &self.password {
                auth::wait_auth(&mut self.console, password);
                info!("login accepted");
            }
        }

        self.console.puts("\r\n");
        self.console.puts(prompt_str(self.mode, &self.prompt));
    }

    /// Feed one input byte. Returns the dispatch result when a line was submitted.
    pub fn process_byte(&mut self, c: u8) -> Option<Result<i32, DispatchError>> {
        let mut term = Terminal {
            console: &mut self.console,
            registry: &self.registry,
            prompt: prompt_str(self.mode, &self.prompt),
            echo: self.mode.contains(ShellMode::ECHO),
        };
        let mut line = self.editor.feed(c, &mut term)?;
        let result = self.registry.execute(&mut line, &mut self.console);
        self.console.puts(prompt_str(self.mode, &self.prompt));
        Some(result)
    }

    /// Process one byte if the console has one.
    pub fn poll(&mut self) -> Option<Result<i32, DispatchError>> {
        let c = self.console.read_byte()?;
        self.process_byte(c)
    }

    /// Dispatch a line directly, bypassing the editor and history.
    pub fn exec(&mut self, line: &str) -> Result<i32, DispatchError> {
        // A line reaching the capacity bound is dropped, as the editor drops it
        if line.len() >= CMD_MAX {
            trace!("discarding overlong line ({} bytes)", line.len());
            return Ok(0);
        }
        let mut buf = Line::new();
        // len < CMD_MAX, so this always fits
        let _ = buf.extend_from_slice(line.as_bytes());
        self.registry.execute(&mut buf, &mut self.console)
    }

    /// Run the shell for the rest of the program.
    pub fn run(&mut self) -> ! {
        self.start();
        loop {
            match self.console.read_byte() {
                Some(c) => {
                    let _ = self.process_byte(c);
                }
                None => core::hint::spin_loop(),
            }
        }
    }
}

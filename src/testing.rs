//! Test helpers.

use std::collections::VecDeque;

use crate::console::Console;

/// Console replaying scripted input and recording everything written.
pub struct ScriptedConsole {
    input: VecDeque<u8>,
    output: Vec<u8>,
}

impl ScriptedConsole {
    pub fn new(input: &[u8]) -> Self {
        Self {
            input: input.iter().copied().collect(),
            output: Vec::new(),
        }
    }

    pub fn push_input(&mut self, input: &[u8]) {
        self.input.extend(input);
    }

    /// Input bytes not read yet.
    pub fn remaining(&self) -> Vec<u8> {
        self.input.iter().copied().collect()
    }

    pub fn output(&self) -> String {
        String::from_utf8_lossy(&self.output).into_owned()
    }

    /// Return the output written so far and forget it.
    pub fn take_output(&mut self) -> String {
        let output = self.output();
        self.output.clear();
        output
    }
}

impl Console for ScriptedConsole {
    fn read_byte(&mut self) -> Option<u8> {
        self.input.pop_front()
    }

    fn write_bytes(&mut self, bytes: &[u8]) {
        self.output.extend_from_slice(bytes);
    }
}

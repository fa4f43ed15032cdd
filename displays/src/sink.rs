use std::{
    cell::RefCell,
    io::{self, Write},
};

pub trait DisplaySink {
    fn write_line(&self, line: &str) -> io::Result<()>;
}

pub struct ConsoleSink;

impl DisplaySink for ConsoleSink {
    fn write_line(&self, line: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{line}")?;
        stdout.flush()
    }
}

#[derive(Default)]
pub struct RecordingSink {
    lines: RefCell<Vec<String>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }
}

impl DisplaySink for RecordingSink {
    fn write_line(&self, line: &str) -> io::Result<()> {
        self.lines.borrow_mut().push(line.to_string());
        Ok(())
    }
}

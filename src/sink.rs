use std::io::{self, Write};

/// Destination for the lines emitted by the print buttons.
pub trait OutputSink {
    fn write_line(&mut self, line: &str);
}

/// Writes each line to standard output.
#[derive(Default)]
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn write_line(&mut self, line: &str) {
        let mut stdout = io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{line}") {
            log::error!("Failed to write to stdout: {}", e);
        }
    }
}

impl OutputSink for Vec<String> {
    fn write_line(&mut self, line: &str) {
        self.push(line.to_string());
    }
}

//! Plain-text diagram output

use std::io;

use super::diagram::{DiagramOutput, Header};
use super::utils::{FileSize, Notice, directory_line, file_line};

/// Buffers the diagram into a `String`, one `\n`-terminated line per entry.
#[derive(Debug, Default)]
pub struct TextOutput {
    buffer: String,
}

impl TextOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_string(self) -> String {
        self.buffer
    }

    fn line(&mut self, line: &str) {
        self.buffer.push_str(line);
        self.buffer.push('\n');
    }
}

impl DiagramOutput for TextOutput {
    fn header(&mut self, header: &Header) -> io::Result<()> {
        for line in header.lines() {
            self.line(&line);
        }
        self.line("");
        Ok(())
    }

    fn root(&mut self, icon: &str, name: &str) -> io::Result<()> {
        self.line(&format!("{} {}", icon, name));
        Ok(())
    }

    fn directory(
        &mut self,
        prefix: &str,
        is_last: bool,
        icon: &str,
        name: &str,
        empty: bool,
    ) -> io::Result<()> {
        self.line(&directory_line(prefix, is_last, icon, name, empty));
        Ok(())
    }

    fn file(
        &mut self,
        prefix: &str,
        is_last: bool,
        icon: &str,
        name: &str,
        size: Option<FileSize>,
    ) -> io::Result<()> {
        self.line(&file_line(prefix, is_last, icon, name, size));
        Ok(())
    }

    fn notice(&mut self, prefix: &str, notice: &Notice) -> io::Result<()> {
        self.line(&format!("{}{}", prefix, notice.text()));
        Ok(())
    }

    fn finish(&mut self, _dir_count: usize, _file_count: usize) -> io::Result<()> {
        Ok(())
    }
}

//! Streaming console output
//!
//! `ConsoleOutput` writes the diagram straight to stdout as the renderer
//! produces it, colored through termcolor.

use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use super::diagram::{DiagramOutput, Header};
use super::utils::{EMPTY_MARKER, FileSize, Notice, connector};

pub struct ConsoleOutput {
    stdout: StandardStream,
}

impl ConsoleOutput {
    pub fn new(use_color: bool) -> Self {
        let choice = if use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self {
            stdout: StandardStream::stdout(choice),
        }
    }

    fn write_colored(&mut self, text: &str, spec: &ColorSpec) -> io::Result<()> {
        self.stdout.set_color(spec)?;
        write!(self.stdout, "{}", text)?;
        self.stdout.reset()
    }
}

fn directory_spec() -> ColorSpec {
    let mut spec = ColorSpec::new();
    spec.set_fg(Some(Color::Blue)).set_bold(true);
    spec
}

impl DiagramOutput for ConsoleOutput {
    fn header(&mut self, header: &Header) -> io::Result<()> {
        let mut lines = header.lines().into_iter();
        if let Some(title) = lines.next() {
            let mut spec = ColorSpec::new();
            spec.set_bold(true);
            self.write_colored(&title, &spec)?;
            writeln!(self.stdout)?;
        }
        let mut dim = ColorSpec::new();
        dim.set_dimmed(true);
        for line in lines {
            self.write_colored(&line, &dim)?;
            writeln!(self.stdout)?;
        }
        writeln!(self.stdout)
    }

    fn root(&mut self, icon: &str, name: &str) -> io::Result<()> {
        write!(self.stdout, "{} ", icon)?;
        self.write_colored(name, &directory_spec())?;
        writeln!(self.stdout)
    }

    fn directory(
        &mut self,
        prefix: &str,
        is_last: bool,
        icon: &str,
        name: &str,
        empty: bool,
    ) -> io::Result<()> {
        write!(self.stdout, "{}{}{} ", prefix, connector(is_last), icon)?;
        self.write_colored(name, &directory_spec())?;
        if empty {
            write!(self.stdout, "{}", EMPTY_MARKER)?;
        }
        writeln!(self.stdout)
    }

    fn file(
        &mut self,
        prefix: &str,
        is_last: bool,
        icon: &str,
        name: &str,
        size: Option<FileSize>,
    ) -> io::Result<()> {
        write!(self.stdout, "{}{}{} ", prefix, connector(is_last), icon)?;
        self.write_colored(name, ColorSpec::new().set_fg(Some(Color::White)))?;

        if let Some(size) = size {
            write!(self.stdout, " ")?;
            self.write_colored(&size.label(), ColorSpec::new().set_fg(Some(Color::Green)))?;
        }
        writeln!(self.stdout)
    }

    fn notice(&mut self, prefix: &str, notice: &Notice) -> io::Result<()> {
        write!(self.stdout, "{}", prefix)?;
        let color = match notice {
            Notice::NoMatches => None,
            Notice::AccessDenied => Some(Color::Yellow),
            Notice::Error(_) => Some(Color::Red),
        };
        self.write_colored(&notice.text(), ColorSpec::new().set_fg(color))?;
        writeln!(self.stdout)
    }

    fn finish(&mut self, dir_count: usize, file_count: usize) -> io::Result<()> {
        writeln!(self.stdout)?;
        writeln!(
            self.stdout,
            "{} directories, {} files",
            dir_count, file_count
        )?;
        self.stdout.flush()
    }
}

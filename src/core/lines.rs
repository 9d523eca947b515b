//! Line-oriented view of a text file.
//!
//! Lines are edited in place by index and written back wholesale. Each line
//! keeps its original terminator, so untouched lines round-trip byte for byte.

use std::path::Path;

use crate::error::Result;
use crate::utils::{io, parser};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineBuffer {
    lines: Vec<String>,
}

impl LineBuffer {
    pub fn parse(content: &str) -> Self {
        Self {
            lines: parser::split_lines_keep_endings(content),
        }
    }

    pub fn read(path: &Path) -> Result<Self> {
        let content = io::read_file(path, "read manifest")?;
        Ok(Self::parse(&content))
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        io::write_file(path, &self.render(), "write manifest")
    }

    pub fn render(&self) -> String {
        self.lines.concat()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Line body without its terminator.
    pub fn body(&self, index: usize) -> Option<&str> {
        self.lines
            .get(index)
            .map(|line| parser::split_line_ending(line).0)
    }

    /// Index of the first line whose body contains `needle`.
    pub fn find(&self, needle: &str) -> Option<usize> {
        self.bodies().position(|body| body.contains(needle))
    }

    pub fn bodies(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(|line| parser::split_line_ending(line).0)
    }

    /// Replace the body of a line, keeping its terminator.
    ///
    /// Returns false when `index` is past the end.
    pub fn set_body(&mut self, index: usize, body: &str) -> bool {
        let Some(line) = self.lines.get_mut(index) else {
            return false;
        };
        let ending = parser::split_line_ending(line).1.to_string();
        *line = format!("{}{}", body, ending);
        true
    }

    /// Like `set_body`, but an unterminated line gains a `\n`.
    pub fn replace_line(&mut self, index: usize, body: &str) -> bool {
        let Some(line) = self.lines.get_mut(index) else {
            return false;
        };
        let ending = match parser::split_line_ending(line).1 {
            "" => "\n",
            ending => ending,
        };
        *line = format!("{}{}", body, ending);
        true
    }
}

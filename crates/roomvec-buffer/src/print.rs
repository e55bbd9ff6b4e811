//! Plain-text dump of a buffer's contents.

use std::fmt::Display;
use std::io::{self, Write};

use crate::buffer::Buffer;

/// Line written before and after the elements of a non-empty buffer.
pub const DELIMITER: &str =
    "--------------------------------------------------------------------------------";

impl<T: Display> Buffer<T> {
    /// Write the buffer to `out`: a delimiter line, one line per element
    /// in index order, a closing delimiter and a blank line.
    ///
    /// An empty buffer writes nothing at all.
    ///
    /// # Errors
    ///
    /// Propagates any error from `out`.
    pub fn print_to<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        if self.is_empty() {
            return Ok(());
        }
        writeln!(out, "{DELIMITER}")?;
        for item in self {
            writeln!(out, "{item}")?;
        }
        writeln!(out, "{DELIMITER}")?;
        writeln!(out)
    }

    /// [`print_to`](Buffer::print_to) standard output.
    ///
    /// # Errors
    ///
    /// Propagates any error writing to stdout.
    pub fn print(&self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.print_to(&mut out)?;
        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render<T: Display>(buffer: &Buffer<T>) -> String {
        let mut out = Vec::new();
        buffer.print_to(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn delimiter_is_eighty_dashes() {
        assert_eq!(DELIMITER.len(), 80);
        assert!(DELIMITER.chars().all(|c| c == '-'));
    }

    #[test]
    fn empty_buffer_prints_nothing() {
        let buffer: Buffer<i32> = Buffer::new();
        assert_eq!(render(&buffer), "");
    }

    #[test]
    fn elements_print_one_per_line() {
        let buffer = Buffer::try_from_slice(&[1, 3, 5]).unwrap();
        let expected = format!("{DELIMITER}\n1\n3\n5\n{DELIMITER}\n\n");
        assert_eq!(render(&buffer), expected);
    }

    #[test]
    fn floats_use_display_form() {
        let buffer = Buffer::try_from_slice(&[2.5f64, 10.0]).unwrap();
        let expected = format!("{DELIMITER}\n2.5\n10\n{DELIMITER}\n\n");
        assert_eq!(render(&buffer), expected);
    }
}

//! The [`Room`] record.

use std::fmt;
use std::io::{self, Write};

/// Line written before and after a room's dimensions.
pub const DELIMITER: &str =
    "-----------------------------------------------------------------------------";

/// Dimensions of a rectangular room, in metres.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Room {
    /// Length in metres.
    pub length: f64,
    /// Width in metres.
    pub width: f64,
    /// Height in metres.
    pub height: f64,
}

impl Room {
    /// Create a room from all three dimensions.
    pub fn new(length: f64, width: f64, height: f64) -> Self {
        Self {
            length,
            width,
            height,
        }
    }

    /// Reset every dimension to zero.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Floor area in square metres (`length * width`).
    pub fn area(&self) -> f64 {
        self.length * self.width
    }

    /// Volume in cubic metres (`length * width * height`).
    pub fn volume(&self) -> f64 {
        self.length * self.width * self.height
    }

    /// Write the room's dimensions, area and volume to `out`, framed by
    /// [`DELIMITER`] lines and followed by a blank line.
    ///
    /// # Errors
    ///
    /// Propagates any error from `out`.
    pub fn print_to<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{self}")
    }

    /// [`print_to`](Room::print_to) standard output.
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

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{DELIMITER}")?;
        writeln!(f, "Length: {} m", self.length)?;
        writeln!(f, "Width: {} m", self.width)?;
        writeln!(f, "Height: {} m", self.height)?;
        writeln!(f, "Area: {} m^2", self.area())?;
        writeln!(f, "Volume: {} m^3", self.volume())?;
        writeln!(f, "{DELIMITER}")?;
        writeln!(f)
    }
}

//! Text console controller
//!
//! Holds the geometry reported for the active font and emits cursor and
//! erase sequences to an output sink (standard output by default).
//!
//! ```no_run
//! use std::io::Write;
//! use console_core::Console;
//!
//! let mut console = Console::new("Lat15-TerminusBold16")?;
//! console.put_cursor_at(4, 4);
//! write!(console, "Hello World!")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::io::{self, Stdout, Write};

use log::{debug, trace};

use crate::ansi;
use crate::command::{CommandRunner, SystemRunner};
use crate::error::{ConsoleError, Result};
use crate::geometry::{parse_size, Geometry};

/// Program used to load a console font
pub const SETFONT: &str = "setfont";

/// Program used to query the size of the controlling terminal
pub const STTY: &str = "stty";

/// Controller for a character display's text console
pub struct Console<R = SystemRunner, W = Stdout> {
    geometry: Geometry,
    runner: R,
    out: W,
}

impl Console {
    /// Open the console on standard output and apply `font`.
    ///
    /// An empty `font` leaves the current font in place but still reads
    /// the console size.
    pub fn new(font: &str) -> Result<Self> {
        Self::with_runner(font, SystemRunner, io::stdout())
    }
}

impl<R: CommandRunner, W: Write> Console<R, W> {
    /// Open a console that runs commands through `runner` and writes to `out`
    pub fn with_runner(font: &str, runner: R, out: W) -> Result<Self> {
        let mut console = Self {
            geometry: Geometry::default(),
            runner,
            out,
        };
        console
            .set_font(font)
            .map_err(|source| ConsoleError::Font {
                font: font.to_string(),
                source: Box::new(source),
            })?;
        Ok(console)
    }

    /// Load `font` (unless empty) and refresh the console geometry.
    ///
    /// The stored geometry is only replaced once the new one has been read
    /// and validated; on any error the previous values are kept.
    pub fn set_font(&mut self, font: &str) -> Result<()> {
        if !font.is_empty() {
            self.runner.run(SETFONT, &[font])?;
        }

        let geometry = self.read_console_size()?;
        if !geometry.is_valid() {
            return Err(ConsoleError::InvalidGeometry {
                rows: geometry.rows,
                columns: geometry.columns,
            });
        }

        debug!(
            "Console geometry: {} rows, {} columns",
            geometry.rows, geometry.columns
        );
        self.geometry = geometry;
        Ok(())
    }

    /// Query the terminal on standard input for its size
    pub fn read_console_size(&self) -> Result<Geometry> {
        let output = self.runner.output(STTY, &["size"])?;
        parse_size(&output)
    }

    /// Number of rows supported by the current font
    pub fn rows(&self) -> i32 {
        self.geometry.rows
    }

    /// Number of columns supported by the current font
    pub fn columns(&self) -> i32 {
        self.geometry.columns
    }

    /// Rows and columns as one value
    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// Move the cursor to the 1-based position. Does nothing if the
    /// position is off the grid.
    pub fn put_cursor_at(&mut self, columns: i32, rows: i32) {
        if self.geometry.contains(columns, rows) {
            let sequence = ansi::cursor_position(rows, columns);
            self.emit(&sequence);
        } else {
            trace!("Ignoring cursor move to column {}, row {}", columns, rows);
        }
    }

    /// Hide the text cursor
    pub fn hide_cursor(&mut self) {
        self.emit(ansi::HIDE_CURSOR);
    }

    /// Show the text cursor
    pub fn show_cursor(&mut self) {
        self.emit(ansi::SHOW_CURSOR);
    }

    /// Erase the whole screen and move the cursor to (1,1)
    pub fn clear(&mut self) {
        self.emit(ansi::CLEAR_SCREEN);
    }

    /// Move to the position, then erase to the end of the line.
    ///
    /// The erase is always written. If the position is off the grid it
    /// applies wherever the cursor already was.
    pub fn clear_to_eol(&mut self, columns: i32, rows: i32) {
        self.put_cursor_at(columns, rows);
        self.emit(ansi::ERASE_TO_EOL);
    }

    /// The output sink
    pub fn output(&self) -> &W {
        &self.out
    }

    /// Consume the console, returning the output sink
    pub fn into_output(self) -> W {
        self.out
    }

    fn emit(&mut self, sequence: &str) {
        // Display control is best effort
        if let Err(e) = self
            .out
            .write_all(sequence.as_bytes())
            .and_then(|()| self.out.flush())
        {
            trace!("Failed to write {:?}: {}", sequence, e);
        }
    }
}

impl<R, W: Write> Write for Console<R, W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.out.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Runner that answers every size query with a fixed string
    struct FixedSize {
        stdout: &'static str,
        calls: RefCell<Vec<String>>,
    }

    impl FixedSize {
        fn new(stdout: &'static str) -> Self {
            Self {
                stdout,
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl CommandRunner for FixedSize {
        fn run(&self, program: &str, args: &[&str]) -> Result<()> {
            self.calls
                .borrow_mut()
                .push(format!("{} {}", program, args.join(" ")));
            Ok(())
        }

        fn output(&self, program: &str, args: &[&str]) -> Result<Vec<u8>> {
            self.calls
                .borrow_mut()
                .push(format!("{} {}", program, args.join(" ")));
            Ok(self.stdout.as_bytes().to_vec())
        }
    }

    fn console(stdout: &'static str) -> Console<FixedSize, Vec<u8>> {
        Console::with_runner("", FixedSize::new(stdout), Vec::new()).unwrap()
    }

    #[test]
    fn test_new_reads_geometry() {
        let console = console("24 48\n");
        assert_eq!(console.rows(), 24);
        assert_eq!(console.columns(), 48);
        assert_eq!(console.geometry(), Geometry::new(24, 48));
    }

    #[test]
    fn test_empty_font_skips_setfont() {
        let console = console("24 48\n");
        assert_eq!(*console.runner.calls.borrow(), vec!["stty size".to_string()]);
    }

    #[test]
    fn test_named_font_runs_setfont_first() {
        let console =
            Console::with_runner("Lat15-Terminus12x6", FixedSize::new("21 29\n"), Vec::new())
                .unwrap();
        assert_eq!(
            *console.runner.calls.borrow(),
            vec![
                "setfont Lat15-Terminus12x6".to_string(),
                "stty size".to_string()
            ]
        );
        assert_eq!(console.geometry(), Geometry::new(21, 29));
    }

    #[test]
    fn test_put_cursor_at() {
        let mut console = console("24 48\n");
        console.put_cursor_at(4, 4);
        assert_eq!(console.output().as_slice(), b"\x1b[4;4H");
    }

    #[test]
    fn test_put_cursor_at_is_row_then_column() {
        let mut console = console("24 48\n");
        console.put_cursor_at(40, 2);
        assert_eq!(console.output().as_slice(), b"\x1b[2;40H");
    }

    #[test]
    fn test_put_cursor_out_of_range_writes_nothing() {
        let mut console = console("24 48\n");
        console.put_cursor_at(0, 4);
        console.put_cursor_at(49, 4);
        console.put_cursor_at(4, 0);
        console.put_cursor_at(4, 25);
        console.put_cursor_at(-1, -1);
        assert!(console.output().is_empty());
    }

    #[test]
    fn test_cursor_visibility_and_clear() {
        let mut console = console("24 48\n");
        console.hide_cursor();
        console.show_cursor();
        console.clear();
        assert_eq!(
            console.into_output(),
            b"\x1b[?25l\x1b[?25h\x1b[2J\x1b[H".to_vec()
        );
    }

    #[test]
    fn test_clear_to_eol() {
        let mut console = console("24 48\n");
        console.clear_to_eol(10, 3);
        assert_eq!(console.output().as_slice(), b"\x1b[3;10H\x1b[K");
    }

    #[test]
    fn test_clear_to_eol_out_of_range_still_erases() {
        let mut console = console("24 48\n");
        console.clear_to_eol(100, 3);
        assert_eq!(console.output().as_slice(), b"\x1b[K");
    }

    #[test]
    fn test_text_goes_to_same_sink() {
        let mut console = console("24 48\n");
        console.put_cursor_at(4, 4);
        write!(console, "Hello World!").unwrap();
        assert_eq!(console.output().as_slice(), b"\x1b[4;4HHello World!");
    }
}

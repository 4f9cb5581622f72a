//! Execution of lcdcon subcommands

use std::error::Error;
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use console_core::fonts::list_fonts;
use console_core::{CommandRunner, Console};

use crate::config::{Command, Config, Visibility};

/// Run `command` against the real console on standard output
pub fn run(command: &Command, config: &Config) -> Result<(), Box<dyn Error>> {
    if *command == Command::Fonts {
        let fonts = list_fonts(&config.font_dir).map_err(|e| {
            format!("cannot read font directory {}: {}", config.font_dir.display(), e)
        })?;
        let mut stdout = io::stdout().lock();
        for font in fonts {
            writeln!(stdout, "{}", font)?;
        }
        return Ok(());
    }

    let mut console = Console::new(&config.font)?;
    log::debug!(
        "Opened console with font {:?}: {} rows, {} columns",
        config.font,
        console.rows(),
        console.columns()
    );
    drive(command, &mut console)?;
    Ok(())
}

/// Apply a console command to an open console
pub fn drive<R: CommandRunner, W: Write>(
    command: &Command,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    match command {
        Command::Size => {
            let (rows, columns) = (console.rows(), console.columns());
            writeln!(console, "{} {}", rows, columns)?;
        }
        // Listed without opening the console
        Command::Fonts => {}
        Command::Clear => console.clear(),
        Command::Cursor { visibility } => match visibility {
            Visibility::Show => console.show_cursor(),
            Visibility::Hide => console.hide_cursor(),
        },
        Command::Move { column, row } => console.put_cursor_at(*column, *row),
        Command::EraseLine { column, row } => console.clear_to_eol(*column, *row),
        Command::Print { column, row, text } => {
            console.put_cursor_at(*column, *row);
            write!(console, "{}", text.join(" "))?;
        }
        Command::Demo { seconds } => {
            console.clear();
            console.hide_cursor();
            console.put_cursor_at(4, 4);
            write!(console, "Hello World!")?;
            console.flush()?;
            thread::sleep(Duration::from_secs(*seconds));
            console.show_cursor();
        }
    }
    console.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use console_core::Result;

    struct FakeTty;

    impl CommandRunner for FakeTty {
        fn run(&self, _program: &str, _args: &[&str]) -> Result<()> {
            Ok(())
        }

        fn output(&self, _program: &str, _args: &[&str]) -> Result<Vec<u8>> {
            Ok(b"24 48\n".to_vec())
        }
    }

    fn drive_output(command: Command) -> Vec<u8> {
        let mut console = Console::with_runner("", FakeTty, Vec::new()).unwrap();
        drive(&command, &mut console).unwrap();
        console.into_output()
    }

    #[test]
    fn test_size() {
        assert_eq!(drive_output(Command::Size), b"24 48\n");
    }

    #[test]
    fn test_fonts_writes_nothing_to_console() {
        assert!(drive_output(Command::Fonts).is_empty());
    }

    #[test]
    fn test_cursor() {
        assert_eq!(
            drive_output(Command::Cursor {
                visibility: Visibility::Hide
            }),
            b"\x1b[?25l"
        );
        assert_eq!(
            drive_output(Command::Cursor {
                visibility: Visibility::Show
            }),
            b"\x1b[?25h"
        );
    }

    #[test]
    fn test_move_and_erase() {
        assert_eq!(
            drive_output(Command::Move { column: 4, row: 4 }),
            b"\x1b[4;4H"
        );
        assert!(drive_output(Command::Move { column: 49, row: 4 }).is_empty());
        assert_eq!(
            drive_output(Command::EraseLine { column: 1, row: 24 }),
            b"\x1b[24;1H\x1b[K"
        );
    }

    #[test]
    fn test_print() {
        let out = drive_output(Command::Print {
            column: 2,
            row: 3,
            text: vec!["Hello".to_string(), "World!".to_string()],
        });
        assert_eq!(out, b"\x1b[3;2HHello World!");
    }

    #[test]
    fn test_demo() {
        let out = drive_output(Command::Demo { seconds: 0 });
        assert_eq!(
            out,
            b"\x1b[2J\x1b[H\x1b[?25l\x1b[4;4HHello World!\x1b[?25h".to_vec()
        );
    }
}

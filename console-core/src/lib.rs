//! Console Core - text console control for character displays
//!
//! This crate drives the text console of a small Linux device's display:
//! - Loading a console font with `setfont`
//! - Reading the resulting grid size with `stty size`
//! - Moving, hiding and showing the cursor with VT100 sequences
//! - Clearing the screen or the rest of a line
//!
//! External programs are run through the [`CommandRunner`] trait so the
//! controller can be exercised without a real display.

pub mod ansi;
mod command;
mod console;
mod error;
pub mod fonts;
mod geometry;

pub use command::{CommandRunner, SystemRunner};
pub use console::{Console, SETFONT, STTY};
pub use error::{ConsoleError, ErrorKind, Result};
pub use geometry::{parse_size, Geometry};

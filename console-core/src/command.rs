//! Execution of the external commands the console depends on
//!
//! The controller never spawns processes directly; it goes through a
//! [`CommandRunner`] so that tests can substitute scripted results.

use std::io;
use std::os::fd::AsFd;
use std::process::{Command, ExitStatus, Stdio};

use log::{debug, trace};
use nix::sys::termios;

use crate::error::{ConsoleError, Result};

/// Runs external programs to completion
pub trait CommandRunner {
    /// Run `program` with `args`, succeeding only on a zero exit status.
    fn run(&self, program: &str, args: &[&str]) -> Result<()>;

    /// Run `program` with `args` attached to this process's standard input
    /// and return its captured standard output. Fails on a non-zero exit.
    fn output(&self, program: &str, args: &[&str]) -> Result<Vec<u8>>;
}

impl<T: CommandRunner + ?Sized> CommandRunner for &T {
    fn run(&self, program: &str, args: &[&str]) -> Result<()> {
        (**self).run(program, args)
    }

    fn output(&self, program: &str, args: &[&str]) -> Result<Vec<u8>> {
        (**self).output(program, args)
    }
}

/// [`CommandRunner`] backed by real child processes
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<()> {
        let command = describe(program, args);
        debug!("Running '{}'", command);

        let status = Command::new(program)
            .args(args)
            .status()
            .map_err(|source| ConsoleError::Spawn {
                command: command.clone(),
                source,
            })?;

        check_status(command, status)
    }

    fn output(&self, program: &str, args: &[&str]) -> Result<Vec<u8>> {
        let command = describe(program, args);
        debug!("Running '{}' with inherited stdin", command);
        if !stdin_is_terminal() {
            debug!("stdin is not a terminal, '{}' will likely fail", command);
        }

        // Command::output() would otherwise connect stdin to /dev/null
        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::inherit())
            .output()
            .map_err(|source| ConsoleError::Spawn {
                command: command.clone(),
                source,
            })?;

        if !output.stderr.is_empty() {
            debug!(
                "'{}' stderr: {}",
                command,
                String::from_utf8_lossy(&output.stderr).trim_end()
            );
        }
        trace!("'{}' stdout: {:?}", command, String::from_utf8_lossy(&output.stdout));

        check_status(command, output.status)?;
        Ok(output.stdout)
    }
}

fn describe(program: &str, args: &[&str]) -> String {
    let mut command = program.to_string();
    for arg in args {
        command.push(' ');
        command.push_str(arg);
    }
    command
}

fn check_status(command: String, status: ExitStatus) -> Result<()> {
    if status.success() {
        Ok(())
    } else {
        Err(ConsoleError::ExitStatus {
            command,
            code: status.code(),
        })
    }
}

fn stdin_is_terminal() -> bool {
    let stdin = io::stdin();
    termios::tcgetattr(stdin.as_fd()).is_ok()
}

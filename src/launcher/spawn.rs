//! Attached and detached child process spawning with log capture.

use std::{
    fs::File,
    io,
    path::Path,
    process::{Command, Stdio},
};

/// Spawn `program` detached from the controlling terminal, fire-and-forget.
///
/// On unix the child becomes its own session leader before exec, so a hangup
/// delivered to the invoking session never reaches it. stdout and stderr are
/// appended to `log_file`; stdin is closed. The returned pid is informational
/// only, no handle is retained.
pub fn spawn_detached(program: &Path, log_file: &File) -> io::Result<u32> {
    let mut command = Command::new(program);
    command
        .stdin(Stdio::null())
        .stdout(Stdio::from(log_file.try_clone()?))
        .stderr(Stdio::from(log_file.try_clone()?));
    detach_from_session(&mut command);
    let child = command.spawn()?;
    Ok(child.id())
}

/// Spawn `program` attached to the invoking terminal's stdin, with stdout and
/// stderr appended to `log_file`. The caller owns the child and waits on it.
pub fn spawn_attached(program: &Path, log_file: &File) -> io::Result<tokio::process::Child> {
    let mut command = tokio::process::Command::new(program);
    command
        .stdin(Stdio::inherit())
        .stdout(Stdio::from(log_file.try_clone()?))
        .stderr(Stdio::from(log_file.try_clone()?));
    command.spawn()
}

#[cfg(unix)]
fn detach_from_session(command: &mut Command) {
    use std::os::unix::process::CommandExt;

    // SAFETY: setsid is async-signal-safe and only affects the child side of
    // the fork.
    unsafe {
        command.pre_exec(|| {
            if libc::setsid() == -1 {
                return Err(io::Error::last_os_error());
            }
            Ok(())
        });
    }
}

#[cfg(not(unix))]
fn detach_from_session(_command: &mut Command) {}

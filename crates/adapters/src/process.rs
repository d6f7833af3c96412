use std::process::{Command, Stdio};

use launchpad_application::{ApplicationError, CommandRunner};
use launchpad_domain::LaunchPlan;
use tracing::debug;

#[cfg(windows)]
use std::os::windows::process::CommandExt;

/// Hands launch lines to the platform shell and returns without waiting for them.
#[derive(Debug, Default)]
pub struct ShellCommandRunner;

impl CommandRunner for ShellCommandRunner {
    fn spawn(&self, plan: &LaunchPlan) -> Result<(), ApplicationError> {
        let child = shell_command(&plan.shell_line)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|error| {
                ApplicationError::Launch(format!("failed to run `{}`: {error}", plan.shell_line))
            })?;

        debug!(pid = child.id(), shell_line = %plan.shell_line, "spawned launch command");
        Ok(())
    }
}

#[cfg(windows)]
fn shell_command(shell_line: &str) -> Command {
    let mut command = Command::new("cmd");
    // `cmd` does its own parsing; quoting the line would break `start`.
    command.arg("/C").raw_arg(shell_line);
    command
}

#[cfg(not(windows))]
fn shell_command(shell_line: &str) -> Command {
    let mut command = Command::new("sh");
    command.arg("-c").arg(shell_line);
    command
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(windows))]
    #[test]
    fn unix_lines_go_through_sh() {
        let command = shell_command("cd /tmp && ls");
        assert_eq!(command.get_program(), "sh");
        let args: Vec<_> = command.get_args().collect();
        assert_eq!(args, vec!["-c", "cd /tmp && ls"]);
    }

    #[cfg(unix)]
    #[test]
    fn spawn_runs_a_trivial_command() {
        let plan = LaunchPlan::build("true", None).expect("plan");
        ShellCommandRunner.spawn(&plan).expect("spawn should work");
    }
}

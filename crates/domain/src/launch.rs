/// Shell directive that hands a URL to the desktop's default handler.
#[cfg(windows)]
pub const URL_OPEN_DIRECTIVE: &str = "start";
#[cfg(target_os = "macos")]
pub const URL_OPEN_DIRECTIVE: &str = "open";
#[cfg(not(any(windows, target_os = "macos")))]
pub const URL_OPEN_DIRECTIVE: &str = "xdg-open";

const PLAYNITE_SCHEME: &str = "playnite://";

/// Command stored for an imported shortcut: open its launch URL.
pub fn open_url_command(launch_url: &str) -> String {
    format!("{URL_OPEN_DIRECTIVE} {launch_url}")
}

/// The shell line a catalog entry runs as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchPlan {
    pub shell_line: String,
}

impl LaunchPlan {
    /// Returns `None` for a blank command. Bare Playnite URLs, as entered by hand,
    /// get the open directive in front.
    pub fn build(command: &str, cwd: Option<&str>) -> Option<Self> {
        let command = command.trim();
        if command.is_empty() {
            return None;
        }

        let mut shell_line = String::new();
        if let Some(cwd) = cwd.map(str::trim).filter(|cwd| !cwd.is_empty()) {
            shell_line.push_str(&format!("cd {cwd} && "));
        }
        if command.starts_with(PLAYNITE_SCHEME) {
            shell_line.push_str(&open_url_command(command));
        } else {
            shell_line.push_str(command);
        }

        Some(Self { shell_line })
    }
}

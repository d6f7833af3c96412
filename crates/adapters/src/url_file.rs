use std::path::Path;

use ini::{Ini, ParseOption, Properties};
use launchpad_application::ShortcutParser;
use launchpad_domain::ShortcutDescriptor;
use tracing::debug;

const SHORTCUT_SECTION: &str = "InternetShortcut";
const ICON_KEY: &str = "IconFile";
const URL_KEY: &str = "URL";

/// Reads Windows internet shortcuts (`.url` files).
#[derive(Debug, Default)]
pub struct IniShortcutParser;

impl ShortcutParser for IniShortcutParser {
    fn parse(&self, path: &Path) -> ShortcutDescriptor {
        // Icon paths are Windows paths; backslashes must survive.
        let options = ParseOption {
            enabled_quote: false,
            enabled_escape: false,
            ..ParseOption::default()
        };

        let ini = match Ini::load_from_file_opt(path, options) {
            Ok(ini) => ini,
            Err(error) => {
                debug!(path = %path.display(), %error, "unreadable shortcut file");
                return ShortcutDescriptor::default();
            }
        };

        let Some(section) = ini.section(Some(SHORTCUT_SECTION)) else {
            debug!(path = %path.display(), "shortcut has no [InternetShortcut] section");
            return ShortcutDescriptor::default();
        };

        ShortcutDescriptor {
            icon_reference: lookup(section, ICON_KEY),
            launch_url: lookup(section, URL_KEY),
        }
    }
}

/// Key names are matched case-insensitively; an empty value counts as missing.
fn lookup(section: &Properties, key: &str) -> Option<String> {
    section
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(key))
        .map(|(_, value)| value.trim())
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

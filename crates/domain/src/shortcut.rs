use std::path::Path;

/// File extension of Playnite internet shortcuts.
pub const SHORTCUT_EXTENSION: &str = "url";

/// Subtitle stamped on every record created by the Playnite import.
pub const PLAYNITE_SUBTITLE: &str = "Playnite";

/// The two fields the importer needs out of an `[InternetShortcut]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShortcutDescriptor {
    pub icon_reference: Option<String>,
    pub launch_url: Option<String>,
}

impl ShortcutDescriptor {
    /// Returns the launch URL when both fields are present, which is what makes a
    /// shortcut importable.
    pub fn importable_url(&self) -> Option<&str> {
        match (&self.icon_reference, &self.launch_url) {
            (Some(_), Some(url)) => Some(url.as_str()),
            _ => None,
        }
    }

    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.icon_reference.is_none() {
            missing.push("IconFile");
        }
        if self.launch_url.is_none() {
            missing.push("URL");
        }
        missing
    }
}

/// Last non-empty `/`-separated segment of a launch URL. Playnite puts the game id
/// there (`playnite://playnite/start/<id>`); nothing about its format is checked.
pub fn extract_game_identifier(launch_url: &str) -> &str {
    launch_url
        .rsplit('/')
        .find(|segment| !segment.is_empty())
        .unwrap_or_default()
}

/// Display title for a shortcut file: its name without the `.url` extension.
pub fn shortcut_title(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_default();
    let suffix = format!(".{SHORTCUT_EXTENSION}");
    match name.strip_suffix(&suffix) {
        Some(stem) => stem.to_string(),
        None => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifier_is_the_trailing_segment() {
        assert_eq!(
            extract_game_identifier("playnite://start/abcd-1234"),
            "abcd-1234"
        );
        assert_eq!(extract_game_identifier("abcd-1234"), "abcd-1234");
        assert_eq!(extract_game_identifier(""), "");
    }

    #[test]
    fn identifier_ignores_trailing_slashes() {
        assert_eq!(
            extract_game_identifier("playnite://playnite/start/f00d/"),
            "f00d"
        );
        assert_eq!(extract_game_identifier("///"), "");
    }

    #[test]
    fn descriptor_needs_both_fields() {
        let full = ShortcutDescriptor {
            icon_reference: Some("C:\\icon.ico".to_string()),
            launch_url: Some("playnite://playnite/start/1".to_string()),
        };
        assert_eq!(full.importable_url(), Some("playnite://playnite/start/1"));
        assert!(full.missing_fields().is_empty());

        let no_icon = ShortcutDescriptor {
            icon_reference: None,
            ..full.clone()
        };
        assert_eq!(no_icon.importable_url(), None);
        assert_eq!(no_icon.missing_fields(), vec!["IconFile"]);

        assert_eq!(
            ShortcutDescriptor::default().missing_fields(),
            vec!["IconFile", "URL"]
        );
    }

    #[test]
    fn title_strips_only_the_shortcut_extension() {
        assert_eq!(shortcut_title(Path::new("/games/Celeste.url")), "Celeste");
        assert_eq!(
            shortcut_title(Path::new("/games/Half-Life 2.url")),
            "Half-Life 2"
        );
        assert_eq!(shortcut_title(Path::new("notes.txt")), "notes.txt");
    }
}

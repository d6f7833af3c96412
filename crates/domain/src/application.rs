use serde::{Deserialize, Serialize};

use crate::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppId(i64);

impl AppId {
    pub fn new(value: i64) -> Result<Self, DomainError> {
        if value <= 0 {
            return Err(DomainError::InvalidAppId(value));
        }
        Ok(Self(value))
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

/// A catalog entry before the store has assigned it an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewApplication {
    pub picture: Option<String>,
    pub title: String,
    pub subtitle: String,
    pub cwd: Option<String>,
    pub command: String,
}

impl NewApplication {
    /// Checks the fields a launchable entry cannot do without and folds blank
    /// optional fields into `None`.
    pub fn normalized(self) -> Result<Self, DomainError> {
        if self.title.trim().is_empty() {
            return Err(DomainError::BlankField("title"));
        }
        if self.command.trim().is_empty() {
            return Err(DomainError::BlankField("command"));
        }
        Ok(Self {
            picture: non_blank(self.picture),
            title: self.title,
            subtitle: self.subtitle,
            cwd: non_blank(self.cwd),
            command: self.command,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationRecord {
    pub id: AppId,
    pub picture: Option<String>,
    pub title: String,
    pub subtitle: String,
    pub cwd: Option<String>,
    pub command: String,
}

impl ApplicationRecord {
    pub fn from_new(id: AppId, app: NewApplication) -> Self {
        Self {
            id,
            picture: app.picture,
            title: app.title,
            subtitle: app.subtitle,
            cwd: app.cwd,
            command: app.command,
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|inner| !inner.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NewApplication {
        NewApplication {
            picture: Some("  ".to_string()),
            title: "Hades".to_string(),
            subtitle: "Steam".to_string(),
            cwd: Some(String::new()),
            command: "hades.exe".to_string(),
        }
    }

    #[test]
    fn app_id_must_be_positive() {
        assert!(AppId::new(1).is_ok());
        assert!(matches!(AppId::new(0), Err(DomainError::InvalidAppId(0))));
        assert!(matches!(AppId::new(-4), Err(DomainError::InvalidAppId(-4))));
    }

    #[test]
    fn normalized_drops_blank_optional_fields() {
        let app = sample().normalized().expect("valid");
        assert_eq!(app.picture, None);
        assert_eq!(app.cwd, None);
        assert_eq!(app.title, "Hades");
    }

    #[test]
    fn normalized_rejects_blank_title_and_command() {
        let no_title = NewApplication {
            title: " ".to_string(),
            ..sample()
        };
        assert_eq!(
            no_title.normalized(),
            Err(DomainError::BlankField("title"))
        );

        let no_command = NewApplication {
            command: String::new(),
            ..sample()
        };
        assert_eq!(
            no_command.normalized(),
            Err(DomainError::BlankField("command"))
        );
    }
}

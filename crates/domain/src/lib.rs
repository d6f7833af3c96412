mod application;
mod cover;
mod error;
mod import;
mod launch;
mod page;
mod shortcut;

pub use application::{AppId, ApplicationRecord, NewApplication};
pub use cover::{ImageDimensions, COVER_EXTENSIONS, MAX_COVER_EDGE};
pub use error::DomainError;
pub use import::{ImportEvent, ImportOutcome, ImportReport, ItemOutcome};
pub use launch::{open_url_command, LaunchPlan, URL_OPEN_DIRECTIVE};
pub use page::{PageRequest, PageWindow};
pub use shortcut::{
    extract_game_identifier, shortcut_title, ShortcutDescriptor, PLAYNITE_SUBTITLE,
    SHORTCUT_EXTENSION,
};

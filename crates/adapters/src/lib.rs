pub mod fs;
pub mod migrations;
pub mod presenters;
pub mod process;
pub mod sqlite;
pub mod url_file;

pub use fs::{read_image_dimensions, FsCoverImageSelector, WalkdirShortcutScanner};
pub use presenters::{
    present_application, present_application_row, present_import_event,
    present_import_event_json, present_page_footer, present_page_json,
};
pub use process::ShellCommandRunner;
pub use sqlite::SqliteCatalogRepository;
pub use url_file::IniShortcutParser;

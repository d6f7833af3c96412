mod error;
mod ports;
mod service;
mod use_cases;

pub use error::ApplicationError;
pub use ports::{
    CatalogRepository, CommandRunner, CoverImageSelector, ProgressSink, ShortcutParser,
    ShortcutScanner,
};
pub use service::ApplicationService;
pub use use_cases::{
    ApplicationCard, ApplicationPage, BootstrapCatalogCommand, EditApplicationCommand,
    ImportShortcutsCommand, LaunchApplicationCommand, ListApplicationsCommand,
    RegisterApplicationCommand, ShowApplicationCommand,
};

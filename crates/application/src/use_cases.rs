use std::path::PathBuf;

use launchpad_domain::{AppId, ApplicationRecord, NewApplication, PageRequest, PageWindow};

#[derive(Debug, Clone, Default)]
pub struct BootstrapCatalogCommand;

#[derive(Debug, Clone)]
pub struct ImportShortcutsCommand {
    pub shortcuts_dir: PathBuf,
    pub image_root: PathBuf,
}

#[derive(Debug, Clone)]
pub struct RegisterApplicationCommand {
    pub application: NewApplication,
}

#[derive(Debug, Clone)]
pub struct EditApplicationCommand {
    pub id: AppId,
    pub application: NewApplication,
}

#[derive(Debug, Clone, Copy)]
pub struct ShowApplicationCommand {
    pub id: AppId,
}

#[derive(Debug, Clone)]
pub struct ListApplicationsCommand {
    pub page: PageRequest,
    pub fallback_poster: String,
}

#[derive(Debug, Clone, Copy)]
pub struct LaunchApplicationCommand {
    pub id: AppId,
}

/// A record as the grid shows it, with the poster already resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationCard {
    pub record: ApplicationRecord,
    pub poster: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationPage {
    pub cards: Vec<ApplicationCard>,
    pub window: PageWindow,
    pub total_items: usize,
}

use std::path::{Path, PathBuf};

use launchpad_domain::{
    AppId, ApplicationRecord, ImportEvent, LaunchPlan, NewApplication, ShortcutDescriptor,
};

use crate::ApplicationError;

pub trait CatalogRepository {
    fn initialize(&self) -> Result<(), ApplicationError>;

    fn insert_application(&self, app: &NewApplication) -> Result<AppId, ApplicationError>;

    /// Replaces every editable field. Fails with `NotFound` for an unknown id.
    fn update_application(&self, id: AppId, app: &NewApplication) -> Result<(), ApplicationError>;

    fn find_application_by_id(
        &self,
        id: AppId,
    ) -> Result<Option<ApplicationRecord>, ApplicationError>;

    fn count_applications(&self) -> Result<usize, ApplicationError>;

    fn list_applications(
        &self,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<ApplicationRecord>, ApplicationError>;
}

pub trait ShortcutScanner {
    /// Shortcut files directly inside `folder`, in directory listing order. A folder
    /// that does not exist lists as empty.
    fn list_shortcuts(&self, folder: &Path) -> Vec<PathBuf>;
}

pub trait ShortcutParser {
    /// Never fails: anything unreadable comes back as absent fields.
    fn parse(&self, path: &Path) -> ShortcutDescriptor;
}

pub trait CoverImageSelector {
    fn select_cover(&self, game_identifier: &str, image_root: &Path) -> Option<PathBuf>;
}

pub trait CommandRunner {
    fn spawn(&self, plan: &LaunchPlan) -> Result<(), ApplicationError>;
}

pub trait ProgressSink {
    fn report(&mut self, event: ImportEvent);
}

impl<F> ProgressSink for F
where
    F: FnMut(ImportEvent),
{
    fn report(&mut self, event: ImportEvent) {
        self(event)
    }
}

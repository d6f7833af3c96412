use std::path::Path;

use launchpad_domain::{
    extract_game_identifier, open_url_command, shortcut_title, AppId, ApplicationRecord,
    ImportEvent, ImportOutcome, ImportReport, ItemOutcome, LaunchPlan, NewApplication,
    PLAYNITE_SUBTITLE,
};
use tracing::{debug, info, warn};

use crate::{
    ApplicationCard, ApplicationError, ApplicationPage, BootstrapCatalogCommand,
    CatalogRepository, CommandRunner, CoverImageSelector, EditApplicationCommand,
    ImportShortcutsCommand, LaunchApplicationCommand, ListApplicationsCommand, ProgressSink,
    RegisterApplicationCommand, ShortcutParser, ShortcutScanner, ShowApplicationCommand,
};

pub struct ApplicationService {
    catalog: Box<dyn CatalogRepository>,
    scanner: Box<dyn ShortcutScanner>,
    parser: Box<dyn ShortcutParser>,
    covers: Box<dyn CoverImageSelector>,
    runner: Box<dyn CommandRunner>,
}

impl ApplicationService {
    pub fn new(
        catalog: Box<dyn CatalogRepository>,
        scanner: Box<dyn ShortcutScanner>,
        parser: Box<dyn ShortcutParser>,
        covers: Box<dyn CoverImageSelector>,
        runner: Box<dyn CommandRunner>,
    ) -> Self {
        Self {
            catalog,
            scanner,
            parser,
            covers,
            runner,
        }
    }

    pub fn bootstrap_catalog(
        &self,
        _command: BootstrapCatalogCommand,
    ) -> Result<(), ApplicationError> {
        self.catalog.initialize()
    }

    /// Registers one catalog entry per valid Playnite shortcut in
    /// `command.shortcuts_dir`.
    ///
    /// Per-item problems (missing fields, failed inserts) are reported through
    /// `progress` and never stop the scan. The only error returned is for empty
    /// input paths, before anything is scanned.
    pub fn import_shortcuts(
        &self,
        command: ImportShortcutsCommand,
        progress: &mut dyn ProgressSink,
    ) -> Result<ImportOutcome, ApplicationError> {
        if command.shortcuts_dir.as_os_str().is_empty() {
            return Err(ApplicationError::InvalidInput(
                "shortcut folder must not be empty".to_string(),
            ));
        }
        if command.image_root.as_os_str().is_empty() {
            return Err(ApplicationError::InvalidInput(
                "image root must not be empty".to_string(),
            ));
        }

        let shortcuts = self.scanner.list_shortcuts(&command.shortcuts_dir);
        let total = shortcuts.len();
        if total == 0 {
            info!(folder = %command.shortcuts_dir.display(), "no playnite shortcuts found");
            progress.report(ImportEvent::NothingFound);
            return Ok(ImportOutcome::NothingFound);
        }

        info!(
            folder = %command.shortcuts_dir.display(),
            total,
            "starting playnite shortcut import"
        );
        progress.report(ImportEvent::Started { total });

        let mut report = ImportReport::new(total);
        for (index, path) in shortcuts.iter().enumerate() {
            let current = index + 1;
            let name = shortcut_title(path);
            let outcome = self.import_shortcut(path, &name, &command.image_root);
            report.record(&outcome);

            progress.report(ImportEvent::ItemResult {
                current,
                total,
                name,
                outcome,
            });
            progress.report(ImportEvent::Progress { current, total });
        }

        info!(
            imported = report.imported,
            skipped = report.skipped,
            failed = report.failed,
            "playnite shortcut import finished"
        );
        progress.report(ImportEvent::Completed(report));
        Ok(ImportOutcome::Completed(report))
    }

    fn import_shortcut(&self, path: &Path, title: &str, image_root: &Path) -> ItemOutcome {
        let descriptor = self.parser.parse(path);
        let Some(launch_url) = descriptor.importable_url() else {
            let reason = format!(
                "invalid shortcut, missing {}",
                descriptor.missing_fields().join(" and ")
            );
            debug!(path = %path.display(), %reason, "skipping shortcut");
            return ItemOutcome::Skipped { reason };
        };

        let game_identifier = extract_game_identifier(launch_url);
        let picture = self
            .covers
            .select_cover(game_identifier, image_root)
            .map(|cover| cover.to_string_lossy().to_string());
        debug!(
            path = %path.display(),
            game_identifier,
            has_cover = picture.is_some(),
            "importing shortcut"
        );

        let app = NewApplication {
            picture,
            title: title.to_string(),
            subtitle: PLAYNITE_SUBTITLE.to_string(),
            cwd: None,
            command: open_url_command(launch_url),
        };

        match self.catalog.insert_application(&app) {
            Ok(id) => ItemOutcome::Imported { id },
            Err(error) => {
                warn!(path = %path.display(), %error, "failed to store imported shortcut");
                ItemOutcome::Failed {
                    reason: error.to_string(),
                }
            }
        }
    }

    pub fn register_application(
        &self,
        command: RegisterApplicationCommand,
    ) -> Result<AppId, ApplicationError> {
        let app = command.application.normalized()?;
        let id = self.catalog.insert_application(&app)?;
        info!(id = id.get(), title = %app.title, "registered application");
        Ok(id)
    }

    pub fn edit_application(&self, command: EditApplicationCommand) -> Result<(), ApplicationError> {
        let app = command.application.normalized()?;
        self.require_application(command.id)?;
        self.catalog.update_application(command.id, &app)?;
        info!(id = command.id.get(), title = %app.title, "updated application");
        Ok(())
    }

    pub fn show_application(
        &self,
        command: ShowApplicationCommand,
    ) -> Result<ApplicationRecord, ApplicationError> {
        self.require_application(command.id)
    }

    pub fn list_applications(
        &self,
        command: ListApplicationsCommand,
    ) -> Result<ApplicationPage, ApplicationError> {
        let total_items = self.catalog.count_applications()?;
        let window = command.page.window(total_items);
        let cards = self
            .catalog
            .list_applications(window.offset, window.limit)?
            .into_iter()
            .map(|record| ApplicationCard {
                poster: record
                    .picture
                    .clone()
                    .unwrap_or_else(|| command.fallback_poster.clone()),
                record,
            })
            .collect();

        Ok(ApplicationPage {
            cards,
            window,
            total_items,
        })
    }

    pub fn launch_application(
        &self,
        command: LaunchApplicationCommand,
    ) -> Result<LaunchPlan, ApplicationError> {
        let app = self.require_application(command.id)?;
        let plan = LaunchPlan::build(&app.command, app.cwd.as_deref()).ok_or_else(|| {
            ApplicationError::InvalidInput(format!(
                "application id={} has no command",
                command.id.get()
            ))
        })?;

        self.runner.spawn(&plan)?;
        info!(id = command.id.get(), shell_line = %plan.shell_line, "launched application");
        Ok(plan)
    }

    fn require_application(&self, id: AppId) -> Result<ApplicationRecord, ApplicationError> {
        self.catalog
            .find_application_by_id(id)?
            .ok_or_else(|| ApplicationError::NotFound(format!("application id={}", id.get())))
    }
}

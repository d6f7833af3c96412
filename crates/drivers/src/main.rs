mod config;
mod logging;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use config::AppConfig;
use launchpad_adapters::{
    present_application, present_application_row, present_import_event,
    present_import_event_json, present_page_footer, present_page_json, FsCoverImageSelector,
    IniShortcutParser, ShellCommandRunner, SqliteCatalogRepository, WalkdirShortcutScanner,
};
use launchpad_application::{
    ApplicationService, BootstrapCatalogCommand, EditApplicationCommand, ImportShortcutsCommand,
    LaunchApplicationCommand, ListApplicationsCommand, RegisterApplicationCommand,
    ShowApplicationCommand,
};
use launchpad_domain::{AppId, ApplicationRecord, ImportEvent, NewApplication, PageRequest};
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "launchpad")]
#[command(about = "Personal application launcher with a Playnite shortcut importer")]
struct Cli {
    /// Config file (defaults to ./launchpad.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Register one entry per Playnite shortcut in the shortcut folder
    Import {
        /// Overrides the configured shortcut folder
        #[arg(long)]
        shortcuts_dir: Option<PathBuf>,
        /// Overrides the configured Playnite image root
        #[arg(long)]
        image_root: Option<PathBuf>,
        /// Print every import event as a JSON line
        #[arg(long)]
        json: bool,
    },
    /// List registered applications, one page at a time
    List {
        #[arg(long, default_value_t = 1)]
        page: usize,
        #[arg(long)]
        json: bool,
    },
    /// Register a new application
    Add(AddArgs),
    /// Change fields of a registered application
    Edit {
        id: i64,
        #[command(flatten)]
        fields: EditArgs,
    },
    /// Show one application
    Show { id: i64 },
    /// Launch an application
    Run { id: i64 },
}

#[derive(Args, Debug, Clone)]
struct AddArgs {
    #[arg(long)]
    title: String,
    #[arg(long)]
    command: String,
    #[arg(long, default_value = "")]
    subtitle: String,
    #[arg(long)]
    picture: Option<String>,
    #[arg(long)]
    cwd: Option<String>,
}

/// Unset flags keep the stored value; an empty string clears an optional field.
#[derive(Args, Debug, Clone, Default)]
struct EditArgs {
    #[arg(long)]
    title: Option<String>,
    #[arg(long)]
    command: Option<String>,
    #[arg(long)]
    subtitle: Option<String>,
    #[arg(long)]
    picture: Option<String>,
    #[arg(long)]
    cwd: Option<String>,
}

#[derive(Debug, Clone)]
enum CommandError {
    Usage(String),
    Runtime(String),
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) => {
            let _ = error.print();
            return ExitCode::from(u8::try_from(error.exit_code()).unwrap_or(2));
        }
    };
    logging::init_logging(cli.verbose);

    let config = match AppConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("invalid configuration: {error}");
            return ExitCode::from(2);
        }
    };
    debug!(?config, "configuration loaded");

    let service = build_application_service(&config);
    if let Err(error) = service.bootstrap_catalog(BootstrapCatalogCommand) {
        eprintln!("failed to bootstrap launchpad: {error}");
        return ExitCode::from(1);
    }

    match run_command(cli.command, &service, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(CommandError::Usage(msg)) => {
            eprintln!("{msg}");
            ExitCode::from(2)
        }
        Err(CommandError::Runtime(msg)) => {
            eprintln!("{msg}");
            ExitCode::from(1)
        }
    }
}

fn build_application_service(config: &AppConfig) -> ApplicationService {
    ApplicationService::new(
        Box::new(SqliteCatalogRepository::new(config.catalog_path.clone())),
        Box::new(WalkdirShortcutScanner),
        Box::new(IniShortcutParser),
        Box::new(FsCoverImageSelector),
        Box::new(ShellCommandRunner),
    )
}

fn run_command(
    command: Command,
    service: &ApplicationService,
    config: &AppConfig,
) -> Result<(), CommandError> {
    match command {
        Command::Import {
            shortcuts_dir,
            image_root,
            json,
        } => {
            let mut print_event = |event: ImportEvent| {
                if json {
                    println!("{}", present_import_event_json(&event));
                    return;
                }
                if let ImportEvent::Progress { current, total } = &event {
                    debug!(current, total, "import progress");
                }
                if let Some(line) = present_import_event(&event) {
                    println!("{line}");
                }
            };
            service
                .import_shortcuts(
                    ImportShortcutsCommand {
                        shortcuts_dir: shortcuts_dir
                            .unwrap_or_else(|| config.shortcuts_dir.clone()),
                        image_root: image_root.unwrap_or_else(|| config.image_root.clone()),
                    },
                    &mut print_event,
                )
                .map_err(|error| CommandError::Runtime(format!("import failed: {error}")))?;
            Ok(())
        }
        Command::List { page, json } => {
            let page = PageRequest::new(page, config.page_size)
                .map_err(|error| CommandError::Usage(error.to_string()))?;
            let page = service
                .list_applications(ListApplicationsCommand {
                    page,
                    fallback_poster: config.fallback_poster.to_string_lossy().to_string(),
                })
                .map_err(|error| CommandError::Runtime(format!("list failed: {error}")))?;
            if json {
                println!("{}", present_page_json(&page));
                return Ok(());
            }
            if page.total_items == 0 {
                println!("no applications are registered yet");
                return Ok(());
            }
            for card in &page.cards {
                println!("{}", present_application_row(card));
            }
            println!("{}", present_page_footer(&page));
            Ok(())
        }
        Command::Add(args) => {
            let id = service
                .register_application(RegisterApplicationCommand {
                    application: NewApplication {
                        picture: args.picture,
                        title: args.title,
                        subtitle: args.subtitle,
                        cwd: args.cwd,
                        command: args.command,
                    },
                })
                .map_err(|error| CommandError::Runtime(format!("register failed: {error}")))?;
            println!("registered application {}", id.get());
            Ok(())
        }
        Command::Edit { id, fields } => {
            let id = parse_app_id(id)?;
            let current = service
                .show_application(ShowApplicationCommand { id })
                .map_err(|error| CommandError::Runtime(format!("edit failed: {error}")))?;
            service
                .edit_application(EditApplicationCommand {
                    id,
                    application: merge_edit(current, fields),
                })
                .map_err(|error| CommandError::Runtime(format!("edit failed: {error}")))?;
            println!("updated application {}", id.get());
            Ok(())
        }
        Command::Show { id } => {
            let id = parse_app_id(id)?;
            let record = service
                .show_application(ShowApplicationCommand { id })
                .map_err(|error| CommandError::Runtime(format!("show failed: {error}")))?;
            println!("{}", present_application(&record));
            Ok(())
        }
        Command::Run { id } => {
            let id = parse_app_id(id)?;
            let plan = service
                .launch_application(LaunchApplicationCommand { id })
                .map_err(|error| CommandError::Runtime(format!("run failed: {error}")))?;
            println!("Executed: {}", plan.shell_line);
            Ok(())
        }
    }
}

fn parse_app_id(value: i64) -> Result<AppId, CommandError> {
    AppId::new(value)
        .map_err(|error| CommandError::Usage(format!("invalid application id: {error}")))
}

fn merge_edit(current: ApplicationRecord, fields: EditArgs) -> NewApplication {
    NewApplication {
        picture: fields.picture.or(current.picture),
        title: fields.title.unwrap_or(current.title),
        subtitle: fields.subtitle.unwrap_or(current.subtitle),
        cwd: fields.cwd.or(current.cwd),
        command: fields.command.unwrap_or(current.command),
    }
}

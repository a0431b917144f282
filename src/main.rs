use chrono::{Local, NaiveDate, Utc};
use clap::Parser;
use pixeldiary::application::delete_entry::delete_entry;
use pixeldiary::application::init::init;
use pixeldiary::application::list_entries::list_entries;
use pixeldiary::application::show_entry::show_entry;
use pixeldiary::application::stats::{diary_stats, month_calendar};
use pixeldiary::application::write_entry::compose_in_editor;
use pixeldiary::application::{ConfigService, WriteEntryService};
use pixeldiary::cli::{self, Cli, Commands};
use pixeldiary::domain::date_ref::{parse_date_key, resolve_or_today};
use pixeldiary::domain::entry::date_key;
use pixeldiary::domain::labels::relative_label;
use pixeldiary::domain::text::word_count;
use pixeldiary::domain::{calendar_target, BrowseFilter, Month};
use pixeldiary::error::DiaryError;
use pixeldiary::infrastructure::{DiaryRepository, EditorSession, FileSystemRepository};
use pixeldiary::logging::{init_logging, resolve_level, DEFAULT_LOG_LEVEL};

fn main() {
    let cli = Cli::parse();

    setup_logging(cli.log_level.as_deref());

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn setup_logging(flag: Option<&str>) {
    let configured = FileSystemRepository::discover()
        .ok()
        .and_then(|repo| repo.load_config().ok())
        .map(|config| config.log_level);
    let level = resolve_level(flag, configured.as_deref());

    if let Err(e) = init_logging(&level) {
        eprintln!("Warning: {}; using '{}'", e, DEFAULT_LOG_LEVEL);
        let _ = init_logging(DEFAULT_LOG_LEVEL);
    }
}

fn run(cli: Cli) -> Result<(), DiaryError> {
    let today = Local::now().date_naive();

    match cli.command {
        Some(Commands::Init { path }) => {
            init(&path)?;
            println!("Initialized pixeldiary at {}", path.display());
            Ok(())
        }
        Some(Commands::Write { date, message }) => {
            let repo = FileSystemRepository::discover()?;
            let date = resolve_or_today(date.as_deref(), today)?;
            write(&repo, date, message, today)
        }
        Some(Commands::Show { date }) => {
            let repo = FileSystemRepository::discover()?;
            let date = resolve_or_today(date.as_deref(), today)?;
            let view = show_entry(&repo.entry_store(), date, today)
                .ok_or_else(|| DiaryError::EntryNotFound(date_key(date)))?;
            print!("{}", cli::format_entry(&view));
            Ok(())
        }
        Some(Commands::List {
            search,
            from,
            to,
            limit,
        }) => {
            let repo = FileSystemRepository::discover()?;
            let filter = BrowseFilter {
                from: from.as_deref().map(parse_date_key).transpose()?,
                to: to.as_deref().map(parse_date_key).transpose()?,
                search,
                limit,
            };
            let rows = list_entries(&repo.entry_store(), &filter);
            let output = cli::format_entry_list(&rows, filter.search.is_some());
            println!("{}", output.trim_end());
            Ok(())
        }
        Some(Commands::Calendar { target }) => {
            let repo = FileSystemRepository::discover()?;
            let (month, selected) = calendar_target(target.as_deref(), today)?;
            let calendar = month_calendar(&repo.entry_store(), month, today, selected);
            print!("{}", cli::format_calendar(&calendar));
            Ok(())
        }
        Some(Commands::Stats { month }) => {
            let repo = FileSystemRepository::discover()?;
            let month = month_or_current(month.as_deref(), today)?;
            let report = diary_stats(&repo.entry_store(), month, today);
            print!("{}", cli::format_stats(&report));
            Ok(())
        }
        Some(Commands::Delete { date }) => {
            let repo = FileSystemRepository::discover()?;
            let date = resolve_or_today(Some(date.as_str()), today)?;
            if delete_entry(&repo.entry_store(), date)? {
                println!("Deleted entry for {}", relative_label(date, today));
            } else {
                println!("No entry for {}; nothing deleted", date_key(date));
            }
            Ok(())
        }
        Some(Commands::Config { key, value, list }) => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                print!(
                    "{}",
                    cli::format_config(&[
                        ("editor", config.editor.clone()),
                        ("log_level", config.log_level.clone()),
                        ("created", config.created.to_rfc3339()),
                    ])
                );
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
            } else {
                println!("Usage: pixeldiary config [--list | <key> [<value>]]");
                println!("Valid keys: editor, log_level, created");
            }
            Ok(())
        }
        None => {
            if let Some(raw) = cli.date {
                let repo = FileSystemRepository::discover()?;
                let date = resolve_or_today(Some(raw.as_str()), today)?;
                write(&repo, date, None, today)
            } else {
                println!("pixeldiary - personal diary kept on your device");
                println!("Use --help for usage information");
                Ok(())
            }
        }
    }
}

/// Save `message`, or the editor's result when no message was given
fn write(
    repo: &FileSystemRepository,
    date: NaiveDate,
    message: Option<String>,
    today: NaiveDate,
) -> Result<(), DiaryError> {
    let service = WriteEntryService::new(repo.entry_store());
    let label = relative_label(date, today);

    let content = match message {
        Some(text) => text,
        None => {
            let editor = EditorSession::new(repo.load_config()?.get_editor());
            let current = service.current_content(date);
            let edited = compose_in_editor(repo, &editor, date, &current)?;
            if edited == current {
                println!("No changes to {}", label);
                return Ok(());
            }
            edited
        }
    };

    let outcome = service.save(date, &content, Utc::now())?;
    println!(
        "{} entry for {} ({} words)",
        if outcome.created { "Saved new" } else { "Updated" },
        label,
        word_count(&outcome.entry.content)
    );
    Ok(())
}

fn month_or_current(input: Option<&str>, today: NaiveDate) -> Result<Month, DiaryError> {
    match input {
        Some(raw) => raw.parse(),
        None => Ok(Month::of(today)),
    }
}

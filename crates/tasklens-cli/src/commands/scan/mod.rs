//! Scan command: Sweep a project directory and print its task list

mod render;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tasklens_core::settings::DEFAULT_KEYWORDS;
use tasklens_core::{
    CancelFlag, Color, MemorySettingsStore, ProjectFiles, ProjectSnapshot, Settings,
    SettingsStore, SourceLanguage, SweepOptions, SweepReport, TaskList,
};
use tracing::{info, warn};

pub use render::{render_json, render_table};

use super::OutputFormat;

/// Color for `--keyword` entries that have none configured
const UNCONFIGURED_COLOR: Color = Color::rgb(0x80, 0x00, 0x80);

/// Options for one scan invocation
#[derive(Debug, Clone)]
pub struct ScanArgs {
    pub path: PathBuf,
    pub project: Option<String>,
    pub keywords: Vec<String>,
    /// File extensions to restrict the walk to, e.g. `rs` or `cpp`
    pub languages: Vec<String>,
    pub all_files: bool,
    pub absolute_paths: bool,
    pub format: OutputFormat,
    pub sequential: bool,
}

/// Run the scan command
///
/// # Errors
/// Returns an error if the path is not a directory, a language is unknown,
/// or the sweep task fails.
pub async fn run(args: ScanArgs, store: &impl SettingsStore) -> Result<()> {
    let root = args
        .path
        .canonicalize()
        .with_context(|| format!("Cannot open {}", args.path.display()))?;
    anyhow::ensure!(root.is_dir(), "{} is not a directory", root.display());

    let languages = parse_languages(&args.languages)?;
    let settings = effective_settings(store.load(), &args.keywords, args.absolute_paths);
    let project = ProjectSnapshot::new(
        project_name(&root, args.project.as_deref()),
        list_files(&root, args.all_files, &languages),
    );
    info!(
        "Scanning {} files in {}{}",
        project.files.len(),
        root.display(),
        describe_languages(&languages)
    );

    let cancel = CancelFlag::new();
    let options = if args.sequential {
        SweepOptions::sequential()
    } else {
        SweepOptions::default()
    }
    .with_cancel(cancel.clone());

    let sweep_settings = settings.clone();
    let mut handle = tokio::task::spawn_blocking(move || {
        let mut list =
            TaskList::new(MemorySettingsStore::new(sweep_settings)).with_sweep_options(options);
        list.refresh(&project);
        (project.name, list)
    });

    let (project_name, list) = tokio::select! {
        joined = &mut handle => joined?,
        _ = tokio::signal::ctrl_c() => {
            warn!("Interrupted, stopping after the files in progress");
            cancel.cancel();
            handle.await?
        }
    };

    if let Some(diagnostic) = list.diagnostic() {
        warn!("{}", diagnostic);
    }

    let report = SweepReport::new(project_name, list.outcome().clone())
        .with_keywords(settings.vocabulary());
    let output = match args.format {
        OutputFormat::Table => render_table(list.rows()),
        OutputFormat::Json => render_json(&report)?,
    };
    println!("{output}");

    info!(
        "✓ {} tasks in {} files ({} skipped){}",
        report.occurrences.len(),
        report.files_scanned,
        report.files_skipped,
        if report.cancelled { ", cancelled" } else { "" }
    );
    for (keyword, count) in report.counts_by_keyword() {
        info!("  {keyword}: {count}");
    }
    Ok(())
}

/// Stored settings, narrowed to `keywords` when any are given
pub(crate) fn effective_settings(
    stored: Settings,
    keywords: &[String],
    absolute_paths: bool,
) -> Settings {
    let show_absolute = absolute_paths || stored.show_absolute_file_path;
    if keywords.is_empty() {
        return stored.with_absolute_file_path(show_absolute);
    }

    let mut settings = Settings::empty().with_absolute_file_path(show_absolute);
    for keyword in keywords {
        let color = stored
            .color_of(keyword)
            .or_else(|| default_color(keyword))
            .unwrap_or(UNCONFIGURED_COLOR);
        settings.set_keyword(keyword, color);
    }
    settings
}

fn default_color(keyword: &str) -> Option<Color> {
    DEFAULT_KEYWORDS
        .iter()
        .find(|(default, _)| default.eq_ignore_ascii_case(keyword.trim()))
        .map(|(_, color)| *color)
}

/// Explicit project name, else the directory name
pub(crate) fn project_name(root: &Path, explicit: Option<&str>) -> String {
    explicit
        .map(str::to_string)
        .or_else(|| root.file_name().map(|name| name.to_string_lossy().into_owned()))
        .unwrap_or_else(|| root.display().to_string())
}

/// Map `--language` extensions to languages
pub(crate) fn parse_languages(extensions: &[String]) -> Result<Vec<SourceLanguage>> {
    extensions
        .iter()
        .map(|ext| {
            SourceLanguage::from_extension(ext.trim_start_matches('.'))
                .with_context(|| format!("Unknown language extension: {ext}"))
        })
        .collect()
}

fn describe_languages(languages: &[SourceLanguage]) -> String {
    if languages.is_empty() {
        return String::new();
    }
    let names: Vec<String> = languages.iter().map(ToString::to_string).collect();
    format!(" ({})", names.join(", "))
}

/// Candidate files; `languages` narrows the default C-family filter
pub(crate) fn list_files(
    root: &Path,
    all_files: bool,
    languages: &[SourceLanguage],
) -> Vec<PathBuf> {
    let walker = ProjectFiles::new(root);
    if all_files {
        walker.all_files().collect()
    } else if languages.is_empty() {
        walker.collect()
    } else {
        walker.with_languages(languages.to_vec()).collect()
    }
}

//! Task list: The rendered, navigable view of a project's occurrences
//!
//! A [`TaskList`] owns a settings store, asks a [`ProjectSource`] for the
//! active project, sweeps its files and turns occurrences into display
//! rows of {Type, Description, Project, File, Line}. Every host event
//! except a closed workspace triggers a full recomputation.

use std::path::PathBuf;

use serde::Serialize;

use crate::events::HostEvent;
use crate::scanner::Occurrence;
use crate::settings::{Color, Settings, SettingsError, SettingsStore};
use crate::sweep::{sweep_with, SweepDiagnostic, SweepOptions, SweepOutcome};

/// The host's view of the project to list tasks for
pub trait ProjectSource {
    /// `None` when no workspace is open or the workspace is not supported
    fn active_project(&self) -> Option<ProjectSnapshot>;
}

/// A project's name and its candidate files, in display order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSnapshot {
    pub name: String,
    pub files: Vec<PathBuf>,
}

impl ProjectSnapshot {
    #[must_use]
    pub fn new(name: impl Into<String>, files: Vec<PathBuf>) -> Self {
        Self {
            name: name.into(),
            files,
        }
    }
}

impl ProjectSource for ProjectSnapshot {
    fn active_project(&self) -> Option<ProjectSnapshot> {
        Some(self.clone())
    }
}

impl ProjectSource for Option<ProjectSnapshot> {
    fn active_project(&self) -> Option<ProjectSnapshot> {
        self.clone()
    }
}

/// One display row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskRow {
    /// Keyword, e.g. `TODO`
    pub kind: String,
    pub description: String,
    pub project: String,
    /// File name, or full path when absolute paths are shown
    pub file: String,
    pub line: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

/// Where the host should open an editor for a selected row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenTarget {
    pub path: PathBuf,
    pub project: String,
    /// 1-based line
    pub line: usize,
}

impl OpenTarget {
    /// 0-based line, as editor APIs usually expect
    #[must_use]
    pub fn editor_line(&self) -> usize {
        self.line.saturating_sub(1)
    }
}

/// Derived task list view
#[derive(Debug)]
pub struct TaskList<S: SettingsStore> {
    store: S,
    settings: Settings,
    options: SweepOptions,
    outcome: SweepOutcome,
    rows: Vec<TaskRow>,
}

impl<S: SettingsStore> TaskList<S> {
    /// Create an empty list, loading settings from `store`
    #[must_use]
    pub fn new(store: S) -> Self {
        let settings = store.load();
        Self {
            store,
            settings,
            options: SweepOptions::default(),
            outcome: SweepOutcome::default(),
            rows: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_sweep_options(mut self, options: SweepOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[must_use]
    pub fn rows(&self) -> &[TaskRow] {
        &self.rows
    }

    #[must_use]
    pub fn occurrences(&self) -> &[Occurrence] {
        &self.outcome.occurrences
    }

    /// The most recent sweep result
    #[must_use]
    pub fn outcome(&self) -> &SweepOutcome {
        &self.outcome
    }

    #[must_use]
    pub fn diagnostic(&self) -> Option<&SweepDiagnostic> {
        self.outcome.diagnostic.as_ref()
    }

    /// Drop all rows
    pub fn clear(&mut self) {
        self.outcome = SweepOutcome::default();
        self.rows.clear();
    }

    /// Recompute the list from the active project
    pub fn refresh(&mut self, source: &dyn ProjectSource) {
        self.clear();

        let Some(project) = source.active_project() else {
            tracing::debug!("No active project; task list left empty");
            return;
        };
        if project.files.is_empty() {
            return;
        }

        let vocabulary = self.settings.vocabulary();
        self.outcome = sweep_with(&project.files, &vocabulary, &project.name, self.options.clone());
        if let Some(diagnostic) = &self.outcome.diagnostic {
            tracing::warn!("Task list for {} is empty: {}", project.name, diagnostic);
        }
        self.rows = self.render_rows();
    }

    /// React to a host event
    pub fn handle(&mut self, event: &HostEvent, source: &dyn ProjectSource) {
        if event.clears() {
            self.clear();
        } else {
            self.refresh(source);
        }
    }

    /// Persist new settings and recompute the list
    ///
    /// # Errors
    /// Returns an error if the store cannot save; the list is left unchanged.
    pub fn apply_settings(
        &mut self,
        settings: Settings,
        source: &dyn ProjectSource,
    ) -> Result<(), SettingsError> {
        self.store.save(&settings)?;
        self.settings = settings;
        self.refresh(source);
        Ok(())
    }

    /// Map a row back to a file and line, if the file still exists
    #[must_use]
    pub fn open_target(&self, row: usize) -> Option<OpenTarget> {
        let occurrence = self.outcome.occurrences.get(row)?;
        if !occurrence.file_path.exists() {
            return None;
        }
        Some(OpenTarget {
            path: occurrence.file_path.clone(),
            project: occurrence.project_name.clone(),
            line: occurrence.line_number,
        })
    }

    fn render_rows(&self) -> Vec<TaskRow> {
        self.outcome
            .occurrences
            .iter()
            .map(|occurrence| TaskRow {
                kind: occurrence.keyword.clone(),
                description: occurrence.description.clone(),
                project: occurrence.project_name.clone(),
                file: if self.settings.show_absolute_file_path {
                    occurrence.file_path.display().to_string()
                } else {
                    occurrence.file_name.clone()
                },
                line: occurrence.line_number,
                color: self.settings.color_of(&occurrence.keyword),
            })
            .collect()
    }
}

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde_json::{Map, Value};

use crate::app::controllers::editor::EditorSession;
use crate::app::domain::content::{ContentDocument, REQUIRED_IMPORT_KEYS};
use crate::app::domain::notification::{Notification, Notifier};
use crate::app::error::{AppError, Result};

pub const PRODUCT_PREFIX: &str = "spark";

/// Native "open file" prompt, restricted to JSON.
pub trait FilePicker {
    fn pick_json_file(&mut self) -> Option<PathBuf>;
}

/// Blocking yes/no question.
pub trait Confirm {
    fn confirm(&mut self, message: &str) -> bool;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IoOutcome {
    Done,
    /// The user dismissed the picker or declined the prompt.
    Cancelled,
    Failed,
}

/// `spark-content-<YYYY-MM-DD>.json`
pub fn export_file_name(date: NaiveDate) -> String {
    format!("{}-content-{}.json", PRODUCT_PREFIX, date.format("%Y-%m-%d"))
}

/// Where exports land when no directory is configured.
pub fn default_export_dir() -> PathBuf {
    dirs::download_dir().unwrap_or_else(|| PathBuf::from("."))
}

/// Parse and validate an imported file.
///
/// The top level must be an object carrying every required section key.
pub fn parse_content(text: &str) -> Result<Map<String, Value>> {
    let value: Value = serde_json::from_str(text)?;
    let Value::Object(sections) = value else {
        return Err(AppError::InvalidContent("top level is not an object".to_string()));
    };
    if let Some(missing) = REQUIRED_IMPORT_KEYS.iter().find(|k| !sections.contains_key(**k)) {
        return Err(AppError::InvalidContent(format!("missing \"{}\" section", missing)));
    }
    Ok(sections)
}

/// Moves the live document across the file boundary.
pub struct ContentIo {
    export_dir: PathBuf,
}

impl ContentIo {
    pub fn new(export_dir: impl Into<PathBuf>) -> Self {
        Self {
            export_dir: export_dir.into(),
        }
    }

    pub fn export_dir(&self) -> &Path {
        &self.export_dir
    }

    /// Write `document` as pretty JSON under today's export name.
    pub fn export_content(&self, document: &ContentDocument, notifier: &mut dyn Notifier) -> IoOutcome {
        let today = chrono::Local::now().date_naive();
        match self.write_export(document, today) {
            Ok(path) => {
                log::info!("exported content to {}", path.display());
                notifier.notify(Notification::success(
                    "Content exported",
                    path.display().to_string(),
                ));
                IoOutcome::Done
            }
            Err(e) => {
                log::warn!("export failed: {}", e);
                notifier.notify(Notification::error("Export failed", e.to_string()));
                IoOutcome::Failed
            }
        }
    }

    pub fn write_export(&self, document: &ContentDocument, date: NaiveDate) -> Result<PathBuf> {
        fs::create_dir_all(&self.export_dir)?;
        let path = self.export_dir.join(export_file_name(date));
        let json = document.to_json_pretty()?;
        fs::write(&path, json)?;
        Ok(path)
    }

    /// Prompt for a file and load it into the session.
    pub fn import_content(
        &self,
        session: &mut EditorSession,
        picker: &mut dyn FilePicker,
        notifier: &mut dyn Notifier,
    ) -> IoOutcome {
        match picker.pick_json_file() {
            Some(path) => self.import_from_path(&path, session, notifier),
            None => IoOutcome::Cancelled,
        }
    }

    /// Load `path` into the session. Read, parse and validation failures all
    /// end in one error notification with the document untouched.
    pub fn import_from_path(
        &self,
        path: &Path,
        session: &mut EditorSession,
        notifier: &mut dyn Notifier,
    ) -> IoOutcome {
        let parsed = fs::read_to_string(path)
            .map_err(AppError::from)
            .and_then(|text| parse_content(&text));
        match parsed {
            Ok(sections) => {
                let replaced = session.replace_sections(&sections);
                log::info!("imported {} sections from {}", replaced, path.display());
                notifier.notify(Notification::success(
                    "Content imported",
                    format!("{} sections loaded", replaced),
                ));
                IoOutcome::Done
            }
            Err(e) => {
                log::warn!("import of {} rejected: {}", path.display(), e);
                notifier.notify(Notification::error(
                    "Import failed",
                    format!("Invalid content file ({})", e),
                ));
                IoOutcome::Failed
            }
        }
    }

    /// Restore defaults after an explicit confirmation.
    pub fn reset_content(
        &self,
        session: &mut EditorSession,
        confirm: &mut dyn Confirm,
        notifier: &mut dyn Notifier,
    ) -> IoOutcome {
        if !confirm.confirm("Restore all landing page content to the defaults? This cannot be undone.") {
            return IoOutcome::Cancelled;
        }
        session.reset_to_defaults();
        log::info!("content reset to defaults");
        notifier.notify(Notification::success("Content reset", "Default content restored"));
        IoOutcome::Done
    }
}

impl Default for ContentIo {
    fn default() -> Self {
        Self::new(default_export_dir())
    }
}

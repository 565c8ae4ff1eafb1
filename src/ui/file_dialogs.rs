use std::path::PathBuf;

use fltk::dialog::{FileDialogType, NativeFileChooser};

use crate::app::services::content_io::FilePicker;
use crate::app::services::file_filters::{content_files_filter, is_content_file};

pub fn native_open_dialog(filter: &str, directory: Option<&str>) -> Option<PathBuf> {
    let mut nfc = NativeFileChooser::new(FileDialogType::BrowseFile);
    nfc.set_title("Import Content");
    nfc.set_filter(filter);
    if let Some(dir) = directory {
        if let Err(e) = nfc.set_directory(&dir) {
            log::debug!("could not open picker in {}: {}", dir, e);
        }
    }
    nfc.show(); // blocks until close
    let filename = nfc.filename();
    if filename.as_os_str().is_empty() { None } else { Some(filename) }
}

/// Native picker for content files, starting in the last import folder.
pub struct NativeContentPicker {
    pub last_directory: Option<String>,
}

impl FilePicker for NativeContentPicker {
    fn pick_json_file(&mut self) -> Option<PathBuf> {
        let path = native_open_dialog(&content_files_filter(), self.last_directory.as_deref())?;
        if !is_content_file(&path.to_string_lossy()) {
            // Still handed to the importer, which reports what is wrong with it.
            log::warn!("{} does not have a .json extension", path.display());
        }
        if let Some(parent) = path.parent() {
            self.last_directory = Some(parent.to_string_lossy().to_string());
        }
        Some(path)
    }
}

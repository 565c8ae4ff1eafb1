/// Filter for the content import dialog.
///
/// FLTK format: "Description\tPattern". FLTK adds "All Files (*)" itself.
pub fn content_files_filter() -> String {
    get_platform_filter("Content Files", "*.json")
}

/// Generate platform-specific file filter string for native dialogs
///
/// FLTK accepts these filter formats:
/// - Simple wildcard: "*.json"
/// - Multiple wildcards: "*.{json,txt}"
/// - With description (optional): "Content Files\t*.json"
///
/// The simple format without description is the most portable.
pub fn get_platform_filter(_description: &str, pattern: &str) -> String {
    pattern.to_string()
}

/// True when `path` has a `.json` extension (any case).
pub fn is_content_file(path: &str) -> bool {
    std::path::Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"))
}

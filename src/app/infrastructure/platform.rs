use crate::app::domain::settings::ThemeMode;

/// Resolve the configured theme to dark/light.
pub fn resolve_dark_mode(mode: ThemeMode) -> bool {
    match mode {
        ThemeMode::Light => false,
        ThemeMode::Dark => true,
        ThemeMode::SystemDefault => detect_system_dark_mode(),
    }
}

pub fn detect_system_dark_mode() -> bool {
    let dark = system_prefers_dark();
    log::debug!("system dark mode: {}", dark);
    dark
}

#[cfg(target_os = "windows")]
fn system_prefers_dark() -> bool {
    use winreg::RegKey;
    use winreg::enums::HKEY_CURRENT_USER;

    // AppsUseLightTheme: 0 = dark mode, 1 = light mode
    RegKey::predef(HKEY_CURRENT_USER)
        .open_subkey("Software\\Microsoft\\Windows\\CurrentVersion\\Themes\\Personalize")
        .and_then(|key| key.get_value::<u32, _>("AppsUseLightTheme"))
        .map(|value| value == 0)
        .unwrap_or(false)
}

#[cfg(target_os = "linux")]
fn system_prefers_dark() -> bool {
    let gtk_theme = command_output("gsettings", &["get", "org.gnome.desktop.interface", "gtk-theme"]);
    if gtk_theme.is_some_and(|t| t.to_lowercase().contains("dark")) {
        return true;
    }
    command_output("gsettings", &["get", "org.gnome.desktop.interface", "color-scheme"])
        .is_some_and(|s| s.contains("prefer-dark"))
}

#[cfg(target_os = "macos")]
fn system_prefers_dark() -> bool {
    command_output("defaults", &["read", "-g", "AppleInterfaceStyle"])
        .is_some_and(|s| s.to_lowercase().contains("dark"))
}

#[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
fn system_prefers_dark() -> bool {
    false
}

#[cfg(any(target_os = "linux", target_os = "macos"))]
fn command_output(program: &str, args: &[&str]) -> Option<String> {
    let output = std::process::Command::new(program).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    Some(String::from_utf8_lossy(&output.stdout).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_modes_skip_detection() {
        assert!(!resolve_dark_mode(ThemeMode::Light));
        assert!(resolve_dark_mode(ThemeMode::Dark));
    }
}

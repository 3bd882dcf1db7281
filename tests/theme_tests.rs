use mlchart_rs::spec::{ThemeMode, resolve_theme};

#[test]
fn resolving_dark_is_pure_and_ignores_system_preference() {
    let first = resolve_theme(ThemeMode::Dark, false);
    let second = resolve_theme(ThemeMode::Dark, true);

    assert_eq!(first, second);
    assert_eq!(first.background, "#1F2937");
}

#[test]
fn light_mode_never_returns_dark_colors() {
    let light = resolve_theme(ThemeMode::Light, true);
    let dark = resolve_theme(ThemeMode::Dark, true);

    assert_eq!(light.background, "#ffffff");
    assert_ne!(light.background, dark.background);
    assert_ne!(light.grid_line_color, dark.grid_line_color);
    assert_ne!(light.axis_line_color, dark.axis_line_color);
}

#[test]
fn system_mode_follows_platform_preference() {
    let on_dark = resolve_theme(ThemeMode::System, true);
    let on_light = resolve_theme(ThemeMode::System, false);

    assert_eq!(on_dark.background, resolve_theme(ThemeMode::Dark, true).background);
    assert_eq!(
        on_light.background,
        resolve_theme(ThemeMode::Light, false).background
    );
    // The requested mode is preserved even after the palette is picked.
    assert_eq!(on_dark.mode, ThemeMode::System);
    assert_eq!(on_light.mode, ThemeMode::System);
}

#[test]
fn widget_boundary_strings_parse_into_modes() {
    assert_eq!("light".parse::<ThemeMode>().expect("light"), ThemeMode::Light);
    assert_eq!("dark".parse::<ThemeMode>().expect("dark"), ThemeMode::Dark);
    assert_eq!(
        "system".parse::<ThemeMode>().expect("system"),
        ThemeMode::System
    );
    assert!("solarized".parse::<ThemeMode>().is_err());
}

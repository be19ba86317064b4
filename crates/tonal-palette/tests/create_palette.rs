//! End-to-end tests for `create_palette`.
//!
//! Diagnostic assertions use `tracing-test` so the invalid-mode warning is
//! observable independently of the returned error.

use tonal_color::{DEEP_ORANGE, GREEN, INDIGO, PINK, RED, Rgba, darken, lighten};
use tonal_palette::{
    DARK, LIGHT, Mode, PaletteConfig, PaletteError, RoleName, RoleSpec, create_palette,
};
use tracing_test::traced_test;

#[test]
fn empty_config_yields_the_material_defaults() {
    let palette = create_palette(PaletteConfig::default()).unwrap();

    assert_eq!(palette.primary.main, INDIGO.s500);
    assert_eq!(palette.primary.light, INDIGO.s300);
    assert_eq!(palette.primary.dark, INDIGO.s700);
    assert_eq!(palette.primary.contrast_text, DARK.text.primary);

    assert_eq!(palette.secondary.main, PINK.a400);
    assert_eq!(palette.secondary.light, PINK.a200);
    assert_eq!(palette.secondary.dark, PINK.a700);
    assert_eq!(palette.secondary.contrast_text, DARK.text.primary);

    assert_eq!(palette.error.main, RED.s500);
    assert_eq!(palette.error.light, RED.s300);
    assert_eq!(palette.error.dark, RED.s700);

    // Mode defaults to light.
    assert_eq!(palette.mode, Mode::Light);
    assert_eq!(palette.text, LIGHT.text);
}

#[test]
fn fully_specified_roles_pass_through_verbatim() {
    let white: Rgba = "#ffffff".parse().unwrap();
    let black: Rgba = "#000000".parse().unwrap();
    let config = PaletteConfig::default()
        .primary(
            RoleSpec::from_main(DEEP_ORANGE.s500)
                .light(DEEP_ORANGE.s300)
                .dark(DEEP_ORANGE.s700)
                .contrast_text(white),
        )
        .secondary(
            RoleSpec::from_main(GREEN.a400)
                .light(GREEN.a200)
                .dark(GREEN.a700)
                .contrast_text(black),
        );
    let palette = create_palette(config).unwrap();

    assert_eq!(palette.primary.main, DEEP_ORANGE.s500);
    assert_eq!(palette.primary.light, DEEP_ORANGE.s300);
    assert_eq!(palette.primary.dark, DEEP_ORANGE.s700);
    assert_eq!(palette.primary.contrast_text, white);

    assert_eq!(palette.secondary.main, GREEN.a400);
    assert_eq!(palette.secondary.light, GREEN.a200);
    assert_eq!(palette.secondary.dark, GREEN.a700);
    assert_eq!(palette.secondary.contrast_text, black);

    assert_eq!(palette.text, LIGHT.text);
}

#[test]
fn missing_variants_are_derived_with_the_default_offset() {
    let config = PaletteConfig::default()
        .primary(RoleSpec::from_main(DEEP_ORANGE.s500))
        .secondary(RoleSpec::from_main(GREEN.a400));
    let palette = create_palette(config).unwrap();

    assert_eq!(palette.primary.main, DEEP_ORANGE.s500);
    assert_eq!(palette.primary.light, lighten(DEEP_ORANGE.s500, 0.2));
    assert_eq!(palette.primary.dark, darken(DEEP_ORANGE.s500, 0.3));

    assert_eq!(palette.secondary.main, GREEN.a400);
    assert_eq!(palette.secondary.light, lighten(GREEN.a400, 0.2));
    assert_eq!(palette.secondary.dark, darken(GREEN.a400, 0.3));
}

#[test]
fn custom_tonal_offset_scales_both_derivations() {
    let config = PaletteConfig::default()
        .primary(RoleSpec::from_main(DEEP_ORANGE.s500))
        .secondary(RoleSpec::from_main(GREEN.a400))
        .tonal_offset(0.1);
    let palette = create_palette(config).unwrap();

    assert_eq!(palette.primary.light, lighten(DEEP_ORANGE.s500, 0.1));
    assert_eq!(palette.primary.dark, darken(DEEP_ORANGE.s500, 0.15));
    assert_eq!(palette.secondary.light, lighten(GREEN.a400, 0.1));
    assert_eq!(palette.secondary.dark, darken(GREEN.a400, 0.15));
}

#[traced_test]
#[test]
fn raised_contrast_threshold_flips_contrast_text() {
    let palette = create_palette(PaletteConfig::default().contrast_threshold(7.0)).unwrap();

    // At 7:1 neither default main clears the bar against white text, so
    // both roles fall back to the light-mode text primary.
    assert_eq!(palette.primary.contrast_text, LIGHT.text.primary);
    assert_eq!(palette.secondary.contrast_text, LIGHT.text.primary);
    assert!(!logs_contain("unsupported palette mode"));
}

#[traced_test]
#[test]
fn dark_mode_swaps_base_groups_but_not_role_colors() {
    let palette = create_palette(PaletteConfig::default().mode("dark")).unwrap();

    assert_eq!(palette.primary.main, INDIGO.s500);
    assert_eq!(palette.secondary.main, PINK.a400);
    assert_eq!(palette.mode, Mode::Dark);
    assert_eq!(palette.text, DARK.text);
    assert_eq!(palette.background, DARK.background);
    assert_eq!(palette.divider, DARK.divider);
    assert_eq!(palette.action, DARK.action);
    assert!(!logs_contain("unsupported palette mode"));
}

#[traced_test]
#[test]
fn invalid_mode_warns_once_then_fails() {
    let result = create_palette(PaletteConfig::default().mode("foo"));
    assert_eq!(result, Err(PaletteError::UnsupportedMode("foo".into())));

    assert!(logs_contain("unsupported palette mode"));
    assert!(logs_contain("foo"));
    logs_assert(|lines: &[&str]| {
        let warnings = lines
            .iter()
            .filter(|line| line.contains("unsupported palette mode"))
            .count();
        match warnings {
            1 => Ok(()),
            n => Err(format!("expected exactly one diagnostic, saw {n}")),
        }
    });
}

#[test]
fn role_without_main_fails_with_the_role_name() {
    let config = PaletteConfig::default().primary(RoleSpec::default().light(INDIGO.s300));
    let err = create_palette(config).unwrap_err();
    assert_eq!(err, PaletteError::MissingMainColor(RoleName::Primary));
    assert!(err.to_string().contains("primary"));
}

#[test]
fn structurally_equal_configs_yield_structurally_equal_palettes() {
    let make = || {
        PaletteConfig::default()
            .primary(RoleSpec::from_main(DEEP_ORANGE.s500))
            .mode("dark")
            .tonal_offset(0.1)
            .contrast_threshold(4.5)
    };
    let first = create_palette(make()).unwrap();
    let second = create_palette(make()).unwrap();
    assert_eq!(first, second);
}

#[cfg(feature = "serde")]
mod serde_config {
    use super::*;

    #[test]
    fn config_deserializes_from_partial_json() {
        let config: PaletteConfig = serde_json::from_str(
            r##"{
                "primary": { "main": "#ff5722" },
                "mode": "dark",
                "tonal_offset": 0.1
            }"##,
        )
        .unwrap();
        assert_eq!(config.primary, Some(RoleSpec::from_main(DEEP_ORANGE.s500)));
        assert_eq!(config.mode, "dark");
        assert_eq!(config.contrast_threshold, 3.0);

        let palette = create_palette(config).unwrap();
        assert_eq!(palette.primary.light, lighten(DEEP_ORANGE.s500, 0.1));
    }
}

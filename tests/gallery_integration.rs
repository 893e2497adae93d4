// SPDX-License-Identifier: MPL-2.0
//! Integration tests for the gallery state machine, the interaction
//! pipeline, and configuration round-trips.

use iced_carousel::config::{self, Config, SlideBinding};
use iced_carousel::content::{Action, Interaction, Source};
use iced_carousel::slide_navigation::SlideNavigator;
use iced_carousel::ui::gallery;
use iced_carousel::ui::theming::{AppTheme, DeviceScheme, ThemeMode};
use tempfile::tempdir;

#[test]
fn active_index_stays_in_range_for_any_event_sequence() {
    let mut nav = SlideNavigator::new(5);

    // Mixed settles and activations, including hostile values.
    nav.settle(2_000_000.0, 400.0);
    assert!(nav.active_index().expect("non-empty") < 5);
    nav.activate(4);
    nav.settle(-500.0, 400.0);
    assert!(nav.active_index().expect("non-empty") < 5);
    nav.activate(17); // rejected
    nav.settle(801.0, 400.0);
    let index = nav.active_index().expect("non-empty");
    assert!(index < 5);
    assert_eq!(index, 2);
}

#[test]
fn dot_activation_is_exact_and_idempotent() {
    let mut nav = SlideNavigator::new(4);

    assert!(nav.activate(2));
    assert_eq!(nav.active_index(), Some(2));

    // Re-activating the active dot reports no observable change.
    assert!(!nav.activate(2));
    assert_eq!(nav.active_index(), Some(2));
}

#[test]
fn settle_changes_only_when_the_rounded_page_differs() {
    let mut nav = SlideNavigator::new(4);
    let page_width = 420.0;

    assert!(nav.settle(420.0, page_width));
    assert_eq!(nav.active_index(), Some(1));

    // Repeated settles at (almost) the same offset do not re-trigger.
    assert!(!nav.settle(420.0, page_width));
    assert!(!nav.settle(430.0, page_width));

    assert!(nav.settle(840.0, page_width));
    assert_eq!(nav.active_index(), Some(2));
}

#[test]
fn gallery_component_routes_dot_presses_through_the_navigator() {
    let mut state = gallery::State::new(5, SlideBinding::Faithful);
    state.update(gallery::Message::DotPressed(3));
    assert_eq!(state.active_index(), Some(3));

    // Out of range presses leave the state untouched.
    state.update(gallery::Message::DotPressed(11));
    assert_eq!(state.active_index(), Some(3));
}

#[test]
fn faithful_binding_shows_the_active_image_on_every_slide() {
    let active = 3;
    for slide in 0..5 {
        assert_eq!(
            gallery::slide_image_index(SlideBinding::Faithful, active, slide),
            active
        );
    }
}

#[test]
fn per_slide_binding_shows_each_slides_own_image() {
    let active = 3;
    for slide in 0..5 {
        assert_eq!(
            gallery::slide_image_index(SlideBinding::PerSlide, active, slide),
            slide
        );
    }
}

#[test]
fn interactive_list_payload_is_delivered_once_and_unchanged() {
    let mut state = gallery::State::new(4, SlideBinding::Faithful);
    let interaction = Interaction::new(Source::InteractiveList, "android", Action::Selected);

    let event = state.update(gallery::Message::Content(interaction.clone()));
    match event {
        gallery::Event::Interaction(delivered) => {
            assert_eq!(delivered.item, "android");
            assert_eq!(delivered, interaction);
        }
        gallery::Event::None => panic!("expected the interaction to be forwarded"),
    }
}

#[test]
fn theme_toggle_round_trips() {
    let mut theme = AppTheme::new(ThemeMode::Light);
    theme.toggle();
    theme.toggle();
    assert_eq!(theme.mode(), ThemeMode::Light);
}

#[test]
fn device_scheme_overrides_manual_toggle() {
    let mut theme = AppTheme::from_device_scheme(DeviceScheme::Light);
    theme.toggle(); // user switches to dark
    theme.apply_device_scheme(DeviceScheme::Dark); // device agrees
    assert_eq!(theme.mode(), ThemeMode::Dark);
    theme.apply_device_scheme(DeviceScheme::Light); // device reverts the user
    assert_eq!(theme.mode(), ThemeMode::Light);
}

#[test]
fn slide_binding_round_trips_through_settings_file() {
    let dir = tempdir().expect("failed to create temp dir");
    let path = dir.path().join("settings.toml");

    let written = Config {
        language: Some("en-US".to_string()),
        slide_binding: SlideBinding::PerSlide,
    };
    config::save_to_path(&written, &path).expect("save failed");

    let loaded = config::load_from_path(&path).expect("load failed");
    assert_eq!(loaded.slide_binding, SlideBinding::PerSlide);
    assert_eq!(loaded.language, Some("en-US".to_string()));
}

#[test]
fn malformed_settings_file_loads_as_defaults() {
    let dir = tempdir().expect("failed to create temp dir");
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "this is not toml at all [[[").expect("write failed");

    let loaded = config::load_from_path(&path).expect("load failed");
    assert_eq!(loaded.slide_binding, SlideBinding::Faithful);
    assert_eq!(loaded.language, None);
}

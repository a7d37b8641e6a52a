// SPDX-License-Identifier: MPL-2.0
//! Cross-module flows: config-driven locale resolution, the contact form's
//! debounce and retry schedule, showcase loading, and theme transitions.

use motion_deck::app::config::{self, Config};
use motion_deck::catalog::{self, Category, MotionKind};
use motion_deck::i18n::fluent::I18n;
use motion_deck::ui::contact::{self, ContactForm, Field};
use motion_deck::ui::showcase::{self, Showcase};
use motion_deck::ui::theming::{ThemeMode, ThemeState, THEME_TRANSITION};
use std::time::{Duration, Instant};
use tempfile::tempdir;

#[test]
fn language_change_via_config_file() {
    let dir = tempdir().expect("failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let mut cfg = Config::default();
    cfg.general.language = Some("en-US".to_string());
    config::save_to_path(&cfg, &config_path).expect("failed to write config");

    let loaded = config::load_from_path(&config_path).expect("failed to load config");
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    cfg.general.language = Some("fr".to_string());
    config::save_to_path(&cfg, &config_path).expect("failed to write config");

    let loaded = config::load_from_path(&config_path).expect("failed to load config");
    let i18n_fr = I18n::new(None, &loaded);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
    assert_eq!(i18n_fr.tr("showcase-copy"), "Copier");
}

#[test]
fn cli_language_takes_precedence_over_config() {
    let mut cfg = Config::default();
    cfg.general.language = Some("fr".to_string());

    let i18n = I18n::new(Some("en-US".to_string()), &cfg);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[test]
fn every_catalog_key_has_a_translation() {
    let i18n = I18n::default();
    for category in Category::ALL {
        assert!(!i18n.tr(category.label_key()).starts_with("MISSING"));
        for entry in catalog::entries(category) {
            assert!(
                !i18n.tr(entry.name_key).starts_with("MISSING"),
                "missing name translation for {}",
                entry.id
            );
            assert!(
                !i18n.tr(entry.description_key).starts_with("MISSING"),
                "missing description translation for {}",
                entry.id
            );
        }
    }
}

#[test]
fn contact_form_retries_with_exponential_backoff() {
    let now = Instant::now();
    let mut form = ContactForm::new();
    let _ = form.update(
        contact::Message::Input(Field::Name, "Ada".to_string()),
        now,
    );
    let _ = form.update(
        contact::Message::Input(Field::Email, "ada@example.com".to_string()),
        now,
    );
    let _ = form.update(
        contact::Message::Input(Field::Message, "Hello there".to_string()),
        now,
    );

    let event = form.update(contact::Message::Submit, now);
    assert!(matches!(
        event,
        contact::Event::StartAttempt { attempt: 1 }
    ));
    assert!(form.is_submitting());

    // The retry event carries the upcoming attempt number; the first
    // failure schedules a 1 s delay, the second doubles it.
    let event = form.update(
        contact::Message::AttemptFinished {
            attempt: 1,
            success: false,
        },
        now,
    );
    match event {
        contact::Event::ScheduleRetry { attempt, delay } => {
            assert_eq!(attempt, 2);
            assert_eq!(delay, Duration::from_secs(1));
        }
        other => panic!("expected a retry, got {:?}", other),
    }

    let event = form.update(contact::Message::RetryDelayElapsed { attempt: 2 }, now);
    assert!(matches!(
        event,
        contact::Event::StartAttempt { attempt: 2 }
    ));

    let event = form.update(
        contact::Message::AttemptFinished {
            attempt: 2,
            success: false,
        },
        now,
    );
    match event {
        contact::Event::ScheduleRetry { attempt, delay } => {
            assert_eq!(attempt, 3);
            assert_eq!(delay, Duration::from_secs(2));
        }
        other => panic!("expected a retry, got {:?}", other),
    }

    // The third and last attempt fails for good.
    let event = form.update(contact::Message::RetryDelayElapsed { attempt: 3 }, now);
    assert!(matches!(
        event,
        contact::Event::StartAttempt { attempt: 3 }
    ));
    let event = form.update(
        contact::Message::AttemptFinished {
            attempt: 3,
            success: false,
        },
        now,
    );
    assert!(matches!(event, contact::Event::Failed));
    assert!(!form.is_submitting());
}

#[test]
fn contact_form_success_on_a_retry_shows_the_banner() {
    let now = Instant::now();
    let mut form = ContactForm::new();
    for (field, value) in [
        (Field::Name, "Ada"),
        (Field::Email, "ada@example.com"),
        (Field::Message, "Hello there"),
    ] {
        let _ = form.update(contact::Message::Input(field, value.to_string()), now);
    }

    let _ = form.update(contact::Message::Submit, now);
    let _ = form.update(
        contact::Message::AttemptFinished {
            attempt: 1,
            success: false,
        },
        now,
    );
    let _ = form.update(contact::Message::RetryDelayElapsed { attempt: 2 }, now);
    let event = form.update(
        contact::Message::AttemptFinished {
            attempt: 2,
            success: true,
        },
        now,
    );

    assert!(matches!(event, contact::Event::Succeeded));
    assert!(form.shows_success_banner());
}

#[test]
fn stale_attempt_results_are_ignored() {
    let now = Instant::now();
    let mut form = ContactForm::new();
    for (field, value) in [
        (Field::Name, "Ada"),
        (Field::Email, "ada@example.com"),
        (Field::Message, "Hello there"),
    ] {
        let _ = form.update(contact::Message::Input(field, value.to_string()), now);
    }
    let _ = form.update(contact::Message::Submit, now);

    // A completion for an attempt that is not in flight must not move the
    // state machine.
    let event = form.update(
        contact::Message::AttemptFinished {
            attempt: 7,
            success: true,
        },
        now,
    );
    assert!(matches!(event, contact::Event::None));
    assert!(form.is_submitting());
}

#[test]
fn category_switch_goes_through_a_loading_phase() {
    let now = Instant::now();
    let mut showcase = Showcase::default();
    assert_eq!(showcase.category(), Category::Transitions);

    let event = showcase.update(showcase::Message::SelectCategory(Category::Keyframes), now);
    assert!(matches!(
        event,
        showcase::Event::CategoryChanged(Category::Keyframes)
    ));
    assert!(showcase.is_loading());

    // The loading window is 500 ms.
    assert!(!showcase.tick(now + Duration::from_millis(200)));
    assert!(showcase.is_loading());
    assert!(showcase.tick(now + Duration::from_millis(600)));
    assert!(!showcase.is_loading());
}

#[test]
fn theme_transition_completes_after_300_ms() {
    let now = Instant::now();
    let mut theme = ThemeState::new(ThemeMode::Light);
    assert!(!theme.is_dark());

    theme.set_mode(ThemeMode::Dark, true, now);
    assert!(theme.is_transitioning());

    let _ = theme.tick(now + THEME_TRANSITION / 2);
    assert!(theme.is_transitioning());

    let _ = theme.tick(now + THEME_TRANSITION + Duration::from_millis(10));
    assert!(!theme.is_transitioning());
    assert!(theme.is_dark());
}

#[test]
fn catalog_covers_every_category() {
    let mut total = 0;
    for category in Category::ALL {
        let entries = catalog::entries(category);
        assert!(!entries.is_empty(), "no entries for {:?}", category);
        total += entries.len();
    }
    assert_eq!(total, 21);

    // Looping previews declare it, one-shot previews do not.
    let pulse = catalog::find("pulse").expect("pulse entry");
    assert_eq!(pulse.motion.kind, MotionKind::Pulse);
    assert!(pulse.motion.repeats);
    let shake = catalog::find("shake").expect("shake entry");
    assert!(!shake.motion.repeats);
}

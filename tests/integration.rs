// SPDX-License-Identifier: MPL-2.0
use meetdeck::config::{self, Config};
use meetdeck::features::{Feature, FEATURES};
use meetdeck::i18n::fluent::I18n;
use meetdeck::ui::notifications::{
    Manager, NotificationMessage, Severity, Snackbar, ToastApi, ToastOptions, WARNING_ICON,
};
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let mut initial_config = Config::default();
    initial_config.general.language = Some("en-US".to_string());
    config::save_to_path(&initial_config, &config_path).expect("Failed to write initial config");

    let loaded = config::load_from_path(&config_path).expect("Failed to load initial config");
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    let mut french_config = Config::default();
    french_config.general.language = Some("fr".to_string());
    config::save_to_path(&french_config, &config_path).expect("Failed to write french config");

    let loaded = config::load_from_path(&config_path).expect("Failed to load french config");
    let i18n_fr = I18n::new(None, &loaded);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
    assert_eq!(i18n_fr.tr("meetings-title"), "Réunions");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn meetings_feature_is_compiled_in() {
    assert!(FEATURES.meetings.enabled);
    assert!(FEATURES.is_enabled(Feature::Meetings));
    assert_eq!(FEATURES.lookup("meetings").map(|c| c.enabled), Some(true));
}

#[derive(Default)]
struct CountingToasts {
    generic: Vec<(String, ToastOptions)>,
    success: Vec<String>,
    error: Vec<String>,
}

impl ToastApi for CountingToasts {
    fn toast(&mut self, message: &str, options: ToastOptions) {
        self.generic.push((message.to_string(), options));
    }

    fn success(&mut self, message: &str) {
        self.success.push(message.to_string());
    }

    fn error(&mut self, message: &str) {
        self.error.push(message.to_string());
    }
}

#[test]
fn each_snackbar_call_hits_exactly_one_primitive() {
    let mut api = CountingToasts::default();
    let mut snackbar = Snackbar::new(&mut api);
    snackbar.show_success("Saved");
    snackbar.show_error("Failed");
    snackbar.show_info("FYI");
    snackbar.show_warning("Careful");

    assert_eq!(api.success, vec!["Saved".to_string()]);
    assert_eq!(api.error, vec!["Failed".to_string()]);
    assert_eq!(
        api.generic,
        vec![
            ("FYI".to_string(), ToastOptions::default()),
            ("Careful".to_string(), ToastOptions::with_icon(WARNING_ICON)),
        ]
    );
}

#[test]
fn manager_snackbar_queues_past_visible_limit() {
    let mut settings = Config::default().notifications;
    settings.max_visible = Some(2);
    let mut manager = Manager::with_config(&settings);

    {
        let mut snackbar = manager.snackbar();
        snackbar.show_info("one");
        snackbar.show_info("two");
        snackbar.show_error("three");
    }
    assert_eq!(manager.visible_count(), 2);
    assert_eq!(manager.queued_count(), 1);

    let oldest = manager
        .visible()
        .last()
        .map(|n| n.id())
        .expect("visible toast");
    manager.handle_message(&NotificationMessage::Dismiss(oldest));

    assert_eq!(manager.queued_count(), 0);
    assert!(manager
        .visible()
        .any(|n| n.severity() == Severity::Error && n.message() == "three"));
}

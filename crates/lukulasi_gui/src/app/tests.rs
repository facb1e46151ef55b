//! App-level behavior tests that run without a UI context.

use super::popup_view::{popup_content, popup_estimate_len, PopupContent};
use super::LukulasiApp;
use lukulasi_core::coordinator::{DisplayState, TranslationOutcome};
use lukulasi_core::selection::{TrackerState, Trigger, TriggerKind};
use lukulasi_core::token::TokenRange;
use lukulasi_core::translate::{Lang, ProviderKind};
use lukulasi_core::Config;
use tempfile::TempDir;

fn test_config(dir: &TempDir) -> Config {
    Config {
        state_db_path: dir
            .path()
            .join("state.redb")
            .to_str()
            .expect("state path")
            .to_string(),
        content_dir: dir
            .path()
            .join("content")
            .to_str()
            .expect("content path")
            .to_string(),
        port: 0,
        max_upload_size: 1024 * 1024,
        max_text_len: 10_000,
        provider: ProviderKind::Offline,
        source_lang: Lang::Fi,
        target_lang: Lang::En,
    }
}

fn test_app(dir: &TempDir) -> LukulasiApp {
    LukulasiApp::new(test_config(dir)).expect("app")
}

fn display(kind: TriggerKind, outcome: TranslationOutcome) -> DisplayState {
    DisplayState {
        trigger: Trigger {
            text: "hei maailma".to_string(),
            range: Some(TokenRange::new(0, 2)),
            kind,
        },
        outcome,
    }
}

#[test]
fn start_reading_persists_and_restores_reading_mode() {
    let dir = TempDir::new().expect("temp dir");
    {
        let mut app = test_app(&dir);
        app.input_text = "Hei maailma".to_string();
        app.start_reading();
        assert!(!app.input_mode);
        assert_eq!(app.tokens.len(), 3);
    }

    let app = test_app(&dir);
    assert!(!app.input_mode);
    assert_eq!(app.input_text, "Hei maailma");
    assert_eq!(app.tokens.len(), 3);
}

#[test]
fn clear_restores_input_mode_on_next_start() {
    let dir = TempDir::new().expect("temp dir");
    {
        let mut app = test_app(&dir);
        app.input_text = "Hei maailma".to_string();
        app.start_reading();
        app.clear_text();
    }

    let app = test_app(&dir);
    assert!(app.input_mode);
    assert_eq!(app.input_text, "");
}

#[test]
fn swap_languages_resets_to_input_and_swaps_pair() {
    let dir = TempDir::new().expect("temp dir");
    let mut app = test_app(&dir);
    app.input_text = "Hei maailma".to_string();
    app.start_reading();

    app.swap_languages();
    assert!(app.input_mode);
    assert_eq!(app.input_text, "");
    assert_eq!(app.source_lang, Lang::En);
    assert_eq!(app.target_lang, Lang::Fi);
    assert_eq!(app.coordinator.languages(), (Lang::En, Lang::Fi));
}

#[test]
fn empty_input_never_enters_reading_mode() {
    let dir = TempDir::new().expect("temp dir");
    let mut app = test_app(&dir);
    app.input_text = "   ".to_string();
    app.start_reading();
    assert!(app.input_mode);
}

#[test]
fn too_long_state_wins_over_display_slot() {
    let state = TrackerState::SelectionTooLong;
    let slot = display(TriggerKind::Selection, TranslationOutcome::Loading);
    assert_eq!(popup_content(&state, Some(&slot)), Some(PopupContent::TooLong));
}

#[test]
fn hover_tooltip_hides_while_loading_but_selection_popup_shows() {
    let idle = TrackerState::Idle;
    let hover = display(TriggerKind::Hover, TranslationOutcome::Loading);
    assert_eq!(popup_content(&idle, Some(&hover)), None);

    let selection = display(TriggerKind::Selection, TranslationOutcome::Loading);
    assert!(matches!(
        popup_content(&idle, Some(&selection)),
        Some(PopupContent::Loading { .. })
    ));
}

#[test]
fn outcomes_map_to_popup_content() {
    let idle = TrackerState::Idle;
    let success = display(
        TriggerKind::Hover,
        TranslationOutcome::Success("hello world".to_string()),
    );
    match popup_content(&idle, Some(&success)) {
        Some(PopupContent::Success {
            original,
            translated,
        }) => {
            assert_eq!(original, "hei maailma");
            assert_eq!(translated, "hello world");
        }
        other => panic!("unexpected content: {:?}", other),
    }

    let failed = display(TriggerKind::Selection, TranslationOutcome::Failed);
    assert_eq!(popup_content(&idle, Some(&failed)), Some(PopupContent::Failed));
    assert_eq!(popup_content(&idle, None), None);
}

#[test]
fn estimate_length_covers_the_longer_side() {
    let content = PopupContent::Success {
        original: "hei".to_string(),
        translated: "a considerably longer translation".to_string(),
    };
    assert_eq!(
        popup_estimate_len(&content),
        "a considerably longer translation".chars().count()
    );
}

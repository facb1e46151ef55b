//! Durable view-state key-value store.
//!
//! One string key per field. Every write is best-effort: a failure is logged
//! and reported as `false`, never propagated into the interaction flow,
//! because every stored field has a safe default.

use crate::error::AppError;
use crate::token::TokenRange;
use crate::view_state::{decode_range, encode_range, ViewState};
use redb::{Database, ReadableDatabase, TableDefinition};
use tracing::warn;

const STATE_TABLE: TableDefinition<&str, &str> = TableDefinition::new("view_state");

/// Logical field names in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateKey {
    InputText,
    ViewMode,
    LastTranslatedRange,
    ReadingScrollOffset,
    AutoCleanPreference,
}

impl StateKey {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InputText => "input-text",
            Self::ViewMode => "view-mode",
            Self::LastTranslatedRange => "last-translated-range",
            Self::ReadingScrollOffset => "reading-scroll-offset",
            Self::AutoCleanPreference => "auto-clean-preference",
        }
    }
}

/// View-state store backed by redb.
pub struct StateStore {
    db: Database,
}

impl StateStore {
    /// Open (or create) the store at `path`.
    ///
    /// # Errors
    /// Returns an error if the database cannot be created or opened.
    pub fn open(path: &str) -> Result<Self, AppError> {
        if let Some(parent) = std::path::Path::new(path).parent() {
            std::fs::create_dir_all(parent).ok();
        }
        let db = Database::create(path)?;
        Ok(Self { db })
    }

    /// Write one field. Best-effort.
    ///
    /// # Returns
    /// `true` when the value was durably written.
    pub fn save(&self, key: StateKey, value: &str) -> bool {
        match self.save_inner(key, value) {
            Ok(()) => true,
            Err(err) => {
                warn!(key = key.as_str(), "state write failed: {}", err);
                false
            }
        }
    }

    /// Remove one field. Best-effort, absent keys are fine.
    pub fn remove(&self, key: StateKey) -> bool {
        match self.remove_inner(key) {
            Ok(()) => true,
            Err(err) => {
                warn!(key = key.as_str(), "state remove failed: {}", err);
                false
            }
        }
    }

    /// Read one field. Failures degrade to `None` after logging.
    pub fn load(&self, key: StateKey) -> Option<String> {
        match self.load_inner(key) {
            Ok(value) => value,
            Err(err) => {
                warn!(key = key.as_str(), "state read failed: {}", err);
                None
            }
        }
    }

    fn save_inner(&self, key: StateKey, value: &str) -> Result<(), AppError> {
        let txn = self.db.begin_write()?;
        {
            let mut table = txn.open_table(STATE_TABLE)?;
            table.insert(key.as_str(), value)?;
        }
        txn.commit()?;
        Ok(())
    }

    fn remove_inner(&self, key: StateKey) -> Result<(), AppError> {
        let txn = self.db.begin_write()?;
        {
            let mut table = txn.open_table(STATE_TABLE)?;
            table.remove(key.as_str())?;
        }
        txn.commit()?;
        Ok(())
    }

    fn load_inner(&self, key: StateKey) -> Result<Option<String>, AppError> {
        let txn = self.db.begin_read()?;
        let table = match txn.open_table(STATE_TABLE) {
            Ok(table) => table,
            // Nothing has ever been written; absence is a valid state.
            Err(redb::TableError::TableDoesNotExist(_)) => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        Ok(table.get(key.as_str())?.map(|guard| guard.value().to_string()))
    }

    /// Persist the current input text.
    pub fn save_input_text(&self, text: &str) -> bool {
        self.save(StateKey::InputText, text)
    }

    /// Persist the view-mode flag (`true` = input view).
    pub fn save_view_mode(&self, input_mode: bool) -> bool {
        self.save(StateKey::ViewMode, if input_mode { "true" } else { "false" })
    }

    /// Persist or clear the last-translated range marker.
    pub fn save_last_translated(&self, range: Option<TokenRange>) -> bool {
        match range {
            Some(range) => self.save(StateKey::LastTranslatedRange, &encode_range(range)),
            None => self.remove(StateKey::LastTranslatedRange),
        }
    }

    /// Persist the reading-view scroll offset.
    pub fn save_scroll_offset(&self, offset: f32) -> bool {
        self.save(StateKey::ReadingScrollOffset, &offset.to_string())
    }

    /// Persist the auto-clean preference.
    pub fn save_auto_clean(&self, enabled: bool) -> bool {
        self.save(
            StateKey::AutoCleanPreference,
            if enabled { "true" } else { "false" },
        )
    }

    /// Read the auto-clean preference; absent means disabled.
    pub fn load_auto_clean(&self) -> bool {
        self.load(StateKey::AutoCleanPreference).as_deref() == Some("true")
    }

    /// Read and assemble the startup view state with the restore policy
    /// applied.
    pub fn load_view_state(&self) -> ViewState {
        let text = self.load(StateKey::InputText);
        let input_mode = self
            .load(StateKey::ViewMode)
            .map(|value| value == "true");
        let last_translated = self
            .load(StateKey::LastTranslatedRange)
            .and_then(|raw| decode_range(&raw));
        let scroll_y = self
            .load(StateKey::ReadingScrollOffset)
            .and_then(|raw| raw.parse::<f32>().ok())
            .filter(|offset| offset.is_finite());
        ViewState::restore(text, input_mode, last_translated, scroll_y)
    }

    /// Wipe stored text and reading context and reset to input mode, as done
    /// on language swap or explicit clear.
    pub fn reset_to_input(&self) -> bool {
        let mut ok = self.save_input_text("");
        ok &= self.save_view_mode(true);
        ok &= self.remove(StateKey::LastTranslatedRange);
        ok &= self.remove(StateKey::ReadingScrollOffset);
        ok
    }
}

#[cfg(test)]
mod tests {
    use super::{StateKey, StateStore};
    use crate::token::TokenRange;
    use tempfile::TempDir;

    struct TestStore {
        _dir: TempDir,
        store: StateStore,
    }

    fn setup_store() -> TestStore {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("state.redb");
        let store = StateStore::open(path.to_str().expect("store path")).expect("store");
        TestStore { _dir: dir, store }
    }

    #[test]
    fn saved_fields_round_trip() {
        let TestStore { _dir: _guard, store } = setup_store();
        assert!(store.save_input_text("Hei maailma"));
        assert!(store.save_view_mode(false));
        assert!(store.save_last_translated(Some(TokenRange::new(2, 5))));
        assert!(store.save_scroll_offset(314.5));

        let state = store.load_view_state();
        assert_eq!(state.input_text, "Hei maailma");
        assert!(!state.input_mode);
        assert_eq!(state.last_translated, Some(TokenRange::new(2, 5)));
        assert_eq!(state.scroll_y, Some(314.5));
    }

    #[test]
    fn fresh_store_restores_defaults() {
        let TestStore { _dir: _guard, store } = setup_store();
        let state = store.load_view_state();
        assert!(state.input_mode);
        assert_eq!(state.input_text, "");
        assert_eq!(state.last_translated, None);
        assert_eq!(state.scroll_y, None);
    }

    #[test]
    fn reading_mode_with_empty_text_restores_input_mode() {
        let TestStore { _dir: _guard, store } = setup_store();
        store.save_input_text("");
        store.save_view_mode(false);
        let state = store.load_view_state();
        assert!(state.input_mode);
    }

    #[test]
    fn reset_to_input_wipes_reading_context() {
        let TestStore { _dir: _guard, store } = setup_store();
        store.save_input_text("Hei maailma");
        store.save_view_mode(false);
        store.save_last_translated(Some(TokenRange::new(0, 1)));
        store.save_scroll_offset(50.0);

        assert!(store.reset_to_input());
        let state = store.load_view_state();
        assert!(state.input_mode);
        assert_eq!(state.input_text, "");
        assert_eq!(state.last_translated, None);
        assert_eq!(state.scroll_y, None);
    }

    #[test]
    fn corrupt_range_payload_reads_as_absent() {
        let TestStore { _dir: _guard, store } = setup_store();
        store.save_input_text("Hei maailma");
        store.save_view_mode(false);
        store.save(StateKey::LastTranslatedRange, r#"{"start":"x","end":1}"#);
        let state = store.load_view_state();
        assert_eq!(state.last_translated, None);
    }

    #[test]
    fn clearing_range_removes_the_key() {
        let TestStore { _dir: _guard, store } = setup_store();
        store.save_last_translated(Some(TokenRange::new(1, 2)));
        assert!(store.save_last_translated(None));
        assert_eq!(store.load(StateKey::LastTranslatedRange), None);
        // Removing again stays fine.
        assert!(store.save_last_translated(None));
    }

    #[test]
    fn auto_clean_preference_defaults_to_disabled() {
        let TestStore { _dir: _guard, store } = setup_store();
        assert!(!store.load_auto_clean());
        store.save_auto_clean(true);
        assert!(store.load_auto_clean());
    }
}

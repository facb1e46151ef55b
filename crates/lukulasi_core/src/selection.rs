//! Hover/selection tracking state machine.
//!
//! Raw pointer and selection signals come in from the UI layer; qualifying
//! ones leave as translation triggers, everything else collapses to a clear.
//! Containment is decided by the reading-content region check only.

use crate::constants::{MAX_SELECTION_LEN, MIN_SELECTION_LEN};
use crate::token::TokenRange;

/// Which interaction surfaces may trigger translations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TranslationMode {
    Hover,
    Selection,
    #[default]
    Both,
    Off,
}

impl TranslationMode {
    /// Returns `true` when hover (and touch) triggers are honored.
    pub fn allows_hover(self) -> bool {
        matches!(self, Self::Hover | Self::Both)
    }

    /// Returns `true` when selection triggers are honored.
    pub fn allows_selection(self) -> bool {
        matches!(self, Self::Selection | Self::Both)
    }

    /// Human-readable label for mode pickers.
    pub fn label(self) -> &'static str {
        match self {
            Self::Hover => "Hover only",
            Self::Selection => "Selection only",
            Self::Both => "Hover & selection",
            Self::Off => "Off",
        }
    }

    /// All modes, in picker order.
    pub const ALL: [TranslationMode; 4] = [
        TranslationMode::Both,
        TranslationMode::Hover,
        TranslationMode::Selection,
        TranslationMode::Off,
    ];
}

/// The user action that produced a trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerKind {
    Hover,
    Selection,
    Touch,
}

/// A qualifying user action that may lead to a translation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trigger {
    pub text: String,
    /// `None` when an endpoint could not be resolved to a token; translation
    /// still proceeds on the raw string, but no last-translated marker moves.
    pub range: Option<TokenRange>,
    pub kind: TriggerKind,
}

/// Output of feeding a raw signal into the tracker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackerEvent {
    Trigger(Trigger),
    /// Any pending or shown translation must be dropped immediately.
    Clear,
    SelectionTooLong,
}

/// Where a raw signal's anchor landed, as hit-tested by the UI layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionAnchor {
    pub in_reading_content: bool,
    pub in_popup: bool,
}

impl SelectionAnchor {
    /// Anchor inside the reading-content region and outside the popup.
    pub fn in_content() -> Self {
        Self {
            in_reading_content: true,
            in_popup: false,
        }
    }
}

/// Raw document selection state as observed by the UI layer.
#[derive(Debug, Clone)]
pub struct SelectionSnapshot {
    pub text: String,
    pub anchor: SelectionAnchor,
    /// Token index the selection start resolved to, if any.
    pub start_token: Option<usize>,
    /// Token index the selection end resolved to, if any.
    pub end_token: Option<usize>,
}

/// Current interaction state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TrackerState {
    #[default]
    Idle,
    Hovering {
        range: TokenRange,
    },
    Selecting {
        text: String,
        range: Option<TokenRange>,
    },
    SelectionTooLong,
}

/// Maps raw hover/selection signals to translation triggers.
#[derive(Debug, Default)]
pub struct SelectionTracker {
    mode: TranslationMode,
    state: TrackerState,
}

impl SelectionTracker {
    pub fn new(mode: TranslationMode) -> Self {
        Self {
            mode,
            state: TrackerState::Idle,
        }
    }

    pub fn state(&self) -> &TrackerState {
        &self.state
    }

    pub fn mode(&self) -> TranslationMode {
        self.mode
    }

    /// Switch the translation mode, clearing state the new mode disallows.
    pub fn set_mode(&mut self, mode: TranslationMode) -> Option<TrackerEvent> {
        self.mode = mode;
        let allowed = match &self.state {
            TrackerState::Idle => true,
            TrackerState::Hovering { .. } => mode.allows_hover(),
            TrackerState::Selecting { .. } | TrackerState::SelectionTooLong => {
                mode.allows_selection()
            }
        };
        if allowed {
            None
        } else {
            self.reset()
        }
    }

    /// Pointer entered a word token.
    ///
    /// # Arguments
    /// - `token_index`: Index of the hovered word token.
    /// - `token_text`: The word content.
    /// - `anchor`: Containment of the pointer position.
    /// - `has_active_selection`: Whether a document selection currently exists.
    ///
    /// # Returns
    /// A hover trigger when the event qualifies.
    pub fn hover_enter(
        &mut self,
        token_index: usize,
        token_text: &str,
        anchor: SelectionAnchor,
        has_active_selection: bool,
    ) -> Option<TrackerEvent> {
        if !self.mode.allows_hover() || has_active_selection {
            return None;
        }
        if anchor.in_popup || !anchor.in_reading_content {
            return None;
        }
        let range = TokenRange::single(token_index);
        if self.state == (TrackerState::Hovering { range }) {
            return None;
        }
        self.state = TrackerState::Hovering { range };
        Some(TrackerEvent::Trigger(Trigger {
            text: token_text.to_string(),
            range: Some(range),
            kind: TriggerKind::Hover,
        }))
    }

    /// Touch landed on a word token. Touch has no hover concept, so the
    /// trigger bypasses debounce downstream.
    pub fn touch_start(
        &mut self,
        token_index: usize,
        token_text: &str,
        anchor: SelectionAnchor,
    ) -> Option<TrackerEvent> {
        if !self.mode.allows_hover() {
            return None;
        }
        if anchor.in_popup || !anchor.in_reading_content {
            return None;
        }
        let range = TokenRange::single(token_index);
        self.state = TrackerState::Hovering { range };
        Some(TrackerEvent::Trigger(Trigger {
            text: token_text.to_string(),
            range: Some(range),
            kind: TriggerKind::Touch,
        }))
    }

    /// Pointer left the hovered token.
    pub fn hover_leave(&mut self) -> Option<TrackerEvent> {
        match self.state {
            TrackerState::Hovering { .. } => self.reset(),
            _ => None,
        }
    }

    /// The document selection changed.
    ///
    /// Length policy: a trimmed selection shorter than the minimum is treated
    /// as no selection; one longer than the maximum becomes
    /// [`TrackerEvent::SelectionTooLong`] and never reaches translation.
    pub fn selection_changed(&mut self, snapshot: &SelectionSnapshot) -> Option<TrackerEvent> {
        if !self.mode.allows_selection() {
            return None;
        }
        // Selections started inside the popup's own subtree never count,
        // including as a clear.
        if snapshot.anchor.in_popup {
            return None;
        }
        if !snapshot.anchor.in_reading_content {
            return self.reset();
        }

        let trimmed = snapshot.text.trim();
        let len = trimmed.chars().count();
        if len < MIN_SELECTION_LEN {
            return self.reset();
        }
        if len > MAX_SELECTION_LEN {
            self.state = TrackerState::SelectionTooLong;
            return Some(TrackerEvent::SelectionTooLong);
        }

        let range = match (snapshot.start_token, snapshot.end_token) {
            (Some(start), Some(end)) => Some(TokenRange::new(start, end)),
            _ => None,
        };
        let next = TrackerState::Selecting {
            text: trimmed.to_string(),
            range,
        };
        if self.state == next {
            return None;
        }
        self.state = next;
        Some(TrackerEvent::Trigger(Trigger {
            text: trimmed.to_string(),
            range,
            kind: TriggerKind::Selection,
        }))
    }

    /// The document selection was dismissed.
    pub fn selection_cleared(&mut self) -> Option<TrackerEvent> {
        match self.state {
            TrackerState::Idle | TrackerState::Hovering { .. } => None,
            _ => self.reset(),
        }
    }

    fn reset(&mut self) -> Option<TrackerEvent> {
        if self.state == TrackerState::Idle {
            return None;
        }
        self.state = TrackerState::Idle;
        Some(TrackerEvent::Clear)
    }
}

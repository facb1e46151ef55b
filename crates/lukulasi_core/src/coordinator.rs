//! Translation request coordination: debounce, staleness, and caching.
//!
//! The coordinator owns every delay and ordering rule between a qualifying
//! trigger and the outcome shown in the UI. It is poll-driven: the host calls
//! [`TranslationCoordinator::poll`] once per tick with the current time,
//! issues any returned request on its worker, and feeds completions back in
//! with the request id. Results for superseded ids are dropped silently.

use crate::constants::{HOVER_DELAY, SELECTION_DEBOUNCE};
use crate::selection::{Trigger, TriggerKind};
use crate::timer::{TimerHandle, TimerQueue};
use crate::token::TokenRange;
use crate::translate::Lang;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Tri-state result of a translation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationOutcome {
    Loading,
    Success(String),
    /// Generic failure; the upstream cause was logged where it happened.
    Failed,
}

/// A translation to be executed by the host's worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    pub id: u64,
    pub text: String,
    pub source: Lang,
    pub target: Lang,
    pub range: Option<TokenRange>,
    pub kind: TriggerKind,
}

/// What the popup/tooltip currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayState {
    pub trigger: Trigger,
    pub outcome: TranslationOutcome,
}

#[derive(Debug)]
struct PendingTrigger {
    handle: TimerHandle,
    trigger: Trigger,
}

/// Debounces triggers and orders outcomes for one display slot.
pub struct TranslationCoordinator {
    source: Lang,
    target: Lang,
    timers: TimerQueue,
    pending: Option<PendingTrigger>,
    next_request_id: u64,
    /// Id of the most recently issued request; only it may apply an outcome.
    authoritative: Option<u64>,
    display: Option<DisplayState>,
    /// Per-token results, scoped to the current document.
    cache: HashMap<(String, Lang, Lang), String>,
}

impl TranslationCoordinator {
    pub fn new(source: Lang, target: Lang) -> Self {
        Self {
            source,
            target,
            timers: TimerQueue::new(),
            pending: None,
            next_request_id: 1,
            authoritative: None,
            display: None,
            cache: HashMap::new(),
        }
    }

    pub fn languages(&self) -> (Lang, Lang) {
        (self.source, self.target)
    }

    /// Current display slot contents, if any.
    pub fn display(&self) -> Option<&DisplayState> {
        self.display.as_ref()
    }

    /// Earliest pending debounce deadline, for precise host wakeups.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    /// Returns `true` while an issued request has not resolved or been
    /// superseded. Hosts keep polling for worker events while this holds.
    pub fn has_inflight(&self) -> bool {
        self.authoritative.is_some()
    }

    /// Accept a qualifying trigger. A newer trigger always supersedes both
    /// the pending debounce and any in-flight request; cached hover/touch
    /// words resolve immediately without a request.
    pub fn submit(&mut self, trigger: Trigger, now: Instant) {
        self.cancel_pending();
        self.authoritative = None;

        let delay = match trigger.kind {
            TriggerKind::Hover => {
                if self.resolve_from_cache(&trigger) {
                    return;
                }
                // Tooltip stays hidden until this word's own result lands.
                self.display = None;
                HOVER_DELAY
            }
            TriggerKind::Selection => {
                // The popup appears with the selected text right away; only
                // the lookup itself is debounced.
                self.display = Some(DisplayState {
                    trigger: trigger.clone(),
                    outcome: TranslationOutcome::Loading,
                });
                SELECTION_DEBOUNCE
            }
            TriggerKind::Touch => {
                if self.resolve_from_cache(&trigger) {
                    return;
                }
                self.display = None;
                Duration::ZERO
            }
        };

        let handle = self.timers.schedule(now, delay);
        self.pending = Some(PendingTrigger { handle, trigger });
    }

    /// Fire due debounce timers and hand back at most one request to issue.
    pub fn poll(&mut self, now: Instant) -> Option<TranslationRequest> {
        let due = self.timers.fire_due(now);
        let pending = self.pending.as_ref()?;
        if !due.contains(&pending.handle) {
            return None;
        }
        let PendingTrigger { trigger, .. } = self.pending.take()?;

        if self.resolve_from_cache(&trigger) {
            return None;
        }

        let id = self.next_request_id;
        self.next_request_id += 1;
        self.authoritative = Some(id);
        self.display = Some(DisplayState {
            trigger: trigger.clone(),
            outcome: TranslationOutcome::Loading,
        });
        Some(TranslationRequest {
            id,
            text: trigger.text,
            source: self.source,
            target: self.target,
            range: trigger.range,
            kind: trigger.kind,
        })
    }

    /// Apply a successful result.
    ///
    /// # Returns
    /// `false` when the request was superseded and the result was dropped.
    pub fn apply_success(&mut self, request_id: u64, translated: String) -> bool {
        if self.authoritative != Some(request_id) {
            debug!(request_id, "dropping stale translation result");
            return false;
        }
        self.authoritative = None;
        if let Some(display) = self.display.as_mut() {
            self.cache.insert(
                (display.trigger.text.clone(), self.source, self.target),
                translated.clone(),
            );
            display.outcome = TranslationOutcome::Success(translated);
            return true;
        }
        false
    }

    /// Apply a failed result. The cause is logged here; the display slot only
    /// learns that the lookup failed.
    ///
    /// # Returns
    /// `false` when the request was superseded and the failure was dropped.
    pub fn apply_failure(&mut self, request_id: u64, cause: &str) -> bool {
        if self.authoritative != Some(request_id) {
            debug!(request_id, "dropping stale translation failure");
            return false;
        }
        warn!(request_id, "translation failed: {}", cause);
        self.authoritative = None;
        if let Some(display) = self.display.as_mut() {
            display.outcome = TranslationOutcome::Failed;
            return true;
        }
        false
    }

    /// Synchronous clear: cancels the pending debounce, invalidates any
    /// in-flight request, and empties the display slot.
    pub fn clear(&mut self) {
        self.cancel_pending();
        self.authoritative = None;
        self.display = None;
    }

    /// The tokenized document changed; per-token cache no longer applies.
    pub fn document_changed(&mut self) {
        self.clear();
        self.cache.clear();
    }

    /// Swap or set the language pair. Cached entries are keyed per pair, so
    /// they stay valid, but anything pending belongs to the old pair.
    pub fn set_languages(&mut self, source: Lang, target: Lang) {
        if (source, target) != (self.source, self.target) {
            self.clear();
            self.source = source;
            self.target = target;
        }
    }

    fn cancel_pending(&mut self) {
        if let Some(pending) = self.pending.take() {
            self.timers.cancel(pending.handle);
        }
    }

    fn resolve_from_cache(&mut self, trigger: &Trigger) -> bool {
        let key = (trigger.text.clone(), self.source, self.target);
        if let Some(cached) = self.cache.get(&key) {
            self.authoritative = None;
            self.display = Some(DisplayState {
                trigger: trigger.clone(),
                outcome: TranslationOutcome::Success(cached.clone()),
            });
            true
        } else {
            false
        }
    }
}

//! Form Session State
//!
//! Holds the roster (model) and the transient draft (view state) as one
//! coordinated unit with an explicit mutation API. The presentation layer
//! pushes field changes in and reads the roster, draft, and errors back out
//! after each event; nothing here blocks or runs concurrently.

use tracing::debug;

use crate::error::{Result, RosterError};
use crate::models::{DraftField, Player, PlayerDraft};
use crate::roster::validation::{DraftValidator, ValidationReport};
use crate::roster::PlayerRoster;

/// Where a form interaction currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    /// No pending edits; the draft is the empty "new record" buffer.
    Idle,
    /// The user has typed into the draft or loaded a record into it.
    Editing,
}

/// Result of submitting the current draft.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// A new record was appended.
    Created(Player),
    /// An existing record was overwritten; `None` when the target id had
    /// disappeared before submit, in which case the roster is unchanged.
    Updated(Option<Player>),
    /// Validation failed; the draft is retained and the roster untouched.
    Rejected(ValidationReport),
}

/// Single-user form interaction over an owned roster.
#[derive(Debug, Clone)]
pub struct FormSession {
    roster: PlayerRoster,
    draft: PlayerDraft,
    errors: ValidationReport,
    phase: FormPhase,
}

impl FormSession {
    pub fn new(roster: PlayerRoster) -> Self {
        Self {
            roster,
            draft: PlayerDraft::new(),
            errors: ValidationReport::default(),
            phase: FormPhase::Idle,
        }
    }

    /// Session over the hard-coded startup roster.
    pub fn seeded() -> Self {
        Self::new(PlayerRoster::seeded())
    }

    // ========================
    // Read access
    // ========================

    pub fn roster(&self) -> &PlayerRoster {
        &self.roster
    }

    pub fn draft(&self) -> &PlayerDraft {
        &self.draft
    }

    /// Errors from the most recent rejected submit.
    pub fn errors(&self) -> &ValidationReport {
        &self.errors
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    // ========================
    // Form events
    // ========================

    /// One field change from the form.
    pub fn set_field(&mut self, field: DraftField, value: impl Into<String>) {
        self.draft.set(field, value);
        self.phase = FormPhase::Editing;
    }

    /// Load an existing record into the draft for editing. An unknown id is
    /// silently ignored.
    pub fn edit(&mut self, id: u32) {
        match self.roster.get(id) {
            Some(player) => {
                self.draft = PlayerDraft::from_player(player);
                self.errors = ValidationReport::default();
                self.phase = FormPhase::Editing;
            }
            None => debug!(id, "edit for unknown player id ignored"),
        }
    }

    /// Reset the draft and errors to the empty "new record" state.
    pub fn clear(&mut self) {
        self.draft.clear();
        self.errors = ValidationReport::default();
        self.phase = FormPhase::Idle;
    }

    /// Delete a record. The draft is deliberately left as-is, even when it
    /// was editing the removed record.
    pub fn remove(&mut self, id: u32) -> Option<Player> {
        self.roster.remove(id)
    }

    /// Validate the draft, then dispatch: empty id creates, otherwise the
    /// matching record is updated. On success the draft resets to "new".
    pub fn submit(&mut self) -> Result<SubmitOutcome> {
        let report = DraftValidator::validate(&self.draft);
        if !report.is_valid() {
            debug!(errors = report.errors().len(), "submit rejected");
            self.errors = report.clone();
            return Ok(SubmitOutcome::Rejected(report));
        }

        let outcome = if self.draft.is_new() {
            let player = self.roster.create(&self.draft)?;
            SubmitOutcome::Created(player)
        } else {
            let id = self
                .draft
                .id
                .trim()
                .parse::<u32>()
                .map_err(|_| RosterError::InvalidPlayerId { raw: self.draft.id.clone() })?;
            self.roster.update(id, &self.draft)?;
            SubmitOutcome::Updated(self.roster.get(id).cloned())
        };

        self.clear();
        Ok(outcome)
    }
}

//! # Editor State Machines
//!
//! The proposal form has two dialogs: one for adding or editing a single
//! slot, one for bulk generation. Each is modelled as a value that moves
//! between states through explicit transitions instead of a set of loose
//! mutable fields.
//!
//! Transitions consume the current state and return the next one. Saving is
//! the exception: it borrows the state so that a failed validation leaves
//! the dialog exactly as it was.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    errors::{HangoutError, HangoutResult},
    generator::generate_time_slots,
    models::{generation::QuickSlotForm, time_slot::TimeSlot},
    parse::{parse_calendar_day, parse_time_of_day},
};

/// Raw field values of the single-slot dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotDraft {
    pub date: String,
    pub start_time: String,
    pub end_time: String,
}

impl SlotDraft {
    /// Prefills a draft from an existing slot.
    pub fn from_slot(slot: &TimeSlot) -> Self {
        Self {
            date: slot.day().format("%Y-%m-%d").to_string(),
            start_time: slot.start_time().format("%H:%M").to_string(),
            end_time: slot.end_time().format("%H:%M").to_string(),
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.date.trim().is_empty()
            && !self.start_time.trim().is_empty()
            && !self.end_time.trim().is_empty()
    }

    /// Builds a slot with the given identifier from the draft.
    fn to_slot(&self, id: Uuid) -> HangoutResult<TimeSlot> {
        let date = parse_calendar_day(&self.date)
            .ok_or_else(|| HangoutError::Validation(format!("Invalid date: {:?}", self.date)))?;
        let start = parse_time_of_day(&self.start_time).ok_or_else(|| {
            HangoutError::Validation(format!("Invalid start time: {:?}", self.start_time))
        })?;
        let end = parse_time_of_day(&self.end_time).ok_or_else(|| {
            HangoutError::Validation(format!("Invalid end time: {:?}", self.end_time))
        })?;

        TimeSlot::with_id(id, date.and_time(start), date.and_time(end))
    }
}

/// A slot committed by the single-slot dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotCommit {
    Added(TimeSlot),
    Updated(TimeSlot),
}

impl SlotCommit {
    pub fn slot(&self) -> &TimeSlot {
        match self {
            SlotCommit::Added(slot) | SlotCommit::Updated(slot) => slot,
        }
    }
}

/// State of the single-slot dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditorState {
    #[default]
    Closed,
    CreatingNew(SlotDraft),
    Editing {
        id: Uuid,
        created_at: Option<DateTime<Utc>>,
        draft: SlotDraft,
    },
}

impl EditorState {
    /// Opens the dialog with an empty draft for a new slot.
    pub fn open(self) -> Self {
        EditorState::CreatingNew(SlotDraft::default())
    }

    /// Opens the dialog prefilled with `slot`.
    pub fn open_for(self, slot: &TimeSlot) -> Self {
        EditorState::Editing {
            id: slot.id,
            created_at: slot.created_at,
            draft: SlotDraft::from_slot(slot),
        }
    }

    /// Closes the dialog, discarding the draft.
    pub fn cancel(self) -> Self {
        EditorState::Closed
    }

    /// Validates the draft and returns the closed state with the committed slot.
    ///
    /// Saving a closed dialog is a no-op. New slots get a fresh identifier,
    /// edited slots keep theirs along with their creation time.
    pub fn save(&self) -> HangoutResult<(EditorState, Option<SlotCommit>)> {
        let commit = match self {
            EditorState::Closed => return Ok((EditorState::Closed, None)),
            EditorState::CreatingNew(draft) => {
                SlotCommit::Added(draft.to_slot(Uuid::new_v4())?.touched())
            }
            EditorState::Editing {
                id,
                created_at,
                draft,
            } => {
                let mut slot = draft.to_slot(*id)?;
                slot.created_at = *created_at;
                SlotCommit::Updated(slot.touched())
            }
        };

        Ok((EditorState::Closed, Some(commit)))
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, EditorState::Closed)
    }

    /// Identifier of the slot being edited, if any.
    pub fn editing_id(&self) -> Option<Uuid> {
        match self {
            EditorState::Editing { id, .. } => Some(*id),
            _ => None,
        }
    }

    pub fn draft(&self) -> Option<&SlotDraft> {
        match self {
            EditorState::Closed => None,
            EditorState::CreatingNew(draft) | EditorState::Editing { draft, .. } => Some(draft),
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut SlotDraft> {
        match self {
            EditorState::Closed => None,
            EditorState::CreatingNew(draft) | EditorState::Editing { draft, .. } => Some(draft),
        }
    }

    /// Whether the confirm action should be enabled.
    pub fn is_valid(&self) -> bool {
        self.draft().is_some_and(SlotDraft::is_complete)
    }
}

/// State of the quick generation dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum QuickSlotDialog {
    #[default]
    Closed,
    Open(QuickSlotForm),
}

impl QuickSlotDialog {
    /// Opens the dialog with a freshly reset form.
    pub fn open(self) -> Self {
        QuickSlotDialog::Open(QuickSlotForm::default())
    }

    pub fn close(self) -> Self {
        QuickSlotDialog::Closed
    }

    pub fn form(&self) -> Option<&QuickSlotForm> {
        match self {
            QuickSlotDialog::Open(form) => Some(form),
            QuickSlotDialog::Closed => None,
        }
    }

    pub fn form_mut(&mut self) -> Option<&mut QuickSlotForm> {
        match self {
            QuickSlotDialog::Open(form) => Some(form),
            QuickSlotDialog::Closed => None,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.form().is_some_and(QuickSlotForm::is_valid)
    }

    /// Parses the form, generates its slots and closes the dialog.
    ///
    /// Generating from a closed dialog yields no slots.
    pub fn generate(&self) -> HangoutResult<(QuickSlotDialog, Vec<TimeSlot>)> {
        let slots = match self {
            QuickSlotDialog::Closed => Vec::new(),
            QuickSlotDialog::Open(form) => generate_time_slots(&form.parse()?)?,
        };

        Ok((QuickSlotDialog::Closed, slots))
    }
}

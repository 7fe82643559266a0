use chrono_tz::Tz;
use tracing::debug;
use uuid::Uuid;

use crate::{
    editor::SlotCommit,
    errors::{HangoutError, HangoutResult},
    models::{
        calendar::TimeSlotPayload,
        time_slot::{sort_for_display, TimeSlot},
    },
};

/// The slots of a hangout proposal being put together.
///
/// Insertion order is kept as-is; [`TimeSlotList::sorted`] gives the
/// display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimeSlotList {
    slots: Vec<TimeSlot>,
}

impl TimeSlotList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, slot: TimeSlot) {
        self.slots.push(slot);
    }

    /// Appends generated slots after the existing ones
    ///
    /// Used when the quick generation dialog commits. Nothing is
    /// deduplicated: generating the same range twice doubles its slots.
    ///
    /// # Arguments
    ///
    /// * `slots` - Slots to append, typically the output of
    ///   [`crate::generator::generate_time_slots`]
    ///
    /// # Example
    ///
    /// ```rust
    /// use chrono::NaiveDate;
    /// use hangout_core::{generate_time_slots, slot_list::TimeSlotList, GenerationSpec};
    ///
    /// let day = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
    /// let spec = GenerationSpec::whole_day(day, day);
    ///
    /// let mut list = TimeSlotList::new();
    /// list.add_many(generate_time_slots(&spec).unwrap());
    /// assert_eq!(list.len(), 1);
    /// ```
    pub fn add_many(&mut self, slots: impl IntoIterator<Item = TimeSlot>) {
        let before = self.slots.len();
        self.slots.extend(slots);
        debug!("Added {} slots", self.slots.len() - before);
    }

    /// Replaces the slot with identifier `id`
    ///
    /// # Arguments
    ///
    /// * `id` - Identifier of the slot to replace
    /// * `slot` - The new slot value
    ///
    /// # Returns
    ///
    /// * `HangoutResult<()>` - [`HangoutError::NotFound`] if no slot has `id`
    pub fn update(&mut self, id: Uuid, slot: TimeSlot) -> HangoutResult<()> {
        let existing = self
            .slots
            .iter_mut()
            .find(|existing| existing.id == id)
            .ok_or_else(|| HangoutError::NotFound(format!("Time slot with ID {} not found", id)))?;
        *existing = slot;
        Ok(())
    }

    /// Removes the slot with identifier `id`, returning it if it was present.
    pub fn remove(&mut self, id: Uuid) -> Option<TimeSlot> {
        let index = self.slots.iter().position(|slot| slot.id == id)?;
        Some(self.slots.remove(index))
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }

    /// Applies a commit from the single-slot editor.
    pub fn apply(&mut self, commit: SlotCommit) -> HangoutResult<()> {
        match commit {
            SlotCommit::Added(slot) => {
                self.add(slot);
                Ok(())
            }
            SlotCommit::Updated(slot) => self.update(slot.id, slot),
        }
    }

    pub fn get(&self, id: Uuid) -> Option<&TimeSlot> {
        self.slots.iter().find(|slot| slot.id == id)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn as_slice(&self) -> &[TimeSlot] {
        &self.slots
    }

    /// Slots in display order: ascending by start.
    pub fn sorted(&self) -> Vec<TimeSlot> {
        let mut sorted = self.slots.clone();
        sort_for_display(&mut sorted);
        sorted
    }

    /// Wire payloads in display order, resolved in `tz`
    ///
    /// # Arguments
    ///
    /// * `tz` - Timezone the local slot times were entered in
    ///
    /// # Returns
    ///
    /// * `HangoutResult<Vec<TimeSlotPayload>>` - UTC payloads, or a
    ///   [`HangoutError::Validation`] for a time that does not exist in `tz`
    pub fn to_payloads(&self, tz: Tz) -> HangoutResult<Vec<TimeSlotPayload>> {
        self.sorted()
            .iter()
            .map(|slot| slot.to_payload(tz))
            .collect()
    }
}

impl From<Vec<TimeSlot>> for TimeSlotList {
    fn from(slots: Vec<TimeSlot>) -> Self {
        Self { slots }
    }
}

impl FromIterator<TimeSlot> for TimeSlotList {
    fn from_iter<I: IntoIterator<Item = TimeSlot>>(iter: I) -> Self {
        Self {
            slots: iter.into_iter().collect(),
        }
    }
}

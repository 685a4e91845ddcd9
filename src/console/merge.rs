use super::*;

pub const MERGE_CONFIRM_PROMPT: &str =
    "All hotel videos merged successfully, do you want to delete the duplicate records?";

/// Rows picked as duplicates of one another, and the one that survives.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MergeSelection {
    selected: Vec<HotelId>,
    canonical: Option<HotelId>,
}

impl MergeSelection {
    pub fn selected(&self) -> &[HotelId] {
        &self.selected
    }

    pub fn is_selected(&self, id: &HotelId) -> bool {
        self.selected.contains(id)
    }

    pub fn canonical(&self) -> Option<&HotelId> {
        self.canonical.as_ref()
    }

    pub fn is_canonical(&self, id: &HotelId) -> bool {
        self.canonical.as_ref() == Some(id)
    }

    fn toggle(&mut self, id: &HotelId) -> bool {
        if let Some(pos) = self.selected.iter().position(|s| s == id) {
            self.selected.remove(pos);
            false
        } else {
            self.selected.push(id.clone());
            true
        }
    }

    fn clear(&mut self) {
        self.selected.clear();
        self.canonical = None;
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum MergeStage {
    #[default]
    Idle,
    /// Videos are on the original; the duplicates still exist.
    AwaitingDeleteConfirmation {
        canonical: HotelId,
        duplicates: Vec<HotelId>,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MergeReport {
    pub canonical: HotelId,
    pub merged: Vec<HotelId>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted(Vec<HotelId>),
    Kept(Vec<HotelId>),
}

impl DeleteOutcome {
    pub fn message(&self) -> String {
        match self {
            DeleteOutcome::Deleted(_) => "Record deleted successfully.".to_string(),
            DeleteOutcome::Kept(ids) => format!("kept {} duplicate record(s)", ids.len()),
        }
    }
}

fn video_payload(source: &Hotel, canonical: &HotelId) -> HotelVideo {
    HotelVideo {
        hotel_vlog_video_link: source.hotel_vlog_video_link.clone(),
        vlog_video_view_count: source.vlog_video_view_count.clone(),
        vlog_post_date: source.vlog_post_date.clone(),
        video_id: source.video_id.clone(),
        video_type: source.video_type.clone(),
        verified: source.verified,
        hotel_id: canonical.clone(),
    }
}

impl<A: HotelApi> Console<A> {
    pub fn toggle_select(&mut self, id: &HotelId) -> Result<bool> {
        self.ensure_merge_idle()?;
        self.loaded(id)?;
        Ok(self.selection.toggle(id))
    }

    /// Selects every loaded row, or clears the selection. The original
    /// hotel choice is left alone either way.
    pub fn select_all(&mut self, on: bool) -> Result<usize> {
        self.ensure_merge_idle()?;
        self.selection.selected = if on {
            self.table
                .hotels()
                .iter()
                .map(|h| h.hotel_id.clone())
                .collect()
        } else {
            Vec::new()
        };
        Ok(self.selection.selected.len())
    }

    pub fn set_canonical(&mut self, id: &HotelId) -> Result<()> {
        self.ensure_merge_idle()?;
        self.loaded(id)?;
        self.selection.canonical = Some(id.clone());
        Ok(())
    }

    /// Copies the video of every selected duplicate onto the original hotel.
    ///
    /// Nothing is sent unless every selected row is verified. All creates run
    /// at once; if any fails the selection stays as it is so the merge can be
    /// retried. On success the console waits for [`Console::confirm_delete`].
    pub fn merge(&mut self) -> Result<MergeReport> {
        self.ensure_merge_idle()?;

        let canonical = self
            .selection
            .canonical()
            .cloned()
            .ok_or(ConsoleError::NoOriginalSelected)?;
        if self.selection.selected().len() < 2 {
            return Err(ConsoleError::TooFewSelected.into());
        }
        if !self.selection.is_selected(&canonical) {
            return Err(ConsoleError::OriginalNotSelected(canonical).into());
        }
        self.loaded(&canonical)?;

        let unverified: Vec<HotelId> = self
            .selection
            .selected()
            .iter()
            .filter_map(|id| self.table.get(id))
            .filter(|h| !h.verified)
            .map(|h| h.hotel_id.clone())
            .collect();
        if !unverified.is_empty() {
            return Err(ConsoleError::NotVerified(unverified).into());
        }

        let mut payloads: Vec<(HotelId, HotelVideo)> = Vec::new();
        for id in self.selection.selected() {
            if id == &canonical {
                continue;
            }
            match self.table.get(id) {
                Some(h) => payloads.push((id.clone(), video_payload(h, &canonical))),
                None => tracing::warn!(hotel_id = %id, "selected hotel not loaded; skipped"),
            }
        }
        if payloads.is_empty() {
            return Err(ConsoleError::NothingToMerge.into());
        }

        tracing::info!(canonical = %canonical, count = payloads.len(), "merging hotel videos");
        let api = &self.api;
        let batch = run_concurrent("merge hotel videos", &payloads, |video| {
            api.create_hotel_video(video)
        });
        if let Some(msg) = batch.failure_message(|id| format!("hotel {}", id)) {
            anyhow::bail!(msg);
        }

        let merged = batch.succeeded().to_vec();
        self.stage = MergeStage::AwaitingDeleteConfirmation {
            canonical: canonical.clone(),
            duplicates: merged.clone(),
        };
        Ok(MergeReport { canonical, merged })
    }

    /// Answers the prompt that follows a successful merge.
    ///
    /// Deleting removes every merged duplicate (never the original), then
    /// clears the selection and re-runs the last search. A failed delete
    /// leaves the selection untouched even though some rows may be gone.
    pub fn confirm_delete(&mut self, confirmed: bool) -> Result<DeleteOutcome> {
        let MergeStage::AwaitingDeleteConfirmation {
            canonical,
            duplicates,
        } = std::mem::take(&mut self.stage)
        else {
            return Err(ConsoleError::NothingToConfirm.into());
        };

        if !confirmed {
            tracing::info!(count = duplicates.len(), "duplicates kept");
            return Ok(DeleteOutcome::Kept(duplicates));
        }

        let targets: Vec<(HotelId, HotelId)> = duplicates
            .into_iter()
            .filter(|id| id != &canonical)
            .map(|id| (id.clone(), id))
            .collect();

        let api = &self.api;
        let batch = run_concurrent("delete duplicate hotels", &targets, |id| {
            api.delete_hotel(id)
        });
        if let Some(msg) = batch.failure_message(|id| format!("hotel {}", id)) {
            anyhow::bail!(msg);
        }

        let deleted = batch.succeeded().to_vec();
        tracing::info!(canonical = %canonical, count = deleted.len(), "duplicates deleted");
        self.selection.clear();
        if let Err(err) = self.rerun_search() {
            tracing::warn!(error = %format!("{:#}", err), "reload after delete failed");
        }
        Ok(DeleteOutcome::Deleted(deleted))
    }

    fn ensure_merge_idle(&self) -> Result<()> {
        match self.stage {
            MergeStage::Idle => Ok(()),
            MergeStage::AwaitingDeleteConfirmation { .. } => {
                Err(ConsoleError::MergeAwaitingConfirmation.into())
            }
        }
    }
}

#[cfg(test)]
#[path = "../tests/console/merge_tests.rs"]
mod tests;

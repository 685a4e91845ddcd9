use super::*;

/// At most one row is edited at a time; the draft is a detached copy and
/// nothing of it reaches the list until the backend accepts it.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum EditSession {
    #[default]
    Idle,
    Editing {
        id: HotelId,
        draft: Hotel,
    },
}

impl EditSession {
    pub fn editing_id(&self) -> Option<&HotelId> {
        match self {
            EditSession::Idle => None,
            EditSession::Editing { id, .. } => Some(id),
        }
    }

    pub fn draft(&self) -> Option<&Hotel> {
        match self {
            EditSession::Idle => None,
            EditSession::Editing { draft, .. } => Some(draft),
        }
    }
}

impl<A: HotelApi> Console<A> {
    pub fn begin_edit(&mut self, id: &HotelId) -> Result<()> {
        if let EditSession::Editing { id: active, .. } = &self.edit {
            return Err(ConsoleError::EditInProgress(active.clone()).into());
        }
        let draft = self.loaded(id)?.clone();
        tracing::debug!(hotel_id = %id, "edit started");
        self.edit = EditSession::Editing {
            id: id.clone(),
            draft,
        };
        Ok(())
    }

    pub fn update_field(&mut self, field: HotelField, value: &str) -> Result<()> {
        let EditSession::Editing { draft, .. } = &mut self.edit else {
            return Err(ConsoleError::NoEditSession.into());
        };
        draft
            .set_field(field, value)
            .map_err(ConsoleError::from)?;
        Ok(())
    }

    /// Sends the draft. The session ends either way; on failure the list
    /// keeps the row exactly as it was before the edit began.
    pub fn commit(&mut self) -> Result<HotelId> {
        let EditSession::Editing { id, draft } = std::mem::take(&mut self.edit) else {
            return Err(ConsoleError::NoEditSession.into());
        };

        self.table.mark_busy(&id);
        let res = self.api.update_hotel(&draft);
        self.table.clear_busy(&id);

        match res {
            Ok(()) => {
                if !self.table.replace_one(draft) {
                    tracing::warn!(hotel_id = %id, "edited hotel no longer in the list");
                }
                tracing::info!(hotel_id = %id, "hotel updated");
                Ok(id)
            }
            Err(err) => {
                tracing::warn!(hotel_id = %id, error = %format!("{:#}", err), "hotel update failed");
                Err(err.context("Failed to update the hotel details"))
            }
        }
    }

    /// Drops the draft without a request. Returns whether a session was open.
    pub fn cancel_edit(&mut self) -> bool {
        let was_editing = matches!(self.edit, EditSession::Editing { .. });
        self.edit = EditSession::Idle;
        was_editing
    }
}

#[cfg(test)]
#[path = "../tests/console/edit_tests.rs"]
mod tests;

use super::*;

impl<A: HotelApi> Console<A> {
    /// Marks a hotel verified with the given validity, then reloads the list.
    ///
    /// The reload drops any open edit session. A failed reload shows up in the
    /// table's load state; the approval itself still counts as done.
    pub fn approve(&mut self, id: &HotelId, valid: bool) -> Result<()> {
        let req = VerifyRequest {
            hotel_id: id.clone(),
            verified: true,
            valid,
        };

        self.table.mark_busy(id);
        let res = self.api.verify_hotel(&req);
        self.table.clear_busy(id);

        if let Err(err) = res {
            tracing::warn!(hotel_id = %id, error = %format!("{:#}", err), "approve failed");
            return Err(err.context("Failed to approve the hotel"));
        }
        tracing::info!(hotel_id = %id, valid, "hotel approved");

        self.edit = EditSession::Idle;
        if let Err(err) = self.load_all() {
            tracing::warn!(error = %format!("{:#}", err), "reload after approve failed");
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/console/verify_tests.rs"]
mod tests;

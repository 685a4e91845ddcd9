use super::*;

/// Queries longer than this (after trimming) go to the search endpoint;
/// shorter ones reload the full list instead.
pub const SEARCH_THRESHOLD: usize = 4;

impl<A: HotelApi> Console<A> {
    /// Reloads the list with the current verified-only filter.
    pub fn load_all(&mut self) -> Result<usize> {
        let verified_only = self.table.verified_only();
        self.table.start_loading();
        let res = self.api.list_hotels(verified_only);
        self.apply_fetch("load hotels", res)
    }

    pub fn set_verified_only(&mut self, on: bool) -> Result<usize> {
        self.table.set_verified_only(on);
        self.load_all()
    }

    /// Search box semantics: an empty query resets to the full list (and
    /// refreshes the record count), a long enough query hits the search
    /// endpoint, anything shorter reloads the full list.
    pub fn search(&mut self, query: &str) -> Result<usize> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            self.table.set_search_term("");
            if let Err(err) = self.refresh_count(None) {
                tracing::warn!(error = %format!("{:#}", err), "record count refresh failed");
            }
            return self.load_all();
        }

        self.table.set_search_term(query);
        if trimmed.chars().count() > SEARCH_THRESHOLD {
            self.run_search(trimmed)
        } else {
            self.load_all()
        }
    }

    /// Re-runs the last search term as typed, without the length gate.
    pub(super) fn rerun_search(&mut self) -> Result<usize> {
        let term = self.table.search_term().trim().to_string();
        if term.is_empty() {
            return self.load_all();
        }
        self.run_search(&term)
    }

    pub fn refresh_count(&mut self, mobile: Option<&str>) -> Result<serde_json::Value> {
        let count = self.api.count(mobile).context("fetch record count")?;
        self.last_count = Some(count.clone());
        Ok(count)
    }

    fn run_search(&mut self, name: &str) -> Result<usize> {
        self.table.start_loading();
        let res = self.api.search_hotels(name);
        self.apply_fetch("search hotels", res)
    }

    fn apply_fetch(&mut self, label: &str, res: Result<Vec<Hotel>>) -> Result<usize> {
        match res {
            Ok(hotels) => {
                let n = hotels.len();
                tracing::info!(count = n, operation = label, "hotel list replaced");
                self.table.replace_all(hotels);
                Ok(n)
            }
            Err(err) => {
                let err = err.context(label.to_string());
                tracing::warn!(error = %format!("{:#}", err), "fetch failed");
                self.table.fail(format!("{:#}", err));
                Err(err)
            }
        }
    }
}

#[cfg(test)]
#[path = "../tests/console/fetch_tests.rs"]
mod tests;

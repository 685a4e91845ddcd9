use super::*;

impl RemoteClient {
    pub fn list_hotels(&self, verified_only: bool) -> Result<Vec<Hotel>> {
        let url = if verified_only {
            self.url(&["getVerifiedHotels", "true"])
        } else {
            self.url(&["getVerifiedHotels"])
        };
        tracing::debug!(%url, "list hotels");
        let resp = self.client.get(url).send().context("list hotels request")?;
        let hotels: Vec<Hotel> = self
            .ensure_ok(resp, "list hotels")?
            .json()
            .context("parse hotel list")?;
        Ok(hotels)
    }

    pub fn search_hotels(&self, name: &str) -> Result<Vec<Hotel>> {
        let url = self.url(&["searchhotels", name]);
        tracing::debug!(%url, "search hotels");
        let resp = self
            .client
            .get(url)
            .send()
            .context("search hotels request")?;
        let hotels: Vec<Hotel> = self
            .ensure_ok(resp, "search hotels")?
            .json()
            .context("parse search results")?;
        Ok(hotels)
    }

    /// Record count, optionally for one submitter's mobile number. The shape
    /// of the answer belongs to the backend, so it is passed through as JSON.
    pub fn count(&self, mobile: Option<&str>) -> Result<serde_json::Value> {
        let url = match mobile.map(str::trim).filter(|m| !m.is_empty()) {
            Some(m) => self.url(&["count", m]),
            None => self.url(&["count"]),
        };
        let resp = self.client.get(url).send().context("count request")?;
        let v: serde_json::Value = self
            .ensure_ok(resp, "count")?
            .json()
            .context("parse count")?;
        Ok(v)
    }

    pub fn verify_hotel(&self, req: &VerifyRequest) -> Result<()> {
        let resp = self
            .client
            .put(self.url(&["verify"]))
            .json(req)
            .send()
            .context("verify request")?;
        self.ensure_ok(resp, "verify")?;
        Ok(())
    }

    /// Sends the whole record; the backend overwrites every column it gets.
    pub fn update_hotel(&self, hotel: &Hotel) -> Result<()> {
        let resp = self
            .client
            .put(self.url(&["updateHotel"]))
            .json(hotel)
            .send()
            .context("update hotel request")?;
        self.ensure_ok(resp, "update hotel")?;
        Ok(())
    }

    /// The backend exposes deletion as a GET; keep it that way.
    pub fn delete_hotel(&self, id: &HotelId) -> Result<()> {
        let id = id.to_string();
        let resp = self
            .client
            .get(self.url(&["deletehotel", &id]))
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .send()
            .with_context(|| format!("delete hotel {} request", id))?;
        self.ensure_ok(resp, &format!("delete hotel {}", id))?;
        Ok(())
    }
}

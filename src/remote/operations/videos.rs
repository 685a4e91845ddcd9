use super::*;

impl RemoteClient {
    pub fn create_hotel_video(&self, video: &HotelVideo) -> Result<()> {
        let resp = self
            .client
            .post(self.url(&["createhotelvideo"]))
            .json(video)
            .send()
            .context("create hotel video request")?;
        self.ensure_ok(
            resp,
            &format!("merge hotel video into {}", video.hotel_id),
        )?;
        Ok(())
    }
}

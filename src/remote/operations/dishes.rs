use super::*;

impl RemoteClient {
    pub fn create_dish(&self, dish: &NewDish) -> Result<()> {
        let resp = self
            .client
            .post(self.url(&["dish"]))
            .json(dish)
            .send()
            .context("create dish request")?;
        self.ensure_ok(resp, "add dish")?;
        Ok(())
    }
}

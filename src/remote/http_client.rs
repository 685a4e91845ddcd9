use super::*;

impl RemoteClient {
    /// Any non-2xx status is the same failure to callers; bodies are not read.
    pub(super) fn ensure_ok(
        &self,
        resp: reqwest::blocking::Response,
        label: &str,
    ) -> Result<reqwest::blocking::Response> {
        let status = resp.status();
        if !status.is_success() {
            tracing::warn!(%status, operation = label, "backend rejected request");
            anyhow::bail!("{} failed (status {})", label, status.as_u16());
        }
        Ok(resp)
    }

    /// Joins percent-encoded path segments onto the base url.
    pub(super) fn url(&self, segments: &[&str]) -> reqwest::Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

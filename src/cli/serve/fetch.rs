//! Request sources for the preview server.

use super::path::resolve_path;
use crate::site::SiteBundle;
use crate::utils::mime;
use crate::worker::{Fetch, FetchError, WorkerResponse};
use std::fs;
use std::path::PathBuf;

/// The rendered bundle first, then the assets directory, then the 404 page.
#[derive(Debug)]
pub struct SiteFetch {
    pub bundle: SiteBundle,
    pub assets: PathBuf,
}

impl Fetch for SiteFetch {
    fn fetch(&self, url: &str) -> Result<WorkerResponse, FetchError> {
        if let Some(file) = self.bundle.get(url) {
            return Ok(WorkerResponse::new(200, file.mime, file.body.as_bytes()));
        }

        if let Some(path) = resolve_path(url, &self.assets) {
            let body = fs::read(&path).map_err(|err| FetchError::Network(url.to_owned(), err))?;
            return Ok(WorkerResponse::new(200, mime::from_path(&path), body));
        }

        Ok(match self.bundle.not_found() {
            Some(page) => WorkerResponse::new(404, page.mime, page.body.as_bytes()),
            None => WorkerResponse::new(404, mime::types::PLAIN, "404 Not Found"),
        })
    }
}

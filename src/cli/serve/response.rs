//! HTTP response handlers.

use crate::utils::mime::types::PLAIN;
use crate::worker::{NO_STORE, WorkerResponse};
use anyhow::{Result, anyhow};
use tiny_http::{Header, Method, Request, Response, StatusCode};

/// Send a worker response. HEAD requests get the headers only.
pub fn respond(request: Request, response: WorkerResponse) -> Result<()> {
    let headers = response
        .headers()
        .into_iter()
        .map(|(key, value)| make_header(key, value))
        .collect::<Result<Vec<_>>>()?;

    if is_head_request(&request) {
        let mut empty = Response::empty(StatusCode(response.status));
        for header in headers {
            empty.add_header(header);
        }
        request.respond(empty)?;
        return Ok(());
    }

    let mut full = Response::from_data(response.body).with_status_code(StatusCode(response.status));
    for header in headers {
        full.add_header(header);
    }
    request.respond(full)?;
    Ok(())
}

/// Respond with 503 Service Unavailable (server shutting down).
pub fn respond_unavailable(request: Request) -> Result<()> {
    let response = Response::from_data(b"503 Service Unavailable".to_vec())
        .with_status_code(StatusCode(503))
        .with_header(make_header("Content-Type", PLAIN)?)
        .with_header(make_header("Cache-Control", NO_STORE)?);
    request.respond(response)?;
    Ok(())
}

fn is_head_request(request: &Request) -> bool {
    request.method() == &Method::Head
}

fn make_header(key: &'static str, value: &str) -> Result<Header> {
    Header::from_bytes(key, value).map_err(|()| anyhow!("invalid header {key}: {value}"))
}

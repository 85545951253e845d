//! Preview server.
//!
//! The site is rendered once into memory at start-up. Requests are answered
//! by a small thread pool through the same network-only policy as the
//! deployed service worker: nothing is cached and unreadable files become a
//! `503 Network error`.

mod fetch;
mod lifecycle;
mod path;
mod response;

use crate::config::SiteConfig;
use crate::core::{is_shutdown, register_server};
use crate::site::SiteBundle;
use crate::worker::NetworkOnly;
use crate::{debug, log};
use anyhow::{Context, Result};
use fetch::SiteFetch;
use std::sync::Arc;
use tiny_http::{Request, Server};

/// Worker threads answering requests.
const POOL_THREADS: usize = 4;

/// Render the site and serve it until Ctrl+C.
pub fn serve_site(config: &SiteConfig) -> Result<()> {
    let bundle = SiteBundle::render(config)?;
    log!("serve"; "rendered {} files", bundle.len());

    let (server, addr) = lifecycle::bind_with_retry(config.serve.addr())?;
    let server = Arc::new(server);
    register_server(Arc::clone(&server));
    log!("serve"; "http://{}", addr);

    let worker = Arc::new(NetworkOnly::new(SiteFetch {
        bundle,
        assets: config.build.assets.clone(),
    }));
    run_request_loop(&server, &worker)?;

    log!("serve"; "stopped");
    Ok(())
}

fn run_request_loop(server: &Server, worker: &Arc<NetworkOnly<SiteFetch>>) -> Result<()> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(POOL_THREADS)
        .build()
        .context("failed to create thread pool")?;

    for request in server.incoming_requests() {
        let worker = Arc::clone(worker);
        pool.spawn(move || {
            if let Err(e) = handle_request(request, &worker) {
                log!("serve"; "request error: {e}");
            }
        });
    }
    Ok(())
}

/// Handle a single HTTP request.
fn handle_request(request: Request, worker: &NetworkOnly<SiteFetch>) -> Result<()> {
    if is_shutdown() {
        return response::respond_unavailable(request);
    }

    let url = request.url().to_owned();
    let reply = worker.respond(&url);
    debug!("serve"; "{} {} {}", request.method(), url, reply.status);
    response::respond(request, reply)
}

//! `tiny_http` server adapter
//!
//! Runs a blocking accept loop: one request at a time, each routed through
//! [`super::router::route`] against the same service.

use std::io::Cursor;
use std::time::Instant;

use log::{info, warn};
use tiny_http::{Header, Request, Response, Server, StatusCode};

use super::router::{RouteResponse, route};
use crate::domain::ports::TodoStore;
use crate::domain::services::TodoService;

/// Bind `addr` and serve requests until the process exits
pub fn serve<S: TodoStore>(service: &TodoService<S>, addr: &str) -> anyhow::Result<()> {
    let server = Server::http(addr).map_err(|e| anyhow::anyhow!("Failed to start server: {e}"))?;
    info!("event=http_listen addr={addr}");
    run(service, &server);
    Ok(())
}

/// Serve every incoming request on an already bound server
pub fn run<S: TodoStore>(service: &TodoService<S>, server: &Server) {
    for request in server.incoming_requests() {
        handle_request(service, request);
    }
}

/// Route one request and write its response
pub fn handle_request<S: TodoStore>(service: &TodoService<S>, request: Request) {
    let started_at = Instant::now();
    let method = request.method().clone();
    let url = request.url().to_string();

    let routed = route(service, &method, &url);
    let status = routed.status;

    if let Err(e) = request.respond(into_response(routed)) {
        warn!("event=http_request method={method} url={url} status=error error={e}");
        return;
    }
    info!(
        "event=http_request method={method} url={url} status={status} duration_ms={}",
        started_at.elapsed().as_millis()
    );
}

fn into_response(routed: RouteResponse) -> Response<Cursor<Vec<u8>>> {
    let response = Response::from_data(routed.body.into_bytes())
        .with_status_code(StatusCode(routed.status));
    match Header::from_bytes("Content-Type", "application/json") {
        Ok(header) => response.with_header(header),
        Err(()) => response,
    }
}

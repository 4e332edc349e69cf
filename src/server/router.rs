//! Request routing
//!
//! Every endpoint is a GET with its arguments in the query string. Paths are
//! accepted bare (`/all`) or under an `/api` prefix (`/api/all`).

use serde::Serialize;
use serde::de::DeserializeOwned;
use tiny_http::Method;

use crate::api::{
    self, ApiError, ApiResponse, AssigneeQuery, CategoryQuery, CreateTodoRequest, HelloQuery,
    IdQuery, UpdateTodoRequest,
};
use crate::domain::ports::TodoStore;
use crate::domain::services::TodoService;

/// A routed response ready to be written by a server adapter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteResponse {
    /// HTTP status code
    pub status: u16,
    /// JSON body
    pub body: String,
}

/// Route a request to its handler
///
/// `url` is the request target as received, including any query string.
pub fn route<S: TodoStore>(service: &TodoService<S>, method: &Method, url: &str) -> RouteResponse {
    let (path, query) = url.split_once('?').unwrap_or((url, ""));
    let api_path = path.strip_prefix("/api").filter(|p| p.starts_with('/')).unwrap_or(path);

    if !is_known_path(api_path) {
        return error_response(&ApiError::not_found(format!(
            "API endpoint not found: {method} {api_path}"
        )));
    }
    if *method != Method::Get {
        return error_response(&ApiError::method_not_allowed(format!(
            "{method} is not supported on {api_path}, use GET"
        )));
    }

    match api_path {
        "/all" => handle_result(api::list_todos(service)),
        "/all_by_category" => with_query(query, |q: CategoryQuery| {
            api::list_todos_by_category(service, &q)
        }),
        "/all_by_assignee" => with_query(query, |q: AssigneeQuery| {
            api::list_todos_by_assignee(service, &q)
        }),
        "/by_id" => with_query(query, |q: IdQuery| api::get_todo(service, q)),
        "/add" => with_query(query, |q: CreateTodoRequest| api::create_todo(service, q)),
        "/delete" => with_query(query, |q: IdQuery| api::delete_todo(service, q)),
        "/update" => with_query(query, |q: UpdateTodoRequest| api::update_todo(service, q)),
        "/hello" => with_query(query, |q: HelloQuery| Ok(api::hello(&q))),
        "/add_numbers" => with_query(query, api::add_numbers),
        _ => error_response(&ApiError::not_found(format!(
            "API endpoint not found: {method} {api_path}"
        ))),
    }
}

const ROUTES: &[&str] = &[
    "/all",
    "/all_by_category",
    "/all_by_assignee",
    "/by_id",
    "/add",
    "/delete",
    "/update",
    "/hello",
    "/add_numbers",
];

fn is_known_path(path: &str) -> bool {
    ROUTES.contains(&path)
}

// =============================================================================
// QUERY PARSING
// =============================================================================

/// Decode the query string into `Q` and run the handler on it
fn with_query<Q, T, F>(query: &str, handler: F) -> RouteResponse
where
    Q: DeserializeOwned,
    T: Serialize,
    F: FnOnce(Q) -> Result<T, ApiError>,
{
    match parse_query::<Q>(query) {
        Ok(q) => handle_result(handler(q)),
        Err(e) => error_response(&e),
    }
}

fn parse_query<Q: DeserializeOwned>(query: &str) -> Result<Q, ApiError> {
    serde_urlencoded::from_str(query)
        .map_err(|e| ApiError::bad_request(format!("Invalid query: {e}")))
}

// =============================================================================
// RESPONSE CONVERSION
// =============================================================================

/// Convert a handler result to a response
fn handle_result<T: Serialize>(result: Result<T, ApiError>) -> RouteResponse {
    match result {
        Ok(data) => json_response(&ApiResponse::success(data), 200),
        Err(e) => error_response(&e),
    }
}

/// Create an error JSON response with the error's status code
fn error_response(error: &ApiError) -> RouteResponse {
    let response = ApiResponse::<()>::error(error.code.as_str(), &error.message);
    json_response(&response, error.status_code())
}

/// Serialize data to a JSON response with status code
fn json_response<T: Serialize>(data: &T, status: u16) -> RouteResponse {
    let body = serde_json::to_string(data).unwrap_or_else(|_| r#"{"success":false}"#.to_string());
    RouteResponse { status, body }
}

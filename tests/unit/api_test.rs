//! Tests for API module
//!
//! Tests error types, request/response types, and handler functions.

// =============================================================================
// ERROR TYPES
// =============================================================================

mod error_tests {
    use todobox::api::{ApiError, ErrorCode};
    use todobox::domain::TodoError;
    use todobox::domain::models::ValidationError;
    use todobox::domain::ports::StoreError;

    #[test]
    fn test_error_code_not_found() {
        let err = ApiError::not_found("Todo not found");
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.message, "Todo not found");
    }

    #[test]
    fn test_error_code_bad_request() {
        let err = ApiError::bad_request("Invalid input");
        assert_eq!(err.status_code(), 400);
    }

    #[test]
    fn test_error_code_method_not_allowed() {
        assert_eq!(ApiError::method_not_allowed("POST").status_code(), 405);
    }

    #[test]
    fn test_error_code_unavailable() {
        let err = ApiError::unavailable("db down");
        assert_eq!(err.status_code(), 503);
        assert_eq!(err.code.as_str(), "STORE_UNAVAILABLE");
    }

    #[test]
    fn test_error_codes_cover_every_failure() {
        let codes = [
            ErrorCode::BadRequest,
            ErrorCode::NotFound,
            ErrorCode::MethodNotAllowed,
            ErrorCode::Unavailable,
        ];
        let statuses: Vec<u16> = codes.iter().map(|c| c.status_code()).collect();
        assert_eq!(statuses, vec![400, 404, 405, 503]);
    }

    #[test]
    fn test_api_error_display() {
        let err = ApiError::not_found("Resource missing");
        let display = format!("{err}");
        assert!(display.contains("NOT_FOUND"));
        assert!(display.contains("Resource missing"));
    }

    #[test]
    fn test_todo_error_mapping() {
        let validation: ApiError = TodoError::from(ValidationError::EmptyText).into();
        assert_eq!(validation.code, ErrorCode::BadRequest);
        assert_eq!(validation.message, "todo text cannot be empty");

        let not_found: ApiError = TodoError::NotFound(3).into();
        assert_eq!(not_found.code, ErrorCode::NotFound);
        assert_eq!(not_found.message, "todo 3 not found");

        let unavailable: ApiError =
            TodoError::from(StoreError::Unavailable("connection refused".to_string())).into();
        assert_eq!(unavailable.code, ErrorCode::Unavailable);
        assert!(unavailable.message.contains("connection refused"));
    }
}

// =============================================================================
// RESPONSE TYPES
// =============================================================================

mod response_tests {
    use todobox::api::{ApiResponse, TodoMutationData};

    #[test]
    fn test_api_response_success() {
        let resp: ApiResponse<String> = ApiResponse::success("hello".to_string());
        assert!(resp.success);
        assert_eq!(resp.data, Some("hello".to_string()));
        assert!(resp.error.is_none());
    }

    #[test]
    fn test_api_response_error() {
        let resp: ApiResponse<()> = ApiResponse::error("NOT_FOUND", "todo 1 not found");
        assert!(!resp.success);
        assert!(resp.data.is_none());
        let err = resp.error.unwrap();
        assert_eq!(err.code, "NOT_FOUND");
        assert_eq!(err.message, "todo 1 not found");
    }

    #[test]
    fn test_mutation_data_serializes_result_word() {
        let resp = ApiResponse::success(TodoMutationData {
            result: "No change",
        });
        let json = serde_json::to_string(&resp).unwrap();
        assert_eq!(json, r#"{"success":true,"data":{"result":"No change"}}"#);
    }
}

// =============================================================================
// REQUEST TYPES
// =============================================================================

mod request_tests {
    use todobox::api::{AddNumbersQuery, CreateTodoRequest, IdQuery, UpdateTodoRequest};

    #[test]
    fn test_create_request_uses_todo_param() {
        let req: CreateTodoRequest =
            serde_urlencoded::from_str("todo=Buy+milk&assignee=Alice").unwrap();
        assert_eq!(req.text, "Buy milk");
        assert_eq!(req.assignee.as_deref(), Some("Alice"));
        assert!(req.category.is_none());
    }

    #[test]
    fn test_create_request_accepts_text_alias() {
        let req: CreateTodoRequest = serde_urlencoded::from_str("text=Buy%20milk").unwrap();
        assert_eq!(req.text, "Buy milk");
    }

    #[test]
    fn test_create_request_requires_text() {
        let result = serde_urlencoded::from_str::<CreateTodoRequest>("assignee=Alice");
        assert!(result.is_err());
    }

    #[test]
    fn test_id_query_coerces_number() {
        let query: IdQuery = serde_urlencoded::from_str("id=12").unwrap();
        assert_eq!(query.id, 12);
        assert!(serde_urlencoded::from_str::<IdQuery>("id=twelve").is_err());
    }

    #[test]
    fn test_update_request_into_parts() {
        let req: UpdateTodoRequest =
            serde_urlencoded::from_str("id=4&todo=Walk+dog&completed=true").unwrap();
        let (id, patch) = req.into_parts();
        assert_eq!(id, 4);
        assert_eq!(patch.text.as_deref(), Some("Walk dog"));
        assert_eq!(patch.completed, Some(true));
        assert!(patch.assignee.is_none());
    }

    #[test]
    fn test_add_numbers_third_operand_optional() {
        let two: AddNumbersQuery = serde_urlencoded::from_str("num_a=1&num_b=2").unwrap();
        assert!(two.num_c.is_none());
        let three: AddNumbersQuery =
            serde_urlencoded::from_str("num_a=1&num_b=2&num_c=3").unwrap();
        assert_eq!(three.num_c, Some(3));
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

mod handler_tests {
    use todobox::api::{
        self, AddNumbersQuery, CategoryQuery, CreateTodoRequest, ErrorCode, HelloQuery, IdQuery,
        UpdateTodoRequest,
    };

    use crate::common::{memory_db, seed, service};

    fn create_request(text: &str) -> CreateTodoRequest {
        CreateTodoRequest {
            text: text.to_string(),
            assignee: None,
            category: Some("work".to_string()),
        }
    }

    #[test]
    fn test_create_and_get() {
        let conn = memory_db();
        let service = service(&conn);

        let created = api::create_todo(&service, create_request("Ship it")).unwrap();
        let fetched = api::get_todo(&service, IdQuery { id: created.id }).unwrap();
        assert_eq!(fetched.todo.text, "Ship it");
    }

    #[test]
    fn test_create_empty_text_is_bad_request() {
        let conn = memory_db();
        let service = service(&conn);

        let err = api::create_todo(&service, create_request("")).unwrap_err();
        assert_eq!(err.code, ErrorCode::BadRequest);
    }

    #[test]
    fn test_list_by_category() {
        let conn = memory_db();
        let service = service(&conn);
        seed(&service, &[("a", None, Some("work")), ("b", None, Some("home"))]);

        let data = api::list_todos_by_category(
            &service,
            &CategoryQuery {
                category: "home".to_string(),
            },
        )
        .unwrap();
        assert_eq!(data.todos.len(), 1);
        assert_eq!(data.todos[0].text, "b");
        assert_eq!(api::list_todos(&service).unwrap().todos.len(), 2);
    }

    #[test]
    fn test_update_and_delete_result_words() {
        let conn = memory_db();
        let service = service(&conn);
        let ids = seed(&service, &[("a", None, None)]);

        let update = |text: Option<&str>| UpdateTodoRequest {
            id: ids[0],
            text: text.map(String::from),
            assignee: None,
            category: None,
            completed: None,
        };
        assert_eq!(api::update_todo(&service, update(Some("b"))).unwrap().result, "Success");
        assert_eq!(api::update_todo(&service, update(None)).unwrap().result, "No change");
        assert_eq!(api::delete_todo(&service, IdQuery { id: ids[0] }).unwrap().result, "Success");

        let err = api::delete_todo(&service, IdQuery { id: ids[0] }).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_greeting_handlers() {
        let hello = api::hello(&HelloQuery {
            name: "Adam".to_string(),
        });
        assert_eq!(hello.message, "hello Adam");

        let sum = api::add_numbers(AddNumbersQuery {
            num_a: 1,
            num_b: 2,
            num_c: None,
        })
        .unwrap();
        assert_eq!(sum.message, 3);

        let err = api::add_numbers(AddNumbersQuery {
            num_a: i64::MAX,
            num_b: 1,
            num_c: None,
        })
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::BadRequest);
    }
}

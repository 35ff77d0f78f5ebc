use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use drills_core::users::{User, UserError, UserStore};
use serde::Serialize;
use serde_json::{Map, Value};
use std::sync::Arc;
use tokio::sync::RwLock;

pub type SharedStore = Arc<RwLock<UserStore>>;

const WELCOME_MESSAGE: &str = "Welcome to Flask CRUD API!";

/// `{"message": "..."}` body used by every non-record response
#[derive(Debug, Serialize)]
pub struct Message {
    pub message: String,
}

impl Message {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Store errors rendered as HTTP responses
#[derive(Debug)]
pub struct ApiError(UserError);

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            UserError::NotFound(id) => {
                log::info!("User {id} not found");
                StatusCode::NOT_FOUND
            }
        };

        (status, Json(Message::new(self.0.to_string()))).into_response()
    }
}

/// Builds the application: the welcome route plus the `/users` routes
pub fn router(store: SharedStore) -> Router {
    Router::new()
        .route("/", get(index))
        .merge(user_routes())
        .with_state(store)
}

/// Routes under the `/users` prefix; the collection answers with and without
/// the trailing slash
fn user_routes() -> Router<SharedStore> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/", get(list_users).post(create_user))
        .route("/users/{id}", get(get_user).put(update_user).delete(delete_user))
}

async fn index() -> Json<Message> {
    Json(Message::new(WELCOME_MESSAGE))
}

async fn list_users(State(store): State<SharedStore>) -> Json<Vec<User>> {
    let store = store.read().await;
    log::debug!("Listing {} users", store.len());
    Json(store.list().to_vec())
}

async fn get_user(
    State(store): State<SharedStore>,
    Path(id): Path<i64>,
) -> Result<Json<User>, ApiError> {
    let store = store.read().await;
    let user = store.get(id)?;
    Ok(Json(user.clone()))
}

async fn create_user(
    State(store): State<SharedStore>,
    Json(user): Json<User>,
) -> (StatusCode, Json<User>) {
    let mut store = store.write().await;
    log::debug!("Creating user {:?}", user.id());
    let created = store.create(user).clone();
    (StatusCode::CREATED, Json(created))
}

async fn update_user(
    State(store): State<SharedStore>,
    Path(id): Path<i64>,
    Json(fields): Json<Map<String, Value>>,
) -> Result<Json<User>, ApiError> {
    let mut store = store.write().await;
    log::debug!("Updating user {id}");
    let user = store.update(id, fields)?;
    Ok(Json(user.clone()))
}

async fn delete_user(
    State(store): State<SharedStore>,
    Path(id): Path<i64>,
) -> Result<Json<Message>, ApiError> {
    let mut store = store.write().await;
    log::debug!("Deleting user {id}");
    store.delete(id)?;
    Ok(Json(Message::new("User deleted")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Method, Request};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn test_app() -> Router {
        router(Arc::new(RwLock::new(UserStore::seeded())))
    }

    async fn send(
        app: &Router,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        (status, value)
    }

    fn not_found() -> Value {
        json!({"message": "User not found"})
    }

    // ============================================================================
    // read routes
    // ============================================================================

    #[tokio::test]
    async fn test_index_welcome_message() {
        let app = test_app();

        let (status, body) = send(&app, Method::GET, "/", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"message": "Welcome to Flask CRUD API!"}));
    }

    #[tokio::test]
    async fn test_list_returns_seed_in_order() {
        let app = test_app();

        let (status, body) = send(&app, Method::GET, "/users/", None).await;

        assert_eq!(status, StatusCode::OK);
        let users = body.as_array().unwrap();
        assert_eq!(users.len(), 20);
        assert_eq!(
            users[0],
            json!({"id": 1, "name": "Alice", "email": "alice@example.com"})
        );
        let ids: Vec<i64> = users.iter().map(|u| u["id"].as_i64().unwrap()).collect();
        assert_eq!(ids, (1..=20).collect::<Vec<i64>>());
    }

    #[tokio::test]
    async fn test_list_without_trailing_slash() {
        let app = test_app();

        let (status, body) = send(&app, Method::GET, "/users", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 20);
    }

    #[tokio::test]
    async fn test_get_user() {
        let app = test_app();

        let (status, body) = send(&app, Method::GET, "/users/3", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Charlie");
    }

    #[tokio::test]
    async fn test_get_missing_user() {
        let app = test_app();

        let (status, body) = send(&app, Method::GET, "/users/404", None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, not_found());
    }

    #[tokio::test]
    async fn test_get_non_numeric_id_is_rejected() {
        let app = test_app();

        let (status, _) = send(&app, Method::GET, "/users/abc", None).await;

        assert!(status.is_client_error());
    }

    // ============================================================================
    // write routes
    // ============================================================================

    #[tokio::test]
    async fn test_create_then_get() {
        let app = test_app();
        let user = json!({"id": 21, "name": "X", "email": "x@example.com"});

        let (status, body) = send(&app, Method::POST, "/users/", Some(user.clone())).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body, user);

        let (status, body) = send(&app, Method::GET, "/users/21", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, user);

        let (_, body) = send(&app, Method::GET, "/users/", None).await;
        assert_eq!(body.as_array().unwrap().len(), 21);
    }

    #[tokio::test]
    async fn test_create_echoes_extra_fields() {
        let app = test_app();
        let user = json!({"id": 22, "name": "Y", "email": "y@example.com", "role": "admin"});

        let (status, body) = send(&app, Method::POST, "/users", Some(user.clone())).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body, user);
    }

    #[tokio::test]
    async fn test_create_stores_body_verbatim() {
        let app = test_app();
        let user = json!({"name": "X"});

        let (status, body) = send(&app, Method::POST, "/users/", Some(user.clone())).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body, user);

        let user = json!({"id": 21, "name": 7});
        let (status, body) = send(&app, Method::POST, "/users/", Some(user.clone())).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body, user);

        let (status, body) = send(&app, Method::GET, "/users/21", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, user);

        let (_, body) = send(&app, Method::GET, "/users/", None).await;
        assert_eq!(body.as_array().unwrap().len(), 22);
    }

    #[tokio::test]
    async fn test_update_merges_fields() {
        let app = test_app();

        let (status, body) =
            send(&app, Method::PUT, "/users/1", Some(json!({"name": "Alicia"}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"id": 1, "name": "Alicia", "email": "alice@example.com"})
        );

        let (_, body) = send(&app, Method::GET, "/users/1", None).await;
        assert_eq!(body["name"], "Alicia");
        assert_eq!(body["email"], "alice@example.com");
    }

    #[tokio::test]
    async fn test_update_overwrites_with_null() {
        let app = test_app();

        let (status, body) = send(&app, Method::PUT, "/users/1", Some(json!({"name": null}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"id": 1, "name": null, "email": "alice@example.com"})
        );

        let (_, body) = send(&app, Method::PUT, "/users/1", Some(json!({"name": 42}))).await;
        assert_eq!(body["name"], 42);
    }

    #[tokio::test]
    async fn test_update_missing_user() {
        let app = test_app();

        let (status, body) =
            send(&app, Method::PUT, "/users/99", Some(json!({"name": "Nobody"}))).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, not_found());
    }

    #[tokio::test]
    async fn test_delete_then_get() {
        let app = test_app();

        let (status, body) = send(&app, Method::DELETE, "/users/2", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"message": "User deleted"}));

        let (status, body) = send(&app, Method::GET, "/users/2", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, not_found());

        let (status, _) = send(&app, Method::DELETE, "/users/2", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}

use super::token::{Claims, TokenKeys};
use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts, HeaderMap, HeaderValue, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use drills_core::auth::{
    authenticate, sanitize_bio, validate_credentials, Profile, ValidationError,
};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_sessions::{MemoryStore, Session, SessionManagerLayer};

pub type SharedKeys = Arc<TokenKeys>;

/// Session key holding the logged in [`Profile`]
const SESSION_USER: &str = "user";

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Token required")]
    TokenRequired,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Not authenticated")]
    NotAuthenticated,

    #[error("Session store error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    #[error("Failed to sign token: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = match &self {
            AuthError::Validation(_) => StatusCode::BAD_REQUEST,
            AuthError::InvalidCredentials
            | AuthError::InvalidToken
            | AuthError::NotAuthenticated => StatusCode::UNAUTHORIZED,
            AuthError::TokenRequired => StatusCode::FORBIDDEN,
            AuthError::Session(_) | AuthError::Signing(_) => {
                log::error!("{self}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[derive(Debug, Serialize)]
struct TokenBody {
    token: String,
}

#[derive(Debug, Serialize)]
struct ProfileBody<T> {
    profile: T,
}

#[derive(Debug, Serialize)]
struct MessageBody {
    message: &'static str,
}

#[derive(Debug, Serialize)]
struct SanitizedBody {
    #[serde(rename = "sanitizedBio")]
    sanitized_bio: String,
}

/// Claims of a request carrying a valid `Authorization: Bearer <token>` header
pub struct Authenticated(pub Claims);

impl FromRequestParts<SharedKeys> for Authenticated {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        keys: &SharedKeys,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers).ok_or(AuthError::TokenRequired)?;

        keys.verify(token).map(Authenticated).map_err(|e| {
            log::debug!("Rejected token: {e}");
            AuthError::InvalidToken
        })
    }
}

/// The second space separated word of the `Authorization` header
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .split(' ')
        .nth(1)
        .filter(|token| !token.is_empty())
}

/// Builds the application: JWT and session login flows, bio sanitizing,
/// security headers and request logging
pub fn router(keys: TokenKeys) -> Router {
    let sessions = SessionManagerLayer::new(MemoryStore::default()).with_secure(false);

    Router::new()
        .route("/jwt/login", post(jwt_login))
        .route("/jwt/profile", get(jwt_profile))
        .route("/session/login", post(session_login))
        .route("/session/profile", get(session_profile))
        .route("/sanitize", post(sanitize))
        .route("/sanitize/", post(sanitize))
        .layer(sessions)
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("SAMEORIGIN"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::REFERRER_POLICY,
            HeaderValue::from_static("no-referrer"),
        ))
        .layer(middleware::from_fn(log_request))
        .with_state(Arc::new(keys))
}

async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let started = std::time::Instant::now();

    let response = next.run(request).await;

    log::info!(
        "{} {} {} {:?}",
        method,
        uri,
        response.status().as_u16(),
        started.elapsed()
    );
    response
}

fn login(body: &Value) -> Result<Profile, AuthError> {
    let credentials = validate_credentials(body)?;
    authenticate(&credentials).ok_or(AuthError::InvalidCredentials)
}

async fn jwt_login(
    State(keys): State<SharedKeys>,
    Json(body): Json<Value>,
) -> Result<Json<TokenBody>, AuthError> {
    let profile = login(&body)?;
    let token = keys.issue(&profile)?;
    log::debug!("Issued token for {}", profile.username);
    Ok(Json(TokenBody { token }))
}

async fn jwt_profile(Authenticated(claims): Authenticated) -> Json<ProfileBody<Claims>> {
    Json(ProfileBody { profile: claims })
}

async fn session_login(
    session: Session,
    Json(body): Json<Value>,
) -> Result<Json<MessageBody>, AuthError> {
    let profile = login(&body)?;
    session.insert(SESSION_USER, &profile).await?;
    log::debug!("Started session for {}", profile.username);
    Ok(Json(MessageBody {
        message: "Session login successful",
    }))
}

async fn session_profile(session: Session) -> Result<Json<ProfileBody<Profile>>, AuthError> {
    let profile = session
        .get::<Profile>(SESSION_USER)
        .await?
        .ok_or(AuthError::NotAuthenticated)?;
    Ok(Json(ProfileBody { profile }))
}

/// A missing or `null` bio sanitizes to the empty string; other non-strings
/// are sanitized as their JSON text
async fn sanitize(Json(body): Json<Value>) -> Json<SanitizedBody> {
    let sanitized_bio = match body.get("bio") {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(bio)) => sanitize_bio(bio),
        Some(other) => sanitize_bio(&other.to_string()),
    };
    Json(SanitizedBody { sanitized_bio })
}

//! Login validation, the demo account list and bio sanitizing
//!
//! Validation checks a raw JSON body against the login schema and stops at the
//! first problem, checking fields in schema order (`username`, `password`,
//! `bio`) and unknown keys last. Messages quote the field name, e.g.
//! `"password" length must be at least 6 characters long`.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;

const USERNAME_MIN: usize = 3;
const USERNAME_MAX: usize = 30;
const PASSWORD_MIN: usize = 6;

/// Tags kept by [`sanitize_bio`]; everything else is stripped
pub const BIO_TAGS: [&str; 5] = ["b", "i", "em", "strong", "p"];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("\"value\" must be of type object")]
    NotAnObject,

    #[error("\"{0}\" is required")]
    Missing(&'static str),

    #[error("\"{0}\" must be a string")]
    NotAString(&'static str),

    #[error("\"{0}\" is not allowed to be empty")]
    Empty(&'static str),

    #[error("\"{0}\" must only contain alpha-numeric characters")]
    NotAlphanumeric(&'static str),

    #[error("\"{field}\" length must be at least {min} characters long")]
    TooShort { field: &'static str, min: usize },

    #[error("\"{field}\" length must be less than or equal to {max} characters long")]
    TooLong { field: &'static str, max: usize },

    #[error("\"{0}\" is not allowed")]
    UnknownField(String),
}

/// A login body that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
    pub bio: Option<String>,
}

/// What a logged in client gets to see about itself
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Profile {
    pub id: i64,
    pub username: String,
}

struct Account {
    id: i64,
    username: &'static str,
    password: &'static str,
}

const ACCOUNTS: [Account; 1] = [Account {
    id: 1,
    username: "john",
    password: "123456",
}];

pub fn validate_credentials(body: &Value) -> Result<Credentials, ValidationError> {
    let object = body.as_object().ok_or(ValidationError::NotAnObject)?;

    let username = match object.get("username") {
        None => return Err(ValidationError::Missing("username")),
        Some(value) => non_empty_string("username", value)?,
    };
    if !username.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ValidationError::NotAlphanumeric("username"));
    }
    let length = username.chars().count();
    if length < USERNAME_MIN {
        return Err(ValidationError::TooShort {
            field: "username",
            min: USERNAME_MIN,
        });
    }
    if length > USERNAME_MAX {
        return Err(ValidationError::TooLong {
            field: "username",
            max: USERNAME_MAX,
        });
    }

    let password = match object.get("password") {
        None => return Err(ValidationError::Missing("password")),
        Some(value) => non_empty_string("password", value)?,
    };
    if password.chars().count() < PASSWORD_MIN {
        return Err(ValidationError::TooShort {
            field: "password",
            min: PASSWORD_MIN,
        });
    }

    let bio = match object.get("bio") {
        None => None,
        Some(value) => Some(non_empty_string("bio", value)?),
    };

    if let Some(key) = object
        .keys()
        .find(|key| !matches!(key.as_str(), "username" | "password" | "bio"))
    {
        return Err(ValidationError::UnknownField(key.clone()));
    }

    Ok(Credentials {
        username: username.to_string(),
        password: password.to_string(),
        bio: bio.map(str::to_string),
    })
}

fn non_empty_string<'a>(
    field: &'static str,
    value: &'a Value,
) -> Result<&'a str, ValidationError> {
    let text = value.as_str().ok_or(ValidationError::NotAString(field))?;
    if text.is_empty() {
        return Err(ValidationError::Empty(field));
    }
    Ok(text)
}

/// Look the credentials up in the fixed account list
pub fn authenticate(credentials: &Credentials) -> Option<Profile> {
    ACCOUNTS
        .iter()
        .find(|account| {
            account.username == credentials.username && account.password == credentials.password
        })
        .map(|account| Profile {
            id: account.id,
            username: account.username.to_string(),
        })
}

/// Strip every tag outside [`BIO_TAGS`], and all attributes
pub fn sanitize_bio(bio: &str) -> String {
    let mut builder = ammonia::Builder::default();
    builder
        .tags(HashSet::from(BIO_TAGS))
        .generic_attributes(HashSet::new());
    builder.clean(bio).to_string()
}

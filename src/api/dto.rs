use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

use crate::domain::error::UserError;
use crate::domain::store::{
    DEFAULT_LIMIT, DEFAULT_PAGE, SortField, SortOrder, UserDraft, UserListQuery, UserPage,
};
use crate::domain::user::User;

pub const ALLOWED_FIELDS: [&str; 4] = ["nombre", "email", "fechaDeNacimiento", "categoria"];

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateUserRequest {
    pub nombre: Option<String>,
    pub email: Option<String>,
    #[serde(rename = "fechaDeNacimiento")]
    pub fecha_de_nacimiento: Option<String>,
    pub categoria: Option<String>,
}

impl CreateUserRequest {
    pub fn from_body(body: &Map<String, Value>) -> Result<Self, UserError> {
        reject_unknown_fields(body)?;

        Ok(CreateUserRequest {
            nombre: string_field(body, "nombre"),
            email: string_field(body, "email"),
            fecha_de_nacimiento: string_field(body, "fechaDeNacimiento"),
            categoria: string_field(body, "categoria"),
        })
    }
}

impl From<CreateUserRequest> for UserDraft {
    fn from(request: CreateUserRequest) -> Self {
        UserDraft {
            nombre: request.nombre,
            email: request.email,
            fecha_de_nacimiento: request.fecha_de_nacimiento,
            categoria: request.categoria,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct UpdateUserRequest {
    pub nombre: Option<String>,
    pub email: Option<String>,
    #[serde(rename = "fechaDeNacimiento")]
    pub fecha_de_nacimiento: Option<String>,
    pub categoria: Option<String>,
}

impl UpdateUserRequest {
    pub fn from_body(body: &Map<String, Value>) -> Result<Self, UserError> {
        reject_unknown_fields(body)?;

        Ok(UpdateUserRequest {
            nombre: string_field(body, "nombre"),
            email: string_field(body, "email"),
            fecha_de_nacimiento: string_field(body, "fechaDeNacimiento"),
            categoria: string_field(body, "categoria"),
        })
    }
}

impl From<UpdateUserRequest> for UserDraft {
    fn from(request: UpdateUserRequest) -> Self {
        UserDraft {
            nombre: request.nombre,
            email: request.email,
            fecha_de_nacimiento: request.fecha_de_nacimiento,
            categoria: request.categoria,
        }
    }
}

fn reject_unknown_fields(body: &Map<String, Value>) -> Result<(), UserError> {
    let unknown: Vec<String> = body
        .keys()
        .filter(|key| !ALLOWED_FIELDS.contains(&key.as_str()))
        .cloned()
        .collect();

    if unknown.is_empty() {
        Ok(())
    } else {
        Err(UserError::UnknownFields(unknown))
    }
}

// Wrong-typed values still count as supplied, so they fail their field's
// rule instead of being dropped
fn string_field(body: &Map<String, Value>, field: &str) -> Option<String> {
    match body.get(field) {
        None | Some(Value::Null) => None,
        Some(Value::String(value)) => Some(value.clone()),
        Some(_) => Some(String::new()),
    }
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct ListUsersQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub category: Option<String>,
    #[serde(rename = "sortBy")]
    pub sort_by: Option<String>,
    pub order: Option<String>,
}

impl From<ListUsersQuery> for UserListQuery {
    fn from(query: ListUsersQuery) -> Self {
        UserListQuery {
            category: query.category,
            sort_by: query
                .sort_by
                .as_deref()
                .map(SortField::from_param)
                .unwrap_or_default(),
            order: query
                .order
                .as_deref()
                .map(SortOrder::from_param)
                .unwrap_or_default(),
            page: query.page.unwrap_or(DEFAULT_PAGE),
            limit: query.limit.unwrap_or(DEFAULT_LIMIT),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct UserListResponse {
    pub users: Vec<User>,
    pub total: usize,
    pub page: u32,
    #[serde(rename = "totalPages")]
    pub total_pages: u32,
}

impl From<UserPage> for UserListResponse {
    fn from(page: UserPage) -> Self {
        UserListResponse {
            users: page.users,
            total: page.total,
            page: page.page,
            total_pages: page.total_pages,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub message: String,
}

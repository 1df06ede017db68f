use async_trait::async_trait;

use crate::domain::error::UserError;
use crate::domain::user::User;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 5;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserDraft {
    pub nombre: Option<String>,
    pub email: Option<String>,
    pub fecha_de_nacimiento: Option<String>,
    pub categoria: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    Nombre,
    FechaDeNacimiento,
}

impl SortField {
    pub fn from_param(param: &str) -> Self {
        match param {
            "fechaDeNacimiento" => SortField::FechaDeNacimiento,
            _ => SortField::Nombre,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn from_param(param: &str) -> Self {
        match param {
            "desc" => SortOrder::Desc,
            _ => SortOrder::Asc,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserListQuery {
    pub category: Option<String>,
    pub sort_by: SortField,
    pub order: SortOrder,
    pub page: u32,
    pub limit: u32,
}

impl Default for UserListQuery {
    fn default() -> Self {
        UserListQuery {
            category: None,
            sort_by: SortField::default(),
            order: SortOrder::default(),
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserPage {
    pub users: Vec<User>,
    pub total: usize,
    pub page: u32,
    pub total_pages: u32,
}

#[async_trait]
pub trait UserStore: Send + Sync {
    /// Filters, sorts and paginates the collection in that order
    /// Totals reflect the filtered collection, not the full one
    async fn list(&self, query: &UserListQuery) -> Result<UserPage, UserError>;

    async fn get(&self, id: u32) -> Result<User, UserError>;

    /// Validates the draft and inserts it with the next free id
    /// Checks run in a fixed order and the first failure wins
    ///
    /// # Errors
    /// - Validation for a field that breaks its rule
    /// - DuplicateEmail if another user already holds the email
    async fn create(&self, draft: UserDraft) -> Result<User, UserError>;

    /// Applies the supplied fields only, validating each before any write
    ///
    /// # Errors
    /// - NotFound if the id is unknown
    /// - Validation for a field that breaks its rule
    /// - DuplicateEmail if another user already holds the email
    async fn update(&self, id: u32, patch: UserDraft) -> Result<User, UserError>;

    /// # Errors
    /// - NotFound if the id is unknown
    async fn delete(&self, id: u32) -> Result<(), UserError>;
}

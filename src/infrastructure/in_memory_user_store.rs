use std::cmp::Ordering;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, Utc};
use tokio::sync::RwLock;

use crate::domain::error::UserError;
use crate::domain::store::{SortField, SortOrder, UserDraft, UserListQuery, UserPage, UserStore};
use crate::domain::user::User;
use crate::domain::validation::{self, ValidationIssue};

#[derive(Debug, Default)]
struct Directory {
    users: Vec<User>,
    last_id: u32,
}

#[derive(Clone)]
pub struct InMemoryUserStore {
    directory: Arc<RwLock<Directory>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self {
            directory: Arc::new(RwLock::new(Directory::default())),
        }
    }
}

impl Default for InMemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn list(&self, query: &UserListQuery) -> Result<UserPage, UserError> {
        let directory = self.directory.read().await;

        let mut users: Vec<User> = directory
            .users
            .iter()
            .filter(|user| match query.category.as_deref() {
                Some(category) if !category.is_empty() => user.categoria.as_str() == category,
                _ => true,
            })
            .cloned()
            .collect();

        users.sort_by(|a, b| {
            let ordering = match query.sort_by {
                SortField::Nombre => compare_nombres(&a.nombre, &b.nombre),
                SortField::FechaDeNacimiento => {
                    a.fecha_de_nacimiento.cmp(&b.fecha_de_nacimiento)
                }
            };
            match query.order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });

        let total = users.len();
        let page = query.page.max(1);
        let limit = query.limit.max(1) as usize;
        let total_pages = total.div_ceil(limit) as u32;
        let start = (page as usize - 1).saturating_mul(limit);
        let users = users.into_iter().skip(start).take(limit).collect();

        Ok(UserPage {
            users,
            total,
            page,
            total_pages,
        })
    }

    async fn get(&self, id: u32) -> Result<User, UserError> {
        let directory = self.directory.read().await;

        directory
            .users
            .iter()
            .find(|user| user.id == id)
            .cloned()
            .ok_or(UserError::NotFound)
    }

    async fn create(&self, draft: UserDraft) -> Result<User, UserError> {
        // Uniqueness check and insert share one write guard
        let mut directory = self.directory.write().await;

        let nombre = draft.nombre.unwrap_or_default();
        validation::validate_nombre(&nombre)?;

        let email = draft.email.unwrap_or_default();
        validation::validate_email(&email)?;
        if directory.users.iter().any(|user| user.email == email) {
            return Err(UserError::DuplicateEmail);
        }

        let fecha_de_nacimiento = parse_fecha(draft.fecha_de_nacimiento.as_deref())?;
        let categoria = validation::validate_categoria(draft.categoria.as_deref().unwrap_or(""))?;

        directory.last_id += 1;
        let user = User {
            id: directory.last_id,
            nombre,
            email,
            fecha_de_nacimiento,
            categoria,
        };
        directory.users.push(user.clone());

        Ok(user)
    }

    async fn update(&self, id: u32, patch: UserDraft) -> Result<User, UserError> {
        let mut directory = self.directory.write().await;

        let position = directory
            .users
            .iter()
            .position(|user| user.id == id)
            .ok_or(UserError::NotFound)?;

        // Every supplied field is validated before any of them is written
        if let Some(nombre) = patch.nombre.as_deref() {
            validation::validate_nombre(nombre)?;
        }
        if let Some(email) = patch.email.as_deref() {
            validation::validate_email(email)?;
            if directory
                .users
                .iter()
                .any(|user| user.email == email && user.id != id)
            {
                return Err(UserError::DuplicateEmail);
            }
        }
        let fecha_de_nacimiento = match patch.fecha_de_nacimiento.as_deref() {
            Some(raw) => Some(parse_fecha(Some(raw))?),
            None => None,
        };
        let categoria = match patch.categoria.as_deref() {
            Some(raw) => Some(validation::validate_categoria(raw)?),
            None => None,
        };

        let user = &mut directory.users[position];
        if let Some(nombre) = patch.nombre {
            user.nombre = nombre;
        }
        if let Some(email) = patch.email {
            user.email = email;
        }
        if let Some(fecha) = fecha_de_nacimiento {
            user.fecha_de_nacimiento = fecha;
        }
        if let Some(categoria) = categoria {
            user.categoria = categoria;
        }

        Ok(user.clone())
    }

    async fn delete(&self, id: u32) -> Result<(), UserError> {
        let mut directory = self.directory.write().await;

        let position = directory
            .users
            .iter()
            .position(|user| user.id == id)
            .ok_or(UserError::NotFound)?;
        directory.users.remove(position);

        Ok(())
    }
}

fn parse_fecha(raw: Option<&str>) -> Result<DateTime<Utc>, UserError> {
    let raw = raw.unwrap_or("");
    let parsed = DateTime::parse_from_rfc3339(raw)
        .map(|fecha| fecha.with_timezone(&Utc))
        .or_else(|_| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .map(|fecha| fecha.and_time(NaiveTime::MIN).and_utc())
        })
        .map_err(|_| UserError::Validation(ValidationIssue::FechaFormat))?;

    validation::validate_birth_date(parsed.day(), parsed.month(), parsed.year())?;

    Ok(parsed)
}

fn collation_key(nombre: &str) -> String {
    nombre
        .chars()
        .flat_map(|c| c.to_lowercase())
        .map(fold_accent)
        .collect()
}

fn fold_accent(c: char) -> char {
    match c {
        'á' | 'à' | 'ä' | 'â' => 'a',
        'é' | 'è' | 'ë' | 'ê' => 'e',
        'í' | 'ì' | 'ï' | 'î' => 'i',
        'ó' | 'ò' | 'ö' | 'ô' => 'o',
        'ú' | 'ù' | 'ü' | 'û' => 'u',
        'ñ' => 'n',
        'ç' => 'c',
        _ => c,
    }
}

// Accent-insensitive ordering with the raw string as tie-break, so
// "Álvaro" sorts with "Alvaro" instead of after "Zoe"
fn compare_nombres(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.cmp(b))
}

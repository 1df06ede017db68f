use chrono::{Datelike, Utc};
use lazy_regex::regex;

use crate::domain::user::Categoria;

pub const NOMBRE_MIN_CHARS: usize = 3;
pub const NOMBRE_MAX_CHARS: usize = 200;
pub const ALLOWED_EMAIL_DOMAINS: [&str; 2] = ["gmail.com", "hotmail.com"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    NombreLength,
    EmailFormat,
    EmailDomain,
    FechaFormat,
    DayRange,
    MonthRange,
    YearRange { max: i32 },
    DayOverflow { month: u32, day: u32 },
    CategoriaUnknown,
}

impl ValidationIssue {
    pub fn field_message(&self) -> String {
        match self {
            ValidationIssue::NombreLength => {
                format!(
                    "El nombre debe tener entre {} y {} caracteres",
                    NOMBRE_MIN_CHARS, NOMBRE_MAX_CHARS
                )
            }
            ValidationIssue::EmailFormat => "Formato de email inválido".to_string(),
            ValidationIssue::EmailDomain => {
                "Solo se aceptan emails de gmail y hotmail".to_string()
            }
            ValidationIssue::FechaFormat => "Fecha de nacimiento no válida".to_string(),
            ValidationIssue::DayRange => "Día inválido (1-31)".to_string(),
            ValidationIssue::MonthRange => "Mes inválido (1-12)".to_string(),
            ValidationIssue::YearRange { max } => format!("Año inválido (máximo {})", max),
            ValidationIssue::DayOverflow { month, day } => {
                format!("El mes {} no tiene {} días", month, day)
            }
            ValidationIssue::CategoriaUnknown => "Categoría no válida".to_string(),
        }
    }
}

pub fn current_year() -> i32 {
    Utc::now().year()
}

pub fn validate_nombre(nombre: &str) -> Result<(), ValidationIssue> {
    let length = nombre.chars().count();
    if (NOMBRE_MIN_CHARS..=NOMBRE_MAX_CHARS).contains(&length) {
        Ok(())
    } else {
        Err(ValidationIssue::NombreLength)
    }
}

pub fn validate_email(email: &str) -> Result<(), ValidationIssue> {
    let format = regex!(r"^[^\s@]+@[^\s@]+\.[^\s@]+$");
    if !format.is_match(email) {
        return Err(ValidationIssue::EmailFormat);
    }
    let domain = email.split_once('@').map(|(_, domain)| domain).unwrap_or("");
    if !ALLOWED_EMAIL_DOMAINS.contains(&domain) {
        return Err(ValidationIssue::EmailDomain);
    }

    Ok(())
}

pub fn validate_day(day: u32) -> Result<(), ValidationIssue> {
    if (1..=31).contains(&day) {
        Ok(())
    } else {
        Err(ValidationIssue::DayRange)
    }
}

pub fn validate_month(month: u32) -> Result<(), ValidationIssue> {
    if (1..=12).contains(&month) {
        Ok(())
    } else {
        Err(ValidationIssue::MonthRange)
    }
}

pub fn validate_year(year: i32) -> Result<(), ValidationIssue> {
    let max = current_year();
    if year > max {
        Err(ValidationIssue::YearRange { max })
    } else {
        Ok(())
    }
}

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

pub fn days_in_month(month: u32, year: i32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

pub fn validate_day_in_month(day: u32, month: u32, year: i32) -> Result<(), ValidationIssue> {
    if day > days_in_month(month, year) {
        Err(ValidationIssue::DayOverflow { month, day })
    } else {
        Ok(())
    }
}

pub fn validate_birth_date(day: u32, month: u32, year: i32) -> Result<(), ValidationIssue> {
    validate_day(day)?;
    validate_month(month)?;
    validate_year(year)?;
    validate_day_in_month(day, month, year)
}

pub fn validate_categoria(categoria: &str) -> Result<Categoria, ValidationIssue> {
    Categoria::ALL
        .into_iter()
        .find(|known| known.as_str() == categoria)
        .ok_or(ValidationIssue::CategoriaUnknown)
}

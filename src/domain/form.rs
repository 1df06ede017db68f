use chrono::{NaiveDate, NaiveTime, SecondsFormat};

use crate::domain::store::UserDraft;
use crate::domain::validation::{self, ValidationIssue};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserForm {
    pub nombre: String,
    pub email: String,
    pub day: String,
    pub month: String,
    pub year: String,
    pub categoria: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormErrors {
    pub nombre: Option<String>,
    pub email: Option<String>,
    pub day: Option<String>,
    pub month: Option<String>,
    pub year: Option<String>,
    pub categoria: Option<String>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.nombre.is_none()
            && self.email.is_none()
            && self.day.is_none()
            && self.month.is_none()
            && self.year.is_none()
            && self.categoria.is_none()
    }
}

impl UserForm {
    /// Checks every field and reports all failures at once, unlike the
    /// directory itself which stops at the first one
    pub fn validate(&self) -> Result<UserDraft, FormErrors> {
        let mut errors = FormErrors::default();

        if let Err(issue) = validation::validate_nombre(&self.nombre) {
            errors.nombre = Some(issue.field_message());
        }
        if let Err(issue) = validation::validate_email(&self.email) {
            errors.email = Some(issue.field_message());
        }

        let day = self.day.trim().parse::<u32>().unwrap_or(0);
        let month = self.month.trim().parse::<u32>().unwrap_or(0);
        let year = self.year.trim().parse::<i32>().unwrap_or(0);

        if let Err(issue) = validation::validate_day(day) {
            errors.day = Some(issue.field_message());
        }
        if let Err(issue) = validation::validate_month(month) {
            errors.month = Some(issue.field_message());
        }
        if year == 0 {
            let max = validation::current_year();
            errors.year = Some(ValidationIssue::YearRange { max }.field_message());
        } else if let Err(issue) = validation::validate_year(year) {
            errors.year = Some(issue.field_message());
        }

        // Day against month length only once the three parts hold on their own
        if errors.day.is_none() && errors.month.is_none() && errors.year.is_none() {
            if let Err(issue) = validation::validate_day_in_month(day, month, year) {
                errors.day = Some(issue.field_message());
            }
        }

        if self.categoria.is_empty() {
            errors.categoria = Some("La categoría es obligatoria".to_string());
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        let fecha = match NaiveDate::from_ymd_opt(year, month, day) {
            Some(date) => date.and_time(NaiveTime::MIN).and_utc(),
            None => {
                errors.day = Some(ValidationIssue::DayOverflow { month, day }.field_message());
                return Err(errors);
            }
        };

        Ok(UserDraft {
            nombre: Some(self.nombre.clone()),
            email: Some(self.email.clone()),
            fecha_de_nacimiento: Some(fecha.to_rfc3339_opts(SecondsFormat::Millis, true)),
            categoria: Some(self.categoria.clone()),
        })
    }
}

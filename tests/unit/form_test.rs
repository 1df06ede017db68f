use chrono::{Datelike, Utc};
use user_directory::domain::form::UserForm;

fn form(nombre: &str, email: &str, day: &str, month: &str, year: &str, categoria: &str) -> UserForm {
    UserForm {
        nombre: nombre.to_string(),
        email: email.to_string(),
        day: day.to_string(),
        month: month.to_string(),
        year: year.to_string(),
        categoria: categoria.to_string(),
    }
}

#[test]
fn it_builds_a_draft_from_a_valid_form() {
    let draft = form("Ana García", "ana@gmail.com", "10", "5", "1990", "amigo")
        .validate()
        .unwrap();

    assert_eq!(draft.nombre.as_deref(), Some("Ana García"));
    assert_eq!(draft.email.as_deref(), Some("ana@gmail.com"));
    assert_eq!(
        draft.fecha_de_nacimiento.as_deref(),
        Some("1990-05-10T00:00:00.000Z")
    );
    assert_eq!(draft.categoria.as_deref(), Some("amigo"));
}

#[test]
fn it_trims_the_date_parts_before_parsing() {
    let draft = form("Ana", "ana@gmail.com", " 10 ", " 5 ", " 1990 ", "amigo")
        .validate()
        .unwrap();

    assert_eq!(
        draft.fecha_de_nacimiento.as_deref(),
        Some("1990-05-10T00:00:00.000Z")
    );
}

#[test]
fn it_reports_every_failing_field_at_once() {
    let errors = form("", "", "", "", "", "").validate().unwrap_err();

    assert_eq!(
        errors.nombre.as_deref(),
        Some("El nombre debe tener entre 3 y 200 caracteres")
    );
    assert_eq!(errors.email.as_deref(), Some("Formato de email inválido"));
    assert_eq!(errors.day.as_deref(), Some("Día inválido (1-31)"));
    assert_eq!(errors.month.as_deref(), Some("Mes inválido (1-12)"));
    assert_eq!(
        errors.year,
        Some(format!("Año inválido (máximo {})", Utc::now().year()))
    );
    assert_eq!(errors.categoria.as_deref(), Some("La categoría es obligatoria"));
}

#[test]
fn it_separates_email_format_from_domain_messages() {
    let errors = form("Ana", "ana.gmail.com", "10", "5", "1990", "amigo")
        .validate()
        .unwrap_err();
    assert_eq!(errors.email.as_deref(), Some("Formato de email inválido"));

    let errors = form("Ana", "ana@yahoo.com", "10", "5", "1990", "amigo")
        .validate()
        .unwrap_err();
    assert_eq!(
        errors.email.as_deref(),
        Some("Solo se aceptan emails de gmail y hotmail")
    );
    assert!(errors.nombre.is_none());
}

#[test]
fn it_flags_day_overflow_only_when_the_parts_hold() {
    let errors = form("Ana", "ana@gmail.com", "31", "4", "1990", "amigo")
        .validate()
        .unwrap_err();
    assert_eq!(errors.day.as_deref(), Some("El mes 4 no tiene 31 días"));
    assert!(errors.month.is_none());

    let errors = form("Ana", "ana@gmail.com", "32", "2", "1990", "amigo")
        .validate()
        .unwrap_err();
    assert_eq!(errors.day.as_deref(), Some("Día inválido (1-31)"));
}

#[test]
fn it_applies_the_leap_rule_to_february() {
    assert!(form("Ana", "ana@gmail.com", "29", "2", "2024", "amigo")
        .validate()
        .is_ok());
    assert!(form("Ana", "ana@gmail.com", "29", "2", "2000", "amigo")
        .validate()
        .is_ok());

    let errors = form("Ana", "ana@gmail.com", "29", "2", "2023", "amigo")
        .validate()
        .unwrap_err();
    assert_eq!(errors.day.as_deref(), Some("El mes 2 no tiene 29 días"));

    let errors = form("Ana", "ana@gmail.com", "29", "2", "1900", "amigo")
        .validate()
        .unwrap_err();
    assert_eq!(errors.day.as_deref(), Some("El mes 2 no tiene 29 días"));
}

#[test]
fn it_rejects_future_and_unparseable_years() {
    let max = Utc::now().year();

    let errors = form("Ana", "ana@gmail.com", "10", "5", "3000", "amigo")
        .validate()
        .unwrap_err();
    assert_eq!(errors.year, Some(format!("Año inválido (máximo {max})")));

    let errors = form("Ana", "ana@gmail.com", "10", "5", "hace tiempo", "amigo")
        .validate()
        .unwrap_err();
    assert_eq!(errors.year, Some(format!("Año inválido (máximo {max})")));
}

#[test]
fn it_rejects_unparseable_day_and_month() {
    let errors = form("Ana", "ana@gmail.com", "diez", "cinco", "1990", "amigo")
        .validate()
        .unwrap_err();
    assert_eq!(errors.day.as_deref(), Some("Día inválido (1-31)"));
    assert_eq!(errors.month.as_deref(), Some("Mes inválido (1-12)"));
}

#[test]
fn it_requires_a_categoria() {
    let errors = form("Ana", "ana@gmail.com", "10", "5", "1990", "")
        .validate()
        .unwrap_err();
    assert_eq!(errors.categoria.as_deref(), Some("La categoría es obligatoria"));
}

#[test]
fn it_leaves_the_categoria_value_to_the_directory() {
    // The form only checks presence, the select box constrains the value
    assert!(form("Ana", "ana@gmail.com", "10", "5", "1990", "enemigo")
        .validate()
        .is_ok());
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: u32,
    pub nombre: String,
    pub email: String,
    #[serde(rename = "fechaDeNacimiento")]
    pub fecha_de_nacimiento: DateTime<Utc>,
    pub categoria: Categoria,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize, ToSchema)]
pub enum Categoria {
    #[serde(rename = "amigo")]
    Amigo,
    #[serde(rename = "compañero")]
    Companero,
    #[serde(rename = "superAmigos")]
    SuperAmigos,
    #[serde(rename = "bloqueados")]
    Bloqueados,
}

impl Categoria {
    pub const ALL: [Categoria; 4] = [
        Categoria::Amigo,
        Categoria::Companero,
        Categoria::SuperAmigos,
        Categoria::Bloqueados,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Categoria::Amigo => "amigo",
            Categoria::Companero => "compañero",
            Categoria::SuperAmigos => "superAmigos",
            Categoria::Bloqueados => "bloqueados",
        }
    }
}

impl std::fmt::Display for Categoria {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

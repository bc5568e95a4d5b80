use api_types::{Role, user as wire};
use serde::{Deserialize, Serialize};

/// A back-office user profile. Serde derives exist because the profile is
/// part of the persisted session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub role: Role,
}

impl From<wire::UsuarioRow> for User {
    fn from(row: wire::UsuarioRow) -> Self {
        Self {
            id: row.id,
            username: row.username,
            role: super::coerce_str(&row.rol, "rol", Role::Asistente),
        }
    }
}

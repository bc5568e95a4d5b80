use api_types::specialty as wire;

#[derive(Debug, Clone)]
pub struct Specialty {
    pub id: i64,
    pub name: String,
}

impl From<wire::EspecialidadRow> for Specialty {
    fn from(row: wire::EspecialidadRow) -> Self {
        Self {
            id: row.id,
            name: row.nombre,
        }
    }
}

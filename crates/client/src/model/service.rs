use api_types::{Money, service as wire};

/// A clinic service from the catalog (cleaning, extraction, …), priced per
/// specialty.
#[derive(Debug, Clone)]
pub struct ClinicService {
    pub id: i64,
    pub name: String,
    pub specialty_id: i64,
    pub price: Money,
}

impl From<wire::ServicioRow> for ClinicService {
    fn from(row: wire::ServicioRow) -> Self {
        Self {
            id: row.id,
            name: row.nombre,
            specialty_id: row.especialidad_id,
            price: row.precio,
        }
    }
}

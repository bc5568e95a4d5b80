use api_types::{Money, Status, consultation as wire};
use chrono::NaiveDate;

use super::coerce_str;

/// A clinic record header.
#[derive(Debug, Clone)]
pub struct Consultation {
    pub id: i64,
    pub date: NaiveDate,
    pub patient_name: String,
    pub doctor_id: i64,
    pub status: Status,
    pub total: Money,
}

impl From<wire::ConsultaRow> for Consultation {
    fn from(row: wire::ConsultaRow) -> Self {
        Self {
            id: row.id,
            date: row.fecha,
            patient_name: row.nombre_paciente,
            doctor_id: row.doctor_id,
            status: coerce_str(&row.estado, "estado", Status::Pendiente),
            total: row.total,
        }
    }
}

/// One performed-procedure line of a clinic record.
#[derive(Debug, Clone)]
pub struct ConsultationDetail {
    pub id: i64,
    pub service_id: i64,
    pub price: Money,
    pub note: Option<String>,
}

impl From<wire::ConsultaDetalleRow> for ConsultationDetail {
    fn from(row: wire::ConsultaDetalleRow) -> Self {
        Self {
            id: row.id,
            service_id: row.servicio_id,
            price: row.precio,
            note: row.nota,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConsultationFull {
    pub consultation: Consultation,
    pub details: Vec<ConsultationDetail>,
}

use std::collections::HashMap;

use api_types::{Money, PaymentMethod, Percentage, Status, quotation as wire};
use chrono::{NaiveDate, NaiveDateTime};

use super::coerce_str;

/// A quotation header as the backend returns it: totals and the pending
/// balance are authoritative backend values, never recomputed here.
#[derive(Debug, Clone)]
pub struct Quotation {
    pub id: i64,
    pub date: NaiveDate,
    pub client_name: String,
    pub phone: Option<String>,
    pub status: Status,
    pub total: Money,
    pub pending: Money,
    pub user_id: i64,
}

impl From<wire::CotizacionRow> for Quotation {
    fn from(row: wire::CotizacionRow) -> Self {
        Self {
            id: row.id,
            date: row.fecha,
            client_name: row.nombre_cliente,
            phone: row.telefono,
            status: coerce_str(&row.estado, "estado", Status::Pendiente),
            total: row.total,
            pending: row.monto_pendiente,
            user_id: row.usuario_id,
        }
    }
}

/// A doctor's share of one quoted service. `amount` is fixed at creation
/// (`price × percentage / 100`, rounded half-up to the cent); `pending`
/// decreases as commission payments apply.
#[derive(Debug, Clone)]
pub struct ServiceCommission {
    pub doctor_id: i64,
    pub percentage: Percentage,
    pub amount: Money,
    pub pending: Money,
}

impl ServiceCommission {
    pub fn paid(&self) -> Money {
        self.amount - self.pending
    }
}

impl From<wire::ComisionRow> for ServiceCommission {
    fn from(row: wire::ComisionRow) -> Self {
        Self {
            doctor_id: row.doctor_id,
            percentage: row.porcentaje,
            amount: row.monto,
            pending: row.monto_pendiente,
        }
    }
}

#[derive(Debug, Clone)]
pub struct QuotationService {
    pub id: i64,
    pub service_id: i64,
    pub specialty_id: i64,
    pub price: Money,
    pub commissions: Vec<ServiceCommission>,
}

impl From<wire::CotizacionServicioRow> for QuotationService {
    fn from(row: wire::CotizacionServicioRow) -> Self {
        Self {
            id: row.id,
            service_id: row.servicio_id,
            specialty_id: row.especialidad_id,
            price: row.precio,
            commissions: row.comisiones.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct QuotationPayment {
    pub id: i64,
    pub date: NaiveDateTime,
    pub amount: Money,
    pub method: PaymentMethod,
    pub cash: Option<Money>,
    pub qr: Option<Money>,
    /// Commission amounts settled by this payment, keyed by doctor id.
    pub commissions: HashMap<i64, Money>,
}

impl From<wire::PagoRow> for QuotationPayment {
    fn from(row: wire::PagoRow) -> Self {
        Self {
            id: row.id,
            date: row.fecha,
            amount: row.monto,
            method: coerce_str(&row.metodo_pago, "metodo_pago", PaymentMethod::Efectivo),
            cash: row.monto_efectivo,
            qr: row.monto_qr,
            commissions: row
                .comisiones
                .into_iter()
                .map(|c| (c.doctor_id, c.monto))
                .collect(),
        }
    }
}

/// The assembled composite: header plus dependent collections, both in
/// backend-returned order. Built by the aggregator; a failed dependent fetch
/// leaves the corresponding collection empty rather than failing the whole
/// record.
#[derive(Debug, Clone)]
pub struct QuotationFull {
    pub quotation: Quotation,
    pub services: Vec<QuotationService>,
    pub payments: Vec<QuotationPayment>,
}

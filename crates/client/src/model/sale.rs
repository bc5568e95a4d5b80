use api_types::{Money, PaymentMethod, Status, sale as wire};
use chrono::NaiveDateTime;

use super::coerce_str;

/// A point-of-sale ticket from the apparel side of the business.
#[derive(Debug, Clone)]
pub struct Sale {
    pub id: i64,
    pub date: NaiveDateTime,
    pub user_id: i64,
    pub total: Money,
    pub method: PaymentMethod,
    pub cash: Option<Money>,
    pub qr: Option<Money>,
    pub status: Status,
}

impl From<wire::VentaRow> for Sale {
    fn from(row: wire::VentaRow) -> Self {
        Self {
            id: row.id,
            date: row.fecha,
            user_id: row.usuario_id,
            total: row.total,
            method: coerce_str(&row.metodo_pago, "metodo_pago", PaymentMethod::Efectivo),
            cash: row.monto_efectivo,
            qr: row.monto_qr,
            status: coerce_str(&row.estado, "estado", Status::Pendiente),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SaleLine {
    pub id: i64,
    pub product_id: i64,
    pub quantity: i64,
    pub price: Money,
}

impl SaleLine {
    pub fn subtotal(&self) -> Money {
        Money::new(self.price.cents() * self.quantity)
    }
}

impl From<wire::VentaDetalleRow> for SaleLine {
    fn from(row: wire::VentaDetalleRow) -> Self {
        Self {
            id: row.id,
            product_id: row.producto_id,
            quantity: row.cantidad,
            price: row.precio,
        }
    }
}

use api_types::{Money, ProductStatus, product as wire};

use super::coerce_code;

#[derive(Debug, Clone)]
pub struct Product {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub sale_price: Money,
    pub cost_price: Money,
    pub stock: i64,
    pub status: ProductStatus,
}

impl From<wire::ProductoRow> for Product {
    fn from(row: wire::ProductoRow) -> Self {
        Self {
            id: row.id,
            code: row.codigo,
            name: row.nombre,
            sale_price: row.precio_venta,
            cost_price: row.precio_costo,
            stock: row.stock,
            status: coerce_code(row.estado, "estado", ProductStatus::Inactivo),
        }
    }
}

//! Point-of-sale tickets for the apparel side.

use api_types::{CambioEstado, Money, Status, sale as wire};

use crate::{
    Api,
    error::{ApiError, Result},
    model::{self, Sale, SaleLine},
};

impl Api {
    pub async fn sales(&self) -> Result<Vec<Sale>> {
        let rows: Vec<wire::VentaRow> = self.get("/ventas").await?;
        Ok(rows.into_iter().map(Sale::from).collect())
    }

    pub async fn sale(&self, id: i64) -> Result<Sale> {
        let row: wire::VentaRow = self.get(&format!("/ventas/{id}")).await?;
        Ok(row.into())
    }

    pub async fn sale_lines(&self, id: i64) -> Result<Vec<SaleLine>> {
        let rows: Vec<wire::VentaDetalleRow> =
            self.get(&format!("/ventas/{id}/detalles")).await?;
        Ok(rows.into_iter().map(SaleLine::from).collect())
    }

    /// Creates a sale. The total must equal the sum of line subtotals and a
    /// `Mixto` split must add up exactly; both are checked before submission.
    pub async fn create_sale(&self, req: &wire::VentaNueva) -> Result<Sale> {
        model::validate_payment(req.metodo_pago, req.total, req.monto_efectivo, req.monto_qr)
            .map_err(ApiError::Validation)?;

        let mut lines_total = Money::ZERO;
        for line in &req.detalles {
            lines_total += Money::new(line.precio.cents() * line.cantidad);
        }
        if lines_total != req.total {
            return Err(ApiError::Validation(format!(
                "sale total {} does not match line subtotals {lines_total}",
                req.total
            )));
        }

        let row: wire::VentaRow = self.post("/ventas", req).await?;
        Ok(row.into())
    }

    /// Soft delete (void), like quotations.
    pub async fn delete_sale(&self, id: i64) -> Result<()> {
        self.patch_unit(
            &format!("/ventas/{id}/estado"),
            &CambioEstado {
                estado: Status::Eliminado,
            },
        )
        .await
    }
}

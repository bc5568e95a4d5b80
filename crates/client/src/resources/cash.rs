//! Cash boxes with their movements and expenses, plus the closing
//! reconciliation.

use api_types::cash as wire;

use crate::{
    Api,
    error::{ApiError, Result},
    fanout,
    model::{self, CashBox, CashBoxStatus, CashReconciliation, Expense, Movement},
};

impl Api {
    pub async fn cash_boxes(&self) -> Result<Vec<CashBox>> {
        let rows: Vec<wire::CajaRow> = self.get("/cajas").await?;
        Ok(rows.into_iter().map(CashBox::from).collect())
    }

    pub async fn cash_box(&self, id: i64) -> Result<CashBox> {
        let row: wire::CajaRow = self.get(&format!("/cajas/{id}")).await?;
        Ok(row.into())
    }

    pub async fn open_cash_box(&self, req: &wire::CajaAbrir) -> Result<CashBox> {
        let row: wire::CajaRow = self.post("/cajas", req).await?;
        Ok(row.into())
    }

    pub async fn close_cash_box(&self, id: i64) -> Result<CashBox> {
        let row: wire::CajaRow = self.post(&format!("/cajas/{id}/cerrar"), &()).await?;
        Ok(row.into())
    }

    pub async fn cash_movements(&self, id: i64) -> Result<Vec<Movement>> {
        let rows: Vec<wire::MovimientoRow> =
            self.get(&format!("/cajas/{id}/movimientos")).await?;
        Ok(rows.into_iter().map(Movement::from).collect())
    }

    pub async fn cash_expenses(&self, id: i64) -> Result<Vec<Expense>> {
        let rows: Vec<wire::GastoRow> = self.get(&format!("/cajas/{id}/gastos")).await?;
        Ok(rows.into_iter().map(Expense::from).collect())
    }

    pub async fn add_movement(&self, id: i64, req: &wire::MovimientoNuevo) -> Result<Movement> {
        model::validate_payment(req.metodo_pago, req.monto, req.monto_efectivo, req.monto_qr)
            .map_err(ApiError::Validation)?;
        let row: wire::MovimientoRow = self
            .post(&format!("/cajas/{id}/movimientos"), req)
            .await?;
        Ok(row.into())
    }

    pub async fn add_expense(&self, id: i64, req: &wire::GastoNuevo) -> Result<Expense> {
        if !req.monto.is_positive() {
            return Err(ApiError::Validation(format!(
                "expense amount must be positive, got {}",
                req.monto
            )));
        }
        let row: wire::GastoRow = self.post(&format!("/cajas/{id}/gastos"), req).await?;
        Ok(row.into())
    }

    /// Assembles a cash box with its movements and expenses (both
    /// best-effort, fetched in parallel) and the derived closing
    /// reconciliation.
    pub async fn cash_box_status(&self, id: i64) -> Result<CashBoxStatus> {
        let cash_box = self.cash_box(id).await?;
        let (movements, expenses) = tokio::join!(
            fanout::ok_or_empty(self.cash_movements(id), "cash movements", id),
            fanout::ok_or_empty(self.cash_expenses(id), "cash expenses", id),
        );
        let reconciliation = CashReconciliation::compute(&cash_box, &movements, &expenses);
        Ok(CashBoxStatus {
            cash_box,
            movements,
            expenses,
            reconciliation,
        })
    }
}

use api_types::report as wire;
use chrono::NaiveDate;

use crate::{Api, error::Result, model::ReportSummary};

impl Api {
    /// Backend-computed totals for a date range (inclusive).
    pub async fn report_summary(&self, from: NaiveDate, to: NaiveDate) -> Result<ReportSummary> {
        let row: wire::ResumenRow = self
            .get(&format!("/reportes/resumen?desde={from}&hasta={to}"))
            .await?;
        Ok(row.into())
    }
}

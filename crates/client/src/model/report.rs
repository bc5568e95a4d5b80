use api_types::{Money, report as wire};
use chrono::NaiveDate;

/// Backend-computed totals for a date range.
#[derive(Debug, Clone)]
pub struct ReportSummary {
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub sales_income: Money,
    pub consultation_income: Money,
    pub quotation_payments: Money,
    pub expenses: Money,
    pub net: Money,
}

impl From<wire::ResumenRow> for ReportSummary {
    fn from(row: wire::ResumenRow) -> Self {
        Self {
            from: row.desde,
            to: row.hasta,
            sales_income: row.total_ventas,
            consultation_income: row.total_consultas,
            quotation_payments: row.total_pagos_cotizaciones,
            expenses: row.total_gastos,
            net: row.neto,
        }
    }
}

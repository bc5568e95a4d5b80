use api_types::{Money, MovementKind, PaymentMethod, cash as wire};
use chrono::NaiveDateTime;

use super::coerce_str;

#[derive(Debug, Clone)]
pub struct CashBox {
    pub id: i64,
    pub opened_at: NaiveDateTime,
    pub closed_at: Option<NaiveDateTime>,
    pub opening: Money,
}

impl CashBox {
    pub fn is_open(&self) -> bool {
        self.closed_at.is_none()
    }
}

impl From<wire::CajaRow> for CashBox {
    fn from(row: wire::CajaRow) -> Self {
        Self {
            id: row.id,
            opened_at: row.fecha_apertura,
            closed_at: row.fecha_cierre,
            opening: row.monto_apertura,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Movement {
    pub id: i64,
    pub at: NaiveDateTime,
    pub kind: MovementKind,
    pub concept: String,
    pub amount: Money,
    pub method: PaymentMethod,
    pub cash: Option<Money>,
    pub qr: Option<Money>,
}

impl Movement {
    /// Cash-drawer side of this movement: the full amount for `Efectivo`,
    /// the cash part for `Mixto`, nothing for `QR`.
    pub fn cash_part(&self) -> Money {
        match self.method {
            PaymentMethod::Efectivo => self.amount,
            PaymentMethod::Qr => Money::ZERO,
            PaymentMethod::Mixto => self.cash.unwrap_or(Money::ZERO),
        }
    }

    /// QR side of this movement.
    pub fn qr_part(&self) -> Money {
        match self.method {
            PaymentMethod::Efectivo => Money::ZERO,
            PaymentMethod::Qr => self.amount,
            PaymentMethod::Mixto => self.qr.unwrap_or(Money::ZERO),
        }
    }
}

impl From<wire::MovimientoRow> for Movement {
    fn from(row: wire::MovimientoRow) -> Self {
        Self {
            id: row.id,
            at: row.fecha,
            kind: coerce_str(&row.tipo, "tipo", MovementKind::Egreso),
            concept: row.concepto,
            amount: row.monto,
            method: coerce_str(&row.metodo_pago, "metodo_pago", PaymentMethod::Efectivo),
            cash: row.monto_efectivo,
            qr: row.monto_qr,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Expense {
    pub id: i64,
    pub at: NaiveDateTime,
    pub concept: String,
    pub amount: Money,
}

impl From<wire::GastoRow> for Expense {
    fn from(row: wire::GastoRow) -> Self {
        Self {
            id: row.id,
            at: row.fecha,
            concept: row.concepto,
            amount: row.monto,
        }
    }
}

/// Closing reconciliation derived from the fetched rows: what the drawer
/// should hold and what went through QR.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CashReconciliation {
    /// Opening amount plus cash-side inflows, minus cash-side outflows and
    /// expenses.
    pub expected_cash: Money,
    /// QR-side inflows (informational; QR money never reaches the drawer).
    pub qr_income: Money,
    pub expenses_total: Money,
}

impl CashReconciliation {
    pub fn compute(cash_box: &CashBox, movements: &[Movement], expenses: &[Expense]) -> Self {
        let mut expected_cash = cash_box.opening;
        let mut qr_income = Money::ZERO;
        for movement in movements {
            match movement.kind {
                MovementKind::Ingreso => {
                    expected_cash += movement.cash_part();
                    qr_income += movement.qr_part();
                }
                MovementKind::Egreso => {
                    expected_cash -= movement.cash_part();
                }
            }
        }

        let mut expenses_total = Money::ZERO;
        for expense in expenses {
            expenses_total += expense.amount;
        }
        expected_cash -= expenses_total;

        Self {
            expected_cash,
            qr_income,
            expenses_total,
        }
    }
}

/// The assembled cash-box aggregate.
#[derive(Debug, Clone)]
pub struct CashBoxStatus {
    pub cash_box: CashBox,
    pub movements: Vec<Movement>,
    pub expenses: Vec<Expense>,
    pub reconciliation: CashReconciliation,
}

use api_types::{DoctorPayKind, Money, Percentage, doctor as wire};

use super::{Specialty, coerce_str};

#[derive(Debug, Clone)]
pub struct Doctor {
    pub id: i64,
    pub name: String,
    pub phone: Option<String>,
    pub pay_kind: DoctorPayKind,
}

impl From<wire::DoctorRow> for Doctor {
    fn from(row: wire::DoctorRow) -> Self {
        Self {
            id: row.id,
            name: row.nombre,
            phone: row.telefono,
            // Unknown kinds must not silently enrol a doctor in commission
            // splits, hence the salaried fallback.
            pay_kind: coerce_str(&row.tipo_pago, "tipo_pago", DoctorPayKind::Sueldo),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DoctorFull {
    pub doctor: Doctor,
    pub specialties: Vec<Specialty>,
}

/// One commission owed to a doctor, with its quotation/service context.
#[derive(Debug, Clone)]
pub struct DoctorCommission {
    pub quotation_id: i64,
    pub service_id: i64,
    pub percentage: Percentage,
    pub amount: Money,
    pub pending: Money,
}

impl From<wire::DoctorComisionRow> for DoctorCommission {
    fn from(row: wire::DoctorComisionRow) -> Self {
        Self {
            quotation_id: row.cotizacion_id,
            service_id: row.servicio_id,
            percentage: row.porcentaje,
            amount: row.monto,
            pending: row.monto_pendiente,
        }
    }
}

/// Pending/paid split across all of a doctor's commissions, derived
/// client-side from the fetched rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommissionSummary {
    pub total: Money,
    pub pending: Money,
}

impl CommissionSummary {
    pub fn from_rows(rows: &[DoctorCommission]) -> Self {
        let mut total = Money::ZERO;
        let mut pending = Money::ZERO;
        for row in rows {
            total += row.amount;
            pending += row.pending;
        }
        Self { total, pending }
    }

    pub fn paid(&self) -> Money {
        self.total - self.pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(amount: i64, pending: i64) -> DoctorCommission {
        DoctorCommission {
            quotation_id: 1,
            service_id: 1,
            percentage: Percentage::from_hundredths(5_000),
            amount: Money::new(amount),
            pending: Money::new(pending),
        }
    }

    #[test]
    fn summary_splits_pending_and_paid() {
        let summary = CommissionSummary::from_rows(&[row(10_000, 2_500), row(5_000, 5_000)]);
        assert_eq!(summary.total, Money::new(15_000));
        assert_eq!(summary.pending, Money::new(7_500));
        assert_eq!(summary.paid(), Money::new(7_500));
    }

    #[test]
    fn summary_of_nothing_is_zero() {
        let summary = CommissionSummary::from_rows(&[]);
        assert_eq!(summary.total, Money::ZERO);
        assert_eq!(summary.paid(), Money::ZERO);
    }
}

//! Typed domain model and the wire-to-domain mapping layer.
//!
//! Every resource operation converts the backend's raw rows (Spanish
//! snake_case keys, string decimals, string/integer-coded enums) into these
//! structs via `From` conversions. Enum coercion is total: unrecognized wire
//! values are logged and mapped to a documented fallback, never a crash.

use api_types::{Money, PaymentMethod};

pub use cash::{CashBox, CashBoxStatus, CashReconciliation, Expense, Movement};
pub use consultation::{Consultation, ConsultationDetail, ConsultationFull};
pub use doctor::{CommissionSummary, Doctor, DoctorCommission, DoctorFull};
pub use product::Product;
pub use quotation::{
    Quotation, QuotationFull, QuotationPayment, QuotationService, ServiceCommission,
};
pub use report::ReportSummary;
pub use sale::{Sale, SaleLine};
pub use service::ClinicService;
pub use specialty::Specialty;
pub use user::User;

mod cash;
mod consultation;
mod doctor;
mod product;
mod quotation;
mod report;
mod sale;
mod service;
mod specialty;
mod user;

/// Maps a raw wire string to its closed variant, coercing unknown values to
/// `fallback` with a diagnostic.
pub(crate) fn coerce_str<T>(raw: &str, field: &'static str, fallback: T) -> T
where
    T: for<'a> TryFrom<&'a str> + Copy + std::fmt::Debug,
{
    match T::try_from(raw) {
        Ok(value) => value,
        Err(_) => {
            tracing::warn!(field, value = raw, fallback = ?fallback, "unrecognized wire value, coerced");
            fallback
        }
    }
}

/// Integer-coded counterpart of [`coerce_str`].
pub(crate) fn coerce_code<T>(raw: i64, field: &'static str, fallback: T) -> T
where
    T: TryFrom<i64> + Copy + std::fmt::Debug,
{
    match T::try_from(raw) {
        Ok(value) => value,
        Err(_) => {
            tracing::warn!(field, value = raw, fallback = ?fallback, "unrecognized wire code, coerced");
            fallback
        }
    }
}

/// Validates a client-supplied payment before submission.
///
/// Amounts are integer cents, so the mixed-payment constraint is exact:
/// `cash + qr == amount`, both parts present. Payments the backend already
/// accepted are trusted as-is and never re-checked.
pub(crate) fn validate_payment(
    method: PaymentMethod,
    amount: Money,
    cash: Option<Money>,
    qr: Option<Money>,
) -> Result<(), String> {
    if !amount.is_positive() {
        return Err(format!("payment amount must be positive, got {amount}"));
    }
    if method == PaymentMethod::Mixto {
        let (Some(cash), Some(qr)) = (cash, qr) else {
            return Err("a Mixto payment requires both cash and QR parts".to_string());
        };
        if cash.is_negative() || qr.is_negative() {
            return Err(format!("Mixto parts must not be negative: {cash} / {qr}"));
        }
        if cash + qr != amount {
            return Err(format!("Mixto parts {cash} + {qr} do not add up to {amount}"));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use api_types::{Role, Status};

    #[test]
    fn unknown_role_coerces_to_assistant() {
        assert_eq!(coerce_str("gerente", "rol", Role::Asistente), Role::Asistente);
        assert_eq!(coerce_str("admin", "rol", Role::Asistente), Role::Admin);
    }

    #[test]
    fn unknown_status_coerces_to_pending() {
        assert_eq!(
            coerce_str("archivada", "estado", Status::Pendiente),
            Status::Pendiente
        );
    }

    #[test]
    fn mixto_parts_must_sum_to_amount() {
        let ok = validate_payment(
            PaymentMethod::Mixto,
            Money::new(5_000),
            Some(Money::new(3_000)),
            Some(Money::new(2_000)),
        );
        assert!(ok.is_ok());

        let mismatch = validate_payment(
            PaymentMethod::Mixto,
            Money::new(5_000),
            Some(Money::new(3_000)),
            Some(Money::new(1_000)),
        );
        assert!(mismatch.is_err());

        let missing = validate_payment(PaymentMethod::Mixto, Money::new(5_000), None, None);
        assert!(missing.is_err());
    }

    #[test]
    fn plain_payments_skip_the_split_check() {
        assert!(validate_payment(PaymentMethod::Efectivo, Money::new(100), None, None).is_ok());
        assert!(validate_payment(PaymentMethod::Qr, Money::new(0), None, None).is_err());
    }
}

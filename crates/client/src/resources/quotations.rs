//! Quotations: the full composite-record aggregation pattern.
//!
//! A quotation is assembled from three dependent fetches (services,
//! payments, per-service commissions), each best-effort: a broken dependent
//! fetch degrades that slice of the aggregate instead of failing it, and one
//! quotation's failure never blocks listing the others.

use std::collections::HashMap;

use api_types::{CambioEstado, Percentage, Status, quotation as wire};
use futures::future::join_all;

use crate::{
    Api,
    error::{ApiError, Result},
    fanout,
    model::{self, Quotation, QuotationFull, QuotationPayment, QuotationService, ServiceCommission},
};

impl Api {
    pub async fn quotations(&self) -> Result<Vec<Quotation>> {
        let rows: Vec<wire::CotizacionRow> = self.get("/cotizaciones").await?;
        Ok(rows.into_iter().map(Quotation::from).collect())
    }

    pub async fn quotation(&self, id: i64) -> Result<Quotation> {
        let row: wire::CotizacionRow = self.get(&format!("/cotizaciones/{id}")).await?;
        Ok(row.into())
    }

    pub async fn create_quotation(&self, req: &wire::CotizacionNueva) -> Result<Quotation> {
        validate_quotation(req).map_err(ApiError::Validation)?;
        let row: wire::CotizacionRow = self.post("/cotizaciones", req).await?;
        Ok(row.into())
    }

    pub async fn update_quotation(
        &self,
        id: i64,
        req: &wire::CotizacionActualizar,
    ) -> Result<Quotation> {
        let row: wire::CotizacionRow = self.put(&format!("/cotizaciones/{id}"), req).await?;
        Ok(row.into())
    }

    /// Soft delete: a status PATCH to `eliminado`. The row stays retrievable
    /// by id and keeps every other field.
    pub async fn delete_quotation(&self, id: i64) -> Result<()> {
        self.patch_unit(
            &format!("/cotizaciones/{id}/estado"),
            &CambioEstado {
                estado: Status::Eliminado,
            },
        )
        .await
    }

    pub async fn quotation_services(&self, id: i64) -> Result<Vec<QuotationService>> {
        let rows: Vec<wire::CotizacionServicioRow> =
            self.get(&format!("/cotizaciones/{id}/servicios")).await?;
        Ok(rows.into_iter().map(QuotationService::from).collect())
    }

    pub async fn quotation_payments(&self, id: i64) -> Result<Vec<QuotationPayment>> {
        let rows: Vec<wire::PagoRow> = self.get(&format!("/cotizaciones/{id}/pagos")).await?;
        Ok(rows.into_iter().map(QuotationPayment::from).collect())
    }

    pub async fn service_commissions(&self, service_id: i64) -> Result<Vec<ServiceCommission>> {
        let rows: Vec<wire::ComisionRow> = self
            .get(&format!("/cotizaciones/servicios/{service_id}/comisiones"))
            .await?;
        Ok(rows.into_iter().map(ServiceCommission::from).collect())
    }

    /// Assembles one quotation with its services, payments and per-service
    /// commissions. Infallible by design: every dependent fetch failure is
    /// logged and degraded, so a parent already in hand always yields an
    /// aggregate.
    pub async fn assemble_quotation(&self, quotation: Quotation) -> QuotationFull {
        let id = quotation.id;
        let (services, payments) = tokio::join!(
            fanout::ok_or_empty(self.quotation_services(id), "quotation services", id),
            fanout::ok_or_empty(self.quotation_payments(id), "quotation payments", id),
        );
        let services = self.enrich_commissions(services).await;
        QuotationFull {
            quotation,
            services,
            payments,
        }
    }

    pub async fn quotation_full(&self, id: i64) -> Result<QuotationFull> {
        let quotation = self.quotation(id).await?;
        Ok(self.assemble_quotation(quotation).await)
    }

    /// Lists every quotation fully assembled. Parents are assembled
    /// independently in parallel; a parent whose dependents cannot be
    /// fetched comes back with empty collections, the list itself succeeds.
    pub async fn quotations_full(&self) -> Result<Vec<QuotationFull>> {
        let quotations = self.quotations().await?;
        Ok(join_all(
            quotations
                .into_iter()
                .map(|quotation| self.assemble_quotation(quotation)),
        )
        .await)
    }

    /// Registers a payment against a quotation.
    ///
    /// Validates before submission (mixed-payment split, amount within the
    /// pending balance), then re-fetches the full aggregate: pending amounts
    /// are authoritative backend values, never decremented locally.
    pub async fn register_payment(
        &self,
        quotation_id: i64,
        payment: &wire::PagoNuevo,
    ) -> Result<QuotationFull> {
        model::validate_payment(
            payment.metodo_pago,
            payment.monto,
            payment.monto_efectivo,
            payment.monto_qr,
        )
        .map_err(ApiError::Validation)?;

        let current = self.quotation(quotation_id).await?;
        if payment.monto > current.pending {
            return Err(ApiError::Validation(format!(
                "payment of {} exceeds pending amount {}",
                payment.monto, current.pending
            )));
        }

        self.post_unit(&format!("/cotizaciones/{quotation_id}/pagos"), payment)
            .await?;
        self.quotation_full(quotation_id).await
    }

    /// Fetches commissions for every service of a parent in parallel and
    /// merges them back by service id. A failed arm leaves that service's
    /// commissions exactly as originally provided.
    async fn enrich_commissions(
        &self,
        mut services: Vec<QuotationService>,
    ) -> Vec<QuotationService> {
        let fetches = services.iter().map(|service| {
            let id = service.id;
            async move { (id, self.service_commissions(id).await) }
        });

        let mut fetched: HashMap<i64, Vec<ServiceCommission>> = HashMap::new();
        for (id, result) in join_all(fetches).await {
            match result {
                Ok(commissions) => {
                    fetched.insert(id, commissions);
                }
                Err(err) => {
                    tracing::warn!(service_id = id, error = %err, "failed to fetch commissions, keeping prior list");
                }
            }
        }

        for service in &mut services {
            if let Some(commissions) = fetched.remove(&service.id) {
                service.commissions = commissions;
            }
        }
        services
    }
}

fn validate_quotation(req: &wire::CotizacionNueva) -> std::result::Result<(), String> {
    if req.servicios.is_empty() {
        return Err("a quotation needs at least one service".to_string());
    }
    for servicio in &req.servicios {
        if servicio.precio.is_negative() {
            return Err(format!(
                "service {} has a negative price {}",
                servicio.servicio_id, servicio.precio
            ));
        }
        // Partial assignment is allowed; over-assignment is not.
        let assigned = servicio
            .comisiones
            .iter()
            .fold(Percentage::ZERO, |acc, c| acc + c.porcentaje);
        if assigned > Percentage::ONE_HUNDRED {
            return Err(format!(
                "commission percentages for service {} sum to {assigned}",
                servicio.servicio_id
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use api_types::Money;
    use chrono::NaiveDate;

    fn service(percentages: &[&str]) -> wire::CotizacionServicioNuevo {
        wire::CotizacionServicioNuevo {
            servicio_id: 1,
            especialidad_id: 1,
            precio: Money::new(10_000),
            comisiones: percentages
                .iter()
                .enumerate()
                .map(|(i, pct)| wire::ComisionNueva {
                    doctor_id: i as i64 + 1,
                    porcentaje: pct.parse().unwrap(),
                })
                .collect(),
        }
    }

    fn request(servicios: Vec<wire::CotizacionServicioNuevo>) -> wire::CotizacionNueva {
        wire::CotizacionNueva {
            fecha: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
            nombre_cliente: "Ana Rojas".to_string(),
            telefono: None,
            servicios,
        }
    }

    #[test]
    fn partial_commission_assignment_is_allowed() {
        assert!(validate_quotation(&request(vec![service(&["40", "35"])])).is_ok());
    }

    #[test]
    fn over_assignment_is_rejected() {
        assert!(validate_quotation(&request(vec![service(&["60", "50"])])).is_err());
    }

    #[test]
    fn empty_quotations_are_rejected() {
        assert!(validate_quotation(&request(Vec::new())).is_err());
    }
}

//! Clinic service catalog.

use api_types::service as wire;

use crate::{Api, error::Result, model::ClinicService};

impl Api {
    pub async fn clinic_services(&self) -> Result<Vec<ClinicService>> {
        let rows: Vec<wire::ServicioRow> = self.get("/servicios").await?;
        Ok(rows.into_iter().map(ClinicService::from).collect())
    }

    pub async fn clinic_service(&self, id: i64) -> Result<ClinicService> {
        let row: wire::ServicioRow = self.get(&format!("/servicios/{id}")).await?;
        Ok(row.into())
    }

    pub async fn create_clinic_service(&self, req: &wire::ServicioNuevo) -> Result<ClinicService> {
        let row: wire::ServicioRow = self.post("/servicios", req).await?;
        Ok(row.into())
    }

    pub async fn update_clinic_service(
        &self,
        id: i64,
        req: &wire::ServicioNuevo,
    ) -> Result<ClinicService> {
        let row: wire::ServicioRow = self.put(&format!("/servicios/{id}"), req).await?;
        Ok(row.into())
    }

    pub async fn delete_clinic_service(&self, id: i64) -> Result<()> {
        self.delete_unit(&format!("/servicios/{id}")).await
    }
}

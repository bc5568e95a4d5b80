use api_types::specialty as wire;

use crate::{Api, error::Result, model::Specialty};

impl Api {
    pub async fn specialties(&self) -> Result<Vec<Specialty>> {
        let rows: Vec<wire::EspecialidadRow> = self.get("/especialidades").await?;
        Ok(rows.into_iter().map(Specialty::from).collect())
    }

    pub async fn create_specialty(&self, req: &wire::EspecialidadNueva) -> Result<Specialty> {
        let row: wire::EspecialidadRow = self.post("/especialidades", req).await?;
        Ok(row.into())
    }

    pub async fn delete_specialty(&self, id: i64) -> Result<()> {
        self.delete_unit(&format!("/especialidades/{id}")).await
    }
}

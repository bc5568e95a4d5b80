//! Clinic records (consultations) and their detail lines.

use api_types::{CambioEstado, Status, consultation as wire};
use futures::future::join_all;

use crate::{
    Api,
    error::Result,
    fanout,
    model::{Consultation, ConsultationDetail, ConsultationFull},
};

impl Api {
    pub async fn consultations(&self) -> Result<Vec<Consultation>> {
        let rows: Vec<wire::ConsultaRow> = self.get("/consultas").await?;
        Ok(rows.into_iter().map(Consultation::from).collect())
    }

    pub async fn consultation(&self, id: i64) -> Result<Consultation> {
        let row: wire::ConsultaRow = self.get(&format!("/consultas/{id}")).await?;
        Ok(row.into())
    }

    pub async fn create_consultation(&self, req: &wire::ConsultaNueva) -> Result<Consultation> {
        let row: wire::ConsultaRow = self.post("/consultas", req).await?;
        Ok(row.into())
    }

    pub async fn update_consultation(
        &self,
        id: i64,
        req: &wire::ConsultaNueva,
    ) -> Result<Consultation> {
        let row: wire::ConsultaRow = self.put(&format!("/consultas/{id}"), req).await?;
        Ok(row.into())
    }

    /// Soft delete, like quotations.
    pub async fn delete_consultation(&self, id: i64) -> Result<()> {
        self.patch_unit(
            &format!("/consultas/{id}/estado"),
            &CambioEstado {
                estado: Status::Eliminado,
            },
        )
        .await
    }

    pub async fn consultation_details(&self, id: i64) -> Result<Vec<ConsultationDetail>> {
        let rows: Vec<wire::ConsultaDetalleRow> =
            self.get(&format!("/consultas/{id}/detalles")).await?;
        Ok(rows.into_iter().map(ConsultationDetail::from).collect())
    }

    pub async fn assemble_consultation(&self, consultation: Consultation) -> ConsultationFull {
        let id = consultation.id;
        let details =
            fanout::ok_or_empty(self.consultation_details(id), "consultation details", id).await;
        ConsultationFull {
            consultation,
            details,
        }
    }

    pub async fn consultation_full(&self, id: i64) -> Result<ConsultationFull> {
        let consultation = self.consultation(id).await?;
        Ok(self.assemble_consultation(consultation).await)
    }

    pub async fn consultations_full(&self) -> Result<Vec<ConsultationFull>> {
        let consultations = self.consultations().await?;
        Ok(join_all(
            consultations
                .into_iter()
                .map(|c| self.assemble_consultation(c)),
        )
        .await)
    }
}

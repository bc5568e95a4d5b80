//! Doctors, their specialty assignments and the commission summary.

use api_types::doctor as wire;
use futures::future::join_all;

use crate::{
    Api,
    error::Result,
    fanout,
    model::{CommissionSummary, Doctor, DoctorCommission, DoctorFull, Specialty},
};

impl Api {
    pub async fn doctors(&self) -> Result<Vec<Doctor>> {
        let rows: Vec<wire::DoctorRow> = self.get("/doctores").await?;
        Ok(rows.into_iter().map(Doctor::from).collect())
    }

    pub async fn doctor(&self, id: i64) -> Result<Doctor> {
        let row: wire::DoctorRow = self.get(&format!("/doctores/{id}")).await?;
        Ok(row.into())
    }

    pub async fn create_doctor(&self, req: &wire::DoctorNuevo) -> Result<Doctor> {
        let row: wire::DoctorRow = self.post("/doctores", req).await?;
        Ok(row.into())
    }

    pub async fn update_doctor(&self, id: i64, req: &wire::DoctorNuevo) -> Result<Doctor> {
        let row: wire::DoctorRow = self.put(&format!("/doctores/{id}"), req).await?;
        Ok(row.into())
    }

    /// Catalog resource: physical DELETE.
    pub async fn delete_doctor(&self, id: i64) -> Result<()> {
        self.delete_unit(&format!("/doctores/{id}")).await
    }

    pub async fn doctor_specialties(&self, id: i64) -> Result<Vec<Specialty>> {
        let rows: Vec<api_types::specialty::EspecialidadRow> =
            self.get(&format!("/doctores/{id}/especialidades")).await?;
        Ok(rows.into_iter().map(Specialty::from).collect())
    }

    pub async fn assemble_doctor(&self, doctor: Doctor) -> DoctorFull {
        let id = doctor.id;
        let specialties =
            fanout::ok_or_empty(self.doctor_specialties(id), "doctor specialties", id).await;
        DoctorFull { doctor, specialties }
    }

    pub async fn doctor_full(&self, id: i64) -> Result<DoctorFull> {
        let doctor = self.doctor(id).await?;
        Ok(self.assemble_doctor(doctor).await)
    }

    pub async fn doctors_full(&self) -> Result<Vec<DoctorFull>> {
        let doctors = self.doctors().await?;
        Ok(join_all(doctors.into_iter().map(|d| self.assemble_doctor(d))).await)
    }

    pub async fn doctor_commissions(&self, id: i64) -> Result<Vec<DoctorCommission>> {
        let rows: Vec<wire::DoctorComisionRow> =
            self.get(&format!("/doctores/{id}/comisiones")).await?;
        Ok(rows.into_iter().map(DoctorCommission::from).collect())
    }

    /// Pending/paid split across all of a doctor's commissions, derived from
    /// the fetched rows.
    pub async fn doctor_commission_summary(&self, id: i64) -> Result<CommissionSummary> {
        let rows = self.doctor_commissions(id).await?;
        Ok(CommissionSummary::from_rows(&rows))
    }
}

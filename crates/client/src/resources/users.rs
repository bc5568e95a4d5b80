use api_types::user as wire;

use crate::{Api, error::Result, model::User};

impl Api {
    pub async fn users(&self) -> Result<Vec<User>> {
        let rows: Vec<wire::UsuarioRow> = self.get("/usuarios").await?;
        Ok(rows.into_iter().map(User::from).collect())
    }

    pub async fn user(&self, id: i64) -> Result<User> {
        let row: wire::UsuarioRow = self.get(&format!("/usuarios/{id}")).await?;
        Ok(row.into())
    }

    pub async fn create_user(&self, req: &wire::UsuarioNuevo) -> Result<User> {
        let row: wire::UsuarioRow = self.post("/usuarios", req).await?;
        Ok(row.into())
    }

    pub async fn update_user(&self, id: i64, req: &wire::UsuarioActualizar) -> Result<User> {
        let row: wire::UsuarioRow = self.put(&format!("/usuarios/{id}"), req).await?;
        Ok(row.into())
    }

    /// Catalog resource: physical DELETE.
    pub async fn delete_user(&self, id: i64) -> Result<()> {
        self.delete_unit(&format!("/usuarios/{id}")).await
    }
}

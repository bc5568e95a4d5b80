//! Apparel inventory.

use api_types::product as wire;

use crate::{Api, error::Result, model::Product};

impl Api {
    pub async fn products(&self) -> Result<Vec<Product>> {
        let rows: Vec<wire::ProductoRow> = self.get("/productos").await?;
        Ok(rows.into_iter().map(Product::from).collect())
    }

    pub async fn product(&self, id: i64) -> Result<Product> {
        let row: wire::ProductoRow = self.get(&format!("/productos/{id}")).await?;
        Ok(row.into())
    }

    pub async fn create_product(&self, req: &wire::ProductoNuevo) -> Result<Product> {
        let row: wire::ProductoRow = self.post("/productos", req).await?;
        Ok(row.into())
    }

    pub async fn update_product(&self, id: i64, req: &wire::ProductoNuevo) -> Result<Product> {
        let row: wire::ProductoRow = self.put(&format!("/productos/{id}"), req).await?;
        Ok(row.into())
    }

    /// Catalog resource: physical DELETE.
    pub async fn delete_product(&self, id: i64) -> Result<()> {
        self.delete_unit(&format!("/productos/{id}")).await
    }
}

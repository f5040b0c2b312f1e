//! Product resource service

use crate::api::{CreateProduct, Envelope, Product, UpdateProduct};
use crate::error::ClientResult;
use crate::gateway::Gateway;
use crate::pagination::{Page, PageQuery};

use super::{paged_query, read_envelope};

const BASE: &str = "/Products";

/// REST wrapper for the `/Products` resource
#[derive(Clone)]
pub struct ProductService {
    gateway: Gateway,
}

impl ProductService {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    /// Fetch all products
    pub async fn list(&self) -> ClientResult<Envelope<Vec<Product>>> {
        read_envelope(self.gateway.get(BASE).await).await
    }

    /// Fetch a single product by identifier
    pub async fn get(&self, id: &str) -> ClientResult<Envelope<Product>> {
        read_envelope(self.gateway.get(&format!("{}/{}", BASE, id)).await).await
    }

    /// Create a product referencing an existing category
    pub async fn create(&self, dto: &CreateProduct) -> ClientResult<Envelope<Product>> {
        read_envelope(self.gateway.post_json(BASE, dto).await).await
    }

    /// Update an existing product
    pub async fn update(&self, id: &str, dto: &UpdateProduct) -> ClientResult<Envelope<Product>> {
        read_envelope(self.gateway.put_json(&format!("{}/{}", BASE, id), dto).await).await
    }

    /// Delete a product; deleting an unknown identifier yields `success:false`
    pub async fn delete(&self, id: &str) -> ClientResult<Envelope<()>> {
        read_envelope(self.gateway.delete(&format!("{}/{}", BASE, id)).await).await
    }

    /// Fetch one page of products
    pub async fn list_paged(&self, query: PageQuery) -> ClientResult<Envelope<Page<Product>>> {
        let path = format!("{}/paged", BASE);
        read_envelope(self.gateway.get_query(&path, &paged_query(query)).await).await
    }
}

//! Product category resource service

use crate::api::{Category, CreateCategory, Envelope, UpdateCategory};
use crate::error::ClientResult;
use crate::gateway::Gateway;
use crate::pagination::{Page, PageQuery};

use super::{paged_query, read_envelope};

const BASE: &str = "/ProductCategories";

/// REST wrapper for the `/ProductCategories` resource
#[derive(Clone)]
pub struct CategoryService {
    gateway: Gateway,
}

impl CategoryService {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    /// Fetch all categories (used to populate the product form selector)
    pub async fn list(&self) -> ClientResult<Envelope<Vec<Category>>> {
        read_envelope(self.gateway.get(BASE).await).await
    }

    /// Fetch a single category by identifier
    pub async fn get(&self, id: &str) -> ClientResult<Envelope<Category>> {
        read_envelope(self.gateway.get(&format!("{}/{}", BASE, id)).await).await
    }

    /// Create a category
    pub async fn create(&self, dto: &CreateCategory) -> ClientResult<Envelope<Category>> {
        read_envelope(self.gateway.post_json(BASE, dto).await).await
    }

    /// Update an existing category
    pub async fn update(&self, id: &str, dto: &UpdateCategory) -> ClientResult<Envelope<Category>> {
        read_envelope(self.gateway.put_json(&format!("{}/{}", BASE, id), dto).await).await
    }

    /// Delete a category; deleting an unknown identifier yields `success:false`
    pub async fn delete(&self, id: &str) -> ClientResult<Envelope<()>> {
        read_envelope(self.gateway.delete(&format!("{}/{}", BASE, id)).await).await
    }

    /// Fetch one page of categories
    pub async fn list_paged(&self, query: PageQuery) -> ClientResult<Envelope<Page<Category>>> {
        let path = format!("{}/paged", BASE);
        read_envelope(self.gateway.get_query(&path, &paged_query(query)).await).await
    }
}

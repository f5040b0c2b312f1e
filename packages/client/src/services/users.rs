//! User resource service

use crate::api::{CreateUser, Envelope, UpdateUser, User};
use crate::error::ClientResult;
use crate::gateway::Gateway;
use crate::pagination::{Page, PageQuery};

use super::{paged_query, read_envelope};

const BASE: &str = "/Users";

/// REST wrapper for the `/Users` resource
#[derive(Clone)]
pub struct UserService {
    gateway: Gateway,
}

impl UserService {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    /// Fetch all users
    pub async fn list(&self) -> ClientResult<Envelope<Vec<User>>> {
        read_envelope(self.gateway.get(BASE).await).await
    }

    /// Fetch a single user by identifier
    pub async fn get(&self, id: &str) -> ClientResult<Envelope<User>> {
        read_envelope(self.gateway.get(&format!("{}/{}", BASE, id)).await).await
    }

    /// Create a user; the identifier is assigned server-side
    pub async fn create(&self, dto: &CreateUser) -> ClientResult<Envelope<User>> {
        read_envelope(self.gateway.post_json(BASE, dto).await).await
    }

    /// Update an existing user
    pub async fn update(&self, id: &str, dto: &UpdateUser) -> ClientResult<Envelope<User>> {
        read_envelope(self.gateway.put_json(&format!("{}/{}", BASE, id), dto).await).await
    }

    /// Delete a user; deleting an unknown identifier yields `success:false`
    pub async fn delete(&self, id: &str) -> ClientResult<Envelope<()>> {
        read_envelope(self.gateway.delete(&format!("{}/{}", BASE, id)).await).await
    }

    /// Fetch one page of users
    pub async fn list_paged(&self, query: PageQuery) -> ClientResult<Envelope<Page<User>>> {
        let path = format!("{}/paged", BASE);
        read_envelope(self.gateway.get_query(&path, &paged_query(query)).await).await
    }
}

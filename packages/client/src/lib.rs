//! Storekeep Client Package
//!
//! Authenticated REST client for the Storekeep admin console: session
//! context, the authorization gateway, and one service wrapper per backend
//! resource (users, products, product categories).

pub mod api;
pub mod auth;
pub mod error;
pub mod gateway;
pub mod pagination;
pub mod services;
pub mod session;

// Re-export commonly used types
pub use api::{
    Category, CreateCategory, CreateProduct, CreateUser, Envelope, LoginRequest, LoginSession,
    Product, UpdateCategory, UpdateProduct, UpdateUser, User,
};
pub use auth::AuthClient;
pub use error::{ClientError, ClientResult};
pub use gateway::Gateway;
pub use pagination::{Page, PageQuery};
pub use services::{CategoryService, ProductService, UserService};
pub use session::SessionStore;

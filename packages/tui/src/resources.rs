//! Resource seam between the page controller and the entity services
//!
//! One trait covers the capability set every entity page needs: paged
//! fetch, create, update, delete, plus the per-entity form and table
//! mapping. The three implementations are the only per-entity code in the
//! console; the page workflow itself is generic.

use std::collections::HashMap;

use async_trait::async_trait;

use storekeep_client::{
    Category, CategoryService, ClientResult, CreateCategory, CreateProduct, CreateUser, Envelope,
    Page, PageQuery, Product, ProductService, UpdateCategory, UpdateProduct, UpdateUser, User,
    UserService,
};

use crate::forms::{
    validate_email, validate_password, validate_phone, FormField, FormState,
};

/// Form value snapshot keyed by field name
pub type FormValues = HashMap<String, String>;

fn value_of(values: &FormValues, name: &str) -> String {
    values.get(name).cloned().unwrap_or_default()
}

/// Capability set of one paginated CRUD resource
#[async_trait]
pub trait Resource: Send + Sync {
    type Item: Clone + Send + Sync + 'static;

    /// Catalog key of the screen title ("users", "products", ...)
    fn title_key() -> &'static str;

    /// Server-assigned identifier of an item
    fn id(item: &Self::Item) -> String;

    /// Name interpolated into the delete confirmation
    fn display_name(item: &Self::Item) -> String;

    /// Catalog keys of the table columns
    fn columns() -> &'static [&'static str];

    /// One table row of rendered cells
    fn row(item: &Self::Item) -> Vec<String>;

    async fn fetch_page(&self, query: PageQuery) -> ClientResult<Envelope<Page<Self::Item>>>;
    async fn create(&self, values: &FormValues) -> ClientResult<Envelope<Self::Item>>;
    async fn update(&self, id: &str, values: &FormValues) -> ClientResult<Envelope<Self::Item>>;
    async fn delete(&self, id: &str) -> ClientResult<Envelope<()>>;

    /// Build the create/edit form, pre-populated from an existing item
    ///
    /// Async because some forms need backend data first (the product form
    /// loads the category options for its selector).
    async fn build_form(&self, initial: Option<&Self::Item>) -> ClientResult<FormState>;
}

/// Users page resource
#[derive(Clone)]
pub struct UsersResource {
    service: UserService,
}

impl UsersResource {
    pub fn new(service: UserService) -> Self {
        Self { service }
    }
}

#[async_trait]
impl Resource for UsersResource {
    type Item = User;

    fn title_key() -> &'static str {
        "users"
    }

    fn id(item: &User) -> String {
        item.id.clone()
    }

    fn display_name(item: &User) -> String {
        item.display_name()
    }

    fn columns() -> &'static [&'static str] {
        &["first-name", "last-name", "email", "phone"]
    }

    fn row(item: &User) -> Vec<String> {
        vec![
            item.first_name.clone(),
            item.last_name.clone(),
            item.email.clone(),
            item.phone.clone(),
        ]
    }

    async fn fetch_page(&self, query: PageQuery) -> ClientResult<Envelope<Page<User>>> {
        self.service.list_paged(query).await
    }

    async fn create(&self, values: &FormValues) -> ClientResult<Envelope<User>> {
        self.service
            .create(&CreateUser {
                first_name: value_of(values, "firstName"),
                last_name: value_of(values, "lastName"),
                email: value_of(values, "email"),
                phone: value_of(values, "phone"),
                password: value_of(values, "password"),
            })
            .await
    }

    async fn update(&self, id: &str, values: &FormValues) -> ClientResult<Envelope<User>> {
        let password = value_of(values, "password");
        self.service
            .update(
                id,
                &UpdateUser {
                    id: id.to_string(),
                    first_name: value_of(values, "firstName"),
                    last_name: value_of(values, "lastName"),
                    email: value_of(values, "email"),
                    phone: value_of(values, "phone"),
                    // Left blank on the edit form means "unchanged"
                    password: (!password.is_empty()).then_some(password),
                },
            )
            .await
    }

    async fn delete(&self, id: &str) -> ClientResult<Envelope<()>> {
        self.service.delete(id).await
    }

    async fn build_form(&self, initial: Option<&User>) -> ClientResult<FormState> {
        let mut fields = vec![
            FormField::text("firstName", "first-name"),
            FormField::text("lastName", "last-name"),
            FormField::text("email", "email").with_validator(validate_email),
            FormField::text("phone", "phone").with_validator(validate_phone),
        ];

        match initial {
            Some(user) => {
                fields[0] = FormField::text("firstName", "first-name").with_value(&user.first_name);
                fields[1] = FormField::text("lastName", "last-name").with_value(&user.last_name);
                fields[2] = FormField::text("email", "email")
                    .with_validator(validate_email)
                    .with_value(&user.email);
                fields[3] = FormField::text("phone", "phone")
                    .with_validator(validate_phone)
                    .with_value(&user.phone);
                fields.push(
                    FormField::password("password", "password")
                        .with_validator(validate_password)
                        .optional(),
                );
                Ok(FormState::new("edit-user", fields))
            }
            None => {
                fields.push(
                    FormField::password("password", "password").with_validator(validate_password),
                );
                Ok(FormState::new("create-user", fields))
            }
        }
    }
}

/// Products page resource; carries the category service for the selector
#[derive(Clone)]
pub struct ProductsResource {
    service: ProductService,
    categories: CategoryService,
}

impl ProductsResource {
    pub fn new(service: ProductService, categories: CategoryService) -> Self {
        Self { service, categories }
    }
}

#[async_trait]
impl Resource for ProductsResource {
    type Item = Product;

    fn title_key() -> &'static str {
        "products"
    }

    fn id(item: &Product) -> String {
        item.id.clone()
    }

    fn display_name(item: &Product) -> String {
        item.name.clone()
    }

    fn columns() -> &'static [&'static str] {
        &["name", "description", "category"]
    }

    fn row(item: &Product) -> Vec<String> {
        vec![
            item.name.clone(),
            item.description.clone(),
            item.category_name.clone().unwrap_or_default(),
        ]
    }

    async fn fetch_page(&self, query: PageQuery) -> ClientResult<Envelope<Page<Product>>> {
        self.service.list_paged(query).await
    }

    async fn create(&self, values: &FormValues) -> ClientResult<Envelope<Product>> {
        self.service
            .create(&CreateProduct {
                name: value_of(values, "name"),
                description: value_of(values, "description"),
                category_id: value_of(values, "categoryId"),
            })
            .await
    }

    async fn update(&self, id: &str, values: &FormValues) -> ClientResult<Envelope<Product>> {
        self.service
            .update(
                id,
                &UpdateProduct {
                    id: id.to_string(),
                    name: value_of(values, "name"),
                    description: value_of(values, "description"),
                    category_id: value_of(values, "categoryId"),
                },
            )
            .await
    }

    async fn delete(&self, id: &str) -> ClientResult<Envelope<()>> {
        self.service.delete(id).await
    }

    async fn build_form(&self, initial: Option<&Product>) -> ClientResult<FormState> {
        // The selector needs the current category list before the modal opens
        let options = self
            .categories
            .list()
            .await?
            .into_result()
            .map(|categories| {
                categories
                    .into_iter()
                    .map(|c| (c.id, c.name))
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default();

        let name = FormField::text("name", "name");
        let description = FormField::text("description", "description");
        let category = FormField::select("categoryId", "category", options);

        match initial {
            Some(product) => Ok(FormState::new(
                "edit-product",
                vec![
                    name.with_value(&product.name),
                    description.with_value(&product.description),
                    category.with_selected(&product.category_id),
                ],
            )),
            None => Ok(FormState::new(
                "create-product",
                vec![name, description, category],
            )),
        }
    }
}

/// Product categories page resource
#[derive(Clone)]
pub struct CategoriesResource {
    service: CategoryService,
}

impl CategoriesResource {
    pub fn new(service: CategoryService) -> Self {
        Self { service }
    }
}

#[async_trait]
impl Resource for CategoriesResource {
    type Item = Category;

    fn title_key() -> &'static str {
        "categories"
    }

    fn id(item: &Category) -> String {
        item.id.clone()
    }

    fn display_name(item: &Category) -> String {
        item.name.clone()
    }

    fn columns() -> &'static [&'static str] {
        &["name", "description"]
    }

    fn row(item: &Category) -> Vec<String> {
        vec![item.name.clone(), item.description.clone()]
    }

    async fn fetch_page(&self, query: PageQuery) -> ClientResult<Envelope<Page<Category>>> {
        self.service.list_paged(query).await
    }

    async fn create(&self, values: &FormValues) -> ClientResult<Envelope<Category>> {
        self.service
            .create(&CreateCategory {
                name: value_of(values, "name"),
                description: value_of(values, "description"),
            })
            .await
    }

    async fn update(&self, id: &str, values: &FormValues) -> ClientResult<Envelope<Category>> {
        self.service
            .update(
                id,
                &UpdateCategory {
                    id: id.to_string(),
                    name: value_of(values, "name"),
                    description: value_of(values, "description"),
                },
            )
            .await
    }

    async fn delete(&self, id: &str) -> ClientResult<Envelope<()>> {
        self.service.delete(id).await
    }

    async fn build_form(&self, initial: Option<&Category>) -> ClientResult<FormState> {
        let name = FormField::text("name", "name");
        let description = FormField::text("description", "description");

        match initial {
            Some(category) => Ok(FormState::new(
                "edit-category",
                vec![
                    name.with_value(&category.name),
                    description.with_value(&category.description),
                ],
            )),
            None => Ok(FormState::new(
                "create-category",
                vec![name, description],
            )),
        }
    }
}

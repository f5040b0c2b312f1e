//! Entity list/get/delete commands

use clap::{Args, Subcommand};
use colored::*;
use comfy_table::{presets::UTF8_FULL, Table};

use storekeep_client::{
    CategoryService, Envelope, Gateway, Page, PageQuery, ProductService, UserService,
};

#[derive(Debug, Subcommand)]
pub enum EntityCommands {
    /// List one page
    List(ListArgs),
    /// Show one record by identifier
    Get { id: String },
    /// Delete a record by identifier
    Delete {
        id: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Page number (1-based)
    #[arg(long, default_value_t = 1)]
    pub page: u32,
    /// Rows per page
    #[arg(long)]
    pub page_size: Option<u32>,
}

impl ListArgs {
    fn query(&self) -> PageQuery {
        PageQuery::with_page_and_size(
            self.page,
            self.page_size.unwrap_or_else(storekeep_config::page_size),
        )
    }
}

fn print_page<T>(page: &Page<T>, headers: &[&str], row: impl Fn(&T) -> Vec<String>) {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(headers.to_vec());
    for item in &page.items {
        table.add_row(row(item));
    }
    println!("{table}");
    println!(
        "Page {} / {} ({} items total)",
        page.page, page.total_pages, page.total_items
    );
}

fn print_failure<T>(envelope: &Envelope<T>) {
    println!("❌ {}", envelope.message_or("Request failed").red());
}

async fn confirm_delete(name: &str, skip: bool) -> anyhow::Result<bool> {
    if skip {
        return Ok(true);
    }
    Ok(inquire::Confirm::new(&format!("Delete {}?", name))
        .with_default(false)
        .prompt()?)
}

/// Handle `storekeep users ...`
pub async fn handle_users(command: EntityCommands, gateway: Gateway) -> anyhow::Result<()> {
    let service = UserService::new(gateway);

    match command {
        EntityCommands::List(args) => {
            let envelope = service.list_paged(args.query()).await?;
            match &envelope.data {
                Some(page) if envelope.success => {
                    print_page(page, &["ID", "First Name", "Last Name", "Email", "Phone"], |u| {
                        vec![
                            u.id.clone(),
                            u.first_name.clone(),
                            u.last_name.clone(),
                            u.email.clone(),
                            u.phone.clone(),
                        ]
                    });
                }
                _ => print_failure(&envelope),
            }
        }
        EntityCommands::Get { id } => {
            let envelope = service.get(&id).await?;
            match envelope.data.as_ref().filter(|_| envelope.success) {
                Some(user) => {
                    println!("{}  {}", user.display_name().bold(), user.id.dimmed());
                    println!("  {}  {}", user.email, user.phone);
                }
                None => print_failure(&envelope),
            }
        }
        EntityCommands::Delete { id, yes } => {
            let envelope = service.get(&id).await?;
            let Some(user) = envelope.data.as_ref().filter(|_| envelope.success) else {
                print_failure(&envelope);
                return Ok(());
            };

            if confirm_delete(&user.display_name(), yes).await? {
                let deleted = service.delete(&id).await?;
                if deleted.success {
                    println!("✅ {}", "User deleted".green());
                } else {
                    print_failure(&deleted);
                }
            }
        }
    }

    Ok(())
}

/// Handle `storekeep products ...`
pub async fn handle_products(command: EntityCommands, gateway: Gateway) -> anyhow::Result<()> {
    let service = ProductService::new(gateway);

    match command {
        EntityCommands::List(args) => {
            let envelope = service.list_paged(args.query()).await?;
            match &envelope.data {
                Some(page) if envelope.success => {
                    print_page(page, &["ID", "Name", "Description", "Category"], |p| {
                        vec![
                            p.id.clone(),
                            p.name.clone(),
                            p.description.clone(),
                            p.category_name.clone().unwrap_or_default(),
                        ]
                    });
                }
                _ => print_failure(&envelope),
            }
        }
        EntityCommands::Get { id } => {
            let envelope = service.get(&id).await?;
            match envelope.data.as_ref().filter(|_| envelope.success) {
                Some(product) => {
                    println!("{}  {}", product.name.bold(), product.id.dimmed());
                    println!("  {}", product.description);
                    if let Some(category) = &product.category_name {
                        println!("  Category: {}", category);
                    }
                }
                None => print_failure(&envelope),
            }
        }
        EntityCommands::Delete { id, yes } => {
            let envelope = service.get(&id).await?;
            let Some(product) = envelope.data.as_ref().filter(|_| envelope.success) else {
                print_failure(&envelope);
                return Ok(());
            };

            if confirm_delete(&product.name, yes).await? {
                let deleted = service.delete(&id).await?;
                if deleted.success {
                    println!("✅ {}", "Product deleted".green());
                } else {
                    print_failure(&deleted);
                }
            }
        }
    }

    Ok(())
}

/// Handle `storekeep categories ...`
pub async fn handle_categories(command: EntityCommands, gateway: Gateway) -> anyhow::Result<()> {
    let service = CategoryService::new(gateway);

    match command {
        EntityCommands::List(args) => {
            let envelope = service.list_paged(args.query()).await?;
            match &envelope.data {
                Some(page) if envelope.success => {
                    print_page(page, &["ID", "Name", "Description"], |c| {
                        vec![c.id.clone(), c.name.clone(), c.description.clone()]
                    });
                }
                _ => print_failure(&envelope),
            }
        }
        EntityCommands::Get { id } => {
            let envelope = service.get(&id).await?;
            match envelope.data.as_ref().filter(|_| envelope.success) {
                Some(category) => {
                    println!("{}  {}", category.name.bold(), category.id.dimmed());
                    println!("  {}", category.description);
                }
                None => print_failure(&envelope),
            }
        }
        EntityCommands::Delete { id, yes } => {
            let envelope = service.get(&id).await?;
            let Some(category) = envelope.data.as_ref().filter(|_| envelope.success) else {
                print_failure(&envelope);
                return Ok(());
            };

            if confirm_delete(&category.name, yes).await? {
                let deleted = service.delete(&id).await?;
                if deleted.success {
                    println!("✅ {}", "Category deleted".green());
                } else {
                    print_failure(&deleted);
                }
            }
        }
    }

    Ok(())
}

//! Category CLI commands

use clap::Subcommand;

use crate::display;
use crate::error::PaisaResult;
use crate::models::CategoryId;
use crate::services::CategoryService;
use crate::store::RecordStore;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// Create a new category
    Add {
        /// Category name
        name: String,
    },

    /// List all categories
    List,

    /// Delete a category
    Delete {
        /// Category ID (e.g., "cat-1" or "1")
        id: CategoryId,
    },
}

/// Handle a category command
pub fn handle_category_command(store: &RecordStore, cmd: CategoryCommands) -> PaisaResult<()> {
    let service = CategoryService::new(store);

    match cmd {
        CategoryCommands::Add { name } => {
            let category = service.create(&name)?;
            println!("Created category {} ({})", category.name, category.id);
        }

        CategoryCommands::List => {
            let categories = service.list()?;
            println!("{}", display::format_category_list(&categories));
        }

        CategoryCommands::Delete { id } => {
            service.delete(id)?;
            println!("Deleted category {}", id);
        }
    }

    Ok(())
}

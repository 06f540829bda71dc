use super::{list, print_error, saved, warn_unsaved};
use crate::api::CatalogStore;
use console::style;
use dialoguer::{theme::ColorfulTheme, Input};

/// Delete a video by position.
pub fn run(store: &mut CatalogStore, index: &str) -> Result<(), String> {
    let applied = store.delete(index).map_err(|e| e.to_string())?;
    let name = saved(applied)?;
    println!("{} Video '{}' deleted", style("•").green().bold(), name);
    Ok(())
}

pub fn interact(store: &mut CatalogStore, theme: &ColorfulTheme) -> dialoguer::Result<()> {
    if store.is_empty() {
        print_error("No videos to delete!");
        return Ok(());
    }
    list::run(store);

    let raw: String = Input::with_theme(theme)
        .with_prompt("Enter the video number to delete")
        .allow_empty(true)
        .interact_text()?;

    match store.delete(&raw) {
        Err(e) => print_error(e),
        Ok(applied) => {
            let name = applied.value.clone();
            match saved(applied) {
                Err(msg) => warn_unsaved(&msg),
                Ok(_) => println!(
                    "{} Video '{}' deleted successfully!",
                    style("•").green().bold(),
                    name
                ),
            }
        }
    }
    Ok(())
}

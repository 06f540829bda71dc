use super::{list, print_error, saved, warn_unsaved};
use crate::api::CatalogStore;
use console::style;
use dialoguer::{theme::ColorfulTheme, Input};

/// Update a video from command-line arguments.
pub fn run(
    store: &mut CatalogStore,
    index: &str,
    name: Option<&str>,
    time: Option<&str>,
) -> Result<(), String> {
    let applied = store
        .update(index, name, time)
        .map_err(|e| e.to_string())?;
    let position = saved(applied)?;
    println!("{} Video #{} updated", style("•").green().bold(), position);
    Ok(())
}

/// Show the list, ask which video to change and its new values.
///
/// Leaving a value empty keeps the current one.
pub fn interact(store: &mut CatalogStore, theme: &ColorfulTheme) -> dialoguer::Result<()> {
    if store.is_empty() {
        print_error("No videos to update!");
        return Ok(());
    }
    list::run(store);

    let raw: String = Input::with_theme(theme)
        .with_prompt("Enter the video number to update")
        .allow_empty(true)
        .interact_text()?;
    let position = match store.check_position(&raw) {
        Ok(position) => position,
        Err(e) => {
            print_error(e);
            return Ok(());
        }
    };

    println!("\n{}", style(format!("UPDATING VIDEO #{}", position)).bold());
    let new_name: String = Input::with_theme(theme)
        .with_prompt("Enter new video name (or press Enter to keep)")
        .allow_empty(true)
        .interact_text()?;
    let new_time: String = Input::with_theme(theme)
        .with_prompt("Enter new video duration (or press Enter to keep)")
        .allow_empty(true)
        .interact_text()?;

    match store.update(&raw, Some(&new_name), Some(&new_time)).map(saved) {
        Err(e) => print_error(e),
        Ok(Err(msg)) => warn_unsaved(&msg),
        Ok(Ok(position)) => println!(
            "{} Video #{} updated successfully!",
            style("•").green().bold(),
            position
        ),
    }
    Ok(())
}

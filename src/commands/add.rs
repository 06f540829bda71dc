use super::{print_error, saved, warn_unsaved};
use crate::api::CatalogStore;
use console::style;
use dialoguer::{theme::ColorfulTheme, Input};

/// Add a video from command-line arguments.
pub fn run(store: &mut CatalogStore, name: &str, time: &str) -> Result<(), String> {
    let applied = store.add(name, time).map_err(|e| e.to_string())?;
    saved(applied)?;
    println!(
        "{} Video '{}' added",
        style("•").green().bold(),
        name.trim()
    );
    Ok(())
}

/// Prompt for a title and duration, then add the video.
///
/// Only prompt failures are returned; rejected input is reported and dropped.
pub fn interact(store: &mut CatalogStore, theme: &ColorfulTheme) -> dialoguer::Result<()> {
    println!("\n{}", style("ADD NEW VIDEO").bold());

    let name: String = Input::with_theme(theme)
        .with_prompt("Enter video name")
        .allow_empty(true)
        .interact_text()?;
    if name.trim().is_empty() {
        print_error("Video name cannot be empty");
        return Ok(());
    }

    let time: String = Input::with_theme(theme)
        .with_prompt("Enter video duration (e.g., 10:30)")
        .allow_empty(true)
        .interact_text()?;

    match store.add(&name, &time).map(saved) {
        Err(e) => print_error(e),
        Ok(Err(msg)) => warn_unsaved(&msg),
        Ok(Ok(())) => println!(
            "{} Video '{}' added successfully!",
            style("•").green().bold(),
            name.trim()
        ),
    }
    Ok(())
}

use crate::api::{Applied, CatalogStore};
use crate::cli::Cmd;
use console::style;

pub mod add;
pub mod delete;
pub mod interactive;
pub mod list;
pub mod update;

/// Dispatches the parsed command to the appropriate handler.
pub fn dispatch(command: Option<Cmd>, store: &mut CatalogStore) -> Result<(), String> {
    match command.unwrap_or(Cmd::Menu) {
        Cmd::Menu => interactive::run(store),
        Cmd::List => {
            list::run(store);
            Ok(())
        }
        Cmd::Add { name, time } => add::run(store, &name, &time),
        Cmd::Update { index, name, time } => {
            update::run(store, &index, name.as_deref(), time.as_deref())
        }
        Cmd::Delete { index } => delete::run(store, &index),
    }
}

/// Unwraps a mutation, turning a failed save into an error message.
pub(crate) fn saved<T>(applied: Applied<T>) -> Result<T, String> {
    match applied.persisted {
        Ok(()) => Ok(applied.value),
        Err(e) => Err(format!("Error saving data: {}", e)),
    }
}

/// Prints a failed-save warning for the menu, which keeps running on it.
pub(crate) fn warn_unsaved(msg: &str) {
    eprintln!(
        "{} {} (changes are kept for this session only)",
        style("•").yellow().bold(),
        msg
    );
}

pub(crate) fn print_error(msg: impl std::fmt::Display) {
    eprintln!("{} {}", style("•").red().bold(), msg);
}

use super::{add, delete, list, print_error, update};
use crate::api::CatalogStore;
use console::style;
use dialoguer::{theme::ColorfulTheme, Input};
use std::io;
use tracing::debug;

const MENU: &[&str] = &[
    "List All Videos",
    "Add a New Video",
    "Update a Video",
    "Delete a Video",
    "Exit",
];

/// A line typed at the menu prompt.
#[derive(Debug, PartialEq, Eq)]
enum Choice {
    List,
    Add,
    Update,
    Delete,
    Exit,
}

impl Choice {
    fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::List),
            "2" => Some(Self::Add),
            "3" => Some(Self::Update),
            "4" => Some(Self::Delete),
            "5" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Run the menu loop until the user exits or input ends.
pub fn run(store: &mut CatalogStore) -> Result<(), String> {
    let theme = ColorfulTheme::default();
    println!("\n{}\n", style("Welcome to Video Catalog!").cyan().bold());

    loop {
        display_menu();
        let input: String = match Input::with_theme(&theme)
            .with_prompt(format!("Enter your choice (1-{})", MENU.len()))
            .allow_empty(true)
            .interact_text()
        {
            Ok(input) => input,
            Err(e) => {
                if !prompt_stopped(&e) {
                    return Ok(());
                }
                break;
            }
        };

        let step = match Choice::parse(&input) {
            Some(Choice::List) => {
                list::run(store);
                Ok(())
            }
            Some(Choice::Add) => add::interact(store, &theme),
            Some(Choice::Update) => update::interact(store, &theme),
            Some(Choice::Delete) => delete::interact(store, &theme),
            Some(Choice::Exit) => {
                println!("\n{}\n", style("Thank you for using Video Catalog. Goodbye!").cyan());
                return Ok(());
            }
            None => {
                print_error(format!(
                    "Invalid choice. Please enter a number between 1-{}.",
                    MENU.len()
                ));
                Ok(())
            }
        };

        if let Err(e) = step {
            if !prompt_stopped(&e) {
                return Ok(());
            }
            break;
        }
    }

    println!("\n\n{}\n", style("Exiting. Goodbye!").cyan());
    Ok(())
}

/// Reports why a prompt stopped. Returns false when there is no terminal to
/// prompt on, as opposed to the user ending input.
fn prompt_stopped(e: &dialoguer::Error) -> bool {
    if needs_terminal(e) {
        print_error(format!("The menu needs an interactive terminal ({})", e));
        return false;
    }
    debug!(error = %e, "prompt ended");
    true
}

fn needs_terminal(e: &dialoguer::Error) -> bool {
    matches!(e, dialoguer::Error::IO(io) if io.kind() == io::ErrorKind::NotConnected)
}

fn display_menu() {
    let rule = "=".repeat(70);
    println!("\n{}", rule);
    println!("{}", style(format!("{:^70}", "VIDEO CATALOG")).bold());
    println!("{}", rule);
    for (i, item) in MENU.iter().enumerate() {
        println!("{}. {}", style(i + 1).yellow(), item);
    }
    println!("{}\n", rule);
}

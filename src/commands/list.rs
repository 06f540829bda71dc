use crate::api::{CatalogStore, Listing};
use console::style;

const RULE_WIDTH: usize = 70;

/// Print every stored video with its 1-based position.
pub fn run(store: &CatalogStore) {
    let rule = "=".repeat(RULE_WIDTH);
    println!();
    match store.list() {
        Listing::Empty => {
            println!("{}", rule);
            println!("{}", style(Listing::Empty).green().bold());
            println!("{}", rule);
        }
        listing @ Listing::Rows(_) => {
            println!("{}", rule);
            println!(
                "{}",
                style(format!("{:^width$}", "YOUR VIDEOS", width = RULE_WIDTH)).bold()
            );
            println!("{}", rule);
            println!("{}", listing);
            println!("{}\n", rule);
        }
    }
}

//! One-shot seeding and inspection helper for the contact store.
//!
//! Given only a connection URL, prints every contact's name and number.
//! Given a URL plus a name and number, inserts one contact and confirms.
//! This is a raw path into the store: none of the HTTP API's validation
//! (uniqueness, non-empty fields) applies here.

use clap::Parser;
use url::Url;

use phonebook::{observability, store};

#[derive(Debug, Parser)]
#[command(
    name = "phonebook-seed",
    about = "List the phonebook, or insert one contact"
)]
struct SeedArgs {
    /// Contact store connection URL (`memory:` or `file:///path/to/contacts.json`).
    store_url: Url,

    /// Name to insert; omit to list the phonebook instead.
    #[arg(requires = "number")]
    name: Option<String>,

    /// Number to insert.
    number: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    observability::init_tracing("phonebook=info");

    let args = SeedArgs::parse();
    let store = store::connect(&args.store_url)?;

    match (args.name, args.number) {
        (Some(name), Some(number)) => {
            store.insert(&name, &number).await?;
            println!("Added {name} number {number} to the phonebook");
        }
        _ => {
            println!("Phonebook:");
            for contact in store.find_all().await? {
                println!("{} {}", contact.name, contact.number);
            }
        }
    }

    Ok(())
}

//! Contact Book - Main entry point
//!
//! A thin command line layer over the `contact_book` library. Every
//! command loads the contacts file, applies one operation and, if the
//! book changed, writes the file back.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use contact_book::{AddressBook, AddressBookError, Config};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Personal contact book
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Contacts file (overrides CONTACT_BOOK_FILE)
    #[arg(short, long)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a contact
    Add { name: String },
    /// Delete a contact
    Remove { name: String },
    /// Add a phone number to a contact
    AddPhone { name: String, phone: String },
    /// Replace one phone number of a contact
    ChangePhone {
        name: String,
        old: String,
        new: String,
    },
    /// Remove a phone number from a contact
    RemovePhone { name: String, phone: String },
    /// Set or replace a contact's email
    SetEmail { name: String, email: String },
    /// Remove a contact's email
    RemoveEmail { name: String },
    /// Set or replace a contact's birthday (day-month-year)
    SetBirthday { name: String, birthday: String },
    /// Remove a contact's birthday
    RemoveBirthday { name: String },
    /// List every contact
    Show,
    /// Find contacts by name, phone, email or birthday
    Search { query: String },
    /// List contacts whose birthday is exactly DAYS days away
    Birthdays { days: i64 },
    /// Days until a contact's birthday
    Days { name: String },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::from_env()?;

    // Log to stderr; stdout carries command output
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let path = cli.file.unwrap_or(config.contacts_file);
    execute(&path, cli.command)
}

/// Load the book at `path`, apply `command` and save only if it changed.
fn execute(path: &Path, command: Command) -> Result<()> {
    info!("Using contacts file {}", path.display());

    let mut book = AddressBook::default();
    book.read_records_from_file(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    if run(&mut book, command)? {
        book.save_records_to_file(path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }
    Ok(())
}

/// Apply one command. Returns whether the book was modified.
fn run(book: &mut AddressBook, command: Command) -> Result<bool> {
    match command {
        Command::Add { name } => {
            book.add_record(&name)?;
            println!("Contact {} added", name);
        }
        Command::Remove { name } => {
            book.del_record(&name)?;
            println!("Contact {} removed", name);
        }
        Command::AddPhone { name, phone } => {
            book.record_mut(&name)?.add_phone(&phone)?;
            println!("Phone {} added to {}", phone, name);
        }
        Command::ChangePhone { name, old, new } => {
            book.record_mut(&name)?.change_phone(&old, &new)?;
            println!("Phone {} changed to {} for {}", old, new, name);
        }
        Command::RemovePhone { name, phone } => {
            book.record_mut(&name)?.del_phone(&phone)?;
            println!("Phone {} removed from {}", phone, name);
        }
        Command::SetEmail { name, email } => {
            book.record_mut(&name)?.set_email(&email)?;
            println!("Email for {} set to {}", name, email);
        }
        Command::RemoveEmail { name } => {
            book.record_mut(&name)?.del_email();
            println!("Email removed from {}", name);
        }
        Command::SetBirthday { name, birthday } => {
            let record = book.record_mut(&name)?;
            record.set_birthday(&birthday)?;
            if let Some(birthday) = record.birthday() {
                println!("Birthday for {} set to {}", name, birthday);
            }
        }
        Command::RemoveBirthday { name } => {
            book.record_mut(&name)?.del_birthday();
            println!("Birthday removed from {}", name);
        }
        Command::Show => {
            if book.is_empty() {
                println!("The contact book is empty");
            }
            for line in book.show_records() {
                println!("{}", line);
            }
            return Ok(false);
        }
        Command::Search { query } => {
            let results = book.search(&query);
            if results.is_empty() {
                println!("No contacts match '{}'", query);
            }
            for block in results {
                print!("{}", block);
            }
            return Ok(false);
        }
        Command::Birthdays { days } => {
            let lines = book.contacts_with_days_to_bday(days);
            if lines.is_empty() {
                println!("No birthdays in {} days", days);
            }
            for line in lines {
                println!("{}", line);
            }
            return Ok(false);
        }
        Command::Days { name } => {
            let record = book
                .get(&name)
                .ok_or_else(|| AddressBookError::RecordNotFound(name.clone()))?;
            match record.days_to_birthday() {
                Some(days) => println!("{} days until {}'s birthday", days, name),
                None => println!("{} has no birthday set", name),
            }
            return Ok(false);
        }
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn book_with_alex() -> AddressBook {
        let mut book = AddressBook::default();
        let record = book.add_record("Alex").unwrap();
        record.add_phone("0501234567").unwrap();
        record.set_birthday("15-06-1990").unwrap();
        book
    }

    #[test]
    fn test_read_only_commands_report_unchanged() {
        let mut book = book_with_alex();
        let commands = [
            Command::Show,
            Command::Search {
                query: "alex".to_string(),
            },
            Command::Birthdays { days: 3 },
            Command::Days {
                name: "Alex".to_string(),
            },
        ];
        for command in commands {
            assert!(!run(&mut book, command).unwrap());
        }
    }

    #[test]
    fn test_mutating_commands_report_changed() {
        let mut book = book_with_alex();
        let name = || "Alex".to_string();
        let commands = [
            Command::Add {
                name: "Boris".to_string(),
            },
            Command::AddPhone {
                name: name(),
                phone: "0671112233".to_string(),
            },
            Command::ChangePhone {
                name: name(),
                old: "0671112233".to_string(),
                new: "0679998877".to_string(),
            },
            Command::RemovePhone {
                name: name(),
                phone: "0679998877".to_string(),
            },
            Command::SetEmail {
                name: name(),
                email: "alex@example.com".to_string(),
            },
            Command::RemoveEmail { name: name() },
            Command::SetBirthday {
                name: name(),
                birthday: "01-02-1991".to_string(),
            },
            Command::RemoveBirthday { name: name() },
            Command::Remove {
                name: "Boris".to_string(),
            },
        ];
        for command in commands {
            assert!(run(&mut book, command).unwrap());
        }
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_failed_command_is_an_error() {
        let mut book = book_with_alex();
        let err = run(
            &mut book,
            Command::Days {
                name: "Nobody".to_string(),
            },
        )
        .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AddressBookError>(),
            Some(AddressBookError::RecordNotFound(_))
        ));
    }

    #[test]
    fn test_execute_saves_only_after_changes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("contacts.json");

        execute(&path, Command::Show).unwrap();
        assert!(!path.exists());

        execute(
            &path,
            Command::Add {
                name: "Alex".to_string(),
            },
        )
        .unwrap();
        let saved = fs::read_to_string(&path).unwrap();
        assert!(saved.contains("Alex"));

        // Reformat so that any rewrite of the file would show
        fs::write(&path, saved.replace("  ", " ")).unwrap();
        let before = fs::read_to_string(&path).unwrap();
        execute(
            &path,
            Command::Search {
                query: "alex".to_string(),
            },
        )
        .unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), before);
    }

    #[test]
    fn test_execute_does_not_save_after_failure() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("contacts.json");

        let result = execute(
            &path,
            Command::AddPhone {
                name: "Nobody".to_string(),
                phone: "0501234567".to_string(),
            },
        );
        assert!(result.is_err());
        assert!(!path.exists());
    }
}

use colored::*;
use console::Term;
use dialoguer::{theme::ColorfulTheme, Confirm};

use crate::models::property::{Property, PropertyStage};
use crate::models::transaction::TransactionRecord;

/// UI theme for consistent appearance
pub fn get_theme() -> ColorfulTheme {
    ColorfulTheme::default()
}

/// Print a section header
pub fn print_header(title: &str) {
    let title = format!(" {} ", title);
    println!("\n{}\n", title.bold().white().on_blue());
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "ERROR:".red().bold(), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("{} {}", "WARNING:".yellow().bold(), message);
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{} {}", "SUCCESS:".green().bold(), message);
}

/// Print information
pub fn print_info(message: &str) {
    println!("{} {}", "INFO:".blue().bold(), message);
}

/// Print a formatted result
pub fn print_result(label: &str, value: &str) {
    println!("{}: {}", label.bold(), value);
}

/// Print a property's lifecycle stage with color
pub fn print_stage(stage: PropertyStage) {
    let text = match stage {
        PropertyStage::Unverified => "unverified".yellow().bold(),
        PropertyStage::VerifiedNotListed => "verified".green().bold(),
        PropertyStage::VerifiedListed => "for sale".cyan().bold(),
    };
    println!("{}: {}", "Status".bold(), text);
}

/// Display a full property record
pub fn display_property(property: &Property) {
    print_header(&format!("Property #{}", property.id));
    print_result("Name", &property.name);
    print_result("Location", &property.location);
    print_result("Owner", property.owner.as_str());
    print_result("Document hash", &property.document_hash);
    if property.for_sale {
        print_result("Price", &property.price.to_string());
    }
    print_stage(property.stage());
}

/// Display one property per line for list output
pub fn display_property_row(property: &Property) {
    let stage = match property.stage() {
        PropertyStage::Unverified => "unverified".yellow(),
        PropertyStage::VerifiedNotListed => "verified".green(),
        PropertyStage::VerifiedListed => "for sale".cyan(),
    };
    println!(
        "#{:<6} {:<24} {:<18} owner {:<16} {}",
        property.id,
        property.name,
        property.location,
        property.owner.as_str(),
        stage
    );
}

/// Display a transaction record
pub fn display_transaction(record: &TransactionRecord) {
    println!(
        "#{:<4} property {:<6} {} -> {} for {} at {}",
        record.id,
        record.property_id,
        record.seller.as_str(),
        record.buyer.as_str(),
        record.amount,
        record.timestamp.to_rfc3339()
    );
}

/// Confirm an action with the user
pub fn confirm_action(prompt: &str) -> std::io::Result<bool> {
    // Skip the prompt entirely when not attached to a terminal.
    if !Term::stdout().is_term() {
        return Ok(true);
    }
    Confirm::with_theme(&get_theme())
        .with_prompt(prompt)
        .default(true)
        .interact()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
}

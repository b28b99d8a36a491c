use anyhow::Result;
use owo_colors::OwoColorize;

use igniters_core::contact::{ContactMessage, ContactOutcome, submit_contact};

use crate::utils::tui;

pub async fn run(base: &str, name: String, email: String, message: String) -> Result<()> {
    let http = reqwest::Client::new();
    let payload = ContactMessage {
        name,
        email,
        message,
    };

    let spinner = tui::spinner("Sending");
    let outcome = submit_contact(&http, base, &payload).await;
    spinner.finish_and_clear();

    match &outcome {
        ContactOutcome::Delivered(text) => println!("{}", text.green()),
        ContactOutcome::Undeliverable => println!("{}", outcome.status_text().yellow()),
    }

    Ok(())
}

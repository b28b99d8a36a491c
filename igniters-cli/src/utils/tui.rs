use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

const TICK_MILLIS: u64 = 150;

/// Spinner shown while a site endpoint is being contacted, rendered as
/// trailing dots after the message ("Sending...").
pub fn spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&[".  ", ".. ", "...", "   "])
            .template("{msg}{spinner}")
            .unwrap(),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(TICK_MILLIS));
    spinner
}

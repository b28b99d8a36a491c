use anyhow::Result;
use owo_colors::OwoColorize;

use igniters_core::event::sort_schedule;
use igniters_core::source::{ResolvedEvents, resolve_events};

use crate::render;
use crate::utils::tui;

pub async fn run(base: &str) -> Result<()> {
    let http = reqwest::Client::new();

    let spinner = tui::spinner("Loading events");
    let resolved = resolve_events(&http, base).await;
    spinner.finish_and_clear();

    let fallback_reason = match &resolved {
        ResolvedEvents::Fallback { reason, .. } => Some(reason.to_string()),
        ResolvedEvents::Remote(_) => None,
    };

    let mut events = resolved.into_events();
    sort_schedule(&mut events);

    if let Some(reason) = fallback_reason {
        println!(
            "{}",
            format!("Showing the built-in schedule ({})", reason).dimmed()
        );
        println!();
    }

    if events.is_empty() {
        println!("{}", "No events scheduled".dimmed());
        return Ok(());
    }

    for (i, event) in events.iter().enumerate() {
        println!("{}", render::render_event(event));

        // Spacing between events (but not after the last one)
        if i < events.len() - 1 {
            println!();
        }
    }

    Ok(())
}

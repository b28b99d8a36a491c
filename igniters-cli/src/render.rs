//! Terminal rendering for event records.

use igniters_core::event::Event;
use owo_colors::OwoColorize;

/// Render one event as a short block:
///
/// ```text
/// Mid-term Examination
///   March • March 15, 2026
///   Mid-term academic assessment for all students at Igniters Academy.
/// ```
pub fn render_event(event: &Event) -> String {
    format!(
        "{}\n  {}\n  {}",
        event.title.bold(),
        event.when_label().dimmed(),
        event.description,
    )
}

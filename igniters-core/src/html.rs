//! HTML rendering for event cards.
//!
//! Event text arrives from an untrusted endpoint, so every interpolated
//! field is escaped before it lands in markup.

use crate::event::{Event, schedule_order};

/// Escape the five standard markup-injection characters.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Render one event card.
pub fn render_event_card(event: &Event) -> String {
    format!(
        "<article class=\"event-card\">\n  \
         <h3>{}</h3>\n  \
         <div class=\"event-meta\">{}</div>\n  \
         <p>{}</p>\n\
         </article>",
        escape_html(&event.title),
        escape_html(&event.when_label()),
        escape_html(&event.description),
    )
}

/// Render the full list of cards, date-ascending.
pub fn render_event_list(events: &[Event]) -> String {
    let mut ordered: Vec<&Event> = events.iter().collect();
    ordered.sort_by(|a, b| schedule_order(a, b));

    ordered
        .iter()
        .map(|event| render_event_card(event))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fallback::fallback_events;

    fn event(id: &str, title: &str, date: Option<&str>) -> Event {
        Event {
            id: id.to_string(),
            title: title.to_string(),
            month: "March".to_string(),
            date: date.map(String::from),
            time: None,
            description: "desc".to_string(),
        }
    }

    #[test]
    fn test_escape_covers_all_five_characters() {
        assert_eq!(
            escape_html(r#"&<>"'"#),
            "&amp;&lt;&gt;&quot;&#39;"
        );
        assert_eq!(escape_html("plain text"), "plain text");
    }

    #[test]
    fn test_script_title_renders_as_literal_text() {
        let ev = event("evil", "<script>alert(1)</script>", Some("2026-03-15"));
        let card = render_event_card(&ev);

        assert!(card.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(!card.contains("<script>"));
    }

    #[test]
    fn test_card_count_matches_event_count() {
        let events = vec![
            event("a", "A", Some("2026-03-15")),
            event("b", "B", Some("2026-07-20")),
            event("c", "C", None),
        ];
        let html = render_event_list(&events);
        assert_eq!(html.matches("<article class=\"event-card\">").count(), 3);
    }

    #[test]
    fn test_cards_are_rendered_date_ascending() {
        let events = vec![
            event("late", "Late", Some("2026-10-10")),
            event("early", "Early", Some("2026-03-15")),
            event("mid", "Mid", Some("2026-07-20")),
        ];
        let html = render_event_list(&events);

        let early = html.find("Early").expect("Should render Early");
        let mid = html.find("Mid").expect("Should render Mid");
        let late = html.find("Late").expect("Should render Late");
        assert!(early < mid && mid < late);
    }

    #[test]
    fn test_fallback_schedule_renders_localized_mid_term_date() {
        let html = render_event_list(&fallback_events());
        assert!(html.contains("March • March 15, 2026"));
    }

    #[test]
    fn test_undated_card_shows_month_and_time_label() {
        let mut ev = event("assembly", "Morning Assembly", None);
        ev.month = "January".to_string();
        ev.time = Some("8:00 AM".to_string());

        let card = render_event_card(&ev);
        assert!(card.contains("January • 8:00 AM"));
        assert!(!card.contains("Invalid"));
    }
}

//! Built-in event schedule.
//!
//! Used whenever the events endpoint is unreachable or errors, so the
//! site still shows a full schedule when hosted without any backend.

use crate::event::Event;

/// The fixed schedule compiled into the site.
pub fn fallback_events() -> Vec<Event> {
    vec![
        Event {
            id: "Morning-assembly".to_string(),
            title: "Morning Assembly".to_string(),
            month: "January".to_string(),
            date: None,
            time: Some("8:00 AM".to_string()),
            description: "Daily school assembly for announcements, prayers, and moral \
                          instruction at Igniters Academy."
                .to_string(),
        },
        Event {
            id: "Mid-term-test".to_string(),
            title: "Mid-term Examination".to_string(),
            month: "March".to_string(),
            date: Some("2026-03-15".to_string()),
            time: None,
            description: "Mid-term academic assessment for all students at Igniters Academy."
                .to_string(),
        },
        Event {
            id: "Inter-house-sports".to_string(),
            title: "Inter-house Sports".to_string(),
            month: "June".to_string(),
            date: Some("2026-07-20".to_string()),
            time: None,
            description: "Annual inter-house sports competition promoting teamwork and \
                          physical fitness."
                .to_string(),
        },
        Event {
            id: "Cultural-day".to_string(),
            title: "Cultural Day Celebration".to_string(),
            month: "July".to_string(),
            date: Some("2026-08-18".to_string()),
            time: None,
            description: "A celebration of culture, traditions, and student talents."
                .to_string(),
        },
        Event {
            id: "Graduation".to_string(),
            title: "Graduation & Prize Giving Day".to_string(),
            month: "October".to_string(),
            date: Some("2026-10-10".to_string()),
            time: None,
            description: "Graduation ceremony and award presentation for outstanding students."
                .to_string(),
        },
    ]
}

//! Page shell for the school site.
//!
//! The whole site is one server-rendered page: the events schedule plus
//! the contact form. After a form submission the page is re-rendered with
//! a status line and a timed refresh back to `/`, which clears it.

use igniters_core::html::escape_html;

pub const SITE_NAME: &str = "Igniters Academy";

/// How long a submission status stays on screen before the refresh clears it.
pub const STATUS_CLEAR_SECS: u64 = 5;

const STYLE: &str = "\
    body { font-family: system-ui, sans-serif; margin: 0 auto; max-width: 48rem; padding: 1rem; }\n\
    header { border-bottom: 2px solid #1a3c6e; margin-bottom: 1.5rem; }\n\
    .event-card { border: 1px solid #ddd; border-radius: 6px; padding: 0.75rem 1rem; margin-bottom: 0.75rem; }\n\
    .event-card h3 { margin: 0 0 0.25rem; }\n\
    .event-meta { color: #555; font-size: 0.9rem; }\n\
    form label { display: block; margin-top: 0.75rem; }\n\
    form input, form textarea { width: 100%; padding: 0.4rem; }\n\
    #formStatus { min-height: 1.2rem; color: #1a3c6e; }";

/// Render the full page. A `status` line is shown under the contact form
/// and the page refreshes back to `/` after [`STATUS_CLEAR_SECS`] seconds,
/// clearing it.
pub fn render_page(events_html: &str, status: Option<&str>) -> String {
    let refresh = match status {
        Some(_) => format!(
            "\n  <meta http-equiv=\"refresh\" content=\"{};url=/\">",
            STATUS_CLEAR_SECS
        ),
        None => String::new(),
    };
    let status_text = status.map(escape_html).unwrap_or_default();

    format!(
        "<!doctype html>\n\
         <html lang=\"en\">\n\
         <head>\n  \
         <meta charset=\"utf-8\">\n  \
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n  \
         <title>{site_name}</title>{refresh}\n  \
         <style>\n{style}\n  </style>\n\
         </head>\n\
         <body>\n\
         <header>\n  <h1>{site_name}</h1>\n  <p>Igniting young minds.</p>\n</header>\n\
         <main>\n\
         <section id=\"events\">\n  \
         <h2>Upcoming Events</h2>\n  \
         <div id=\"eventsList\">\n{events_html}\n  </div>\n\
         </section>\n\
         <section id=\"contact\">\n  \
         <h2>Contact Us</h2>\n  \
         <form id=\"contactForm\" method=\"post\" action=\"/contact\">\n    \
         <label for=\"name\">Name</label>\n    \
         <input id=\"name\" name=\"name\" required>\n    \
         <label for=\"email\">Email</label>\n    \
         <input id=\"email\" name=\"email\" type=\"email\" required>\n    \
         <label for=\"message\">Message</label>\n    \
         <textarea id=\"message\" name=\"message\" rows=\"5\" required></textarea>\n    \
         <button type=\"submit\">Send</button>\n  \
         </form>\n  \
         <p id=\"formStatus\">{status_text}</p>\n\
         </section>\n\
         </main>\n\
         <footer>\n  <small>&copy; {site_name}</small>\n</footer>\n\
         </body>\n\
         </html>\n",
        site_name = SITE_NAME,
        refresh = refresh,
        style = STYLE,
        events_html = events_html,
        status_text = status_text,
    )
}

//! The status page and its apology fallback.

use dtcle_core::{Severity, StatusSnapshot, Venue, eastern};
use maud::{DOCTYPE, Markup, PreEscaped, html};

/// Meta description shared by the page and its OG tags.
const DESCRIPTION: &str = "Will parking be a problem today in CLE? \
    Check if there's an event at one of the larger venues downtown.";

/// Inline CSS for the status page.
///
/// One centered column; the answer dominates, everything else stays quiet.
const PAGE_CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
body{font-family:Inter,-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif;min-height:100vh;display:flex;flex-direction:column;justify-content:center;align-items:center;text-align:center;padding:2rem;color:#111;background:#fff}
main{display:flex;flex-direction:column;flex:1;justify-content:center;align-items:center;gap:1rem}
.title{font-size:2rem;font-weight:500;text-wrap:balance}
.answer{font-size:4rem;font-weight:700;line-height:1}
.venues a{color:inherit}
.timestamp{opacity:.5;font-size:.75rem}
"#;

/// Render the status page.
///
/// An absent snapshot renders the apology page: same shell, one paragraph,
/// nothing else.
pub fn render(base_url: &str, site_name: &str, snapshot: Option<&StatusSnapshot>) -> Markup {
    let body = match snapshot {
        Some(snapshot) => status_body(snapshot),
        None => apology_body(),
    };

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (site_name) }
                meta name="description" content=(DESCRIPTION);
                meta property="og:title" content=(site_name);
                meta property="og:description" content=(DESCRIPTION);
                meta property="og:type" content="website";
                meta property="og:image" content=(format!("{base_url}/og.png"));
                link rel="icon" type="image/png" href="/favicon";
                style { (PreEscaped(PAGE_CSS)) }
            }
            body {
                (body)
            }
        }
    }
}

/// Body for a readable snapshot: heading, answer, venue sentence, footer.
fn status_body(snapshot: &StatusSnapshot) -> Markup {
    let severity = Severity::of(Some(snapshot));

    let display_date = snapshot
        .date
        .as_deref()
        .and_then(eastern::display_date)
        .unwrap_or_else(|| "today".to_string());

    let checked_stamp = snapshot.checked_at.as_deref().and_then(eastern::checked_at_stamp);

    html! {
        main {
            h1 class="title" {
                "Is downtown Cleveland busy today, " (display_date) "?"
            }
            p class="answer" style=(format!("color:{}", severity.color())) {
                (severity.answer()) "."
            }
            @if !snapshot.venues.is_empty() {
                (venue_sentence(&snapshot.venues))
            }
        }
        @if let Some(stamp) = checked_stamp {
            footer class="timestamp" {
                p { "Last checked: " (stamp) }
            }
        }
    }
}

/// Body when the snapshot is unreadable: the apology and nothing else.
fn apology_body() -> Markup {
    html! {
        main {
            p { "Unable to load downtown status right now, sorry :(" }
        }
    }
}

/// The venue list sentence, with each venue linked in a new tab.
///
/// Join rule: `, ` between all pairs except the last, ` and ` before the
/// final venue when there are two or more; a single venue gets no
/// conjunction.
fn venue_sentence(venues: &[Venue]) -> Markup {
    let n = venues.len();

    html! {
        p class="venues" {
            "There " (if n == 1 { "is" } else { "are" }) " "
            (n) " event" (if n == 1 { "" } else { "s" }) " at "
            @for (i, venue) in venues.iter().enumerate() {
                a href=(venue.url) target="_blank" rel="noopener noreferrer" {
                    (venue.name)
                }
                @if i + 2 < n { ", " }
                @else if i + 2 == n { " and " }
            }
            "."
        }
    }
}

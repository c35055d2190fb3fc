//! Plain-text rendering of views, used by the `eventboard` binary.

use std::fmt::Write as _;

use eventboard_events::PageItem;

use crate::board::{EventCard, HomeView, View};

pub fn render(view: &View<'_>) -> String {
    let mut out = String::new();
    // writing into a String cannot fail
    let _ = write_view(&mut out, view);
    out
}

fn write_view(out: &mut String, view: &View<'_>) -> std::fmt::Result {
    match view {
        View::Home(home) => write_home(out, home),
        View::EventDetail(detail) => {
            let event = detail.event;
            writeln!(out, "{} [{}]", event.title, event.event_type)?;
            writeln!(out, "When:  {}", detail.date_label)?;
            writeln!(out, "Where: {}", event.location)?;
            writeln!(out, "Host:  {}", event.host)?;
            writeln!(out)?;
            writeln!(out, "{}", event.description)?;
            writeln!(out)?;
            let action = if detail.rsvped { "RSVP'd ✓" } else { "RSVP to Event" };
            writeln!(out, "[{action}]")
        }
        View::CreateEvent(create) => {
            writeln!(out, "Create New Event")?;
            let types: Vec<&str> = create.types.iter().map(|t| t.as_str()).collect();
            writeln!(out, "Types: {}", types.join(", "))?;
            writeln!(out, "Known locations: {}", create.locations.join(", "))
        }
        View::EventCreated(created) => {
            writeln!(out, "{}", created.message)?;
            writeln!(out, "{} [{}]", created.event.title, created.event.event_type)?;
            writeln!(out, "{} at {}", created.date_label, created.event.location)
        }
        View::RsvpConfirmation(confirm) => {
            writeln!(out, "You're going to {}!", confirm.event.title)?;
            writeln!(out, "{} at {}", confirm.date_label, confirm.event.location)
        }
        View::NotFound => writeln!(out, "Event not found"),
    }
}

fn write_home(out: &mut String, home: &HomeView<'_>) -> std::fmt::Result {
    writeln!(out, "Upcoming Events ({} found)", home.result_count)?;
    if home.cards.is_empty() {
        writeln!(out, "No events match your filters.")?;
    }
    for card in &home.cards {
        write_card(out, card)?;
    }
    if let Some(summary) = home.summary {
        writeln!(out)?;
        writeln!(out, "{summary}")?;
        let pages: Vec<String> = home
            .pages
            .iter()
            .map(|item| match item {
                PageItem::Page(n) if *n == home.current_page => format!("[{n}]"),
                PageItem::Page(n) => n.to_string(),
                PageItem::Gap => "...".to_string(),
            })
            .collect();
        writeln!(out, "{}", pages.join(" "))?;
    }
    Ok(())
}

fn write_card(out: &mut String, card: &EventCard<'_>) -> std::fmt::Result {
    let event = card.event;
    let mark = if card.rsvped { " ✓" } else { "" };
    writeln!(
        out,
        "#{:<3} {:<12} {:<14} {} @ {}{mark}",
        event.id.get(),
        card.date_label,
        format!("[{}]", event.event_type),
        event.title,
        event.location,
    )
}

use chrono::NaiveDate;
use serde::Serialize;
use settle_core::enums::CalendarEventKind;
use settle_core::responses::CalendarEvent;
use settle_risk::calendar::{milestones, upcoming};

use crate::cli::root_commands::CalendarArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::input::load_request;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

/// Handle `settle calendar`.
pub fn handle(args: &CalendarArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let kinds = args
        .kinds
        .iter()
        .map(|raw| parse_enum::<CalendarEventKind>(raw, "kind"))
        .collect::<anyhow::Result<Vec<_>>>()?;
    let window = if args.all {
        None
    } else {
        Some(args.days.unwrap_or(ctx.config.calendar.window_days))
    };

    let request = load_request(&args.input.input)?;
    let events = select_events(
        milestones(&request.projects, &request.tasks),
        ctx.today,
        window,
        &kinds,
    );
    tracing::debug!(events = events.len(), ?window, "calendar assembled");

    if flags.format == OutputFormat::Table {
        let rows: Vec<EventRow> = events.iter().map(EventRow::from).collect();
        return output(&rows, flags.format);
    }
    output(&events, flags.format)
}

/// Apply the look-ahead window (`None` keeps everything) and the kind filter
/// (empty keeps every kind).
fn select_events(
    events: Vec<CalendarEvent>,
    today: NaiveDate,
    window: Option<u32>,
    kinds: &[CalendarEventKind],
) -> Vec<CalendarEvent> {
    let mut events = match window {
        Some(days) => upcoming(events, today, days),
        None => events,
    };
    if !kinds.is_empty() {
        events.retain(|event| kinds.contains(&event.kind));
    }
    events
}

#[derive(Debug, Serialize)]
struct EventRow {
    date: NaiveDate,
    #[serde(rename = "type")]
    kind: CalendarEventKind,
    title: String,
    project_id: String,
    important: bool,
}

impl From<&CalendarEvent> for EventRow {
    fn from(event: &CalendarEvent) -> Self {
        Self {
            date: event.date,
            kind: event.kind,
            title: event.title.clone(),
            project_id: event.project_id.to_string(),
            important: event.important,
        }
    }
}

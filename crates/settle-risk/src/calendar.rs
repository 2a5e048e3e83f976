//! Milestone events for the transaction calendar.
//!
//! Every project contributes its contract date, settlement date, and
//! loan-contingency deadline; every incomplete task with a due date
//! contributes its due date. Completed projects stay on the calendar.

use std::collections::HashMap;

use chrono::{Days, NaiveDate};
use settle_core::entities::{Project, Task};
use settle_core::enums::CalendarEventKind;
use settle_core::ids::ProjectId;
use settle_core::responses::CalendarEvent;

/// Default look-ahead for [`upcoming`].
pub const DEFAULT_WINDOW_DAYS: u32 = 30;

/// All milestone events, sorted by date.
///
/// Events on the same date keep the order projects were given in, with a
/// project's own dates ahead of task due dates. Tasks filed under an unknown
/// project id are ignored.
#[must_use]
pub fn milestones(
    projects: &[Project],
    tasks_by_project: &HashMap<ProjectId, Vec<Task>>,
) -> Vec<CalendarEvent> {
    let mut events: Vec<CalendarEvent> = projects.iter().flat_map(project_events).collect();

    for project in projects {
        let Some(tasks) = tasks_by_project.get(&project.project_id) else {
            continue;
        };
        events.extend(
            tasks
                .iter()
                .enumerate()
                .filter_map(|(index, task)| task_event(project, index, task)),
        );
    }

    events.sort_by_key(|event| event.date);
    events
}

/// Keep events dated from `today` through `today + days`, inclusive.
#[must_use]
pub fn upcoming(events: Vec<CalendarEvent>, today: NaiveDate, days: u32) -> Vec<CalendarEvent> {
    let end = today
        .checked_add_days(Days::new(u64::from(days)))
        .unwrap_or(NaiveDate::MAX);
    events
        .into_iter()
        .filter(|event| (today..=end).contains(&event.date))
        .collect()
}

fn project_events(project: &Project) -> Vec<CalendarEvent> {
    let id = &project.project_id;
    [
        (
            CalendarEventKind::Contract,
            project.contract_date,
            format!("project-contract-{id}"),
            "Contract",
            false,
        ),
        (
            CalendarEventKind::Settlement,
            project.settlement_date,
            format!("project-settlement-{id}"),
            "Settlement",
            true,
        ),
        (
            CalendarEventKind::Deadline,
            project.loan_special_clause_deadline,
            format!("project-loan-{id}"),
            "Loan contingency deadline",
            true,
        ),
    ]
    .into_iter()
    .filter_map(|(kind, date, event_id, label, important)| {
        Some(CalendarEvent {
            id: event_id,
            kind,
            title: format!("{label}: {}", project.project_name),
            date: date?,
            project_id: id.clone(),
            project_name: project.project_name.clone(),
            task_id: None,
            task_name: None,
            priority: None,
            important,
        })
    })
    .collect()
}

fn task_event(project: &Project, index: usize, task: &Task) -> Option<CalendarEvent> {
    if task.is_completed {
        return None;
    }
    let date = task.due_date?;
    let id = task.task_id.as_ref().map_or_else(
        || format!("task-{}-{index}", project.project_id),
        |task_id| format!("task-{task_id}"),
    );

    Some(CalendarEvent {
        id,
        kind: CalendarEventKind::Task,
        title: format!("Task: {}", task.task_name),
        date,
        project_id: project.project_id.clone(),
        project_name: project.project_name.clone(),
        task_id: task.task_id.clone(),
        task_name: Some(task.task_name.clone()),
        priority: Some(task.priority),
        important: false,
    })
}

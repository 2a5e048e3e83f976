//! The risk-detection pass.
//!
//! Each non-terminal project is checked four ways:
//!
//! 1. loan-contingency deadline within [`LOAN_DEADLINE_WINDOW_DAYS`]
//! 2. settlement within [`SETTLEMENT_WINDOW_DAYS`] with open high-priority tasks
//! 3. open tasks past their due date
//! 4. open tasks due within [`URGENT_TASK_WINDOW_DAYS`]
//!
//! Projects with no findings are left out. The rest are ranked by their
//! highest finding severity, most severe first, keeping input order among
//! equals.

use std::collections::HashMap;

use chrono::NaiveDate;
use settle_core::dates::days_until;
use settle_core::entities::{Contact, Project, Task};
use settle_core::enums::Severity;
use settle_core::findings::{
    ContactSummary, Finding, LoanDeadlineFinding, OverdueTask, OverdueTasksFinding,
    ProjectRisk, ProjectSummary, SettlementDeadlineFinding, UrgentTask, UrgentTasksFinding,
};
use settle_core::ids::ProjectId;
use tracing::debug;

use crate::rules::{
    LOAN_DEADLINE_HIGH_DAYS, LOAN_DEADLINE_WINDOW_DAYS, RiskRules, SETTLEMENT_HIGH_DAYS,
    SETTLEMENT_WINDOW_DAYS, URGENT_TASK_WINDOW_DAYS,
};

/// Evaluates projects against deadline rules.
///
/// Holds no state besides its rules, so one evaluator can be shared across
/// threads and reused for any number of calls.
#[derive(Debug, Clone, Default)]
pub struct RiskEvaluator {
    rules: RiskRules,
}

/// Evaluate with the default rules. See [`RiskEvaluator::evaluate`].
#[must_use]
pub fn evaluate(
    today: NaiveDate,
    projects: &[Project],
    tasks_by_project: &HashMap<ProjectId, Vec<Task>>,
    contacts_by_project: &HashMap<ProjectId, Vec<Contact>>,
) -> Vec<ProjectRisk> {
    RiskEvaluator::default().evaluate(today, projects, tasks_by_project, contacts_by_project)
}

impl RiskEvaluator {
    #[must_use]
    pub const fn new(rules: RiskRules) -> Self {
        Self { rules }
    }

    #[must_use]
    pub const fn rules(&self) -> &RiskRules {
        &self.rules
    }

    /// Compute ranked risks as of `today`.
    ///
    /// Projects without an entry in either map are treated as having no
    /// tasks or no contacts.
    #[must_use]
    pub fn evaluate(
        &self,
        today: NaiveDate,
        projects: &[Project],
        tasks_by_project: &HashMap<ProjectId, Vec<Task>>,
        contacts_by_project: &HashMap<ProjectId, Vec<Contact>>,
    ) -> Vec<ProjectRisk> {
        let mut risks: Vec<ProjectRisk> = projects
            .iter()
            .filter(|project| !project.status.is_terminal())
            .filter_map(|project| {
                let tasks = entries_for(tasks_by_project, &project.project_id);
                let contacts = entries_for(contacts_by_project, &project.project_id);
                self.evaluate_project(today, project, tasks, contacts)
            })
            .collect();

        // `sort_by` is stable: equal severities keep input order.
        risks.sort_by(|a, b| b.severity.cmp(&a.severity));

        debug!(
            %today,
            projects = projects.len(),
            flagged = risks.len(),
            "risk evaluation complete"
        );
        risks
    }

    fn evaluate_project(
        &self,
        today: NaiveDate,
        project: &Project,
        tasks: &[Task],
        contacts: &[Contact],
    ) -> Option<ProjectRisk> {
        let mut findings = Vec::new();
        findings.extend(self.check_loan_deadline(today, project, tasks));
        findings.extend(check_settlement_deadline(today, project, tasks));
        findings.extend(check_overdue_tasks(today, tasks));
        findings.extend(check_urgent_tasks(today, tasks));

        if findings.is_empty() {
            return None;
        }

        let severity = overall_severity(&findings);
        debug!(
            project_id = %project.project_id,
            %severity,
            findings = findings.len(),
            "project flagged"
        );

        Some(ProjectRisk {
            project: ProjectSummary::from(project),
            risks: findings,
            severity,
            contacts: contacts.iter().map(ContactSummary::from).collect(),
        })
    }

    fn check_loan_deadline(
        &self,
        today: NaiveDate,
        project: &Project,
        tasks: &[Task],
    ) -> Option<Finding> {
        let deadline = project.loan_special_clause_deadline?;
        let days = days_until(Some(deadline), today)?;
        if days > LOAN_DEADLINE_WINDOW_DAYS {
            return None;
        }

        let task_name = tasks
            .iter()
            .find(|task| !task.is_completed && self.rules.is_loan_task(&task.task_name))
            .map_or_else(
                || self.rules.loan_task_fallback().to_owned(),
                |task| task.task_name.clone(),
            );

        Some(Finding::LoanDeadline(LoanDeadlineFinding {
            severity: loan_deadline_severity(days),
            deadline,
            days_until: days,
            task_name,
            is_overdue: days < 0,
        }))
    }
}

fn check_settlement_deadline(
    today: NaiveDate,
    project: &Project,
    tasks: &[Task],
) -> Option<Finding> {
    let deadline = project.settlement_date?;
    let days = days_until(Some(deadline), today)?;
    if days > SETTLEMENT_WINDOW_DAYS {
        return None;
    }

    let task_names: Vec<String> = tasks
        .iter()
        .filter(|task| task.is_open_high_priority())
        .map(|task| task.task_name.clone())
        .collect();
    if task_names.is_empty() {
        return None;
    }

    Some(Finding::SettlementDeadline(SettlementDeadlineFinding {
        severity: settlement_deadline_severity(days),
        deadline,
        days_until: days,
        incomplete_tasks: task_names.len(),
        task_names,
        is_overdue: days < 0,
    }))
}

fn check_overdue_tasks(today: NaiveDate, tasks: &[Task]) -> Option<Finding> {
    let overdue_tasks: Vec<OverdueTask> = tasks
        .iter()
        .filter_map(|task| {
            let (due_date, days) = task.open_due(today)?;
            (days < 0).then(|| OverdueTask {
                task_name: task.task_name.clone(),
                due_date,
                days_overdue: days.unsigned_abs(),
            })
        })
        .collect();

    (!overdue_tasks.is_empty()).then_some(Finding::OverdueTasks(OverdueTasksFinding {
        severity: Severity::Medium,
        overdue_tasks,
    }))
}

fn check_urgent_tasks(today: NaiveDate, tasks: &[Task]) -> Option<Finding> {
    let urgent_tasks: Vec<UrgentTask> = tasks
        .iter()
        .filter_map(|task| {
            let (due_date, days) = task.open_due(today)?;
            (0..=URGENT_TASK_WINDOW_DAYS).contains(&days).then(|| UrgentTask {
                task_name: task.task_name.clone(),
                due_date,
                days_until: days,
            })
        })
        .collect();

    (!urgent_tasks.is_empty()).then_some(Finding::UrgentTasks(UrgentTasksFinding {
        severity: Severity::Low,
        urgent_tasks,
    }))
}

const fn loan_deadline_severity(days: i64) -> Severity {
    if days <= 0 {
        Severity::Critical
    } else if days <= LOAN_DEADLINE_HIGH_DAYS {
        Severity::High
    } else {
        Severity::Medium
    }
}

const fn settlement_deadline_severity(days: i64) -> Severity {
    if days <= SETTLEMENT_HIGH_DAYS {
        Severity::High
    } else {
        Severity::Medium
    }
}

/// Highest severity among `findings`, starting from `low`; the first finding
/// at the maximum wins.
fn overall_severity(findings: &[Finding]) -> Severity {
    findings.iter().fold(Severity::Low, |max, finding| {
        let current = finding.severity();
        if current > max { current } else { max }
    })
}

fn entries_for<'a, T>(map: &'a HashMap<ProjectId, Vec<T>>, id: &ProjectId) -> &'a [T] {
    map.get(id).map(Vec::as_slice).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(-4, Severity::Critical)]
    #[case(0, Severity::Critical)]
    #[case(1, Severity::High)]
    #[case(2, Severity::Medium)]
    #[case(3, Severity::Medium)]
    fn loan_deadline_thresholds(#[case] days: i64, #[case] expected: Severity) {
        assert_eq!(loan_deadline_severity(days), expected);
    }

    #[rstest]
    #[case(-1, Severity::High)]
    #[case(3, Severity::High)]
    #[case(4, Severity::Medium)]
    #[case(7, Severity::Medium)]
    fn settlement_deadline_thresholds(#[case] days: i64, #[case] expected: Severity) {
        assert_eq!(settlement_deadline_severity(days), expected);
    }

    #[test]
    fn overall_severity_is_the_maximum() {
        let urgent = Finding::UrgentTasks(UrgentTasksFinding {
            severity: Severity::Low,
            urgent_tasks: Vec::new(),
        });
        let overdue = Finding::OverdueTasks(OverdueTasksFinding {
            severity: Severity::Medium,
            overdue_tasks: Vec::new(),
        });

        assert_eq!(overall_severity(&[urgent.clone()]), Severity::Low);
        assert_eq!(
            overall_severity(&[urgent.clone(), overdue.clone(), urgent]),
            Severity::Medium
        );
        assert_eq!(overall_severity(&[]), Severity::Low);
    }

    #[test]
    fn missing_map_entry_reads_as_empty() {
        let map: HashMap<ProjectId, Vec<u8>> = HashMap::new();
        assert!(entries_for(&map, &ProjectId::from(1)).is_empty());
    }
}

//! End-to-end behavior of the risk pass.

use std::collections::HashMap;

use chrono::{Days, NaiveDate};
use pretty_assertions::assert_eq;
use settle_core::entities::{Contact, Project, Task};
use settle_core::enums::{ProjectStatus, Severity, TaskPriority};
use settle_core::findings::{
    ContactSummary, Finding, LoanDeadlineFinding, OverdueTask, SettlementDeadlineFinding,
};
use settle_core::ids::ProjectId;
use settle_core::request::RiskCheckRequest;
use settle_risk::{RiskEvaluator, RiskRules, evaluate};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 11, 20).unwrap()
}

fn offset(days: i64) -> NaiveDate {
    let today = today();
    if days >= 0 {
        today.checked_add_days(Days::new(days.unsigned_abs())).unwrap()
    } else {
        today.checked_sub_days(Days::new(days.unsigned_abs())).unwrap()
    }
}

fn project(id: u64) -> Project {
    Project {
        project_id: ProjectId::from(id),
        project_name: format!("Project {id}"),
        status: ProjectStatus::Contracted,
        contract_date: None,
        settlement_date: None,
        loan_special_clause_deadline: None,
    }
}

fn task(name: &str, due: Option<i64>, priority: TaskPriority) -> Task {
    Task {
        task_id: None,
        project_id: None,
        task_name: name.into(),
        due_date: due.map(offset),
        is_completed: false,
        priority,
    }
}

fn tasks_for(id: u64, tasks: Vec<Task>) -> HashMap<ProjectId, Vec<Task>> {
    HashMap::from([(ProjectId::from(id), tasks)])
}

fn no_contacts() -> HashMap<ProjectId, Vec<Contact>> {
    HashMap::new()
}

#[test]
fn loan_deadline_today_is_critical() {
    let mut p = project(1);
    p.loan_special_clause_deadline = Some(today());

    let risks = evaluate(today(), &[p], &HashMap::new(), &no_contacts());

    assert_eq!(risks.len(), 1);
    assert_eq!(risks[0].severity, Severity::Critical);
    assert_eq!(
        risks[0].risks,
        [Finding::LoanDeadline(LoanDeadlineFinding {
            severity: Severity::Critical,
            deadline: today(),
            days_until: 0,
            task_name: "融資承認確認".into(),
            is_overdue: false,
        })]
    );
}

#[test]
fn loan_finding_names_first_open_loan_task() {
    let mut p = project(1);
    p.loan_special_clause_deadline = Some(offset(2));
    let mut done = task("融資承認書の受領", None, TaskPriority::High);
    done.is_completed = true;
    let tasks = tasks_for(
        1,
        vec![
            done,
            task("司法書士への連絡", None, TaskPriority::Normal),
            task("融資承認の確認", None, TaskPriority::High),
            task("銀行の承認", None, TaskPriority::High),
        ],
    );

    let risks = evaluate(today(), &[p], &tasks, &no_contacts());
    let Finding::LoanDeadline(finding) = &risks[0].risks[0] else {
        panic!("expected loan deadline finding");
    };
    assert_eq!(finding.task_name, "融資承認の確認");
    assert_eq!(finding.severity, Severity::Medium);
    assert_eq!(finding.days_until, 2);
}

#[test]
fn loan_deadline_outside_window_is_ignored() {
    let mut p = project(1);
    p.loan_special_clause_deadline = Some(offset(4));
    assert!(evaluate(today(), &[p], &HashMap::new(), &no_contacts()).is_empty());
}

#[test]
fn overdue_loan_deadline_is_flagged_overdue() {
    let mut p = project(1);
    p.loan_special_clause_deadline = Some(offset(-2));

    let risks = evaluate(today(), &[p], &HashMap::new(), &no_contacts());
    let Finding::LoanDeadline(finding) = &risks[0].risks[0] else {
        panic!("expected loan deadline finding");
    };
    assert!(finding.is_overdue);
    assert_eq!(finding.days_until, -2);
    assert_eq!(finding.severity, Severity::Critical);
}

#[test]
fn settlement_with_open_high_priority_task_is_medium() {
    let mut p = project(1);
    p.settlement_date = Some(offset(5));
    let tasks = tasks_for(1, vec![task("残代金の確認", None, TaskPriority::High)]);

    let risks = evaluate(today(), &[p], &tasks, &no_contacts());

    assert_eq!(risks.len(), 1);
    assert_eq!(risks[0].severity, Severity::Medium);
    assert_eq!(
        risks[0].risks,
        [Finding::SettlementDeadline(SettlementDeadlineFinding {
            severity: Severity::Medium,
            deadline: offset(5),
            days_until: 5,
            incomplete_tasks: 1,
            task_names: vec!["残代金の確認".into()],
            is_overdue: false,
        })]
    );
}

#[test]
fn settlement_without_open_high_priority_tasks_is_ignored() {
    let mut p = project(1);
    p.settlement_date = Some(offset(2));
    let mut done = task("残代金の確認", None, TaskPriority::High);
    done.is_completed = true;
    let tasks = tasks_for(
        1,
        vec![done, task("鍵の受け渡し", None, TaskPriority::Normal)],
    );

    assert!(evaluate(today(), &[p], &tasks, &no_contacts()).is_empty());
}

#[test]
fn settlement_within_three_days_is_high() {
    let mut p = project(1);
    p.settlement_date = Some(offset(3));
    let tasks = tasks_for(
        1,
        vec![
            task("残代金の確認", None, TaskPriority::High),
            task("登記書類の準備", None, TaskPriority::High),
        ],
    );

    let risks = evaluate(today(), &[p], &tasks, &no_contacts());
    let Finding::SettlementDeadline(finding) = &risks[0].risks[0] else {
        panic!("expected settlement finding");
    };
    assert_eq!(finding.severity, Severity::High);
    assert_eq!(finding.incomplete_tasks, 2);
}

#[test]
fn overdue_tasks_are_grouped_into_one_finding() {
    let tasks = tasks_for(
        1,
        vec![
            task("司法書士への連絡", Some(-1), TaskPriority::Normal),
            task("重要事項説明書の確認", Some(-3), TaskPriority::Low),
        ],
    );

    let risks = evaluate(today(), &[project(1)], &tasks, &no_contacts());

    assert_eq!(risks.len(), 1);
    assert_eq!(risks[0].severity, Severity::Medium);
    assert_eq!(risks[0].risks.len(), 1);
    let Finding::OverdueTasks(finding) = &risks[0].risks[0] else {
        panic!("expected overdue finding");
    };
    assert_eq!(
        finding.overdue_tasks,
        [
            OverdueTask {
                task_name: "司法書士への連絡".into(),
                due_date: offset(-1),
                days_overdue: 1,
            },
            OverdueTask {
                task_name: "重要事項説明書の確認".into(),
                due_date: offset(-3),
                days_overdue: 3,
            },
        ]
    );
}

#[test]
fn urgent_window_covers_today_through_three_days() {
    let mut late = task("late", Some(-1), TaskPriority::Normal);
    late.is_completed = true;
    let tasks = tasks_for(
        1,
        vec![
            task("today", Some(0), TaskPriority::Normal),
            task("edge", Some(3), TaskPriority::Normal),
            task("later", Some(4), TaskPriority::Normal),
            late,
        ],
    );

    let risks = evaluate(today(), &[project(1)], &tasks, &no_contacts());

    assert_eq!(risks[0].severity, Severity::Low);
    let Finding::UrgentTasks(finding) = &risks[0].risks[0] else {
        panic!("expected urgent finding");
    };
    let names: Vec<_> = finding
        .urgent_tasks
        .iter()
        .map(|t| (t.task_name.as_str(), t.days_until))
        .collect();
    assert_eq!(names, [("today", 0), ("edge", 3)]);
}

#[test]
fn findings_keep_check_order_and_severity_is_their_max() {
    let mut p = project(1);
    p.loan_special_clause_deadline = Some(offset(1));
    p.settlement_date = Some(offset(6));
    let tasks = tasks_for(
        1,
        vec![
            task("融資承認の確認", Some(-2), TaskPriority::High),
            task("決済場所の予約", Some(1), TaskPriority::Normal),
        ],
    );

    let risks = evaluate(today(), &[p], &tasks, &no_contacts());
    let kinds: Vec<_> = risks[0].risks.iter().map(Finding::kind).collect();
    assert_eq!(
        kinds,
        [
            "loan_deadline",
            "settlement_deadline",
            "overdue_tasks",
            "urgent_tasks"
        ]
    );
    assert_eq!(risks[0].severity, Severity::High);
}

#[test]
fn completed_projects_are_never_flagged() {
    let mut p = project(1);
    p.status = ProjectStatus::SettlementComplete;
    p.loan_special_clause_deadline = Some(offset(-30));
    p.settlement_date = Some(today());
    let tasks = tasks_for(1, vec![task("残代金の確認", Some(-5), TaskPriority::High)]);

    assert!(evaluate(today(), &[p], &tasks, &no_contacts()).is_empty());
}

#[test]
fn project_without_dates_or_tasks_is_absent() {
    assert!(evaluate(today(), &[project(1)], &HashMap::new(), &no_contacts()).is_empty());
}

#[test]
fn most_severe_project_comes_first() {
    let low = project(1);
    let mut critical = project(2);
    critical.loan_special_clause_deadline = Some(today());
    let tasks = tasks_for(1, vec![task("鍵の受け渡し", Some(2), TaskPriority::Normal)]);

    let risks = evaluate(today(), &[low, critical], &tasks, &no_contacts());

    let order: Vec<_> = risks
        .iter()
        .map(|r| (r.project.project_id.as_str(), r.severity))
        .collect();
    assert_eq!(order, [("2", Severity::Critical), ("1", Severity::Low)]);
}

#[test]
fn equal_severities_keep_input_order() {
    let projects: Vec<_> = (1..=4).map(project).collect();
    let tasks: HashMap<_, _> = (1..=4)
        .map(|id| {
            (
                ProjectId::from(id),
                vec![task("overdue", Some(-1), TaskPriority::Normal)],
            )
        })
        .collect();

    let risks = evaluate(today(), &projects, &tasks, &no_contacts());
    let ids: Vec<_> = risks.iter().map(|r| r.project.project_id.as_str()).collect();
    assert_eq!(ids, ["1", "2", "3", "4"]);
}

#[test]
fn contacts_are_passed_through() {
    let mut p = project(1);
    p.loan_special_clause_deadline = Some(today());
    let contacts = HashMap::from([(
        ProjectId::from(1),
        vec![
            Contact {
                role: "買主".into(),
                name: "山田太郎様".into(),
            },
            Contact {
                role: "銀行担当".into(),
                name: "佐藤".into(),
            },
        ],
    )]);

    let risks = evaluate(today(), &[p], &HashMap::new(), &contacts);
    assert_eq!(
        risks[0].contacts,
        [
            ContactSummary {
                role: "買主".into(),
                name: "山田太郎様".into(),
            },
            ContactSummary {
                role: "銀行担当".into(),
                name: "佐藤".into(),
            },
        ]
    );
}

#[test]
fn custom_rules_change_loan_task_matching() {
    let mut p = project(1);
    p.loan_special_clause_deadline = Some(today());
    let tasks = tasks_for(
        1,
        vec![
            task("融資承認の確認", None, TaskPriority::High),
            task("Call mortgage broker", None, TaskPriority::High),
        ],
    );
    let evaluator = RiskEvaluator::new(RiskRules::new(["mortgage"], "confirm financing"));

    let risks = evaluator.evaluate(today(), &[p.clone()], &tasks, &no_contacts());
    let Finding::LoanDeadline(finding) = &risks[0].risks[0] else {
        panic!("expected loan deadline finding");
    };
    assert_eq!(finding.task_name, "Call mortgage broker");

    let risks = evaluator.evaluate(today(), &[p], &HashMap::new(), &no_contacts());
    let Finding::LoanDeadline(finding) = &risks[0].risks[0] else {
        panic!("expected loan deadline finding");
    };
    assert_eq!(finding.task_name, "confirm financing");
}

#[test]
fn task_with_null_completion_flag_is_still_overdue() {
    let request = RiskCheckRequest::from_json_str(
        r#"{
            "projects": [{"project_id": 1, "project_name": "A", "status": "contracted"}],
            "tasksMap": {
                "1": [{"task_name": "x", "due_date": "2025-11-18", "is_completed": null}]
            }
        }"#,
    )
    .unwrap();

    let risks = evaluate(today(), &request.projects, &request.tasks, &request.contacts);

    assert!(request.skipped.is_empty());
    assert_eq!(risks.len(), 1);
    assert_eq!(risks[0].severity, Severity::Medium);
    let Finding::OverdueTasks(finding) = &risks[0].risks[0] else {
        panic!("expected overdue_tasks, got {:?}", risks[0].risks[0]);
    };
    assert_eq!(finding.overdue_tasks[0].days_overdue, 2);
}

#[test]
fn dashboard_sample_ranks_as_expected() {
    let request = RiskCheckRequest::from_json_str(include_str!("fixtures/dashboard.json")).unwrap();
    let risks = evaluate(today(), &request.projects, &request.tasks, &request.contacts);

    let order: Vec<_> = risks
        .iter()
        .map(|r| (r.project.project_id.as_str(), r.severity))
        .collect();
    // Project 1: loan deadline in 2 days (medium) + urgent tasks (low) + overdue (medium).
    // Project 2: loan deadline 5 days ago (critical).
    // Project 3: open high-priority task due in 3 days (low), settlement in 5 days (medium).
    // Project 4: settlement complete.
    assert_eq!(
        order,
        [
            ("2", Severity::Critical),
            ("1", Severity::Medium),
            ("3", Severity::Medium),
        ]
    );
    assert_eq!(risks[1].contacts.len(), 1);

    for pair in risks.windows(2) {
        assert!(pair[0].severity >= pair[1].severity);
    }
}

mod common;

use common::{parse, parse_records, temp_planner};
use planner_core::{
    BoardOperations, ErrorKind, ManagerError, Planner, TaskStatus, TeamOperations,
    UserOperations,
};
use serde_json::json;

fn seed_team(planner: &Planner) {
    planner
        .teams()
        .create_team(r#"{"team_id": 101, "name": "Dev", "members": [1, 2]}"#)
        .unwrap();
}

fn task_json(task_id: i64, assigned_to: i64, status: &str) -> String {
    json!({
        "task_id": task_id,
        "title": "Implement API",
        "team_id": 101,
        "assigned_to": assigned_to,
        "status": status
    })
    .to_string()
}

#[test]
fn create_task_preserves_extra_fields() {
    let (_dir, planner) = temp_planner();
    seed_team(&planner);
    let input = json!({
        "task_id": 1001,
        "title": "Implement API",
        "description": "Create REST endpoints",
        "team_id": 101,
        "assigned_to": 1,
        "status": "To Do",
        "due_date": "2023-12-31"
    });

    let payload = parse(&planner.board().create_task(&input.to_string()).unwrap());
    assert_eq!(payload["status"], "success");
    assert_eq!(payload["task"], input);
    assert!(payload["timestamp"].is_string());
    assert_eq!(parse(&planner.board().get_task(1001).unwrap()), input);
}

#[test]
fn create_task_requires_all_fields() {
    let (_dir, planner) = temp_planner();
    seed_team(&planner);

    let err = planner
        .board()
        .create_task(r#"{"task_id": 1, "team_id": 101}"#)
        .unwrap_err();
    assert!(matches!(
        &err,
        ManagerError::MissingField(fields) if fields == &["title", "assigned_to", "status"]
    ));
}

#[test]
fn create_task_rejects_unknown_status() {
    let (_dir, planner) = temp_planner();
    seed_team(&planner);

    let err = planner
        .board()
        .create_task(&task_json(1, 1, "Blocked"))
        .unwrap_err();
    assert!(matches!(&err, ManagerError::InvalidStatus(value) if value == "Blocked"));
    assert!(parse_records(&planner.board().get_all_tasks().unwrap()).is_empty());
}

#[test]
fn create_task_rejects_unknown_team() {
    let (_dir, planner) = temp_planner();

    let err = planner
        .board()
        .create_task(&task_json(1, 1, "To Do"))
        .unwrap_err();
    assert!(matches!(err, ManagerError::TeamNotFound(101)));
}

#[test]
fn create_task_rejects_assignee_outside_team_even_if_user_exists() {
    let (_dir, planner) = temp_planner();
    seed_team(&planner);
    planner
        .users()
        .create_user(r#"{"user_id": 5, "name": "Eve"}"#)
        .unwrap();

    let err = planner
        .board()
        .create_task(&task_json(1, 5, "To Do"))
        .unwrap_err();
    assert!(matches!(
        err,
        ManagerError::UserNotInTeam {
            user_id: 5,
            team_id: 101
        }
    ));
    assert_eq!(err.to_string(), "User 5 is not in team 101");
}

#[test]
fn duplicate_task_id_is_checked_after_references() {
    let (_dir, planner) = temp_planner();
    seed_team(&planner);
    planner.board().create_task(&task_json(1, 1, "To Do")).unwrap();

    let duplicate = planner
        .board()
        .create_task(&task_json(1, 2, "Done"))
        .unwrap_err();
    assert_eq!(duplicate.kind(), ErrorKind::DuplicateKey);

    let outsider = planner
        .board()
        .create_task(&task_json(1, 9, "Done"))
        .unwrap_err();
    assert_eq!(outsider.kind(), ErrorKind::UserNotInTeam);
}

#[test]
fn update_status_allows_any_transition() {
    let (_dir, planner) = temp_planner();
    seed_team(&planner);
    let board = planner.board();
    board.create_task(&task_json(1, 1, "Done")).unwrap();

    for status in [
        TaskStatus::ToDo,
        TaskStatus::Done,
        TaskStatus::InProgress,
        TaskStatus::InProgress,
    ] {
        let payload = parse(&board.update_task_status(1, status.as_str()).unwrap());
        assert_eq!(payload["status"], "success");
        assert_eq!(payload["updated_task"]["status"], status.as_str());
    }
}

#[test]
fn update_status_only_touches_status_field() {
    let (_dir, planner) = temp_planner();
    seed_team(&planner);
    let board = planner.board();
    board.create_task(&task_json(1, 1, "To Do")).unwrap();

    let payload = parse(&board.update_task_status(1, "In Progress").unwrap());
    assert_eq!(
        payload["updated_task"],
        json!({
            "task_id": 1,
            "title": "Implement API",
            "team_id": 101,
            "assigned_to": 1,
            "status": "In Progress"
        })
    );
}

#[test]
fn update_status_rejects_invalid_value_without_changes() {
    let (_dir, planner) = temp_planner();
    seed_team(&planner);
    let board = planner.board();
    board.create_task(&task_json(1, 1, "To Do")).unwrap();

    let err = board.update_task_status(1, "Blocked").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidStatus);
    assert_eq!(parse(&board.get_task(1).unwrap())["status"], "To Do");
}

#[test]
fn update_status_on_missing_task_returns_not_found() {
    let (_dir, planner) = temp_planner();
    let err = planner.board().update_task_status(77, "Done").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn update_status_json_accepts_object_payload() {
    let (_dir, planner) = temp_planner();
    seed_team(&planner);
    let board = planner.board();
    board.create_task(&task_json(1, 1, "To Do")).unwrap();

    let payload = parse(
        &board
            .update_task_status_json(r#"{"task_id": 1, "status": "Done"}"#)
            .unwrap(),
    );
    assert_eq!(payload["updated_task"]["status"], "Done");

    assert_eq!(
        board
            .update_task_status_json(r#"{"task_id": 1}"#)
            .unwrap_err()
            .kind(),
        ErrorKind::MissingField
    );
    assert_eq!(
        board
            .update_task_status_json(r#"{"task_id": 1, "status": 3}"#)
            .unwrap_err()
            .kind(),
        ErrorKind::InvalidStatus
    );
}

#[test]
fn delete_task_reports_remaining_count() {
    let (_dir, planner) = temp_planner();
    seed_team(&planner);
    let board = planner.board();
    board.create_task(&task_json(1, 1, "To Do")).unwrap();
    board.create_task(&task_json(2, 2, "To Do")).unwrap();

    let payload = parse(&board.delete_task(1).unwrap());
    assert_eq!(payload["deleted_task_id"], 1);
    assert_eq!(payload["remaining_tasks"], 1);
    assert_eq!(board.get_task(1).unwrap_err().kind(), ErrorKind::NotFound);
    assert_eq!(board.delete_task(1).unwrap_err().kind(), ErrorKind::NotFound);
}

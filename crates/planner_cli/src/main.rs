//! Demonstration harness for `planner_core`.
//!
//! # Responsibility
//! - Run a fixed user -> team -> task flow against JSON collection files.
//! - Print every operation result, continuing past individual failures.

use clap::Parser;
use log::info;
use planner_core::{
    default_log_level, init_logging, BoardOperations, Planner, StorageConfig, TeamOperations,
    UserOperations,
};
use serde_json::json;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "planner", version, about = "Team planner demonstration flow")]
struct Cli {
    /// Directory holding users.json, teams.json and boards.json.
    #[arg(long, default_value = planner_core::config::DEFAULT_STORAGE_DIR)]
    data_dir: PathBuf,

    /// Absolute directory for rolling log files; logging is off when omitted.
    #[arg(long)]
    log_dir: Option<String>,

    /// trace|debug|info|warn|error
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        if let Err(err) = init_logging(level, log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    println!("planner_core version={}", planner_core::core_version());

    let planner = match Planner::open(&StorageConfig::in_dir(&cli.data_dir)) {
        Ok(planner) => {
            println!("managers initialized at {}", cli.data_dir.display());
            planner
        }
        Err(err) => {
            eprintln!("initialization failed: {err}");
            return ExitCode::FAILURE;
        }
    };

    let user = json!({"user_id": 1, "name": "Alice", "email": "alice@example.com"});
    report("user creation", planner.users().create_user(&user.to_string()));

    let team = json!({"team_id": 101, "name": "Development Team", "members": [1]});
    report("team creation", planner.teams().create_team(&team.to_string()));

    let task = json!({
        "task_id": 1001,
        "title": "Implement API",
        "description": "Create REST endpoints",
        "team_id": 101,
        "assigned_to": 1,
        "status": "To Do",
        "due_date": "2023-12-31"
    });
    report("task creation", planner.board().create_task(&task.to_string()));

    println!();
    println!("=== final state ===");
    report("users", planner.users().get_all_users());
    report("teams", planner.teams().get_all_teams());
    report("tasks", planner.board().get_all_tasks());

    info!("event=demo_complete module=cli status=ok");
    ExitCode::SUCCESS
}

fn report<E: std::fmt::Display>(label: &str, result: Result<String, E>) {
    match result {
        Ok(payload) => println!("{label}: {payload}"),
        Err(err) => println!("{label} failed: {err}"),
    }
}

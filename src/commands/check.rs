use std::path::PathBuf;

use anyhow::{bail, Result};
use slugmap::application::CheckResult;
use slugmap::{CheckUseCase, Config, EntityKind, LocalFs};

use crate::ui::json;

pub fn cmd_check(
    config: &Config,
    data_dir: Option<PathBuf>,
    kinds: Option<Vec<EntityKind>>,
    strict: bool,
    json: bool,
) -> Result<()> {
    let data_dir = super::data_dir(config, data_dir);
    let kinds = super::kinds(config, kinds);

    if json {
        let _ = json::emit(serde_json::json!({
            "event": "start",
            "command": "check",
            "data_dir": data_dir.display().to_string(),
            "strict": strict,
        }));
    }

    let result = CheckUseCase::new(LocalFs::new()).execute(&data_dir, &kinds);

    if json {
        emit_json(&result, strict);
    } else {
        print_report(&result);
    }

    if strict && !result.is_clean() {
        bail!("check found {} issue(s)", result.issue_count());
    }
    Ok(())
}

fn emit_json(result: &CheckResult, strict: bool) {
    for check in &result.kinds {
        let mut event = json::to_value(check);
        if let Some(map) = event.as_object_mut() {
            map.insert("event".to_string(), "kind".into());
            map.insert("command".to_string(), "check".into());
        }
        let _ = json::emit(event);
    }
    let _ = json::emit(serde_json::json!({
        "event": "complete",
        "command": "check",
        "strict": strict,
        "issues": result.issue_count(),
        "success": result.is_clean(),
    }));
}

fn print_report(result: &CheckResult) {
    for check in &result.kinds {
        let mark = if check.issue_count() == 0 { "ok" } else { "!!" };
        println!("[{}] {} ({} records)", mark, check.kind, check.records);
        for skipped in &check.skipped {
            println!("     skipped {}: {}", skipped.file, skipped.reason);
        }
        for collision in &check.collisions {
            println!(
                "     collision '{}': {} displaced by {}",
                collision.key, collision.displaced, collision.winner
            );
        }
        for slug in &check.unnormalized {
            println!("     file name '{}' is not a normalized slug", slug);
        }
    }

    if result.is_clean() {
        println!("\nNo issues found");
    } else {
        println!("\n{} issue(s) found", result.issue_count());
    }
}

use std::path::PathBuf;

use anyhow::Result;
use slugmap::application::BuildResult;
use slugmap::infrastructure::WriteOutcome;
use slugmap::{BuildOptions, BuildUseCase, Config, EntityKind, LocalFs};

use crate::ui::json;

pub fn cmd_build(
    config: &Config,
    data_dir: Option<PathBuf>,
    kinds: Option<Vec<EntityKind>>,
    dry_run: bool,
    json: bool,
) -> Result<()> {
    let data_dir = super::data_dir(config, data_dir);
    let options = BuildOptions::new(&data_dir)
        .with_kinds(super::kinds(config, kinds))
        .with_dry_run(dry_run);

    if json {
        let _ = json::emit(serde_json::json!({
            "event": "start",
            "command": "build",
            "data_dir": data_dir.display().to_string(),
            "dry_run": dry_run,
        }));
    }

    let fs = LocalFs::new().with_atomic_writes(config.output.atomic_writes);
    let result = BuildUseCase::new(fs)
        .with_pretty(config.output.pretty)
        .execute(&options)?;

    if json {
        emit_json(&result);
    } else {
        print_summary(&result, dry_run);
    }
    Ok(())
}

fn emit_json(result: &BuildResult) {
    for summary in &result.kinds {
        let mut event = json::to_value(summary);
        if let Some(map) = event.as_object_mut() {
            map.insert("event".to_string(), "kind".into());
            map.insert("command".to_string(), "build".into());
        }
        let _ = json::emit(event);
    }
    let _ = json::emit(serde_json::json!({
        "event": "complete",
        "command": "build",
        "written": result.written(),
        "unchanged": result.unchanged(),
        "skipped": result.total_skipped(),
        "collisions": result.total_collisions(),
    }));
}

fn print_summary(result: &BuildResult, dry_run: bool) {
    if dry_run {
        println!("Dry run - no files written");
    }
    for summary in &result.kinds {
        let status = match summary.outcome {
            WriteOutcome::Written => "written",
            WriteOutcome::Unchanged => "unchanged",
            WriteOutcome::Skipped => "would write",
        };
        println!(
            "{:<10} {:>5} records  {:>5} keys  {} ({}, sha256 {:.12})",
            summary.kind.to_string(),
            summary.records,
            summary.keys,
            summary.output.display(),
            status,
            summary.hash.hex()
        );
        for skipped in &summary.skipped {
            println!("  skipped {}: {}", skipped.file, skipped.reason);
        }
        for collision in &summary.collisions {
            println!(
                "  collision '{}': {} -> {}",
                collision.key, collision.displaced, collision.winner
            );
        }
    }
    println!(
        "\n{} written, {} unchanged, {} skipped, {} collisions",
        result.written(),
        result.unchanged(),
        result.total_skipped(),
        result.total_collisions()
    );
}

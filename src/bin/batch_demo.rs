//! Demo run of both batch policies against the loaded configuration.
//!
//! ```bash
//! BATCH_SCHEDULER_BATCH_SIZE=3 BATCH_SCHEDULER_INTER_BATCH_DELAY_MS=100 cargo run --bin batch-demo
//! ```

use anyhow::Context;
use batch_scheduler::helpers::{format_template, local_format_number, round_digits};
use batch_scheduler::logging::{init_tracing, log_batch_operation};
use batch_scheduler::{BatchScheduler, ConfigManager, OutcomeSummary};
use std::time::Duration;

const SAMPLE_ITEMS: usize = 12;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let manager = ConfigManager::load().context("loading scheduler configuration")?;
    let scheduler = BatchScheduler::from_config(manager.config())
        .context("building scheduler from configuration")?;
    let items: Vec<f64> = (1..=SAMPLE_ITEMS).map(|i| i as f64 * 1.37).collect();

    log_batch_operation(
        "fail_fast",
        scheduler.batch_size(),
        items.len(),
        "started",
        None,
    );
    let areas = scheduler
        .run(
            |radius: f64| async move {
                tokio::time::sleep(Duration::from_millis(5)).await;
                Ok::<_, String>(round_digits(std::f64::consts::PI * radius * radius, 2))
            },
            items.clone(),
        )
        .await
        .context("fail-fast demo run")?;
    for (radius, area) in items.iter().zip(&areas) {
        println!(
            "{}",
            format_template(
                "radius {radius} -> area {area}",
                [
                    ("radius", local_format_number(*radius, 2)),
                    ("area", local_format_number(*area, 2)),
                ],
            )
        );
    }

    log_batch_operation(
        "settled",
        scheduler.batch_size(),
        items.len(),
        "started",
        Some("every fifth item is rejected"),
    );
    let outcomes = scheduler
        .run_settled(
            |radius: f64| async move {
                let index = (radius / 1.37).round() as usize;
                if index % 5 == 0 {
                    Err(format!("item {index} rejected"))
                } else {
                    Ok(round_digits(radius.sqrt(), 3))
                }
            },
            items,
        )
        .await;

    let summary = OutcomeSummary::from_outcomes(&outcomes);
    println!("{}", serde_json::to_string_pretty(&outcomes)?);
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}

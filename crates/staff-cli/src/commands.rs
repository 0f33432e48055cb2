use std::io;
use std::time::Instant;

use anyhow::Result;
use tracing::{info, info_span};

use staff_cli::pipeline::{PlanFormat, emit, ingest, schedule};
use staff_model::EngineOptions;

use crate::cli::Cli;
use crate::types::RunReport;

pub fn run(cli: &Cli) -> Result<RunReport> {
    let started = Instant::now();
    let run_span = info_span!("run", input = %cli.input.display());
    let _run_guard = run_span.enter();

    let table = info_span!("ingest").in_scope(|| ingest(&cli.input))?;

    let options = EngineOptions::new().with_utilization(cli.utilization);
    let plan = info_span!("schedule").in_scope(|| schedule(&table.records, options));

    let format = PlanFormat::from(cli.format);
    let csv_path = info_span!("output", ?format).in_scope(|| {
        emit(&plan, format, cli.output.as_deref(), io::stdout().lock())
    })?;
    if let Some(path) = &csv_path {
        println!("CSV output saved to {}", path.display());
    }

    let report = RunReport {
        input: cli.input.clone(),
        rows_read: table.rows_read(),
        accepted: table.records.len(),
        skipped: table.skipped,
        utilization: options.utilization,
        effective_utilization: options.effective_utilization(),
        peak: plan
            .peak()
            .map(|bucket| (bucket.hour(), bucket.total_agents())),
        agent_hours: plan.total_agent_hours(),
        csv_path,
        elapsed: started.elapsed(),
    };
    info!(
        elapsed_ms = report.elapsed.as_millis() as u64,
        skipped = report.skipped.len(),
        "run finished"
    );
    Ok(report)
}

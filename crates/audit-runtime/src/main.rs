//! # Ledger Audit Runtime
//!
//! Entry point for auditing a transfer log.
//!
//! ## Pipeline
//!
//! 1. Load configuration (env, optional positional input path)
//! 2. Load transfer records from CSV
//! 3. Build the transfer graph
//! 4. Flag transfers above the fraud threshold
//! 5. Rank participants by degree centrality
//! 6. Print the report; write the DOT rendering if requested

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

use ledger_graph::{
    AuditConfig, CsvTransferSource, DotPresenter, GraphPresenter, LedgerAnalysisApi,
    LedgerAnalysisService, TextReport, TransferSource,
};
use ledger_telemetry::{init_telemetry, log_event, TelemetryConfig};

/// Load configuration from environment, then the first positional argument.
fn load_config() -> AuditConfig {
    let mut config = AuditConfig::from_env();

    if let Some(path) = std::env::args_os().nth(1) {
        config.input_path = PathBuf::from(path);
    }

    config
}

fn run(config: &AuditConfig) -> Result<()> {
    config.validate().context("invalid audit configuration")?;

    let mut source = CsvTransferSource::from_path(&config.input_path);
    let records = source
        .load()
        .with_context(|| format!("failed to load {}", config.input_path.display()))?;

    let service = LedgerAnalysisService::with_config(config);
    let report = service
        .analyze(&records)
        .context("failed to build transfer graph")?;

    if let Some(path) = &config.dot_output {
        let file = File::create(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        DotPresenter::new(BufWriter::new(file))
            .present(&report.graph, &report.fraud_edges)
            .context("failed to render transfer graph")?;
        log_event!(info, "presentation", "Graph rendering written", path = %path.display());
    }

    let mut out = TextReport::new(io::stdout().lock());
    if config.json_report {
        out.write_json(&report)?;
    } else {
        out.write(&report)?;
    }

    Ok(())
}

fn main() -> Result<()> {
    let telemetry = TelemetryConfig::from_env();
    init_telemetry(&telemetry)?;

    let config = load_config();
    info!(
        input = %config.input_path.display(),
        threshold = config.fraud_threshold,
        top_n = config.top_n,
        "Starting ledger audit"
    );

    run(&config)
}

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use osm_audit::{
    AddressKeyAudit, AuditReport, AuditVariant, KeyAudit, KeysWithValueAudit, NameAudit,
    StreetTypeAudit, SuspiciousValueAudit, ValueSetAudit, ValueTallyAudit, audit_file,
};
use osm_core::LoadSummary;
use osm_output::SinkConfig;
use tracing::{debug, info_span};

use crate::cli::{AuditArgs, AuditCommand, LoadArgs, SinkArg};
use crate::summary::{corrections_table, rules_table};

pub fn run_rules() -> Result<()> {
    println!("{}", rules_table());
    println!();
    println!("Corrections:");
    println!("{}", corrections_table());
    Ok(())
}

pub fn run_load(args: &LoadArgs) -> Result<LoadSummary> {
    let config = sink_config(args);
    debug!(?config, "selected sink");
    let summary = osm_core::run_load_to(&args.input, &config)
        .with_context(|| format!("load {}", args.input.display()))?;
    Ok(summary)
}

pub fn run_audit(args: &AuditArgs) -> Result<AuditReport> {
    let span = info_span!("audit_command", variant = ?args.variant);
    let _guard = span.enter();
    let mut audit = build_audit(&args.variant);
    audit_file(&args.input, audit.as_mut())
        .with_context(|| format!("audit {}", args.input.display()))?;
    Ok(audit.report())
}

pub fn build_audit(command: &AuditCommand) -> Box<dyn AuditVariant> {
    match command {
        AuditCommand::Keys => Box::new(KeyAudit::default()),
        AuditCommand::AddrKeys => Box::new(AddressKeyAudit::default()),
        AuditCommand::StreetTypes => Box::new(StreetTypeAudit::default()),
        AuditCommand::Names { all } => Box::new(NameAudit::default().show_all(*all)),
        AuditCommand::ValueSet { key } => Box::new(ValueSetAudit::new(key.as_str())),
        AuditCommand::ValueTally { key } => Box::new(ValueTallyAudit::new(key.as_str())),
        AuditCommand::Suspicious { literals } if literals.is_empty() => {
            Box::new(SuspiciousValueAudit::default())
        }
        AuditCommand::Suspicious { literals } => Box::new(SuspiciousValueAudit::new(literals)),
        AuditCommand::KeysWithValue { literal } => Box::new(KeysWithValueAudit::new(literal)),
    }
}

pub fn sink_config(args: &LoadArgs) -> SinkConfig {
    let path = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&args.input, args.sink));
    match args.sink {
        SinkArg::Json => SinkConfig::JsonFile { path },
        SinkArg::Store => SinkConfig::Store {
            path,
            collection: args.collection.clone(),
        },
    }
}

/// `<INPUT>` with its extension replaced by `.json` or `.db`.
pub fn default_output_path(input: &Path, sink: SinkArg) -> PathBuf {
    let extension = match sink {
        SinkArg::Json => "json",
        SinkArg::Store => "db",
    };
    input.with_extension(extension)
}

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{info, info_span, warn};

use claims_core::pipeline::Pipeline;
use claims_ingest::{read_alpha_records, read_beta_records};
use claims_model::{
    AMBIGUOUS_KEYWORDS, FALLBACK_ACTION, NON_RETRYABLE_REASONS, RECOMMENDED_ACTIONS,
    RETRYABLE_REASONS,
};
use claims_report::write_candidates_report;

use crate::cli::RunArgs;
use crate::summary::apply_table_style;
use crate::types::RunResult;

/// Default report file name, next to the current working directory.
const DEFAULT_OUTPUT: &str = "resubmission_candidates.json";

/// Print the fixed rule tables the classifier and recommender consult.
pub fn run_rules() -> Result<()> {
    let mut classification = Table::new();
    classification.set_header(vec!["Classification", "Match", "Phrase"]);
    apply_table_style(&mut classification);
    for phrase in RETRYABLE_REASONS {
        classification.add_row(vec!["retryable", "substring", *phrase]);
    }
    for phrase in NON_RETRYABLE_REASONS {
        classification.add_row(vec!["non_retryable", "substring", *phrase]);
    }
    for keyword in AMBIGUOUS_KEYWORDS {
        classification.add_row(vec!["retryable (heuristic)", "keyword", *keyword]);
    }
    println!("{classification}");

    let mut actions = Table::new();
    actions.set_header(vec!["Denial reason", "Recommended action"]);
    apply_table_style(&mut actions);
    for (reason, action) in RECOMMENDED_ACTIONS {
        actions.add_row(vec![*reason, *action]);
    }
    actions.add_row(vec!["(anything else)", FALLBACK_ACTION]);
    println!();
    println!("{actions}");
    Ok(())
}

/// Ingest both sources, run the pipeline, and write the candidates report.
pub fn run_claims(args: &RunArgs) -> Result<RunResult> {
    let run_span = info_span!("claims_run", reference_date = %args.reference_date);
    let _run_guard = run_span.enter();

    let alpha_records = read_alpha_records(&args.alpha);
    let beta_records = read_beta_records(&args.beta);
    if alpha_records.is_empty() && beta_records.is_empty() {
        warn!("both sources yielded zero records");
    }

    let pipeline = Pipeline::new(args.reference_date);
    let outcome = pipeline.run(&alpha_records, &beta_records);

    let output_path = if args.dry_run {
        info!("dry run, skipping report write");
        None
    } else {
        let path = args
            .output
            .clone()
            .unwrap_or_else(|| DEFAULT_OUTPUT.into());
        let written =
            write_candidates_report(&path, outcome.candidates.clone(), args.reference_date)
                .with_context(|| format!("write report to {}", path.display()))?;
        Some(written)
    };

    Ok(RunResult {
        reference_date: args.reference_date,
        output_path,
        metrics: outcome.metrics,
        candidates: outcome.candidates,
        dropped_records: outcome
            .normalization_failures
            .iter()
            .map(ToString::to_string)
            .collect(),
    })
}

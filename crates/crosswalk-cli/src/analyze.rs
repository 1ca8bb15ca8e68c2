//! # Analyze Subcommand
//!
//! Runs the integration engine over a dataset directory and prints the
//! report, stamped with the organization and generation time, as JSON.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::Args;
use serde::Serialize;

use crosswalk_core::{OrganizationId, ProjectId, StandardCode};
use crosswalk_engine::{AnalysisScope, IntegrationEngine, IntegrationReport};

use crate::config::CliConfig;
use crate::dataset::FileDataset;

/// Arguments for the `crosswalk analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Organization UUID. Defaults to `CROSSWALK_ORG_ID`.
    #[arg(long)]
    pub org: Option<OrganizationId>,

    /// Restrict the analysis to one standard code.
    #[arg(long)]
    pub standard: Option<String>,

    /// Restrict the analysis to one project UUID.
    #[arg(long)]
    pub project: Option<ProjectId>,

    /// Emit compact JSON instead of pretty-printed.
    #[arg(long)]
    pub compact: bool,
}

/// Report plus run metadata, as printed.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisEnvelope {
    /// Organization analyzed.
    pub organization_id: OrganizationId,
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// The engine's report.
    pub report: IntegrationReport,
}

/// Build the analysis scope from flags and configuration.
pub fn scope_from_args(args: &AnalyzeArgs, config: &CliConfig) -> Result<AnalysisScope> {
    let organization = config.resolve_organization(args.org)?;
    let mut scope = AnalysisScope::new(organization);
    if let Some(code) = &args.standard {
        let code = StandardCode::new(code.as_str()).context("invalid --standard")?;
        scope = scope.with_standard(code);
    }
    if let Some(project) = args.project {
        scope = scope.with_project(project);
    }
    Ok(scope)
}

/// Run the analysis and return the envelope.
pub async fn analyze(args: &AnalyzeArgs, config: &CliConfig) -> Result<AnalysisEnvelope> {
    let scope = scope_from_args(args, config)?;
    let dataset = FileDataset::new(&config.data_dir);
    let engine = IntegrationEngine::new(dataset.clone(), dataset);

    let report = engine.analyze(&scope).await.with_context(|| {
        format!(
            "failed to analyze dataset in {}",
            config.data_dir.display()
        )
    })?;

    Ok(AnalysisEnvelope {
        organization_id: scope.organization_id,
        generated_at: Utc::now(),
        report,
    })
}

/// Execute the analyze subcommand.
///
/// Returns exit code: 0 on success.
pub async fn run_analyze(args: &AnalyzeArgs, config: &CliConfig) -> Result<u8> {
    let envelope = analyze(args, config).await?;
    let json = if args.compact {
        serde_json::to_string(&envelope)?
    } else {
        serde_json::to_string_pretty(&envelope)?
    };
    println!("{json}");
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{COVERAGE_FILE, CROSS_REFERENCES_FILE};
    use serde_json::json;

    fn args(org: Option<OrganizationId>, standard: Option<&str>) -> AnalyzeArgs {
        AnalyzeArgs {
            org,
            standard: standard.map(str::to_string),
            project: None,
            compact: false,
        }
    }

    fn write_dataset(dir: &std::path::Path) {
        let coverage = json!({
            "overallCoveragePercent": 50,
            "standards": [
                {
                    "code": "ISO9001",
                    "name": "ISO 9001:2015",
                    "coveragePercent": 100,
                    "clauses": [{
                        "clauseNumber": "4",
                        "title": "Context of the organization",
                        "children": [{
                            "clauseId": "q-4.1",
                            "clauseNumber": "4.1",
                            "title": "Understanding the organization",
                            "status": "COVERED"
                        }]
                    }]
                },
                {
                    "code": "ISO14001",
                    "name": "ISO 14001:2015",
                    "coveragePercent": 0,
                    "clauses": [{
                        "clauseNumber": "4",
                        "title": "Context of the organization",
                        "children": [{
                            "clauseId": "e-4.1",
                            "clauseNumber": "4.1",
                            "title": "Understanding the organization",
                            "status": "GAP"
                        }]
                    }]
                }
            ]
        });
        let edges = json!([{
            "sourceClauseId": "q-4.1",
            "targetClauseId": "e-4.1",
            "mappingType": "EQUIVALENT"
        }]);
        std::fs::write(dir.join(COVERAGE_FILE), coverage.to_string()).unwrap();
        std::fs::write(dir.join(CROSS_REFERENCES_FILE), edges.to_string()).unwrap();
    }

    fn config(dir: &std::path::Path) -> CliConfig {
        CliConfig::default().with_data_dir(Some(dir.to_path_buf()))
    }

    #[tokio::test]
    async fn analyze_wraps_report_in_envelope() {
        let dir = tempfile::tempdir().unwrap();
        write_dataset(dir.path());
        let org = OrganizationId::new();

        let envelope = analyze(&args(Some(org), None), &config(dir.path()))
            .await
            .unwrap();
        assert_eq!(envelope.organization_id, org);
        assert_eq!(envelope.report.active_standard_count, 2);
        assert_eq!(envelope.report.integration_score.efficiency_percent, 50);

        let value = serde_json::to_value(&envelope).unwrap();
        assert!(value["generatedAt"].is_string());
        assert_eq!(value["report"]["consolidatedReadiness"]["deduplicatedCoverage"], 100);
    }

    #[tokio::test]
    async fn standard_flag_narrows_the_tree() {
        let dir = tempfile::tempdir().unwrap();
        write_dataset(dir.path());
        let envelope = analyze(
            &args(Some(OrganizationId::new()), Some("ISO14001")),
            &config(dir.path()),
        )
        .await
        .unwrap();
        assert_eq!(envelope.report.active_standard_count, 1);
        assert!(envelope.report.integration_score.savings.is_empty());
    }

    #[tokio::test]
    async fn missing_dataset_fails_with_context() {
        let dir = tempfile::tempdir().unwrap();
        let err = analyze(&args(Some(OrganizationId::new()), None), &config(dir.path()))
            .await
            .unwrap_err();
        assert!(format!("{err:#}").contains("coverage.json"));
    }

    #[test]
    fn blank_standard_is_rejected() {
        let err = scope_from_args(
            &args(Some(OrganizationId::new()), Some("  ")),
            &CliConfig::default(),
        )
        .unwrap_err();
        assert!(format!("{err:#}").contains("--standard"));
    }

    #[test]
    fn organization_falls_back_to_config() {
        let raw = "6f1c2a8e-3b4d-4e5f-9a0b-1c2d3e4f5a6b";
        let org: OrganizationId = raw.parse().unwrap();
        let config = CliConfig {
            organization_id: Some(raw.to_string()),
            ..CliConfig::default()
        };
        let scope = scope_from_args(&args(None, None), &config).unwrap();
        assert_eq!(scope.organization_id, org);
    }
}

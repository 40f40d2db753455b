//! Downloadable JSON report of the current analysis.
//!
//! The report wraps the analysis record verbatim with the moment it was
//! produced: `{"timestamp": "<ISO-8601 UTC>", "analysis": {...}}`.

mod export;

pub use export::{deliver_report, ReportExportButton};

use api::{AnalysisResult, ErrorKind};
use serde::Serialize;
use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

pub const REPORT_MIME: &str = "application/json";

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("There is no analysis result to export yet.")]
    NoResult,
    #[error("Could not encode the report: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("{0}")]
    Delivery(String),
}

impl ReportError {
    /// Maps onto the shared error kinds where one applies.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            ReportError::NoResult => Some(ErrorKind::NoResult),
            ReportError::Encode(_) | ReportError::Delivery(_) => None,
        }
    }
}

#[derive(Serialize)]
struct AnalysisReport<'a> {
    timestamp: String,
    analysis: &'a AnalysisResult,
}

/// A finished report, ready to hand to the platform download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportArtifact {
    pub filename: String,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

/// Serializes `result` as of `at`. Fails with [`ReportError::NoResult`] when
/// there is nothing settled to export.
pub fn build_report(
    result: Option<&AnalysisResult>,
    at: OffsetDateTime,
) -> Result<ReportArtifact, ReportError> {
    let analysis = result.ok_or(ReportError::NoResult)?;
    let at = at.to_offset(UtcOffset::UTC);
    let report = AnalysisReport {
        timestamp: iso_timestamp(at),
        analysis,
    };
    let bytes = serde_json::to_vec_pretty(&report)?;
    Ok(ReportArtifact {
        filename: report_filename(at),
        mime: REPORT_MIME,
        bytes,
    })
}

/// `certificate-analysis-<unix millis>.json`
pub fn report_filename(at: OffsetDateTime) -> String {
    let millis = at.unix_timestamp_nanos() / 1_000_000;
    format!("certificate-analysis-{millis}.json")
}

fn iso_timestamp(at: OffsetDateTime) -> String {
    let format = format_description!(
        "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z"
    );
    // Only fails for years outside 0..=9999.
    at.format(&format).unwrap_or_else(|_| at.unix_timestamp().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::model::{TrustEvaluation, TamperReport};
    use time::macros::datetime;

    fn sample() -> AnalysisResult {
        AnalysisResult {
            tamper_report: Some(TamperReport {
                score: Some(0.12),
                heatmap: None,
            }),
            trust_evaluation: Some(TrustEvaluation {
                trust_score: Some(91),
                verdict: Some("Valid".into()),
                reasons: vec!["Issuer logo matched".into()],
            }),
            ..AnalysisResult::default()
        }
    }

    #[test]
    fn idle_workflow_has_nothing_to_export() {
        let workflow = crate::workflow::AnalysisWorkflow::<crate::tests::NoopSampler>::default();
        let err = build_report(workflow.current_result(), OffsetDateTime::UNIX_EPOCH)
            .expect_err("nothing to export");
        assert!(matches!(err, ReportError::NoResult));
        assert_eq!(err.kind(), Some(ErrorKind::NoResult));
    }

    #[test]
    fn report_wraps_analysis_with_utc_timestamp() {
        let at = datetime!(2024-03-05 14:07:09.250 +02:00);
        let artifact = build_report(Some(&sample()), at).expect("report");

        assert_eq!(artifact.mime, "application/json");
        assert_eq!(artifact.filename, "certificate-analysis-1709640429250.json");

        let value: serde_json::Value = serde_json::from_slice(&artifact.bytes).expect("json");
        assert_eq!(value["timestamp"], "2024-03-05T12:07:09.250Z");
        assert_eq!(value["analysis"]["trust_evaluation"]["trust_score"], 91);
        assert_eq!(value["analysis"]["tamper_report"]["score"], 0.12);
    }

    #[test]
    fn analysis_survives_a_round_trip() {
        let original = sample();
        let artifact = build_report(Some(&original), OffsetDateTime::UNIX_EPOCH).expect("report");
        let value: serde_json::Value = serde_json::from_slice(&artifact.bytes).expect("json");
        let decoded: AnalysisResult =
            serde_json::from_value(value["analysis"].clone()).expect("analysis");
        assert_eq!(decoded, original);
    }
}

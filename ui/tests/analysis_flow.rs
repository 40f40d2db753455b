//! End-to-end submissions against a scripted analysis service: the workflow
//! engine, the client and the report builder wired the way the view wires them.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use api::{
    AnalysisClient, AnalysisRequest, ErrorKind, RawResponse, ServiceConfig, Transport,
    TransportError,
};
use futures::future::{self, FutureExt, LocalBoxFuture};
use serde_json::json;
use time::OffsetDateTime;
use ui::core::format::{TrustTier, VerdictCategory};
use ui::report::{build_report, ReportError};
use ui::workflow::{
    AnalysisWorkflow, ProgressSample, Resolution, SamplerHandle, SelectOutcome, SelectedFile,
    WorkflowState,
};

struct CountingService {
    status: u16,
    body: String,
    hang: bool,
    calls: Cell<usize>,
}

impl CountingService {
    fn new(status: u16, body: serde_json::Value) -> Rc<Self> {
        Rc::new(Self {
            status,
            body: body.to_string(),
            hang: false,
            calls: Cell::new(0),
        })
    }

    /// Accepts the upload and never answers.
    fn unresponsive() -> Rc<Self> {
        Rc::new(Self {
            status: 0,
            body: String::new(),
            hang: true,
            calls: Cell::new(0),
        })
    }
}

impl Transport for CountingService {
    fn upload(
        &self,
        _url: String,
        request: AnalysisRequest,
    ) -> LocalBoxFuture<'_, Result<RawResponse, TransportError>> {
        assert_eq!(request.mime(), "application/pdf");
        self.calls.set(self.calls.get() + 1);
        if self.hang {
            return future::pending().boxed_local();
        }
        future::ready(Ok(RawResponse::new(self.status, self.body.clone()))).boxed_local()
    }
}

#[derive(Debug, Clone, Default)]
struct Sampler(Rc<Cell<bool>>);

impl SamplerHandle for Sampler {
    fn cancel(self) {
        self.0.set(true);
    }
}

fn client(service: &Rc<CountingService>) -> AnalysisClient<Rc<CountingService>> {
    let timeout = if service.hang {
        Duration::from_millis(40)
    } else {
        Duration::from_secs(5)
    };
    AnalysisClient::new(
        service.clone(),
        ServiceConfig::new("http://analysis.test").with_timeout(timeout),
    )
}

/// Selects `file`, runs the upload like the view does and returns the
/// sampler flag so callers can check it was stopped.
async fn submit(
    workflow: &mut AnalysisWorkflow<Sampler>,
    service: &Rc<CountingService>,
    file: SelectedFile,
) -> Option<(Resolution, Rc<Cell<bool>>)> {
    let submission = match workflow.select(file) {
        Ok(SelectOutcome::Started(submission)) => submission,
        Ok(SelectOutcome::Busy) | Err(_) => return None,
    };
    let sampler = Sampler::default();
    let flag = sampler.0.clone();
    workflow.attach_sampler(submission.id, sampler);

    let mut last = 0;
    for increment in [3, 15, 9] {
        let sample = workflow.tick(submission.id, increment).expect("submission is live");
        let percent = sample.percent().expect("determinate after first tick");
        assert!(percent >= last && percent < 100);
        last = percent;
    }

    let outcome = client(service).analyze(submission.request).await;
    Some((workflow.resolve(submission.id, outcome), flag))
}

#[tokio::test]
async fn successful_analysis_reaches_results() {
    let service = CountingService::new(
        200,
        json!({
            "ocr": { "name": "Ada Lovelace", "course": "Analytical Engines" },
            "qr": { "found": true, "content": "https://registry.test/42", "validation": "valid" },
            "tamper_report": { "score": 0.12 },
            "trust_evaluation": { "trust_score": 85, "verdict": "Valid", "reasons": ["Issuer logo matched"] }
        }),
    );
    let mut workflow = AnalysisWorkflow::<Sampler>::default();

    let (resolution, sampler_stopped) = submit(
        &mut workflow,
        &service,
        SelectedFile::new("diploma.pdf", b"%PDF-1.7 ...".to_vec()),
    )
    .await
    .expect("submission starts");

    assert_eq!(resolution, Resolution::Completing);
    assert!(sampler_stopped.get());
    assert_eq!(workflow.progress(), Some(ProgressSample::COMPLETE));
    assert!(workflow.current_result().is_none(), "result waits for the grace delay");

    assert!(workflow.complete(workflow.submission_id()));
    let result = workflow.current_result().expect("succeeded");
    let trust = result.trust_evaluation.as_ref().expect("trust slice");
    assert_eq!(trust.trust_score, Some(85));
    let verdict = trust.verdict.as_deref().unwrap_or_default();
    assert_eq!(VerdictCategory::classify(verdict), VerdictCategory::Valid);
    assert_eq!(TrustTier::from_score(85), TrustTier::High);
    assert_eq!(service.calls.get(), 1);

    let report = build_report(workflow.current_result(), OffsetDateTime::now_utc()).expect("report");
    assert!(report.filename.starts_with("certificate-analysis-"));
    let value: serde_json::Value = serde_json::from_slice(&report.bytes).expect("json");
    assert_eq!(value["analysis"]["ocr"]["name"], "Ada Lovelace");
}

#[tokio::test]
async fn service_detail_is_surfaced() {
    let service = CountingService::new(400, json!({ "detail": "Could not read PDF pages" }));
    let mut workflow = AnalysisWorkflow::<Sampler>::default();

    let (resolution, sampler_stopped) = submit(
        &mut workflow,
        &service,
        SelectedFile::new("scan.PDF", b"%PDF-1.4".to_vec()),
    )
    .await
    .expect("submission starts");

    assert_eq!(resolution, Resolution::Failed);
    assert!(sampler_stopped.get());
    assert_eq!(
        workflow.state(),
        &WorkflowState::Failed {
            kind: ErrorKind::ServiceError,
            message: "Could not read PDF pages".to_string(),
        }
    );
    assert!(workflow.progress().is_none());
    assert!(matches!(
        build_report(workflow.current_result(), OffsetDateTime::now_utc()),
        Err(ReportError::NoResult)
    ));

    assert!(workflow.dismiss_error());
    assert_eq!(workflow.state(), &WorkflowState::Idle);
}

#[tokio::test]
async fn unresponsive_service_times_out() {
    let service = CountingService::unresponsive();
    let mut workflow = AnalysisWorkflow::<Sampler>::default();

    let (resolution, sampler_stopped) = submit(
        &mut workflow,
        &service,
        SelectedFile::new("diploma.pdf", b"%PDF-1.7".to_vec()),
    )
    .await
    .expect("submission starts");

    assert_eq!(resolution, Resolution::Failed);
    assert!(sampler_stopped.get());
    match workflow.state() {
        WorkflowState::Failed { kind, message } => {
            assert_eq!(*kind, ErrorKind::Timeout);
            assert!(message.contains("did not respond"), "{message}");
        }
        other => panic!("expected a timeout failure, got {other:?}"),
    }
    assert!(workflow.current_result().is_none());
    assert!(workflow.progress().is_none());
    assert_eq!(service.calls.get(), 1);
}

#[tokio::test]
async fn non_pdf_never_reaches_the_service() {
    let service = CountingService::new(200, json!({}));
    let mut workflow = AnalysisWorkflow::<Sampler>::default();

    let err = workflow
        .select(SelectedFile::new("diploma.png", vec![0x89, b'P', b'N', b'G']))
        .expect_err("png is rejected");
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
    assert_eq!(workflow.state(), &WorkflowState::Idle);

    let started = submit(
        &mut workflow,
        &service,
        SelectedFile::new("notes.txt", b"hello".to_vec()),
    )
    .await;
    assert!(started.is_none());
    assert_eq!(service.calls.get(), 0);
    assert_eq!(workflow.submission_id(), 0);
}

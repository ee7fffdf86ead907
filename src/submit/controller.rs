use std::fmt::{Display, Formatter};
use std::sync::Arc;

use gpui::SharedString;

use crate::process::{ClearFuture, IndicatorOptions, ProcessError, ProcessIndicator};
use crate::surface::{FormSurface, HtmlTarget};

use super::payload::encode_fields;
use super::response::SubmitResponse;
use super::transport::{SubmitTransport, TransportError};

/// Zero-argument collaborator re-evaluating input styling elsewhere on the
/// page; invoked after every well-formed response regardless of status.
pub type ThemeProbe = Arc<dyn Fn() + Send + Sync>;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SubmitError {
    TriggerNotFound(SharedString),
    EncodePayload(String),
    Indicator(ProcessError),
}

impl Display for SubmitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmitError::TriggerNotFound(selector) => {
                write!(f, "no trigger matches selector {selector:?}")
            }
            SubmitError::EncodePayload(error) => {
                write!(f, "failed to encode form payload: {error}")
            }
            SubmitError::Indicator(error) => write!(f, "process indicator failed: {error}"),
        }
    }
}

impl std::error::Error for SubmitError {}

impl From<ProcessError> for SubmitError {
    fn from(error: ProcessError) -> Self {
        SubmitError::Indicator(error)
    }
}

pub type SubmitResult<T> = Result<T, SubmitError>;

/// What happened once the request was in flight. Pre-flight failures are the
/// only `Err` returns of `submit`; everything after the wire is a report.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SubmitReport {
    Accepted(SubmitResponse),
    Rejected(SubmitResponse),
    TransportFailed(TransportError),
    MalformedResponse(String),
}

impl SubmitReport {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitReport::Accepted(_))
    }
}

pub struct SubmitOutcome {
    report: SubmitReport,
    settle: ClearFuture,
}

impl SubmitOutcome {
    pub fn report(&self) -> &SubmitReport {
        &self.report
    }

    pub fn is_accepted(&self) -> bool {
        self.report.is_accepted()
    }

    /// Drives the pending clear timer, then yields the report. The trigger is
    /// back to idle/enabled when this returns.
    pub async fn settled(self) -> crate::process::ProcessResult<SubmitReport> {
        self.settle.await?;
        Ok(self.report)
    }

    pub fn into_parts(self) -> (SubmitReport, ClearFuture) {
        (self.report, self.settle)
    }
}

/// Orchestrates one request/response cycle tied to a UI interaction: resolve
/// the trigger, run the indicator, POST the serialized container, inject the
/// returned markup into the target.
pub struct AsyncFormSubmit<T: SubmitTransport> {
    indicator: ProcessIndicator,
    transport: T,
    theme_probe: Option<ThemeProbe>,
}

impl<T: SubmitTransport> AsyncFormSubmit<T> {
    pub fn new(transport: T) -> Self {
        Self {
            indicator: ProcessIndicator::default(),
            transport,
            theme_probe: None,
        }
    }

    pub fn indicator_options(mut self, options: IndicatorOptions) -> Self {
        self.indicator = ProcessIndicator::new(options);
        self
    }

    pub fn theme_probe(mut self, probe: impl Fn() + Send + Sync + 'static) -> Self {
        self.theme_probe = Some(Arc::new(probe));
        self
    }

    pub fn indicator(&self) -> ProcessIndicator {
        self.indicator
    }

    pub async fn submit(
        &self,
        form: &FormSurface,
        url: &str,
        target: &HtmlTarget,
        trigger_selector: &str,
    ) -> SubmitResult<SubmitOutcome> {
        let trigger = form.find_trigger(trigger_selector).ok_or_else(|| {
            SubmitError::TriggerNotFound(SharedString::from(trigger_selector.to_owned()))
        })?;
        let body = encode_fields(form.fields())
            .map_err(|error| SubmitError::EncodePayload(error.to_string()))?;

        self.indicator.start(&trigger)?;

        let (report, settle) = match self.transport.post_form(url, &body).await {
            Ok(raw) => match SubmitResponse::parse(&raw) {
                Ok(response) => {
                    target.replace(response.html.clone());
                    let settle = if response.status {
                        self.indicator.success(&trigger)?
                    } else {
                        self.indicator.error(&trigger)?
                    };
                    if let Some(probe) = &self.theme_probe {
                        probe();
                    }
                    let report = if response.status {
                        SubmitReport::Accepted(response)
                    } else {
                        SubmitReport::Rejected(response)
                    };
                    (report, settle)
                }
                Err(error) => {
                    // Non-conforming body: leave the target alone, fail the
                    // indicator instead of defaulting the status to false.
                    let settle = self.indicator.error(&trigger)?;
                    (SubmitReport::MalformedResponse(error.to_string()), settle)
                }
            },
            Err(error) => {
                // A dropped request must not leave the control stuck in the
                // disabled processing state; it follows the error path.
                let settle = self.indicator.error(&trigger)?;
                (SubmitReport::TransportFailed(error), settle)
            }
        };

        Ok(SubmitOutcome { report, settle })
    }

    /// `submit`, then the full clear cycle including the delay.
    pub async fn submit_settled(
        &self,
        form: &FormSurface,
        url: &str,
        target: &HtmlTarget,
        trigger_selector: &str,
    ) -> SubmitResult<SubmitReport> {
        let outcome = self.submit(form, url, target, trigger_selector).await?;
        outcome.settled().await.map_err(SubmitError::Indicator)
    }
}

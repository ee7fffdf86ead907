pub mod components;
pub mod process;
pub mod submit;
pub mod surface;
pub mod theme;

#[cfg(test)]
mod test_public_api;

pub use process::{
    ClearFuture, DEFAULT_CLEAR_DELAY, IndicatorOptions, ProcessError, ProcessIndicator,
    ProcessResult, ProcessState,
};
pub use submit::{
    AsyncFormSubmit, HttpTransport, SubmitError, SubmitOutcome, SubmitReport, SubmitResponse,
    SubmitResult, SubmitTransport, ThemeProbe, TransportError,
};
pub use surface::{ElementHandle, ElementSnapshot, FormField, FormSurface, HtmlTarget};

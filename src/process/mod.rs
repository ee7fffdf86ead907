mod indicator;
mod state;


pub use indicator::{ClearFuture, DEFAULT_CLEAR_DELAY, IndicatorOptions, ProcessIndicator};
pub use state::{ProcessError, ProcessResult, ProcessState};

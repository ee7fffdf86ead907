mod controller;
mod payload;
mod response;
mod transport;


pub use controller::{
    AsyncFormSubmit, SubmitError, SubmitOutcome, SubmitReport, SubmitResult, ThemeProbe,
};
pub use payload::encode_fields;
pub use response::SubmitResponse;
pub use transport::{BoxedTransportFuture, HttpTransport, SubmitTransport, TransportError};

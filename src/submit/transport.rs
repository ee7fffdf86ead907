use std::fmt::{Display, Formatter};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TransportError {
    Network(String),
    Status(u16),
}

impl Display for TransportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TransportError::Network(error) => write!(f, "network error: {error}"),
            TransportError::Status(code) => write!(f, "server replied with status {code}"),
        }
    }
}

impl std::error::Error for TransportError {}

pub type BoxedTransportFuture<'a> =
    Pin<Box<dyn Future<Output = Result<String, TransportError>> + Send + 'a>>;

/// The network seam: POST a url-encoded body and yield the raw response
/// body. Swapped for a scripted double in tests.
pub trait SubmitTransport: Send + Sync + 'static {
    fn post_form<'a>(&'a self, url: &'a str, body: &'a str) -> BoxedTransportFuture<'a>;
}

impl<T> SubmitTransport for Arc<T>
where
    T: SubmitTransport,
{
    fn post_form<'a>(&'a self, url: &'a str, body: &'a str) -> BoxedTransportFuture<'a> {
        T::post_form(self, url, body)
    }
}

#[derive(Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl SubmitTransport for HttpTransport {
    fn post_form<'a>(&'a self, url: &'a str, body: &'a str) -> BoxedTransportFuture<'a> {
        Box::pin(async move {
            let response = self
                .client
                .post(url)
                .header(
                    reqwest::header::CONTENT_TYPE,
                    "application/x-www-form-urlencoded",
                )
                .body(body.to_owned())
                .send()
                .await
                .map_err(|error| TransportError::Network(error.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                return Err(TransportError::Status(status.as_u16()));
            }
            response
                .text()
                .await
                .map_err(|error| TransportError::Network(error.to_string()))
        })
    }
}

use serde::Deserialize;

/// Structured server reply to a form submission. Both fields are required;
/// a body that does not conform fails to parse and is reported as malformed
/// rather than silently defaulting to a falsy status. Fields beyond these
/// two are ignored.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct SubmitResponse {
    pub status: bool,
    pub html: String,
}

impl SubmitResponse {
    pub fn parse(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_conforming_body_and_ignores_extra_fields() {
        let response = SubmitResponse::parse(r#"{"status":true,"html":"<p>ok</p>","took_ms":12}"#)
            .expect("conforming body must parse");
        assert!(response.status);
        assert_eq!(response.html, "<p>ok</p>");
    }

    #[test]
    fn parse_rejects_missing_fields() {
        assert!(SubmitResponse::parse(r#"{"html":"<p>ok</p>"}"#).is_err());
        assert!(SubmitResponse::parse(r#"{"status":false}"#).is_err());
    }

    #[test]
    fn parse_rejects_non_boolean_status() {
        assert!(SubmitResponse::parse(r#"{"status":"yes","html":""}"#).is_err());
        assert!(SubmitResponse::parse(r#"{"status":1,"html":""}"#).is_err());
    }
}

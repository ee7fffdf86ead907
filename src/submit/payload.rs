use crate::surface::FormField;

/// Serializes the container's current field values the way a browser posts a
/// form: `name=value` pairs, url-encoded, in field order.
pub fn encode_fields(fields: &[FormField]) -> Result<String, serde_urlencoded::ser::Error> {
    let pairs = fields
        .iter()
        .map(|field| (field.name.as_ref(), field.value.as_ref()))
        .collect::<Vec<(&str, &str)>>();
    serde_urlencoded::to_string(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_pairs_in_field_order_with_escaping() {
        let fields = vec![
            FormField::new("name", "Jo Do"),
            FormField::new("note", "a&b"),
            FormField::new("email", "user@example.com"),
        ];
        let body = encode_fields(&fields).expect("encoding must succeed");
        assert_eq!(body, "name=Jo+Do&note=a%26b&email=user%40example.com");
    }

    #[test]
    fn keeps_duplicate_field_names() {
        let fields = vec![FormField::new("tag", "a"), FormField::new("tag", "b")];
        let body = encode_fields(&fields).expect("encoding must succeed");
        assert_eq!(body, "tag=a&tag=b");
    }

    #[test]
    fn empty_container_encodes_to_empty_body() {
        let body = encode_fields(&[]).expect("encoding must succeed");
        assert_eq!(body, "");
    }
}

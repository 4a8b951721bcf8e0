//! Service error blocks embedded in response documents.

use rusturk_model::ApiError;

use crate::document::XmlElement;

/// Collect every `Errors/Error` pair in the document.
///
/// Returns `None` when the document has no `Errors` element at all. An
/// `Errors` element without any `Error` children still yields `Some` with an
/// empty list, since its presence alone marks the request as failed. A
/// missing `Code` or `Message` is reported as an empty string.
#[must_use]
pub fn extract_errors(doc: &XmlElement) -> Option<Vec<ApiError>> {
    let containers = doc.find_all("Errors");
    if containers.is_empty() {
        return None;
    }

    let errors = containers
        .into_iter()
        .flat_map(|errors| errors.find_all("Error"))
        .map(|error| {
            ApiError::new(
                error.text_of("Code").unwrap_or_default(),
                error.text_of("Message").unwrap_or_default(),
            )
        })
        .collect();
    Some(errors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::parse_document;

    #[test]
    fn test_should_extract_single_error() {
        let doc = parse_document(
            b"<R><Errors><Error><Code>X</Code><Message>Y</Message></Error></Errors></R>",
        )
        .unwrap();
        let errors = extract_errors(&doc).unwrap();
        assert_eq!(errors, vec![ApiError::new("X", "Y")]);
    }

    #[test]
    fn test_should_extract_errors_in_document_order() {
        let doc = parse_document(
            b"<R><Request><IsValid>False</IsValid><Errors>\
              <Error><Code>A</Code><Message>first</Message></Error>\
              <Error><Code>B</Code><Message>second</Message></Error>\
              </Errors></Request></R>",
        )
        .unwrap();
        let codes: Vec<String> = extract_errors(&doc)
            .unwrap()
            .into_iter()
            .map(|e| e.code)
            .collect();
        assert_eq!(codes, vec!["A", "B"]);
    }

    #[test]
    fn test_should_report_empty_errors_container() {
        let doc = parse_document(b"<R><Errors/></R>").unwrap();
        assert_eq!(extract_errors(&doc), Some(Vec::new()));
    }

    #[test]
    fn test_should_return_none_without_errors() {
        let doc = parse_document(b"<R><IsValid>True</IsValid></R>").unwrap();
        assert!(extract_errors(&doc).is_none());
    }
}

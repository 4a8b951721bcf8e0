//! Question document serialization.

use std::io;

use quick_xml::Writer;
use quick_xml::events::BytesText;
use rusturk_model::types::ExternalQuestion;

use crate::error::XmlError;

/// Namespace of the `ExternalQuestion` schema.
pub const EXTERNAL_QUESTION_NAMESPACE: &str =
    "http://mechanicalturk.amazonaws.com/AWSMechanicalTurkDataSchemas/2006-07-14/ExternalQuestion.xsd";

/// Render an `ExternalQuestion` document for the `Question` parameter.
///
/// The URL is XML-escaped, so query strings containing `&` stay valid.
///
/// # Example output
///
/// ```xml
/// <ExternalQuestion xmlns="http://mechanicalturk.amazonaws.com/AWSMechanicalTurkDataSchemas/2006-07-14/ExternalQuestion.xsd">
///   <ExternalURL>https://example.com/task?id=1&amp;lang=en</ExternalURL>
///   <FrameHeight>800</FrameHeight>
/// </ExternalQuestion>
/// ```
///
/// # Errors
///
/// Returns [`XmlError::InvalidValue`] for an empty URL or a zero frame height.
pub fn external_question_xml(question: &ExternalQuestion) -> Result<String, XmlError> {
    if question.external_url.trim().is_empty() {
        return Err(XmlError::InvalidValue("ExternalURL must not be empty".to_owned()));
    }
    if question.frame_height == 0 {
        return Err(XmlError::InvalidValue("FrameHeight must be positive".to_owned()));
    }

    let mut buf = Vec::with_capacity(256);
    write_external_question(&mut buf, question)?;
    String::from_utf8(buf).map_err(|e| XmlError::ParseError(e.to_string()))
}

fn write_external_question(buf: &mut Vec<u8>, question: &ExternalQuestion) -> io::Result<()> {
    let mut writer = Writer::new(buf);
    let frame_height = question.frame_height.to_string();

    writer
        .create_element("ExternalQuestion")
        .with_attribute(("xmlns", EXTERNAL_QUESTION_NAMESPACE))
        .write_inner_content(|w| {
            w.create_element("ExternalURL")
                .write_text_content(BytesText::new(&question.external_url))?;
            w.create_element("FrameHeight")
                .write_text_content(BytesText::new(&frame_height))?;
            Ok(())
        })?;

    Ok(())
}

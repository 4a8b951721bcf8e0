//! A small owned element tree for response documents.
//!
//! Responses are parsed once into an [`XmlElement`] tree. Elements are keyed
//! by local name, so namespace prefixes never affect lookups. Lookups search
//! depth-first in document order with the starting element included, and the
//! first match wins.

use std::borrow::Cow;

use quick_xml::Reader;
use quick_xml::events::{BytesRef, Event};

use crate::error::XmlError;

/// One element of a parsed response document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlElement {
    /// Local name, without any namespace prefix.
    pub name: String,
    /// Character data directly inside the element, entities resolved and
    /// surrounding whitespace trimmed.
    pub text: String,
    /// Child elements in document order.
    pub children: Vec<XmlElement>,
}

impl XmlElement {
    /// Create an empty element.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// First element named `name`, searching `self` and then its descendants.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&XmlElement> {
        if self.name == name {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(name))
    }

    /// Every element named `name` in document order, `self` included.
    #[must_use]
    pub fn find_all(&self, name: &str) -> Vec<&XmlElement> {
        let mut found = Vec::new();
        self.collect(name, &mut found);
        found
    }

    /// First direct child named `name`.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&XmlElement> {
        self.children.iter().find(|child| child.name == name)
    }

    /// Text of the first element named `name`.
    #[must_use]
    pub fn text_of(&self, name: &str) -> Option<&str> {
        self.find(name).map(|el| el.text.as_str())
    }

    fn collect<'a>(&'a self, name: &str, found: &mut Vec<&'a XmlElement>) {
        if self.name == name {
            found.push(self);
        }
        for child in &self.children {
            child.collect(name, found);
        }
    }
}

/// Parse a response body into its root element.
///
/// # Errors
///
/// Returns [`XmlError`] if the body is not well-formed XML or has no root
/// element.
pub fn parse_document(body: &[u8]) -> Result<XmlElement, XmlError> {
    let mut reader = Reader::from_reader(body);
    let mut stack: Vec<XmlElement> = Vec::new();
    let mut root: Option<XmlElement> = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                stack.push(XmlElement::new(utf8(e.local_name().as_ref())?));
            }
            Event::Empty(e) => {
                let element = XmlElement::new(utf8(e.local_name().as_ref())?);
                attach(&mut stack, &mut root, element)?;
            }
            Event::End(_) => {
                let Some(mut element) = stack.pop() else {
                    return Err(XmlError::ParseError("unbalanced end tag".to_owned()));
                };
                let trimmed = element.text.trim();
                if trimmed.len() != element.text.len() {
                    element.text = trimmed.to_owned();
                }
                attach(&mut stack, &mut root, element)?;
            }
            Event::Text(e) => {
                if let Some(top) = stack.last_mut() {
                    let decoded = e
                        .decode()
                        .map_err(|err| XmlError::ParseError(err.to_string()))?;
                    top.text.push_str(&decoded);
                }
            }
            Event::CData(e) => {
                if let Some(top) = stack.last_mut() {
                    top.text.push_str(utf8(&e.into_inner())?);
                }
            }
            Event::GeneralRef(e) => {
                if let Some(top) = stack.last_mut() {
                    top.text.push_str(&resolve_reference(&e)?);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(open) = stack.pop() {
        return Err(XmlError::UnexpectedEof(open.name));
    }
    root.ok_or_else(|| XmlError::MissingElement("document root".to_owned()))
}

fn attach(
    stack: &mut [XmlElement],
    root: &mut Option<XmlElement>,
    element: XmlElement,
) -> Result<(), XmlError> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(element);
        return Ok(());
    }
    if root.is_some() {
        return Err(XmlError::ParseError(format!(
            "second root element <{}>",
            element.name
        )));
    }
    *root = Some(element);
    Ok(())
}

fn utf8(bytes: &[u8]) -> Result<&str, XmlError> {
    std::str::from_utf8(bytes).map_err(|err| XmlError::ParseError(err.to_string()))
}

/// Resolve `&name;` to its replacement text.
///
/// Only the five predefined entities and numeric character references exist
/// in response documents.
fn resolve_reference(reference: &BytesRef<'_>) -> Result<Cow<'static, str>, XmlError> {
    let name = utf8(reference)?;
    let replacement = match name {
        "amp" => "&",
        "lt" => "<",
        "gt" => ">",
        "quot" => "\"",
        "apos" => "'",
        _ => {
            let code = if let Some(hex) = name
                .strip_prefix("#x")
                .or_else(|| name.strip_prefix("#X"))
            {
                u32::from_str_radix(hex, 16).ok()
            } else {
                name.strip_prefix('#').and_then(|dec| dec.parse::<u32>().ok())
            };
            let ch = code
                .and_then(char::from_u32)
                .ok_or_else(|| XmlError::ParseError(format!("unknown entity &{name};")))?;
            return Ok(Cow::Owned(ch.to_string()));
        }
    };
    Ok(Cow::Borrowed(replacement))
}

//! SVG document implementation
//!
//! Well-formedness is checked with roxmltree, which is strict about
//! nesting, duplicate attributes and namespace prefixes. The text is then
//! tokenized with quick-xml into owned events so it can be edited and
//! written back. Events that are never edited are written out exactly as
//! they were read.
//!
//! Attribute values are reported the way a DOM reports them: roxmltree has
//! already expanded character references and entities declared in an
//! internal DTD subset, so unprefixed values are taken from its tree.

use quick_xml::events::{BytesStart, Event};
use quick_xml::{Reader, Writer};
use roxmltree::{Document as XmlDocument, ParsingOptions};

use super::{MarkupDocument, MarkupError, Result};
use crate::models::ElementView;

const BOM: &str = "\u{feff}";

/// Unprefixed attribute values of one element, as expanded by roxmltree
type ExpandedValues = Vec<(String, String)>;

/// An SVG (or any XML) document held as a flat event stream
#[derive(Clone, Debug)]
pub struct SvgDocument {
    events: Vec<Event<'static>>,

    /// Positions in `events` of indexed elements (root excluded), pre-order
    element_slots: Vec<usize>,

    /// Parallel to `element_slots`
    expanded: Vec<ExpandedValues>,

    /// Input started with a byte order mark
    bom: bool,
}

impl SvgDocument {
    /// Check well-formedness and collect expanded values of indexed elements
    fn expand_values(text: &str) -> Result<Vec<ExpandedValues>> {
        // SVG files exported by drawing tools commonly carry a DOCTYPE
        let options = ParsingOptions {
            allow_dtd: true,
            ..ParsingOptions::default()
        };

        let doc = XmlDocument::parse_with_options(text, options)
            .map_err(|e| MarkupError::InvalidXml(e.to_string()))?;

        let values = doc
            .root_element()
            .descendants()
            .filter(|node| node.is_element())
            .skip(1)
            .map(|node| {
                node.attributes()
                    .filter(|attr| attr.namespace().is_none())
                    .map(|attr| (attr.name().to_string(), attr.value().to_string()))
                    .collect()
            })
            .collect();

        Ok(values)
    }

    fn tokenize(text: &str) -> Result<Vec<Event<'static>>> {
        let mut reader = Reader::from_str(text);
        let mut events = Vec::new();

        loop {
            match reader.read_event() {
                Ok(Event::Eof) => break,
                Ok(event) => events.push(event.into_owned()),
                Err(e) => {
                    return Err(MarkupError::Tokenize {
                        position: reader.buffer_position(),
                        message: e.to_string(),
                    })
                }
            }
        }

        Ok(events)
    }

    fn start_at(&self, slot: usize) -> Option<&BytesStart<'static>> {
        match self.events.get(slot)? {
            Event::Start(start) | Event::Empty(start) => Some(start),
            _ => None,
        }
    }

    fn view_of(start: &BytesStart<'_>, expanded: Option<&ExpandedValues>) -> ElementView {
        let mut view = ElementView::new(String::from_utf8_lossy(start.name().as_ref()));

        for attr in start.attributes() {
            let attr = match attr {
                Ok(attr) => attr,
                Err(e) => {
                    log::warn!("Skipping malformed attribute on <{}>: {}", view.tag, e);
                    continue;
                }
            };

            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let dom_value = expanded
                .and_then(|values| values.iter().find(|(name, _)| *name == key))
                .map(|(_, value)| value.clone());
            let value = match dom_value {
                Some(value) => value,
                None => match attr.unescape_value() {
                    Ok(value) => value.into_owned(),
                    Err(_) => String::from_utf8_lossy(&attr.value).into_owned(),
                },
            };
            view.attributes.push((key, value));
        }

        view
    }

    /// Rebuild `start` with `name` set to `value`, keeping other attributes in order
    fn with_attribute(start: &BytesStart<'_>, name: &str, value: &str) -> Result<BytesStart<'static>> {
        let mut rebuilt = start.clone().into_owned();
        rebuilt.clear_attributes();

        let mut written = false;
        for attr in start.attributes() {
            let attr = attr.map_err(|e| MarkupError::Attribute(e.to_string()))?;

            if attr.key.as_ref() == name.as_bytes() {
                if !written {
                    rebuilt.push_attribute((name, value));
                    written = true;
                }
                continue;
            }

            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            match attr.unescape_value() {
                // Re-escaped so the value stays valid inside double quotes
                Ok(unescaped) => rebuilt.push_attribute((key.as_str(), unescaped.as_ref())),
                Err(_) => rebuilt.push_attribute(attr),
            }
        }

        if !written {
            rebuilt.push_attribute((name, value));
        }

        Ok(rebuilt)
    }
}

impl MarkupDocument for SvgDocument {
    fn parse(text: &str) -> Result<Self> {
        let (body, bom) = match text.strip_prefix(BOM) {
            Some(body) => (body, true),
            None => (text, false),
        };

        let expanded = Self::expand_values(body)?;
        let events = Self::tokenize(body)?;

        let mut slots = events
            .iter()
            .enumerate()
            .filter(|(_, event)| matches!(event, Event::Start(_) | Event::Empty(_)))
            .map(|(slot, _)| slot);

        // The first element in the stream is the root canvas
        if slots.next().is_none() {
            return Err(MarkupError::MissingRoot);
        }
        let element_slots: Vec<usize> = slots.collect();

        if expanded.len() != element_slots.len() {
            log::warn!(
                "Parsers disagree on element count ({} vs {})",
                expanded.len(),
                element_slots.len()
            );
        }

        Ok(Self {
            events,
            element_slots,
            expanded,
            bom,
        })
    }

    fn serialize(&self) -> Result<String> {
        let mut out = Vec::new();
        if self.bom {
            out.extend_from_slice(BOM.as_bytes());
        }
        let mut writer = Writer::new(out);

        for event in &self.events {
            writer
                .write_event(event)
                .map_err(|e| MarkupError::Write(e.to_string()))?;
        }

        String::from_utf8(writer.into_inner()).map_err(|e| MarkupError::Write(e.to_string()))
    }

    fn elements(&self) -> Vec<ElementView> {
        self.element_slots
            .iter()
            .enumerate()
            .filter_map(|(index, &slot)| {
                self.start_at(slot)
                    .map(|start| Self::view_of(start, self.expanded.get(index)))
            })
            .collect()
    }

    fn element_count(&self) -> usize {
        self.element_slots.len()
    }

    fn set_attribute(&mut self, index: usize, name: &str, value: &str) -> Result<bool> {
        let Some(&slot) = self.element_slots.get(index) else {
            return Ok(false);
        };

        let rebuilt = match &self.events[slot] {
            Event::Start(start) => Event::Start(Self::with_attribute(start, name, value)?),
            Event::Empty(start) => Event::Empty(Self::with_attribute(start, name, value)?),
            _ => return Ok(false),
        };
        self.events[slot] = rebuilt;

        if let Some(values) = self.expanded.get_mut(index) {
            match values.iter_mut().find(|(key, _)| key == name) {
                Some(entry) => entry.1 = value.to_string(),
                None => values.push((name.to_string(), value.to_string())),
            }
        }

        Ok(true)
    }
}

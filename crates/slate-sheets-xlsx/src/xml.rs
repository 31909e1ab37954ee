//! Low-level XML tag primitives
//!
//! A thin layer over the quick-xml event writer exposing the handful of
//! operations the worksheet serializer composes: declaration, start tag,
//! end tag, self-closing tag and a text-bearing data element. Attributes
//! are passed as ordered slices because attribute order is part of the
//! document shape Excel expects; escaping is quick-xml's job.

use std::io::Write;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::error::XlsxResult;

/// Ordered XML writer over any `io::Write` sink
pub struct XmlWriter<W: Write> {
    inner: Writer<W>,
}

impl<W: Write> XmlWriter<W> {
    /// Create a writer over a sink
    pub fn new(sink: W) -> Self {
        Self {
            inner: Writer::new(sink),
        }
    }

    /// Write the XML declaration
    ///
    /// XLSX parts put the root element on the line after the declaration;
    /// everything else is written without whitespace.
    pub fn declaration(&mut self) -> XlsxResult<()> {
        self.inner
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))?;
        self.inner.get_mut().write_all(b"\n")?;
        Ok(())
    }

    /// Write a start tag with attributes in the given order
    pub fn start_element(&mut self, name: &str, attrs: &[(&str, &str)]) -> XlsxResult<()> {
        let mut start = BytesStart::new(name);
        for &(key, value) in attrs {
            start.push_attribute((key, value));
        }
        self.inner.write_event(Event::Start(start))?;
        Ok(())
    }

    /// Write an end tag
    pub fn end_element(&mut self, name: &str) -> XlsxResult<()> {
        self.inner.write_event(Event::End(BytesEnd::new(name)))?;
        Ok(())
    }

    /// Write a self-closing tag with attributes in the given order
    pub fn empty_element(&mut self, name: &str, attrs: &[(&str, &str)]) -> XlsxResult<()> {
        let mut empty = BytesStart::new(name);
        for &(key, value) in attrs {
            empty.push_attribute((key, value));
        }
        self.inner.write_event(Event::Empty(empty))?;
        Ok(())
    }

    /// Write an element containing escaped text
    pub fn data_element(&mut self, name: &str, text: &str, attrs: &[(&str, &str)]) -> XlsxResult<()> {
        self.start_element(name, attrs)?;
        self.inner.write_event(Event::Text(BytesText::new(text)))?;
        self.end_element(name)
    }

    /// Consume the writer and return the underlying sink
    pub fn into_inner(self) -> W {
        self.inner.into_inner()
    }
}

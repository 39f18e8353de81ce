//! EC2 XML response handling.
//!
//! Responses are small, so they are read into a tiny DOM first and the typed
//! results are pulled out of it by [`XmlValue::read_xml`]. Lists always use
//! the EC2 `<fooSet><item>..</item></fooSet>` layout.

use crate::config::XML_NAMESPACE;
use crate::error::{Ec2Error, Ec2Result};
use crate::protocol::timestamp;
use chrono::{DateTime, Utc};
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};
use std::str::FromStr;

/// Element name of a list entry.
pub const LIST_ITEM: &str = "item";

/// A parsed XML element. Namespace prefixes are dropped and text content is
/// unescaped. Leaf text is kept verbatim; whitespace between child elements
/// is discarded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlNode {
    pub name: String,
    pub text: String,
    pub children: Vec<XmlNode>,
}

fn local_name(raw: &[u8]) -> Ec2Result<String> {
    std::str::from_utf8(raw)
        .map(str::to_string)
        .map_err(|e| Ec2Error::Xml(format!("element name is not UTF-8: {}", e)))
}

impl XmlNode {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    /// Parse a document and return its root element.
    pub fn parse(input: &str) -> Ec2Result<Self> {
        let mut reader = Reader::from_str(input);

        let mut stack: Vec<XmlNode> = Vec::new();
        let mut root: Option<XmlNode> = None;

        loop {
            match reader.read_event()? {
                Event::Start(e) => {
                    stack.push(XmlNode::new(&local_name(e.local_name().as_ref())?));
                }
                Event::Empty(e) => {
                    let node = XmlNode::new(&local_name(e.local_name().as_ref())?);
                    match stack.last_mut() {
                        Some(parent) => parent.children.push(node),
                        None if root.is_none() => root = Some(node),
                        None => return Err(Ec2Error::Xml("multiple root elements".into())),
                    }
                }
                Event::Text(e) => {
                    if let Some(node) = stack.last_mut() {
                        node.text.push_str(&e.unescape()?);
                    }
                }
                Event::CData(e) => {
                    if let Some(node) = stack.last_mut() {
                        node.text.push_str(&String::from_utf8_lossy(&e.into_inner()));
                    }
                }
                Event::End(_) => {
                    let mut node = stack
                        .pop()
                        .ok_or_else(|| Ec2Error::Xml("unexpected closing tag".into()))?;
                    if !node.children.is_empty() && node.text.trim().is_empty() {
                        node.text.clear();
                    }
                    match stack.last_mut() {
                        Some(parent) => parent.children.push(node),
                        None if root.is_none() => root = Some(node),
                        None => return Err(Ec2Error::Xml("multiple root elements".into())),
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if let Some(open) = stack.last() {
            return Err(Ec2Error::Xml(format!("unclosed element <{}>", open.name)));
        }
        root.ok_or_else(|| Ec2Error::Xml("document has no root element".into()))
    }

    /// First child element called `name`.
    pub fn child(&self, name: &str) -> Option<&XmlNode> {
        self.children.iter().find(|c| c.name == name)
    }

    pub fn child_text(&self, name: &str) -> Option<&str> {
        self.child(name).map(|c| c.text.as_str())
    }

    /// `<item>` children of a list element.
    pub fn items(&self) -> impl Iterator<Item = &XmlNode> {
        self.children.iter().filter(|c| c.name == LIST_ITEM)
    }
}

/// Incremental XML writer used to render response documents.
pub struct XmlWriter {
    inner: Writer<Vec<u8>>,
}

impl Default for XmlWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl XmlWriter {
    pub fn new() -> Self {
        Self {
            inner: Writer::new(Vec::new()),
        }
    }

    pub fn start(&mut self, name: &str) -> Ec2Result<()> {
        self.inner.write_event(Event::Start(BytesStart::new(name)))?;
        Ok(())
    }

    pub fn start_with_namespace(&mut self, name: &str, namespace: &str) -> Ec2Result<()> {
        let mut start = BytesStart::new(name);
        start.push_attribute(("xmlns", namespace));
        self.inner.write_event(Event::Start(start))?;
        Ok(())
    }

    pub fn end(&mut self, name: &str) -> Ec2Result<()> {
        self.inner.write_event(Event::End(BytesEnd::new(name)))?;
        Ok(())
    }

    pub fn text(&mut self, value: &str) -> Ec2Result<()> {
        self.inner.write_event(Event::Text(BytesText::new(value)))?;
        Ok(())
    }

    /// `<name>value</name>`
    pub fn element(&mut self, name: &str, value: &str) -> Ec2Result<()> {
        self.start(name)?;
        self.text(value)?;
        self.end(name)
    }

    pub fn finish(self) -> Ec2Result<String> {
        String::from_utf8(self.inner.into_inner())
            .map_err(|e| Ec2Error::Xml(format!("writer produced invalid UTF-8: {}", e)))
    }
}

/// A value that can be read from, and written as, an XML element.
pub trait XmlValue: Sized {
    fn read_xml(node: &XmlNode) -> Ec2Result<Self>;

    fn write_xml(&self, name: &str, writer: &mut XmlWriter) -> Ec2Result<()>;
}

/// A structure whose members can be written without an enclosing element.
/// Response documents put the result members straight under the root.
pub trait XmlStruct: XmlValue {
    fn write_members(&self, writer: &mut XmlWriter) -> Ec2Result<()>;
}

/// Read the optional child `name` of `node` as a `T`.
pub fn read_member<T: XmlValue>(node: &XmlNode, name: &str) -> Ec2Result<Option<T>> {
    node.child(name).map(T::read_xml).transpose()
}

fn parse_text<T>(node: &XmlNode) -> Ec2Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    node.text
        .trim()
        .parse::<T>()
        .map_err(|e| Ec2Error::unmarshall(&node.name, e))
}

macro_rules! display_xml_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl XmlValue for $ty {
                fn read_xml(node: &XmlNode) -> Ec2Result<Self> {
                    parse_text(node)
                }

                fn write_xml(&self, name: &str, writer: &mut XmlWriter) -> Ec2Result<()> {
                    writer.element(name, &self.to_string())
                }
            }
        )*
    };
}

display_xml_value!(bool, i32, i64, f32, f64);

impl XmlValue for String {
    fn read_xml(node: &XmlNode) -> Ec2Result<Self> {
        Ok(node.text.clone())
    }

    fn write_xml(&self, name: &str, writer: &mut XmlWriter) -> Ec2Result<()> {
        writer.element(name, self)
    }
}

impl XmlValue for DateTime<Utc> {
    fn read_xml(node: &XmlNode) -> Ec2Result<Self> {
        timestamp::parse(node.text.trim()).map_err(|e| Ec2Error::unmarshall(&node.name, e))
    }

    fn write_xml(&self, name: &str, writer: &mut XmlWriter) -> Ec2Result<()> {
        writer.element(name, &timestamp::format(self))
    }
}

impl<T: XmlValue> XmlValue for Vec<T> {
    fn read_xml(node: &XmlNode) -> Ec2Result<Self> {
        node.items().map(T::read_xml).collect()
    }

    fn write_xml(&self, name: &str, writer: &mut XmlWriter) -> Ec2Result<()> {
        writer.start(name)?;
        for item in self {
            item.write_xml(LIST_ITEM, writer)?;
        }
        writer.end(name)
    }
}

/// Render a complete EC2 response document for `action`.
///
/// ```text
/// <DescribeInstancesResponse xmlns="http://ec2.amazonaws.com/doc/2016-11-15/">
///   <requestId>..</requestId>
///   ..result members..
/// </DescribeInstancesResponse>
/// ```
pub fn write_response<T: XmlStruct>(action: &str, request_id: &str, result: &T) -> Ec2Result<String> {
    let root = format!("{}Response", action);
    let mut writer = XmlWriter::new();
    writer.start_with_namespace(&root, XML_NAMESPACE)?;
    writer.element("requestId", request_id)?;
    result.write_members(&mut writer)?;
    writer.end(&root)?;
    writer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_nested_document() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<DescribeInstancesResponse xmlns="http://ec2.amazonaws.com/doc/2016-11-15/">
    <requestId>8f7724cf-496f-496e-8fe3-example</requestId>
    <reservationSet>
        <item><reservationId>r-1234567890abcdef0</reservationId></item>
        <item><reservationId>r-0987654321fedcba0</reservationId></item>
    </reservationSet>
</DescribeInstancesResponse>"#;
        let root = XmlNode::parse(xml).unwrap();
        assert_eq!(root.name, "DescribeInstancesResponse");
        assert_eq!(root.child_text("requestId"), Some("8f7724cf-496f-496e-8fe3-example"));
        let ids: Vec<&str> = root
            .child("reservationSet")
            .unwrap()
            .items()
            .filter_map(|i| i.child_text("reservationId"))
            .collect();
        assert_eq!(ids, vec!["r-1234567890abcdef0", "r-0987654321fedcba0"]);
    }

    #[test]
    fn parse_strips_prefixes_and_unescapes() {
        let xml = r#"<ec2:Root xmlns:ec2="urn:x"><ec2:name> a &amp; b </ec2:name><data><![CDATA[<raw>]]></data><empty/></ec2:Root>"#;
        let root = XmlNode::parse(xml).unwrap();
        assert_eq!(root.name, "Root");
        assert_eq!(root.child_text("name"), Some(" a & b "));
        assert_eq!(root.child_text("data"), Some("<raw>"));
        assert_eq!(root.child_text("empty"), Some(""));
    }

    #[test]
    fn indentation_is_not_text() {
        let root = XmlNode::parse("<r>\n  <tagSet>\n    <item><value>  padded </value></item>\n  </tagSet>\n</r>").unwrap();
        assert_eq!(root.text, "");
        let set = root.child("tagSet").unwrap();
        assert_eq!(set.text, "");
        assert_eq!(set.items().next().and_then(|i| i.child_text("value")), Some("  padded "));
    }

    #[test]
    fn string_keeps_surrounding_spaces() {
        let mut writer = XmlWriter::new();
        " two words ".to_string().write_xml("description", &mut writer).unwrap();
        let node = XmlNode::parse(&writer.finish().unwrap()).unwrap();
        assert_eq!(String::read_xml(&node).unwrap(), " two words ");
        assert_eq!(i32::read_xml(&XmlNode::parse("<n> 7 </n>").unwrap()).unwrap(), 7);
    }

    #[test]
    fn parse_rejects_malformed() {
        assert!(matches!(XmlNode::parse("<a><b></a>"), Err(Ec2Error::Xml(_))));
        assert!(matches!(XmlNode::parse("<a>"), Err(Ec2Error::Xml(_))));
        assert!(matches!(XmlNode::parse(""), Err(Ec2Error::Xml(_))));
    }

    #[test]
    fn scalar_read_errors_name_element() {
        let node = XmlNode {
            name: "amiLaunchIndex".into(),
            text: "zero".into(),
            children: vec![],
        };
        match i32::read_xml(&node) {
            Err(Ec2Error::Unmarshall { path, .. }) => assert_eq!(path, "amiLaunchIndex"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn bool_and_float_scalars() {
        let root = XmlNode::parse("<r><ebsOptimized>true</ebsOptimized><fixedPrice>0.5</fixedPrice></r>").unwrap();
        assert_eq!(read_member::<bool>(&root, "ebsOptimized").unwrap(), Some(true));
        assert_eq!(read_member::<f32>(&root, "fixedPrice").unwrap(), Some(0.5));
        assert_eq!(read_member::<bool>(&root, "missing").unwrap(), None);
    }

    #[test]
    fn list_writes_items() {
        let mut writer = XmlWriter::new();
        vec!["a".to_string(), "b<".to_string()].write_xml("valueSet", &mut writer).unwrap();
        let xml = writer.finish().unwrap();
        assert_eq!(xml, "<valueSet><item>a</item><item>b&lt;</item></valueSet>");

        let node = XmlNode::parse(&xml).unwrap();
        assert_eq!(
            Vec::<String>::read_xml(&node).unwrap(),
            vec!["a".to_string(), "b<".to_string()]
        );
    }

    #[test]
    fn timestamp_element() {
        let node = XmlNode::parse("<launchTime>2020-05-01T10:11:12.000Z</launchTime>").unwrap();
        let ts = DateTime::<Utc>::read_xml(&node).unwrap();
        assert_eq!(timestamp::format(&ts), "2020-05-01T10:11:12.000Z");
    }
}

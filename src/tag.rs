//! Paired (`<x>...</x>`) and unpaired (`<x/>`) tags, and sibling
//! sequences.

use std::{io::Write, sync::atomic::{AtomicBool, Ordering}};
use anyhow::Result;
use chj_util::{warn, warn_if};
use kstring::KString;

use crate::{Print, metadb,
            attributes::{Attributes, trim_markup, trim_markup_end},
            myfrom::MyFrom, node::Node};

/// Report attribute values that `TgPaired::new` drops, and attribute
/// names missing from `phtml::at`, on stderr.
pub static PHTML_TRACE: AtomicBool = AtomicBool::new(false);

fn trace_attribute_names(tag_name: &str, attributes: Option<&Attributes>) {
    if !PHTML_TRACE.load(Ordering::Relaxed) {
        return
    }
    if let Some(attributes) = attributes {
        match metadb() {
            Ok(db) => for name in attributes.unknown_names(db) {
                warn!("unknown attribute name {:?} on element {:?}", name, tag_name);
            },
            Err(e) => warn!("can't check attribute names: {}", e),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Tag {
    Paired(TgPaired),
    Unpaired(TgUnpaired),
}

impl Tag {
    pub fn name(&self) -> &str {
        match self {
            Tag::Paired(t) => t.name(),
            Tag::Unpaired(t) => t.name(),
        }
    }

    pub fn attributes(&self) -> Option<&Attributes> {
        match self {
            Tag::Paired(t) => t.attributes(),
            Tag::Unpaired(t) => t.attributes(),
        }
    }
}

impl Print for Tag {
    fn print_html_fragment(&self, out: &mut impl Write) -> Result<()> {
        match self {
            Tag::Paired(t) => t.print_html_fragment(out),
            Tag::Unpaired(t) => t.print_html_fragment(out),
        }
    }
}

// `name` followed by the attributes clause, trimmed as a whole.
fn name_and_attributes(name: &str, attributes: &Attributes) -> String {
    let s = format!("{name} {}", attributes.to_attribute_string());
    trim_markup(&s).to_string()
}


/// Element with opening and closing tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TgPaired {
    name: KString,
    attributes: Option<Attributes>,
    children: Vec<Node>,
}

impl TgPaired {
    /// `any` is either the attributes or the first child; which one
    /// is decided here, once. Attributes values among `elements` are
    /// dropped. If `any` is None, `elements` are ignored.
    pub fn new<N>(name: N, any: Option<Node>, elements: Vec<Node>) -> Self
        where KString: MyFrom<N>
    {
        let name = KString::myfrom(name);
        let (attributes, children) = match any {
            None => (None, Vec::new()),
            Some(Node::Attributes(attributes)) => (Some(attributes), elements),
            Some(first) => {
                let mut children = Vec::with_capacity(elements.len() + 1);
                children.push(first);
                children.extend(elements);
                (None, children)
            }
        };
        let children = children.into_iter().filter(|node| {
            let keep = !node.is_attributes();
            if !keep {
                warn_if!(PHTML_TRACE,
                         "dropping attributes {:?} given as child of element {:?}",
                         node.as_string(), name.as_str());
            }
            keep
        }).collect();
        trace_attribute_names(&name, attributes.as_ref());
        TgPaired { name, attributes, children }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> Option<&Attributes> {
        self.attributes.as_ref()
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }
}

impl Print for TgPaired {
    fn print_html_fragment(&self, out: &mut impl Write) -> Result<()> {
        out.write_all(b"<")?;
        match &self.attributes {
            Some(attributes) =>
                out.write_all(name_and_attributes(&self.name, attributes).as_bytes())?,
            None => out.write_all(self.name.as_bytes())?,
        }
        out.write_all(b">\n")?;
        for child in &self.children {
            child.print_html_fragment(out)?;
            out.write_all(b"\n")?;
        }
        out.write_all(b"</")?;
        out.write_all(self.name.as_bytes())?;
        out.write_all(b">")?;
        Ok(())
    }
}


/// Self-closing element. Takes no children.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TgUnpaired {
    name: KString,
    attributes: Option<Attributes>,
}

impl TgUnpaired {
    pub fn new<N>(name: N, attributes: Option<Attributes>) -> Self
        where KString: MyFrom<N>
    {
        let name = KString::myfrom(name);
        trace_attribute_names(&name, attributes.as_ref());
        TgUnpaired { name, attributes }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> Option<&Attributes> {
        self.attributes.as_ref()
    }
}

impl Print for TgUnpaired {
    fn print_html_fragment(&self, out: &mut impl Write) -> Result<()> {
        out.write_all(b"<")?;
        match &self.attributes {
            Some(attributes) =>
                out.write_all(name_and_attributes(&self.name, attributes).as_bytes())?,
            None => out.write_all(trim_markup(&self.name).as_bytes())?,
        }
        out.write_all(b"/>")?;
        Ok(())
    }
}


/// Siblings, one per line, e.g. a doctype line followed by `<html>`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Tags {
    items: Vec<Node>,
}

impl Tags {
    pub fn new(items: Vec<Node>) -> Self {
        Tags { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[Node] {
        &self.items
    }
}

impl Print for Tags {
    fn print_html_fragment(&self, out: &mut impl Write) -> Result<()> {
        let mut buf = Vec::new();
        for item in &self.items {
            item.print_html_fragment(&mut buf)?;
            buf.push(b'\n');
        }
        let s = String::from_utf8(buf)?;
        out.write_all(trim_markup_end(&s).as_bytes())?;
        Ok(())
    }
}

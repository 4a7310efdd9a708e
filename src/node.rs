//! The renderable values that make up a tree.

use std::io::Write;
use anyhow::Result;
use kstring::KString;

use crate::{Print, attributes::Attributes, tag::{Tag, TgPaired, TgUnpaired, Tags}};

/// Literal text, emitted unchanged (no escaping).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Text(KString);

impl Text {
    pub fn new(s: KString) -> Self {
        Text(s)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Print for Text {
    fn print_html_fragment(&self, out: &mut impl Write) -> Result<()> {
        out.write_all(self.0.as_bytes())?;
        Ok(())
    }
}


#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Node {
    Text(Text),
    Attributes(Attributes),
    Tag(Tag),
    Tags(Tags),
}

impl Node {
    /// Whether this value fills the attributes slot of a paired tag
    /// (as opposed to being its first child).
    pub fn is_attributes(&self) -> bool {
        matches!(self, Node::Attributes(_))
    }

    /// The rendered string. Rendering into memory can't fail.
    pub fn as_string(&self) -> String {
        self.to_html_fragment_string().expect("no I/O errors can happen")
    }
}

impl Print for Node {
    fn print_html_fragment(&self, out: &mut impl Write) -> Result<()> {
        match self {
            Node::Text(t) => t.print_html_fragment(out),
            Node::Attributes(a) => a.print_html_fragment(out),
            Node::Tag(t) => t.print_html_fragment(out),
            Node::Tags(t) => t.print_html_fragment(out),
        }
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.as_string())
    }
}


impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Node::Text(Text(KString::from_ref(s)))
    }
}

impl From<&String> for Node {
    fn from(s: &String) -> Self {
        Node::Text(Text(KString::from_ref(s)))
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Node::Text(Text(KString::from_string(s)))
    }
}

impl From<KString> for Node {
    fn from(s: KString) -> Self {
        Node::Text(Text(s))
    }
}

impl From<Text> for Node {
    fn from(t: Text) -> Self {
        Node::Text(t)
    }
}

impl From<Attributes> for Node {
    fn from(a: Attributes) -> Self {
        Node::Attributes(a)
    }
}

impl From<Tag> for Node {
    fn from(t: Tag) -> Self {
        Node::Tag(t)
    }
}

impl From<TgPaired> for Node {
    fn from(t: TgPaired) -> Self {
        Node::Tag(Tag::Paired(t))
    }
}

impl From<TgUnpaired> for Node {
    fn from(t: TgUnpaired) -> Self {
        Node::Tag(Tag::Unpaired(t))
    }
}

impl From<Tags> for Node {
    fn from(t: Tags) -> Self {
        Node::Tags(t)
    }
}


/// Build a `Vec<Node>` from values of mixed types, each converted
/// via `Node::from`: `nodes![attr([att("id", "x")]), "text", br(None)]`.
#[macro_export]
macro_rules! nodes {
    ($($item:expr),* $(,)?) => {
        {
            let v: Vec<$crate::Node> = vec![$($crate::Node::from($item)),*];
            v
        }
    }
}

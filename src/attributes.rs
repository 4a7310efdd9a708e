//! Attribute clauses: `name='value'` pairs and bare flags, kept in
//! insertion order.

use std::{borrow::Cow, io::Write};
use anyhow::Result;
use kstring::KString;
use phtml_meta::meta::MetaDb;

use crate::{myfrom::MyFrom, Print};

const UNICODE_APOSTROPHE: &str = "&#x27;";

/// The whitespace that clause and sequence trimming removes. Other
/// Unicode whitespace (e.g. U+00A0) is content and stays.
const MARKUP_WHITESPACE: [char; 6] = [' ', '\t', '\n', '\r', '\0', '\x0B'];

pub(crate) fn trim_markup(s: &str) -> &str {
    s.trim_matches(MARKUP_WHITESPACE)
}

pub(crate) fn trim_markup_end(s: &str) -> &str {
    s.trim_end_matches(MARKUP_WHITESPACE)
}

/// Replace every `'` by its numeric character reference. Nothing else
/// is escaped: values are always emitted in single quotes, `<`, `>`,
/// `&` and `"` pass through unchanged.
pub fn escape_apostrophes(s: &str) -> Cow<str> {
    if s.contains('\'') {
        Cow::Owned(s.replace('\'', UNICODE_APOSTROPHE))
    } else {
        Cow::Borrowed(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Attribute {
    /// Rendered as `name='value'`.
    Named { name: KString, value: KString },
    /// Rendered bare, e.g. `download`. This is what positional
    /// (integer keyed) entries become.
    Flag(KString),
}

impl Attribute {
    fn push_to(&self, out: &mut String) {
        match self {
            Attribute::Named { name, value } => {
                out.push_str(name);
                out.push_str("='");
                out.push_str(&escape_apostrophes(value));
                out.push('\'');
            }
            Attribute::Flag(value) => out.push_str(&escape_apostrophes(value)),
        }
    }
}

impl Print for Attribute {
    fn print_html_fragment(&self, out: &mut impl Write) -> Result<()> {
        let mut s = String::new();
        self.push_to(&mut s);
        out.write_all(s.as_bytes())?;
        Ok(())
    }
}


/// Key of an entry given to `Attributes::from_entries`: a name, or a
/// position, which makes the entry's value a flag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AttrKey {
    Name(KString),
    Index(usize),
}

impl From<&str> for AttrKey {
    fn from(s: &str) -> Self {
        AttrKey::Name(KString::from_ref(s))
    }
}

impl From<String> for AttrKey {
    fn from(s: String) -> Self {
        AttrKey::Name(KString::from_string(s))
    }
}

impl From<KString> for AttrKey {
    fn from(s: KString) -> Self {
        AttrKey::Name(s)
    }
}

impl From<usize> for AttrKey {
    fn from(i: usize) -> Self {
        AttrKey::Index(i)
    }
}


/// An ordered list of attributes. Duplicate names are not merged,
/// each entry is rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Attributes {
    entries: Vec<Attribute>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from an ordered map given as key/value pairs.
    pub fn from_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where K: Into<AttrKey>,
          KString: MyFrom<V>
    {
        entries.into_iter().map(|(key, value)| {
            let value = KString::myfrom(value);
            match key.into() {
                AttrKey::Name(name) => Attribute::Named { name, value },
                AttrKey::Index(_) => Attribute::Flag(value),
            }
        }).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Attribute> {
        self.entries.iter()
    }

    /// Names of the named entries that `db` doesn't list, in order.
    pub fn unknown_names<'a>(&'a self, db: &'a MetaDb) -> impl Iterator<Item = &'a str> + 'a {
        self.entries.iter().filter_map(move |att| match att {
            Attribute::Named { name, .. } if !db.is_attribute_name(name) => Some(name.as_str()),
            _ => None,
        })
    }

    /// The serialized clause, without surrounding whitespace. Empty
    /// for no entries.
    pub fn to_attribute_string(&self) -> String {
        let mut s = String::new();
        for att in &self.entries {
            att.push_to(&mut s);
            s.push(' ');
        }
        let trimmed = trim_markup(&s);
        if trimmed.len() == s.len() {
            s
        } else {
            trimmed.to_string()
        }
    }
}

impl FromIterator<Attribute> for Attributes {
    fn from_iter<I: IntoIterator<Item = Attribute>>(iter: I) -> Self {
        Attributes { entries: iter.into_iter().collect() }
    }
}

impl<'a> IntoIterator for &'a Attributes {
    type Item = &'a Attribute;
    type IntoIter = std::slice::Iter<'a, Attribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl Print for Attributes {
    fn print_html_fragment(&self, out: &mut impl Write) -> Result<()> {
        out.write_all(self.to_attribute_string().as_bytes())?;
        Ok(())
    }
}


pub fn att<T, U>(key: T, val: U) -> Option<Attribute>
    where KString: MyFrom<T> + MyFrom<U>
{
    Some(Attribute::Named { name: KString::myfrom(key), value: KString::myfrom(val) })
}

pub fn opt_att<T, U>(key: T, val: Option<U>) -> Option<Attribute>
    where KString: MyFrom<T> + MyFrom<U>
{
    val.map(|val| Attribute::Named { name: KString::myfrom(key), value: KString::myfrom(val) })
}

pub fn flag<T>(val: T) -> Option<Attribute>
    where KString: MyFrom<T>
{
    Some(Attribute::Flag(KString::myfrom(val)))
}

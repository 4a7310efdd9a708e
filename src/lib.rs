//! Compositional HTML markup builder.
//!
//! Trees are built from immutable values (`Node`: text, attributes,
//! tags, sibling sequences) and rendered to a string on demand.
//! Rendering is a pure function of the tree: single quoted attribute
//! values, `\n` between an opening tag and its first child and
//! between siblings.

pub mod myfrom;
pub mod attributes;
pub mod node;
pub mod tag;
pub mod tags;

use std::io::Write;
use anyhow::Result;
use lazy_static::lazy_static;
use phtml_meta::meta::{MetaDb, read_meta_db};

pub use phtml_meta::at;
pub use attributes::{Attribute, Attributes, AttrKey, att, opt_att, flag};
pub use node::{Node, Text};
pub use tag::{Tag, TgPaired, TgUnpaired, Tags, PHTML_TRACE};
pub use tags::BuildError;

pub trait Print {
    /// Print serialized HTML.
    fn print_html_fragment(&self, out: &mut impl Write) -> Result<()>;

    fn to_html_fragment_string(&self) -> Result<String> {
        let mut s = Vec::new();
        self.print_html_fragment(&mut s)?;
        // Only str and String contents were concatenated
        Ok(String::from_utf8(s)?)
    }
}

lazy_static!{
    /// Element table used by `tags::element`, see
    /// `phtml_meta::meta::read_meta_db` for the env vars it honours.
    /// Loaded once; a load error is kept and reported by `metadb()`.
    pub static ref METADB: Result<MetaDb> = read_meta_db();
}

pub fn metadb() -> std::result::Result<&'static MetaDb, BuildError> {
    loaded_metadb(&METADB)
}

fn loaded_metadb(res: &Result<MetaDb>) -> std::result::Result<&MetaDb, BuildError> {
    res.as_ref().map_err(|e| BuildError::MetaDbUnavailable(format!("{e:#}")))
}


#[cfg(test)]
mod tests {
    use anyhow::{anyhow, Context};
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn t_metadb() {
        assert_eq!(metadb().unwrap().has_closing_tag("br"), Some(false));
    }

    #[test]
    fn t_metadb_load_error() {
        let res = Err::<MetaDb, _>(anyhow!("expected value at line 1 column 2"))
            .context("reading element definitions from \"x.json\"");
        let err = loaded_metadb(&res).unwrap_err();
        assert_eq!(err.to_string(),
                   "could not load the element meta db: reading element definitions \
                    from \"x.json\": expected value at line 1 column 2");
    }
}

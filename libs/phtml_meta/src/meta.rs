//! Indexed element and attribute data, built from the static tables
//! and optionally extended from a JSON file.

use std::{collections::{HashMap, HashSet},
          path::Path, env, str::FromStr, fmt::Display};
use anyhow::{anyhow, Result, Context, bail};
use chj_util::debug_msg;
use kstring::KString;

use crate::{at, types::ElementDefinition};

// =============================================================================
// Static representation

struct StaticElementMeta {
    tag_name: &'static str,
    has_closing_tag: bool,
}

macro_rules! def_static_elements {
    (paired { $($p:ident),* $(,)? } unpaired { $($u:ident),* $(,)? }) => {
        const STATIC_ELEMENTS: &[StaticElementMeta] = &[
            $(StaticElementMeta { tag_name: stringify!($p), has_closing_tag: true },)*
            $(StaticElementMeta { tag_name: stringify!($u), has_closing_tag: false },)*
        ];
    }
}

crate::with_html_elements!(def_static_elements);

// =============================================================================
// Element database representation

#[derive(Debug)]
pub struct ElementMeta {
    pub tag_name: KString,
    pub has_closing_tag: bool,
}

impl From<&StaticElementMeta> for ElementMeta {
    fn from(s: &StaticElementMeta) -> Self {
        ElementMeta {
            tag_name: KString::from_static(s.tag_name),
            has_closing_tag: s.has_closing_tag,
        }
    }
}

impl From<ElementDefinition> for ElementMeta {
    fn from(d: ElementDefinition) -> Self {
        ElementMeta {
            tag_name: d.tag_name,
            has_closing_tag: d.has_closing_tag,
        }
    }
}

impl PartialEq for ElementMeta {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other) || self.tag_name == other.tag_name
    }
}

impl Eq for ElementMeta {}


#[derive(Debug)]
pub struct MetaDb {
    pub attribute_names: HashSet<KString>,
    pub elementmeta: HashMap<KString, ElementMeta>,
}

impl MetaDb {
    /// The database as compiled into the binary.
    pub fn from_static() -> MetaDb {
        let attribute_names = at::ALL.iter()
            .map(|n| KString::from_static(*n))
            .collect();
        let elementmeta = STATIC_ELEMENTS.iter()
            .map(|s| (KString::from_static(s.tag_name), ElementMeta::from(s)))
            .collect();
        MetaDb {
            attribute_names,
            elementmeta,
        }
    }

    pub fn get(&self, tag_name: &str) -> Option<&ElementMeta> {
        self.elementmeta.get(tag_name)
    }

    /// None if the element is unknown.
    pub fn has_closing_tag(&self, tag_name: &str) -> Option<bool> {
        self.get(tag_name).map(|m| m.has_closing_tag)
    }

    pub fn is_attribute_name(&self, name: &str) -> bool {
        self.attribute_names.contains(name)
    }

    /// Add the given definitions, replacing existing entries with the
    /// same tag name.
    pub fn merge_definitions(&mut self, defs: impl IntoIterator<Item = ElementDefinition>) {
        for def in defs {
            self.elementmeta.insert(def.tag_name.clone(), ElementMeta::from(def));
        }
    }

    /// All elements, sorted by tag name.
    pub fn element_definitions(&self) -> Vec<ElementDefinition> {
        let mut defs: Vec<ElementDefinition> = self.elementmeta.values().map(
            |m| ElementDefinition {
                tag_name: m.tag_name.clone(),
                has_closing_tag: m.has_closing_tag,
            }).collect();
        defs.sort();
        defs
    }
}


pub fn read_element_definitions_from_json(path: &Path) -> Result<Vec<ElementDefinition>> {
    (|| -> Result<Vec<ElementDefinition>> {
        let defs: Vec<ElementDefinition> = serde_json::from_reader(
            std::io::BufReader::new(std::fs::File::open(path)?))?;
        for (i, def) in defs.iter().enumerate() {
            if def.tag_name.trim().is_empty() {
                bail!("element definition #{i} has an empty tag_name")
            }
        }
        Ok(defs)
    })().with_context(|| anyhow!("reading element definitions from {path:?}"))
}


// =============================================================================
// Configuration via env vars

pub fn opt_get_env<T: FromStr>(varname: &str) -> Result<Option<T>>
    where T::Err: Display
{
    match env::var(varname) {
        Ok(s) => {
            Ok(Some(s.parse().map_err(
                |e| anyhow!("could not parse {varname:?} env var with contents {s:?}: {e}"))?))
        },
        Err(e) => match e {
            env::VarError::NotPresent => Ok(None),
            env::VarError::NotUnicode(_) => bail!("could not decode {varname:?} env var: {e}")
        }
    }
}

pub fn get_env_bool(varname: &str) -> Result<bool> {
    Ok(opt_get_env(varname)?.unwrap_or(false))
}

/// Enables debug messages on stderr while loading.
pub const DEBUG_ENV_VAR: &str = "PHTML_META_DEBUG";
/// Path to a JSON array of `ElementDefinition`s to merge over the
/// static table.
pub const JSON_ENV_VAR: &str = "PHTML_META_DB_JSON";

/// Load the static db, extended by the file named in
/// `PHTML_META_DB_JSON` if set.
pub fn read_meta_db() -> Result<MetaDb> {
    let debug = get_env_bool(DEBUG_ENV_VAR)?;
    let mut metadb = MetaDb::from_static();
    debug_msg!(debug, "static meta db has {} elements", metadb.elementmeta.len());
    if let Some(path) = opt_get_env::<String>(JSON_ENV_VAR)? {
        debug_msg!(debug, "merging element definitions from {path:?}");
        let defs = read_element_definitions_from_json(path.as_ref())?;
        debug_msg!(debug, "read {} element definitions", defs.len());
        metadb.merge_definitions(defs);
    }
    Ok(metadb)
}


#[cfg(test)]
mod tests {
    use std::io::Write;
    use pretty_assertions::assert_eq;
    use super::*;

    fn tmpfile(name: &str, contents: &str) -> std::path::PathBuf {
        let path = env::temp_dir().join(format!("phtml_meta-{}-{name}", std::process::id()));
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn t_static() {
        let db = MetaDb::from_static();
        assert_eq!(db.has_closing_tag("div"), Some(true));
        assert_eq!(db.has_closing_tag("var"), Some(true));
        assert_eq!(db.has_closing_tag("br"), Some(false));
        assert_eq!(db.has_closing_tag("img"), Some(false));
        assert_eq!(db.has_closing_tag("blink"), None);
        assert!(db.is_attribute_name("href"));
        assert!(!db.is_attribute_name("hreff"));
        // each name listed once only
        assert_eq!(db.elementmeta.len(), STATIC_ELEMENTS.len());
    }

    #[test]
    fn t_element_definitions_sorted() {
        let defs = MetaDb::from_static().element_definitions();
        assert_eq!(defs[0].tag_name.as_str(), "a");
        assert!(defs.windows(2).all(|w| w[0].tag_name < w[1].tag_name));
    }

    #[test]
    fn t_merge_json() {
        let path = tmpfile("merge.json", r#"[
            {"tag_name": "my-widget"},
            {"tag_name": "command", "has_closing_tag": true}
        ]"#);
        let defs = read_element_definitions_from_json(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(defs.len(), 2);
        let mut db = MetaDb::from_static();
        db.merge_definitions(defs);
        assert_eq!(db.has_closing_tag("my-widget"), Some(true));
        assert_eq!(db.has_closing_tag("command"), Some(true));
        assert_eq!(db.has_closing_tag("wbr"), Some(false));
    }

    #[test]
    fn t_bad_json() {
        let path = tmpfile("bad.json", r#"[{"tag_name": " "}]"#);
        let res = read_element_definitions_from_json(&path);
        std::fs::remove_file(&path).unwrap();
        let msg = format!("{:#}", res.unwrap_err());
        assert!(msg.contains("empty tag_name"), "{msg}");

        let missing = env::temp_dir().join("phtml_meta-does-not-exist.json");
        assert!(read_element_definitions_from_json(&missing).is_err());
    }

    #[test]
    fn t_opt_get_env() {
        let var = "PHTML_META_TEST_T_OPT_GET_ENV";
        assert_eq!(opt_get_env::<bool>(var).unwrap(), None);
        env::set_var(var, "true");
        assert_eq!(get_env_bool(var).unwrap(), true);
        env::set_var(var, "yes");
        assert!(get_env_bool(var).is_err());
        env::remove_var(var);
    }
}

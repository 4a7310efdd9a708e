//! Serializable element description, used for the JSON element
//! definition files and for `phtml tags --json`.

use kstring::KString;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ElementDefinition {
    pub tag_name: KString,
    /// false for void elements, which render as `<name/>` and take no
    /// body.
    #[serde(default = "default_has_closing_tag")]
    pub has_closing_tag: bool,
}

fn default_has_closing_tag() -> bool {
    true
}

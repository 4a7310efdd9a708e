//! Metainfo for the phtml builder: which elements exist, which of
//! them are void (self-closing), and the attribute names offered as
//! constants.

#[macro_use]
pub mod elements;
pub mod at;
pub mod types;
pub mod meta;

//! Constructor functions: `paired`, `unpaired`, `attr`, `text`, `tags`,
//! `html5`, one function per element in the `phtml_meta` element
//! table, and `element` for choosing the tag kind by name at runtime.
//!
//! Paired constructors take their arguments as one sequence: the
//! first item is the attributes or the first child, the rest are
//! further children.
//!
//! ```
//! use phtml::{tags::{div, p, br, attr}, att, nodes};
//! let page = div(nodes![attr([att("class", "base")]), p(nodes!["Hello"]), br(None)]);
//! assert_eq!(page.as_string(),
//!            "<div class='base'>\n<p>\nHello\n</p>\n<br/>\n</div>");
//! ```

use kstring::KString;
use thiserror::Error;

use crate::{metadb,
            attributes::{Attribute, Attributes},
            myfrom::MyFrom,
            node::{Node, Text},
            tag::{TgPaired, TgUnpaired, Tags}};

const DOCTYPE: &str = "<!DOCTYPE html>";

pub fn unpaired<N>(name: N, attributes: impl Into<Option<Attributes>>) -> Node
    where KString: MyFrom<N>
{
    TgUnpaired::new(name, attributes.into()).into()
}

pub fn paired<N>(name: N, args: impl IntoIterator<Item = Node>) -> Node
    where KString: MyFrom<N>
{
    let mut args = args.into_iter();
    let any = args.next();
    TgPaired::new(name, any, args.collect()).into()
}

/// Attributes from `att`/`opt_att`/`flag` results, skipping `None`s.
pub fn attr(attributes: impl IntoIterator<Item = Option<Attribute>>) -> Attributes {
    attributes.into_iter().flatten().collect()
}

pub fn text<T>(s: T) -> Node
    where KString: MyFrom<T>
{
    Text::new(KString::myfrom(s)).into()
}

pub fn tags(items: impl IntoIterator<Item = Node>) -> Node {
    Tags::new(items.into_iter().collect()).into()
}

/// A doctype line followed by an `<html>` element built from `args`.
pub fn html5(args: impl IntoIterator<Item = Node>) -> Node {
    tags([text(DOCTYPE), paired("html", args)])
}


macro_rules! def_element_fns {
    (paired { $($p:ident),* $(,)? } unpaired { $($u:ident),* $(,)? }) => {
        $(
            #[doc = concat!("`<", stringify!($p), ">...</", stringify!($p), ">`")]
            pub fn $p(args: impl IntoIterator<Item = Node>) -> Node {
                paired(stringify!($p), args)
            }
        )*
        $(
            #[doc = concat!("`<", stringify!($u), "/>`")]
            pub fn $u(attributes: impl Into<Option<Attributes>>) -> Node {
                unpaired(stringify!($u), attributes)
            }
        )*
    }
}

phtml_meta::with_html_elements!(def_element_fns);


#[derive(Error, Debug, PartialEq, Eq)]
pub enum BuildError {
    #[error("element <{tag_name}> is self-closing, can't take {count} child value(s)")]
    ChildrenNotAllowed { tag_name: KString, count: usize },
    #[error("could not load the element meta db: {0}")]
    MetaDbUnavailable(String),
}

/// Like `paired`, but builds an unpaired tag if `name` is a void
/// element according to `METADB`. Unknown names give paired tags.
/// Fails if `PHTML_META_DB_JSON` names a file that can't be loaded.
pub fn element<N>(name: N, args: impl IntoIterator<Item = Node>) -> Result<Node, BuildError>
    where KString: MyFrom<N>
{
    let name = KString::myfrom(name);
    match metadb()?.has_closing_tag(&name) {
        Some(false) => {
            let mut args = args.into_iter();
            let attributes = match args.next() {
                None => None,
                Some(Node::Attributes(a)) => Some(a),
                Some(_) => {
                    return Err(BuildError::ChildrenNotAllowed {
                        tag_name: name,
                        count: 1 + args.count(),
                    })
                }
            };
            let count = args.count();
            if count > 0 {
                return Err(BuildError::ChildrenNotAllowed { tag_name: name, count })
            }
            Ok(unpaired::<KString>(name, attributes))
        }
        Some(true) | None => Ok(paired::<KString>(name, args)),
    }
}


#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use phtml_meta::at;
    use crate::{attributes::{att, flag}, nodes};
    use super::*;

    #[test]
    fn t_unpaired_without_attributes() {
        assert_eq!(unpaired("div", None).as_string(), "<div/>");
    }

    #[test]
    fn t_unpaired_with_attributes() {
        assert_eq!(unpaired("div", attr([att("class", "base"), att("id", "42")])).as_string(),
                   "<div class='base' id='42'/>");
    }

    #[test]
    fn t_paired_without_attributes_and_inner_tags() {
        assert_eq!(paired("div", []).as_string(), "<div>\n</div>");
    }

    #[test]
    fn t_paired_with_attributes_without_inner_tags() {
        assert_eq!(paired("div", nodes![attr([att("class", "base"), att("id", "21")])])
                   .as_string(),
                   "<div class='base' id='21'>\n</div>");
    }

    #[test]
    fn t_paired_with_attributes_with_inner_tags() {
        assert_eq!(paired("div", nodes![attr([att("class", "base")]), div([]), a([])])
                   .as_string(),
                   "<div class='base'>\n<div>\n</div>\n<a>\n</a>\n</div>");
    }

    #[test]
    fn t_paired_without_attributes_with_inner_tags() {
        assert_eq!(paired("div", [div([]), br(None)]).as_string(),
                   "<div>\n<div>\n</div>\n<br/>\n</div>");
    }

    #[test]
    fn t_misplaced_attributes() {
        assert_eq!(paired("div", nodes![attr([att("class", "block")]),
                                        attr([att("class1", "block1")])])
                   .as_string(),
                   "<div class='block'>\n</div>");
    }

    #[test]
    fn t_attr() {
        assert_eq!(Node::from(attr([])).as_string(), "");
        assert_eq!(Node::from(attr([att("class", "base"), att("id", "jeff")])).as_string(),
                   "class='base' id='jeff'");
        assert_eq!(attr([flag(at::DOWNLOAD), att(at::HREF, "/css/custom.css")])
                   .to_attribute_string(),
                   "download href='/css/custom.css'");
    }

    #[test]
    fn t_tags() {
        assert_eq!(tags([]).as_string(), "");
        assert_eq!(tags([div([]), unpaired("br", None)]).as_string(), "<div>\n</div>\n<br/>");
        assert_eq!(tags([text("<var/>"), paired("xx", [])]).as_string(),
                   "<var/>\n<xx>\n</xx>");
    }

    #[test]
    fn t_html5() {
        assert_eq!(html5([]).as_string(), "<!DOCTYPE html>\n<html>\n</html>");
        assert_eq!(html5(nodes![attr([att(at::LANG, "en")]),
                                head([title(["T".into()])]),
                                body([])]).as_string(),
                   "<!DOCTYPE html>\n<html lang='en'>\n<head>\n<title>\nT\n</title>\n</head>\n\
                    <body>\n</body>\n</html>");
    }

    #[test]
    fn t_named_paired() {
        assert_eq!(var([]).as_string(), "<var>\n</var>");
        assert_eq!(bdo([]).as_string(), "<bdo>\n</bdo>");
        assert_eq!(h1(["Title".into()]).as_string(), "<h1>\nTitle\n</h1>");
        assert_eq!(ul(nodes![attr([att(at::ID, "l")]), li(["a".into()]), li(["b".into()])])
                   .as_string(),
                   "<ul id='l'>\n<li>\na\n</li>\n<li>\nb\n</li>\n</ul>");
        assert_eq!(table([tr([td(["1".into()])])]).as_string(),
                   "<table>\n<tr>\n<td>\n1\n</td>\n</tr>\n</table>");
    }

    #[test]
    fn t_named_unpaired() {
        assert_eq!(br(None).as_string(), "<br/>");
        assert_eq!(hr(attr([])).as_string(), "<hr/>");
        assert_eq!(img(attr([att(at::SRC, "/a.png"), att(at::ALT, "A")])).as_string(),
                   "<img src='/a.png' alt='A'/>");
        assert_eq!(meta(attr([att(at::CHARSET, "utf-8")])).as_string(),
                   "<meta charset='utf-8'/>");
        assert_eq!(input(attr([att(at::TYPE, "checkbox"), flag(at::CHECKED)])).as_string(),
                   "<input type='checkbox' checked/>");
    }

    #[test]
    fn t_element() {
        assert_eq!(element("div", []).unwrap().as_string(), "<div>\n</div>");
        assert_eq!(element("br", []).unwrap().as_string(), "<br/>");
        assert_eq!(element("img", nodes![attr([att("src", "x")])]).unwrap().as_string(),
                   "<img src='x'/>");
        assert_eq!(element("my-widget", ["x".into()]).unwrap().as_string(),
                   "<my-widget>\nx\n</my-widget>");
        assert_eq!(element("br", ["x".into(), "y".into()]).unwrap_err(),
                   BuildError::ChildrenNotAllowed {
                       tag_name: KString::from_static("br"), count: 2 });
        let err = element("img", nodes![attr([]), "x"]).unwrap_err();
        assert_eq!(err.to_string(),
                   "element <img> is self-closing, can't take 1 child value(s)");
    }

    #[test]
    fn t_element_owned_names() {
        assert_eq!(element(String::from("hr"), nodes![attr([att(at::CLASS, "x")])])
                   .unwrap().as_string(),
                   "<hr class='x'/>");
        assert_eq!(element(KString::from_static("section"), ["s".into()]).unwrap().as_string(),
                   "<section>\ns\n</section>");
        assert_eq!(element(KString::from_static("wbr"), []).unwrap().as_string(), "<wbr/>");
    }
}

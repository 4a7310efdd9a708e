//! Attribute names, as constants for use as keys with `att`.
//!
//! Nothing is validated against these lists; an attribute key is any
//! string. The lists exist so that typos show up at compile time,
//! for the `--trace` check of unknown names, and so that the `phtml`
//! binary can print them.
//!
//! Names are spelled as browsers recognize them, so markup ported from
//! builders with the common misspellings changes: `ONDBLCLICK` is
//! `"ondblclick"` (not `ondbclick`), `ACCEPT_CHARSET` is
//! `"accept-charset"` (not `accept_charset`), and the element function
//! is `bdo` (not `ddo`).

macro_rules! def_attribute_names {
    ($( $(#[$groupdoc:meta])* $group:ident {
        $($constname:ident = $name:literal),* $(,)?
    } )*) => {
        $( $( pub const $constname: &str = $name; )* )*

        $(
            $(#[$groupdoc])*
            pub const $group: &[&str] = &[$($name),*];
        )*

        /// All attribute names from the groups above, in group order.
        pub const ALL: &[&str] = &[$($($name,)*)*];
    }
}

def_attribute_names! {
    /// Attributes usable on any element.
    UNIVERSAL {
        ACCESSKEY = "accesskey",
        CLASS = "class",
        CONTENTEDITABLE = "contenteditable",
        CONTEXTMENU = "contextmenu",
        DIR = "dir",
        HIDDEN = "hidden",
        ID = "id",
        ITEMPROP = "itemprop",
        LANG = "lang",
        SPELLCHECK = "spellcheck",
        STYLE = "style",
        TABINDEX = "tabindex",
        TITLE = "title",
        XML_LANG = "xml:lang",
    }
    /// Event handler attributes.
    EVENTS {
        ONBLUR = "onblur",
        ONCHANGE = "onchange",
        ONCLICK = "onclick",
        ONDBLCLICK = "ondblclick",
        ONFOCUS = "onfocus",
        ONKEYDOWN = "onkeydown",
        ONKEYPRESS = "onkeypress",
        ONKEYUP = "onkeyup",
        ONLOAD = "onload",
        ONMOUSEDOWN = "onmousedown",
        ONMOUSEMOVE = "onmousemove",
        ONMOUSEOUT = "onmouseout",
        ONMOUSEOVER = "onmouseover",
        ONMOUSEUP = "onmouseup",
        ONRESET = "onreset",
        ONSELECT = "onselect",
        ONSUBMIT = "onsubmit",
        ONUNLOAD = "onunload",
    }
    /// Element specific attributes.
    OTHER {
        ACCEPT = "accept",
        ACCEPT_CHARSET = "accept-charset",
        ACTION = "action",
        ALIGN = "align",
        ALT = "alt",
        ASYNC = "async",
        AUTOCOMPLETE = "autocomplete",
        AUTOFOCUS = "autofocus",
        AUTOSAVE = "autosave",
        BGCOLOR = "bgcolor",
        BORDER = "border",
        BUFFERED = "buffered",
        CHALLENGE = "challenge",
        CHARSET = "charset",
        CHECKED = "checked",
        CITE = "cite",
        CODE = "code",
        CODEBASE = "codebase",
        COLOR = "color",
        COLS = "cols",
        COLSPAN = "colspan",
        CONTENT = "content",
        CONTROLS = "controls",
        COORDS = "coords",
        DATA = "data",
        DATETIME = "datetime",
        DEFAULT = "default",
        DEFER = "defer",
        DIRNAME = "dirname",
        DISABLED = "disabled",
        DOWNLOAD = "download",
        DRAGGABLE = "draggable",
        DROPZONE = "dropzone",
        ENCTYPE = "enctype",
        FOR = "for",
        FORM = "form",
        FORMACTION = "formaction",
        HEADERS = "headers",
        HEIGHT = "height",
        HIGH = "high",
        HREF = "href",
        HREFLANG = "hreflang",
        HTTP_EQUIV = "http-equiv",
        ICON = "icon",
        ISMAP = "ismap",
        KEYTYPE = "keytype",
        LABEL = "label",
        LANGUAGE = "language",
        LIST = "list",
        LOOP = "loop",
        LOW = "low",
        MANIFEST = "manifest",
        MAX = "max",
        MAXLENGTH = "maxlength",
        MEDIA = "media",
        METHOD = "method",
        MIN = "min",
        MULTIPLE = "multiple",
        NAME = "name",
        NOVALIDATE = "novalidate",
        OPEN = "open",
        OPTIMUM = "optimum",
        PATTERN = "pattern",
        PING = "ping",
        PLACEHOLDER = "placeholder",
        POSTER = "poster",
        PRELOAD = "preload",
        PUBDATE = "pubdate",
        RADIOGROUP = "radiogroup",
        READONLY = "readonly",
        REL = "rel",
        REQUIRED = "required",
        REVERSED = "reversed",
        ROWS = "rows",
        ROWSPAN = "rowspan",
        SANDBOX = "sandbox",
        SCOPE = "scope",
        SCOPED = "scoped",
        SEAMLESS = "seamless",
        SELECTED = "selected",
        SHAPE = "shape",
        SIZE = "size",
        SIZES = "sizes",
        SPAN = "span",
        SRC = "src",
        SRCDOC = "srcdoc",
        SRCLANG = "srclang",
        SRCSET = "srcset",
        START = "start",
        STEP = "step",
        TARGET = "target",
        TYPE = "type",
        USEMAP = "usemap",
        VALUE = "value",
        WIDTH = "width",
        WRAP = "wrap",
    }
}

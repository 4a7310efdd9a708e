//! The element table.
//!
//! Every element the builder knows by name is listed exactly once
//! here. The table is handed to a callback macro so that consumers
//! (the static meta db below, the constructor functions in `phtml`)
//! are generated from the same list:
//!
//! ```ignore
//! macro_rules! my_callback {
//!     (paired { $($p:ident),* $(,)? } unpaired { $($u:ident),* $(,)? }) => { ... }
//! }
//! phtml_meta::with_html_elements!(my_callback);
//! ```
//!
//! The tag name of each entry is `stringify!` of its identifier.

#[macro_export]
macro_rules! with_html_elements {
    ($callback:ident) => {
        $callback! {
            paired {
                a, abbr, address, article, aside, audio,
                b, bdi, bdo, blockquote, body, button,
                canvas, caption, cite, code, colgroup,
                data, datalist, dd, del, dfn, div, dl, dt,
                em,
                fieldset, figcaption, figure, footer, form,
                h1, h2, h3, h4, h5, h6, head, header, html,
                i, iframe, ins,
                kbd,
                label, legend, li,
                main, map, mark, meter,
                nav, noscript,
                object, ol, optgroup, option, output,
                p, pre, progress,
                q,
                rb, rp, rt, rtc, ruby,
                s, samp, script, section, select, small, span, strong, style,
                sub, sup,
                table, tbody, td, template, textarea, tfoot, th, thead, time,
                title, tr,
                u, ul,
                var, video,
                xmp,
            }
            unpaired {
                area, base, br, col, command, embed, hr, img, input, link,
                meta, param, source, track, wbr,
            }
        }
    };
}

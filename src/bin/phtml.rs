use std::io::Write;

use anyhow::{Result, bail};
use clap::Parser as ClapParser;
use phtml::{metadb, PHTML_TRACE, Print, at, att, flag, nodes,
            tags::{a, attr, body, div, footer, h1, head, html5, li, meta, p, title, ul}};


#[derive(clap::Parser, Debug)]
/// Inspect the phtml element and attribute tables, or print an
/// example page.
struct Args {
    /// Action, one of "tags" (list the known elements), "attributes"
    /// (list the attribute name constants) or "demo" (print an example
    /// HTML5 page).
    #[clap(required(true))]
    action: String,

    /// Print the element list as JSON (for "tags")
    #[clap(long)]
    json: bool,

    /// Report dropped attribute values on stderr
    #[clap(long)]
    trace: bool,
}

fn demo_page() -> phtml::Node {
    html5(nodes![
        attr([att(at::LANG, "en")]),
        head(nodes![
            meta(attr([att(at::CHARSET, "utf-8")])),
            title(nodes!["phtml demo"])]),
        body(nodes![
            div(nodes![
                attr([att(at::CLASS, "main"), att(at::ID, "content")]),
                h1(nodes!["It's markup"]),
                p(nodes!["Built from immutable values."]),
                ul(nodes![
                    li(nodes![a(nodes![attr([att(at::HREF, "/docs"), flag(at::DOWNLOAD)]),
                                        "Docs"])]),
                    li(nodes!["Plain text item"])])]),
            footer(nodes![attr([att(at::TITLE, "it's the footer")]), "Bye"])])])
}

fn main() -> Result<()> {
    let args = Args::parse();
    PHTML_TRACE.store(args.trace, std::sync::atomic::Ordering::Relaxed);

    let mut outp = std::io::stdout().lock();
    match &*args.action {
        "tags" => {
            let defs = metadb()?.element_definitions();
            if args.json {
                serde_json::to_writer_pretty(&mut outp, &defs)?;
                writeln!(&mut outp)?;
            } else {
                for def in defs {
                    writeln!(&mut outp, "{}\t{}",
                             def.tag_name,
                             if def.has_closing_tag { "paired" } else { "unpaired" })?;
                }
            }
        }
        "attributes" => {
            if args.json {
                bail!("--json is only supported for the \"tags\" action")
            }
            for (group, names) in [("universal", at::UNIVERSAL),
                                   ("events", at::EVENTS),
                                   ("other", at::OTHER)] {
                for name in names {
                    writeln!(&mut outp, "{group}\t{name}")?;
                }
            }
        }
        "demo" => {
            demo_page().print_html_fragment(&mut outp)?;
            writeln!(&mut outp)?;
        }
        _ => bail!("unknown action {:?}", args.action)
    }
    outp.flush()?;
    Ok(())
}

use std::io::Write;

use tabwriter::TabWriter;

use crate::github_searcher::Repository;

/// Short display name for a few long language names.
pub fn shorten_language(lang: &str) -> &str {
    match lang {
        "Emacs Lisp" => "elisp",
        "JavaScript" => "JS",
        "CoffeeScript" => "Coffee",
        other => other,
    }
}

/// Write one row per repository as aligned columns.
///
/// With `show_language` every row starts with `[lang]`. Nothing reaches
/// `out` until all rows are buffered and the column widths are known.
pub fn write_results<W: Write>(
    out: W,
    items: &[Repository],
    show_language: bool,
) -> std::io::Result<()> {
    let mut tw = TabWriter::new(out).minwidth(0).padding(1);

    for item in items {
        if show_language {
            write!(
                tw,
                "[{}]\t",
                shorten_language(item.language.as_deref().unwrap_or(""))
            )?;
        }
        writeln!(
            tw,
            "{}\t{}",
            item.full_name,
            item.description.as_deref().unwrap_or("")
        )?;
    }

    tw.flush()
}

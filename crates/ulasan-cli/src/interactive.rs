//! Menu-driven search session over arbitrary input and output handles.

use std::io::{self, BufRead, Write};

use ulasan_corpus::Corpus;
use ulasan_sentiment::Analyzer;

use crate::render;

pub(crate) struct Session<'a> {
    pub corpus: &'a Corpus,
    pub analyzer: &'a Analyzer,
    pub display_limit: usize,
}

impl Session<'_> {
    /// Print the summary, then loop on the menu until exit or end of input.
    pub(crate) fn run(&self, mut input: impl BufRead, out: &mut impl Write) -> anyhow::Result<()> {
        render::write_summary(out, &self.corpus.summary())?;

        loop {
            write_menu(out)?;
            let Some(choice) = prompt(&mut input, out, "Choose an option (1-3): ")? else {
                break;
            };
            match choice.as_str() {
                "1" => {
                    if !self.search_mode(&mut input, out)? {
                        break;
                    }
                }
                "2" => render::write_summary(out, &self.corpus.summary())?,
                "3" => break,
                _ => writeln!(out, "Invalid choice, pick 1-3.")?,
            }
        }

        writeln!(out, "Goodbye.")?;
        Ok(())
    }

    /// Returns `false` when input ran out.
    fn search_mode(&self, input: &mut impl BufRead, out: &mut impl Write) -> anyhow::Result<bool> {
        render::write_rule(out, '-')?;
        writeln!(out, "SEARCH MODE (type 'back' to return to the menu)")?;
        render::write_rule(out, '-')?;

        loop {
            let Some(query) = prompt(input, out, "Query: ")? else {
                return Ok(false);
            };
            if query.eq_ignore_ascii_case("back") {
                return Ok(true);
            }
            if query.is_empty() {
                writeln!(out, "Query must not be empty.")?;
                continue;
            }

            let results = self.corpus.search_with(self.analyzer, &query)?;
            render::write_search_results(out, &query, &results, self.display_limit)?;
        }
    }
}

fn write_menu(out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    render::write_rule(out, '=')?;
    writeln!(out, "MENU")?;
    render::write_rule(out, '=')?;
    writeln!(out, "1. Search comments")?;
    writeln!(out, "2. Show summary")?;
    writeln!(out, "3. Exit")?;
    render::write_rule(out, '=')
}

/// Read one trimmed line; `None` at end of input.
fn prompt(
    input: &mut impl BufRead,
    out: &mut impl Write,
    label: &str,
) -> io::Result<Option<String>> {
    write!(out, "{label}")?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

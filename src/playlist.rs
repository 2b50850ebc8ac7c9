use crate::error::ClumpyResult;
use crate::tokenizer;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};

/// One playlist line plus its hashed words. The text is never mutated after
/// load; reordering moves whole entries around.
#[derive(Debug, Clone)]
pub struct Entry {
    pub text: String,
    pub words: Vec<u32>,
}

impl Entry {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let words = tokenizer::tokenize(&text);
        Self { text, words }
    }
}

/// Builds entries from raw lines: trailing whitespace is trimmed and blank
/// lines are skipped.
pub fn entries_from_lines<I, S>(lines: I) -> Vec<Entry>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .filter_map(|line| {
            let trimmed = line.as_ref().trim_end();
            if trimmed.is_empty() {
                None
            } else {
                Some(Entry::new(trimmed))
            }
        })
        .collect()
}

/// Reads a playlist, one entry per line. "-" reads stdin.
pub fn load_playlist(path: &str) -> ClumpyResult<Vec<Entry>> {
    let reader: Box<dyn BufRead> = if path == "-" {
        Box::new(BufReader::new(io::stdin()))
    } else {
        Box::new(BufReader::new(File::open(path)?))
    };

    let mut entries = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            entries.push(Entry::new(trimmed));
        }
    }
    Ok(entries)
}

/// Writes lines back out, one entry per line. "-" writes stdout.
pub fn save_playlist(path: &str, lines: &[String]) -> ClumpyResult<()> {
    let mut writer: Box<dyn Write> = if path == "-" {
        Box::new(BufWriter::new(io::stdout()))
    } else {
        Box::new(BufWriter::new(File::create(path)?))
    };

    for line in lines {
        writeln!(writer, "{}", line)?;
    }
    writer.flush()?;
    Ok(())
}

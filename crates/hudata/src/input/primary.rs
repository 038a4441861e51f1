//! Models and parses the primary (Hungarian/English) source file of a topic.
//!
//! The file is UTF-8, tab-separated, with a header line. Each data row is
//! expected to carry at least four fields: word_hu, example_hu, word_en,
//! example_en. Rows with fewer fields are dropped entirely.

use std::io::Read;

pub struct PrimarySheet {
    pub rows: Vec<PrimaryRow>,
    /// Rows dropped for having fewer than four fields. Diagnostic only.
    pub skipped: usize,
}

pub struct PrimaryRow {
    pub word_hu: String,
    pub example_hu: String,
    pub word_en: String,
    pub example_en: String,
}

impl PrimarySheet {
    pub fn from<R: Read>(mut r: R) -> eyre::Result<Self> {
        let mut text = String::new();
        r.read_to_string(&mut text)?;

        let mut rows = vec![];
        let mut skipped = 0;
        // the first line is a header, blank lines carry no data
        for line in text
            .lines()
            .skip(1)
            .map(str::trim)
            .filter(|l| !l.is_empty())
        {
            let fields = line.split('\t').collect::<Vec<_>>();
            if fields.len() >= 4 {
                rows.push(PrimaryRow {
                    word_hu: fields[0].to_string(),
                    example_hu: fields[1].to_string(),
                    word_en: fields[2].to_string(),
                    example_en: fields[3].to_string(),
                });
            } else {
                skipped += 1;
            }
        }

        Ok(Self { rows, skipped })
    }
}

//! Models and parses the secondary (Russian) source file of a topic.
//!
//! Same shape as the primary file, but only fields 2 and 3 are used, as
//! word_ru and example_ru. Rows keep their positions: the merge into the
//! question list is purely positional, so a row with fewer than four fields
//! still consumes its index and yields no translation for it.

use std::io::Read;

pub struct SecondarySheet {
    pub rows: Vec<Option<Translation>>,
    /// Rows with fewer than four fields. Diagnostic only.
    pub skipped: usize,
}

pub struct Translation {
    pub word_ru: String,
    pub example_ru: String,
}

impl SecondarySheet {
    pub fn from<R: Read>(mut r: R) -> eyre::Result<Self> {
        let mut text = String::new();
        r.read_to_string(&mut text)?;

        let mut rows = vec![];
        let mut skipped = 0;
        for line in text
            .lines()
            .skip(1)
            .map(str::trim)
            .filter(|l| !l.is_empty())
        {
            let fields = line.split('\t').collect::<Vec<_>>();
            if fields.len() >= 4 {
                rows.push(Some(Translation {
                    word_ru: fields[2].to_string(),
                    example_ru: fields[3].to_string(),
                }));
            } else {
                rows.push(None);
                skipped += 1;
            }
        }

        Ok(Self { rows, skipped })
    }
}

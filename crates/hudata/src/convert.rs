//! The conversion pipeline: paired source sheets in, JSON documents out.

use crate::{
    output::{topic::TopicDocument, topic_index::TopicIndexEntry},
    primary::PrimarySheet,
    secondary::SecondarySheet,
    topics::TopicDef,
};
use eyre::WrapErr;
use serde::Serialize;
use std::{
    fs::{self, File},
    io::{BufReader, BufWriter},
    path::{Path, PathBuf},
};

pub struct Config {
    pub source_base_dir: PathBuf,
    pub output_dir: PathBuf,
    pub topics: &'static [TopicDef],
}

/// Converts every topic in the table, in table order.
///
/// Writes one `<id>.json` per topic and finally the `topics.json` index.
/// Strictly sequential: the first failed topic aborts the run, and whatever
/// was written before it is left in place.
pub fn run(config: &Config) -> eyre::Result<()> {
    fs::create_dir_all(&config.output_dir).wrap_err_with(|| {
        format!(
            "Failed to create output directory at '{}'",
            config.output_dir.display()
        )
    })?;

    let mut index = vec![];
    for def in config.topics {
        let document = convert_topic(&config.source_base_dir, def)?;
        write_json(&config.output_dir.join(format!("{}.json", def.id)), &document)?;
        tracing::info!("{}: {} questions", def.id, document.count);
        index.push(TopicIndexEntry::from(&document));
    }
    write_json(&config.output_dir.join("topics.json"), &index)?;
    tracing::info!("created {} topic files + index", index.len());
    Ok(())
}

/// Converts a single topic by the fixed file naming convention:
/// `en_topics/<id>.tsv` for the primary sheet, `ru_topics/<id>.txt` for the
/// secondary one.
pub fn convert_topic(source_base_dir: &Path, def: &TopicDef) -> eyre::Result<TopicDocument> {
    let primary_path = source_base_dir
        .join("en_topics")
        .join(format!("{}.tsv", def.id));
    let secondary_path = source_base_dir
        .join("ru_topics")
        .join(format!("{}.txt", def.id));

    let primary = PrimarySheet::from(BufReader::new(open(&primary_path)?))
        .wrap_err_with(|| format!("Failed to read '{}'", primary_path.display()))?;
    let secondary = SecondarySheet::from(BufReader::new(open(&secondary_path)?))
        .wrap_err_with(|| format!("Failed to read '{}'", secondary_path.display()))?;

    if primary.skipped > 0 {
        tracing::warn!(
            "{}: skipped {} malformed rows in '{}'",
            def.id,
            primary.skipped,
            primary_path.display()
        );
    }
    if secondary.skipped > 0 {
        tracing::warn!(
            "{}: skipped {} malformed rows in '{}'",
            def.id,
            secondary.skipped,
            secondary_path.display()
        );
    }

    Ok(TopicDocument::derive(def, primary, secondary))
}

fn open(path: &Path) -> eyre::Result<File> {
    File::open(path).wrap_err_with(|| format!("Failed to open file at '{}'", path.display()))
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> eyre::Result<()> {
    let file = File::create(path)
        .wrap_err_with(|| format!("Failed to create file at '{}'", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), value)?;
    Ok(())
}

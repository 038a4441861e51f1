//! Runs the full conversion against a temporary directory tree.

use hudata::{
    convert::{self, Config},
    topics::TopicDef,
};
use std::{fs, path::Path};
use tempfile::TempDir;

const TOPICS: &[TopicDef] = &[
    TopicDef {
        id: "07_budapest",
        en: "Budapest",
        ru: "Будапешт",
        hu: "Budapest",
    },
    TopicDef {
        id: "06_geography",
        en: "Geography",
        ru: "География",
        hu: "Földrajz",
    },
];

fn write_sources(base: &Path, id: &str, primary: &str, secondary: &str) {
    let en_dir = base.join("en_topics");
    let ru_dir = base.join("ru_topics");
    fs::create_dir_all(&en_dir).unwrap();
    fs::create_dir_all(&ru_dir).unwrap();
    fs::write(en_dir.join(format!("{id}.tsv")), primary).unwrap();
    fs::write(ru_dir.join(format!("{id}.txt")), secondary).unwrap();
}

fn config(source: &Path, output: &Path) -> Config {
    Config {
        source_base_dir: source.to_path_buf(),
        output_dir: output.to_path_buf(),
        topics: TOPICS,
    }
}

#[test]
fn converts_every_topic_and_writes_index() {
    let dir = TempDir::new().unwrap();
    write_sources(
        dir.path(),
        "07_budapest",
        "word_hu\texample_hu\tword_en\texample_en\n\
            árvíztűrő\tex1\tflood-resistant\tex2\n\
            Duna\tA Duna folyó.\tDanube\tThe Danube river.\n",
        "word_hu\texample_hu\tword_ru\texample_ru\n\
            _\t_\tвода\tпример\n",
    );
    write_sources(
        dir.path(),
        "06_geography",
        "word_hu\texample_hu\tword_en\texample_en\n\
            hegy\tex\tmountain\tex\n",
        "word_hu\texample_hu\tword_ru\texample_ru\n",
    );
    let out = dir.path().join("data");

    convert::run(&config(dir.path(), &out)).unwrap();

    let budapest: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(out.join("07_budapest.json")).unwrap()).unwrap();
    assert_eq!(budapest["id"], "07_budapest");
    assert_eq!(budapest["name"]["ru"], "Будапешт");
    assert_eq!(budapest["count"], 2);
    assert_eq!(budapest["questions"][0]["word_hu"], "árvíztűrő");
    assert_eq!(budapest["questions"][0]["word_ru"], "вода");
    assert_eq!(budapest["questions"][1]["word_en"], "Danube");
    assert_eq!(budapest["questions"][1]["word_ru"], "");

    let index: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(out.join("topics.json")).unwrap()).unwrap();
    let entries = index.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    // index order follows the table, not the file system
    assert_eq!(entries[0]["id"], "07_budapest");
    assert_eq!(entries[0]["count"], 2);
    assert_eq!(entries[1]["id"], "06_geography");
    assert_eq!(entries[1]["name"]["hu"], "Földrajz");
    assert_eq!(entries[1]["count"], 1);
}

#[test]
fn output_is_pretty_printed_with_literal_non_ascii() {
    let dir = TempDir::new().unwrap();
    for def in TOPICS {
        write_sources(
            dir.path(),
            def.id,
            "header\nárvíztűrő\tex1\tflood-resistant\tex2\n",
            "header\n_\t_\tвода\tпример\n",
        );
    }
    let out = dir.path().join("data");

    convert::run(&config(dir.path(), &out)).unwrap();

    let text = fs::read_to_string(out.join("07_budapest.json")).unwrap();
    assert!(text.contains('\n'));
    assert!(text.contains("árvíztűrő"));
    assert!(text.contains("вода"));
    assert!(!text.contains("\\u"));
}

#[test]
fn reruns_are_byte_identical() {
    let dir = TempDir::new().unwrap();
    for def in TOPICS {
        write_sources(
            dir.path(),
            def.id,
            "header\na\tb\tc\td\n",
            "header\n_\t_\tраз\tдва\n",
        );
    }
    let out = dir.path().join("data");
    let config = config(dir.path(), &out);

    convert::run(&config).unwrap();
    let first = TOPICS
        .iter()
        .map(|def| fs::read(out.join(format!("{}.json", def.id))).unwrap())
        .collect::<Vec<_>>();
    let first_index = fs::read(out.join("topics.json")).unwrap();

    convert::run(&config).unwrap();
    for (def, bytes) in TOPICS.iter().zip(&first) {
        assert_eq!(&fs::read(out.join(format!("{}.json", def.id))).unwrap(), bytes);
    }
    assert_eq!(fs::read(out.join("topics.json")).unwrap(), first_index);
}

#[test]
fn missing_source_file_aborts_the_run() {
    let dir = TempDir::new().unwrap();
    // only the first topic has sources
    write_sources(
        dir.path(),
        "07_budapest",
        "header\na\tb\tc\td\n",
        "header\n",
    );
    let out = dir.path().join("data");

    let result = convert::run(&config(dir.path(), &out));

    assert!(result.is_err());
    // the topic converted before the failure is left in place, the index is not written
    assert!(out.join("07_budapest.json").exists());
    assert!(!out.join("topics.json").exists());
}

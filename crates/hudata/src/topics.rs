//! The static topic table.
//!
//! The table defines both the set of valid topic identifiers and the order in
//! which they are converted and listed in the index.

use serde::{Deserialize, Serialize};

pub struct TopicDef {
    pub id: &'static str,
    pub en: &'static str,
    pub ru: &'static str,
    pub hu: &'static str,
}

impl TopicDef {
    pub fn name(&self) -> TopicName {
        TopicName {
            en: self.en.to_string(),
            ru: self.ru.to_string(),
            hu: self.hu.to_string(),
        }
    }
}

/// Display names of a topic, keyed by language code.
///
/// The field order is the serialization order, so it must stay en, ru, hu
/// to keep the output byte-identical across runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TopicName {
    pub en: String,
    pub ru: String,
    pub hu: String,
}

pub const TOPICS: &[TopicDef] = &[
    TopicDef {
        id: "01_national_symbols",
        en: "National Symbols & Holidays",
        ru: "Символы и праздники",
        hu: "Nemzeti szimbólumok",
    },
    TopicDef {
        id: "02a_history_ancient",
        en: "History: Ancient Times",
        ru: "История: Древность",
        hu: "Történelem: Őskori",
    },
    TopicDef {
        id: "02b_history_ottoman",
        en: "History: Ottoman Period",
        ru: "История: Османы",
        hu: "Történelem: Oszmán",
    },
    TopicDef {
        id: "02c_history_modern",
        en: "History: Modern Era",
        ru: "История: Новое время",
        hu: "Történelem: Újkor",
    },
    TopicDef {
        id: "02d_history_contemporary",
        en: "History: 20th Century",
        ru: "История: XX век",
        hu: "Történelem: 20. század",
    },
    TopicDef {
        id: "03a_literature",
        en: "Literature",
        ru: "Литература",
        hu: "Irodalom",
    },
    TopicDef {
        id: "03b_music_art",
        en: "Music & Art",
        ru: "Музыка и искусство",
        hu: "Zene és művészet",
    },
    TopicDef {
        id: "04_constitution",
        en: "Constitution",
        ru: "Конституция",
        hu: "Alkotmány",
    },
    TopicDef {
        id: "05_rights",
        en: "Rights",
        ru: "Права",
        hu: "Jogok",
    },
    TopicDef {
        id: "06_geography",
        en: "Geography",
        ru: "География",
        hu: "Földrajz",
    },
    TopicDef {
        id: "07_budapest",
        en: "Budapest",
        ru: "Будапешт",
        hu: "Budapest",
    },
    TopicDef {
        id: "08_hungarikums",
        en: "Hungarikums",
        ru: "Хунгарикумы",
        hu: "Hungarikumok",
    },
    TopicDef {
        id: "09_christianity",
        en: "Christianity",
        ru: "Христианство",
        hu: "Kereszténység",
    },
    TopicDef {
        id: "10_european_union",
        en: "European Union",
        ru: "Европейский Союз",
        hu: "Európai Unió",
    },
];

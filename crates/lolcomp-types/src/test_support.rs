//! Fixture builders shared by downstream crate tests.

use std::collections::BTreeMap;

use crate::champion::{ChampionImage, ChampionInfo, ChampionRecord, Role};
use crate::catalog::CatalogSnapshot;

/// Minimal champion record for tests.
pub fn champion(id: &str, tags: &[Role], version: &str) -> ChampionRecord {
    ChampionRecord {
        id: id.to_string(),
        key: "0".to_string(),
        name: id.to_string(),
        title: String::new(),
        blurb: String::new(),
        tags: tags.to_vec(),
        partype: String::new(),
        info: ChampionInfo::default(),
        image: ChampionImage {
            full: format!("{id}.png"),
            sprite: "champion0.png".to_string(),
            group: "champion".to_string(),
            x: 0,
            y: 0,
            w: 48,
            h: 48,
        },
        stats: BTreeMap::new(),
        version: version.to_string(),
    }
}

/// Snapshot of `count` fighters plus any extra records.
pub fn catalog(version: &str, count: usize, extra: Vec<ChampionRecord>) -> CatalogSnapshot {
    let mut champions: Vec<ChampionRecord> = (0..count)
        .map(|n| champion(&format!("Fighter{n}"), &[Role::Fighter], version))
        .collect();
    champions.extend(extra);
    CatalogSnapshot::new(version, champions)
}

//! Filter options derived from the role enumeration, plus the name filter
//! the champion list offers alongside the role toggles.

use serde::Serialize;

use lolcomp_types::{CatalogSnapshot, ChampionRecord, Role};

/// One role toggle as presented to a client: value + display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FilterOption {
    pub value: Role,
    pub label: &'static str,
}

/// The static filter option set. Deterministic and idempotent; there is no
/// external input.
pub fn filter_options() -> Vec<FilterOption> {
    Role::ALL
        .into_iter()
        .map(|role| FilterOption {
            value: role,
            label: role.label(),
        })
        .collect()
}

/// Champions whose display name contains `query`, case-insensitively.
/// A blank query matches everything.
pub fn filter_by_name<'a>(catalog: &'a CatalogSnapshot, query: &str) -> Vec<&'a ChampionRecord> {
    let query = query.trim().to_lowercase();
    catalog
        .records()
        .filter(|record| query.is_empty() || record.name.to_lowercase().contains(&query))
        .collect()
}

#[cfg(test)]
mod tests {
    use lolcomp_types::test_support::{catalog, champion};

    use super::*;

    #[test]
    fn options_cover_every_role_once() {
        let options = filter_options();
        assert_eq!(options.len(), Role::ALL.len());
        assert_eq!(options[0].value, Role::Fighter);
        assert_eq!(options[0].label, "Fighter");
    }

    #[test]
    fn name_filter_is_case_insensitive_and_blank_matches_all() {
        let snapshot = catalog(
            "13.11.1",
            0,
            vec![
                champion("Annie", &[Role::Mage], "13.11.1"),
                champion("Anivia", &[Role::Mage], "13.11.1"),
                champion("Garen", &[Role::Fighter], "13.11.1"),
            ],
        );

        let all = filter_by_name(&snapshot, "   ");
        assert_eq!(all.len(), 3);

        let ani: Vec<&str> = filter_by_name(&snapshot, "ANI")
            .into_iter()
            .map(|record| record.id.as_str())
            .collect();
        assert_eq!(ani, vec!["Anivia", "Annie"]);
    }
}

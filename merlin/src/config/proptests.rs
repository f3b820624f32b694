//! Property-based tests for configuration merging.

use super::merger::ConfigMerger;
use super::schema::{Config, DatabaseSettings};
use crate::operations::SameDayPolicy;
use proptest::prelude::*;
use std::path::PathBuf;

fn policy() -> impl Strategy<Value = Option<SameDayPolicy>> {
    prop_oneof![
        Just(None),
        Just(Some(SameDayPolicy::RepeatEnding)),
        Just(Some(SameDayPolicy::BeginningAndEnding)),
    ]
}

fn config() -> impl Strategy<Value = Config> {
    (
        proptest::option::of((
            proptest::option::of("[a-z]{1,8}\\.db".prop_map(PathBuf::from)),
            proptest::option::of(1u64..60_000),
        )),
        policy(),
    )
        .prop_map(|(database, same_day_policy)| Config {
            database: database.map(|(path, busy_timeout_ms)| DatabaseSettings {
                path,
                busy_timeout_ms,
            }),
            same_day_policy,
        })
}

proptest! {
    #[test]
    fn merging_empty_is_identity(base in config()) {
        let mut merged = base.clone();
        ConfigMerger::merge_into(&mut merged, &Config::default());
        prop_assert_eq!(merged, base);
    }

    #[test]
    fn set_fields_of_higher_source_win(low in config(), high in config()) {
        let mut merged = low.clone();
        ConfigMerger::merge_into(&mut merged, &high);

        if high.same_day_policy.is_some() {
            prop_assert_eq!(merged.same_day_policy, high.same_day_policy);
        } else {
            prop_assert_eq!(merged.same_day_policy, low.same_day_policy);
        }

        if let Some(path) = high.database_path() {
            prop_assert_eq!(merged.database_path(), Some(path));
        } else {
            prop_assert_eq!(merged.database_path(), low.database_path());
        }
    }

    #[test]
    fn merging_twice_is_idempotent(low in config(), high in config()) {
        let mut once = low.clone();
        ConfigMerger::merge_into(&mut once, &high);
        let mut twice = once.clone();
        ConfigMerger::merge_into(&mut twice, &high);
        prop_assert_eq!(once, twice);
    }
}

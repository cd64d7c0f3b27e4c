//! Built-in merge scenarios used by the self-check

use crate::config::{coerce_value, parse_cli_args};
use crate::domain::{LayerMap, MergeOptions, RawDefaults, SourceTag};

/// A named merge input.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub name: &'static str,
    pub options: MergeOptions,
}

pub fn builtin_scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            name: "basic merge",
            options: MergeOptions::new(RawDefaults::new().with("port", 8080).with("debug", false))
                .with_cli(LayerMap::new().with("port", 3000, SourceTag::Cli)),
        },
        Scenario {
            name: "all sources",
            options: MergeOptions::new(
                RawDefaults::new().with("port", 8080).with("debug", false).with("host", "localhost"),
            )
            .with_file(
                LayerMap::new()
                    .with("port", 9000, SourceTag::File)
                    .with("timeout", 30, SourceTag::File),
            )
            .with_env(LayerMap::new().with("DEBUG", true, SourceTag::Env))
            .with_cli(LayerMap::new().with("host", "0.0.0.0", SourceTag::Cli)),
        },
        Scenario {
            name: "empty defaults",
            options: MergeOptions::new(RawDefaults::new())
                .with_cli(LayerMap::new().with("key", "value", SourceTag::Cli)),
        },
        Scenario {
            name: "cli args parsing",
            options: MergeOptions::new(
                RawDefaults::new()
                    .with("port", 8080)
                    .with("enabled", true)
                    .with("ratio", coerce_value("0.5")),
            )
            .with_cli(parse_cli_args("port=3000,enabled=false,ratio=0.75")),
        },
        Scenario {
            name: "only defaults",
            options: MergeOptions::new(RawDefaults::new().with("a", 1).with("b", 2).with("c", 3)),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::merge_config;

    #[test]
    fn test_scenario_names_are_unique() {
        let scenarios = builtin_scenarios();
        let mut names: Vec<&str> = scenarios.iter().map(|s| s.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), scenarios.len());
    }

    #[test]
    fn test_all_sources_scenario_result() {
        let scenario = builtin_scenarios()
            .into_iter()
            .find(|s| s.name == "all sources")
            .expect("scenario present");
        let merged = merge_config(&scenario.options);

        assert_eq!(merged.source_of("port"), Some(SourceTag::File));
        assert_eq!(merged.source_of("timeout"), Some(SourceTag::File));
        assert_eq!(merged.source_of("host"), Some(SourceTag::Cli));
        assert_eq!(merged.source_of("debug"), Some(SourceTag::Default));
        assert_eq!(merged.source_of("DEBUG"), Some(SourceTag::Env));
    }
}

//! Fluent catalog checks for `ui/i18n/<locale>/liftboard-ui.ftl`.
//!
//! Keys are extracted with a line heuristic: any non-comment, non-indented
//! line of the form `id = ...` defines message `id`. Multi-line select
//! bodies are indented and therefore skipped.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

const FTL_FILENAME: &str = "liftboard-ui.ftl";
const FALLBACK: &str = "en-US";

fn i18n_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("i18n")
}

fn is_message_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .chars()
            .all(|c| matches!(c, 'a'..='z' | '0'..='9' | '-'))
}

/// Message ids in definition order (duplicates kept).
fn message_ids(src: &str) -> Vec<String> {
    src.lines()
        .filter(|line| !line.starts_with(char::is_whitespace))
        .filter(|line| !line.starts_with('#') && !line.starts_with('-'))
        .filter_map(|line| line.split_once('='))
        .map(|(id, _)| id.trim())
        .filter(|id| is_message_id(id))
        .map(str::to_string)
        .collect()
}

fn load_catalogs() -> BTreeMap<String, String> {
    let mut catalogs = BTreeMap::new();
    let entries = fs::read_dir(i18n_root()).expect("i18n directory is readable");
    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        let Some(locale) = path.file_name().and_then(|s| s.to_str()) else {
            continue;
        };
        let file = path.join(FTL_FILENAME);
        let content = fs::read_to_string(&file)
            .unwrap_or_else(|err| panic!("{locale}: cannot read {file:?}: {err}"));
        catalogs.insert(locale.to_string(), content);
    }
    catalogs
}

/// Literal first arguments of `t!("...")` calls under `src/`.
fn referenced_ids(dir: &Path, found: &mut BTreeSet<String>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            referenced_ids(&path, found);
            continue;
        }
        if path.extension().and_then(|s| s.to_str()) != Some("rs") {
            continue;
        }
        let Ok(source) = fs::read_to_string(&path) else {
            continue;
        };
        for chunk in source.split("t!(").skip(1) {
            let chunk = chunk.trim_start();
            let Some(rest) = chunk.strip_prefix('"') else {
                continue;
            };
            if let Some((id, _)) = rest.split_once('"') {
                if is_message_id(id) {
                    found.insert(id.to_string());
                }
            }
        }
    }
}

#[test]
fn fallback_and_translations_exist() {
    let catalogs = load_catalogs();
    for locale in [FALLBACK, "es-ES", "fr-FR"] {
        let src = catalogs
            .get(locale)
            .unwrap_or_else(|| panic!("missing catalog for {locale}"));
        assert!(!message_ids(src).is_empty(), "{locale} defines no messages");
    }
}

#[test]
fn every_locale_matches_the_fallback_key_set() {
    let catalogs = load_catalogs();
    let fallback: BTreeSet<String> = message_ids(&catalogs[FALLBACK]).into_iter().collect();

    let mut report = Vec::new();
    for (locale, src) in &catalogs {
        let keys: BTreeSet<String> = message_ids(src).into_iter().collect();
        let missing: Vec<_> = fallback.difference(&keys).cloned().collect();
        let extra: Vec<_> = keys.difference(&fallback).cloned().collect();
        if !missing.is_empty() {
            report.push(format!("{locale} missing: {}", missing.join(", ")));
        }
        if !extra.is_empty() {
            report.push(format!("{locale} has keys unknown to {FALLBACK}: {}", extra.join(", ")));
        }
    }

    assert!(report.is_empty(), "catalog mismatch:\n{}", report.join("\n"));
}

#[test]
fn no_locale_defines_a_key_twice() {
    for (locale, src) in load_catalogs() {
        let mut seen = BTreeSet::new();
        let dups: Vec<String> = message_ids(&src)
            .into_iter()
            .filter(|id| !seen.insert(id.clone()))
            .collect();
        assert!(dups.is_empty(), "{locale} repeats: {}", dups.join(", "));
    }
}

#[test]
fn source_only_uses_known_keys() {
    let catalogs = load_catalogs();
    let fallback: BTreeSet<String> = message_ids(&catalogs[FALLBACK]).into_iter().collect();

    let mut referenced = BTreeSet::new();
    referenced_ids(&PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src"), &mut referenced);
    assert!(referenced.contains("heatmap-tooltip"));

    let unknown: Vec<_> = referenced.difference(&fallback).cloned().collect();
    assert!(unknown.is_empty(), "t! references undefined keys: {}", unknown.join(", "));
}

#[test]
fn calendar_names_are_complete() {
    let months = [
        "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
    ];
    let weekdays = ["sun", "mon", "tue", "wed", "thu", "fri", "sat"];

    for (locale, src) in load_catalogs() {
        let keys: BTreeSet<String> = message_ids(&src).into_iter().collect();
        for form in ["short", "long"] {
            for month in months {
                let id = format!("month-{form}-{month}");
                assert!(keys.contains(&id), "{locale} lacks {id}");
            }
            for day in weekdays {
                let id = format!("weekday-{form}-{day}");
                assert!(keys.contains(&id), "{locale} lacks {id}");
            }
        }
    }
}

#[test]
fn plural_selectors_have_a_default_variant() {
    for (locale, src) in load_catalogs() {
        let selectors = src.matches("->").count();
        let defaults = src.matches("*[").count();
        assert_eq!(
            selectors, defaults,
            "{locale}: every select expression needs exactly one *[default] variant"
        );
    }
}

#[test]
fn config_domain_matches_catalog_files() {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("i18n.toml");
    let config = fs::read_to_string(&config_path).expect("i18n.toml is readable");
    let domain = config
        .lines()
        .filter_map(|line| line.split_once('='))
        .find(|(key, _)| key.trim() == "domain")
        .map(|(_, value)| value.trim().trim_matches('"').to_string())
        .expect("i18n.toml pins a fluent domain");

    assert_eq!(format!("{domain}.ftl"), FTL_FILENAME);
    assert!(i18n_root().join(FALLBACK).join(FTL_FILENAME).is_file());
}

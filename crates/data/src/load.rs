use anyhow::{bail, Context};
use flip7_core::{DeckProfile, RuleSet};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

pub fn load_rule_set(path: &Path) -> anyhow::Result<RuleSet> {
    let rules: RuleSet = load_json(path)?;
    if rules.flip_bonus < 0 {
        bail!("flipBonus must not be negative in {}", path.display());
    }
    Ok(rules)
}

pub fn load_rule_set_or_default(path: &Path) -> anyhow::Result<RuleSet> {
    if !path.exists() {
        return Ok(RuleSet::default());
    }
    load_rule_set(path)
}

pub fn load_deck_profile(path: &Path) -> anyhow::Result<DeckProfile> {
    let profile: DeckProfile = load_json(path)?;
    if !profile.is_valid() {
        bail!("deck profile has negative counts in {}", path.display());
    }
    Ok(profile)
}

fn load_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> anyhow::Result<T> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let value = serde_json::from_str(&raw).with_context(|| format!("parse {}", path.display()))?;
    Ok(value)
}

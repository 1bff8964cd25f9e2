use std::collections::BTreeMap;
use std::fmt;

use crate::error::{GitPrepError, Result};
use crate::git::GitRepository;
use crate::ui;

/// A git config key split into section, optional subsection, and name.
///
/// Mirrors git's three-level config key model: `core.hooksPath` has no
/// subsection, `custom.config.name` has subsection `config`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigKey {
    pub section: String,
    pub subsection: Option<String>,
    pub name: String,
}

impl ConfigKey {
    /// Parse a dotted config key string.
    ///
    /// Exactly two components yield `(section, None, name)`; exactly three
    /// yield `(section, Some(subsection), name)`. Anything else, including
    /// empty components, is a validation error naming the offending key.
    pub fn parse(raw: &str) -> Result<Self> {
        let parts: Vec<&str> = raw.split('.').collect();
        if parts.len() < 2 || parts.len() > 3 || parts.iter().any(|p| p.is_empty()) {
            return Err(GitPrepError::invalid_config_key(raw));
        }

        Ok(ConfigKey {
            section: parts[0].to_string(),
            subsection: (parts.len() == 3).then(|| parts[1].to_string()),
            name: parts[parts.len() - 1].to_string(),
        })
    }

    /// Reassemble the dotted form understood by git.
    pub fn canonical(&self) -> String {
        match &self.subsection {
            Some(subsection) => format!("{}.{}.{}", self.section, subsection, self.name),
            None => format!("{}.{}", self.section, self.name),
        }
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.canonical())
    }
}

/// Apply dotted-key → value entries to the repository-local config.
///
/// Every key is parsed before the first write, so a single bad key never
/// leaves a partially applied batch. Write order follows map iteration order
/// but is not semantically significant.
pub fn apply_entries(repo: &GitRepository, entries: &BTreeMap<String, String>) -> Result<()> {
    let parsed: Vec<(ConfigKey, &str)> = entries
        .iter()
        .map(|(raw, value)| ConfigKey::parse(raw).map(|key| (key, value.as_str())))
        .collect::<Result<_>>()?;

    let mut config = repo.local_config()?;
    for (key, value) in parsed {
        config.set_str(&key.canonical(), value)?;
        ui::display_success(&format!("Git config '{}' set to - {}", key, value));
    }
    Ok(())
}

/// Point core.hooksPath at a custom hooks directory.
pub fn set_hooks_path(repo: &GitRepository, hooks_path: &str) -> Result<()> {
    let mut config = repo.local_config()?;
    config.set_str("core.hooksPath", hooks_path)?;
    ui::display_success(&format!("Git hooks directory set to - {}", hooks_path));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_repo() -> (TempDir, GitRepository) {
        let tmp = TempDir::new().unwrap();
        let repo = GitRepository::initialise(tmp.path()).unwrap();
        (tmp, repo)
    }

    #[test]
    fn test_parse_two_components() {
        let key = ConfigKey::parse("core.hooksPath").unwrap();
        assert_eq!(key.section, "core");
        assert_eq!(key.subsection, None);
        assert_eq!(key.name, "hooksPath");
    }

    #[test]
    fn test_parse_three_components() {
        let key = ConfigKey::parse("custom.config.name").unwrap();
        assert_eq!(key.section, "custom");
        assert_eq!(key.subsection.as_deref(), Some("config"));
        assert_eq!(key.name, "name");
    }

    #[test]
    fn test_parse_rejects_wrong_component_counts() {
        for raw in ["", "nodots", "a.b.c.d", "a.b.c.d.e"] {
            let result = ConfigKey::parse(raw);
            assert!(
                matches!(result, Err(GitPrepError::InvalidConfigKey(ref k)) if k == raw),
                "expected '{}' to be rejected",
                raw
            );
        }
    }

    #[test]
    fn test_parse_rejects_empty_components() {
        for raw in ["a..b", ".a.b", "a.b."] {
            assert!(ConfigKey::parse(raw).is_err(), "'{}' should be invalid", raw);
        }
    }

    #[test]
    fn test_canonical_round_trips() {
        for raw in ["core.hooksPath", "custom.config.name"] {
            assert_eq!(ConfigKey::parse(raw).unwrap().canonical(), raw);
        }
    }

    #[test]
    fn test_apply_entries_sets_plain_key() {
        let (_tmp, repo) = temp_repo();
        let mut entries = BTreeMap::new();
        entries.insert("core.hooksPath".to_string(), "hooks-path/".to_string());

        apply_entries(&repo, &entries).unwrap();

        let config = repo.local_config().unwrap();
        assert_eq!(config.get_string("core.hooksPath").unwrap(), "hooks-path/");
    }

    #[test]
    fn test_apply_entries_sets_subsection_key() {
        let (_tmp, repo) = temp_repo();
        let mut entries = BTreeMap::new();
        entries.insert("custom.config.name".to_string(), "custom".to_string());

        apply_entries(&repo, &entries).unwrap();

        let config = repo.local_config().unwrap();
        assert_eq!(config.get_string("custom.config.name").unwrap(), "custom");
    }

    #[test]
    fn test_apply_entries_fails_fast_on_bad_key() {
        let (_tmp, repo) = temp_repo();
        let mut entries = BTreeMap::new();
        // "aaa" sorts before the valid key, but validation must reject the
        // batch before anything is written at all.
        entries.insert("aaa".to_string(), "broken".to_string());
        entries.insert("zzz.name".to_string(), "value".to_string());

        let result = apply_entries(&repo, &entries);
        assert!(matches!(result, Err(GitPrepError::InvalidConfigKey(ref k)) if k == "aaa"));

        let config = repo.local_config().unwrap();
        assert!(config.get_string("zzz.name").is_err());
    }

    #[test]
    fn test_apply_entries_overwrites_existing_value() {
        let (_tmp, repo) = temp_repo();
        let mut entries = BTreeMap::new();
        entries.insert("custom.setting".to_string(), "first".to_string());
        apply_entries(&repo, &entries).unwrap();

        entries.insert("custom.setting".to_string(), "second".to_string());
        apply_entries(&repo, &entries).unwrap();

        let config = repo.local_config().unwrap();
        assert_eq!(config.get_string("custom.setting").unwrap(), "second");
    }

    #[test]
    fn test_set_hooks_path() {
        let (_tmp, repo) = temp_repo();
        set_hooks_path(&repo, "hooks/").unwrap();

        let config = repo.local_config().unwrap();
        assert_eq!(config.get_string("core.hooksPath").unwrap(), "hooks/");
    }
}

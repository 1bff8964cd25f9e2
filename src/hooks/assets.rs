//! Bundled default hook scripts compiled into the binary.
//!
//! A hook source that does not resolve to a file on the filesystem is looked
//! up here instead, mirroring the packaged-resource lookup build tools use for
//! scripts shipped with the tool itself.

/// Compiled-in table of bundled script name to script content.
const BUNDLED_SCRIPTS: &[(&str, &[u8])] = &[
    ("pre-commit.sh", include_bytes!("../../assets/pre-commit.sh")),
    ("commit-msg.sh", include_bytes!("../../assets/commit-msg.sh")),
];

/// Look up the content of a bundled script by name.
pub fn bundled_script(name: &str) -> Option<&'static [u8]> {
    BUNDLED_SCRIPTS
        .iter()
        .find(|(script_name, _)| *script_name == name)
        .map(|(_, bytes)| *bytes)
}

/// Names of every bundled script, for listing and diagnostics.
pub fn bundled_names() -> impl Iterator<Item = &'static str> {
    BUNDLED_SCRIPTS.iter().map(|(name, _)| *name)
}

// SPDX-License-Identifier: MPL-2.0
//! Platform capability probing.
//!
//! Optional integrations are probed once at startup. A missing capability
//! downgrades the related feature instead of failing: no system theme
//! detection means the System theme mode falls back to dark, no persistent
//! storage means preferences live for the session only.

use std::path::Path;

/// What the host platform supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// OS light/dark preference can be read.
    pub system_theme: bool,
    /// Config/state directories are writable.
    pub persistent_storage: bool,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self {
            system_theme: true,
            persistent_storage: true,
        }
    }
}

impl Capabilities {
    /// Probes the platform. `config_dir` is the directory preferences
    /// persist to; storage is degraded when it cannot be created.
    #[must_use]
    pub fn probe(config_dir: &Path) -> Self {
        let system_theme = dark_light::detect().is_ok();
        let persistent_storage = std::fs::create_dir_all(config_dir)
            .map(|()| {
                // A directory we cannot write into is as good as absent.
                !config_dir
                    .metadata()
                    .map(|m| m.permissions().readonly())
                    .unwrap_or(true)
            })
            .unwrap_or(false);

        Self {
            system_theme,
            persistent_storage,
        }
    }

    /// i18n keys for warnings about degraded features, for startup toasts.
    #[must_use]
    pub fn degradation_warnings(&self) -> Vec<&'static str> {
        let mut warnings = Vec::new();
        if !self.system_theme {
            warnings.push("warning-no-system-theme");
        }
        if !self.persistent_storage {
            warnings.push("warning-no-storage");
        }
        warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn probe_accepts_a_writable_directory() {
        let dir = tempdir().unwrap();
        let caps = Capabilities::probe(dir.path());
        assert!(caps.persistent_storage);
    }

    #[test]
    fn full_capabilities_produce_no_warnings() {
        let caps = Capabilities::default();
        assert!(caps.degradation_warnings().is_empty());
    }

    #[test]
    fn each_missing_capability_warns_once() {
        let caps = Capabilities {
            system_theme: false,
            persistent_storage: false,
        };
        let warnings = caps.degradation_warnings();
        assert_eq!(warnings.len(), 2);
        assert!(warnings.contains(&"warning-no-system-theme"));
        assert!(warnings.contains(&"warning-no-storage"));
    }
}

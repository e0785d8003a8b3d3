use powerup_core::{PowerUpError, PowerUpResult};
use serde::Serialize;
use std::borrow::Cow;
use std::collections::HashSet;

/// A supported IDE and the protocol its CodeStream extension listens on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IdeRecord {
    pub ide_name: &'static str,
    /// URI scheme prefix, always ends with `/`
    pub protocol: &'static str,
    /// Stable identifier persisted as the board preference
    pub moniker: &'static str,
    pub download_url: &'static str,
    /// Presentation only: draw a separator after this entry
    #[serde(skip_serializing_if = "is_false")]
    pub sep_after: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

const JETBRAINS_PLUGIN_URL: &str = "https://plugins.jetbrains.com/plugin/12206-codestream";

/// Compiled-in catalogue. The first entry is the default IDE.
pub const CATALOG: &[IdeRecord] = &[
    IdeRecord {
        ide_name: "VS Code",
        protocol: "vscode://codestream.codestream/",
        moniker: "vsc",
        download_url: "https://marketplace.visualstudio.com/items?itemName=CodeStream.codestream",
        sep_after: true,
    },
    IdeRecord {
        ide_name: "Visual Studio",
        protocol: "codestream-vs://codestream/",
        moniker: "vs",
        download_url:
            "https://marketplace.visualstudio.com/items?itemName=CodeStream.codestream-vs",
        sep_after: true,
    },
    IdeRecord {
        ide_name: "Android Studio",
        protocol: "jetbrains://studio/codestream/",
        moniker: "studio",
        download_url: JETBRAINS_PLUGIN_URL,
        sep_after: false,
    },
    IdeRecord {
        ide_name: "AppCode",
        protocol: "jetbrains://appcode/codestream/",
        moniker: "appcode",
        download_url: JETBRAINS_PLUGIN_URL,
        sep_after: false,
    },
    IdeRecord {
        ide_name: "CLion",
        protocol: "jetbrains://clion/codestream/",
        moniker: "clion",
        download_url: JETBRAINS_PLUGIN_URL,
        sep_after: false,
    },
    IdeRecord {
        ide_name: "GoLand",
        protocol: "jetbrains://goland/codestream/",
        moniker: "goland",
        download_url: JETBRAINS_PLUGIN_URL,
        sep_after: false,
    },
    IdeRecord {
        ide_name: "IntelliJ IDEA",
        protocol: "jetbrains://idea/codestream/",
        moniker: "idea",
        download_url: JETBRAINS_PLUGIN_URL,
        sep_after: false,
    },
    IdeRecord {
        ide_name: "PhpStorm",
        protocol: "jetbrains://php-storm/codestream/",
        moniker: "php-storm",
        download_url: JETBRAINS_PLUGIN_URL,
        sep_after: false,
    },
    IdeRecord {
        ide_name: "PyCharm",
        protocol: "jetbrains://pycharm/codestream/",
        moniker: "pycharm",
        download_url: JETBRAINS_PLUGIN_URL,
        sep_after: false,
    },
    IdeRecord {
        ide_name: "RubyMine",
        protocol: "jetbrains://rubymine/codestream/",
        moniker: "rubymine",
        download_url: JETBRAINS_PLUGIN_URL,
        sep_after: false,
    },
    IdeRecord {
        ide_name: "Rider",
        protocol: "jetbrains://rd/codestream/",
        moniker: "rd",
        download_url: JETBRAINS_PLUGIN_URL,
        sep_after: false,
    },
    IdeRecord {
        ide_name: "WebStorm",
        protocol: "jetbrains://web-storm/codestream/",
        moniker: "web-storm",
        download_url: JETBRAINS_PLUGIN_URL,
        sep_after: true,
    },
    IdeRecord {
        ide_name: "Atom",
        protocol: "atom://codestream/",
        moniker: "atom",
        download_url: "https://atom.io/packages/codestream",
        sep_after: false,
    },
];

/// Read-only lookup over an IDE catalogue
#[derive(Debug, Clone)]
pub struct IdeRegistry {
    records: Cow<'static, [IdeRecord]>,
    default_index: usize,
}

impl Default for IdeRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl IdeRegistry {
    pub fn builtin() -> Self {
        Self {
            records: Cow::Borrowed(CATALOG),
            default_index: 0,
        }
    }

    /// Use `moniker` as the fallback record instead of the first-declared one.
    /// An absent or unknown moniker keeps the current default.
    pub fn with_default(mut self, moniker: Option<&str>) -> Self {
        let Some(moniker) = moniker else {
            return self;
        };
        match self.records.iter().position(|r| r.moniker == moniker) {
            Some(index) => self.default_index = index,
            None => tracing::warn!("Configured default IDE '{}' is not in the catalogue", moniker),
        }
        self
    }

    /// Build a registry from arbitrary records.
    ///
    /// Duplicates are rejected on insert rather than shadowed, so lookup never
    /// depends on declaration order.
    pub fn from_records(records: Vec<IdeRecord>) -> PowerUpResult<Self> {
        Self::validate(&records)?;
        Ok(Self {
            records: Cow::Owned(records),
            default_index: 0,
        })
    }

    fn validate(records: &[IdeRecord]) -> PowerUpResult<()> {
        if records.is_empty() {
            return Err(PowerUpError::Validation(
                "IDE catalogue must not be empty".to_string(),
            ));
        }

        let mut monikers = HashSet::new();
        let mut protocols = HashSet::new();
        let mut names = HashSet::new();
        for record in records {
            if record.moniker.is_empty() {
                return Err(PowerUpError::Validation(format!(
                    "IDE '{}' has an empty moniker",
                    record.ide_name
                )));
            }
            if record.protocol.is_empty() || !record.protocol.ends_with('/') {
                return Err(PowerUpError::Validation(format!(
                    "IDE '{}' has malformed protocol '{}'",
                    record.moniker, record.protocol
                )));
            }
            if !monikers.insert(record.moniker) {
                return Err(PowerUpError::Validation(format!(
                    "Duplicate IDE moniker: {}",
                    record.moniker
                )));
            }
            if !protocols.insert(record.protocol) {
                return Err(PowerUpError::Validation(format!(
                    "Duplicate IDE protocol: {}",
                    record.protocol
                )));
            }
            if !names.insert(record.ide_name) {
                return Err(PowerUpError::Validation(format!(
                    "Duplicate IDE name: {}",
                    record.ide_name
                )));
            }
        }
        Ok(())
    }

    pub fn lookup(&self, moniker: &str) -> Option<&IdeRecord> {
        self.records.iter().find(|record| record.moniker == moniker)
    }

    /// All records in declaration order
    pub fn all(&self) -> &[IdeRecord] {
        &self.records
    }

    /// Record used whenever no preference resolves: the configured default,
    /// else the first-declared entry
    pub fn default_record(&self) -> &IdeRecord {
        // default_index is always in bounds: records are non-empty by
        // construction and with_default only stores found positions.
        &self.records[self.default_index]
    }

    /// Resolve a moniker, or the default record when it is absent or unknown
    pub fn resolve(&self, moniker: Option<&str>) -> &IdeRecord {
        match moniker.and_then(|m| self.lookup(m)) {
            Some(record) => record,
            None => {
                if let Some(unknown) = moniker {
                    tracing::debug!("Unknown IDE moniker '{}', using default", unknown);
                }
                self.default_record()
            }
        }
    }

    /// Records split into presentation groups at every `sep_after` marker
    pub fn groups(&self) -> Vec<&[IdeRecord]> {
        let mut groups = Vec::new();
        let mut start = 0;
        for (idx, record) in self.records.iter().enumerate() {
            if record.sep_after {
                groups.push(&self.records[start..=idx]);
                start = idx + 1;
            }
        }
        if start < self.records.len() {
            groups.push(&self.records[start..]);
        }
        groups
    }
}

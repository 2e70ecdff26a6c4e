//! Input and output records of the configuration resolver

use std::fmt;

/// Three-state git flag: `--git`, `--no-git`, or neither
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GitChoice {
    Enabled,
    Disabled,
    #[default]
    Unspecified,
}

impl GitChoice {
    /// Build from the two mutually-overriding CLI switches
    pub fn from_flags(git: bool, no_git: bool) -> Self {
        match (git, no_git) {
            (true, _) => Self::Enabled,
            (_, true) => Self::Disabled,
            _ => Self::Unspecified,
        }
    }

    /// The explicit value, if any
    pub fn explicit(self) -> Option<bool> {
        match self {
            Self::Enabled => Some(true),
            Self::Disabled => Some(false),
            Self::Unspecified => None,
        }
    }
}

/// Values supplied by the invoking shell
///
/// Every field is optional; `None` means "not supplied" and is distinct from
/// an explicit value. Empty strings are treated as not supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawInputs {
    /// Positional project name
    pub project_name: Option<String>,
    /// `-t/--project-type`
    pub project_type: Option<String>,
    /// `-g/--git` / `--no-git`
    pub git: GitChoice,
    /// `-p/--pm`
    pub package_manager: Option<String>,
    /// `-o/--open`
    pub open: bool,
    /// `-y/--yes`
    pub yes: bool,
}

impl RawInputs {
    /// Drop empty strings so they behave like absent values
    pub fn normalized(mut self) -> Self {
        self.project_name = non_empty(self.project_name);
        self.project_type = non_empty(self.project_type);
        self.package_manager = non_empty(self.package_manager);
        self
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// The single validated record that drives the rest of the run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub project_type: String,
    pub project_name: String,
    pub use_git: bool,
    pub package_manager: String,
    pub open: bool,
}

impl fmt::Display for ResolvedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} '{}' (git: {}, pm: {}, open: {})",
            self.project_type,
            self.project_name,
            yes_no(self.use_git),
            self.package_manager,
            yes_no(self.open)
        )
    }
}

/// Render a boolean the way the configuration summary does
pub fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

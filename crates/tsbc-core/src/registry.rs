//! Compiled-in catalog of project templates and package managers
//!
//! Both tables are fixed at build time. The first project type is the
//! default template; the package-manager table holds exactly `npm`, `yarn`
//! and `pnpm`.

/// Template identifiers, in display order. The first entry is the default.
pub static PROJECT_TYPES: &[&str] = &[
    "bc-controladdin-typescript-template",
    "bc-controladdin-react-ts-template",
    "bc-controladdin-react-vite-ts-template",
    "bc-controladdin-svelte-vite-ts-template",
    "bc-controladdin-vue-vite-ts-template",
];

/// Name of the package manager used when none is given.
pub const DEFAULT_PACKAGE_MANAGER: &str = "npm";

/// Project name used when no positional argument is given.
pub const DEFAULT_PROJECT_NAME: &str = "typescript-bc";

/// Metadata needed to drive one package manager
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackageManagerDescriptor {
    /// Registry key (`npm`, `yarn`, `pnpm`)
    pub name: &'static str,
    /// Command that succeeds when the manager is installed
    pub check: &'static str,
    /// Command that installs the project's dependencies
    pub install: &'static str,
    /// Lock file written by `install`
    pub lock: &'static str,
}

/// All supported package managers
pub static PACKAGE_MANAGERS: &[PackageManagerDescriptor] = &[
    PackageManagerDescriptor {
        name: "npm",
        check: "npm --version",
        install: "npm install",
        lock: "package-lock.json",
    },
    PackageManagerDescriptor {
        name: "yarn",
        check: "yarn --version",
        install: "yarn install",
        lock: "yarn.lock",
    },
    PackageManagerDescriptor {
        name: "pnpm",
        check: "pnpm --version",
        install: "pnpm install",
        lock: "pnpm-lock.yaml",
    },
];

/// The default template (first catalog entry)
pub fn default_project_type() -> &'static str {
    PROJECT_TYPES[0]
}

/// Look up a package manager by its exact key
pub fn package_manager(name: &str) -> Option<&'static PackageManagerDescriptor> {
    PACKAGE_MANAGERS.iter().find(|pm| pm.name == name)
}

/// Package manager keys in registry order
pub fn package_manager_names() -> Vec<&'static str> {
    PACKAGE_MANAGERS.iter().map(|pm| pm.name).collect()
}

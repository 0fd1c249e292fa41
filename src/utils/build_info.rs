/// What `version` reports, embedded by `build.rs`.
#[derive(Debug, Clone, Copy)]
pub struct BuildMetadata {
    pub version: &'static str,
    /// Short git hash, suffixed `-dirty` for uncommitted builds.
    pub commit: &'static str,
    pub built_on: &'static str,
    pub target: &'static str,
}

pub fn current() -> BuildMetadata {
    BuildMetadata {
        version: env!("CARGO_PKG_VERSION"),
        commit: option_env!("BUDGETY_COMMIT").unwrap_or("unknown"),
        built_on: option_env!("BUDGETY_BUILT_ON").unwrap_or("unknown"),
        target: option_env!("BUDGETY_TARGET").unwrap_or("unknown"),
    }
}

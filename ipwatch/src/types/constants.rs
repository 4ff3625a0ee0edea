//! Default values shared by the configuration layer and the front-ends.

/// Display defaults for the status window.
pub mod display {
    pub const WINDOW_TITLE: &str = "F1/10 GUI";
    pub const BANNER: &str = "F1/10";
    pub const MODE_LABEL: &str = "Mode: Autonomous";
}

/// Refresh timing.
pub mod timing {
    /// Period between address list refreshes (1 second).
    pub const REFRESH_INTERVAL_MS: u64 = 1000;

    /// Longest accepted period; main-loop timeouts take a 32-bit millisecond count.
    pub const MAX_REFRESH_INTERVAL_MS: u64 = u32::MAX as u64;
}

/// Configuration file location, relative to the user config directory.
pub mod paths {
    pub const CONFIG_DIR: &str = "ipwatch";
    pub const CONFIG_FILE: &str = "config.toml";
}

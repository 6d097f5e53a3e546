//! Debugging feature flags.

pub struct LogFlags {
    /// Log every regeneration (trend, timeframe, point counts).
    pub log_generation: bool,

    /// Log each walk step (very chatty for quarter views).
    pub log_walk_steps: bool,

    /// Log timeframe/trend selection changes in the viewer.
    pub log_selection: bool,
}

pub const DF: LogFlags = LogFlags {
    log_generation: true,
    log_selection: true,

    log_walk_steps: false,
};

/// Activate trace_time macro (for cool scope-level timing)
pub const LOG_PERFORMANCE: bool = false;

/// Ceiling for any configured `max_limit`.
pub const HARD_MAX_LIMIT: i64 = 1000;

/// Tunables shared by the normalizer, validator and compiler.
///
/// - `default_limit` is used whenever a plan's limit is missing or unusable.
/// - `max_limit` is the upper clamp for any limit.
/// - `fallback_measure_column` replaces measure columns that look like
///   conditional expressions.
///
/// Invariant: `1 <= default_limit <= max_limit <= HARD_MAX_LIMIT`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanConfig {
    default_limit: i64,
    max_limit: i64,
    fallback_measure_column: String,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            default_limit: 100,
            max_limit: 1000,
            fallback_measure_column: "ActionID".to_string(),
        }
    }
}

impl PlanConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Out-of-range values are pulled into bounds: `max_limit` into
    /// `[1, HARD_MAX_LIMIT]`, then `default_limit` into `[1, max_limit]`.
    pub fn with_limits(mut self, default_limit: i64, max_limit: i64) -> Self {
        self.max_limit = max_limit.clamp(1, HARD_MAX_LIMIT);
        self.default_limit = default_limit.clamp(1, self.max_limit);
        self
    }

    pub fn with_fallback_measure_column(mut self, column: &str) -> Self {
        self.fallback_measure_column = column.to_string();
        self
    }

    pub fn default_limit(&self) -> i64 {
        self.default_limit
    }

    pub fn max_limit(&self) -> i64 {
        self.max_limit
    }

    pub fn fallback_measure_column(&self) -> &str {
        &self.fallback_measure_column
    }

    /// Bring an integer limit into `[1, max_limit]`: below 1 resets to the default, above the max clamps.
    pub fn clamp_limit(&self, limit: i64) -> i64 {
        if limit < 1 {
            self.default_limit
        } else if limit > self.max_limit {
            self.max_limit
        } else {
            limit
        }
    }
}

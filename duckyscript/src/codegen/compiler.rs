/// Longest DELAY accepted by default: one day.
pub const DEFAULT_MAX_DELAY_MS: u32 = 86_400_000;

/// Knobs for a compilation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompileOptions {
    /// Fail a line instead of silently skipping unknown key names, characters
    /// without a key, and combos holding more than six keys.
    pub strict: bool,
    /// DELAY lines above this fail instead of emitting idle reports.
    pub max_delay_ms: u32,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl CompileOptions {
    pub const fn new() -> Self {
        Self {
            strict: false,
            max_delay_ms: DEFAULT_MAX_DELAY_MS,
        }
    }

    pub const fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub const fn max_delay_ms(mut self, max_delay_ms: u32) -> Self {
        self.max_delay_ms = max_delay_ms;
        self
    }
}

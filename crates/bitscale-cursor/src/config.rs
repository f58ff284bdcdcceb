//! Cursor configuration
//!
//! Two environment variables control cursor preparation:
//!
//! - `CHIPMUNK_CURSOR_SCALE`: integer scale factor. Values in `1..=4` are
//!   used; anything else (including garbage) keeps the default of 2.
//! - `CHIPMUNK_DEBUG_CURSOR`: turns scaling diagnostics on when the value
//!   is a non-zero integer or starts with `y`/`Y`.
//!
//! Numbers are read the way `atoi` reads them: leading whitespace, an
//! optional sign, then as many digits as there are. `"3x"` is 3 and
//! `"abc"` is 0.

use bitscale_transform::{MAX_SCALE_FACTOR, MIN_SCALE_FACTOR};
use log::debug;

/// Environment variable holding the cursor scale factor
pub const SCALE_ENV: &str = "CHIPMUNK_CURSOR_SCALE";

/// Environment variable enabling scaling diagnostics
pub const DEBUG_ENV: &str = "CHIPMUNK_DEBUG_CURSOR";

/// Scale factor used when none is configured
pub const DEFAULT_CURSOR_SCALE: u32 = 2;

/// Cursor preparation settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorConfig {
    /// Scale factor applied to every glyph, in `1..=4`
    pub scale: u32,
    /// Emit detailed scaling diagnostics
    pub verbose: bool,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            scale: DEFAULT_CURSOR_SCALE,
            verbose: false,
        }
    }
}

impl CursorConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    ///
    /// `lookup` is called once per variable name and returns its value,
    /// or `None` when unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(SCALE_ENV) {
            let parsed = parse_c_int(&value);
            if (i64::from(MIN_SCALE_FACTOR)..=i64::from(MAX_SCALE_FACTOR)).contains(&parsed) {
                config.scale = parsed as u32;
            } else {
                debug!("ignoring {SCALE_ENV}={value:?}; keeping scale {}", config.scale);
            }
        }

        if let Some(value) = lookup(DEBUG_ENV) {
            config.verbose = parse_c_int(&value) != 0 || value.starts_with(['y', 'Y']);
        }

        debug!(
            "cursor config: scale={} verbose={}",
            config.scale, config.verbose
        );
        config
    }

    /// Return this configuration with a new scale factor, clamped to
    /// `1..=4`.
    pub fn with_scale(mut self, scale: u32) -> Self {
        self.scale = scale.clamp(MIN_SCALE_FACTOR, MAX_SCALE_FACTOR);
        self
    }

    /// Return this configuration with diagnostics turned on or off.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

/// Parse a leading integer with `atoi` rules; no digits yields 0.
fn parse_c_int(s: &str) -> i64 {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let value = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, b| {
            acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
        });
    if negative { -value } else { value }
}

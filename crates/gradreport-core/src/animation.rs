//! Visibility-triggered animations: counters, bars, reveal
//!
//! Every animation starts at most once per page load. The trigger is an
//! explicit [`OneShot`] that goes `Pending -> Triggered` and never back.
//! Counter values are computed per animation frame from elapsed time, so
//! the web layer only has to feed `requestAnimationFrame` timestamps.

use crate::error::ParseError;

// =============================================================================
// EASING
// =============================================================================

/// Cubic ease-out: fast start, slow finish
/// t is clamped to [0, 1]
#[inline]
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

// =============================================================================
// ONE-SHOT TRIGGER
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OneShot {
    #[default]
    Pending,
    Triggered,
}

impl OneShot {
    /// True exactly once: on the first call
    pub fn fire(&mut self) -> bool {
        match self {
            OneShot::Pending => {
                *self = OneShot::Triggered;
                true
            }
            OneShot::Triggered => false,
        }
    }

    pub fn is_triggered(&self) -> bool {
        matches!(self, OneShot::Triggered)
    }
}

// =============================================================================
// COUNTERS
// =============================================================================

/// Parsed `data-count` / `data-suffix` pair
#[derive(Debug, Clone, PartialEq)]
pub struct CounterTarget {
    value: f64,
    /// Fraction digits of the literal; `None` for integer literals
    decimals: Option<usize>,
    suffix: String,
}

/// One rendered frame
#[derive(Debug, Clone, PartialEq)]
pub struct CounterFrame {
    pub text: String,
    pub done: bool,
}

impl CounterTarget {
    /// Parse a literal such as `"12,345"` or `"1234.5"`
    pub fn parse(raw: &str, suffix: &str) -> Result<Self, ParseError> {
        let cleaned: String = raw.trim().chars().filter(|&c| c != ',').collect();
        let value: f64 = cleaned
            .parse()
            .map_err(|_| ParseError::NotANumber(raw.to_string()))?;
        if !value.is_finite() {
            return Err(ParseError::NotFinite(raw.to_string()));
        }

        let decimals = cleaned.split_once('.').map(|(_, frac)| frac.len());

        Ok(Self {
            value,
            decimals,
            suffix: suffix.to_string(),
        })
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn decimals(&self) -> Option<usize> {
        self.decimals
    }

    fn format(&self, current: f64, separator: &str) -> String {
        let number = match self.decimals {
            Some(decimals) => format!("{:.*}", decimals, current),
            None => group_thousands(current, separator),
        };
        format!("{}{}", number, self.suffix)
    }

    /// Exact target text shown when the animation ends
    pub fn final_text(&self, separator: &str) -> String {
        self.format(self.value, separator)
    }

    /// Text at `elapsed_ms` into an animation lasting `duration_ms`
    pub fn frame(&self, elapsed_ms: f64, duration_ms: f64, separator: &str) -> CounterFrame {
        if elapsed_ms >= duration_ms {
            return CounterFrame {
                text: self.final_text(separator),
                done: true,
            };
        }

        let eased = ease_out_cubic(elapsed_ms / duration_ms);
        CounterFrame {
            text: self.format(self.value * eased, separator),
            done: false,
        }
    }
}

/// `1234567` -> `1.234.567` with separator `.`; `n` is rounded to an
/// integer first
pub fn group_thousands(n: f64, separator: &str) -> String {
    // adding 0.0 turns -0 into 0
    let rounded = n.round() + 0.0;
    let digits = format!("{:.0}", rounded.abs());
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 * separator.len() + 1);
    if rounded < 0.0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(c);
    }
    out
}

// =============================================================================
// BARS / REVEAL
// =============================================================================

/// Target width for `data-pct`, clamped to 0..=100
pub fn parse_bar_percent(raw: &str) -> Result<f64, ParseError> {
    let pct: f64 = raw
        .trim()
        .trim_end_matches('%')
        .parse()
        .map_err(|_| ParseError::NotANumber(raw.to_string()))?;
    if !pct.is_finite() {
        return Err(ParseError::NotFinite(raw.to_string()));
    }
    Ok(pct.clamp(0.0, 100.0))
}

/// Animation delay for the `index`-th staggered card
pub fn stagger_delay(index: usize, step_ms: u32) -> String {
    format!("{}ms", index as u64 * u64::from(step_ms))
}

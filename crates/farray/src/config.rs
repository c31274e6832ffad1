//! Process-wide configuration of integer division semantics.
//!
//! The defaults can be overridden with environment variables, read once on first use:
//!
//! * `FARRAY_INT_ROUNDING`: `truncate` (default) rounds integer quotients toward zero, `floor`
//!   rounds them toward negative infinity (with a matching sign for the remainder).
//! * `FARRAY_INT_DIV_ZERO`: `error` (default) fails integer division and modulo by zero with
//!   [`ArrayError::DivisionByZero`], `zero` makes them produce 0 instead.
//!
//! Floating-point division is unaffected and always follows IEEE 754.
//!
//! [`ArrayError::DivisionByZero`]: crate::ArrayError::DivisionByZero

use std::{
    env::{self, VarError},
    str::FromStr,
};

use once_cell::sync::Lazy;
use thiserror::Error;

const ROUNDING_VAR: &str = "FARRAY_INT_ROUNDING";
const DIV_ZERO_VAR: &str = "FARRAY_INT_DIV_ZERO";

static GLOBAL: Lazy<Config> = Lazy::new(|| {
    let config = Config::from_env();
    log::debug!("resolved array configuration: {config:?}");
    config
});

/// How integer quotients are rounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rounding {
    /// Toward zero, like Rust's `/` and `%`.
    #[default]
    Truncate,
    /// Toward negative infinity; the remainder takes the sign of the divisor.
    Floor,
}

/// What integer division and modulo by zero produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ByZero {
    /// Fail the whole operation.
    #[default]
    Error,
    /// Produce 0 for the affected elements.
    Zero,
}

/// Integer division semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IntDivision {
    pub rounding: Rounding,
    pub by_zero: ByZero,
}

/// Array engine configuration.
///
/// Operations that depend on it have a `*_with` variant taking an explicit [`Config`]; the plain
/// variant uses [`Config::global`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Config {
    pub division: IntDivision,
}

impl Config {
    /// Returns the process-wide configuration, resolving it from the environment on first use.
    pub fn global() -> &'static Config {
        &GLOBAL
    }

    /// Builds a configuration from the `FARRAY_*` environment variables.
    ///
    /// Unset variables use the default. Invalid values are logged and ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name))
    }

    fn from_lookup(lookup: impl Fn(&str) -> Result<String, VarError>) -> Self {
        Self {
            division: IntDivision {
                rounding: setting(&lookup, ROUNDING_VAR),
                by_zero: setting(&lookup, DIV_ZERO_VAR),
            },
        }
    }
}

fn setting<T>(lookup: impl Fn(&str) -> Result<String, VarError>, var: &str) -> T
where
    T: FromStr<Err = InvalidSetting> + Default,
{
    match lookup(var) {
        Ok(value) => value.parse().unwrap_or_else(|e| {
            log::warn!("ignoring `{var}`: {e}");
            T::default()
        }),
        Err(VarError::NotPresent) => T::default(),
        Err(VarError::NotUnicode(s)) => {
            log::warn!(
                "ignoring `{var}`: value {} is not unicode",
                s.to_string_lossy()
            );
            T::default()
        }
    }
}

/// A configuration value that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid value '{value}', expected one of: {expected}")]
pub struct InvalidSetting {
    value: String,
    expected: &'static str,
}

impl FromStr for Rounding {
    type Err = InvalidSetting;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "truncate" => Ok(Rounding::Truncate),
            "floor" => Ok(Rounding::Floor),
            _ => Err(InvalidSetting {
                value: s.to_string(),
                expected: "truncate, floor",
            }),
        }
    }
}

impl FromStr for ByZero {
    type Err = InvalidSetting;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "error" => Ok(ByZero::Error),
            "zero" => Ok(ByZero::Zero),
            _ => Err(InvalidSetting {
                value: s.to_string(),
                expected: "error, zero",
            }),
        }
    }
}

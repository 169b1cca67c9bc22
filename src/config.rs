use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// How a hemisphere letter that is neither of the two expected ones is treated
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum HemispherePolicy {
    /// Anything other than the two expected letters fails the parse
    #[default]
    Strict,
    /// The positive letter (`N` or `E`) gives +1, any other character gives -1
    Lenient,
}

impl FromStr for HemispherePolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(HemispherePolicy::Strict),
            "lenient" => Ok(HemispherePolicy::Lenient),
            _ => Err(ConfigError::UnknownHemispherePolicy(s.to_string())),
        }
    }
}

impl fmt::Display for HemispherePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HemispherePolicy::Strict => write!(f, "strict"),
            HemispherePolicy::Lenient => write!(f, "lenient"),
        }
    }
}

/// Knobs for the coordinate grammar
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ParseConfig {
    pub hemisphere: HemispherePolicy,
}

impl ParseConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hemisphere(mut self, hemisphere: HemispherePolicy) -> Self {
        self.hemisphere = hemisphere;
        self
    }
}

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Which demo the animation loop is currently driving.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    #[default]
    Fluid,
    Quantum,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModeError {
    #[error("unknown demo mode {0:?} (expected \"fluid\" or \"quantum\")")]
    Unknown(String),
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::Fluid, Mode::Quantum];

    /// Identifier used by the mode selector and the debug API.
    pub fn id(self) -> &'static str {
        match self {
            Mode::Fluid => "fluid",
            Mode::Quantum => "quantum",
        }
    }

    /// Caption shown next to the canvas for this mode.
    pub fn caption(self) -> &'static str {
        match self {
            Mode::Fluid => "Demo: fluid dynamics. Move the mouse to stir the particles.",
            Mode::Quantum => "Demo: quantum mechanics. A 1D wave packet propagating.",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Mode::Fluid => Mode::Quantum,
            Mode::Quantum => Mode::Fluid,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Mode {
    type Err = ModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "fluid" => Ok(Mode::Fluid),
            "quantum" => Ok(Mode::Quantum),
            other => Err(ModeError::Unknown(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_ids() {
        for m in Mode::ALL {
            assert_eq!(m.id().parse::<Mode>(), Ok(m));
            assert_eq!(m.to_string(), m.id());
        }
        assert_eq!(" quantum ".parse::<Mode>(), Ok(Mode::Quantum));
    }

    #[test]
    fn rejects_unknown_ids() {
        let err = "plasma".parse::<Mode>().unwrap_err();
        assert_eq!(err, ModeError::Unknown("plasma".into()));
        assert!(err.to_string().contains("plasma"));
    }

    #[test]
    fn toggled_flips() {
        assert_eq!(Mode::Fluid.toggled(), Mode::Quantum);
        assert_eq!(Mode::Quantum.toggled().toggled(), Mode::Quantum);
    }
}

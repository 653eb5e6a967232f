//! The per-cell phase counter and its derived phase.
//!
//! A firefly is nothing more than a counter in `[0, 9]`. The phase is a
//! pure function of that counter; nothing about it is stored.

use std::fmt;

use crate::error::ConfigError;

/// The three phases of a firefly's cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Steps 0..=5. The only phase that reacts to a neighbour's flash.
    Charging,
    /// Steps 6..=8. Advances regardless of neighbours.
    NonSensitive,
    /// Step 9.
    Flash,
}

impl Phase {
    /// Map a raw counter value to its phase.
    ///
    /// # Panics
    ///
    /// Panics if `step > 9`. The engine never constructs such a value;
    /// use [`Step::new`] for untrusted input.
    pub fn of(step: u8) -> Self {
        match step {
            0..=Step::CHARGING_END => Self::Charging,
            Step::NON_SENSITIVE_START..=Step::NON_SENSITIVE_END => Self::NonSensitive,
            Step::FLASH => Self::Flash,
            _ => panic!("step {step} outside [0, {}]", Step::MAX),
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Charging => write!(f, "charging"),
            Self::NonSensitive => write!(f, "non-sensitive"),
            Self::Flash => write!(f, "flash"),
        }
    }
}

/// A phase counter guaranteed to lie in `[0, 9]`.
///
/// `Step` is one byte wide so a generation is a plain `Vec<Step>` with the
/// same layout as the row-major byte sequence used for digests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Step(u8);

impl Step {
    /// First step of the cycle, and the value a reset returns to.
    pub const CHARGING_START: u8 = 0;
    /// Last charging step.
    pub const CHARGING_END: u8 = 5;
    /// First non-sensitive step.
    pub const NON_SENSITIVE_START: u8 = 6;
    /// Last non-sensitive step.
    pub const NON_SENSITIVE_END: u8 = 8;
    /// The flashing step.
    pub const FLASH: u8 = 9;
    /// Largest valid counter value.
    pub const MAX: u8 = Self::FLASH;

    /// The start of the cycle.
    pub const ZERO: Step = Step(Self::CHARGING_START);

    /// Validate a raw counter value.
    pub fn new(value: u8) -> Result<Self, ConfigError> {
        if value > Self::MAX {
            return Err(ConfigError::StepOutOfRange { value });
        }
        Ok(Self(value))
    }

    /// Map a uniform real in `[0, 1)` onto `{0, ..., 9}` by `round(u * 9)`.
    ///
    /// The end points get half the weight of the interior values. Inputs
    /// outside `[0, 1]` are clamped.
    pub fn from_unit(u: f64) -> Self {
        let scaled = (u * f64::from(Self::MAX)).round();
        Self(scaled.clamp(0.0, f64::from(Self::MAX)) as u8)
    }

    /// The raw counter value.
    #[inline]
    pub fn get(self) -> u8 {
        self.0
    }

    /// The phase this step belongs to.
    #[inline]
    pub fn phase(self) -> Phase {
        Phase::of(self.0)
    }

    /// `true` iff this is the flashing step.
    #[inline]
    pub fn is_flashing(self) -> bool {
        self.0 == Self::FLASH
    }

    /// `true` iff a neighbouring flash can reset this cell.
    #[inline]
    pub fn is_charging(self) -> bool {
        self.0 <= Self::CHARGING_END
    }

    /// The unperturbed successor: `s + 1`, wrapping from 9 back to 0.
    #[inline]
    pub fn advance(self) -> Self {
        if self.0 >= Self::MAX {
            Self::ZERO
        } else {
            Self(self.0 + 1)
        }
    }
}

impl TryFrom<u8> for Step {
    type Error = ConfigError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Step> for u8 {
    fn from(step: Step) -> Self {
        step.0
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

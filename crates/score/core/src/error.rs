//! Error infrastructure for score-core.
//!
//! The engine has a single failure mode: a snapshot that cannot be trusted.
//! Every error is detected at the entry point before any arithmetic runs, so
//! no partial result ever escapes.

/// Severity level of an error, used for categorization by callers.
///
/// - **Validation**: invalid input, should not be retried without changes
/// - **Internal**: unexpected inconsistency that indicates a bug
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid input, rejected without retry.
    Validation,

    /// Unexpected inconsistency inside the engine.
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }
}

/// Why a numeric field was rejected.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum NumericFault {
    /// The value is not a number at all (string, bool, object, null).
    NotANumber,
    /// NaN or infinity.
    NotFinite,
    /// Negative where only non-negative values make sense.
    Negative,
    /// Fractional value in an integer field.
    NotInteger,
    /// A percentage below -100, which would flip the sign of `1 - p/100`.
    BelowMinusHundred,
    /// Larger than the field's storage allows.
    OutOfRange,
}

/// Rejection of a character stat snapshot.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ValidationError {
    /// A required field was not supplied. Unsourced stats must be sent as 0.
    #[error("missing field `{field}`")]
    MissingField { field: &'static str },

    /// A field holds a value the formulas cannot accept.
    #[error("invalid value for `{field}`: {fault}")]
    InvalidNumeric {
        field: &'static str,
        fault: NumericFault,
    },

    /// More skills than the category has slots.
    #[error("{category} skills: {count} supplied, at most {max} allowed")]
    TooManySkills {
        category: &'static str,
        count: usize,
        max: usize,
    },

    /// The class name is not a known archetype.
    #[error("unknown class `{name}`")]
    UnknownClass { name: String },

    /// Weapon minimum damage above its maximum.
    #[error("weapon damage range inverted: min {min} > max {max}")]
    InvertedWeaponRange { min: u32, max: u32 },

    /// A balance parameter is non-finite or outside its accepted range.
    #[error("score config field `{field}` is out of range")]
    InvalidConfig { field: &'static str },
}

impl ValidationError {
    pub const fn invalid(field: &'static str, fault: NumericFault) -> Self {
        Self::InvalidNumeric { field, fault }
    }

    /// Returns the severity level of this error.
    pub const fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidConfig { .. } => ErrorSeverity::Internal,
            _ => ErrorSeverity::Validation,
        }
    }

    /// Returns a static identifier for this error variant.
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::MissingField { .. } => "missing_field",
            Self::InvalidNumeric { .. } => "invalid_numeric",
            Self::TooManySkills { .. } => "too_many_skills",
            Self::UnknownClass { .. } => "unknown_class",
            Self::InvertedWeaponRange { .. } => "inverted_weapon_range",
            Self::InvalidConfig { .. } => "invalid_config",
        }
    }

    /// The offending field, when the error concerns a single field.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::MissingField { field }
            | Self::InvalidNumeric { field, .. }
            | Self::InvalidConfig { field } => Some(*field),
            Self::TooManySkills { category, .. } => Some(*category),
            Self::UnknownClass { .. } => Some("class"),
            Self::InvertedWeaponRange { .. } => Some("weapon_min_damage"),
        }
    }
}

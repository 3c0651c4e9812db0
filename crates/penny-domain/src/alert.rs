//! Budget alert severities, thresholds, and evaluation results.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Escalation level for a budget notification. Ordered `None < Warning < Danger < Critical`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    None,
    Warning,
    Danger,
    Critical,
}

impl AlertSeverity {
    /// Fixed advisory text; `None` carries no message.
    pub fn message(self) -> Option<&'static str> {
        match self {
            AlertSeverity::None => None,
            AlertSeverity::Warning => Some("You're approaching your budget limit"),
            AlertSeverity::Danger => Some("You're close to exceeding your budget!"),
            AlertSeverity::Critical => Some("Budget exceeded!"),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AlertSeverity::None => "None",
            AlertSeverity::Warning => "Warning",
            AlertSeverity::Danger => "Danger",
            AlertSeverity::Critical => "Critical",
        }
    }

    pub fn is_alert(self) -> bool {
        self != AlertSeverity::None
    }
}

impl fmt::Display for AlertSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of comparing spend against a budget.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BudgetAlert {
    /// `100 * spent / budget`, not clamped.
    pub percentage: f64,
    pub severity: AlertSeverity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl BudgetAlert {
    pub fn new(percentage: f64, severity: AlertSeverity) -> Self {
        Self {
            percentage,
            severity,
            message: severity.message().map(str::to_owned),
        }
    }

    /// Callers suppress the banner when this is false.
    pub fn should_display(&self) -> bool {
        self.severity.is_alert()
    }
}

/// Inclusive lower bounds (in percent) for each alert tier.
///
/// Tiers missing from serialized input keep their default bound.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AlertThresholds {
    pub warning: f64,
    pub danger: f64,
    pub critical: f64,
}

impl AlertThresholds {
    pub const WARNING_PERCENT: f64 = 75.0;
    pub const DANGER_PERCENT: f64 = 90.0;
    pub const CRITICAL_PERCENT: f64 = 100.0;

    pub fn new(warning: f64, danger: f64, critical: f64) -> Result<Self, ThresholdError> {
        let thresholds = Self {
            warning,
            danger,
            critical,
        };
        thresholds.validate()?;
        Ok(thresholds)
    }

    /// Requires finite, positive, strictly ascending bounds.
    pub fn validate(&self) -> Result<(), ThresholdError> {
        let bounds = [self.warning, self.danger, self.critical];
        if bounds.iter().any(|value| !value.is_finite() || *value <= 0.0) {
            return Err(ThresholdError::NonPositive);
        }
        if !(self.warning < self.danger && self.danger < self.critical) {
            return Err(ThresholdError::NotAscending);
        }
        Ok(())
    }

    /// Maps a percentage to the highest tier whose bound it reaches.
    pub fn severity_for(&self, percentage: f64) -> AlertSeverity {
        if percentage >= self.critical {
            AlertSeverity::Critical
        } else if percentage >= self.danger {
            AlertSeverity::Danger
        } else if percentage >= self.warning {
            AlertSeverity::Warning
        } else {
            AlertSeverity::None
        }
    }
}

impl Default for AlertThresholds {
    fn default() -> Self {
        Self {
            warning: Self::WARNING_PERCENT,
            danger: Self::DANGER_PERCENT,
            critical: Self::CRITICAL_PERCENT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Errors raised when validating [`AlertThresholds`].
pub enum ThresholdError {
    NonPositive,
    NotAscending,
}

impl fmt::Display for ThresholdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThresholdError::NonPositive => {
                f.write_str("alert thresholds must be finite and greater than zero")
            }
            ThresholdError::NotAscending => {
                f.write_str("alert thresholds must satisfy warning < danger < critical")
            }
        }
    }
}

impl std::error::Error for ThresholdError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severities_are_totally_ordered() {
        assert!(AlertSeverity::None < AlertSeverity::Warning);
        assert!(AlertSeverity::Warning < AlertSeverity::Danger);
        assert!(AlertSeverity::Danger < AlertSeverity::Critical);
    }

    #[test]
    fn default_bounds_are_inclusive() {
        let thresholds = AlertThresholds::default();
        assert_eq!(thresholds.severity_for(74.99), AlertSeverity::None);
        assert_eq!(thresholds.severity_for(75.0), AlertSeverity::Warning);
        assert_eq!(thresholds.severity_for(89.99), AlertSeverity::Warning);
        assert_eq!(thresholds.severity_for(90.0), AlertSeverity::Danger);
        assert_eq!(thresholds.severity_for(100.0), AlertSeverity::Critical);
        assert_eq!(thresholds.severity_for(250.0), AlertSeverity::Critical);
    }

    #[test]
    fn rejects_unordered_thresholds() {
        assert_eq!(
            AlertThresholds::new(90.0, 75.0, 100.0),
            Err(ThresholdError::NotAscending)
        );
        assert_eq!(
            AlertThresholds::new(0.0, 50.0, 100.0),
            Err(ThresholdError::NonPositive)
        );
        assert_eq!(
            AlertThresholds::new(50.0, f64::NAN, 100.0),
            Err(ThresholdError::NonPositive)
        );
    }

    #[test]
    fn none_severity_has_no_message() {
        let alert = BudgetAlert::new(10.0, AlertSeverity::None);
        assert!(alert.message.is_none());
        assert!(!alert.should_display());

        let alert = BudgetAlert::new(120.0, AlertSeverity::Critical);
        assert_eq!(alert.message.as_deref(), Some("Budget exceeded!"));
        assert!(alert.should_display());
    }

    #[test]
    fn severity_serializes_lowercase() {
        let json = serde_json::to_string(&AlertSeverity::Danger).unwrap();
        assert_eq!(json, "\"danger\"");
    }
}

//! Per-step merge outcomes

use std::fmt;
use thiserror::Error;

use super::weights::ShapeMismatch;
use crate::domain::{Faction, UnknownName};
use crate::host::{ConfigType, HostLogger};

/// Why a single override entry was left out.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SkipReason {
    #[error(transparent)]
    UnknownName(#[from] UnknownName),
    #[error(transparent)]
    ShapeMismatch(#[from] ShapeMismatch),
    #[error("{faction} has no {table} table to overwrite")]
    MissingHostTable { faction: Faction, table: String },
    #[error("host has no {0} config")]
    MissingConfig(ConfigType),
    #[error("{field} must be within 0..=100, got {value}")]
    OutOfRange { field: &'static str, value: f64 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Skipped {
    pub key: String,
    pub reason: SkipReason,
}

/// Keys applied and keys skipped for one keyed override section.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepReport {
    pub applied: Vec<String>,
    pub skipped: Vec<Skipped>,
}

impl StepReport {
    pub fn apply(&mut self, key: &str) {
        self.applied.push(key.to_string());
    }

    /// Log the skip on the host's error channel and record it.
    pub fn reject(&mut self, logger: &dyn HostLogger, section: &str, key: &str, reason: SkipReason) {
        logger.error(&format!("{section}: skipping '{key}': {reason}"));
        self.skipped.push(Skipped { key: key.to_string(), reason });
    }

    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

impl fmt::Display for StepReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} applied, {} skipped", self.applied.len(), self.skipped.len())
    }
}

/// Outcome of a whole-table step (armor weighting, level profile).
#[derive(Debug, Clone, Default, PartialEq)]
pub enum StepOutcome {
    Applied,
    Skipped(String),
    #[default]
    Disabled,
}

impl fmt::Display for StepOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepOutcome::Applied => f.write_str("applied"),
            StepOutcome::Skipped(reason) => write!(f, "skipped ({reason})"),
            StepOutcome::Disabled => f.write_str("disabled"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MergeReport {
    pub equipment: StepReport,
    pub ammo: StepReport,
    pub armor: StepOutcome,
    pub level_profile: StepOutcome,
    pub pmc: StepReport,
}

impl MergeReport {
    pub fn skipped_count(&self) -> usize {
        self.equipment.skipped.len() + self.ammo.skipped.len() + self.pmc.skipped.len()
    }

    pub fn summary(&self) -> String {
        format!(
            "equipment {}; ammo {}; armor weighting {}; level profile {}; pmc settings {}",
            self.equipment, self.ammo, self.armor, self.level_profile, self.pmc
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{LogLevel, MemoryLogger};

    #[test]
    fn test_reject_logs_and_records() {
        let logger = MemoryLogger::new();
        let mut report = StepReport::default();
        report.apply("Holster");
        report.reject(
            &logger,
            "pmcEquipment",
            "FooSlot",
            SkipReason::UnknownName(UnknownName { kind: "equipment slot", name: "FooSlot".into() }),
        );

        assert!(!report.is_clean());
        assert_eq!(report.to_string(), "1 applied, 1 skipped");
        let errors = logger.messages(LogLevel::Error);
        assert_eq!(errors, vec!["pmcEquipment: skipping 'FooSlot': unknown equipment slot 'FooSlot'"]);
    }

    #[test]
    fn test_summary_mentions_every_step() {
        let report = MergeReport { armor: StepOutcome::Applied, ..MergeReport::default() };
        let summary = report.summary();
        assert!(summary.contains("armor weighting applied"));
        assert!(summary.contains("level profile disabled"));
        assert_eq!(report.skipped_count(), 0);
    }
}

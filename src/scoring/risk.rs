// Risk buckets for bot scores.

use serde::{Deserialize, Serialize};

/// Risk level derived from a bot score via fixed thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    VeryHigh,
}

impl RiskLevel {
    /// Determine the level from a bot score (0-100).
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s >= 75.0 => RiskLevel::VeryHigh,
            s if s >= 50.0 => RiskLevel::High,
            s if s >= 25.0 => RiskLevel::Medium,
            _ => RiskLevel::Low,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
            RiskLevel::VeryHigh => "very_high",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low Risk",
            RiskLevel::Medium => "Medium Risk",
            RiskLevel::High => "High Risk",
            RiskLevel::VeryHigh => "Very High Risk",
        }
    }

    pub fn label_ar(&self) -> &'static str {
        match self {
            RiskLevel::Low => "خطر منخفض",
            RiskLevel::Medium => "خطر متوسط",
            RiskLevel::High => "خطر عالي",
            RiskLevel::VeryHigh => "خطر عالي جداً",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A risk level together with its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RiskAssessment {
    pub level: RiskLevel,
    pub label: &'static str,
}

/// Classify a bot score. NaN and negative scores fall through to `Low`.
pub fn risk_level(score: f64) -> RiskAssessment {
    let level = RiskLevel::from_score(score);
    RiskAssessment {
        level,
        label: level.label(),
    }
}

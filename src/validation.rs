use crate::project::{Project, Reforecast};
use crate::resource::TeamMember;
use crate::settings::Settings;
use std::collections::HashSet;
use thiserror::Error;

const EPSILON: f64 = 1e-6;

/// Annual discount rates at or below this make the monthly factor `1 + r/12` non-positive.
pub const MIN_DISCOUNT_RATE: f64 = -12.0;

/// Structural problem in forecast inputs. The engine itself never raises this;
/// loaders check inputs before handing them over.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

fn is_fraction(value: f64) -> bool {
    value.is_finite() && value >= -EPSILON && value <= 1.0 + EPSILON
}

pub fn is_discount_rate(value: f64) -> bool {
    value.is_finite() && value > MIN_DISCOUNT_RATE
}

fn is_amount(value: f64) -> bool {
    value.is_finite() && value >= -EPSILON
}

pub fn validate_settings(settings: &Settings) -> Result<(), ValidationError> {
    if !is_discount_rate(settings.discount_rate) {
        return Err(ValidationError::new(format!(
            "discount rate {} must be a finite number above {}",
            settings.discount_rate, MIN_DISCOUNT_RATE
        )));
    }

    let mut roles = HashSet::with_capacity(settings.labor_rates.len());
    for rate in &settings.labor_rates {
        if !roles.insert(rate.role.as_str()) {
            return Err(ValidationError::new(format!(
                "duplicate labor rate for role '{}'",
                rate.role
            )));
        }
        if !is_amount(rate.hourly_rate) {
            return Err(ValidationError::new(format!(
                "labor rate for role '{}' has invalid hourly_rate {}",
                rate.role, rate.hourly_rate
            )));
        }
    }

    for holiday in &settings.holidays {
        if holiday.start_date > holiday.end_date {
            return Err(ValidationError::new(format!(
                "holiday {} starts {} after it ends {}",
                holiday.id, holiday.start_date, holiday.end_date
            )));
        }
    }

    // An inverted red/amber pair is a valid configuration.
    let thresholds = &settings.traffic_light;
    if !is_amount(thresholds.amber_percent) || !is_amount(thresholds.red_percent) {
        return Err(ValidationError::new(format!(
            "traffic light thresholds must be non-negative (amber={}, red={})",
            thresholds.amber_percent, thresholds.red_percent
        )));
    }

    Ok(())
}

fn validate_reforecast(reforecast: &Reforecast) -> Result<(), ValidationError> {
    for window in &reforecast.productivity_windows {
        if window.start_date > window.end_date {
            return Err(ValidationError::new(format!(
                "reforecast {} productivity window {} starts {} after it ends {}",
                reforecast.id, window.id, window.start_date, window.end_date
            )));
        }
        if !is_fraction(window.factor) {
            return Err(ValidationError::new(format!(
                "reforecast {} productivity window {} has invalid factor {} (must be between 0 and 1)",
                reforecast.id, window.id, window.factor
            )));
        }
    }

    for (idx, allocation) in reforecast.allocations.iter().enumerate() {
        if allocation.member_id.trim().is_empty() {
            return Err(ValidationError::new(format!(
                "reforecast {} allocation #{} requires a non-empty member_id",
                reforecast.id, idx
            )));
        }
        if !is_fraction(allocation.allocation) {
            return Err(ValidationError::new(format!(
                "reforecast {} allocation for '{}' in {} has invalid value {} (must be between 0 and 1)",
                reforecast.id, allocation.member_id, allocation.month, allocation.allocation
            )));
        }
    }

    if !is_amount(reforecast.actual_cost) {
        return Err(ValidationError::new(format!(
            "reforecast {} has invalid actual_cost {}",
            reforecast.id, reforecast.actual_cost
        )));
    }
    if !is_amount(reforecast.baseline_budget) {
        return Err(ValidationError::new(format!(
            "reforecast {} has invalid baseline_budget {}",
            reforecast.id, reforecast.baseline_budget
        )));
    }
    Ok(())
}

pub fn validate_project(project: &Project) -> Result<(), ValidationError> {
    if project.start_date > project.end_date {
        return Err(ValidationError::new(format!(
            "project start date {} must be on or before project end date {}",
            project.start_date, project.end_date
        )));
    }

    let mut seen_ids = HashSet::with_capacity(project.reforecasts.len());
    for reforecast in &project.reforecasts {
        if !seen_ids.insert(reforecast.id.as_str()) {
            return Err(ValidationError::new(format!(
                "duplicate reforecast id {}",
                reforecast.id
            )));
        }
        validate_reforecast(reforecast)?;
    }

    if let Some(active) = project.active_reforecast_id.as_deref() {
        if !seen_ids.contains(active) {
            return Err(ValidationError::new(format!(
                "active reforecast {active} does not exist in project {}",
                project.id
            )));
        }
    }
    Ok(())
}

pub fn validate_team(team: &[TeamMember]) -> Result<(), ValidationError> {
    let mut seen_ids = HashSet::with_capacity(team.len());
    for member in team {
        if member.id.trim().is_empty() {
            return Err(ValidationError::new(format!(
                "team member '{}' requires a non-empty id",
                member.name
            )));
        }
        if !seen_ids.insert(member.id.as_str()) {
            return Err(ValidationError::new(format!(
                "duplicate team member id {}",
                member.id
            )));
        }
    }
    Ok(())
}

pub fn validate_inputs(
    project: &Project,
    settings: &Settings,
    team: &[TeamMember],
) -> Result<(), ValidationError> {
    validate_settings(settings)?;
    validate_project(project)?;
    validate_team(team)
}

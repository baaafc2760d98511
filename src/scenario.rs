use crate::calculations::metrics::{
    ProjectMetrics, calculate_project_metrics, calculate_project_metrics_with_diagnostics,
};
use crate::diagnostics::Diagnostics;
use crate::project::Project;
use crate::resource::TeamMember;
use crate::settings::Settings;
use crate::traffic_light::TrafficLight;
use crate::validation::{self, ValidationError};
use serde::{Deserialize, Serialize};

/// Everything one forecast needs: the project, organisation settings and the
/// team already resolved from the project's assignments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub project: Project,
    #[serde(default)]
    pub settings: Settings,
    #[serde(default)]
    pub team: Vec<TeamMember>,
}

impl Scenario {
    pub fn new(project: Project, settings: Settings, team: Vec<TeamMember>) -> Self {
        Self {
            project,
            settings,
            team,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validation::validate_inputs(&self.project, &self.settings, &self.team)
    }

    pub fn metrics(&self) -> ProjectMetrics {
        calculate_project_metrics(&self.project, &self.settings, &self.team)
    }

    pub fn metrics_with_diagnostics(&self) -> (ProjectMetrics, Diagnostics) {
        calculate_project_metrics_with_diagnostics(&self.project, &self.settings, &self.team)
    }

    pub fn traffic_light(&self) -> TrafficLight {
        self.metrics().traffic_light(&self.settings.traffic_light)
    }
}

pub mod allocation;
pub mod calculations;
pub mod calendar;
pub mod diagnostics;
#[cfg(feature = "cli")]
pub mod logging;
pub mod month;
pub mod persistence;
pub mod productivity;
pub mod project;
pub mod report;
pub mod resource;
pub mod scenario;
pub mod settings;
pub mod traffic_light;
pub mod validation;

pub use allocation::AllocationIndex;
pub use calculations::{MonthlyCalculation, ProjectMetrics, calculate_project_metrics};
pub use calendar::{Holiday, HOURS_PER_DAY, WorkCalendar};
pub use diagnostics::{Diagnostic, Diagnostics};
pub use month::{MonthParseError, YearMonth};
pub use persistence::{
    PersistenceError, load_scenario_from_json, load_scenario_from_str, save_scenario_to_json,
};
pub use productivity::{ProductivityWindow, productivity_factor};
pub use project::{Project, ProjectAssignment, Reforecast};
pub use resource::{LaborRate, MonthlyAllocation, RateTable, TeamMember};
pub use scenario::Scenario;
pub use settings::Settings;
pub use traffic_light::{TrafficLight, TrafficLightStatus, TrafficLightThresholds};
pub use validation::ValidationError;

use crate::month::YearMonth;
use crate::productivity::ProductivityWindow;
use crate::resource::MonthlyAllocation;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Link between a project and a team-pool member. Resolving assignments into
/// `TeamMember`s happens before the engine runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectAssignment {
    pub member_id: String,
}

/// A named snapshot of allocations, productivity windows and budget figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reforecast {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub allocations: Vec<MonthlyAllocation>,
    #[serde(default)]
    pub productivity_windows: Vec<ProductivityWindow>,
    #[serde(default)]
    pub actual_cost: f64,
    #[serde(default)]
    pub baseline_budget: f64,
    pub reforecast_date: NaiveDate,
}

impl Reforecast {
    pub fn new(id: impl Into<String>, name: impl Into<String>, start_date: NaiveDate) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            created_at: Utc::now(),
            start_date,
            allocations: Vec::new(),
            productivity_windows: Vec::new(),
            actual_cost: 0.0,
            baseline_budget: 0.0,
            reforecast_date: start_date,
        }
    }

    pub fn with_budget(mut self, actual_cost: f64, baseline_budget: f64) -> Self {
        self.actual_cost = actual_cost;
        self.baseline_budget = baseline_budget;
        self
    }

    pub fn allocate(&mut self, member_id: impl Into<String>, month: YearMonth, allocation: f64) {
        self.allocations
            .push(MonthlyAllocation::new(member_id, month, allocation));
    }

    pub fn add_productivity_window(&mut self, window: ProductivityWindow) {
        self.productivity_windows.push(window);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub assignments: Vec<ProjectAssignment>,
    #[serde(default)]
    pub reforecasts: Vec<Reforecast>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_reforecast_id: Option<String>,
}

impl Project {
    pub fn new(id: impl Into<String>, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            start_date,
            end_date,
            assignments: Vec::new(),
            reforecasts: Vec::new(),
            active_reforecast_id: None,
        }
    }

    /// The reforecast named by `active_reforecast_id`, else the first one, else none.
    pub fn active_reforecast(&self) -> Option<&Reforecast> {
        self.active_reforecast_id
            .as_deref()
            .and_then(|id| self.reforecasts.iter().find(|r| r.id == id))
            .or_else(|| self.reforecasts.first())
    }

    /// Project months from the start month to the end month, inclusive.
    pub fn months(&self) -> Vec<YearMonth> {
        YearMonth::range(YearMonth::of(self.start_date), YearMonth::of(self.end_date))
    }

    pub fn add_reforecast(&mut self, reforecast: Reforecast) {
        self.reforecasts.push(reforecast);
    }

    /// Point the project at reforecast `id`. Returns false when no such reforecast exists.
    pub fn set_active_reforecast(&mut self, id: &str) -> bool {
        if self.reforecasts.iter().any(|r| r.id == id) {
            self.active_reforecast_id = Some(id.to_string());
            true
        } else {
            false
        }
    }
}

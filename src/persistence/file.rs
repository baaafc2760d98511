use super::PersistenceResult;
use crate::scenario::Scenario;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub fn save_scenario_to_json<P: AsRef<Path>>(scenario: &Scenario, path: P) -> PersistenceResult<()> {
    scenario.validate()?;
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, scenario)?;
    Ok(())
}

pub fn load_scenario_from_json<P: AsRef<Path>>(path: P) -> PersistenceResult<Scenario> {
    let file = File::open(path)?;
    let scenario: Scenario = serde_json::from_reader(BufReader::new(file))?;
    scenario.validate()?;
    Ok(scenario)
}

pub fn load_scenario_from_str(json: &str) -> PersistenceResult<Scenario> {
    let scenario: Scenario = serde_json::from_str(json)?;
    scenario.validate()?;
    Ok(scenario)
}

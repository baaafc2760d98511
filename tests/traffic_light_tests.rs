use forecast_tool::traffic_light::traffic_light_status;
use forecast_tool::{TrafficLight, TrafficLightStatus, TrafficLightThresholds};

#[test]
fn classifies_against_default_thresholds() {
    let thresholds = TrafficLightThresholds::new(5.0, 15.0);
    assert_eq!(thresholds, TrafficLightThresholds::default());
    assert_eq!(traffic_light_status(5.1, &thresholds), TrafficLightStatus::Amber);
    assert_eq!(traffic_light_status(15.1, &thresholds), TrafficLightStatus::Red);
    assert_eq!(traffic_light_status(-10.0, &thresholds), TrafficLightStatus::Green);
}

#[test]
fn thresholds_are_exclusive() {
    let thresholds = TrafficLightThresholds::new(5.0, 15.0);
    assert_eq!(traffic_light_status(5.0, &thresholds), TrafficLightStatus::Green);
    assert_eq!(traffic_light_status(15.0, &thresholds), TrafficLightStatus::Amber);
}

#[test]
fn inverted_thresholds_leave_no_amber_band() {
    let thresholds = TrafficLightThresholds::new(15.0, 5.0);
    assert!(thresholds.is_inverted());
    assert!(!TrafficLightThresholds::default().is_inverted());
    assert_eq!(traffic_light_status(10.0, &thresholds), TrafficLightStatus::Red);
    assert_eq!(traffic_light_status(20.0, &thresholds), TrafficLightStatus::Red);
    assert_eq!(traffic_light_status(4.0, &thresholds), TrafficLightStatus::Green);
}

#[test]
fn display_mapping_is_fixed() {
    let thresholds = TrafficLightThresholds::default();

    let green = TrafficLight::classify(0.0, &thresholds);
    assert_eq!(green.label, "On Track");
    assert_eq!(green.indicator, "🟢");
    assert_eq!(green.color, "success");

    let amber = TrafficLight::classify(10.0, &thresholds);
    assert_eq!(amber.status, TrafficLightStatus::Amber);
    assert_eq!(amber.label, "At Risk");
    assert_eq!(amber.indicator, "🟡");
    assert_eq!(amber.color, "warning");

    let red = TrafficLight::from(TrafficLightStatus::Red);
    assert_eq!(red.label, "Over Budget");
    assert_eq!(red.indicator, "🔴");
    assert_eq!(red.color, "danger");
    assert_eq!(red.status.to_string(), "red");
}

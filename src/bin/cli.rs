use forecast_tool::report::monthly_dataframe;
use forecast_tool::validation::is_discount_rate;
use forecast_tool::{
    ProjectMetrics, Scenario, TrafficLightThresholds, load_scenario_from_json, logging,
    save_scenario_to_json,
};
use polars::prelude::{AnyValue, DataFrame};
use std::io::{self, Write};

fn format_cell(av: &AnyValue) -> String {
    match av {
        AnyValue::Null => String::new(),
        AnyValue::Float64(v) => format!("{:.2}", v),
        AnyValue::String(s) => s.to_string(),
        _ => av.to_string(),
    }
}

fn render_df_as_text_table(df: &DataFrame) -> String {
    let columns = df.get_columns();
    let col_names: Vec<String> = columns.iter().map(|c| c.name().to_string()).collect();

    let mut cells: Vec<Vec<String>> = Vec::with_capacity(df.height());
    for row_idx in 0..df.height() {
        let row = columns
            .iter()
            .map(|col| col.get(row_idx).map(|av| format_cell(&av)).unwrap_or_default())
            .collect();
        cells.push(row);
    }

    let mut widths: Vec<usize> = col_names.iter().map(|n| n.len()).collect();
    for row in &cells {
        for (ci, s) in row.iter().enumerate() {
            widths[ci] = widths[ci].max(s.chars().count());
        }
    }

    let mut sep = String::from("+");
    for w in &widths {
        sep.push_str(&"-".repeat(*w + 2));
        sep.push('+');
    }

    let render_row = |values: &[String]| {
        let mut line = String::from("|");
        for (ci, value) in values.iter().enumerate() {
            let pad = widths[ci].saturating_sub(value.chars().count());
            line.push(' ');
            line.push_str(value);
            line.push_str(&" ".repeat(pad));
            line.push_str(" |");
        }
        line
    };

    let mut out = String::new();
    out.push_str(&sep);
    out.push('\n');
    out.push_str(&render_row(&col_names));
    out.push('\n');
    out.push_str(&sep);
    out.push('\n');
    for row in &cells {
        out.push_str(&render_row(row));
        out.push('\n');
    }
    out.push_str(&sep);
    out.push('\n');
    out
}

fn print_help() {
    println!(
        "Commands:\n  help                               Show this help\n  load <json_path>                   Load a scenario (project, settings, team)\n  save <json_path>                   Save the current scenario\n  show                               Show project and reforecasts\n  compute                            Compute metrics and the monthly breakdown\n  status                             Show the budget traffic light\n  diagnostics                        List references counted as zero\n  use <reforecast_id>                Set the active reforecast\n  rate <annual>                      Set the annual discount rate (0.08 = 8%)\n  thresholds <amber> <red>           Set traffic light thresholds (percent)\n  quit|exit                          Exit"
    );
}

fn print_project(scenario: &Scenario) {
    let project = &scenario.project;
    let active_id = project.active_reforecast().map(|r| r.id.as_str());
    println!("Project id         : {}", project.id);
    println!("Project name       : {}", project.name);
    println!("Project start date : {}", project.start_date);
    println!("Project end date   : {}", project.end_date);
    println!("Team members       : {}", scenario.team.len());
    println!("Discount rate      : {}", scenario.settings.discount_rate);
    println!(
        "Thresholds         : amber={} red={}",
        scenario.settings.traffic_light.amber_percent, scenario.settings.traffic_light.red_percent
    );
    println!("Reforecasts:");
    for reforecast in &project.reforecasts {
        let marker = if Some(reforecast.id.as_str()) == active_id { "*" } else { " " };
        println!(
            " {} {:<12} {} (actual={:.2}, baseline={:.2})",
            marker, reforecast.id, reforecast.name, reforecast.actual_cost, reforecast.baseline_budget
        );
    }
}

fn print_metrics(metrics: &ProjectMetrics) {
    println!("ETC                : {:.2}", metrics.etc);
    println!("EAC                : {:.2}", metrics.eac);
    println!("Variance           : {:.2}", metrics.variance);
    println!("Variance %         : {:.2}", metrics.variance_percent);
    println!("Budget ratio       : {:.4}", metrics.budget_ratio);
    println!("Weekly burn rate   : {:.2}", metrics.weekly_burn_rate);
    println!("NPV                : {:.2}", metrics.npv);
    println!("Total hours        : {:.2}", metrics.total_hours);
    match monthly_dataframe(metrics) {
        Ok(df) => println!("{}", render_df_as_text_table(&df)),
        Err(e) => println!("Error building monthly table: {}", e),
    }
}

fn print_thresholds_warning(thresholds: &TrafficLightThresholds) {
    if thresholds.is_inverted() {
        println!(
            "Warning: red threshold ({}) is below amber threshold ({}); nothing will read amber.",
            thresholds.red_percent, thresholds.amber_percent
        );
    }
}

fn main() {
    logging::init();

    let mut scenario: Option<Scenario> = None;

    println!("Forecast Tool (CLI) - type 'help' for commands\n");

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        let _ = io::stdout().flush();
        line.clear();
        match stdin.read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let mut parts = input.split_whitespace();
        let cmd = parts.next().unwrap_or("");

        match cmd {
            "help" => print_help(),
            "quit" | "exit" => break,
            "load" => match parts.next() {
                Some(path) => match load_scenario_from_json(path) {
                    Ok(loaded) => {
                        println!("Scenario loaded from {}.", path);
                        print_thresholds_warning(&loaded.settings.traffic_light);
                        scenario = Some(loaded);
                    }
                    Err(e) => println!("Error loading scenario: {}", e),
                },
                None => println!("Usage: load <json_path>"),
            },
            _ => {
                let Some(current) = scenario.as_mut() else {
                    println!("No scenario loaded. Use 'load <json_path>' first.");
                    continue;
                };
                match cmd {
                    "save" => match parts.next() {
                        Some(path) => match save_scenario_to_json(current, path) {
                            Ok(()) => println!("Scenario saved to {}.", path),
                            Err(e) => println!("Error saving scenario: {}", e),
                        },
                        None => println!("Usage: save <json_path>"),
                    },
                    "show" => print_project(current),
                    "compute" => print_metrics(&current.metrics()),
                    "status" => {
                        let metrics = current.metrics();
                        let light = metrics.traffic_light(&current.settings.traffic_light);
                        println!(
                            "Status: {} {} ({}), variance {:.2}%",
                            light.indicator, light.label, light.status, metrics.variance_percent
                        );
                    }
                    "diagnostics" => {
                        let (_, diagnostics) = current.metrics_with_diagnostics();
                        if diagnostics.is_empty() {
                            println!("No unresolved references.");
                        } else {
                            for diagnostic in diagnostics.iter() {
                                println!("- {}", diagnostic);
                            }
                        }
                    }
                    "use" => match parts.next() {
                        Some(id) => {
                            if current.project.set_active_reforecast(id) {
                                println!("Active reforecast set to {}.", id);
                            } else {
                                println!("Reforecast {} not found.", id);
                            }
                        }
                        None => println!("Usage: use <reforecast_id>"),
                    },
                    "rate" => match parts.next().map(str::parse::<f64>) {
                        Some(Ok(rate)) if is_discount_rate(rate) => {
                            current.settings.discount_rate = rate;
                            println!("Discount rate set to {}.", rate);
                        }
                        Some(_) => println!("Invalid rate (must be a number above -12)"),
                        None => println!("Usage: rate <annual>"),
                    },
                    "thresholds" => {
                        let amber = parts.next().map(str::parse::<f64>);
                        let red = parts.next().map(str::parse::<f64>);
                        match (amber, red) {
                            (Some(Ok(amber)), Some(Ok(red)))
                                if amber.is_finite() && red.is_finite() && amber >= 0.0 && red >= 0.0 =>
                            {
                                let thresholds = TrafficLightThresholds::new(amber, red);
                                current.settings.traffic_light = thresholds;
                                println!("Thresholds set to amber={} red={}.", amber, red);
                                print_thresholds_warning(&thresholds);
                            }
                            (Some(_), Some(_)) => println!("Invalid thresholds"),
                            _ => println!("Usage: thresholds <amber> <red>"),
                        }
                    }
                    _ => println!("Unknown command '{}'. Type 'help'.", cmd),
                }
            }
        }
    }
}

use crate::selection::Tab;
use crate::telemetry::state::{Reading, SystemState};
use prettytable::format::consts::FORMAT_BOX_CHARS;
use prettytable::{row, Table};

/// Plain-text rendering of a snapshot, one table per tab.
pub fn render_report(state: &SystemState) -> String {
    let mut out = String::new();
    for tab in Tab::ALL {
        let readings = match tab {
            Tab::Temperature => &state.temperatures,
            Tab::Pressure => &state.pressure,
        };
        out.push_str(tab.title());
        out.push('\n');
        out.push_str(&readings_table(readings).to_string());
        out.push('\n');
    }
    out
}

fn readings_table(readings: &[Reading]) -> Table {
    let mut table = Table::new();
    table.set_format(*FORMAT_BOX_CHARS);
    table.set_titles(row![b->"Name", b->"Value"]);
    for reading in readings {
        table.add_row(row![reading.name, r->reading.value]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_lists_both_sections_in_order() {
        let state = SystemState {
            temperatures: vec![Reading::new("Boiler", "81°C")],
            pressure: vec![Reading::new("Main line", "3.2 bar")],
        };
        let report = render_report(&state);

        let temperature = report.find("Temperature").unwrap();
        let pressure = report.find("Pressure").unwrap();
        assert!(temperature < pressure);
        assert!(report.contains("Boiler"));
        assert!(report.contains("3.2 bar"));
    }

    #[test]
    fn empty_sections_still_have_headers() {
        let report = render_report(&SystemState::default());
        assert_eq!(report.matches("Name").count(), 2);
    }
}

//! Response rendering.

use crate::config::OutputFormat;
use crate::session::Response;

pub fn render(response: &Response, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => render_text(response),
        OutputFormat::Json => serde_json::to_string(response)
            .unwrap_or_else(|err| format!(r#"{{"type":"error","message":"{err}"}}"#)),
    }
}

fn render_text(response: &Response) -> String {
    match response {
        Response::Contacts { count } => format!("Currently tracking {count} aircraft"),
        Response::EstimatedPosition { id, position } => format!(
            "Aircraft (ID:{id}): Estimated Position: N:{:.1},E:{:.1}",
            position.north, position.east
        ),
        // Untracked and out-of-range aircraft read the same to the operator
        Response::NotInArea { id, .. } => {
            format!("Aircraft (ID:{id}) not currently in area of operation")
        }
        Response::Safe { .. } => "Safe".to_string(),
        Response::SeparationIssue { report } => format!(
            "Separation issue: N:{:.1},E:{:.1}",
            report.position.north, report.position.east
        ),
        Response::Closing => "closing".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::AbsenceCause;
    use airspace_core::{ConflictReport, Position};

    #[test]
    fn text_matches_operator_wording() {
        assert_eq!(
            render(&Response::Contacts { count: 3 }, OutputFormat::Text),
            "Currently tracking 3 aircraft"
        );
        assert_eq!(
            render(
                &Response::EstimatedPosition { id: 4, position: Position::new(12.34, -5.06) },
                OutputFormat::Text
            ),
            "Aircraft (ID:4): Estimated Position: N:12.3,E:-5.1"
        );
        assert_eq!(
            render(
                &Response::NotInArea { id: 9, cause: AbsenceCause::NotTracked },
                OutputFormat::Text
            ),
            "Aircraft (ID:9) not currently in area of operation"
        );
        assert_eq!(render(&Response::Closing, OutputFormat::Text), "closing");
    }

    #[test]
    fn json_carries_absence_cause() {
        let line = render(
            &Response::NotInArea { id: 2, cause: AbsenceCause::OutOfRange },
            OutputFormat::Json,
        );
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["type"], "not_in_area");
        assert_eq!(value["cause"], "out_of_range");
        assert_eq!(value["id"], 2);
    }

    #[test]
    fn json_separation_issue_includes_time() {
        let report = ConflictReport {
            reference_id: 1,
            other_id: 2,
            time_of_violation: 90.0,
            position: Position::new(0.0, 45.0),
            other_position: Position::new(0.0, 55.0),
        };
        let line = render(&Response::SeparationIssue { report }, OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["type"], "separation_issue");
        assert_eq!(value["report"]["time_of_violation"], 90.0);
        assert_eq!(value["report"]["other_id"], 2);
    }
}

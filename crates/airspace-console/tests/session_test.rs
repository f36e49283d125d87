//! End-to-end event replay through a console session.

use airspace_console::{OutputFormat, RunSummary, Session};
use airspace_core::{Airspace, SurveillanceRules};
use std::io::Cursor;

fn replay(script: &str, format: OutputFormat) -> (Vec<String>, RunSummary) {
    let mut session = Session::new(Airspace::default(), format);
    let mut output = Vec::new();
    let summary = session
        .run(Cursor::new(script.as_bytes()), &mut output)
        .expect("in-memory io cannot fail");
    let text = String::from_utf8(output).unwrap();
    (text.lines().map(str::to_string).collect(), summary)
}

const SCRIPT: &str = "\
#ADS-B:1,time:00:00,N:0,E:0,alt:30000,head:0,speed:500
#ADS-B:2,time:00:00,N:0,E:100,alt:30000,head:180,speed:500
*time:00:00,num_contacts
*time:00:01,est_pos,1
*time:00:00,check_separation,1, 10
*time:00:00,est_pos,3
#ADS-B:3,time:00:00,N:400,E:0,alt:1000,head:0,speed:0
#ADS-B:4,time:00:00,N:-300,E:0,alt:1000,head:0,speed:0
*time:00:00,est_pos,3
*time:00:00,check_separation,4, 1
*time:00:00,num_contacts
this line is not part of the protocol
#ADS-B:bad
*time:00:00,check_separation,42, 5
*time:00:00,close
*time:00:00,num_contacts
";

#[test]
fn replay_produces_operator_responses() {
    let (lines, summary) = replay(SCRIPT, OutputFormat::Text);

    assert_eq!(
        lines,
        vec![
            "Currently tracking 2 aircraft",
            "Aircraft (ID:1): Estimated Position: N:0.0,E:30.0",
            "Separation issue: N:0.0,E:45.0",
            "Aircraft (ID:3) not currently in area of operation",
            "Aircraft (ID:3) not currently in area of operation",
            "Safe",
            "Currently tracking 3 aircraft",
            "Aircraft (ID:42) not currently in area of operation",
            "closing",
        ]
    );
    assert_eq!(summary.reports, 4);
    assert_eq!(summary.queries, 9);
    assert_eq!(summary.rejected, 1);
    assert!(summary.closed);
}

#[test]
fn repeated_report_does_not_duplicate_contact() {
    let script = "\
#ADS-B:8,time:10:00,N:5,E:5,alt:1000,head:90,speed:200
#ADS-B:8,time:10:00,N:5,E:5,alt:1000,head:90,speed:200
*time:10:00,num_contacts
";
    let (lines, summary) = replay(script, OutputFormat::Text);
    assert_eq!(lines, vec!["Currently tracking 1 aircraft"]);
    assert!(!summary.closed);
}

#[test]
fn json_output_is_one_object_per_line() {
    let script = "\
#ADS-B:1,time:00:00,N:0,E:0,alt:30000,head:0,speed:500
#ADS-B:2,time:00:00,N:0,E:100,alt:30000,head:180,speed:500
*time:00:00,check_separation,1, 10
*time:00:00,est_pos,7
";
    let (lines, _) = replay(script, OutputFormat::Json);
    assert_eq!(lines.len(), 2);

    let conflict: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
    assert_eq!(conflict["type"], "separation_issue");
    assert_eq!(conflict["report"]["reference_id"], 1);
    assert_eq!(conflict["report"]["other_id"], 2);
    let t = conflict["report"]["time_of_violation"].as_f64().unwrap();
    assert!((t - 90.0).abs() < 1e-6);

    let missing: serde_json::Value = serde_json::from_str(&lines[1]).unwrap();
    assert_eq!(missing["cause"], "not_tracked");
}

#[test]
fn monitored_radius_comes_from_rules() {
    let rules = SurveillanceRules {
        monitored_radius_km: 50.0,
        ..SurveillanceRules::default()
    };
    let mut session = Session::new(Airspace::new(rules), OutputFormat::Text);
    let script = "\
#ADS-B:1,time:00:00,N:30,E:40,alt:1000,head:0,speed:0
#ADS-B:2,time:00:00,N:60,E:0,alt:1000,head:0,speed:0
*time:00:00,num_contacts
*time:00:00,est_pos,1
";
    let mut output = Vec::new();
    session.run(Cursor::new(script), &mut output).unwrap();
    let text = String::from_utf8(output).unwrap();
    assert_eq!(
        text,
        "Currently tracking 1 aircraft\nAircraft (ID:1): Estimated Position: N:30.0,E:40.0\n"
    );
}

#[test]
fn non_finite_report_is_rejected_before_it_reaches_the_picture() {
    let script = "\
#ADS-B:1,time:00:00,N:0,E:0,alt:1000,head:0,speed:0
#ADS-B:2,time:00:00,N:300,E:300,alt:1000,head:NaN,speed:100
*time:00:00,check_separation,1, 5
*time:9223372036854775807:00,num_contacts
*time:00:00,num_contacts
";
    let (lines, summary) = replay(script, OutputFormat::Text);
    assert_eq!(lines, vec!["Safe", "Currently tracking 1 aircraft"]);
    assert_eq!(summary.rejected, 2);
}

//! Single-operator event loop over one traffic picture.

use crate::config::OutputFormat;
use crate::protocol::{parse_line, Event, Request};
use crate::render::render;
use airspace_core::{Airspace, ConflictReport, Position, QueryError, SeparationStatus, TrackId};
use serde::Serialize;
use std::io::{self, BufRead, Write};

/// Why an aircraft is reported as outside the area of operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AbsenceCause {
    NotTracked,
    OutOfRange,
}

impl From<&QueryError> for AbsenceCause {
    fn from(err: &QueryError) -> Self {
        match err {
            QueryError::NotFound { .. } => AbsenceCause::NotTracked,
            QueryError::OutOfRange { .. } => AbsenceCause::OutOfRange,
        }
    }
}

/// Answer to one query.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Response {
    Contacts { count: usize },
    EstimatedPosition { id: TrackId, position: Position },
    NotInArea { id: TrackId, cause: AbsenceCause },
    Safe { id: TrackId },
    SeparationIssue { report: ConflictReport },
    Closing,
}

/// What the caller should do after an event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    /// Report applied, nothing to print
    Quiet,
    Reply(Response),
    /// Registry released; no further events are processed
    Close(Response),
}

/// Counters for one run, logged at shutdown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub lines: usize,
    pub reports: usize,
    pub queries: usize,
    pub rejected: usize,
    pub closed: bool,
}

pub struct Session {
    airspace: Airspace,
    format: OutputFormat,
}

impl Session {
    pub fn new(airspace: Airspace, format: OutputFormat) -> Self {
        Self { airspace, format }
    }

    pub fn airspace(&self) -> &Airspace {
        &self.airspace
    }

    /// Apply one event in arrival order.
    pub fn handle(&mut self, event: Event) -> Step {
        match event {
            Event::Report(track) => {
                self.airspace.upsert_track(track);
                Step::Quiet
            }
            Event::Query { time, request } => self.query(time, request),
        }
    }

    fn query(&mut self, time: f64, request: Request) -> Step {
        let radius = self.airspace.rules().monitored_radius_km;
        let response = match request {
            Request::NumContacts => Response::Contacts {
                count: self.airspace.count_contacts(time, radius),
            },
            Request::EstimatePosition { id } => {
                match self.airspace.estimate_position(time, id, radius) {
                    Ok(position) => Response::EstimatedPosition { id, position },
                    Err(err) => {
                        tracing::debug!(id = err.id(), %err, "position estimate unavailable");
                        Response::NotInArea { id, cause: (&err).into() }
                    }
                }
            }
            Request::CheckSeparation { id, min_separation } => {
                match self.airspace.check_separation(time, id, min_separation) {
                    Ok(SeparationStatus::Safe) => Response::Safe { id },
                    Ok(SeparationStatus::Conflict(report)) => Response::SeparationIssue { report },
                    Err(err) => Response::NotInArea { id, cause: (&err).into() },
                }
            }
            Request::Close => {
                self.airspace.clear_registry();
                return Step::Close(Response::Closing);
            }
        };
        Step::Reply(response)
    }

    /// Read lines until end of input or a close request, writing one
    /// rendered line per response.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<RunSummary> {
        let mut summary = RunSummary::default();

        for line in input.lines() {
            let line = line?;
            summary.lines += 1;

            let event = match parse_line(&line) {
                Ok(Some(event)) => event,
                Ok(None) => continue,
                Err(err) => {
                    tracing::warn!(line = summary.lines, %err, "rejected input line");
                    summary.rejected += 1;
                    continue;
                }
            };

            match event {
                Event::Report(_) => summary.reports += 1,
                Event::Query { .. } => summary.queries += 1,
            }

            match self.handle(event) {
                Step::Quiet => {}
                Step::Reply(response) => {
                    writeln!(output, "{}", render(&response, self.format))?;
                }
                Step::Close(response) => {
                    writeln!(output, "{}", render(&response, self.format))?;
                    summary.closed = true;
                    break;
                }
            }
        }

        output.flush()?;
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use airspace_core::Track;

    #[test]
    fn report_is_quiet_and_query_replies() {
        let mut session = Session::new(Airspace::default(), OutputFormat::Text);
        let step = session.handle(Event::Report(Track::new(1, 0.0, 1.0, 1.0)));
        assert_eq!(step, Step::Quiet);

        let step = session.handle(Event::Query {
            time: 0.0,
            request: Request::NumContacts,
        });
        assert_eq!(step, Step::Reply(Response::Contacts { count: 1 }));
    }

    #[test]
    fn out_of_range_keeps_its_cause() {
        let mut session = Session::new(Airspace::default(), OutputFormat::Text);
        session.handle(Event::Report(Track::new(1, 0.0, 400.0, 0.0)));
        let step = session.handle(Event::Query {
            time: 0.0,
            request: Request::EstimatePosition { id: 1 },
        });
        assert_eq!(
            step,
            Step::Reply(Response::NotInArea {
                id: 1,
                cause: AbsenceCause::OutOfRange
            })
        );
    }

    #[test]
    fn close_clears_registry() {
        let mut session = Session::new(Airspace::default(), OutputFormat::Text);
        session.handle(Event::Report(Track::new(1, 0.0, 1.0, 1.0)));
        let step = session.handle(Event::Query {
            time: 0.0,
            request: Request::Close,
        });
        assert_eq!(step, Step::Close(Response::Closing));
        assert!(session.airspace().registry().is_empty());
    }
}

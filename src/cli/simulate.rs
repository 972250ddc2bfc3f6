//! Scripted allotment sessions
//!
//! Runs the same event sequence a user would produce in the TUI, one step per
//! argument, and prints what happened.

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use clap::Args;

use crate::config::{AllotPaths, Settings};
use crate::display::{format_allocation_table, format_allotment};
use crate::error::{AllotError, AllotResult};
use crate::services::session::adjustment_note;
use crate::services::{
    AllotSession, Confirm, ConfirmResponse, FinalizeOutcome, FixedAnswer, PromptConfirm,
};

/// One scripted event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// `total=RAW`
    Total(String),
    /// `<category>=RAW`
    Slider { key: String, raw: String },
    /// `cancel`
    Cancel,
    /// `allot`
    Allot,
}

impl FromStr for Step {
    type Err = AllotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.to_lowercase().as_str() {
            "cancel" => return Ok(Step::Cancel),
            "allot" => return Ok(Step::Allot),
            _ => {}
        }

        let (key, raw) = s.split_once('=').ok_or_else(|| {
            AllotError::Validation(format!(
                "Invalid step '{}'. Use total=N, <category>=N, cancel or allot",
                s
            ))
        })?;

        let key = key.trim();
        if key.is_empty() {
            return Err(AllotError::Validation(format!(
                "Invalid step '{}': missing category",
                s
            )));
        }

        if key.eq_ignore_ascii_case("total") {
            Ok(Step::Total(raw.to_string()))
        } else {
            Ok(Step::Slider {
                key: key.to_lowercase(),
                raw: raw.to_string(),
            })
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Total(raw) => write!(f, "total={}", raw),
            Step::Slider { key, raw } => write!(f, "{}={}", key, raw),
            Step::Cancel => write!(f, "cancel"),
            Step::Allot => write!(f, "allot"),
        }
    }
}

/// Arguments for `allot simulate`
#[derive(Args, Debug)]
pub struct SimulateArgs {
    /// Starting total budget (defaults to the configured total)
    #[arg(short, long)]
    pub total: Option<String>,

    /// Answer yes to every cancel prompt
    #[arg(long, conflicts_with = "no")]
    pub yes: bool,

    /// Answer no to every cancel prompt
    #[arg(long)]
    pub no: bool,

    /// Steps to run in order: total=N, <category>=N, cancel, allot
    #[arg(required = true, value_name = "STEP")]
    pub steps: Vec<Step>,
}

/// Handle `allot simulate`
pub fn handle_simulate_command(
    settings: &Settings,
    paths: &AllotPaths,
    args: SimulateArgs,
) -> AllotResult<()> {
    let mut session = AllotSession::from_settings(settings, paths)?;
    let mut stdout = std::io::stdout();

    if let Some(raw) = &args.total {
        session.on_total_budget_changed(raw);
    }

    if args.yes || args.no {
        let answer = if args.yes {
            ConfirmResponse::Yes
        } else {
            ConfirmResponse::No
        };
        run_steps(&mut session, &args.steps, &mut FixedAnswer(answer), &mut stdout)?;
    } else {
        run_steps(&mut session, &args.steps, &mut PromptConfirm::stdio(), &mut stdout)?;
    }

    writeln!(stdout)?;
    write!(
        stdout,
        "{}",
        format_allocation_table(
            session.allocations(),
            session.total_budget(),
            session.currency_label()
        )
    )?;

    if let Some(err) = session.take_log_error() {
        eprintln!("Warning: activity log not written: {}", err);
    }

    Ok(())
}

/// Run each step against the session, describing the effect on `out`
pub fn run_steps<C, W>(
    session: &mut AllotSession,
    steps: &[Step],
    confirm: &mut C,
    out: &mut W,
) -> AllotResult<()>
where
    C: Confirm + ?Sized,
    W: Write,
{
    for step in steps {
        match step {
            Step::Total(raw) => {
                let applied = session.on_total_budget_changed(raw);
                writeln!(
                    out,
                    "Total budget set to {}",
                    applied.format_with_label(session.currency_label())
                )?;
            }
            Step::Slider { key, raw } => {
                let adjustment = session.on_category_slider_changed(key, raw)?;
                let label = session
                    .categories()
                    .get(key)
                    .map(|c| c.label.clone())
                    .unwrap_or_else(|| key.clone());

                match adjustment_note(&adjustment) {
                    Some(note) => {
                        writeln!(out, "{} set to {} ({})", label, adjustment.applied, note)?
                    }
                    None => writeln!(out, "{} set to {}", label, adjustment.applied)?,
                }
            }
            Step::Cancel => {
                if session.on_cancel_requested(confirm) {
                    writeln!(out, "Allocations reset")?;
                } else {
                    writeln!(out, "Cancel declined, allocations kept")?;
                }
            }
            Step::Allot => {
                let outcome = session.on_finalize_requested();
                match &outcome {
                    FinalizeOutcome::Allotted(allotment) => {
                        let summary = format_allotment(allotment, session.currency_label());
                        write!(out, "{}", summary)?;
                    }
                    FinalizeOutcome::NothingAllocated => {
                        let warning = outcome.message(session.currency_label());
                        writeln!(out, "Warning: {}", warning)?;
                    }
                }
            }
        }
    }

    Ok(())
}

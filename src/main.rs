use std::io::{self, BufRead};

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use dragons::config::{self, Settings};
use dragons::engine::combat::Encounter;
use dragons::engine::llm_client::{ChatTransport, HttpTransport};
use dragons::engine::narrative::NarrativeController;
use dragons::engine::protocol::{TerminalKind, TurnReport};
use dragons::model::envelope::{ExplorationEnvelope, ExplorationKind};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let settings = config::load_settings();
    let transport = HttpTransport::new(&settings)?;

    let initial_prompt = std::env::args().skip(1).collect::<Vec<_>>().join(" ");

    let mut narrative = NarrativeController::new(&transport, &settings);
    let envelope = narrative.start(&initial_prompt)?;
    let report = render_exploration(&envelope);
    if envelope.kind == ExplorationKind::Combat {
        return run_encounter(&transport, &settings, &envelope.content);
    }
    if report.is_terminal() {
        return Ok(());
    }

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let envelope = narrative.advance(line.trim())?;
        let report = render_exploration(&envelope);
        if envelope.kind == ExplorationKind::Combat {
            return run_encounter(&transport, &settings, &envelope.content);
        }
        if report.is_terminal() {
            break;
        }
    }

    Ok(())
}

/// Renders an exploration turn and hands back its report; the report's
/// terminal kind is the loop's only termination signal.
fn render_exploration(envelope: &ExplorationEnvelope) -> TurnReport {
    let report = TurnReport::from_exploration(envelope);
    render(&report);
    report
}

/// Runs one encounter to its end. The program ends with the encounter;
/// exploration does not resume.
fn run_encounter(
    transport: &dyn ChatTransport,
    settings: &Settings,
    scenario: &str,
) -> Result<()> {
    println!("Started combat");
    let mut encounter = Encounter::new(transport, settings);
    let report = encounter.open(scenario)?;
    render(&report);
    if report.is_terminal() {
        return Ok(());
    }

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let report = encounter.advance(line.trim())?;
        render(&report);
        if report.is_terminal() {
            break;
        }
    }

    Ok(())
}

fn render(report: &TurnReport) {
    println!("----------------------");
    println!("TYPE: {}", report.mode);
    println!("DM SAYS: {}", report.narration);
    match report.terminal {
        Some(TerminalKind::Victory) => println!("VICTORY"),
        Some(TerminalKind::Defeat) => println!("DEFEAT. YOUR JOURNEY ENDS HERE"),
        Some(TerminalKind::EndOfInput) | None => {}
    }
    println!("----------------------");
}

use color_eyre::eyre::eyre;
use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use std::time::Duration;
use ufo_radar::radar::RadarSession;

use crate::app::{handle_input, App};
use crate::terminal::RadarTerminal;
use crate::ui;

// Configure event poll timeout (ms)
const EVENT_POLL_TIMEOUT: u64 = 50;
const RECENT_SIGHTINGS: usize = 5;

#[derive(Debug, Clone, Copy)]
pub struct HeadlessOptions {
    pub ticks: Option<u64>,
    pub json: bool,
}

/// Ticks needed for the sweep to come back to 0 once.
fn ticks_per_rotation(speed: f64) -> u64 {
    (std::f64::consts::TAU / speed).ceil() as u64
}

/// Run the simulation without a UI and print what it did
pub fn run_headless(
    mut session: RadarSession,
    dataset: &str,
    options: HeadlessOptions,
) -> Result<()> {
    let ticks = options
        .ticks
        .unwrap_or_else(|| ticks_per_rotation(session.sweep().speed()));
    let stats = simulate(&mut session, dataset, ticks);

    if options.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        print_headless_stats(&stats);
    }

    Ok(())
}

fn simulate(session: &mut RadarSession, dataset: &str, ticks: u64) -> HeadlessStats {
    if !session.sweep().is_playing() {
        session.toggle();
    }

    let mut revealed_total = 0;
    let mut faded_out_total = 0;
    for _ in 0..ticks {
        let report = session.tick();
        revealed_total += report.revealed;
        faded_out_total += report.faded_out;
    }

    let report = session.load_report();
    let recent_sightings = session
        .store()
        .points()
        .iter()
        .filter(|point| point.visible)
        .take(RECENT_SIGHTINGS)
        .map(|point| HeadlessSighting {
            city: point.details.city.clone(),
            state: point.details.state.clone(),
            shape: point.details.shape.clone(),
            date_posted: point.details.date_posted.clone(),
            fade: point.fade,
        })
        .collect();

    HeadlessStats {
        dataset: dataset.to_string(),
        rows: report.rows,
        accepted: report.accepted,
        malformed: report.malformed,
        outside_radar: report.outside_radar,
        ticks,
        rotations: session.sweep().rotations(),
        sweep_angle: session.sweep().angle(),
        reveal_budget: session.reveal_budget(),
        revealed_total,
        faded_out_total,
        visible: session.store().visible_count(),
        recent_sightings,
    }
}

fn print_headless_stats(stats: &HeadlessStats) {
    println!("\nUFO Sightings Radar");
    println!("===================");
    println!("Dataset: {}", stats.dataset);
    println!(
        "Rows: {} ({} on radar, {} malformed, {} outside radar)",
        stats.rows, stats.accepted, stats.malformed, stats.outside_radar
    );
    println!("Ticks simulated: {}", stats.ticks);
    println!("Rotations: {}", stats.rotations);
    println!("Sweep angle: {:.3} rad", stats.sweep_angle);
    println!("Reveal budget: {} per rotation", stats.reveal_budget);
    println!("Revealed: {}", stats.revealed_total);
    println!("Faded out: {}", stats.faded_out_total);
    println!("Visible now: {}", stats.visible);

    if !stats.recent_sightings.is_empty() {
        println!("\nVisible Sightings:");
        for sighting in &stats.recent_sightings {
            println!(
                "- {} | {} | {} | {} | fade {}",
                sighting.city, sighting.state, sighting.shape, sighting.date_posted, sighting.fade
            );
        }
    }
}

#[derive(Debug, serde::Serialize)]
struct HeadlessStats {
    dataset: String,
    rows: usize,
    accepted: usize,
    malformed: usize,
    outside_radar: usize,
    ticks: u64,
    rotations: u64,
    sweep_angle: f64,
    reveal_budget: usize,
    revealed_total: usize,
    faded_out_total: usize,
    visible: usize,
    recent_sightings: Vec<HeadlessSighting>,
}

#[derive(Debug, serde::Serialize)]
struct HeadlessSighting {
    city: String,
    state: String,
    shape: String,
    date_posted: String,
    fade: u8,
}

/// Run the main application event loop
pub fn run(terminal: &mut RadarTerminal, app: &mut App) -> Result<()> {
    while app.running {
        // Advance the simulation by however many ticks came due
        app.update();

        terminal
            .draw(|f| ui::ui(app, f))
            .map_err(|e| eyre!("Terminal draw error: {e}"))?;

        if !event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT))? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => handle_input(app, key.code),
            Event::Resize(width, height) => {
                log::debug!("terminal resized to {width}x{height}");
            }
            _ => {}
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ufo_radar::domain::SightingRow;
    use ufo_radar::radar::SessionSettings;

    fn row(latitude: &str, longitude: &str, city: &str) -> SightingRow {
        SightingRow {
            latitude: latitude.to_string(),
            longitude: longitude.to_string(),
            city: city.to_string(),
            ..SightingRow::default()
        }
    }

    #[test]
    fn default_run_covers_one_rotation() {
        assert_eq!(ticks_per_rotation(0.02), 315);
        assert_eq!(ticks_per_rotation(std::f64::consts::PI), 2);
    }

    #[test]
    fn simulate_plays_and_reports_counts() {
        let rows = vec![
            row("10", "20", "east"),
            row("-10", "-20", "west"),
            row("bogus", "0", "bad"),
        ];
        let mut session = RadarSession::new(SessionSettings::default(), rows);

        let stats = simulate(&mut session, "sample.csv", 315);

        assert_eq!(stats.rows, 3);
        assert_eq!(stats.accepted, 2);
        assert_eq!(stats.malformed, 1);
        assert_eq!(stats.rotations, 1);
        assert_eq!(stats.revealed_total, 2);
        assert!(stats.visible <= 2);
        assert_eq!(stats.dataset, "sample.csv");
    }
}

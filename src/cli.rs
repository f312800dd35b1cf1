//! Command-line front end: parameters in, ticks out as JSON

use std::io::Write;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use serde::Serialize;

use crate::error::CliError;
use crate::params::{GenerationParameters, RulerColor, ShapeKind};
use crate::session::{Phase, Session, SessionEvent};
use crate::settings::Settings;
use crate::ticks::{Segment, TickQueue, generate};

#[derive(Debug, Parser)]
#[command(
    name = "ruler-ticks",
    about = "Generate recursive ruler tick marks as JSON",
    version
)]
pub struct Cli {
    /// Ruler shape: straight, triangle or protractor
    #[arg(long)]
    pub shape: Option<String>,

    /// Total ruler length L (1-1000)
    #[arg(long)]
    pub length: Option<String>,

    /// Recursion depth h (1-10)
    #[arg(long)]
    pub depth: Option<String>,

    /// Ruler color: yellow, blue, green or red
    #[arg(long)]
    pub color: Option<String>,

    /// JSON settings file
    #[arg(long)]
    pub settings: Option<PathBuf>,

    /// Pretty-print the JSON document
    #[arg(long)]
    pub pretty: bool,

    /// Emit one JSON line per tick, paced by the reveal delay
    #[arg(long)]
    pub stream: bool,
}

/// Everything needed to redraw one ruler
#[derive(Debug, Serialize)]
pub struct Drawing {
    pub shape: ShapeKind,
    pub color: RulerColor,
    pub length: u32,
    pub depth: u32,
    pub segments: TickQueue,
}

pub fn run_from_env() -> Result<(), CliError> {
    let cli = Cli::parse();
    let stdout = std::io::stdout();
    run(cli, &mut stdout.lock())
}

pub fn run(cli: Cli, out: &mut impl Write) -> Result<(), CliError> {
    let settings = Settings::load(cli.settings.as_deref())?;

    let shape = match cli.shape.as_deref() {
        Some(s) => ShapeKind::parse(s)?,
        None => settings.default_shape,
    };
    let color = match cli.color.as_deref() {
        Some(s) => RulerColor::parse(s)?,
        None => settings.default_color,
    };
    let length = cli.length.unwrap_or_else(|| settings.default_length.clone());
    let depth = cli.depth.unwrap_or_else(|| settings.default_depth.clone());

    if cli.stream {
        return stream(&settings, shape, color, &length, &depth, out);
    }

    let params = GenerationParameters::parse(shape, &length, &depth, &settings.layout())?;
    let drawing = Drawing {
        shape,
        color,
        length: params.length(),
        depth: params.depth(),
        segments: generate(&params),
    };

    if cli.pretty {
        serde_json::to_writer_pretty(&mut *out, &drawing)?;
    } else {
        serde_json::to_writer(&mut *out, &drawing)?;
    }
    writeln!(out)?;
    Ok(())
}

/// Drive a session through its screens and print ticks as they are revealed
fn stream(
    settings: &Settings,
    shape: ShapeKind,
    color: RulerColor,
    length: &str,
    depth: &str,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let mut session = Session::new(settings);
    session.handle(SessionEvent::SelectShape(shape));
    session.handle(SessionEvent::SelectColor(color));
    session.handle(SessionEvent::Continue);
    session.length_text = length.to_string();
    session.depth_text = depth.to_string();
    session.commit()?;

    let started = Instant::now();
    let tick = Duration::from_millis(settings.reveal_delay_ms.max(1));
    while session.phase == Phase::Drawing {
        let now_ms = started.elapsed().as_millis() as u64;
        if let Some(segment) = session.update(now_ms) {
            write_segment(out, &segment)?;
        } else {
            std::thread::sleep(tick / 4);
        }
    }
    Ok(())
}

fn write_segment(out: &mut impl Write, segment: &Segment) -> Result<(), CliError> {
    serde_json::to_writer(&mut *out, segment)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("ruler-ticks").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_default_run_outputs_127_segments() {
        let mut out = Vec::new();
        run(cli(&[]), &mut out).unwrap();

        let doc: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(doc["shape"], "Straight");
        assert_eq!(doc["color"], "Yellow");
        assert_eq!(doc["length"], 900);
        assert_eq!(doc["segments"].as_array().map(Vec::len), Some(127));
        assert_eq!(doc["segments"][0]["start"][0], 600.0);
    }

    #[test]
    fn test_triangle_run() {
        let mut out = Vec::new();
        run(cli(&["--shape", "triangle", "--length", "300", "--depth", "2", "--color", "red"]), &mut out).unwrap();

        let doc: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(doc["shape"], "Triangle");
        assert_eq!(doc["color"], "Red");
        assert_eq!(doc["segments"].as_array().map(Vec::len), Some(9));
    }

    #[test]
    fn test_invalid_depth_is_param_error() {
        let mut out = Vec::new();
        let err = run(cli(&["--depth", "11"]), &mut out).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(out.is_empty());
    }

    #[test]
    fn test_unknown_shape() {
        let mut out = Vec::new();
        let err = run(cli(&["--shape", "circle"]), &mut out).unwrap_err();
        assert_eq!(err.to_string(), "unknown ruler shape: circle");
    }

    #[test]
    fn test_stream_emits_one_line_per_tick() {
        let dir = std::env::temp_dir().join(format!("ruler-ticks-stream-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("settings.json");
        std::fs::write(&path, r#"{"reveal_delay_ms": 0}"#).unwrap();

        let mut out = Vec::new();
        let args = ["--stream", "--shape", "protractor", "--depth", "3", "--settings"];
        let mut argv: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        argv.push(path.display().to_string());
        let cli = Cli::try_parse_from(std::iter::once("ruler-ticks".to_string()).chain(argv)).unwrap();
        run(cli, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 7);
        for line in lines {
            let _: Segment = serde_json::from_str(line).unwrap();
        }
        let _ = std::fs::remove_dir_all(&dir);
    }
}

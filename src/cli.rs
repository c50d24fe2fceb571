use crate::config::{LayoutConfig, load_config};
use crate::generate::generate_events;
use crate::ir::Event;
use crate::layout::{compute_day_layout, events_from_value};
use crate::layout_dump::{layout_to_json, write_layout_dump};
use crate::parser::{extract_events_block, parse_events};
use crate::render::{render_html, render_svg, write_output, write_output_png};
use crate::report::{LogReporter, report_all};
use anyhow::Result;
use clap::{Parser, ValueEnum};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "dlay", version, about = "Lay out one calendar day of events without overlaps")]
pub struct Args {
    /// Input file (.json, .json5 or .md) or '-' for stdin
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Output file. Defaults to stdout for text formats if omitted.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short = 'e', long = "outputFormat", value_enum, default_value = "svg")]
    pub output_format: OutputFormat,

    /// Config JSON file (theme, layout and render settings)
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// Board width shared by overlapping events
    #[arg(short = 'w', long = "width")]
    pub width: Option<f32>,

    /// Left padding added to every event
    #[arg(short = 'p', long = "padding")]
    pub padding: Option<f32>,

    /// Lay out this many random events instead of reading input
    #[arg(long = "random", value_name = "COUNT")]
    pub random: Option<usize>,

    /// Seed for --random
    #[arg(long = "seed", requires = "random")]
    pub seed: Option<u64>,

    /// Also write the computed clusters and rectangles as JSON
    #[arg(long = "dump", value_name = "PATH")]
    pub dump: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Svg,
    Png,
    Html,
    Json,
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let mut config = load_config(args.config.as_deref())?;
    apply_board_flags(&args, &mut config.layout)?;

    let events = match args.random {
        Some(count) => random_events(count, args.seed),
        None => read_events(args.input.as_deref())?,
    };

    let layout = match compute_day_layout(&events, &config.layout) {
        Ok(layout) => layout,
        Err(errors) => {
            report_all(&errors, &mut LogReporter);
            return Err(errors.into());
        }
    };
    log::info!(
        "laid out {} event(s) in {} cluster(s)",
        layout.rects.len(),
        layout.clusters.len()
    );

    if let Some(path) = args.dump.as_deref() {
        write_layout_dump(path, &layout)?;
    }

    match args.output_format {
        OutputFormat::Svg => {
            let svg = render_svg(&layout, &config.theme, &config.render);
            write_output(&svg, args.output.as_deref())?;
        }
        OutputFormat::Html => {
            write_output(&render_html(&layout), args.output.as_deref())?;
        }
        OutputFormat::Json => {
            write_output(&layout_to_json(&layout)?, args.output.as_deref())?;
        }
        OutputFormat::Png => {
            let output = ensure_output(&args.output, "png")?;
            let svg = render_svg(&layout, &config.theme, &config.render);
            write_output_png(&svg, &output, &config.render, &config.theme)?;
        }
    }

    Ok(())
}

fn apply_board_flags(args: &Args, layout: &mut LayoutConfig) -> Result<()> {
    if let Some(width) = args.width {
        anyhow::ensure!(
            width.is_finite() && width > 0.0,
            "width must be positive and finite, got {width}"
        );
        layout.board_width = width;
    }
    if let Some(padding) = args.padding {
        anyhow::ensure!(
            padding.is_finite() && padding >= 0.0,
            "padding must be finite and not negative, got {padding}"
        );
        layout.padding = padding;
    }
    Ok(())
}

fn random_events(count: usize, seed: Option<u64>) -> Vec<Event> {
    let seed = seed.unwrap_or_else(rand::random);
    log::info!("generating {count} random event(s) with seed {seed}");
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    generate_events(count, &mut rng)
}

fn read_events(path: Option<&Path>) -> Result<Vec<Event>> {
    let (input, is_markdown) = read_input(path)?;
    let text = if is_markdown {
        extract_events_block(&input)
            .ok_or_else(|| anyhow::anyhow!("No json or events code block found in input"))?
    } else {
        input
    };
    let value = parse_events(&text)?;
    match events_from_value(&value) {
        Ok(events) => Ok(events),
        Err(errors) => {
            report_all(&errors, &mut LogReporter);
            Err(errors.into())
        }
    }
}

fn read_input(path: Option<&Path>) -> Result<(String, bool)> {
    if let Some(path) = path {
        if path == Path::new("-") {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            return Ok((buf, false));
        }
        let content = std::fs::read_to_string(path)?;
        let is_md = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|ext| matches!(ext, "md" | "markdown"))
            .unwrap_or(false);
        return Ok((content, is_md));
    }

    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok((buf, false))
}

fn ensure_output(output: &Option<PathBuf>, ext: &str) -> Result<PathBuf> {
    if let Some(path) = output {
        return Ok(path.clone());
    }
    Err(anyhow::anyhow!(
        "Output path required for {} output",
        ext
    ))
}

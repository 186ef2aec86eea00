// src/cli.rs
use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};

use crate::{
    config::{AppOptions, RenderConfig},
    core::HttpTransport,
    data::SessionSummary,
    params::Request,
    progress::Progress,
    runner,
    specs::lookup,
};

/// Draw a season shot map for one player from understat data.
#[derive(Debug, Parser)]
#[command(name = "shot_map", version, about)]
pub struct Args {
    /// Player name as typed on understat, e.g. "Erling Haaland"
    #[arg(short, long)]
    pub player: String,

    /// Starting year of the season, e.g. 2022 for 2022/23
    #[arg(short, long)]
    pub season: String,

    /// Directory the PNG is written to
    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,

    /// TrueType font used for every label
    #[arg(long)]
    pub font: Option<PathBuf>,

    /// Output resolution
    #[arg(long)]
    pub dpi: Option<u32>,

    /// JSON file overriding colours, size and marker scale
    #[arg(long)]
    pub style: Option<PathBuf>,

    /// Data source root
    #[arg(long)]
    pub base_url: Option<String>,

    /// Print the numbers without drawing anything
    #[arg(long)]
    pub summary_only: bool,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Defaults, then the style file, then individual flags.
    pub fn options(&self) -> crate::Result<AppOptions> {
        let mut options = AppOptions::default();
        if let Some(style) = &self.style {
            options.render = RenderConfig::from_style_file(style)?;
        }
        if let Some(font) = &self.font {
            options.render.font_path = font.clone();
        }
        if let Some(dpi) = self.dpi {
            options.render.dpi = dpi;
        }
        if let Some(dir) = &self.out_dir {
            options.output.dir = dir.clone();
        }
        if let Some(url) = &self.base_url {
            options.fetch.base_url = url.clone();
        }
        Ok(options)
    }
}

struct StderrProgress;

impl Progress for StderrProgress {
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    crate::log::init_stderr(match args.verbose {
        0 => "shot_map=info",
        1 => "shot_map=debug",
        _ => "shot_map=trace",
    });

    let request = Request::parse(&args.player, &args.season)?;
    let options = args.options()?;
    let transport = HttpTransport::new(&options.fetch)?;

    if args.summary_only {
        let hit = lookup::find_player(&transport, &options.fetch, request.player.as_ref())?;
        let records = runner::fetch(&transport, &options.fetch, &hit.id, &request.season)?;
        let summary = runner::summarize(&records, &request.season)?;
        println!("{} ({})", hit.player_name, request.season.label());
        print_summary(&summary);
        return Ok(());
    }

    let mut progress = StderrProgress;
    let map = runner::generate(&request, &options, &transport, Some(&mut progress))
        .wrap_err_with(|| format!("could not draw {} {}", request.player.as_ref(), request.season))?;
    println!("{}", map.path.display());
    print_summary(&map.summary);
    Ok(())
}

fn print_summary(s: &SessionSummary) {
    println!("Shots      {}", s.total_shots);
    println!("Goals      {}", s.total_goals);
    println!("xG         {:.2}", s.total_xg);
    println!("xG/Shot    {:.2}", s.xg_per_shot);
    println!("Avg dist   {:.1} yards", s.actual_average_distance);
}

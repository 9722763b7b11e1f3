use std::io::{self, Read, Write};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use knd_depth_rs::depth_pipeline::projection::reference_grid;
use knd_depth_rs::depth_pipeline::unpack::{unpack_stream, unpack_stream_8, unpack_stream_pixels};
use knd_depth_rs::depth_pipeline::{
    DepthLut, DepthToRasterPipeline, InputFormat, RenderConfig, View, world_point,
};
use knd_depth_rs::logger;

use tracing::level_filters::LevelFilter;
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "knd_depth")]
#[command(about = "Unpack Kinect depth data and render world-space projections", long_about = None)]
struct Cli {
    /// Log at debug level, including per-stage span timings
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Unpack 11-bit packed samples from stdin
    Unpack {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = UnpackMode::Sixteen)]
        mode: UnpackMode,
    },

    /// Render one view of a depth frame read from stdin
    Plot {
        view: ViewArg,

        /// Input is a packed 11-bit frame instead of 16-bit little-endian samples
        #[arg(long)]
        packed: bool,

        /// Reject input longer than one frame
        #[arg(long)]
        strict: bool,

        /// Log per-stage timings when done
        #[arg(long)]
        timings: bool,
    },

    /// Write the reference grid for a view
    Grid { view: ViewArg },

    /// Print the depth table, or the code for a depth
    Lut {
        /// Depth in millimetres to look up
        #[arg(short, long)]
        reverse: Option<i32>,
    },

    /// Map a pixel and raw 11-bit code to world coordinates
    World { px: i32, py: i32, code: u16 },
}

#[derive(Clone, Copy, ValueEnum)]
enum UnpackMode {
    /// Inverted, left-aligned 16-bit little-endian samples
    #[value(name = "16")]
    Sixteen,
    /// Top 8 bits of each 16-bit sample
    #[value(name = "8")]
    Eight,
    /// 16-bit samples decoded pixel by pixel
    Pixel,
}

#[derive(Clone, Copy, ValueEnum)]
enum ViewArg {
    Linear,
    Overhead,
    Side,
    Front,
}

impl From<ViewArg> for View {
    fn from(arg: ViewArg) -> Self {
        match arg {
            ViewArg::Linear => View::Linear,
            ViewArg::Overhead => View::Overhead,
            ViewArg::Side => View::Side,
            ViewArg::Front => View::Front,
        }
    }
}

fn read_stdin() -> Result<Vec<u8>> {
    let mut data = Vec::new();
    io::stdin()
        .lock()
        .read_to_end(&mut data)
        .context("Failed to read stdin")?;
    debug!("Read {} bytes from stdin", data.len());
    Ok(data)
}

fn unpack(mode: UnpackMode, data: &[u8]) -> Result<Vec<u8>> {
    let bytes = match mode {
        UnpackMode::Sixteen => unpack_stream(data)?
            .iter()
            .flat_map(|v| v.to_le_bytes())
            .collect(),
        UnpackMode::Eight => unpack_stream_8(data)?,
        UnpackMode::Pixel => unpack_stream_pixels(data)?
            .iter()
            .flat_map(|v| v.to_le_bytes())
            .collect(),
    };
    Ok(bytes)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    if cli.verbose {
        logger::init_with_level(LevelFilter::DEBUG)?;
    } else {
        logger::init()?;
    }

    let mut stdout = io::stdout().lock();

    match cli.command {
        Commands::Unpack { mode } => {
            let data = read_stdin()?;
            stdout.write_all(&unpack(mode, &data)?)?;
        }
        Commands::Plot {
            view,
            packed,
            strict,
            timings,
        } => {
            let config = RenderConfig::builder()
                .view(view.into())
                .input_format(if packed {
                    InputFormat::Packed
                } else {
                    InputFormat::Unpacked
                })
                .strict_size(strict)
                .parallel(false)
                .build();
            let pipeline = DepthToRasterPipeline::new(config);
            let data = read_stdin()?;

            if timings {
                pipeline.convert_with_timings(&data, &mut stdout)?.log_summary();
            } else {
                pipeline.convert(&data, &mut stdout)?;
            }
        }
        Commands::Grid { view } => {
            let view = View::from(view);
            let Some(grid) = reference_grid(view) else {
                bail!("The {view} view has no reference grid");
            };
            stdout.write_all(grid.data())?;
        }
        Commands::Lut { reverse } => {
            let lut = DepthLut::shared();
            match reverse {
                Some(depth_mm) => writeln!(stdout, "{}", lut.reverse(depth_mm))?,
                None => {
                    for (code, depth_mm) in lut.entries().iter().enumerate() {
                        writeln!(stdout, "{code} {depth_mm}")?;
                    }
                }
            }
        }
        Commands::World { px, py, code } => {
            match world_point(px, py, code, DepthLut::shared()) {
                Some(point) => writeln!(stdout, "{} {} {}", point.x_mm, point.y_mm, point.z_mm)?,
                None => bail!("Code {code} has no depth within range"),
            }
        }
    }

    stdout.flush()?;
    info!("Done");
    Ok(())
}

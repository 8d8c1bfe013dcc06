//! Command-line surface.
//!
//! Usage:
//!   collager <SHAPE> <ROWS> [IMAGE]... [OPTIONS]
//!
//! Options:
//!   -o, --output <PATH>        Output file (format from extension)
//!       --width <PX>           Desired canvas width
//!       --height <PX>          Desired canvas height
//!       --background <COLOR>   Canvas fill, #RRGGBB or #RRGGBBAA
//!       --filter <NAME>        Resize filter
//!       --plan                 Print the computed layout as JSON instead of rendering

use std::path::PathBuf;

use clap::Parser;

use collage_engine::Shape;

#[derive(Parser, Debug)]
#[command(name = "collager")]
#[command(about = "Arrange images into a grid collage of rectangles or circles")]
pub struct Cli {
    /// Cell shape: Rectangle or Circle
    pub shape: Shape,

    /// Number of rows in the collage
    #[arg(allow_negative_numbers = true)]
    pub rows: i64,

    /// Images to arrange
    pub images: Vec<PathBuf>,

    /// Output file; the extension picks the format
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Desired canvas width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Desired canvas height in pixels (the real height follows the content)
    #[arg(long)]
    pub height: Option<u32>,

    /// Background color, #RRGGBB or #RRGGBBAA
    #[arg(long)]
    pub background: Option<String>,

    /// Resize filter: lanczos3, catmullrom, gaussian, triangle, nearest
    #[arg(long)]
    pub filter: Option<String>,

    /// Print the layout plan as JSON and exit without rendering
    #[arg(long)]
    pub plan: bool,
}

use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path of the STL file to analyze, ASCII or binary.
    pub stl_path: Option<String>,

    /// Number of workers used to sum the facet areas. Defaults to one per
    /// available thread.
    #[arg(short, long)]
    pub workers: Option<usize>,
}

use clap::Parser;

mod args;
mod report;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = args::Args::parse();
    let stdout = std::io::stdout();
    report::report_command(&args, &mut stdout.lock())
}

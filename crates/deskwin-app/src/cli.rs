use clap::Parser;

/// Deskwin — a simulated desktop window manager driven by line commands.
#[derive(Parser, Debug)]
#[command(name = "deskwin", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Read commands from this file instead of stdin.
    #[arg(short = 's', long)]
    pub script: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}

use clap::Parser;

#[derive(Parser)]
#[command(name = "unbase")]
#[command(about = "Brute-force multi-format decoder: try every supported encoding against one input")]
#[command(version)]
pub struct Cli {
    /// Encoded input; reads one line from stdin when omitted or "-"
    pub input: Option<String>,

    /// Only run the named decoder (name or alias) instead of all of them
    #[arg(long)]
    pub scheme: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// List supported schemes and exit
    #[arg(long)]
    pub list: bool,
}

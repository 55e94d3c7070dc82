use clap::Parser;

use crate::prelude::*;
use crate::ps;

#[derive(Parser, Debug)]
#[command(version, about = "List running processes as parent/child PID pairs")]
pub struct Cli {
    /// Print the pairs as a JSON array instead of aligned columns
    #[arg(long)]
    pub json: bool,
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    let pairs = ps::ps().await?;
    debug!("ps listed {} processes", pairs.len());

    if cli.json {
        println!("{}", serde_json::to_string(&pairs)?);
    } else {
        println!("{:>8} {:>8}", "PPID", "PID");
        for pair in &pairs {
            println!("{:>8} {:>8}", pair.ppid, pair.pid);
        }
    }
    Ok(())
}

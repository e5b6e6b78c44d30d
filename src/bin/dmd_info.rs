//! Print a JSON summary of a `.dmd` animation or font file.
//!
//! Usage: `dmd-info <file.dmd> [--ascii]`

use anyhow::{Context, Result};

use tui_dmd::core::Animation;
use tui_dmd::info::{parse_info_args, AnimationSummary};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::new().filter_or("DMD_LOG_LEVEL", "warn")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let args = parse_info_args(&args)?;

    let anim = Animation::load(&args.path)
        .with_context(|| format!("reading {}", args.path.display()))?;
    let summary = AnimationSummary::new(&anim, args.ascii);
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

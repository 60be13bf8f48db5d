use anyhow::Result;
use log::info;

use crate::scanner::{ScanOptions, discover, scan_files};

use super::Args;

pub fn run_with_args(args: &Args) -> Result<()> {
    let opts = ScanOptions {
        extension: args.extension.clone(),
        follow_symlinks: args.follow_symlinks,
    };
    let files = discover(&args.path, &opts)?;

    // Progress setup
    let pb = if args.progress {
        let pb = indicatif::ProgressBar::new(files.len() as u64);
        pb.set_style(
            indicatif::ProgressStyle::with_template("{spinner} {pos}/{len} files {wide_bar} {eta}")?
                .tick_chars("⠁⠃⠇⠋⠙⠸⢰⣠⣄⡆"),
        );
        Some(pb)
    } else {
        None
    };

    let result = scan_files(&files, |_| {
        if let Some(ref pb) = pb {
            pb.inc(1);
        }
    });
    if let Some(ref pb) = pb {
        pb.finish_and_clear();
    }
    let snippets = result?;
    info!("collected {} snippets", snippets.len());

    let s = if args.pretty {
        serde_json::to_string_pretty(&snippets)?
    } else {
        serde_json::to_string(&snippets)?
    };
    println!("{}", s);
    Ok(())
}

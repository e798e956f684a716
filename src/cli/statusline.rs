use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Args as ClapArgs;

use crate::config::{self, StatuslineConfig};
use crate::display::{Format, Formatter, FormatterOptions, Palette, StyleKind};
use crate::input::{parse_hook, SessionInfo};
use crate::metrics::{git, tokens};

/// Printed instead of a status line when the hook payload is unusable.
const FALLBACK_LINE: &str = "Status: Error parsing input";

// ---------------------------------------------------------------------------
// Clap Args
// ---------------------------------------------------------------------------

/// Status line rendering options.
#[derive(ClapArgs)]
pub struct Args {
    /// Style: classic, compact, gradient, minimal, nerd (unknown names use classic)
    #[arg(long, env = "CC_STATUSLINE_STYLE")]
    pub style: Option<String>,

    /// Disable colored output (also respects NO_COLOR env var)
    #[arg(long)]
    pub no_color: bool,

    /// Skip the horizontal rules around the classic and minimal styles
    #[arg(long)]
    pub no_rule: bool,

    /// Do not inspect the working directory for git state
    #[arg(long)]
    pub no_git: bool,

    /// Config file (default: <config dir>/cc-statusline/config.toml)
    #[arg(long, env = "CC_STATUSLINE_CONFIG")]
    pub config: Option<PathBuf>,
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

/// Entry point. Wraps `run_inner` in `catch_unwind` so that panics
/// are swallowed and the process always exits 0.
pub fn run(args: Args) -> Result<()> {
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| run_inner(args)));

    match result {
        Ok(Ok(())) => Ok(()),
        Ok(Err(e)) => {
            tracing::error!("statusline failed: {:#}", e);
            println!();
            Ok(())
        }
        Err(_) => {
            tracing::error!("statusline panicked");
            println!();
            Ok(())
        }
    }
}

/// Actual implementation of the statusline command.
fn run_inner(args: Args) -> Result<()> {
    // 1. Load config (silent fallback to defaults)
    let config = config::load(args.config.as_deref());

    // 2. Color profile. The host pipes stdout (not a TTY), so colored would
    //    normally disable itself. Force it on unless --no-color or NO_COLOR.
    let use_color = !(args.no_color || no_color_env());
    colored::control::set_override(use_color);
    let palette = Arc::new(build_palette(&config, use_color));

    // 3. Parse stdin
    let hook = match parse_hook(std::io::stdin().lock()) {
        Ok(hook) => hook,
        Err(e) => {
            tracing::error!("status hook rejected: {}", e);
            println!("{}", FALLBACK_LINE);
            return Ok(());
        }
    };

    // 4. Collect metrics
    let session = SessionInfo::from(&hook);
    let tokens = tokens::resolve(&hook);
    let git = (config.git && !args.no_git).then(|| git::probe(&hook.working_dir()));

    // 5. Select and render
    let style = args.style.or(config.style).unwrap_or_default();
    let options = FormatterOptions {
        rule: config.rule && !args.no_rule,
    };
    if !style.is_empty() && StyleKind::ALL.iter().all(|kind| kind.name() != style) {
        tracing::debug!("unknown style {:?}, using classic", style);
    }
    tracing::debug!(color = palette.is_enabled(), "palette ready");
    let formatter = Formatter::select(&style, palette, options);
    tracing::debug!(style = %formatter.kind(), "rendering");

    println!(
        "{}",
        formatter.format(&session, tokens.as_ref(), git.as_ref())
    );

    Ok(())
}

/// `NO_COLOR` counts only when set to a non-empty value.
fn no_color_env() -> bool {
    std::env::var("NO_COLOR").is_ok_and(|v| !v.is_empty())
}

/// Default palette plus config overrides. Bad color values are logged and
/// skipped.
fn build_palette(config: &StatuslineConfig, use_color: bool) -> Palette {
    let (palette, rejected) = Palette::default().with_overrides(&config.colors);
    for e in rejected {
        tracing::warn!("config: {}", e);
    }
    palette.with_enabled(use_color)
}

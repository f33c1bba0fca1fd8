//! `clog`: print one styled message.
//!
//! ```text
//! clog --color red --style bright,underline "Attention!"
//! clog --color green Operation succeeded
//! ```

use std::sync::Arc;

use anyhow::{bail, Result};
use chromalog::{LogContext, Stream, StyleRegistry, Value};
use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "clog", version, about = "Print a message with ANSI colors and styles")]
struct Cli {
    /// Text color (red, green, blue, ...)
    #[arg(long, default_value = "white")]
    color: String,

    /// Extra styles, comma separated (bright, underline, bgBlue, ...)
    #[arg(long, value_delimiter = ',')]
    style: Vec<String>,

    /// Minimum level to print; the message is logged at INFO
    #[arg(long, env = "CLOG_LEVEL", default_value = "info")]
    level: String,

    /// Write to stderr instead of stdout
    #[arg(long)]
    stderr: bool,

    /// List every style name, rendered in its own style
    #[arg(long)]
    list_styles: bool,

    /// Message words, joined with spaces
    message: Vec<String>,
}

impl Cli {
    /// Color first, then the extra styles in the order given.
    fn style_names(&self) -> Vec<String> {
        std::iter::once(self.color.clone())
            .chain(
                self.style
                    .iter()
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty()),
            )
            .collect()
    }
}

fn run(cli: &Cli, ctx: &Arc<LogContext>) -> Result<()> {
    if cli.list_styles {
        let plain = ctx.plain();
        for name in StyleRegistry::names() {
            plain.chain(name).log(&[Value::from(name)])?;
        }
        return Ok(());
    }

    let message = cli.message.join(" ");
    if message.trim().is_empty() {
        bail!("no message provided (try `clog --help`)");
    }

    ctx.set_level_str(&cli.level);

    let mut logger = ctx.create(cli.style_names());
    if cli.stderr {
        logger = logger.to_stream(Stream::Stderr);
    }
    logger.log(&[Value::from(message)])?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    run(&cli, &LogContext::new())
}

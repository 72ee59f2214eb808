/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

use std::ffi::OsString;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use bin_to_c::{emit, input, logging};

#[derive(Debug, Parser)]
#[command(
    name = "bin_to_c",
    version,
    about = "Reads binary data from stdin and prints it as a C unsigned char array."
)]
struct Opts {
    /// Identifier of the emitted array, used verbatim. Put `--` before a
    /// name that starts with `-`.
    name: String,

    /// Extra positional arguments are accepted and ignored.
    #[arg(hide = true, trailing_var_arg = true)]
    _rest: Vec<OsString>,

    /// Take the bytes from an image's RGB pixels instead of stdin.
    #[arg(long, value_name = "PATH")]
    image: Option<PathBuf>,

    /// More diagnostics on stderr (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,

    /// Only report errors.
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let opts = Opts::parse();

    logging::setup_logging(logging::level_from_flags(opts.quiet, opts.verbose));

    let data = match &opts.image {
        Some(path) => input::read_image(path)?,
        None => input::read_stdin().context("failed to read stdin")?,
    };

    tracing::info!(
        "emitting {} bytes as `{}` in {} lines",
        data.len(),
        opts.name,
        emit::line_count(data.len())
    );

    let stdout = std::io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    emit::write_array(&mut writer, &opts.name, &data).context("failed to write array")?;
    writer.flush().context("failed to flush stdout")?;

    Ok(())
}

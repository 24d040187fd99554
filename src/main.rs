use clap::{arg, crate_version, Command};
use lzw_codec::{header, CliError, State};
use std::io::Write;

const RCH: &str = "unreachable was reached";

/// Output buffer size for one codec call; matches the reference
/// driver's fixed on-stack destination buffer.
const DEST_CHUNK: usize = 4096;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let long_help =
"Examples:
---------
Compress:      `lzwcodec -c my_file -o my_file.lzw`
Decompress:    `lzwcodec -d my_file.lzw -o my_file`";

    let main_cmd = Command::new("lzwcodec")
        .about("Variable-width LZW compression")
        .after_long_help(long_help)
        .version(crate_version!())
        .arg(arg!(-c --compress <PATH> "compress this file").required(false))
        .arg(
            arg!(-d --decompress <PATH> "decompress this file")
                .visible_alias("expand")
                .required(false),
        )
        .arg(
            arg!(-x <PATH> "decompress this file (alias for -d)")
                .id("x")
                .required(false),
        )
        .arg(arg!(-o --output <PATH> "output path, or - for stdout").required(true))
        .arg(arg!(-m --maxprefix <N> "cap the longest assigned prefix length").required(false))
        .arg(arg!(-Z --header <N> "emit/expect a .Z-style header: 0 or 1").required(false))
        .arg(arg!(-v --verbose "enable debug logging").action(clap::ArgAction::SetTrue));

    let matches = main_cmd.get_matches();

    let verbose = matches.get_flag("verbose");
    env_logger::Builder::from_default_env()
        .filter_level(if verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .init();

    let output = matches.get_one::<String>("output").expect(RCH);
    let max_prefix: usize = matches
        .get_one::<String>("maxprefix")
        .map(|s| s.parse().expect("invalid -m value"))
        .unwrap_or(0);
    let want_header = matches
        .get_one::<String>("header")
        .map(|s| s != "0")
        .unwrap_or(false);

    if let Some(path) = matches.get_one::<String>("compress") {
        run_compress(path, output, max_prefix, want_header)?;
        return Ok(());
    }

    let decompress_path = matches
        .get_one::<String>("decompress")
        .or_else(|| matches.get_one::<String>("x"));
    if let Some(path) = decompress_path {
        run_decompress(path, output, max_prefix, want_header)?;
        return Ok(());
    }

    eprintln!("one of -c, -d, or -x is required");
    std::process::exit(2);
}

fn run_compress(
    in_path: &str,
    out_path: &str,
    max_prefix: usize,
    want_header: bool,
) -> Result<(), CliError> {
    let data = std::fs::read(in_path)?;
    let mut state = State::new();
    state.set_longest_prefix_allowed(max_prefix);

    let mut out: Vec<u8> = Vec::new();
    if want_header {
        header::write_header(&mut out, lzw_codec::MAX_WIDTH);
    }

    let mut chunk = [0u8; DEST_CHUNK];
    loop {
        let n = state.compress(&data, &mut chunk).map_err(CliError::from)?;
        if n == 0 {
            break;
        }
        out.extend_from_slice(&chunk[..n]);
        log::debug!("wrote {n} compressed bytes, {} total", out.len());
    }

    write_output(out_path, &out)
}

fn run_decompress(
    in_path: &str,
    out_path: &str,
    max_prefix: usize,
    want_header: bool,
) -> Result<(), CliError> {
    let raw = std::fs::read(in_path)?;
    let data: &[u8] = if want_header {
        header::read_header(&raw)
            .map(|(_, rest)| rest)
            .ok_or(CliError::BadHeader)?
    } else {
        &raw
    };

    let mut state = State::new();
    state.set_longest_prefix_allowed(max_prefix);

    let mut out: Vec<u8> = Vec::new();
    let chunk_len = if max_prefix > 0 {
        max_prefix + 1
    } else {
        DEST_CHUNK
    };
    let mut chunk = vec![0u8; chunk_len];
    loop {
        let n = state.decompress(data, &mut chunk).map_err(CliError::from)?;
        if n == 0 {
            break;
        }
        out.extend_from_slice(&chunk[..n]);
        log::debug!("wrote {n} expanded bytes, {} total", out.len());
    }

    write_output(out_path, &out)
}

fn write_output(path: &str, data: &[u8]) -> Result<(), CliError> {
    if path == "-" {
        std::io::stdout().write_all(data)?;
    } else {
        std::fs::write(path, data)?;
    }
    Ok(())
}

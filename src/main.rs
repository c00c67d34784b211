use mo_dump::mo::display::{self, ListingMode};
use std::env;
use std::ffi::OsString;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() {
    // Logs go to stderr so the listing on stdout stays byte-exact
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let args: Vec<OsString> = env::args_os().collect();

    match run(&args) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("ERROR: failed to write output: {}", e);
            std::process::exit(1);
        }
    }
}

fn run(args: &[OsString]) -> io::Result<i32> {
    let prog = args.first().map(|p| p.to_string_lossy().into_owned());

    if args.len() < 3 {
        eprint!("{}", display::usage(prog.as_deref()));
        return Ok(1);
    }

    let mo_path = PathBuf::from(&args[1]);
    // Only probes that the file can be opened; the handle is dropped right away
    if File::open(&mo_path).is_err() {
        eprint!("{}", display::usage(prog.as_deref()));
        eprintln!("Could not open file '{}'", mo_path.display());
        return Ok(1);
    }

    let outcome = mo_dump::load_partial(&mo_path);
    if let Some(e) = &outcome.error {
        eprintln!("{}", e);
        if !outcome.catalog.is_empty() {
            eprintln!("keeping {} entries read before the error", outcome.catalog.len());
        }
    }

    let mut out = io::stdout().lock();
    let action = args[2].to_string_lossy();
    let code = match action.parse::<ListingMode>() {
        Ok(mode) => {
            display::render_listing(&mut out, &outcome.catalog, mode)?;
            0
        }
        Err(_) => {
            // The count is still reported before the usage text
            display::write_summary(&mut out, &outcome.catalog)?;
            out.flush()?;
            eprint!("{}", display::usage(prog.as_deref()));
            writeln!(out)?;
            1
        }
    };

    out.flush()?;
    Ok(code)
}

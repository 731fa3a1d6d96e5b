mod cli;
mod io;

use std::process::ExitCode;

use clap::Parser;

use cli::Cli;
use unbase::{codec, error, Registry};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            e.exit_code().into()
        }
    }
}

fn run(cli: Cli) -> error::Result<()> {
    if cli.list {
        return run_list(cli.json);
    }

    let input = match cli.input.as_deref() {
        Some("-") | None => io::input::read_line()?,
        Some(literal) => literal.trim().to_string(),
    };

    match cli.scheme {
        Some(name) => {
            let decoder = Registry::global().get(&name)?;
            let decoded = decoder.decode(&input)?;
            io::output::print_decoded(decoder.name(), &decoded, cli.json);
        }
        None => {
            let attempts = codec::decode_all(&input);
            if cli.json {
                io::output::print_attempts_json(&attempts);
            } else {
                io::output::print_attempts(&attempts);
            }
        }
    }

    Ok(())
}

fn run_list(json: bool) -> error::Result<()> {
    let metas = Registry::global().list();

    if json {
        println!("{}", serde_json::to_string_pretty(&metas).unwrap());
        return Ok(());
    }

    for meta in metas {
        println!("{:<10} {}", meta.name, meta.description);
        if !meta.aliases.is_empty() {
            println!("{:<10}   aliases: {}", "", meta.aliases.join(", "));
        }
    }
    Ok(())
}

use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of build_cli() from src/main.rs
// We need to duplicate this here since build scripts can't access src/ modules
fn io_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("input")
            .long("input")
            .short('i')
            .value_name("PATH")
            .default_value("-")
            .value_hint(ValueHint::FilePath),
    )
    .arg(
        Arg::new("output")
            .long("output")
            .short('o')
            .value_name("PATH")
            .default_value("-")
            .value_hint(ValueHint::FilePath),
    )
}

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("tflow")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert T-Flow post-editing files to and from JSONL")
        .arg_required_else_help(true)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available formats")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a tflow.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .action(ArgAction::Count)
                .global(true),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .short('q')
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(io_args(Command::new("t2j").about("T-Flow to JSONL")))
        .subcommand(io_args(Command::new("j2t").about("JSONL to T-Flow")))
        .subcommand(
            io_args(Command::new("md2t").about("Markdown to T-Flow"))
                .arg(Arg::new("id-start").long("id-start").value_name("N"))
                .arg(Arg::new("id-width").long("id-width").value_name("N")),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert between any two formats")
                .arg(
                    Arg::new("input")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(Arg::new("from").long("from").value_hint(ValueHint::Other))
                .arg(
                    Arg::new("to")
                        .long("to")
                        .required(true)
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .default_value("-")
                        .value_hint(ValueHint::FilePath),
                ),
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "tflow", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "tflow", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "tflow", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}

use clap::Parser;
use colored::*;
use std::process;
use temp_readings::cli::{args::Args, commands};

fn main() {
    let args = Args::parse();

    match commands::run(args) {
        Ok(_summary) => {
            // Status line has already been printed by the command
            process::exit(0);
        }
        Err(error) => {
            eprintln!("{} {:#}", "Error:".red().bold(), error);
            process::exit(1);
        }
    }
}

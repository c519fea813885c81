// src/main.rs

use std::env;
use std::process;

use env_logger::Env;
use log::info;

use primality::algorithms;

const DEFAULT_CANDIDATE: u64 = 233;

fn main() {
    // Initialize the logger
    let env = Env::default()
        .filter_or("MY_LOG_LEVEL", "info")
        .write_style_or("MY_LOG_STYLE", "always");

    env_logger::Builder::from_env(env).init();

    let candidate = match env::args().nth(1) {
        Some(arg) => match arg.parse::<u64>() {
            Ok(value) => value,
            Err(_) => {
                eprintln!("invalid candidate '{}': expected an unsigned integer", arg);
                process::exit(1);
            }
        },
        None => DEFAULT_CANDIDATE,
    };

    info!("Testing candidate {}", candidate);

    match algorithms::run_all(candidate) {
        Ok(verdicts) => {
            for (algorithm, verdict) in verdicts {
                println!("{}: prime = {}", algorithm.name(), verdict);
            }
        }
        Err(err) => {
            eprintln!("cannot test {}: {}", candidate, err);
            process::exit(1);
        }
    }
}

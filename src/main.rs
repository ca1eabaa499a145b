use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::error;

use xor_challenges::challenges;
use xor_challenges::Error;

#[derive(Parser, Debug)]
#[command(name = "xor-challenges")]
#[command(about, version, long_about = None)]
struct Cli {
    /// Log to stderr (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Recover the flag hidden behind three chained XOR keys
    Properties,
    /// XOR two equal-length hex buffers and print the result as text
    Fixed {
        /// First buffer, hex
        #[arg(default_value = challenges::FIXED_XOR_LEFT)]
        left: String,
        /// Second buffer, hex
        #[arg(default_value = challenges::FIXED_XOR_RIGHT)]
        right: String,
    },
    /// Break a single-byte XOR cipher by English letter frequencies
    SingleByte {
        /// Ciphertext, hex
        #[arg(default_value = challenges::SINGLE_BYTE_XOR_CIPHER)]
        cipher: String,
    },
}

fn run(command: Commands) -> Result<(), Error> {
    match command {
        Commands::Properties => {
            println!("{}", challenges::xor_properties()?);
        }
        Commands::Fixed { left, right } => {
            println!("{}", challenges::fixed_xor(&left, &right)?);
        }
        Commands::SingleByte { cipher } => {
            let recovered = challenges::single_byte_xor(&cipher)?;
            println!("key: {}", recovered.key);
            println!("plaintext: {}", recovered.plaintext);
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    xor_challenges::init_logging(cli.verbose);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = ?e, "challenge failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

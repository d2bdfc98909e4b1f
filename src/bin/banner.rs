//! ASCII-art banner CLI.

use clap::Parser;
use herald::ascii;
use std::io::{self, IsTerminal, Read};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "herald-banner")]
#[command(about = "Render text as ASCII block art", long_about = None)]
#[command(version)]
struct Cli {
    /// Text to render; read from stdin when omitted
    text: Option<String>,

    /// Font to use
    #[arg(short, long, default_value = "standard")]
    font: String,

    /// List available fonts and exit
    #[arg(short = 'l', long)]
    list_fonts: bool,
}

fn main() -> ExitCode {
    herald::logging::init();
    let cli = Cli::parse();

    if cli.list_fonts {
        println!("Available fonts:");
        for name in ascii::FONT_NAMES {
            println!("  {name}");
        }
        return ExitCode::SUCCESS;
    }

    let text = match cli.text {
        Some(text) => text,
        None => {
            if io::stdin().is_terminal() {
                eprintln!("Error: no text provided; pass it as an argument or pipe it via stdin");
                return ExitCode::from(1);
            }

            let mut buf = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut buf) {
                eprintln!("Error: failed to read stdin: {e}");
                return ExitCode::from(1);
            }
            buf.trim().to_string()
        }
    };

    if text.is_empty() {
        eprintln!("Error: empty text provided");
        return ExitCode::from(1);
    }

    match ascii::render(&text, &cli.font) {
        Ok(art) => {
            println!("{art}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(1)
        }
    }
}

//! Cattlelog CLI
//!
//! Usage:
//!   cattlelog [OPTIONS] [MESSAGE]...
//!   echo "message" | cattlelog [OPTIONS]
//!
//! Options:
//!   -f, --cow <NAME>   Select creature by name or ID
//!   -l, --list         List all available creatures
//!   -t, --think        Use a thought bubble instead of speech
//!   -W, --wrap <N>     Wrap text at specified width

use std::io::{self, IsTerminal, Read};
use std::process;

use clap::Parser;

use cattlelog::{cow_names, moo, FaceMode, FaceOptions, MooOptions, FACE_MODES};

#[derive(Parser)]
#[command(name = "cattlelog")]
#[command(about = "ASCII art creatures in your terminal")]
struct Cli {
    /// Message text (reads from stdin if not provided)
    message: Vec<String>,

    /// Select creature by name or ID
    #[arg(short = 'f', long)]
    cow: Option<String>,

    /// List all available creatures
    #[arg(short, long)]
    list: bool,

    /// Use a thought bubble instead of speech
    #[arg(short, long)]
    think: bool,

    /// Wrap text at specified width
    #[arg(short = 'W', long, value_parser = clap::value_parser!(u32).range(1..))]
    wrap: Option<u32>,

    /// Custom eyes (2 characters)
    #[arg(short, long)]
    eyes: Option<String>,

    /// Custom tongue (2 characters)
    #[arg(short = 'T', long)]
    tongue: Option<String>,

    /// Borg mode (==)
    #[arg(short, long)]
    borg: bool,

    /// Dead mode (xx)
    #[arg(short, long)]
    dead: bool,

    /// Greedy mode ($$)
    #[arg(short, long)]
    greedy: bool,

    /// Paranoid mode (@@)
    #[arg(short, long)]
    paranoid: bool,

    /// Stoned mode (**)
    #[arg(short, long)]
    stoned: bool,

    /// Tired mode (--)
    #[arg(long)]
    tired: bool,

    /// Wired mode (OO)
    #[arg(short, long)]
    wired: bool,

    /// Young mode (..)
    #[arg(short, long)]
    young: bool,
}

impl Cli {
    /// First selected face mode, in `FACE_MODES` precedence order.
    fn face_mode(&self) -> Option<FaceMode> {
        FACE_MODES.into_iter().find(|mode| match mode {
            FaceMode::Borg => self.borg,
            FaceMode::Dead => self.dead,
            FaceMode::Greedy => self.greedy,
            FaceMode::Paranoid => self.paranoid,
            FaceMode::Stoned => self.stoned,
            FaceMode::Tired => self.tired,
            FaceMode::Wired => self.wired,
            FaceMode::Young => self.young,
        })
    }
}

fn main() {
    let cli = Cli::parse();

    if cli.list {
        print_list();
        return;
    }

    // Message from arguments, else from piped stdin
    let mut text = cli.message.join(" ");
    if text.is_empty() && !io::stdin().is_terminal() {
        let mut buffer = String::new();
        match io::stdin().read_to_string(&mut buffer) {
            Ok(_) => text = buffer.trim().to_string(),
            Err(e) => {
                eprintln!("Error reading from stdin: {}", e);
                process::exit(1);
            }
        }
    }

    if text.is_empty() {
        eprintln!("Error: No message provided");
        eprintln!("Usage: cattlelog [options] <message>");
        eprintln!("       echo 'message' | cattlelog");
        process::exit(1);
    }

    let options = MooOptions {
        cow: cli.cow.clone(),
        think: cli.think,
        wrap: cli.wrap.map(|w| w as usize),
        face: FaceOptions {
            mode: cli.face_mode(),
            eyes: cli.eyes.clone(),
            tongue: cli.tongue.clone(),
        },
    };

    match moo(&text, &options) {
        Ok(art) => println!("{}", art),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn print_list() {
    let names = cow_names();
    println!("Available creatures:\n");
    for name in &names {
        println!("  {}", name);
    }
    println!("\nTotal: {} creatures", names.len());
}

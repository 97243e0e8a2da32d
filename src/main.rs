use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
    process,
    time::Instant,
};

use clap::{Parser, Subcommand, ValueEnum};
use log::info;
use parselet::{display_error, parser::parser::parse, scanner::scanner::tokenize};

#[derive(Parser, Debug)]
#[command(about = "Parse arithmetic and conditional expressions")]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print one token per line
    Tokenize {
        #[command(flatten)]
        input: Input,
    },
    /// Print the expression tree
    Parse {
        #[command(flatten)]
        input: Input,
        #[arg(long, value_enum, default_value_t = Format::Tree)]
        format: Format,
    },
}

/// Where the source comes from: the argument, a file, or stdin.
#[derive(Debug, clap::Args)]
struct Input {
    expression: Option<String>,
    #[arg(long, conflicts_with = "expression")]
    file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    /// Fully parenthesized expression
    Tree,
    /// JSON tree
    Json,
    /// Rust debug output
    Debug,
}

impl Input {
    fn read(self) -> io::Result<(String, Option<String>)> {
        if let Some(expression) = self.expression {
            return Ok((expression, None));
        }

        if let Some(path) = self.file {
            let contents = fs::read_to_string(&path)?;
            return Ok((contents, Some(path.display().to_string())));
        }

        let mut contents = String::new();
        io::stdin().read_to_string(&mut contents)?;
        Ok((contents, None))
    }
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    let (input, format) = match args.command {
        Commands::Tokenize { input } => (input, None),
        Commands::Parse { input, format } => (input, Some(format)),
    };

    let (source, file) = match input.read() {
        Ok(read) => read,
        Err(e) => {
            eprintln!("Error: failed to read input: {e}");
            process::exit(66);
        }
    };

    let Some(format) = format else {
        for token in tokenize(&source, file) {
            println!("{token}");
        }
        return;
    };

    let start = Instant::now();
    let node = match parse(&source, file) {
        Ok(node) => node,
        Err(error) => {
            display_error(&error, &source);
            process::exit(65);
        }
    };
    info!("Parsed in {:?}", start.elapsed());

    match format {
        Format::Tree => println!("{node}"),
        Format::Json => match serde_json::to_string_pretty(&node) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error: failed to serialize tree: {e}");
                process::exit(70);
            }
        },
        Format::Debug => println!("{node:#?}"),
    }
}

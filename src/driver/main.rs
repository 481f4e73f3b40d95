use anyhow::{bail, Context, Result};
use argh::FromArgs;
use std::fs::File;
use std::io::{prelude::*, stdin, BufReader};
use std::path::Path;
use syntactic::lexer::Lexer;
use syntactic::parser::{self, ParseOutput};
use tracing::{debug, Level};

#[derive(FromArgs, Debug)]
/// Syntax checker for routine programs.
struct Args {
    /// source file, read from stdin when omitted
    #[argh(positional)]
    source_file: Option<String>,

    /// print the parse tree
    #[argh(switch, short = 't')]
    tree: bool,

    /// print the token stream instead of parsing
    #[argh(switch)]
    tokens: bool,

    /// enable debug logging
    #[argh(switch, short = 'v')]
    verbose: bool,
}

fn main() -> Result<()> {
    let args: Args = argh::from_env();

    let level = if args.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt().with_max_level(level).init();
    debug!(?args, "starting");

    let source = match &args.source_file {
        Some(path) => read_file(Path::new(path))?,
        None => read_stdin()?,
    };

    if args.tokens {
        for token in Lexer::new(&source).tokenize() {
            println!("{}", token);
        }
        return Ok(());
    }

    let output = parser::parse(Lexer::new(&source));
    report(&output);

    if args.tree {
        if let Some(program) = &output.program {
            println!("{}", program);
        }
    }

    if output.has_error() {
        bail!("{} syntax error(s)", output.errors.len());
    }
    Ok(())
}

fn read_file(path: &Path) -> Result<String> {
    let file = File::open(path)
        .with_context(|| format!("Could not open source file {}.", path.display()))?;
    let mut reader = BufReader::new(file);
    let mut input = String::new();
    reader
        .read_to_string(&mut input)
        .with_context(|| "Could not read file.".to_string())?;
    Ok(input)
}

fn read_stdin() -> Result<String> {
    let mut input = String::new();
    stdin()
        .read_to_string(&mut input)
        .with_context(|| "Error reading input.".to_string())?;
    Ok(input)
}

/// Prints every diagnostic in the order it was reported
fn report(output: &ParseOutput) {
    for line in diagnostics(output) {
        println!("{}", line);
    }
}

fn diagnostics(output: &ParseOutput) -> Vec<String> {
    output
        .errors
        .iter()
        .map(|error| format!("Error: {}", error))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_lines() {
        let output = parser::parse(Lexer::new("routine begin x := $ end"));
        assert_eq!(
            diagnostics(&output),
            [
                "Error: Invalid token at position 1:20",
                "Error: Unexpected token at position 1:22",
            ]
        );
    }

    #[test]
    fn test_clean_program_has_no_diagnostics() {
        let output = parser::parse(Lexer::new("routine begin write(\"ok\") end"));
        assert!(diagnostics(&output).is_empty());
    }
}

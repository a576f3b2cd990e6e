// vkscript
//
// Copyright 2023 Neil Roberts
//
// Permission is hereby granted, free of charge, to any person obtaining a
// copy of this software and associated documentation files (the "Software"),
// to deal in the Software without restriction, including without limitation
// the rights to use, copy, modify, merge, publish, distribute, sublicense,
// and/or sell copies of the Software, and to permit persons to whom the
// Software is furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice (including the next
// paragraph) shall be included in all copies or substantial portions of the
// Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT.  IN NO EVENT SHALL
// THE AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING
// FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER
// DEALINGS IN THE SOFTWARE.

use anyhow::Context;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use vkscript::source::TokenReplacement;
use vkscript::{Config, Error, Logger, Script, Source};

/// Parse VkScript test files and report what they contain.
#[derive(Parser, Debug)]
#[command(name = "vkscript", version, about)]
struct Options {
    /// Increase the log level. Can be repeated.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Warn about text before the first section instead of failing.
    #[arg(long)]
    lenient: bool,

    /// Replace TOK with REPL in every script before parsing.
    #[arg(short = 'D', long = "replace", value_name = "TOK=REPL")]
    replacements: Vec<TokenReplacement>,

    /// Print each script as JSON.
    #[arg(long, conflicts_with = "quiet")]
    json: bool,

    /// Only report errors.
    #[arg(short, long)]
    quiet: bool,

    /// The scripts to parse.
    #[arg(required = true, value_name = "SCRIPT")]
    scripts: Vec<PathBuf>,
}

impl Options {
    fn config(&self) -> Config {
        let mut config = Config::new();
        config.set_verbosity_count(self.verbose);
        config.set_strict(!self.lenient);
        config
    }
}

fn format_error(filename: &str, error: &Error) -> String {
    match error.line_num() {
        Some(_) => format!("{}: {}", filename, error),
        // I/O errors already carry the filename
        None => error.to_string(),
    }
}

fn report(options: &Options, script: &Script) -> anyhow::Result<()> {
    if options.json {
        let json = serde_json::to_string_pretty(script)
            .with_context(|| format!("{}: JSON output", script.filename()))?;
        println!("{}", json);
    } else if !options.quiet {
        println!("{}", script.filename());

        for node in script.nodes() {
            println!("  {}", node);
        }
    }

    Ok(())
}

fn load_script(options: &Options, path: &Path) -> Result<Script, String> {
    let filename = path.to_string_lossy().into_owned();
    let source = Source::from_file(filename.clone())
        .with_token_replacements(options.replacements.iter().cloned());

    Script::load_with_config(&source, options.config())
        .map_err(|e| format_error(&filename, &e))
}

fn run(options: &Options) -> anyhow::Result<bool> {
    let mut all_ok = true;

    for path in options.scripts.iter() {
        match load_script(options, path) {
            Ok(script) => report(options, &script)?,
            Err(message) => {
                eprintln!("{}", message);
                all_ok = false;
            },
        }
    }

    Ok(all_ok)
}

fn main() -> ExitCode {
    let options = Options::parse();

    if let Err(e) = Logger::new(options.config().verbosity()).install() {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }

    match run(&options) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{:#}", e);
            ExitCode::FAILURE
        },
    }
}

/*
 * ==========================================================================
 * MYTHON
 * ==========================================================================
 *
 * CLI entry point: `mython run <path>` lexes, parses, and executes a Mython
 * source file against a fresh top-level environment, printing `print`
 * output to stdout and any uncaught error as a rustc-style diagnostic to
 * stderr.
 *
 * Author:   Sam Wilcox
 * Email:    sam@pawx-lang.com
 * Website:  https://www.pawx-lang.com
 * Github:   https://github.com/samwilcox/pawx
 *
 * License:
 * This file is part of the PAWX programming language project.
 *
 * PAWX is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 * Full license text available at:
 *    https://license.pawx-lang.com
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

use std::io::{self, Read};

use clap::{Parser, Subcommand};

use mython::diagnostics::DiagnosticPrinter;

#[derive(Debug, Parser)]
#[command(name = "mython", version, about = "A tree-walking interpreter for Mython")]
struct MythonArgs {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Runs a Mython source file (pass `-` to read from stdin).
    Run {
        /// Path to the `.my` source file, or `-` for stdin.
        file: String,

        /// Raise the interpreter's tracing to debug level.
        #[arg(long)]
        trace: bool,
    },
}

fn main() {
    let args = MythonArgs::parse();

    match args.command {
        Command::Run { file, trace } => {
            init_logger(trace);
            if let Err(()) = run(&file) {
                std::process::exit(1);
            }
        }
    }
}

fn init_logger(trace: bool) {
    let level = if trace { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn run(file: &str) -> Result<(), ()> {
    let source = read_source(file).map_err(|e| {
        eprintln!("error: could not read '{file}': {e}");
    })?;

    let stdout = io::stdout();
    match mython::run_source(&source, stdout.lock()) {
        Ok(()) => Ok(()),
        Err(err) => {
            let display_name = if file == "-" { "<stdin>" } else { file };
            DiagnosticPrinter::new(display_name, source).print(&err);
            Err(())
        }
    }
}

fn read_source(file: &str) -> io::Result<String> {
    if file == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        std::fs::read_to_string(file)
    }
}

/*
 * ==========================================================================
 * PHPIF - Check your conditionals!
 * ==========================================================================
 * 
 * Author:   Sam Wilcox
 * 
 * License:
 * This file is part of the PHPIF syntax checker project.
 * 
 * PHPIF is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 * 
 * You may choose either license to govern your use of this software.
 * 
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * 
 * ==========================================================================
 */

use log::{LevelFilter, Log, Metadata, Record};
use phpif::analysis::{analyze_with, Analysis};
use phpif::config::{Config, USAGE};
use phpif::diagnostics::DiagnosticPrinter;
use std::io::{self, Write};
use std::process::ExitCode;

/// Minimal `log` backend for `--verbose`: every record goes to stderr.
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        eprintln!("[{}] {}", record.level(), record.args());
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn main() -> ExitCode {
    let config = match Config::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}\n\n{}", e, USAGE);
            return ExitCode::from(2);
        }
    };

    if config.help {
        println!("{}", USAGE);
        return ExitCode::SUCCESS;
    }

    if config.verbose && log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(LevelFilter::Debug);
    }

    match &config.command {
        Some(code) => {
            if check(&config, "<command>", code, config.json).is_valid() {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            }
        }
        None => {
            repl(&config);
            ExitCode::SUCCESS
        }
    }
}

fn repl(config: &Config) {
    println!("PHPIF v{} - PHP if/else syntax checker", env!("CARGO_PKG_VERSION"));
    println!("Type 'quit' to exit, 'help' for help\n");

    let mut json = config.json;
    let stdin = io::stdin();
    let mut line_buffer = String::new();

    loop {
        // Prompt
        print!("php> ");
        if io::stdout().flush().is_err() {
            break;
        }

        // Read line; EOF ends the session
        line_buffer.clear();
        match stdin.read_line(&mut line_buffer) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }

        let input = line_buffer.trim();

        if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("exit") {
            println!("Goodbye!");
            break;
        }

        if input.eq_ignore_ascii_case("help") {
            print_help();
            continue;
        }

        if input.eq_ignore_ascii_case("json") {
            json = !json;
            println!("JSON output {}", if json { "on" } else { "off" });
            continue;
        }

        if input.is_empty() {
            continue;
        }

        println!();
        check(config, "<stdin>", input, json);
        println!("{}", "-".repeat(50));
    }
}

/// Analyzes one snippet and prints the report (or its JSON form).
fn check(config: &Config, file_name: &str, source: &str, json: bool) -> Analysis {
    let analysis = analyze_with(source, config.parse_options());

    if json {
        match serde_json::to_string_pretty(&analysis) {
            Ok(text) => println!("{}", text),
            Err(e) => eprintln!("error: could not serialize result: {}", e),
        }
    } else {
        let printer = DiagnosticPrinter::new(file_name, source);
        print!("{}", printer.render_analysis(&analysis));
    }

    analysis
}

fn print_help() {
    println!("Enter a PHP snippet on one line, for example:");
    println!("  if ($x > 0) {{ echo $x; }} else {{ $x++; }}");
    println!();
    println!("Supported: if / else / else if, while, for, echo,");
    println!("assignments (= += -= *= /= .=), ++ and --, and conditions");
    println!("joined with && or ||.");
    println!();
    println!("Commands:");
    println!("  help   show this text");
    println!("  json   toggle JSON output");
    println!("  quit   leave (also: exit)");
}

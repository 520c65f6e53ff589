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

use crate::parser::{ParseOptions, DEFAULT_MAX_DEPTH};

pub const USAGE: &str = "\
usage: phpif [--json] [--verbose] [--max-depth N] [-c CODE]

  -c CODE          check CODE once and exit (status 0 if valid, 1 otherwise)
  --json           print results as JSON
  --verbose        log parser activity to stderr
  --max-depth N    nesting limit for blocks and loops (default 64)
  -h, --help       show this message";

/// Options of the `phpif` binary, taken from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub json: bool,
    pub verbose: bool,
    pub max_depth: usize,

    /// Snippet passed with `-c`; `None` starts the interactive shell.
    pub command: Option<String>,

    pub help: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            json: false,
            verbose: false,
            max_depth: DEFAULT_MAX_DEPTH,
            command: None,
            help: false,
        }
    }
}

impl Config {
    /// Parses arguments, excluding the program name.
    pub fn from_args<I>(args: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Config::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--json" => config.json = true,
                "--verbose" | "-v" => config.verbose = true,
                "-h" | "--help" => config.help = true,
                "--max-depth" => {
                    let value = args
                        .next()
                        .ok_or_else(|| "--max-depth needs a value".to_string())?;
                    config.max_depth = value
                        .parse()
                        .map_err(|_| format!("invalid --max-depth value: {}", value))?;
                    if config.max_depth == 0 {
                        return Err("--max-depth must be at least 1".to_string());
                    }
                }
                "-c" => {
                    let code = args.next().ok_or_else(|| "-c needs a snippet".to_string())?;
                    config.command = Some(code);
                }
                other => return Err(format!("unknown argument: {}", other)),
            }
        }

        Ok(config)
    }

    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            max_depth: self.max_depth,
        }
    }
}

//! Command-line handling for the `subsim` binary.
//!
//! Arguments take the form `-name` or `-name=value`. Names are matched
//! without regard to case; anything not starting with `-` is ignored.

use std::path::PathBuf;

use crate::config::SimulatorConfig;
use crate::utils::{Result, SimError};

pub const USAGE: &str = "\
Usage: subsim [options]

Options:
  -world=<path>    World file to load (.yaml, .yml or .json)
  -config=<path>   Simulator configuration file (.yaml)
  -frames=<n>      Stop after n frames (headless runs)
  -h               Print this help and exit
";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommandLine {
    args: Vec<(String, Option<String>)>,
}

impl CommandLine {
    /// Parse arguments, excluding the program name.
    pub fn parse<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args = args
            .into_iter()
            .filter_map(|arg| {
                let body = arg.as_ref().strip_prefix('-')?;
                let (name, value) = match body.split_once('=') {
                    Some((name, value)) => (name, Some(value.to_string())),
                    None => (body, None),
                };
                if name.is_empty() {
                    None
                } else {
                    Some((name.to_string(), value))
                }
            })
            .collect();
        Self { args }
    }

    pub fn from_env() -> Self {
        Self::parse(std::env::args().skip(1))
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.args.iter().any(|(n, _)| n.eq_ignore_ascii_case(name))
    }

    /// Value of the first occurrence of `name`. `-name` without `=` has no
    /// value; `-name=` has an empty one.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.args
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .and_then(|(_, v)| v.as_deref())
    }

    pub fn len(&self) -> usize {
        self.args.len()
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }
}

/// What the binary was asked to do.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliOptions {
    pub help: bool,
    pub world: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub frames: Option<u64>,
}

impl CliOptions {
    pub fn from_command_line(cmd: &CommandLine) -> Result<Self> {
        let frames = match cmd.value("frames") {
            Some(raw) => Some(raw.parse::<u64>().map_err(|_| {
                SimError::InvalidConfig(format!("-frames expects a whole number, got '{}'", raw))
            })?),
            None => None,
        };
        Ok(Self {
            help: cmd.is_set("h") || cmd.is_set("help"),
            world: path_value(cmd, "world"),
            config: path_value(cmd, "config"),
            frames,
        })
    }

    /// Load the config file if one was given, then apply overrides.
    pub fn simulator_config(&self) -> Result<SimulatorConfig> {
        let mut config = match &self.config {
            Some(path) => SimulatorConfig::load(path)?,
            None => SimulatorConfig::default(),
        };
        if self.world.is_some() {
            config.world = self.world.clone();
        }
        Ok(config)
    }
}

fn path_value(cmd: &CommandLine, name: &str) -> Option<PathBuf> {
    cmd.value(name)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

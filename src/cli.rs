//! Command-line parsing.
//!
//! Arguments override the environment-derived [`Config`].

use anyhow::{anyhow, Result};

use crate::config::Config;

/// Default length of a headless run: one minute at 60 FPS.
pub const DEFAULT_SIMULATE_FRAMES: u64 = 3600;

pub const USAGE: &str = "\
usage: bike-dash [--seed N] [--frame-ms N]
       bike-dash simulate [--seed N] [--frames N]

keys:  arrows / hjkl / wasd  steer and thrust
       enter / space / r     start
       q / esc / ctrl-c      quit
";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Interactive terminal game
    Play,
    /// Headless run printing a JSON summary
    Simulate { frames: u64 },
    Help,
}

/// Parse arguments (without the program name), updating `config` in place.
pub fn parse_args(args: &[String], config: &mut Config) -> Result<Command> {
    let mut rest = args;
    let mut command = Command::Play;
    if let Some(first) = args.first() {
        if first == "simulate" {
            command = Command::Simulate {
                frames: DEFAULT_SIMULATE_FRAMES,
            };
            rest = &args[1..];
        }
    }

    let mut i = 0usize;
    while i < rest.len() {
        let flag = rest[i].as_str();
        match flag {
            "-h" | "--help" => return Ok(Command::Help),
            "--seed" => {
                i += 1;
                config.seed = parse_value(flag, rest.get(i))?;
            }
            "--frame-ms" => {
                i += 1;
                let ms: u32 = parse_value(flag, rest.get(i))?;
                config.frame_ms = ms.max(1);
            }
            "--frames" => {
                let Command::Simulate { ref mut frames } = command else {
                    return Err(anyhow!("--frames is only valid with `simulate`"));
                };
                i += 1;
                *frames = parse_value(flag, rest.get(i))?;
            }
            other => {
                return Err(anyhow!("unknown argument: {}", other));
            }
        }
        i += 1;
    }

    Ok(command)
}

fn parse_value<T: std::str::FromStr>(flag: &str, value: Option<&String>) -> Result<T> {
    let v = value.ok_or_else(|| anyhow!("missing value for {}", flag))?;
    v.parse::<T>()
        .map_err(|_| anyhow!("invalid {} value: {}", flag, v))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn no_args_plays() {
        let mut config = Config::default();
        assert_eq!(parse_args(&[], &mut config).unwrap(), Command::Play);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn play_flags_override_config() {
        let mut config = Config::default();
        let cmd = parse_args(&args(&["--seed", "9", "--frame-ms", "33"]), &mut config).unwrap();
        assert_eq!(cmd, Command::Play);
        assert_eq!(config.seed, 9);
        assert_eq!(config.frame_ms, 33);
    }

    #[test]
    fn simulate_with_frames() {
        let mut config = Config::default();
        let cmd = parse_args(&args(&["simulate", "--frames", "120", "--seed", "3"]), &mut config)
            .unwrap();
        assert_eq!(cmd, Command::Simulate { frames: 120 });
        assert_eq!(config.seed, 3);
    }

    #[test]
    fn simulate_defaults_to_one_minute() {
        let mut config = Config::default();
        let cmd = parse_args(&args(&["simulate"]), &mut config).unwrap();
        assert_eq!(
            cmd,
            Command::Simulate {
                frames: DEFAULT_SIMULATE_FRAMES
            }
        );
    }

    #[test]
    fn rejects_bad_input() {
        let mut config = Config::default();
        assert!(parse_args(&args(&["--seed"]), &mut config).is_err());
        assert!(parse_args(&args(&["--seed", "abc"]), &mut config).is_err());
        assert!(parse_args(&args(&["--frames", "10"]), &mut config).is_err());
        assert!(parse_args(&args(&["--turbo"]), &mut config).is_err());
    }

    #[test]
    fn help_wins() {
        let mut config = Config::default();
        assert_eq!(
            parse_args(&args(&["simulate", "--help"]), &mut config).unwrap(),
            Command::Help
        );
    }
}

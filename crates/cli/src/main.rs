#![deny(unsafe_code)]
//! CLI binary for devconv.
//!
//! Subcommands:
//! - `length --px <N> | --rem <N>` — convert between pixels and rem
//! - `ratio <W> <H>` — simplify an aspect ratio
//! - `color <INPUT>` — show a color in every supported format
//! - `formats` — list the accepted color syntaxes

mod error;

use clap::{Parser, Subcommand};
use devconv_core::{
    convert_length, simplify_ratio, Color, Settings, ValidationError, COLOR_SYNTAXES,
};
use error::CliError;
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(
    name = "devconv",
    about = "Pixel/rem, aspect ratio and color conversions for web developers"
)]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Log debug events to stderr (RUST_LOG takes precedence).
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Converter settings as a JSON object, e.g. '{"base_size": 10}'.
    #[arg(long, global = true, default_value = "{}")]
    settings: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert pixels to rem or rem to pixels.
    Length {
        /// Value in pixels (wins over --rem when both are given).
        #[arg(long, required_unless_present = "rem", allow_hyphen_values = true)]
        px: Option<String>,

        /// Value in rem.
        #[arg(long, allow_hyphen_values = true)]
        rem: Option<String>,

        /// Base font size in pixels [default: settings base_size, 16].
        #[arg(short, long, allow_hyphen_values = true)]
        base: Option<String>,
    },
    /// Reduce width x height to lowest integer terms.
    Ratio {
        /// Width (decimals allowed).
        #[arg(allow_hyphen_values = true)]
        width: String,

        /// Height (decimals allowed).
        #[arg(allow_hyphen_values = true)]
        height: String,
    },
    /// Parse a color and print it in every format.
    Color {
        /// HEX, HEXA, RGB, RGBA, HSL or HSLA color string.
        input: String,
    },
    /// List accepted color syntaxes.
    Formats,
}

fn run(cli: Cli) -> Result<(), CliError> {
    let settings = Settings::from_json_str(&cli.settings)
        .map_err(|e| CliError::Input(format!("invalid --settings JSON: {e}")))?;
    settings.validate()?;
    tracing::debug!(?settings, "loaded settings");

    match cli.command {
        Command::Length { px, rem, base } => {
            let base = base.unwrap_or_else(|| settings.base_size_text());
            let pair = convert_length(px.as_deref(), rem.as_deref(), &base)?;
            if cli.json {
                let info = serde_json::json!({
                    "pixels": pair.pixels,
                    "rem": pair.rem,
                    "base": base,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else if !pair.is_empty() {
                println!("{} px = {} rem (base {base}px)", pair.pixels, pair.rem);
            }
        }
        Command::Ratio { width, height } => {
            let ratio = simplify_ratio(&width, &height)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&ratio)?);
            } else if let Some(ratio) = ratio {
                println!("{} ({})", ratio.ratio_text(), ratio.decimal_text());
            }
        }
        Command::Color { input } => {
            let color = Color::parse(&input).ok_or(ValidationError::InvalidColorFormat)?;
            let reps = color.representations();
            if cli.json {
                let info = serde_json::json!({
                    "format": color.format,
                    "representations": reps,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Detected: {}", color.format);
                for (label, value) in [
                    ("HEX", &reps.hex),
                    ("HEXA", &reps.hexa),
                    ("RGB", &reps.rgb),
                    ("RGBA", &reps.rgba),
                    ("HSL", &reps.hsl),
                    ("HSLA", &reps.hsla),
                    ("OKLCH", &reps.oklch),
                ] {
                    println!("  {label:<6} {value}");
                }
            }
        }
        Command::Formats => {
            if cli.json {
                let syntaxes: Vec<_> = COLOR_SYNTAXES
                    .iter()
                    .map(|s| serde_json::json!({"name": s.name, "example": s.example}))
                    .collect();
                let info = serde_json::json!({
                    "input": syntaxes,
                    "output_only": ["oklch"],
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Input syntaxes (tried in order):");
                for syntax in COLOR_SYNTAXES {
                    println!("  {:<4} {}", syntax.name, syntax.example);
                }
                println!("Output only:");
                println!("  oklch (approximation derived from HSL)");
            }
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        tracing::debug!(exit_code = e.exit_code(), "command failed");
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("devconv").chain(args.iter().copied()))
            .expect("arguments should parse")
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn length_requires_px_or_rem() {
        let result = Cli::try_parse_from(["devconv", "length"]);
        assert!(result.is_err());
    }

    #[test]
    fn length_accepts_negative_values_for_validation() {
        let cli = parse(&["length", "--px", "-4"]);
        let err = run(cli).unwrap_err();
        assert_eq!(err.exit_code(), 10);
    }

    #[test]
    fn length_uses_settings_base_size() {
        let cli = parse(&["--settings", r#"{"base_size": 10}"#, "length", "--px", "15"]);
        assert!(run(cli).is_ok());
    }

    #[test]
    fn bad_settings_is_an_input_error() {
        let cli = parse(&["--settings", "{nope", "formats"]);
        assert_eq!(run(cli).unwrap_err().exit_code(), 12);
    }

    #[test]
    fn settings_with_zero_base_fail_before_any_command() {
        let cli = parse(&["--settings", r#"{"base_size": 0}"#, "formats"]);
        let err = run(cli).unwrap_err();
        assert_eq!(err.exit_code(), 10);
        assert_eq!(err.to_string(), "Base font size must be a positive number");
    }

    #[test]
    fn ratio_rejects_zero() {
        let cli = parse(&["ratio", "0", "9"]);
        let err = run(cli).unwrap_err();
        assert_eq!(err.to_string(), "Please enter valid positive numbers");
    }

    #[test]
    fn color_rejects_unknown_syntax() {
        let cli = parse(&["--json", "color", "notacolor"]);
        assert_eq!(run(cli).unwrap_err().exit_code(), 10);
    }

    #[test]
    fn color_accepts_functional_syntax() {
        let cli = parse(&["color", "rgba(255, 0, 0, 0.5)"]);
        assert!(run(cli).is_ok());
    }
}

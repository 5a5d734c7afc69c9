use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    queue,
    style::{self, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
};
use std::io::{self, Write};

use winkit_config::Config;
use winkit_logger as logger;
use winkit_theme::{get_active, set_global_default, Color, ControlStatus, Style, StyleTheme};

/// Inspect winkit style themes.
#[derive(Debug, Parser)]
#[command(name = "winkit", version, about)]
struct Cli {
    /// Describe a 13-character style code (e.g. style:F0S/0FD)
    #[arg(long)]
    code: Option<String>,

    /// Print without terminal colors
    #[arg(long)]
    plain: bool,
}

const STATUSES: [ControlStatus; 3] = [
    ControlStatus::Active,
    ControlStatus::Inactive,
    ControlStatus::Disabled,
];

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load().unwrap_or_default();
    init_logging(&config);
    install_default_theme(&config);

    let mut out = io::stdout().lock();
    match cli.code {
        Some(code) => describe_code(&mut out, &code, cli.plain)?,
        None => list_themes(&mut out, cli.plain)?,
    }
    out.flush()?;
    Ok(())
}

fn init_logging(config: &Config) {
    let file_path = config.logging.log_file().ok();
    logger::init(file_path, config.logging.max_entries, config.logging.level());
}

/// Replace the process-wide default with the configured theme.
///
/// Keeps the built-in default if the configured theme is invalid.
fn install_default_theme(config: &Config) {
    match config.theme.to_style_theme() {
        Ok(theme) => {
            set_global_default(move || theme);
            logger::info(format!("Default theme: {}", theme));
        }
        Err(e) => logger::warn(format!("Ignoring configured theme: {:#}", e)),
    }
}

fn describe_code(out: &mut impl Write, code: &str, plain: bool) -> Result<()> {
    let theme = StyleTheme::from_code(code)
        .with_context(|| format!("Cannot decode style code '{}'", code))?;
    writeln!(out, "{}", theme)?;
    print_style(out, "code", theme.active(), plain)?;
    Ok(())
}

fn list_themes(out: &mut impl Write, plain: bool) -> Result<()> {
    let default = StyleTheme::global_default();
    writeln!(out, "Default: {}", default)?;
    for status in STATUSES {
        print_style(out, &format!("{:?}", status), get_active(&default, status), plain)?;
    }

    writeln!(out)?;
    writeln!(out, "Presets:")?;
    for theme in StyleTheme::get_style_themes() {
        print_style(out, &theme.active().code(), theme.active(), plain)?;
    }
    Ok(())
}

fn print_style(out: &mut impl Write, label: &str, style: &Style, plain: bool) -> Result<()> {
    queue!(out, Print(format!("  {:<13} ", label)))?;
    if plain {
        writeln!(out, "{}", style)?;
        return Ok(());
    }

    swatch(out, " title ", style.title.foreground(), style.title.background())?;
    swatch(out, " body ", style.body.foreground(), style.body.background())?;
    queue!(out, Print(format!(" {}\n", style)))?;
    Ok(())
}

fn swatch(out: &mut impl Write, text: &str, fg: Color, bg: Color) -> io::Result<()> {
    queue!(
        out,
        SetForegroundColor(terminal_color(fg)),
        SetBackgroundColor(terminal_color(bg)),
        Print(text),
        ResetColor
    )
}

fn terminal_color(color: Color) -> style::Color {
    match color {
        Color::Black => style::Color::Black,
        Color::DarkBlue => style::Color::DarkBlue,
        Color::DarkGreen => style::Color::DarkGreen,
        Color::DarkCyan => style::Color::DarkCyan,
        Color::DarkRed => style::Color::DarkRed,
        Color::DarkMagenta => style::Color::DarkMagenta,
        Color::DarkYellow => style::Color::DarkYellow,
        Color::Gray => style::Color::Grey,
        Color::DarkGray => style::Color::DarkGrey,
        Color::Blue => style::Color::Blue,
        Color::Green => style::Color::Green,
        Color::Cyan => style::Color::Cyan,
        Color::Red => style::Color::Red,
        Color::Magenta => style::Color::Magenta,
        Color::Yellow => style::Color::Yellow,
        Color::White => style::Color::White,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_code() {
        let cli = Cli::parse_from(["winkit", "--code", "style:F0S/0FD", "--plain"]);
        assert_eq!(cli.code.as_deref(), Some("style:F0S/0FD"));
        assert!(cli.plain);
    }

    #[test]
    fn test_describe_code_plain() {
        let mut out = Vec::new();
        describe_code(&mut out, "style:F0S/0FD", true).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with(
            "White on Black [White on Black, title Black on White, Single/Double]"
        ));
    }

    #[test]
    fn test_describe_code_rejects_bad_input() {
        let mut out = Vec::new();
        let err = describe_code(&mut out, "style:F0S", true).unwrap_err();
        assert!(format!("{:#}", err).contains("13"));
    }

    #[test]
    fn test_list_themes_plain() {
        let mut out = Vec::new();
        list_themes(&mut out, true).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Presets:"));
        assert!(text.contains("style:F0S/0FS"));
        assert_eq!(
            text.lines()
                .filter(|l| l.trim_start().starts_with("style:"))
                .count(),
            Color::ALL.len()
        );
    }
}

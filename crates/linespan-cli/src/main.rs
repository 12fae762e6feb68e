use anyhow::{Context, Result};
use linespan_config::{Config, LineEnding};
use linespan_core::{
    Position, Range, detect_line_ending, replace_by_range, slice_by_range, slice_rows_by_range,
};
use std::{env, fs, path::Path, process};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    // Line-ending choice comes from the config file when present; "auto"
    // (the default) detects it from the file being edited.
    let line_ending = match Config::load() {
        Ok(Some(config)) => config.line_ending,
        Ok(None) => LineEnding::default(),
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };

    match args.get(1).map(String::as_str) {
        Some("slice") => {
            let (file, spec) = match (args.get(2), args.get(3)) {
                (Some(file), Some(spec)) => (file, spec),
                _ => usage_exit(&args[0]),
            };
            let rows_mode = match args.get(4).map(String::as_str) {
                None => false,
                Some("--rows") => true,
                Some(other) => {
                    eprintln!("Error: unknown argument '{other}'");
                    usage_exit(&args[0]);
                }
            };
            let out = run_slice(Path::new(file), spec, line_ending, rows_mode)?;
            println!("{out}");
        }
        Some("replace") => {
            let (file, spec, new_text) = match (args.get(2), args.get(3), args.get(4)) {
                (Some(file), Some(spec), Some(new_text)) => (file, spec, new_text),
                _ => usage_exit(&args[0]),
            };
            let write_back = match args.get(5).map(String::as_str) {
                None => false,
                Some("--write") => true,
                Some(other) => {
                    eprintln!("Error: unknown argument '{other}'");
                    usage_exit(&args[0]);
                }
            };
            let path = Path::new(file);
            let out = run_replace(path, spec, new_text, line_ending)?;
            if write_back {
                fs::write(path, &out)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
            } else {
                println!("{out}");
            }
        }
        _ => usage_exit(&args[0]),
    }

    Ok(())
}

fn usage_exit(program: &str) -> ! {
    eprintln!("Usage: {program} slice <file> <range> [--rows]");
    eprintln!("       {program} replace <file> <range> <text> [--write]");
    eprintln!();
    eprintln!("<range> is start..end with zero-based line:character positions,");
    eprintln!("e.g. 0:2..2:3. --rows prints each addressed row on its own line;");
    eprintln!("--write rewrites the file instead of printing the result.");
    eprintln!();
    eprintln!(
        "Line endings follow {} (line_ending = \"auto\" | \"lf\" | \"crlf\").",
        Config::config_path().display()
    );
    process::exit(1);
}

fn run_slice(path: &Path, spec: &str, line_ending: LineEnding, rows_mode: bool) -> Result<String> {
    let range = parse_range(spec)?;
    let text =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let eol = resolve_eol(line_ending, &text);

    if rows_mode {
        Ok(slice_rows_by_range(&text, range, eol)?.join("\n"))
    } else {
        Ok(slice_by_range(&text, range, eol)?)
    }
}

fn run_replace(path: &Path, spec: &str, new_text: &str, line_ending: LineEnding) -> Result<String> {
    let range = parse_range(spec)?;
    let text =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let eol = resolve_eol(line_ending, &text);

    Ok(replace_by_range(&text, range, new_text, eol)?)
}

fn resolve_eol(line_ending: LineEnding, text: &str) -> &'static str {
    line_ending
        .as_eol()
        .unwrap_or_else(|| detect_line_ending(text))
}

fn parse_range(spec: &str) -> Result<Range> {
    let (start, end) = spec
        .split_once("..")
        .with_context(|| format!("range '{spec}' must look like start..end, e.g. 0:2..2:3"))?;
    Ok(Range::new(parse_position(start)?, parse_position(end)?))
}

fn parse_position(spec: &str) -> Result<Position> {
    let (line, character) = spec
        .split_once(':')
        .with_context(|| format!("position '{spec}' must look like line:character"))?;
    let line = line
        .parse()
        .with_context(|| format!("invalid line number '{line}'"))?;
    let character = character
        .parse()
        .with_context(|| format!("invalid character offset '{character}'"))?;
    Ok(Position::new(line, character))
}

use ai_text_detector_lib::api::detect_text_with;
use ai_text_detector_lib::init_logging;
use ai_text_detector_lib::models::DetectRequest;
use ai_text_detector_lib::services::{ConfigStore, Detector};
use anyhow::{bail, Context, Result};
use std::io::Read;
use std::path::PathBuf;
use tracing::info;

const USAGE: &str = "Usage:\n  detect_text [<path>] [--config <dir>] [--sensitivity <low|medium|high>] [--out <json_path>] [--compact]\n\nNotes:\n  - Reads stdin when no path is given.\n  - `--config` loads config.json from <dir> instead of the default config location.\n  - Set AI_DETECTOR_DISABLE_FILE_LOG=1 to log to stderr only.";

fn parse_arg_value(args: &[String], key: &str) -> Option<String> {
    args.iter()
        .position(|a| a == key)
        .and_then(|i| args.get(i + 1))
        .cloned()
}

fn has_flag(args: &[String], key: &str) -> bool {
    args.iter().any(|a| a == key)
}

/// First argument that is neither a flag nor a flag's value.
fn positional(args: &[String]) -> Option<String> {
    const VALUED: [&str; 3] = ["--config", "--sensitivity", "--out"];
    let mut i = 1;
    while i < args.len() {
        let a = &args[i];
        if VALUED.contains(&a.as_str()) {
            i += 2;
            continue;
        }
        if !a.starts_with("--") {
            return Some(a.clone());
        }
        i += 1;
    }
    None
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(p) => std::fs::read_to_string(p).with_context(|| format!("read file failed: {}", p)),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("read stdin failed")?;
            Ok(buf)
        }
    }
}

fn load_detector(config_dir: Option<String>) -> Result<Detector> {
    let Some(dir) = config_dir else {
        return Ok(Detector::shared().clone());
    };
    let store = ConfigStore::new(PathBuf::from(&dir));
    let config = store
        .load()
        .with_context(|| format!("load config from {} failed", dir))?;
    Detector::from_config(&config).context("invalid detector config")
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if has_flag(&args, "--help") || has_flag(&args, "-h") {
        eprintln!("{}", USAGE);
        return Ok(());
    }

    init_logging();

    let path = positional(&args);
    let out_path = parse_arg_value(&args, "--out");
    let compact = has_flag(&args, "--compact");

    let text = read_input(path.as_deref())?;
    let detector = load_detector(parse_arg_value(&args, "--config"))?;
    info!(
        source = path.as_deref().unwrap_or("<stdin>"),
        chars = text.chars().count(),
        "cli.input_read"
    );

    let request = DetectRequest {
        text,
        sensitivity: parse_arg_value(&args, "--sensitivity"),
    };

    let result = match detect_text_with(&detector, &request) {
        Ok(result) => result,
        Err(err) => {
            println!("{}", serde_json::to_string(&err)?);
            bail!("{}", err.error);
        }
    };

    let json = if compact {
        serde_json::to_string(&result)?
    } else {
        serde_json::to_string_pretty(&result)?
    };
    println!("{}", json);

    if let Some(out_path) = out_path {
        std::fs::write(&out_path, &json).with_context(|| format!("write out failed: {}", out_path))?;
        eprintln!("Wrote JSON: {}", out_path);
    }

    Ok(())
}

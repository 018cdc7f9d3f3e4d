use crate::cli::ApplyArgs;
use crate::domain::models::{ApplyOptions, ConfigFile};
use std::path::PathBuf;

fn config_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")?;
    Ok(PathBuf::from(home).join(".config/fileheaders"))
}

pub fn load_config() -> anyhow::Result<ConfigFile> {
    let path = config_dir()?.join("config.toml");
    if !path.exists() {
        return Ok(ConfigFile::default());
    }
    let raw = std::fs::read_to_string(&path)?;
    toml::from_str(&raw)
        .map_err(|e| anyhow::anyhow!("invalid config {}: {}", path.display(), e))
}

/// Flags turn options on; config defaults fill in whatever the flags left off.
pub fn resolve_options(args: &ApplyArgs, config: &ConfigFile) -> ApplyOptions {
    let d = &config.defaults;
    ApplyOptions {
        recursive: args.recursive || d.recursive,
        allow_whitespace: args.whitespace || d.whitespace,
        tags_enabled: !(args.disable_tags || d.disable_tags),
        detection_enabled: args.detect_header || d.detect_header,
        extension: if args.extension.is_empty() {
            d.extension.clone()
        } else {
            args.extension.clone()
        },
    }
}

pub fn audit(action: &str, data: serde_json::Value) {
    let dir = match config_dir() {
        Ok(d) => d,
        Err(_) => return,
    };
    let path = dir.join("audit.jsonl");
    let _ = std::fs::create_dir_all(&dir);
    let event = serde_json::json!({
        "ts": unix_now(),
        "action": action,
        "data": data
    });
    let line = format!("{}\n", event);
    let _ = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .and_then(|mut f| std::io::Write::write_all(&mut f, line.as_bytes()));
}

fn unix_now() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::resolve_options;
    use crate::cli::ApplyArgs;
    use crate::domain::models::ConfigFile;

    #[test]
    fn config_defaults_fill_unset_flags() {
        let config: ConfigFile = toml::from_str(
            "[defaults]\ndetect_header = true\ndisable_tags = true\nextension = \".rs\"\n",
        )
        .unwrap();
        let opts = resolve_options(&ApplyArgs::default(), &config);
        assert!(opts.detection_enabled);
        assert!(!opts.tags_enabled);
        assert!(!opts.recursive);
        assert_eq!(opts.extension, ".rs");
    }

    #[test]
    fn explicit_extension_wins_over_config() {
        let config: ConfigFile = toml::from_str("[defaults]\nextension = \".rs\"\n").unwrap();
        let args = ApplyArgs {
            extension: ".py".to_string(),
            recursive: true,
            ..ApplyArgs::default()
        };
        let opts = resolve_options(&args, &config);
        assert_eq!(opts.extension, ".py");
        assert!(opts.recursive);
        assert!(opts.tags_enabled);
    }

    #[test]
    fn empty_config_file_is_all_defaults() {
        let config: ConfigFile = toml::from_str("").unwrap();
        let opts = resolve_options(&ApplyArgs::default(), &config);
        assert!(opts.tags_enabled);
        assert!(!opts.detection_enabled);
        assert!(!opts.allow_whitespace);
        assert_eq!(opts.extension, "");
    }
}

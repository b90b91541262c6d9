use anyhow::Context;
use colored::Colorize;
use jsondb_store::{DbConfig, JsonDb};
use serde_json::Value;

use crate::cli::*;

/// Read the `--config` file, if any. Runs before the async runtime starts.
pub fn load_config(cli: &Cli) -> anyhow::Result<DbConfig> {
    let config = match &cli.config {
        Some(path) => DbConfig::load(path)?,
        None => DbConfig::default(),
    };
    Ok(config)
}

pub async fn run_command(cli: Cli, config: DbConfig) -> anyhow::Result<()> {
    let db = JsonDb::new().with_config(config);

    match cli.command {
        Command::Get(args) => cmd_get(&db, args, &cli.format).await,
        Command::Set(args) => cmd_set(&db, args, &cli.format).await,
        Command::Exists(args) => cmd_exists(&db, args).await,
    }
}

async fn cmd_get(db: &JsonDb, args: GetArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let value = db.load_at(&args.file, &args.path).await?;
    println!("{}", render(&value, format)?);
    Ok(())
}

async fn cmd_set(db: &JsonDb, args: SetArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let value = parse_value(&args.value, args.raw)?;
    db.write_at(&args.file, &args.path, value).await?;
    match format {
        OutputFormat::Json => println!("{}", serde_json::json!({ "ok": true })),
        OutputFormat::Text => println!(
            "{} Wrote {} in {}",
            "✓".green().bold(),
            display_path(&args.path).yellow(),
            args.file.display().to_string().bold()
        ),
    }
    Ok(())
}

async fn cmd_exists(db: &JsonDb, args: ExistsArgs) -> anyhow::Result<()> {
    if db.exists_at(&args.file, &args.path).await? {
        println!("{}", "true".green());
        Ok(())
    } else {
        println!("{}", "false".red());
        anyhow::bail!("{} does not resolve in {}", display_path(&args.path), args.file.display())
    }
}

/// Interpret a command-line VALUE: JSON text, or a literal string with `--raw`.
pub fn parse_value(text: &str, raw: bool) -> anyhow::Result<Value> {
    if raw {
        return Ok(Value::String(text.to_owned()));
    }
    serde_json::from_str(text).with_context(|| {
        format!("VALUE is not valid JSON: {text:?} (pass --raw to store it as a string)")
    })
}

pub fn render(value: &Value, format: &OutputFormat) -> anyhow::Result<String> {
    let text = match format {
        OutputFormat::Text => serde_json::to_string_pretty(value)?,
        OutputFormat::Json => serde_json::to_string(value)?,
    };
    Ok(text)
}

fn display_path(path: &str) -> &str {
    if path.is_empty() { "<root>" } else { path }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::ffi::OsStr;
    use serde_json::json;

    #[test]
    fn value_as_json() {
        assert_eq!(parse_value("{\"a\":[1,2]}", false).unwrap(), json!({"a": [1, 2]}));
        assert_eq!(parse_value("42", false).unwrap(), json!(42));
        assert_eq!(parse_value("\"quoted\"", false).unwrap(), json!("quoted"));
    }

    #[test]
    fn value_raw() {
        assert_eq!(parse_value("not json", true).unwrap(), json!("not json"));
        assert_eq!(parse_value("42", true).unwrap(), json!("42"));
    }

    #[test]
    fn invalid_json_value() {
        let err = parse_value("not json", false).unwrap_err();
        assert!(err.to_string().contains("--raw"));
    }

    #[test]
    fn render_formats() {
        let v = json!({"a": 1});
        assert_eq!(render(&v, &OutputFormat::Json).unwrap(), "{\"a\":1}");
        assert_eq!(render(&v, &OutputFormat::Text).unwrap(), "{\n  \"a\": 1\n}");
    }

    #[test]
    fn root_path_display() {
        assert_eq!(display_path(""), "<root>");
        assert_eq!(display_path("a.b"), "a.b");
    }

    #[test]
    fn config_defaults_without_flag() {
        let cli = Cli::try_parse_from(["jsondb", "get", "db.json"]).unwrap();
        assert_eq!(load_config(&cli).unwrap(), DbConfig::default());
    }

    #[test]
    fn config_from_flag() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("db.toml");
        std::fs::write(&path, "pretty = true\n").unwrap();
        let cli = Cli::try_parse_from([
            OsStr::new("jsondb"),
            OsStr::new("--config"),
            path.as_os_str(),
            OsStr::new("get"),
            OsStr::new("db.json"),
        ])
        .unwrap();
        assert!(load_config(&cli).unwrap().pretty);
    }

    #[test]
    fn missing_config_file_fails() {
        let cli = Cli::try_parse_from(["jsondb", "--config", "/nonexistent/db.toml", "get", "x"])
            .unwrap();
        assert!(load_config(&cli).is_err());
    }

    #[tokio::test]
    async fn set_then_get_through_commands() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("sub").join("db.json");
        let db = JsonDb::new();

        let set = SetArgs {
            file: file.clone(),
            path: "a.b".into(),
            value: "[1,2]".into(),
            raw: false,
        };
        cmd_set(&db, set, &OutputFormat::Json).await.unwrap();
        assert_eq!(db.load_at(&file, "a.b[1]").await.unwrap(), json!(2));

        let get = GetArgs { file: file.clone(), path: "a".into() };
        cmd_get(&db, get, &OutputFormat::Json).await.unwrap();

        let exists = ExistsArgs { file: file.clone(), path: "a.b[2]".into() };
        assert!(cmd_exists(&db, exists).await.is_err());
    }

    #[tokio::test]
    async fn get_reports_invalid_path() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("db.json");
        std::fs::write(&file, "{\"a\":{\"b\":{\"c\":\"it works!\"}}}").unwrap();
        let get = GetArgs { file, path: "a.b.c.d".into() };
        let err = cmd_get(&JsonDb::new(), get, &OutputFormat::Text).await.unwrap_err();
        assert_eq!(err.to_string(), "Invalid JSON Path");
    }
}

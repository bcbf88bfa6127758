//! Check command - Validate options before they reach consumers.

use common::{check_manifest, AppResult, OptionsProvider};
use domain::OptionsSnapshot;

use crate::args::CheckArgs;

/// Execute the check command
pub fn execute(args: CheckArgs) -> AppResult<()> {
    println!("{}", run(&args)?);
    Ok(())
}

fn run(args: &CheckArgs) -> AppResult<String> {
    let policy = args.origin_policy();

    let snapshot = match &args.manifest {
        Some(path) => {
            tracing::info!(path = %path.display(), "Checking manifest");
            check_manifest(path, policy)?
        }
        None => {
            tracing::info!("Checking baked-in options");
            let provider = OptionsProvider::new(OptionsSnapshot::deployment(), policy)?;
            provider.snapshot().clone()
        }
    };

    Ok(format!(
        "OK: {} ({}, api {}, {} module(s))",
        snapshot.global.name,
        snapshot.global.url,
        snapshot.global.api,
        snapshot.modules.len()
    ))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use common::AppError;
    use domain::DomainError;
    use tempfile::NamedTempFile;

    use super::*;

    fn write_manifest(url: &str, api: &str) -> NamedTempFile {
        let json = serde_json::json!({
            "globalOptions": {
                "name": "testing-47394",
                "url": url,
                "api": api,
                "screenOptions": { "headerShown": false }
            }
        });
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.to_string().as_bytes()).unwrap();
        file
    }

    fn args(file: Option<&NamedTempFile>, warn_origin: bool) -> CheckArgs {
        CheckArgs {
            manifest: file.map(|f| f.path().to_path_buf()),
            warn_origin,
        }
    }

    #[test]
    fn test_check_baked_in_options() {
        let output = run(&args(None, false)).unwrap();
        assert_eq!(
            output,
            "OK: testing-47394 (https://testing-47394.botics.co, \
             api https://testing-47394.botics.co/api/v1, 1 module(s))"
        );
        assert!(execute(args(None, false)).is_ok());
    }

    #[test]
    fn test_check_rejects_malformed_manifest_url() {
        let file = write_manifest("not-a-url", "https://testing-47394.botics.co/api/v1");

        let err = run(&args(Some(&file), false)).unwrap_err();
        assert!(matches!(
            err,
            AppError::Options(DomainError::MalformedUrl { .. })
        ));
        assert!(execute(args(Some(&file), true)).is_err());
    }

    #[test]
    fn test_check_cross_origin_manifest() {
        let file = write_manifest(
            "https://testing-47394.botics.co",
            "https://api.botics.co/v1",
        );

        let err = run(&args(Some(&file), false)).unwrap_err();
        assert_eq!(err.code(), "ORIGIN_MISMATCH");

        let output = run(&args(Some(&file), true)).unwrap();
        assert!(output.starts_with("OK: testing-47394"));
        assert!(output.contains("api https://api.botics.co/v1"));
    }

    #[test]
    fn test_check_missing_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let args = CheckArgs {
            manifest: Some(dir.path().join("missing.json")),
            warn_origin: false,
        };

        assert!(matches!(run(&args), Err(AppError::Io(_))));
    }
}

//! Show command - Print the active options.

use common::{render_json, render_manifest, AppResult, OptionsProvider};

use crate::args::ShowArgs;

/// Execute the show command
pub fn execute(args: ShowArgs) -> AppResult<()> {
    let provider = common::init()?;
    println!("{}", render(&args, provider)?);
    Ok(())
}

fn render(args: &ShowArgs, provider: &OptionsProvider) -> AppResult<String> {
    if args.global {
        render_json(provider.global())
    } else {
        render_manifest(provider.snapshot())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_full_snapshot() {
        let provider = OptionsProvider::deployment().unwrap();
        let output = render(&ShowArgs { global: false }, &provider).unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(json["globalOptions"]["name"], "testing-47394");
        assert_eq!(
            json["modulesOptions"]["@modules/app-menu"]["copy"],
            "Routes available!"
        );
    }

    #[test]
    fn test_show_global_only() {
        let provider = OptionsProvider::deployment().unwrap();
        let output = render(&ShowArgs { global: true }, &provider).unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(json["api"], "https://testing-47394.botics.co/api/v1");
        assert_eq!(json["screenOptions"]["headerShown"], false);
        assert!(json.get("modulesOptions").is_none());
        assert!(json.get("globalOptions").is_none());
    }
}

//! Module command - Look up a single module's options.

use common::{render_json, AppResult, OptionsProvider};

use crate::args::ModuleArgs;

/// Execute the module command
pub fn execute(args: ModuleArgs) -> AppResult<()> {
    let provider = common::init()?;
    println!("{}", describe(provider, &args.id)?);
    Ok(())
}

fn describe(provider: &OptionsProvider, module_id: &str) -> AppResult<String> {
    match provider.module(module_id) {
        Some(record) => render_json(record),
        None => {
            tracing::info!(module = %module_id, "Module not registered");
            Ok(format!(
                "{} is not registered; it uses its built-in defaults",
                module_id
            ))
        }
    }
}

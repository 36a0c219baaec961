use anyhow::Result;
use brew_core::render_menu;
use std::path::Path;

use super::utils::load_context;

pub fn run(config: Option<&Path>) -> Result<()> {
    let (app_config, catalog) = load_context(config)?;
    print!("{}", render_menu(&catalog, &app_config.currency_symbol));
    Ok(())
}

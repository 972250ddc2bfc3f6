//! Category listing

use crate::config::Settings;
use crate::display::format_category_list;
use crate::error::AllotResult;

/// Handle `allot categories`
pub fn handle_categories_command(settings: &Settings) -> AllotResult<()> {
    let categories = settings.category_set()?;
    print!("{}", format_category_list(&categories));
    println!();
    println!(
        "Default total budget: {}",
        settings
            .default_total_budget
            .format_with_label(&settings.currency_label)
    );
    Ok(())
}

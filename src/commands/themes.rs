/// `themes` command: list the built-in themes.
use crate::cli::OutputCtx;
use crate::cli::args::OutputFormat;
use crate::cli::output::{print_compact_json, print_json};
use crate::commands::CliError;
use crate::format::format_bool;
use crate::table::{DEFAULT_THEME, Table, ThemeStore, render_table};

/// Run `arrowhead themes`.
///
/// # Errors
///
/// Returns `CliError` when the selected theme is unknown (the listing
/// itself is rendered with it).
pub fn run(store: &ThemeStore, ctx: &OutputCtx) -> Result<(), CliError> {
    let names: Vec<&str> = store.names().collect();

    match ctx.format {
        OutputFormat::Json => print_json(&names),
        OutputFormat::Compact => print_compact_json(&names),
        OutputFormat::Table | OutputFormat::Auto => {
            let theme = store.load(&ctx.theme_name)?;
            let mut table = Table::new(["NAME", "DEFAULT"]);
            for name in &names {
                table.push_row([*name, format_bool(*name == DEFAULT_THEME)]);
            }
            let text = render_table(ctx.title("Themes"), theme, &table)?;
            println!("{text}");
        }
    }
    Ok(())
}

/// `system` command: render System records from a JSON payload.
use crate::cli::OutputCtx;
use crate::cli::args::{OutputFormat, SystemArgs};
use crate::cli::output::{print_compact_json, print_json};
use crate::commands::{CliError, Payload, load_payload};
use crate::format::{format_int, format_timestamp};
use crate::table::{KeyValueSet, Table, ThemeStore, render_key_value, render_table};
use crate::types::System;

/// Run `arrowhead system`.
///
/// A single record renders as a detail view, a list as a grid.
///
/// # Errors
///
/// Returns `CliError` on unreadable input, malformed JSON, unknown theme,
/// or a render contract violation.
pub fn run(args: &SystemArgs, store: &ThemeStore, ctx: &OutputCtx) -> Result<(), CliError> {
    let _t_load = ctx.timer("load_payload");
    let payload = load_payload::<System>(args.input.as_deref())?;
    drop(_t_load);

    match ctx.format {
        OutputFormat::Json => match &payload {
            Payload::One(system) => print_json(system),
            Payload::Many(systems) => print_json(systems),
        },
        OutputFormat::Compact => match &payload {
            Payload::One(system) => print_compact_json(system),
            Payload::Many(systems) => print_compact_json(systems),
        },
        OutputFormat::Table | OutputFormat::Auto => {
            let theme = store.load(&ctx.theme_name)?;
            let _t_render = ctx.timer("render");
            let text = match &payload {
                Payload::One(system) => {
                    render_key_value(ctx.title("System Details"), theme, &detail(system))
                }
                Payload::Many(systems) => {
                    render_table(ctx.title("Systems"), theme, &grid(systems))?
                }
            };
            drop(_t_render);
            println!("{text}");
        }
    }
    Ok(())
}

/// Detail-view pairs for one system.
fn detail(system: &System) -> KeyValueSet {
    let mut pairs = KeyValueSet::new();
    pairs.push("ID", format_int(system.id));
    pairs.push("System Name", system.system_name.clone());
    pairs.push("Address", system.address.clone());
    pairs.push("Port", format_int(i64::from(system.port)));
    pairs.push("Created At", format_timestamp(&system.created_at));
    pairs.push("Updated At", format_timestamp(&system.updated_at));
    pairs
}

/// Grid view over a list of systems.
fn grid(systems: &[System]) -> Table {
    let mut table = Table::new(["ID", "NAME", "ADDRESS", "PORT", "CREATED AT", "UPDATED AT"]);
    for system in systems {
        table.push_row([
            format_int(system.id),
            system.system_name.clone(),
            system.address.clone(),
            format_int(i64::from(system.port)),
            format_timestamp(&system.created_at),
            format_timestamp(&system.updated_at),
        ]);
    }
    table
}

/// `service` command: render Service records from a JSON payload.
use crate::cli::OutputCtx;
use crate::cli::args::{OutputFormat, ServiceArgs};
use crate::cli::output::{print_compact_json, print_json};
use crate::commands::{CliError, Payload, load_payload};
use crate::format::{format_int, format_timestamp};
use crate::table::{KeyValueSet, Table, ThemeStore, render_key_value, render_table};
use crate::types::Service;

/// Run `arrowhead service`.
///
/// # Errors
///
/// Returns `CliError` on unreadable input, malformed JSON, unknown theme,
/// or a render contract violation.
pub fn run(args: &ServiceArgs, store: &ThemeStore, ctx: &OutputCtx) -> Result<(), CliError> {
    let _t_load = ctx.timer("load_payload");
    let payload = load_payload::<Service>(args.input.as_deref())?;
    drop(_t_load);

    match ctx.format {
        OutputFormat::Json => match &payload {
            Payload::One(service) => print_json(service),
            Payload::Many(services) => print_json(services),
        },
        OutputFormat::Compact => match &payload {
            Payload::One(service) => print_compact_json(service),
            Payload::Many(services) => print_compact_json(services),
        },
        OutputFormat::Table | OutputFormat::Auto => {
            let theme = store.load(&ctx.theme_name)?;
            let _t_render = ctx.timer("render");
            let text = match &payload {
                Payload::One(service) => {
                    render_key_value(ctx.title("Service Details"), theme, &detail(service))
                }
                Payload::Many(services) => {
                    render_table(ctx.title("Services"), theme, &grid(services))?
                }
            };
            drop(_t_render);
            println!("{text}");
        }
    }
    Ok(())
}

/// Detail-view pairs for one service definition.
fn detail(service: &Service) -> KeyValueSet {
    let mut pairs = KeyValueSet::new();
    pairs.push("ID", format_int(service.id));
    pairs.push("Service Definition", service.service_definition.clone());
    pairs.push("Created At", format_timestamp(&service.created_at));
    pairs.push("Updated At", format_timestamp(&service.updated_at));
    pairs
}

/// Grid view over a list of service definitions.
fn grid(services: &[Service]) -> Table {
    let mut table = Table::new(["ID", "DEFINITION", "CREATED AT", "UPDATED AT"]);
    for service in services {
        table.push_row([
            format_int(service.id),
            service.service_definition.clone(),
            format_timestamp(&service.created_at),
            format_timestamp(&service.updated_at),
        ]);
    }
    table
}

/// `device` command: render Device records from a JSON payload.
use crate::cli::OutputCtx;
use crate::cli::args::{DeviceArgs, OutputFormat};
use crate::cli::output::{print_compact_json, print_json};
use crate::commands::{CliError, Payload, load_payload};
use crate::format::{format_int, format_timestamp};
use crate::table::{KeyValueSet, Table, ThemeStore, render_key_value, render_table};
use crate::types::Device;

/// Run `arrowhead device`.
///
/// # Errors
///
/// Returns `CliError` on unreadable input, malformed JSON, unknown theme,
/// or a render contract violation.
pub fn run(args: &DeviceArgs, store: &ThemeStore, ctx: &OutputCtx) -> Result<(), CliError> {
    let _t_load = ctx.timer("load_payload");
    let payload = load_payload::<Device>(args.input.as_deref())?;
    drop(_t_load);

    match ctx.format {
        OutputFormat::Json => match &payload {
            Payload::One(device) => print_json(device),
            Payload::Many(devices) => print_json(devices),
        },
        OutputFormat::Compact => match &payload {
            Payload::One(device) => print_compact_json(device),
            Payload::Many(devices) => print_compact_json(devices),
        },
        OutputFormat::Table | OutputFormat::Auto => {
            let theme = store.load(&ctx.theme_name)?;
            let _t_render = ctx.timer("render");
            let text = match &payload {
                Payload::One(device) => {
                    render_key_value(ctx.title("Device Details"), theme, &detail(device))
                }
                Payload::Many(devices) => {
                    render_table(ctx.title("Devices"), theme, &grid(devices))?
                }
            };
            drop(_t_render);
            println!("{text}");
        }
    }
    Ok(())
}

/// Detail-view pairs for one device.
fn detail(device: &Device) -> KeyValueSet {
    let mut pairs = KeyValueSet::new();
    pairs.push("ID", format_int(device.id));
    pairs.push("Device Name", device.device_name.clone());
    pairs.push("Address", device.address.clone());
    pairs.push("MAC Address", device.mac_address.clone());
    pairs.push("Created At", format_timestamp(&device.created_at));
    pairs.push("Updated At", format_timestamp(&device.updated_at));
    pairs
}

/// Grid view over a list of devices.
fn grid(devices: &[Device]) -> Table {
    let mut table = Table::new(["ID", "NAME", "ADDRESS", "MAC", "CREATED AT", "UPDATED AT"]);
    for device in devices {
        table.push_row([
            format_int(device.id),
            device.device_name.clone(),
            device.address.clone(),
            device.mac_address.clone(),
            format_timestamp(&device.created_at),
            format_timestamp(&device.updated_at),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use chrono::Utc;

    fn sample() -> Device {
        Device {
            id: 3,
            device_name: "sensor-7".to_owned(),
            address: "10.0.0.7".to_owned(),
            mac_address: "00:1B:44:11:3A:B7".to_owned(),
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_detail_labels_in_order() {
        let pairs = detail(&sample());
        let labels: Vec<&str> = pairs.pairs().iter().map(|(l, _)| l.as_str()).collect();
        assert_eq!(
            labels,
            [
                "ID",
                "Device Name",
                "Address",
                "MAC Address",
                "Created At",
                "Updated At"
            ]
        );
    }

    #[test]
    fn test_grid_shape() {
        let table = grid(&[sample(), sample(), sample()]);
        assert_eq!(table.headers().len(), 6);
        assert_eq!(table.rows().len(), 3);
        assert_eq!(table.rows()[0][3], "00:1B:44:11:3A:B7");
    }
}

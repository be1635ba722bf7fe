//! Convert command: re-render a timestamp in another pattern or zone.

use anyhow::{anyhow, Context, Result};
use tracing::{info, info_span};

use kairos_datetime::{CalendarContext, DateTime, FormatterCache, Tz};

use crate::cli::ConvertArgs;
use crate::config;

/// Parse a timestamp, optionally move its display zone, and reprint it.
pub fn run(args: ConvertArgs) -> Result<()> {
    let _cmd = info_span!("convert").entered();

    // 1. Load project TOML
    let cfg = config::load(&args.config)?;

    // 2. Resolve patterns, with the output pattern defaulting to the input one
    let from = args.from.unwrap_or_else(|| cfg.defaults.pattern.clone());
    let to = args.to.unwrap_or_else(|| from.clone());

    // 3. Parse in the system context; zoneless inputs read as local wall clock
    let mut value = DateTime::parse_in(&args.input, &from, CalendarContext::system())
        .with_context(|| format!("failed to parse {:?} as {from:?}", args.input))?;
    info!(instant = %value.instant(), "input parsed");

    // 4. Move the display zone when one is requested
    if let Some(name) = args.timezone.or(cfg.defaults.timezone) {
        let zone: Tz = name
            .parse()
            .map_err(|_| anyhow!("unknown time zone {name:?}"))?;
        value.set_time_zone(zone);
        info!(zone = zone.name(), "display zone set");
    }

    // 5. Render with a formatter bound to the value's zone
    let formatter = FormatterCache::global().formatter_for(
        &to,
        value.time_zone(),
        value.locale(),
        value.calendar_kind(),
    );
    println!("{}", formatter.format(value.instant()));

    Ok(())
}

//! Spreads command handler: describe the bundled spreads.

use std::io::Write;

use arcana_engine::spread::SpreadDefinition;

use crate::error::CliError;
use crate::formatters::format_spread;

/// Handle the spreads command.
///
/// Text mode prints each spread with its positions in deal order; JSON mode
/// prints the full definitions including layout.
pub fn handle_spreads_command(json: bool, out: &mut dyn Write) -> Result<(), CliError> {
    let spreads = SpreadDefinition::builtins();
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&spreads)?)?;
        return Ok(());
    }
    for (i, spread) in spreads.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(out, "{}", format_spread(spread))?;
    }
    Ok(())
}

//! Show command implementation

use anyhow::Result;
use stochastic_presets::{Symbol, Timeframe};
use tracing::info;

pub fn run(config_path: Option<String>, symbol: String, timeframe: String, json: bool) -> Result<()> {
    let table = super::load_table(config_path)?;
    let timeframe: Timeframe = timeframe.parse()?;
    let symbol = Symbol::new(symbol);

    let resolved = table.resolve(&symbol, timeframe);
    info!(%symbol, %timeframe, source = %resolved.source, "Resolved preset");

    if json {
        println!("{}", serde_json::to_string_pretty(&resolved)?);
        return Ok(());
    }

    let i = &resolved.indicator;
    let s = &resolved.strategy;

    println!("\n{} {} ({})", symbol, timeframe, resolved.source);
    println!("{}", "=".repeat(48));
    println!("Indicator");
    println!("  %K period:            {}", i.kperiod);
    println!("  %D period:            {}", i.dperiod);
    println!("  Slowing:              {}", i.slowing);
    println!("  MA method:            {}", i.ma_method);
    println!("  Price field:          {}", i.price_field);
    println!("  Shift:                {}", i.shift);
    println!("Strategy");
    println!("  Lot size:             {}", s.lot_size);
    println!(
        "  Signal open:          method {} level {} filter {} boost {}",
        s.signal_open_method, s.signal_open_level, s.signal_open_filter, s.signal_open_boost
    );
    println!(
        "  Signal close:         method {} level {}",
        s.signal_close_method, s.signal_close_level
    );
    println!(
        "  Price profit:         method {} level {}",
        s.price_profit_method, s.price_profit_level
    );
    println!(
        "  Price stop:           method {} level {}",
        s.price_stop_method, s.price_stop_level
    );
    println!("  Tick filter method:   {}", s.tick_filter_method);
    println!("  Max spread:           {}", s.max_spread);

    if let Some(legacy) = table.legacy(&symbol, timeframe) {
        println!(
            "\nNote: a {} legacy record also exists for this key (see `list --legacy`)",
            legacy.layout()
        );
    }

    Ok(())
}

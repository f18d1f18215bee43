//! List command implementation

use anyhow::Result;

pub fn run(config_path: Option<String>, legacy: bool) -> Result<()> {
    let table = super::load_table(config_path)?;

    println!(
        "\n{:<10} {:<5} {:>3} {:>3} {:>4} {:<5} {:>5} {:>6} {:>6} {:>5} {:>6}",
        "SYMBOL", "TF", "K", "D", "SLOW", "MA", "OPEN", "O.LVL", "STOP", "S.LVL", "SPREAD"
    );
    println!("{}", "-".repeat(72));

    for p in table.iter() {
        let symbol = p.key.symbol.as_ref().map(|s| s.as_str()).unwrap_or("*");
        println!(
            "{:<10} {:<5} {:>3} {:>3} {:>4} {:<5} {:>5} {:>6.1} {:>6} {:>5.1} {:>6.1}",
            symbol,
            p.key.timeframe,
            p.indicator.kperiod,
            p.indicator.dperiod,
            p.indicator.slowing,
            p.indicator.ma_method,
            p.strategy.signal_open_method,
            p.strategy.signal_open_level,
            p.strategy.price_stop_method,
            p.strategy.price_stop_level,
            p.strategy.max_spread,
        );
    }
    println!("{} record(s)", table.len());

    if legacy {
        println!("\nLegacy sets");
        println!("{}", "-".repeat(72));
        for l in table.legacy_iter() {
            println!(
                "{:<10} {:<5} period {:>3} price {:?} open {}@{} close {}@{} spread {} [{}]",
                l.symbol,
                l.timeframe,
                l.period,
                l.applied_price,
                l.signal_open_method,
                l.signal_open_level,
                l.signal_close_method,
                l.signal_close_level,
                l.max_spread,
                l.layout(),
            );
        }
        println!("{} legacy record(s)", table.legacy_len());
    }

    Ok(())
}

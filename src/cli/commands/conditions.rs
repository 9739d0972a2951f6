//! List conditions command.

use anyhow::Result;
use signal_conditions::ConditionSet;
use signal_config::AppConfig;

pub async fn run(config: &AppConfig) -> Result<()> {
    let conditions = ConditionSet::standard(&config.engine);

    println!("Signal Conditions");
    println!("═══════════════════════════════════════════════════════════");
    println!();

    for info in conditions.list() {
        println!("  {} ({})", info.name, info.kind.key());
        println!("  ───────────────────────────────────────────────────────");
        println!("  {}", info.description);
        println!();
    }

    println!(
        "A signal needs {} of {} conditions on one side.",
        config.engine.min_signal_strength,
        conditions.len()
    );

    Ok(())
}

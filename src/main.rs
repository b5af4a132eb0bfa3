use anyhow::Result;

use largest_banks_etl::{pipeline, PipelineConfig};

fn main() -> Result<()> {
    let config = PipelineConfig::default();

    println!("🏦 Largest Banks ETL");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("Source:   {}", config.source_url);
    println!("CSV sink: {}", config.output_csv_path.display());
    println!("DB sink:  {} ({})", config.db_path.display(), config.table_name);
    println!();

    pipeline::run(&config)?;

    println!("✓ Process complete");
    Ok(())
}

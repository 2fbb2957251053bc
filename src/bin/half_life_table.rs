use std::error::Error;

use plaqueplot::{
    datasets::literature_slopes,
    growth::{format_time_constants, TimeConstantRow},
    log::LevelFilter,
    table::write_time_constants,
    HALF_LIFE_FILE,
};

fn main() -> Result<(), Box<dyn Error>> {
    plaqueplot::log::init_native_log(LevelFilter::INFO);

    let rows: Vec<TimeConstantRow> = literature_slopes()
        .into_iter()
        .map(TimeConstantRow::new)
        .collect();
    print!("{}", format_time_constants(&rows));

    write_time_constants(HALF_LIFE_FILE, &rows)?;
    println!("\nSaved table to '{}'", HALF_LIFE_FILE);
    Ok(())
}

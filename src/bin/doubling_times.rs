use plaqueplot::{datasets::doubling_cohorts, growth::DoublingSummary, log::LevelFilter};

fn main() {
    plaqueplot::log::init_native_log(LevelFilter::INFO);

    for (name, subjects) in doubling_cohorts() {
        let summary = DoublingSummary::new(name, &subjects);
        println!("=== {} ===", summary.name);
        println!("{}", summary);
    }
}

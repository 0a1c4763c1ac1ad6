//! `sw categories`: list the category profiles the engine scores against.

mod report;

use std::error::Error;

use sizewise::EngineConfig;

use report::{print_json, print_report};

pub fn run(json: bool) -> Result<(), Box<dyn Error>> {
    let scoring = EngineConfig::default().scoring;
    if json {
        print_json(&scoring)?;
    } else {
        print_report(&scoring);
    }
    Ok(())
}

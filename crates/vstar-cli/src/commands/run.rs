use vstar_core::{Parameters, RunRecord, bootstrap};

/// Normal mode: one aggregator run, one JSON result record on stdout.
pub fn run(params: Parameters) {
    match bootstrap::run(params) {
        Ok(result) => {
            let record = RunRecord::new(&result);
            println!("{}", serde_json::to_string_pretty(&record).unwrap());
        }
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }
}

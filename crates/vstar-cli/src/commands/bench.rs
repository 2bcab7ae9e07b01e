use std::time::Instant;

use vstar_core::{MachineInfo, Parameters, bootstrap, detect_machine_info};

/// Benchmark mode: print machine info plus setup/run wall-clock timing as
/// JSON, then exit. The result record itself is not printed; only the
/// aggregator call is timed.
pub fn run(params: Parameters) {
    let t0 = Instant::now();
    let machine: MachineInfo = detect_machine_info();
    let setup_elapsed = t0.elapsed().as_secs_f64();

    let t1 = Instant::now();
    let result = bootstrap::run(params);
    let run_elapsed = t1.elapsed().as_secs_f64();

    if let Err(err) = result {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }

    let bench_out = serde_json::json!({
        "vstar": vstar_core::VERSION,
        "machine": machine,
        "params": params,
        "setup_elapsed_s": setup_elapsed,
        "run_elapsed_s": run_elapsed,
    });
    println!("{}", serde_json::to_string_pretty(&bench_out).unwrap());
}

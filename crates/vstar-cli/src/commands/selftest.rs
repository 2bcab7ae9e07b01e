/// Self-test mode: run the battery, print one line per check, and return
/// the process exit code (0 only when every check passed).
pub fn run() -> i32 {
    let results = vstar_tests::run_all();

    for r in &results {
        let status = if r.passed { "PASS" } else { "FAIL" };
        println!("  {status}  {:<28} {}", r.name, r.details);
    }

    let passed = results.iter().filter(|r| r.passed).count();
    println!("\n{passed}/{} self-tests passed.", results.len());

    if vstar_tests::all_passed(&results) { 0 } else { 1 }
}

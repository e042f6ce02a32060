use std::io::{self, Read, Write};

use sparse_segtree::{input, IncreasingSubsequenceSolver};

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut text = String::new();
    io::stdin().read_to_string(&mut text)?;

    let cases = input::parse_cases(&text)?;
    let solver = IncreasingSubsequenceSolver::new();

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    for (i, case) in cases.iter().enumerate() {
        let total = solver
            .solve(&case.keys, &case.weights)
            .map_err(|e| format!("test case {}: {}", i + 1, e))?;
        writeln!(out, "{}", total)?;
    }
    out.flush()?;
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

use spike::cli::run;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        // Show error chain if available
        let mut source = e.source();
        if source.is_some() {
            eprintln!("\nCaused by:");
            while let Some(err) = source {
                eprintln!("  {}", err);
                source = err.source();
            }
        }
        std::process::exit(1);
    }
}

use vergen::EmitBuilder;

// Emits version and build metadata for the startup log line.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    EmitBuilder::builder()
        .all_build() // Build timestamp, rustc, etc.
        .all_git() // Git sha; falls back to defaults outside a checkout
        .emit()?;

    // Man page and completions come from the generate_cli_files binary.

    Ok(())
}

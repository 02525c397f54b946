use xliff2strings::{ConversionReport, ConvertOptions, Error, convert_file};

/// Run the conversion and print one status line per section.
pub fn run_convert_command(
    input: &str,
    output: &str,
    dry_run: bool,
) -> Result<ConversionReport, Error> {
    let options = ConvertOptions::new()
        .with_output_base(output)
        .with_dry_run(dry_run);

    if dry_run {
        println!("Checking {} (no files will be written)...", input);
    } else {
        println!("Converting {} into {}...", input, output);
    }

    let report = convert_file(input, &options)?;
    let verb = if dry_run { "Would write" } else { "Wrote" };
    for section in &report.sections {
        println!(
            "  {} {} ({} -> {}, {} units)",
            verb,
            section.output.display(),
            section.original,
            section.target_language,
            section.units
        );
    }

    println!(
        "✅ {} section(s), {} unit(s)",
        report.sections.len(),
        report.total_units()
    );
    Ok(report)
}

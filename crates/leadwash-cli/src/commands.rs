use anyhow::Result;
use comfy_table::Table;

use leadwash_clean::VALID_DDD;
use leadwash_cli::pipeline::{CleanOptions, CleanRunResult, run_clean};
use leadwash_report::{apply_table_style, print_summary};

use crate::cli::CleanArgs;

pub fn run_clean_command(args: &CleanArgs) -> Result<CleanRunResult> {
    let options = CleanOptions {
        output: args.output.clone(),
        dry_run: args.dry_run,
        summary_json: args.summary_json.clone(),
    };
    run_clean(&args.input, &options)
}

pub fn print_run(result: &CleanRunResult) {
    if let Some(path) = &result.output_path {
        println!("Output: {}", path.display());
    }
    if let Some(path) = &result.summary_json_path {
        println!("Summary JSON: {}", path.display());
    }
    print_summary(&result.summary);
}

pub fn run_ddds() {
    let mut table = Table::new();
    table.set_header(vec!["Valid DDD codes"]);
    apply_table_style(&mut table);
    for chunk in VALID_DDD.chunks(10) {
        let row = chunk
            .iter()
            .map(u8::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        table.add_row(vec![row]);
    }
    println!("{table}");
}

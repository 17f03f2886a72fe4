#![deny(clippy::all)]
#![forbid(unsafe_code)]

// FIXME: When derive_builder supports Rust 2018 syntax switch to a local import
#[macro_use]
extern crate derive_builder;

use std::error::Error;
use std::fs::File;
use std::io::prelude::*;
use std::path::{Path, PathBuf};

use itertools::Itertools;
use structopt::StructOpt;

mod error;
mod geo;
mod html;
mod locate;
mod survey;

#[derive(StructOpt)]
struct Args {
    /// Directory tree to scan for survey JSON files
    #[structopt(name = "root", parse(from_os_str), default_value = ".")]
    root: PathBuf,
    #[structopt(
        short = "o",
        long = "output",
        parse(from_os_str),
        default_value = "./survey_map.html"
    )]
    output: PathBuf,
    /// Pull request number, only echoed in the progress output
    #[structopt(long = "pr-number")]
    pr_number: Option<u64>,
    /// Repository name, only echoed in the progress output
    #[structopt(long = "repo")]
    repo: Option<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::from_args();

    match args.pr_number {
        Some(pr) => println!("Searching for survey files in PR #{}...", pr),
        None => println!("Searching for survey files..."),
    }
    if let Some(repo) = &args.repo {
        println!("Repository: {}", repo);
    }

    let files = locate::find_survey_files(&args.root);
    if files.is_empty() {
        println!("No survey files found in this PR.");
        return write_output(&args.output, html::NO_DATA_PLACEHOLDER);
    }

    println!(
        "Found {} survey file(s): {}",
        files.len(),
        files.iter().map(|f| f.display().to_string()).join(", ")
    );

    // Bad files are logged and dropped, the rest still render.
    let mut surveys = Vec::new();
    for file in &files {
        match survey::parse::parse_survey_file(file) {
            Ok(survey) => surveys.push(survey),
            Err(e) => eprintln!("Error parsing {}: {}", file.display(), e),
        }
    }

    if surveys.is_empty() {
        println!("No valid survey data could be parsed.");
        return write_output(&args.output, html::UNPARSED_PLACEHOLDER);
    }

    println!("Parsed {} survey(s) successfully.", surveys.len());

    println!("Outputing survey map...");
    write_output(&args.output, &html::render_map(&surveys))?;
    println!("Map generated successfully: {}", args.output.display());
    Ok(())
}

fn write_output(path: &Path, contents: &str) -> Result<(), Box<dyn Error>> {
    let mut output = File::create(path)?;
    output.write_all(contents.as_bytes())?;
    Ok(())
}

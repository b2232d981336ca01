//! Remove subcommands.

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::Result;

use crate::storage::{delete_dataset, discard_library};

use super::status::{paint, Tone};


/// Remove a single dataset.
pub fn dataset(db_path: &Path, dataset_id: i64, colored: bool) -> Result<()> {
    let line = if delete_dataset(db_path, dataset_id)? {
        paint(&format!("+ Dataset #{} removed", dataset_id), Tone::Success, colored)
    } else {
        paint(&format!("Dataset #{} does not exist, nothing removed", dataset_id), Tone::Warning, colored)
    };
    println!("{}", line);

    Ok(())
}


/// Remove the whole dataset library, keeping one backup copy.
pub fn library(db_path: &Path, force: bool, colored: bool) -> Result<()> {
    if !db_path.exists() {
        println!("{}", paint(&format!("Library {} is already empty", db_path.display()), Tone::Warning, colored));
        return Ok(());
    }

    if !force {
        println!("{}", paint("Every stored dataset will be deleted.", Tone::Failure, colored));
        if !confirm(&mut io::stdin().lock(), "Type 'delete' to continue: ")? {
            println!("{}", paint("Library left unchanged", Tone::Warning, colored));
            return Ok(());
        }
    }

    if let Some(backup) = discard_library(db_path)? {
        println!("{}", paint("+ Library deleted", Tone::Success, colored));
        println!(
            "{}",
            paint(
                &format!("Copy kept at {} ('eqv restore library' brings it back)", backup.display()),
                Tone::Muted,
                colored,
            )
        );
    }

    Ok(())
}


/// Prompt on stdout and read one answer from `input`.
fn confirm(input: &mut impl BufRead, prompt: &str) -> Result<bool> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;

    Ok(answer.trim().eq_ignore_ascii_case("delete"))
}

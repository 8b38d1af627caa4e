//! Interactive shell: mode menu, prompts, and artifact downloads.
//!
//! Each mode is one linear request/response cycle. Failures become themed
//! notifications; nothing terminates the session.

pub mod theme;

use std::fs;
use std::path::{Path, PathBuf};

use rustyline::history::DefaultHistory;
use rustyline::Editor;

use crate::archive::build_zip;
use crate::error::HfgrabError;
use crate::export::{export, export_author, ExportFormat};
use crate::hub::resolve::validate_dataset_ref;
use crate::hub::DatasetHub;
use crate::notify::Notifier;

/// Prints notifications straight to the terminal through the theme.
#[derive(Debug, Default)]
pub struct TermNotifier;

impl Notifier for TermNotifier {
    fn progress(&mut self, message: &str) {
        println!("{}", theme::dim(message));
    }

    fn warning(&mut self, message: &str) {
        eprintln!("{}", theme::warning(message));
    }

    fn error(&mut self, message: &str) {
        eprintln!("{}", theme::error(message));
    }
}

pub struct Shell<'a> {
    hub: &'a dyn DatasetHub,
    out_dir: PathBuf,
    editor: Editor<(), DefaultHistory>,
}

impl<'a> Shell<'a> {
    pub fn new(hub: &'a dyn DatasetHub, out_dir: PathBuf) -> Result<Self, HfgrabError> {
        let editor = Editor::<(), DefaultHistory>::new()
            .map_err(|source| HfgrabError::Input(source.to_string()))?;
        Ok(Shell {
            hub,
            out_dir,
            editor,
        })
    }

    /// Run the mode menu until the user quits or input ends.
    pub fn run(&mut self) -> Result<(), HfgrabError> {
        theme::init();
        println!("{}", theme::prompt("Hugging Face dataset exporter"));

        loop {
            println!();
            println!("Choose an option:");
            println!("  1) Single dataset");
            println!("  2) All datasets by author");
            println!("  q) Quit");

            let Some(choice) = self.read_line("> ") else {
                return Ok(());
            };
            match choice.trim() {
                "1" => self.single_dataset(),
                "2" => self.all_by_author(),
                "q" | "quit" | "exit" => return Ok(()),
                "" => {}
                other => {
                    eprintln!("{}", theme::warning(&format!("Unknown option '{other}'")));
                }
            }
        }
    }

    /// Returns `None` on EOF or interrupt, which backs out of the prompt.
    fn read_line(&mut self, prompt: &str) -> Option<String> {
        self.editor.readline(&theme::prompt(prompt)).ok()
    }

    fn single_dataset(&mut self) {
        let Some(input) =
            self.read_line("Dataset path (e.g. 'imdb' or 'glue/sst2'): ")
        else {
            return;
        };
        let dataset_id = match validate_dataset_ref(&input) {
            Ok(id) => id,
            Err(error) => {
                eprintln!("{}", theme::error(&error.to_string()));
                return;
            }
        };

        let Some(choice) = self.read_line("Format [best/excel/csv/pdf/json]: ") else {
            return;
        };
        let format = ExportFormat::parse(&choice);

        let mut notify = TermNotifier;
        notify.progress(&format!("Downloading dataset '{dataset_id}'..."));
        let artifacts = export(self.hub, &dataset_id, format, &mut notify);

        if artifacts.is_empty() {
            notify.error("No downloadable files found.");
            return;
        }

        for artifact in &artifacts {
            let file_name = final_segment(&artifact.path);
            match save_bytes(&self.out_dir, Path::new(file_name), &artifact.bytes) {
                Ok(saved) => println!(
                    "{}",
                    theme::success(&format!(
                        "Saved {} ({} bytes)",
                        saved.display(),
                        artifact.bytes.len()
                    ))
                ),
                Err(error) => {
                    notify.error(&format!("Failed saving '{file_name}': {error}"));
                }
            }
        }
    }

    fn all_by_author(&mut self) {
        let Some(author) = self.read_line("Author name: ") else {
            return;
        };
        let author = author.trim().to_string();
        if author.is_empty() {
            eprintln!("{}", theme::warning("Author name is required."));
            return;
        }

        let mut notify = TermNotifier;
        notify.progress("Listing and downloading datasets...");

        let collected = match export_author(self.hub, &author, &mut notify) {
            Ok(collected) => collected,
            Err(error) => {
                notify.error(&format!("Error: {error}"));
                return;
            }
        };

        let bytes = match build_zip(&collected) {
            Ok(bytes) => bytes,
            Err(error) => {
                notify.error(&format!("Failed building archive: {error}"));
                return;
            }
        };

        let archive_name = format!("{author}_datasets.zip");
        match save_bytes(&self.out_dir, Path::new(&archive_name), &bytes) {
            Ok(saved) => println!(
                "{}",
                theme::success(&format!(
                    "All available datasets downloaded: {}",
                    saved.display()
                ))
            ),
            Err(error) => notify.error(&format!("Failed saving archive: {error}")),
        }
    }
}

/// Final path segment of an artifact path, used for single-file downloads.
pub fn final_segment(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Write bytes under the output directory, creating parents on demand.
pub fn save_bytes(out_dir: &Path, relative: &Path, bytes: &[u8]) -> Result<PathBuf, HfgrabError> {
    let target = out_dir.join(relative);
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent).map_err(HfgrabError::Io)?;
    }
    fs::write(&target, bytes).map_err(HfgrabError::Io)?;
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn final_segment_drops_directories() {
        assert_eq!(final_segment("org/data/train.csv"), "train.csv");
        assert_eq!(final_segment("train.csv"), "train.csv");
    }

    #[test]
    fn save_bytes_creates_parents() {
        let temp = tempfile::tempdir().expect("tempdir");
        let saved = save_bytes(temp.path(), Path::new("a/b/file.txt"), b"hi").expect("save");

        assert_eq!(std::fs::read(saved).expect("read back"), b"hi");
    }
}

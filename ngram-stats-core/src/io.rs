use std::fs;
use std::path::{Path, PathBuf};
use std::{env, io};

use log::debug;

use crate::error::PipelineError;

fn io_error(path: &Path, source: io::Error) -> PipelineError {
	PipelineError::Io { path: path.to_path_buf(), source }
}

/// Reads a text file as one document.
///
/// - Reads the entire file into memory
/// - Turns `\n` / `\r` into spaces
pub fn read_document<P: AsRef<Path>>(path: P) -> Result<String, PipelineError> {
	let path = path.as_ref();
	let contents = fs::read_to_string(path).map_err(|e| io_error(path, e))?;
	Ok(contents.replace(['\n', '\r'], " "))
}

/// Normalize a folder path.
///
/// - `"."` or `"./"` resolves to the current working directory
/// - Other paths are returned as-is (not canonicalized)
pub fn normalize_folder(input: &str) -> PathBuf {
	if input == "." || input == "./" {
		env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
	} else {
		PathBuf::from(input)
	}
}

/// Lists all files with a given extension in a directory, sorted by name.
///
/// Returns full paths. Subdirectories are not visited.
pub fn list_files<P: AsRef<Path>>(dir: P, extension: &str) -> Result<Vec<PathBuf>, PipelineError> {
	let dir = dir.as_ref();
	let mut files = Vec::new();

	for entry in fs::read_dir(dir).map_err(|e| io_error(dir, e))? {
		let path = entry.map_err(|e| io_error(dir, e))?.path();
		if path.is_file() && path.extension() == Some(std::ffi::OsStr::new(extension)) {
			files.push(path);
		}
	}

	files.sort();
	Ok(files)
}

/// Documents read from the file system, one document per file.
///
/// Files are read lazily, in the order they were added. An empty source
/// is a valid, empty run.
#[derive(Debug, Default, Clone)]
pub struct FileSource {
	paths: Vec<PathBuf>,
}

impl FileSource {
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a file, or every `extension` file of a folder.
	pub fn add<P: AsRef<Path>>(&mut self, path: P, extension: &str) -> Result<(), PipelineError> {
		let path = path.as_ref();
		if path.is_dir() {
			let files = list_files(path, extension)?;
			debug!("{} '{}' files in {}", files.len(), extension, path.display());
			self.paths.extend(files);
		} else {
			self.paths.push(path.to_path_buf());
		}
		Ok(())
	}

	pub fn paths(&self) -> &[PathBuf] {
		&self.paths
	}

	pub fn is_empty(&self) -> bool {
		self.paths.is_empty()
	}

	/// Iterates over the documents, reading each file on demand.
	pub fn documents(&self) -> impl Iterator<Item = Result<String, PipelineError>> + '_ {
		self.paths.iter().map(read_document)
	}
}

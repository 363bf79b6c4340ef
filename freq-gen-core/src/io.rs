use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::{fs, io};

/// Reads a text file and returns all its lines as a `Vec<String>`.
///
/// - Reads the entire file into memory
/// - Splits on `\n` / `\r\n`
pub(crate) fn read_file<P: AsRef<Path>>(filename: P) -> io::Result<Vec<String>> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	Ok(contents.lines().map(str::to_owned).collect())
}

/// Writes a text value to a file, replacing any previous content.
///
/// UTF-8, one shot, no retries.
pub(crate) fn write_file<P: AsRef<Path>>(filename: P, contents: &str) -> io::Result<()> {
	fs::write(filename, contents)
}

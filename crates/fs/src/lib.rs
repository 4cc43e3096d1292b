mod log;


pub use crate::log::{set_log_file_path, write_log};

use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

/// What `write_string` does to an existing file, and whether it may create a new one.
///
/// | mode               | file exists | no file |
/// |--------------------|-------------|---------|
/// | `AlwaysAppend`     | append      | error   |
/// | `AppendOrCreate`   | append      | create  |
/// | `CreateOrTruncate` | truncate    | create  |
/// | `AlwaysCreate`     | error       | create  |
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum WriteMode {
    AlwaysAppend,
    AppendOrCreate,
    CreateOrTruncate,
    AlwaysCreate,
}

impl WriteMode {
    fn open_options(self) -> OpenOptions {
        let mut options = OpenOptions::new();

        match self {
            WriteMode::AlwaysAppend => { options.append(true); },
            WriteMode::AppendOrCreate => { options.append(true).create(true); },
            WriteMode::CreateOrTruncate => { options.write(true).truncate(true).create(true); },
            WriteMode::AlwaysCreate => { options.write(true).create_new(true); },
        }

        options
    }
}

pub fn read_string(path: &str) -> Result<String, FileError> {
    fs::read_to_string(path).map_err(|e| FileError::from_std(e, path))
}

/// A corpus file: one text per line. Blank lines are skipped and `\r\n` is fine.
pub fn read_lines(path: &str) -> Result<Vec<String>, FileError> {
    Ok(read_string(path)?.lines().map(
        |line| line.trim_end_matches('\r')
    ).filter(
        |line| !line.trim().is_empty()
    ).map(
        |line| line.to_string()
    ).collect())
}

pub fn write_string(path: &str, s: &str, write_mode: WriteMode) -> Result<(), FileError> {
    write_mode.open_options().open(path).and_then(
        |mut f| f.write_all(s.as_bytes())
    ).map_err(
        |e| FileError::from_std(e, path)
    )
}

pub fn exists(path: &str) -> bool {
    Path::new(path).exists()
}

pub fn remove_file(path: &str) -> Result<(), FileError> {
    fs::remove_file(path).map_err(|e| FileError::from_std(e, path))
}

#[derive(Clone, PartialEq)]
pub struct FileError {
    pub kind: FileErrorKind,
    pub path: String,
}

impl FileError {
    pub fn from_std(e: io::Error, path: &str) -> Self {
        FileError {
            kind: match e.kind() {
                io::ErrorKind::NotFound => FileErrorKind::FileNotFound,
                io::ErrorKind::PermissionDenied => FileErrorKind::PermissionDenied,
                io::ErrorKind::AlreadyExists => FileErrorKind::AlreadyExists,

                // `fs::read_to_string` reports invalid utf-8 this way
                io::ErrorKind::InvalidData => FileErrorKind::NotUtf8,
                _ => FileErrorKind::Other(e.to_string()),
            },
            path: path.to_string(),
        }
    }

    pub fn render(&self) -> String {
        let path = &self.path;

        match &self.kind {
            FileErrorKind::FileNotFound => format!("`{path}` does not exist"),
            FileErrorKind::PermissionDenied => format!("no permission to access `{path}`"),
            FileErrorKind::AlreadyExists => format!("`{path}` already exists"),
            FileErrorKind::NotUtf8 => format!("`{path}` is not a utf-8 text file"),
            FileErrorKind::Other(msg) => format!("cannot access `{path}`: {msg}"),
        }
    }
}

impl fmt::Debug for FileError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{}", self.render())
    }
}

impl fmt::Display for FileError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{}", self.render())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum FileErrorKind {
    FileNotFound,
    PermissionDenied,
    AlreadyExists,
    NotUtf8,
    Other(String),
}

use crate::{WriteMode, write_string};
use chrono::offset::Local;
use lazy_static::lazy_static;
use std::sync::RwLock;

lazy_static! {
    // `None` means logging is turned off
    static ref LOG_FILE_PATH: RwLock<Option<String>> = RwLock::new(None);
}

pub fn set_log_file_path(path: Option<String>) {
    if let Ok(mut log_file_path) = LOG_FILE_PATH.write() {
        *log_file_path = path;
    }
}

fn get_log_file_path() -> Option<String> {
    LOG_FILE_PATH.read().ok().and_then(|path| path.clone())
}

/// `Thu, 2 Jan 2025 10:00:00 +0800 |                      build_vocab | 3 texts, 41 tokens`
///
/// It does nothing if the log file is not set. A log that cannot be
/// written is dropped: logging never fails the caller.
pub fn write_log(owner: &str, msg: &str) {
    if let Some(path) = get_log_file_path() {
        let _ = write_string(
            &path,
            &format!(
                "{} | {owner:>32} | {msg}\n",
                Local::now().to_rfc2822(),
            ),
            WriteMode::AppendOrCreate,
        );
    }
}

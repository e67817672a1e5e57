#![allow(dead_code)]

use std::fs::{self, File, OpenOptions};
use std::io::{Read, Seek, SeekFrom};
use std::os::unix::io::AsRawFd;
use std::path::PathBuf;

/// Scratch file standing in for the output stream: hands its raw
/// descriptor to the shim and reads the transcript back for asserts.
pub struct Scratch {
    path: PathBuf,
    file: File,
}

impl Scratch {
    pub fn new(tag: &str) -> Self {
        let name = format!("demos_{}_{}.out", tag.replace(' ', "_"), std::process::id());
        let path = std::env::temp_dir().join(name);
        let file = OpenOptions::new()
            .create(true)
            .truncate(true)
            .read(true)
            .write(true)
            .open(&path)
            .unwrap();
        Scratch { path, file }
    }

    pub fn fd(&self) -> i32 {
        self.file.as_raw_fd()
    }

    pub fn contents(&mut self) -> Vec<u8> {
        self.file.seek(SeekFrom::Start(0)).unwrap();
        let mut buf = Vec::new();
        self.file.read_to_end(&mut buf).unwrap();
        buf
    }
}

impl Drop for Scratch {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}

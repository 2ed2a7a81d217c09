use std::io::Write;

use tempfile::NamedTempFile;

/// On-disk CSV fixture, deleted when dropped.
pub struct TestCsv {
    file: NamedTempFile,
}

impl TestCsv {
    pub fn new(contents: &str) -> Self {
        let mut file = NamedTempFile::new().expect("create temp csv");
        file.write_all(contents.as_bytes()).expect("write temp csv");
        file.flush().expect("flush temp csv");
        Self { file }
    }

    /// A fixture with `total` numbered people rows.
    pub fn people(total: usize) -> Self {
        let mut contents = String::from("id,name,city\n");
        for id in 1..=total {
            let city = if id % 2 == 0 { "Bergen" } else { "Oslo" };
            contents.push_str(&format!("{id},Person {id},{city}\n"));
        }
        Self::new(&contents)
    }

    pub fn path(&self) -> &std::path::Path {
        self.file.path()
    }
}

use log::debug;
use pkgfix::{cli::migrate, config::Config, error::Result, report::Report};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Creates every `(relative path, bytes)` pair under `root`, including parent
/// directories.
pub fn write_tree(root: &Path, files: &[(&str, &[u8])]) {
    for (relative, content) in files {
        let path = root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
    }
}

/// Runs one migration pass over `root` with the compiled-in rule.
pub fn migrate_tree(root: &Path) -> Result<Report> {
    let config = Config::new(root)?;
    migrate(&config)
}

/// Prints files only present on one side and content differences for files
/// present in both.
pub fn print_dir_diff(dir1: &Path, dir2: &Path) {
    let mut files1 = std::collections::BTreeSet::new();
    let mut files2 = std::collections::BTreeSet::new();

    for entry in WalkDir::new(dir1).into_iter().filter_map(|e| e.ok()) {
        if entry.file_type().is_file() {
            files1.insert(entry.path().strip_prefix(dir1).unwrap().to_path_buf());
        }
    }
    for entry in WalkDir::new(dir2).into_iter().filter_map(|e| e.ok()) {
        if entry.file_type().is_file() {
            files2.insert(entry.path().strip_prefix(dir2).unwrap().to_path_buf());
        }
    }

    println!("\n=== Directory Comparison ===");
    println!("Actual tree:   {:?}", dir1);
    println!("Expected tree: {:?}", dir2);

    for file in files1.difference(&files2) {
        println!("  + {:?}", file);
    }
    for file in files2.difference(&files1) {
        println!("  - {:?}", file);
    }
    for file in files1.intersection(&files2) {
        let content1 = fs::read(dir1.join(file)).unwrap();
        let content2 = fs::read(dir2.join(file)).unwrap();
        if content1 != content2 {
            println!("\n  File: {:?}", file);
            println!("  --- Actual bytes:   {:?}", String::from_utf8_lossy(&content1));
            println!("  --- Expected bytes: {:?}", String::from_utf8_lossy(&content2));
        }
    }
    println!("=== End of Comparison ===\n");
}

/// Asserts that two trees hold the same files with byte-identical contents.
pub fn assert_trees_equal(actual: &Path, expected: &Path) {
    match dir_diff::is_different(actual, expected) {
        Ok(false) => {}
        Ok(true) => {
            print_dir_diff(actual, expected);
            panic!("Directories differ. See above for details.");
        }
        Err(e) => {
            debug!("Error comparing directories: {e:?}");
            panic!("Failed to compare directories");
        }
    }
}

//! Constants used throughout pkgfix

/// Project root rewritten when no root is given on the command line
pub const DEFAULT_ROOT: &str = r"d:\code\NovelVoiceApp\excel-spring-boot-starter";

/// Package identifier being migrated away from
pub const SOURCE_PACKAGE: &str = "com.app.tool.excel";

/// Package identifier written in its place
pub const TARGET_PACKAGE: &str = "com.gmrfid.excel";

/// File name suffixes selected for rewriting
pub const EXTENSIONS: &[&str] = &[".java", ".xml", ".properties", ".factories", ".yml", ".md"];

/// Encoding labels tried in order when decoding a file
pub const ENCODING_LABELS: &[&str] = &["utf-8", "gbk"];

/// Line printed once the whole tree has been processed
pub const COMPLETION_MESSAGE: &str = "Package replacement and encoding fix completed.";

/// Exit codes
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}

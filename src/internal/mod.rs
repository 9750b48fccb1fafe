pub mod init;
pub mod panicking;

pub mod check;
pub mod export;
pub mod import;
pub mod init;
pub mod serve;
pub mod upcoming;

pub mod init;
pub mod score;
pub mod stages;
pub mod validate;

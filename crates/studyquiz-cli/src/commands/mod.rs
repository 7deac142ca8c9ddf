pub mod generate;
pub mod init;
pub mod input;
pub mod split;
pub mod terms;

pub mod archive;
pub mod board;
pub mod clear;
pub mod config;
pub mod export;
pub mod init;
pub mod roster;
pub mod sign_in;
pub mod sign_out;

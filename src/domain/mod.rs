//! Domain types shared by the web server and the command-line tool.

pub mod options;
pub mod repository;

mod natroot_cli;

pub use natroot_cli::*;

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::Path;

/// Get a Command for fringe with logging overrides cleared
pub fn fringe() -> Command {
    let mut cmd = cargo_bin_cmd!("fringe");
    cmd.env_remove("RUST_LOG")
        .env_remove("FRINGE_LOG")
        .env_remove("FRINGE_CONFIG");
    cmd
}

/// Rules for a two-object program
#[allow(dead_code)]
pub const PROGRAM_RULES: &str = "\
prog: main.o util.o
\tcc -o prog main.o util.o
main.o: main.c
\tcc -c main.c
util.o: util.c
\tcc -c util.c
";

/// A small road map around the bay
#[allow(dead_code)]
pub const BAY_MAP: &str = "\
L Berkeley 0 0
L Oakland 0 -4
L Alameda 1 -6
L Richmond 0 6
L Sacramento 60 20
R Richmond I-80 6.0 NS Berkeley
R Berkeley I-80 4.0 NS Oakland
R Oakland Webster_St 2.5 NS Alameda
";

#[allow(dead_code)]
pub fn write_file(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).unwrap();
}

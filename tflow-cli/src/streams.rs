// Opening of input and output streams.
//
// `-` stands for stdin / stdout. Everything else is a file path; output files are
// created (or truncated) before any record is written.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};

/// Path value meaning "the standard stream".
pub const STDIO: &str = "-";

pub fn open_input(path: &str) -> io::Result<Box<dyn BufRead>> {
    if path == STDIO {
        Ok(Box::new(io::stdin().lock()))
    } else {
        Ok(Box::new(BufReader::new(File::open(path)?)))
    }
}

pub fn open_output(path: &str) -> io::Result<Box<dyn Write>> {
    if path == STDIO {
        Ok(Box::new(BufWriter::new(io::stdout().lock())))
    } else {
        Ok(Box::new(BufWriter::new(File::create(path)?)))
    }
}

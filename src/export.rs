use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use itertools::Itertools;

use crate::Distribution;

/// One comma-separated row per distribution, no header; rows keep their
/// natural ragged lengths.
pub fn write_csv<W>(table: &[Distribution], mut out: W) -> io::Result<()>
where
    W: Write,
{
    for row in table {
        writeln!(out, "{}", row.iter().join(","))?;
    }
    Ok(())
}

pub fn export_csv<P>(table: &[Distribution], path: P) -> io::Result<()>
where
    P: AsRef<Path>,
{
    let mut out = BufWriter::new(File::create(path)?);
    write_csv(table, &mut out)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::{distribution_table, Cleanup};

    #[test]
    fn rows_are_ragged_and_headerless() {
        let table = distribution_table(2, Cleanup::default()).unwrap();
        let mut buf = Vec::new();
        write_csv(&table, &mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "1\n0.5,0.5\n0.25,0.5,0.24,0,0.01\n"
        );
    }
}

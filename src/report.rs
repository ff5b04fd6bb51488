//! The curated table of semiprimes handed to the factoring tool, and the
//! plain text report printed for it.
//!
//! Each entry is validated before it is printed. A wrong product or digit
//! count turns the entry into an inline error line, and the report goes on
//! with the next entry.

use crate::semiprime::Semiprime;
use std::collections::BTreeMap;
use std::io::Write;

const BANNER_WIDTH: usize = 70;
const TITLE: &str = "GNFS TEST NUMBERS - SEMIPRIMES";
const BASELINE_DIGITS: usize = 8;

/// Factor triples `(p, q, n)` grouped by the decimal size they are meant to have
pub type TestTable = BTreeMap<usize, Vec<Semiprime<u64>>>;

/// Hand picked test numbers, grouped by their intended digit count.
///
/// The entries are kept as they were picked; the report flags the ones whose
/// product or size does not match.
const TEST_NUMBERS: &[(usize, &[(u64, u64, u64)])] = &[
    (8, &[(6917, 6923, 47893197)]),
    (
        9,
        &[
            (10007, 31469, 314920583),
            (14143, 23971, 339023653),
            (18713, 19681, 368237353),
        ],
    ),
    (
        10,
        &[
            (31627, 31657, 1001163139),
            (100003, 99991, 9999399973),
            (158233, 189389, 29968661137),
        ],
    ),
    (
        11,
        &[
            (316513, 316549, 100179924437),
            (500009, 630007, 315008630063),
            (707089, 811447, 573881819183),
        ],
    ),
    (
        12,
        &[
            (1000003, 999983, 999985999949),
            (2236067, 1483637, 3317738819279),
        ],
    ),
];

/// The curated test numbers as a table sorted by digit count
pub fn test_numbers() -> TestTable {
    TEST_NUMBERS
        .iter()
        .map(|&(digits, entries)| {
            let entries = entries
                .iter()
                .map(|&(p, q, n)| Semiprime { p, q, n })
                .collect();
            (digits, entries)
        })
        .collect()
}

/// Render a single entry of a digit group, without a trailing newline
pub fn format_entry(entry: &Semiprime<u64>, digits: usize) -> String {
    match entry.check(digits) {
        Err(e) => format!("  ERROR: {}", e),
        Ok(()) if digits == BASELINE_DIGITS => format!("  {} (BASELINE)", entry),
        Ok(()) => format!("  {}", entry),
    }
}

/// Write the full report for `table`
pub fn write_report<W: Write>(out: &mut W, table: &TestTable) -> std::io::Result<()> {
    let banner = "=".repeat(BANNER_WIDTH);
    writeln!(out, "{}", banner)?;
    writeln!(out, "{}", TITLE)?;
    writeln!(out, "{}", banner)?;
    writeln!(out)?;

    for (&digits, entries) in table {
        writeln!(out, "{} DIGITS:", digits)?;
        for entry in entries {
            writeln!(out, "{}", format_entry(entry, digits))?;
        }
        writeln!(out)?;
    }

    writeln!(out, "{}", banner)?;
    writeln!(out)?;
    writeln!(out, "USAGE:")?;
    writeln!(out, "  ./target/release/gnfs <number>")?;
    writeln!(out, "  Example: ./target/release/gnfs 47893197")?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(table: &TestTable) -> String {
        let mut buf = Vec::new();
        write_report(&mut buf, table).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn table_test() {
        let table = test_numbers();
        let digits: Vec<_> = table.keys().cloned().collect();
        assert_eq!(digits, [8, 9, 10, 11, 12]);
        assert_eq!(table.values().map(Vec::len).sum::<usize>(), 12);
    }

    #[test]
    fn entry_format_test() {
        let ok = Semiprime { p: 100003, q: 99991, n: 9999399973 };
        assert_eq!(format_entry(&ok, 10), "  9999399973 = 100003 × 99991");

        let baseline = Semiprime { p: 10007, q: 9973, n: 99799811 };
        assert_eq!(format_entry(&baseline, 8), "  99799811 = 10007 × 9973 (BASELINE)");

        let wrong_product = Semiprime { p: 6917, q: 6923, n: 47893197 };
        assert_eq!(
            format_entry(&wrong_product, 8),
            "  ERROR: 6917 × 6923 = 47886391, not 47893197"
        );

        let wrong_size = Semiprime { p: 100003, q: 99991, n: 9999399973 };
        assert_eq!(
            format_entry(&wrong_size, 11),
            "  ERROR: 9999399973 has 10 digits, not 11"
        );
    }

    #[test]
    fn curated_report_test() {
        let report = render(&test_numbers());
        let lines: Vec<_> = report.lines().collect();

        assert_eq!(lines[0], "=".repeat(70));
        assert_eq!(lines[1], "GNFS TEST NUMBERS - SEMIPRIMES");
        assert_eq!(lines[2], "=".repeat(70));
        assert_eq!(lines[3], "");
        assert_eq!(lines[4], "8 DIGITS:");
        assert_eq!(lines[5], "  ERROR: 6917 × 6923 = 47886391, not 47893197");
        assert_eq!(lines[6], "");
        assert_eq!(lines[7], "9 DIGITS:");

        // the consistent entries are printed as products
        assert!(lines.contains(&"  9999399973 = 100003 × 99991"));
        assert!(lines.contains(&"  999985999949 = 1000003 × 999983"));
        assert_eq!(lines.iter().filter(|l| l.starts_with("  ERROR: ")).count(), 10);

        // groups come in ascending order
        let headers: Vec<&str> = lines
            .iter()
            .copied()
            .filter(|l| l.ends_with(" DIGITS:"))
            .collect();
        assert_eq!(
            headers,
            ["8 DIGITS:", "9 DIGITS:", "10 DIGITS:", "11 DIGITS:", "12 DIGITS:"]
        );

        assert_eq!(
            &lines[lines.len() - 6..],
            [
                "=".repeat(70).as_str(),
                "",
                "USAGE:",
                "  ./target/release/gnfs <number>",
                "  Example: ./target/release/gnfs 47893197",
                "",
            ]
        );
    }

    #[test]
    fn generated_report_test() {
        // a table of generated numbers validates cleanly
        let mut table = TestTable::new();
        for digits in 8..=12 {
            let s = crate::generate_semiprime::<u64>(digits, None).unwrap();
            table.entry(digits).or_default().push(s);
        }
        let report = render(&table);
        assert!(!report.contains("ERROR"));
        assert!(report.contains("  99799811 = 10007 × 9973 (BASELINE)\n"));
        assert!(report.contains("12 DIGITS:\n  999985999949 = 1000003 × 999983\n\n"));
    }
}

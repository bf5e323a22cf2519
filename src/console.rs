use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard};

use crate::bench::RunReport;
use crate::error::Result;
use crate::Int;

static CONSOLE: Mutex<()> = Mutex::new(());

/// Serializes writers on the shared console. A poisoned lock is still handed
/// out since the guarded state is `()`.
pub fn lock() -> MutexGuard<'static, ()> {
    CONSOLE.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Writes `[ a b c ]` followed by a newline.
pub fn write_sequence<W: Write>(out: &mut W, values: &[Int]) -> io::Result<()> {
    write!(out, "[")?;
    for value in values {
        write!(out, " {value}")?;
    }
    writeln!(out, " ]")
}

/// Writes `<label>: <ms>ms elapsed` followed by a newline.
pub fn write_report<W: Write>(out: &mut W, report: &RunReport) -> io::Result<()> {
    writeln!(out, "{}: {}ms elapsed", report.label, report.elapsed.as_millis())
}

pub fn print_sequence(values: &[Int]) -> Result<()> {
    let _guard = lock();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    write_sequence(&mut out, values)?;
    out.flush()?;
    Ok(())
}

pub fn report(report: &RunReport) -> Result<()> {
    let _guard = lock();
    let mut out = io::stdout().lock();
    write_report(&mut out, report)?;
    Ok(())
}

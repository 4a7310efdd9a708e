//! Printing statements to stderr for debugging purposes

/// Print a warning line to stderr, with the source location appended.
#[macro_export]
macro_rules! warn {
    ($formatstr:expr $(,$arg:expr)*) => { {
        use std::io::Write;
        let mut outp = std::io::BufWriter::new(std::io::stderr().lock());
        let _ = write!(&mut outp, "W: ");
        let _ = write!(&mut outp, $formatstr $(,$arg)*);
        let _ = writeln!(&mut outp, " at {:?} line {}", file!(), line!());
        let _ = outp.flush();
    } }
}

/// `warn!` only if `$flag` (an `AtomicBool`) is set. For switches
/// that are flipped at runtime, e.g. from tests or a binary's main.
#[macro_export]
macro_rules! warn_if {
    ($flag:expr, $formatstr:expr $(,$arg:expr)*) => {
        if $flag.load(std::sync::atomic::Ordering::Relaxed) {
            $crate::warn!($formatstr $(,$arg)*);
        }
    }
}

/// Print a debug line to stderr if `$debug` is true. Used for the
/// `*_DEBUG` env var switches.
#[macro_export]
macro_rules! debug_msg {
    ($debug:expr, $formatstr:literal $(,$arg:expr)*) => {
        if $debug {
            use std::io::Write;
            let mut outp = std::io::stderr().lock();
            let _ = write!(&mut outp, "D: ");
            let _ = writeln!(&mut outp, $formatstr $(,$arg)*);
        }
    }
}

//! `LoadListener` — hook for lines the CSV loader could not use.
//!
//! The loader never fails on a bad person line; it skips it and tells the
//! listener.  Without a listener ([`NoopListener`]) bad lines are dropped
//! silently (they are still logged at `warn` level).

/// Receives every rejected ingestion line.
///
/// `line` is 1-based and counts the header as line 1; `raw` is the offending
/// line as read.  Closures `FnMut(u64, &str)` implement this trait.
pub trait LoadListener {
    fn on_rejected_line(&mut self, line: u64, raw: &str);
}

impl<F: FnMut(u64, &str)> LoadListener for F {
    fn on_rejected_line(&mut self, line: u64, raw: &str) {
        self(line, raw)
    }
}

/// A [`LoadListener`] that ignores everything.
pub struct NoopListener;

impl LoadListener for NoopListener {
    #[inline]
    fn on_rejected_line(&mut self, _line: u64, _raw: &str) {}
}

/// A [`LoadListener`] that records every rejected line.
#[derive(Debug, Default)]
pub struct CollectingListener {
    pub rejected: Vec<(u64, String)>,
}

impl LoadListener for CollectingListener {
    fn on_rejected_line(&mut self, line: u64, raw: &str) {
        self.rejected.push((line, raw.to_owned()));
    }
}

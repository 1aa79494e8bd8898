use std::fmt::{self, Display};

/// Caps the query text embedded in error context messages.
#[macro_export]
macro_rules! truncate_long {
    ($query:expr) => {
        $crate::Truncated::new($query, 497)
    };
}

/// Displays at most `limit` bytes of the query, cut on a char boundary,
/// with a `...` suffix when text was dropped.
pub struct Truncated<'a> {
    query: &'a str,
    limit: usize,
}

impl<'a> Truncated<'a> {
    pub fn new(query: &'a str, limit: usize) -> Self {
        Self { query, limit }
    }
}

impl Display for Truncated<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut end = self.limit.min(self.query.len());
        while !self.query.is_char_boundary(end) {
            end -= 1;
        }
        f.write_str(self.query[..end].trim_end())?;
        if end < self.query.len() {
            f.write_str("...")?;
        }
        Ok(())
    }
}

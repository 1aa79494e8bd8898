#[cfg(test)]
mod tests {
    use sluice_core::truncate_long;

    #[test]
    fn short_queries_pass_through() {
        assert_eq!(format!("{}", truncate_long!("select 1")), "select 1");
    }

    #[test]
    fn long_queries_are_capped() {
        let query = "x".repeat(600);
        let text = format!("{}", truncate_long!(&query));
        assert_eq!(text, format!("{}...", "x".repeat(497)));
    }

    #[test]
    fn multibyte_queries_are_cut_on_a_char_boundary() {
        // 8 ascii bytes then two-byte chars, so the cap lands mid character.
        let query = format!("select '{}'", "é".repeat(300));
        let text = format!("{}", truncate_long!(&query));
        assert!(text.ends_with("..."));
        assert_eq!(text, format!("select '{}...", "é".repeat(244)));
    }
}

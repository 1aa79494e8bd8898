#[cfg(test)]
mod tests {
    use sluice_core::Secret;

    #[test]
    fn secret_is_redacted() {
        let secret = Secret::new("hunter2");
        assert_eq!(format!("{:?}", secret), "Secret(\"********\")");
        assert_eq!(format!("{}", secret), "********");
        assert_eq!(secret.expose(), "hunter2");
    }

    #[test]
    fn secret_deserializes_from_plain_string() {
        let secret: Secret = serde_json::from_str("\"armored\"").unwrap();
        assert_eq!(secret.expose(), "armored");
    }
}

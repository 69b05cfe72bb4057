use std::collections::HashMap;

/// Replace every `${key}` occurrence in `template` with the mapped value.
/// Keys that never appear in the template are ignored; a template with no
/// placeholders comes back unchanged.
pub fn replace_placeholders(template: &str, placeholders: &HashMap<String, String>) -> String {
    let mut out = template.to_string();
    for (key, value) in placeholders {
        out = out.replace(&format!("${{{}}}", key), value);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replacement_is_global_per_key() {
        let mut map = HashMap::new();
        map.insert("bookieId".to_string(), "bk-1:3181".to_string());
        assert_eq!(
            replace_placeholders("${bookieId} / ${bookieId}", &map),
            "bk-1:3181 / bk-1:3181"
        );
    }

    #[test]
    fn test_template_without_placeholders_is_identity() {
        let map = HashMap::new();
        assert_eq!(replace_placeholders("Bookies", &map), "Bookies");
    }
}

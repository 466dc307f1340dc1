/// Converts a camel case or pascal case name to snake case: `apiFqdnUrl` becomes
/// `api_fqdn_url`, `RedisEnterpriseDatabase` becomes `redis_enterprise_database` and
/// `databaseUID` becomes `database_uid`. Names that already are snake case are kept.
pub fn snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut snake = String::with_capacity(name.len() + 4);
    for (i, c) in chars.iter().enumerate() {
        if c.is_ascii_uppercase() {
            let previous = i.checked_sub(1).and_then(|p| chars.get(p));
            let next = chars.get(i + 1);
            let starts_word = match previous {
                None => false,
                Some(p) if *p == '_' || *p == '-' => false,
                Some(p) if p.is_ascii_lowercase() || p.is_ascii_digit() => true,
                // The last capital of an acronym starts a new word if a lower case letter follows.
                Some(p) if p.is_ascii_uppercase() => next.map_or(false, |n| n.is_ascii_lowercase()),
                Some(_) => false,
            };
            if starts_word {
                snake.push('_');
            }
            snake.push(c.to_ascii_lowercase());
        } else if *c == '-' || *c == '.' {
            snake.push('_');
        } else {
            snake.push(*c);
        }
    }
    snake
}

#[cfg(test)]
mod test {
    use super::snake_case;

    #[test]
    fn camel_case_fields() {
        assert_eq!(snake_case("apiFqdnUrl"), "api_fqdn_url");
        assert_eq!(snake_case("recNamespace"), "rec_namespace");
        assert_eq!(snake_case("isRof"), "is_rof");
        assert_eq!(snake_case("resp3"), "resp3");
        assert_eq!(snake_case("s3"), "s3");
        assert_eq!(snake_case("type"), "type");
    }

    #[test]
    fn snake_case_fields_are_kept() {
        assert_eq!(snake_case("bdb_backup_delayed"), "bdb_backup_delayed");
        assert_eq!(snake_case("sftp_url"), "sftp_url");
    }

    #[test]
    fn acronyms_and_kinds() {
        assert_eq!(snake_case("databaseUID"), "database_uid");
        assert_eq!(snake_case("TLSMode"), "tls_mode");
        assert_eq!(
            snake_case("RedisEnterpriseActiveActiveDatabase"),
            "redis_enterprise_active_active_database"
        );
        assert_eq!(snake_case("app.redislabs.com"), "app_redislabs_com");
    }
}

use std::fmt::Display;

/// Substitute `{key}` placeholders in `template`.
///
/// Each pair replaces only the first occurrence of its placeholder; unknown
/// placeholders are left untouched.
pub fn format_template<K, V, I>(template: &str, values: I) -> String
where
    K: AsRef<str>,
    V: Display,
    I: IntoIterator<Item = (K, V)>,
{
    values
        .into_iter()
        .fold(template.to_string(), |rendered, (key, value)| {
            let placeholder = format!("{{{}}}", key.as_ref());
            rendered.replacen(&placeholder, &value.to_string(), 1)
        })
}

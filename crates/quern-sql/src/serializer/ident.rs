use super::{Formatter, ToSql};

/// An identifier fragment.
///
/// Plain identifiers render bare, matching the engine's own DDL output;
/// anything else is wrapped in backticks with embedded backticks doubled.
pub(super) struct Ident<S>(pub(super) S);

fn is_plain(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with(|c: char| c.is_ascii_digit())
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

impl<S: AsRef<str>> ToSql for Ident<S> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let name = self.0.as_ref();

        if is_plain(name) {
            f.dst.push_str(name);
        } else {
            f.dst.push_str(&super::literal::quote_string(name));
        }
    }
}

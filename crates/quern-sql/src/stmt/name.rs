/// A possibly qualified object name.
#[derive(Debug, Clone)]
pub struct Name(pub Vec<String>);

impl Name {
    /// A name qualified by its database.
    pub fn qualified(database: &str, name: &str) -> Self {
        Self(vec![database.into(), name.into()])
    }
}

impl From<&str> for Name {
    fn from(value: &str) -> Self {
        Self(vec![value.into()])
    }
}

impl From<&String> for Name {
    fn from(value: &String) -> Self {
        Self::from(&value[..])
    }
}

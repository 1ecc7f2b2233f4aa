use super::{Name, Statement};

/// A statement to create a view over a SELECT query.
#[derive(Debug, Clone)]
pub struct CreateView {
    /// Name of the view
    pub name: Name,

    /// The view's SELECT body, carried verbatim.
    pub query: String,
}

#[derive(Debug, Clone)]
pub struct DropView {
    pub name: Name,
}

impl Statement {
    pub fn create_view(name: &str, query: impl Into<String>) -> Self {
        CreateView {
            name: Name::from(name),
            query: query.into(),
        }
        .into()
    }

    pub fn drop_view(name: &str) -> Self {
        DropView {
            name: Name::from(name),
        }
        .into()
    }
}

impl From<CreateView> for Statement {
    fn from(value: CreateView) -> Self {
        Self::CreateView(value)
    }
}

impl From<DropView> for Statement {
    fn from(value: DropView) -> Self {
        Self::DropView(value)
    }
}

use super::{Name, Statement};

#[derive(Debug, Clone)]
pub struct CreateDatabase {
    pub name: Name,
}

#[derive(Debug, Clone)]
pub struct DropDatabase {
    pub name: Name,
}

impl Statement {
    pub fn create_database(name: &str) -> Self {
        CreateDatabase {
            name: Name::from(name),
        }
        .into()
    }

    pub fn drop_database(name: &str) -> Self {
        DropDatabase {
            name: Name::from(name),
        }
        .into()
    }
}

impl From<CreateDatabase> for Statement {
    fn from(value: CreateDatabase) -> Self {
        Self::CreateDatabase(value)
    }
}

impl From<DropDatabase> for Statement {
    fn from(value: DropDatabase) -> Self {
        Self::DropDatabase(value)
    }
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    #[error("navigation target page identity is empty")]
    EmptyPageIdentity,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("navigation surface '{0}' is already registered")]
    DuplicateName(String),
    #[error("navigation surface '{0}' is not registered")]
    UnknownName(String),
}

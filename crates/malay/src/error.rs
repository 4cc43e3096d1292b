#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Error {
    // an empty prefix matches everything, and `PrefixSet::detect_prefixes` would never terminate
    EmptyPrefix,

    EmptyParticle,
}

impl Error {
    pub fn render(&self) -> String {
        match self {
            Error::EmptyPrefix => String::from("A prefix cannot be an empty string."),
            Error::EmptyParticle => String::from("A particle cannot be an empty string."),
        }
    }
}

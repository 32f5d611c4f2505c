//! Column schema of `names_data.csv`.
//!
//! The file is shared with other generators, so every known column is listed
//! here even though this generator reads only three of them.

/// Header name and legacy position of a CSV column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub name: &'static str,
    pub index: usize,
}

impl Column {
    const fn new(name: &'static str, index: usize) -> Self {
        Self { name, index }
    }
}

pub const AWS_CLI_V2_COMMAND: Column = Column::new("AWSCLIV2Command", 0);
pub const AWS_CLI_V2_COMMAND_NO_DASHES: Column = Column::new("AWSCLIV2CommandNoDashes", 1);
pub const GO_V1_PACKAGE: Column = Column::new("GoV1Package", 2);
pub const GO_V2_PACKAGE: Column = Column::new("GoV2Package", 3);
pub const PROVIDER_PACKAGE_ACTUAL: Column = Column::new("ProviderPackageActual", 4);
pub const PROVIDER_PACKAGE_CORRECT: Column = Column::new("ProviderPackageCorrect", 5);
/// Package identifier; becomes the constant's value.
pub const PROVIDER_PACKAGE_BOTH: Column = Column::new("ProviderPackageBoth", 6);
/// Upper-case provider name; becomes the constant's identifier.
pub const PROVIDER_NAME_UPPER: Column = Column::new("ProviderNameUpper", 7);
pub const ALIASES: Column = Column::new("Aliases", 8);
pub const GO_V1_CLIENT_NAME: Column = Column::new("GoV1ClientName", 9);
pub const HUMAN_FRIENDLY: Column = Column::new("HumanFriendly", 10);
pub const BRAND: Column = Column::new("Brand", 11);
pub const NOTE: Column = Column::new("Note", 12);
/// Non-empty value excludes the row from generation.
pub const EXCLUDE: Column = Column::new("Exclude", 13);
pub const DEPRECATED_ENV_VAR: Column = Column::new("DeprecatedEnvVar", 14);
pub const ENV_VAR: Column = Column::new("EnvVar", 15);

/// All known columns in file order.
pub const ALL: [Column; 16] = [
    AWS_CLI_V2_COMMAND,
    AWS_CLI_V2_COMMAND_NO_DASHES,
    GO_V1_PACKAGE,
    GO_V2_PACKAGE,
    PROVIDER_PACKAGE_ACTUAL,
    PROVIDER_PACKAGE_CORRECT,
    PROVIDER_PACKAGE_BOTH,
    PROVIDER_NAME_UPPER,
    ALIASES,
    GO_V1_CLIENT_NAME,
    HUMAN_FRIENDLY,
    BRAND,
    NOTE,
    EXCLUDE,
    DEPRECATED_ENV_VAR,
    ENV_VAR,
];

/// Looks up a known column by header name.
pub fn by_name(name: &str) -> Option<Column> {
    ALL.iter().copied().find(|column| column.name == name)
}

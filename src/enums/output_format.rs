use clap::ValueEnum;

#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table, // Panels and an issues table
    Json,  // Pretty-printed camelCase JSON
}


use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "mutualdep",
    about = "mutualdep: a composite, its leaf, and a dependent that reaches the leaf through a capability",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build a composite and display its leaf
    Show {
        /// Leaf configuration value
        #[arg(
            allow_negative_numbers = true,
            required_unless_present = "config",
            conflicts_with = "config"
        )]
        value: Option<i64>,

        /// Path to a TOML config file containing `value = <integer>`
        #[arg(long)]
        config: Option<String>,

        /// Display path to exercise
        #[arg(long, value_enum, default_value = "capability")]
        via: ViaArg,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the decimal form of an integer with no trailing newline
    Emit {
        /// Integer to print
        #[arg(allow_negative_numbers = true)]
        value: i64,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ViaArg {
    /// Call the leaf's display directly
    #[value(name = "direct")]
    Direct,
    /// Go through the dependent and its leaf source
    #[value(name = "capability")]
    Capability,
    /// Direct first, then through the dependent
    #[value(name = "both")]
    Both,
}

impl ViaArg {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Direct => "direct",
            Self::Capability => "capability",
            Self::Both => "both",
        }
    }
}

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Mock payload generator and test-suite assembler for dereferenced API specs
#[derive(Parser, Debug, Clone)]
#[command(name = "mimus", version, about, long_about = None)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, env = "MIMUS_CONFIG", default_value = "mimus.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Generate a mock payload for one operation of a dereferenced API spec
    Mock {
        /// Path to the dereferenced OpenAPI document (JSON or YAML)
        #[arg(short, long, env = "MIMUS_SPEC")]
        spec: PathBuf,

        /// Route path as declared in the spec (e.g. "/quotes/{ID}")
        #[arg(short, long)]
        route: String,

        /// HTTP method, lowercase as keyed in the spec
        #[arg(short, long, default_value = "post")]
        method: String,

        /// Which part of the exchange to synthesize
        #[arg(short, long, value_enum, default_value = "request-body")]
        target: MockTarget,
    },
    /// Assemble an ordered test-case suite from a collection directory
    Suite {
        /// Root directory of the test-case collection
        #[arg(short, long, env = "MIMUS_COLLECTION")]
        dir: PathBuf,

        /// Restrict assembly to these leaf keys (exact match, repeatable)
        #[arg(long)]
        select: Vec<String>,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockTarget {
    RequestBody,
    ResponseBody,
    Headers,
    QueryParams,
    PathParams,
}

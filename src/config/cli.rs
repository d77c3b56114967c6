use crate::katas::exact_change::Cents;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "kata-archive")]
#[command(about = "Run the algorithm katas and print their results as JSON")]
pub struct KataCli {
    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Pretty-print the JSON result")]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: KataCommand,
}

#[derive(Debug, Clone, Subcommand)]
pub enum KataCommand {
    /// List every kata
    List,

    /// Decode space-separated binary bytes into text
    BinaryDecode { binary: String },

    /// Encode text as space-separated binary bytes
    BinaryEncode { text: String },

    /// Make change from a cash drawer, e.g. --drawer "QUARTER=4.25,ONE=90"
    ExactChange {
        #[arg(long)]
        price: Cents,
        #[arg(long)]
        cash: Cents,
        #[arg(long)]
        drawer: String,
    },

    /// Format a YYYY-MM-DD date range
    FriendlyDates {
        start: String,
        end: String,
        /// Defaults to the current year of the local clock
        #[arg(long)]
        current_year: Option<i32>,
    },

    /// Merge inventories given as JSON arrays of {"quantity", "name"}
    Inventory {
        #[arg(long)]
        current: String,
        #[arg(long)]
        delivery: String,
    },

    /// Mean, median, modes and spread of the given numbers
    Statistics {
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<f64>,
    },

    /// Count permutations of the letters with no adjacent repeats
    NoRepeats { text: String },

    /// Sum the indices of pairs adding up to --target
    Pairwise {
        #[arg(long, allow_negative_numbers = true)]
        target: i64,
        #[arg(allow_negative_numbers = true)]
        values: Vec<i64>,
    },

    /// Translate words into pig latin
    PigLatin {
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Flatten a nested JSON array
    Steamroller { json: String },

    /// Symmetric difference of comma-separated sets, e.g. "1,2,3" "5,2,1,4"
    SymDiff {
        #[arg(required = true)]
        sets: Vec<String>,
    },

    /// Validate a US telephone number
    Phone { number: String },

    /// Check that every object in a JSON array has a truthy property
    TruthCheck {
        #[arg(long)]
        collection: String,
        #[arg(long)]
        predicate: String,
    },
}

#[derive(Debug, Clone, Parser)]
#[command(name = "nodeschool")]
#[command(about = "learnyounode lessons: tiny TCP/HTTP servers and clients")]
pub struct NodeschoolCli {
    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    /// Path to a TOML lesson configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: LessonCommand,
}

#[derive(Debug, Clone, Subcommand)]
pub enum LessonCommand {
    /// TCP server writing the current time to each connection
    TimeServer {
        #[arg(long)]
        bind: Option<String>,
    },

    /// HTTP server returning the same file for every request
    FileServer {
        #[arg(long)]
        bind: Option<String>,
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// HTTP server upper-casing POST bodies
    UppercaseServer {
        #[arg(long)]
        bind: Option<String>,
    },

    /// HTTP server answering /api/parsetime and /api/unixtime
    JsonApiServer {
        #[arg(long)]
        bind: Option<String>,
    },

    /// GET a URL and print the body line by line
    Get { url: String },

    /// GET a URL and print the character count followed by the body
    Collect { url: String },

    /// GET several URLs concurrently and print the bodies in argument order
    Juggle {
        #[arg(required = true)]
        urls: Vec<String>,
    },

    /// Count the newlines in a file
    CountLines { path: PathBuf },

    /// List the files in a directory with the given extension
    Ls { dir: PathBuf, extension: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_exact_change() {
        let cli = KataCli::parse_from([
            "kata-archive",
            "exact-change",
            "--price",
            "19.50",
            "--cash",
            "20",
            "--drawer",
            "QUARTER=1",
        ]);
        match cli.command {
            KataCommand::ExactChange { price, cash, .. } => {
                assert_eq!(price, Cents(1950));
                assert_eq!(cash, Cents(2000));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_rejects_float_cents() {
        assert!(KataCli::try_parse_from([
            "kata-archive",
            "exact-change",
            "--price",
            "19.505",
            "--cash",
            "20",
            "--drawer",
            "",
        ])
        .is_err());
    }

    #[test]
    fn test_negative_numbers() {
        let cli = KataCli::parse_from(["kata-archive", "pairwise", "--target", "0", "-3", "3"]);
        match cli.command {
            KataCommand::Pairwise { target, values } => {
                assert_eq!(target, 0);
                assert_eq!(values, vec![-3, 3]);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_nodeschool_global_config() {
        let cli = NodeschoolCli::parse_from([
            "nodeschool",
            "file-server",
            "--file",
            "lesson.txt",
            "--config",
            "lessons.toml",
        ]);
        assert_eq!(cli.config, Some(PathBuf::from("lessons.toml")));
        assert!(matches!(cli.command, LessonCommand::FileServer { .. }));
    }
}

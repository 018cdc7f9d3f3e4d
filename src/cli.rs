use clap::{Args, Parser, Subcommand, ValueEnum};

pub const DEFAULT_DIRECTORY: &str = "./";

#[derive(Parser, Debug)]
#[command(
    name = "fileheaders",
    version,
    about = "A small utility to add headers and footers to files."
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        short,
        long,
        global = true,
        help = "Log every per-file decision to stderr"
    )]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add the header/footer to every matching file.
    Apply(ApplyArgs),
    /// Display help for creating files to set the header/footer.
    HeaderFileHelp,
    /// Print a random bit pattern as an unsigned literal and a byte array.
    Bits {
        #[arg(long, value_enum, default_value_t = BitWidth::W64)]
        width: BitWidth,
        #[arg(long, help = "Seed for a reproducible pattern")]
        seed: Option<u64>,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct ApplyArgs {
    #[arg(short, long, help = "Scan for files recursively")]
    pub recursive: bool,
    #[arg(
        short,
        long,
        help = "Allow headers/footers that only contain whitespace"
    )]
    pub whitespace: bool,
    #[arg(long, help = "Do not substitute tags found in the header/footer")]
    pub disable_tags: bool,
    #[arg(
        short = 'o',
        long,
        help = "Scan for headers/footers already in the file"
    )]
    pub detect_header: bool,
    #[arg(short, long, default_value = "", help = "Header put at the top of the files")]
    pub top: String,
    #[arg(
        short,
        long,
        default_value = "",
        help = "Footer put at the bottom of the files"
    )]
    pub bottom: String,
    #[arg(
        short,
        long,
        default_value = DEFAULT_DIRECTORY,
        help = "Directory of files to have headers/footers added"
    )]
    pub directory: String,
    #[arg(
        short = 'f',
        long,
        help = "File specifying the header/footer, see `header-file-help`"
    )]
    pub header_file: Option<String>,
    #[arg(
        short,
        long,
        default_value = "",
        help = "Only edit files whose name ends with this suffix"
    )]
    pub extension: String,
    #[arg(short, long, help = "Answer yes to every confirmation prompt")]
    pub yes: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum BitWidth {
    #[value(name = "16")]
    W16,
    #[value(name = "32")]
    W32,
    #[value(name = "64")]
    W64,
}

impl BitWidth {
    pub fn bits(self) -> usize {
        match self {
            BitWidth::W16 => 16,
            BitWidth::W32 => 32,
            BitWidth::W64 => 64,
        }
    }
}

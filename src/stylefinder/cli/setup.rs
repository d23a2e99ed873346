use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "stylefinder", bin_name = "stylefinder", version)]
#[command(
    about = "Browse design styles and generate configuration documents",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List styles
    #[command(alias = "ls", display_order = 1)]
    List {
        /// Tone to show: all, favorites or a tone id (minimal, tech, ...)
        #[arg(short, long)]
        tone: Option<String>,

        /// Search term
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Show tones with their style counts
    #[command(display_order = 2)]
    Tones,

    /// Show the detail of a style
    #[command(alias = "v", display_order = 3)]
    Show {
        id: String,

        /// Target medium: presentation, website, app, lp or social
        #[arg(short, long)]
        purpose: Option<String>,
    },

    /// Print the configuration document of a style
    #[command(alias = "gen", display_order = 4)]
    Generate {
        id: String,

        /// Target medium: presentation, website, app, lp or social
        #[arg(short, long)]
        purpose: Option<String>,

        /// Also copy the document to the clipboard
        #[arg(short, long)]
        copy: bool,
    },

    /// Toggle favorites
    #[command(display_order = 10)]
    Fav {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// List favorites
    #[command(display_order = 11)]
    Favs,

    /// Compare styles side by side (2 to 4)
    #[command(display_order = 12)]
    Compare {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Interactive session reading commands from stdin
    #[command(display_order = 20)]
    Session,

    /// Get or set configuration values
    #[command(display_order = 30)]
    Config {
        /// Configuration key (default-purpose, favorites-key)
        key: Option<String>,

        /// Value to set
        value: Option<String>,
    },
}

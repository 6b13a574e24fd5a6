#[derive(clap::Parser, Debug)]
#[command(
    name = "graphsh",
    version,
    about = "Explore a GraphQL service interactively, one field at a time.",
)]
pub(crate) struct Cli {
    #[arg(
        help="URL of the GraphQL endpoint to explore.",
        name="ENDPOINT",
        required=true,
    )]
    pub endpoint: String,

    #[arg(
        help="Set a custom request header (e.g. \"Authorization: bearer abc\"). \
             May be repeated.",
        long="header",
        short='H',
        value_name="HEADER",
    )]
    pub headers: Vec<String>,

    #[arg(
        help="Enable verbose output.",
        long,
        short='v',
    )]
    pub verbose: bool,
}

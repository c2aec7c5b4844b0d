use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path of the configuration file.
    #[arg(long, default_value = "config.toml")]
    pub config: String,
    /// Create the configuration file if it does not exist or is broken.
    #[arg(long)]
    pub create_config: bool,

    /// TLS certificate (PEM); enables HTTPS and overrides the configured pair.
    #[arg(long)]
    pub certfile: Option<String>,
    /// TLS private key (PEM) belonging to --certfile.
    #[arg(long)]
    pub keyfile: Option<String>,

    /// Create a self-signed key and certificate, then exit.
    #[arg(long)]
    pub create_selfsigned: bool,
    #[arg(long, default_value = "localhost")]
    pub selfsigned_domain: String,
    #[arg(long, default_value = "key.pem")]
    pub selfsigned_keyfile: String,
    #[arg(long, default_value = "cert.pem")]
    pub selfsigned_certfile: String,
}

//! psa-testgen CLI arguments.
//!
use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};
use psa_testgen_guards::Domain36;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct PsaTestgenArgs {
    #[arg(long, global = true)]
    #[arg(value_name = "PATH")]
    #[arg(help = "Path of a JSON file defining the generator configuration.")]
    pub config: Option<Utf8PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write test cases described in JSON as a .data file.
    Write(WriteArgs),
    /// Print the feature guard macro of PSA identifiers.
    Guard(GuardArgs),
}

#[derive(Args, Debug)]
pub struct WriteArgs {
    #[arg(long)]
    #[arg(value_name = "PATH")]
    #[arg(
        help = "JSON file holding an array of test cases, or a directory of such files (*.json)."
    )]
    pub input: Utf8PathBuf,

    #[arg(long)]
    #[arg(value_name = "FILE")]
    #[arg(conflicts_with = "stdout")]
    #[arg(required_unless_present = "stdout")]
    #[arg(help = "The .data file to write. Overwritten if it exists.")]
    pub output: Option<Utf8PathBuf>,

    #[arg(long)]
    #[arg(help = "Write the .data content to the standard output.")]
    pub stdout: bool,

    #[arg(long)]
    #[arg(value_name = "NAME")]
    #[arg(help = "Generator name recorded in the file header.")]
    pub caller: Option<String>,
}

#[derive(Args, Debug)]
pub struct GuardArgs {
    #[arg(long)]
    #[arg(value_name = "DOMAIN")]
    #[arg(
        help = "Mbed TLS 3.6 domain of the test. Supported values are 'psa', 'tls1_3_only', 'use_psa' or 'legacy'."
    )]
    pub domain: Domain36,

    #[arg(long = "mbedtls-3-6")]
    #[arg(conflicts_with = "root")]
    #[arg(help = "Resolve for an Mbed TLS 3.6 tree.")]
    pub mbedtls_3_6: bool,

    #[arg(long)]
    #[arg(value_name = "DIR")]
    #[arg(help = "Root of the source tree, inspected to detect an Mbed TLS 3.6 tree.")]
    pub root: Option<Utf8PathBuf>,

    #[arg(required = true)]
    #[arg(value_name = "PSA_NAME")]
    #[arg(help = "PSA_ALG_xxx or PSA_KEY_TYPE_xxx identifiers.")]
    pub names: Vec<String>,
}

use std::io::{self, BufWriter, Write};

use camino::Utf8Path;
use clap::Parser;
use psa_testgen_data::{default_caller, write_data, write_data_file, TestCase};
use psa_testgen_guards::{BuildTree, Domain36, FeatureGuards};
use tracing_subscriber::{fmt, EnvFilter};

mod args;
mod cases;
mod config;
mod error;

use args::{Command, GuardArgs, PsaTestgenArgs, WriteArgs};
use cases::TestCaseLoader;
use config::GeneratorConfig;
use error::{CliResult, Error};

fn main() -> CliResult<()> {
    init_logging()?;

    let args = PsaTestgenArgs::parse();
    tracing::trace!("args: {:?}", args);

    let config = if let Some(path) = &args.config {
        GeneratorConfig::from_json(path)?
    } else {
        GeneratorConfig::default()
    };

    match args.command {
        Command::Write(write_args) => write(write_args, &config),
        Command::Guard(guard_args) => guard(guard_args, &config),
    }
}

fn write(args: WriteArgs, config: &GeneratorConfig) -> CliResult<()> {
    let test_cases = TestCaseLoader::from_input_path(&args.input)?;
    let caller = caller(&args, config);
    let output = if args.stdout {
        None
    } else {
        args.output.as_deref()
    };

    let mut stdout = BufWriter::new(io::stdout().lock());
    write_test_cases(&test_cases, output, &caller, &mut stdout)?;
    stdout.flush()?;

    Ok(())
}

/// Writes to `output` when given, to `stdout` otherwise.
fn write_test_cases<W: Write>(
    test_cases: &[TestCase],
    output: Option<&Utf8Path>,
    caller: &str,
    stdout: &mut W,
) -> CliResult<()> {
    if let Some(output) = output {
        tracing::info!("Writing {} test cases to {}", test_cases.len(), output);
        write_data_file(output, test_cases, Some(caller))?;
    } else {
        write_data(stdout, test_cases, caller)?;
    }

    Ok(())
}

/// Generator name of the file header: flag, then configuration, then program name.
fn caller(args: &WriteArgs, config: &GeneratorConfig) -> String {
    args.caller
        .clone()
        .or_else(|| config.caller.clone())
        .unwrap_or_else(default_caller)
}

fn guard(args: GuardArgs, config: &GeneratorConfig) -> CliResult<()> {
    let guards = feature_guards(&args, config)?;
    let resolved = resolve_all(&guards, &args.names, args.domain)?;

    let mut out = io::stdout().lock();
    for (name, guard) in resolved {
        writeln!(out, "{name} {guard}")?;
    }

    Ok(())
}

/// `--mbedtls-3-6` wins, then the tree root from flags or configuration.
/// Without any of them, the tree is not taken as Mbed TLS 3.6.
fn feature_guards(args: &GuardArgs, config: &GeneratorConfig) -> CliResult<FeatureGuards> {
    if args.mbedtls_3_6 {
        return Ok(FeatureGuards::new(true));
    }

    match args.root.as_ref().or(config.root.as_ref()) {
        Some(root) => Ok(FeatureGuards::from(&BuildTree::detect(root)?)),
        None => Ok(FeatureGuards::default()),
    }
}

/// Resolves every name, failing on the first unknown one.
fn resolve_all<'a>(
    guards: &FeatureGuards,
    names: &'a [String],
    domain: Domain36,
) -> CliResult<Vec<(&'a str, String)>> {
    names
        .iter()
        .map(|name| -> CliResult<(&'a str, String)> {
            Ok((name.as_str(), guards.resolve(name, domain)?))
        })
        .collect()
}

pub fn init_logging() -> CliResult<()> {
    const DEFAULT_LOG_FILTER: &str = "info,psa_testgen=trace";

    let builder = fmt::Subscriber::builder()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .or(EnvFilter::try_new(DEFAULT_LOG_FILTER))
                .map_err(|e| Error::Other(format!("Tracing error: {:?}", e)))?,
        );

    tracing::subscriber::set_global_default(builder.finish())
        .map_err(|e| Error::Other(format!("Tracing error: {:?}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use std::fs;

    fn temp_dir() -> (tempfile::TempDir, Utf8PathBuf) {
        let tmp = tempfile::tempdir().unwrap();
        let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).unwrap();
        (tmp, root)
    }

    fn mbedtls_tree(root: &Utf8Path, version_number: &str) {
        for d in ["include/mbedtls", "library", "programs", "tests"] {
            fs::create_dir_all(root.join(d)).unwrap();
        }
        fs::write(
            root.join("include/mbedtls/build_info.h"),
            format!("#define MBEDTLS_VERSION_NUMBER {version_number}\n"),
        )
        .unwrap();
    }

    fn write_args(caller: Option<&str>) -> WriteArgs {
        WriteArgs {
            input: "cases.json".into(),
            output: None,
            stdout: true,
            caller: caller.map(str::to_string),
        }
    }

    fn guard_args(mbedtls_3_6: bool, root: Option<&Utf8Path>) -> GuardArgs {
        GuardArgs {
            domain: Domain36::UsePsa,
            mbedtls_3_6,
            root: root.map(Utf8Path::to_path_buf),
            names: vec![],
        }
    }

    fn case(description: &str) -> TestCase {
        let mut tc = TestCase::with_description(description);
        tc.set_function("f");
        tc
    }

    #[test]
    fn test_caller_precedence() {
        let config = GeneratorConfig {
            caller: Some("from_config.py".to_string()),
            root: None,
        };

        assert_eq!(caller(&write_args(Some("flag.py")), &config), "flag.py");
        assert_eq!(caller(&write_args(None), &config), "from_config.py");
        assert_eq!(
            caller(&write_args(None), &GeneratorConfig::default()),
            default_caller()
        );
    }

    #[test]
    fn test_stdout_and_file_same_content() {
        let (_tmp, root) = temp_dir();
        let output = root.join("out.data");
        let test_cases = [case("First"), case("Second")];
        let caller = caller(&write_args(None), &GeneratorConfig::default());

        let mut stdout: Vec<u8> = Vec::new();
        write_test_cases(&test_cases, Some(&*output), &caller, &mut stdout).unwrap();
        assert!(stdout.is_empty());

        write_test_cases(&test_cases, None, &caller, &mut stdout).unwrap();

        let written = fs::read_to_string(&output).unwrap();
        assert_eq!(String::from_utf8(stdout).unwrap(), written);
        assert!(written.starts_with(&format!(
            "# Automatically generated by {}. Do not edit!\n",
            default_caller()
        )));
    }

    #[test]
    fn test_guards_without_tree_not_3_6() {
        let guards =
            feature_guards(&guard_args(false, None), &GeneratorConfig::default()).unwrap();

        assert!(!guards.is_mbedtls_3_6());
    }

    #[test]
    fn test_guards_flag() {
        let guards =
            feature_guards(&guard_args(true, None), &GeneratorConfig::default()).unwrap();

        assert!(guards.is_mbedtls_3_6());
    }

    #[test]
    fn test_guards_root_detected() {
        let (_tmp, root) = temp_dir();
        mbedtls_tree(&root, "0x03060100");

        let args = guard_args(false, Some(root.as_path()));
        let guards = feature_guards(&args, &GeneratorConfig::default()).unwrap();
        assert!(guards.is_mbedtls_3_6());

        let (_tmp, root) = temp_dir();
        mbedtls_tree(&root, "0x04000000");

        let args = guard_args(false, Some(root.as_path()));
        let guards = feature_guards(&args, &GeneratorConfig::default()).unwrap();
        assert!(!guards.is_mbedtls_3_6());
    }

    #[test]
    fn test_guards_root_flag_overrides_config() {
        let (_tmp_3_6, root_3_6) = temp_dir();
        mbedtls_tree(&root_3_6, "0x03060000");
        let (_tmp_4, root_4) = temp_dir();
        mbedtls_tree(&root_4, "0x04000000");

        let config = GeneratorConfig {
            caller: None,
            root: Some(root_4.clone()),
        };
        assert!(!feature_guards(&guard_args(false, None), &config)
            .unwrap()
            .is_mbedtls_3_6());
        assert!(feature_guards(&guard_args(false, Some(root_3_6.as_path())), &config)
            .unwrap()
            .is_mbedtls_3_6());
    }

    #[test]
    fn test_guards_root_without_build_info_invalid() {
        let (_tmp, root) = temp_dir();
        for d in ["include", "library", "programs", "tests"] {
            fs::create_dir_all(root.join(d)).unwrap();
        }

        let args = guard_args(false, Some(root.as_path()));
        assert!(matches!(
            feature_guards(&args, &GeneratorConfig::default()),
            Err(Error::Guard(_))
        ));
    }

    #[test]
    fn test_resolve_all() {
        let names = vec![
            "PSA_ALG_SHA_256".to_string(),
            "PSA_KEY_TYPE_ECC_PUBLIC_KEY".to_string(),
        ];

        let resolved = resolve_all(&FeatureGuards::new(true), &names, Domain36::UsePsa).unwrap();
        assert_eq!(
            resolved,
            [
                ("PSA_ALG_SHA_256", "MBEDTLS_MD_CAN_SHA256".to_string()),
                (
                    "PSA_KEY_TYPE_ECC_PUBLIC_KEY",
                    "MBEDTLS_PK_HAVE_ECC_KEYS".to_string()
                ),
            ]
        );
    }

    #[test]
    fn test_resolve_all_unknown_invalid() {
        let names = vec![
            "PSA_ALG_SHA_256".to_string(),
            "PSA_KEY_TYPE_ECC_PUBLIC_KEY".to_string(),
        ];

        assert!(matches!(
            resolve_all(&FeatureGuards::new(true), &names, Domain36::Legacy),
            Err(Error::Guard(_))
        ));
        assert!(matches!(
            resolve_all(
                &FeatureGuards::default(),
                &["PSA_ALG_CMAC".to_string()],
                Domain36::Psa
            ),
            Err(Error::Guard(_))
        ));
    }
}

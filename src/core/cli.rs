use std::path::PathBuf;

/// Process arguments of the `lockerlog` binary. Flags come first; every
/// remaining word forms the command line to parse. The command line may only
/// be left out with `--show-config`.
#[derive(Debug, Clone)]
pub struct CliArgs {
    pub config_path: Option<PathBuf>,
    pub logs_dir: PathBuf,
    pub file_logging: bool,
    pub json: bool,
    pub show_config: bool,
    pub input: String,
}

impl CliArgs {
    pub fn from_env() -> Result<Self, String> {
        Self::from_args(std::env::args().skip(1))
    }

    pub fn from_args<I>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = String>,
    {
        let mut cli = Self::defaults();
        let mut words = Vec::new();
        while let Some(arg) = args.next() {
            if !words.is_empty() {
                words.push(arg);
                continue;
            }
            match arg.as_str() {
                "--config" => {
                    cli.config_path = Some(Self::next_path(&mut args, "--config")?);
                }
                "--logs" => {
                    cli.logs_dir = Self::next_path(&mut args, "--logs")?;
                }
                "--no-file-log" => cli.file_logging = false,
                "--json" => cli.json = true,
                "--show-config" => cli.show_config = true,
                "--" => words.extend(args.by_ref()),
                flag if flag.starts_with("--") => return Err(format!("Unknown argument: {flag}")),
                _ => words.push(arg),
            }
        }
        if words.is_empty() && !cli.show_config {
            return Err("Missing command line to parse.".to_string());
        }
        cli.input = words.join(" ");
        Ok(cli)
    }

    fn next_path<I>(args: &mut I, flag: &str) -> Result<PathBuf, String>
    where
        I: Iterator<Item = String>,
    {
        args.next()
            .map(PathBuf::from)
            .ok_or_else(|| format!("Missing value for {flag}"))
    }

    fn defaults() -> Self {
        Self {
            config_path: None,
            logs_dir: PathBuf::from("logs"),
            file_logging: true,
            json: false,
            show_config: false,
            input: String::new(),
        }
    }
}

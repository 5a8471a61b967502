use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use bootstrap_client::{Config, GenerateRequest, Resources, Url};

#[derive(Parser, Debug)]
#[clap(version, about = "Fetch a webhook, store the bundled query, and submit it")]
struct Args {
    #[clap(long, env = "BOOTSTRAP_CANDIDATE_NAME")]
    name: String,

    #[clap(long, env = "BOOTSTRAP_CANDIDATE_REG_NO")]
    reg_no: String,

    #[clap(long, env = "BOOTSTRAP_CANDIDATE_EMAIL")]
    email: String,

    #[clap(long, env = "BOOTSTRAP_GENERATE_URL")]
    generate_url: Url,

    #[clap(long, env = "BOOTSTRAP_FALLBACK_SUBMIT_URL")]
    fallback_submit_url: Url,

    #[clap(
        long,
        env = "BOOTSTRAP_OUT_FILE",
        default_value = "target/finalQuery.sql",
        parse(from_os_str)
    )]
    out_file: PathBuf,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Config {
            identity: GenerateRequest {
                name: args.name,
                reg_no: args.reg_no,
                email: args.email,
            },
            generate_url: args.generate_url,
            fallback_submit_url: args.fallback_submit_url,
            out_file: args.out_file,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from(Args::parse());
    log::debug!("Running with {:?}", config);

    bootstrap_client::run(&config, &Resources::bundled()).context("bootstrap run failed")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn args_are_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn flags_build_config() {
        let args = Args::try_parse_from([
            "bootstrap",
            "--name",
            "Ada",
            "--reg-no",
            "REG12347",
            "--email",
            "ada@example.com",
            "--generate-url",
            "https://example.com/generate",
            "--fallback-submit-url",
            "https://example.com/submit",
            "--out-file",
            "out/q.sql",
        ])
        .unwrap();

        let config = Config::from(args);
        assert_eq!(config.identity.reg_no, "REG12347");
        assert_eq!(config.generate_url.as_str(), "https://example.com/generate");
        assert_eq!(config.fallback_submit_url.as_str(), "https://example.com/submit");
        assert_eq!(config.out_file, PathBuf::from("out/q.sql"));
    }

    #[test]
    fn bad_url_is_rejected() {
        let res = Args::try_parse_from([
            "bootstrap",
            "--name",
            "Ada",
            "--reg-no",
            "REG12347",
            "--email",
            "ada@example.com",
            "--generate-url",
            "not a url",
            "--fallback-submit-url",
            "https://example.com/submit",
        ]);
        assert!(res.is_err());
    }
}

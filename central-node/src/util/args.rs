use std::net::IpAddr;

use clap::Parser;
use rocket::{
    figment::{
        providers::{Env, Format, Serialized, Toml},
        Figment, Profile,
    },
    Config,
};

use crate::{
    constants::{DEFAULT_ADDRESS, DEFAULT_NOISE_CM, DEFAULT_PORT},
    state::source::RandomReadingSource,
};

#[derive(Parser, Debug, Clone)]
#[command(version, about = "Serves simulated water tank readings over HTTP")]
pub struct Args {
    /// The address to listen on [default: 0.0.0.0]
    #[arg(long)]
    pub address: Option<IpAddr>,

    /// The port to listen on [default: 5000]
    #[arg(long)]
    pub port: Option<u16>,

    /// Seed for the simulated sensor, to get the same readings on every run
    #[arg(long)]
    pub seed: Option<u64>,

    /// Maximum sensor jitter in centimeters, in either direction
    #[arg(long, default_value_t = DEFAULT_NOISE_CM, value_parser = parse_noise)]
    pub noise: f64,

    /// Value of the Access-Control-Allow-Origin header
    #[arg(long, default_value = "*")]
    pub cors_origin: String,
}

fn parse_noise(s: &str) -> Result<f64, String> {
    let noise: f64 = s.parse().map_err(|e: std::num::ParseFloatError| e.to_string())?;
    if noise.is_finite() && noise >= 0.0 {
        Ok(noise)
    } else {
        Err(format!("noise must be a non-negative number of centimeters, got {s}"))
    }
}

impl Args {
    /// Rocket configuration: our defaults, then `Rocket.toml` and `ROCKET_*`
    /// variables as usual, then whatever was passed on the command line.
    pub fn figment(&self) -> Figment {
        let mut figment = Figment::from(Config::default())
            .merge(Serialized::default("address", DEFAULT_ADDRESS))
            .merge(Serialized::default("port", DEFAULT_PORT))
            .merge(Toml::file(Env::var_or("ROCKET_CONFIG", "Rocket.toml")).nested())
            .merge(Env::prefixed("ROCKET_").ignore(&["PROFILE"]).global())
            .select(Profile::from_env_or("ROCKET_PROFILE", Config::DEFAULT_PROFILE));

        if let Some(address) = self.address {
            figment = figment.merge(Serialized::global("address", address));
        }
        if let Some(port) = self.port {
            figment = figment.merge(Serialized::global("port", port));
        }
        figment
    }

    pub fn reading_source(&self) -> RandomReadingSource {
        match self.seed {
            Some(seed) => RandomReadingSource::from_seed(seed, self.noise),
            None => RandomReadingSource::new(self.noise),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::net::Ipv4Addr;

    use super::*;
    use crate::state::source::ReadingSource;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["central-node"]).unwrap();
        assert_eq!(args.address, None);
        assert_eq!(args.port, None);
        assert_eq!(args.seed, None);
        assert_eq!(args.noise, 0.5);
        assert_eq!(args.cors_origin, "*");
    }

    #[test]
    fn command_line_overrides_config() {
        let args = Args::try_parse_from([
            "central-node", "--address", "127.0.0.1", "--port", "8123", "--cors-origin", "http://localhost:3000",
        ])
        .unwrap();
        let config: Config = args.figment().extract().unwrap();
        assert_eq!(config.address, IpAddr::V4(Ipv4Addr::LOCALHOST));
        assert_eq!(config.port, 8123);
        assert_eq!(args.cors_origin, "http://localhost:3000");
    }

    #[test]
    fn rejects_bad_noise() {
        for noise in ["-0.1", "NaN", "inf", "half"] {
            assert!(Args::try_parse_from(["central-node", "--noise", noise]).is_err(), "accepted {noise}");
        }
        let args = Args::try_parse_from(["central-node", "--noise", "0"]).unwrap();
        assert_eq!(args.noise, 0.0);
    }

    #[test]
    fn seeded_source_is_reproducible() {
        let args = Args::try_parse_from(["central-node", "--seed", "17"]).unwrap();
        let (mut a, mut b) = (args.reading_source(), args.reading_source());
        for _ in 0..10 {
            assert_eq!(a.next_sample(), b.next_sample());
        }
    }
}

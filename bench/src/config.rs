use anyhow::{bail, Context, Result};

/// Which driver action to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Help,
    Demo,
    Status,
    Chain,
    Star,
    Cycle,
    Random,
    Barbell,
    All,
}

impl Mode {
    fn parse(s: &str) -> Result<Self> {
        Ok(match s.to_lowercase().as_str() {
            "help" | "--help" | "-h" => Mode::Help,
            "demo" => Mode::Demo,
            "status" => Mode::Status,
            "chain" => Mode::Chain,
            "star" => Mode::Star,
            "cycle" => Mode::Cycle,
            "random" => Mode::Random,
            "barbell" => Mode::Barbell,
            "all" => Mode::All,
            other => bail!("unknown mode '{}'; use --help for options", other),
        })
    }
}

/// An integer setting with a default and inclusive bounds.
struct IntSetting {
    name: &'static str,
    env: &'static str,
    default: u64,
    min: u64,
    max: u64,
}

impl IntSetting {
    fn check(&self, value: u64) -> Result<u64> {
        if value < self.min || value > self.max {
            bail!(
                "{} must be between {} and {}, got {}",
                self.name,
                self.min,
                self.max,
                value
            );
        }
        Ok(value)
    }

    /// Default, overridden by the environment variable if set.
    fn resolve(&self, lookup: &impl Fn(&str) -> Option<String>) -> Result<u64> {
        match lookup(self.env).filter(|s| !s.is_empty()) {
            Some(raw) => {
                let value = raw
                    .trim()
                    .parse::<u64>()
                    .with_context(|| format!("{}={} is not an integer", self.env, raw))?;
                self.check(value)
            }
            None => Ok(self.default),
        }
    }
}

const NODE_COUNT: IntSetting = IntSetting {
    name: "node_count",
    env: "HOPNET_NODE_COUNT",
    default: 1_000_000,
    min: 16,
    max: u32::MAX as u64,
};

const MAX_DEPTH: IntSetting = IntSetting {
    name: "max_depth",
    env: "HOPNET_MAX_DEPTH",
    default: 50,
    min: 1,
    max: 10_000,
};

const SEED: IntSetting = IntSetting {
    name: "seed",
    env: "HOPNET_SEED",
    default: 42,
    min: 0,
    max: u64::MAX,
};

/// Resolved driver settings: defaults, then environment, then CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    pub mode: Mode,
    pub node_count: u32,
    pub max_depth: u32,
    pub seed: u64,
}

impl BenchConfig {
    pub fn from_env_and_args(args: &[String]) -> Result<Self> {
        Self::resolve(args, |key| std::env::var(key).ok())
    }

    /// `args` excludes the program name: `[mode] [node_count]`.
    fn resolve(args: &[String], lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mode = match args.first() {
            Some(m) => Mode::parse(m)?,
            None => Mode::Demo,
        };

        let mut node_count = NODE_COUNT.resolve(&lookup)?;
        if let Some(raw) = args.get(1) {
            let value = raw
                .parse::<u64>()
                .with_context(|| format!("node_count '{}' is not an integer", raw))?;
            node_count = NODE_COUNT.check(value)?;
        }

        Ok(Self {
            mode,
            node_count: node_count as u32,
            max_depth: MAX_DEPTH.resolve(&lookup)? as u32,
            seed: SEED.resolve(&lookup)?,
        })
    }
}

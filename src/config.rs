use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "callrelay-server", version, about = "Calling-platform webhook relay server")]
pub struct ServerConfig {
    #[arg(long, default_value = "9441", env = "CALLRELAY_PORT")]
    pub port: u16,
    #[arg(long, default_value = "0.0.0.0", env = "CALLRELAY_BIND")]
    pub bind: String,
    /// Base URL of the notification processor the relay forwards to.
    #[arg(long, env = "CALLRELAY_PROCESSOR_URL")]
    pub processor_url: String,
}

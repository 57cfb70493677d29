use std::env;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct AppConfig {
    // Directory the browser UI is served from
    pub web_dir: String,
    // Base URL of a running server, used by the terminal console
    pub api_base_url: String,
    // How long the voice placeholder pretends to listen
    pub listen_delay: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        let host = "127.0.0.1";
        let port = "2222";
        let web_dir =
            env::var("RESTAURANT_AGENT_WEB_DIR").unwrap_or_else(|_| "./web-ui".to_string());
        let api_base_url = env::var("RESTAURANT_AGENT_API_URL")
            .unwrap_or_else(|_| format!("http://{}:{}", host, port));
        let listen_ms = env::var("RESTAURANT_AGENT_LISTEN_MS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(2000);

        Self {
            web_dir,
            api_base_url,
            listen_delay: Duration::from_millis(listen_ms),
        }
    }
}

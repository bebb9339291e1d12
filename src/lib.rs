pub mod config;
pub mod error;
pub mod generation;
pub mod http;
pub mod prompts;
pub mod roadmap;

// Load env from the default .env if present; silently ignore if missing.
pub fn load_env() {
    let _ = dotenvy::dotenv();
}

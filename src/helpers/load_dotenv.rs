use std::path::PathBuf;

/// Load a local `.env` if present, returning its path
pub fn load_dotenv() -> Option<PathBuf> {
    dotenv::dotenv().ok()
}

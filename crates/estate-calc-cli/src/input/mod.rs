pub mod file;
pub mod stdin;

use serde::de::DeserializeOwned;

/// Request supplied as a file (`--input`) or piped JSON, in that order.
/// `None` means the caller should fall back to its flags.
pub fn load_request<T: DeserializeOwned>(
    path: Option<&str>,
) -> Result<Option<T>, Box<dyn std::error::Error>> {
    match path {
        Some(p) => file::read_request_file(p).map(Some),
        None => stdin::read_piped_request(),
    }
}

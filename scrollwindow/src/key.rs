use alloc::string::{String, ToString};
use alloc::sync::Arc;

/// Maps an item index to the identity the host renderer keys it by.
pub type KeyFn = Arc<dyn Fn(usize) -> String + Send + Sync>;

/// Returns `key_fn(index)`, or the decimal index when there is no key function or it yields an
/// empty string.
pub fn resolve_key(index: usize, key_fn: Option<&KeyFn>) -> String {
    if let Some(f) = key_fn {
        let key = f(index);
        if !key.is_empty() {
            return key;
        }
    }
    index.to_string()
}

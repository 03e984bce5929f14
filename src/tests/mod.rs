
use std::hash::{DefaultHasher, Hash, Hasher};

static ONCE: std::sync::Once = std::sync::Once::new();

pub(crate) fn init_logger() {
    ONCE.call_once(|| {
        let _ = colog::default_builder()
            .filter_level(log::LevelFilter::Trace)
            .try_init();
    });
}

pub(crate) fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

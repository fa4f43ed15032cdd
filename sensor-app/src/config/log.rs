use env_logger::{Builder, Env, Target};

const DEFAULT_FILTER: &str = "warn";

/// Logs go to stderr so stdout only carries display lines. `RUST_LOG` overrides the filter.
pub fn init() {
    Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER))
        .target(Target::Stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use std::ptr;

    use log::LevelFilter;

    use crate::config::log::init;

    #[test]
    fn test_init() {
        let noop_logger = log::logger();
        init();
        let logger = log::logger();
        assert!(
            !ptr::eq(&*noop_logger, &*logger),
            "Should install the stderr logger"
        );
        assert_ne!(
            LevelFilter::Off,
            log::max_level(),
            "Should at least let warnings through"
        );
    }
}

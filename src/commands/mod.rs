pub mod feedback;
pub mod insight;

use crate::config::Config;
use crate::i18n::Trans;

/// Translations for the configured interface language
pub fn trans_for(config: &Config) -> Trans {
    Trans::new(config.lang())
}

//! Localized UI strings.
//!
//! Message files live under `i18n/<lang>/educred-ui.ftl` and are embedded at
//! compile time; `en-US` is the fallback and the reference for every key.
//! `fl!` checks keys against the fallback file while compiling, so a missing
//! key is a build error rather than a blank label.
//!
//! Call [`init`] once before rendering (it is idempotent). Desktop builds
//! pick the OS locale list, web builds read `navigator.languages`.

use std::sync::Once;

use dioxus::logger::tracing::{debug, warn};
use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::LanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// `t!("nav-dashboard")` or `t!("report-saved", path = path)`; routes every
/// lookup through [`LOADER`].
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Must match the fallback file name, `i18n/en-US/{DOMAIN}.ftl`, and the
/// `domain` in `i18n.toml` that `fl!` reads while compiling.
const DOMAIN: &str = "educred-ui";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = "en-US".parse().expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Initialize i18n (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &requested) {
            warn!(error = %err, "language selection failed, using fallback");
        }
    });
}

/// Switches language at runtime. Unparseable tags and tags without an
/// embedded bundle leave the current language in place.
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let Ok(lang) = tag.parse::<LanguageIdentifier>() else {
        return Ok(());
    };
    if !available_languages().iter().any(|code| code == tag) {
        debug!(tag, "no bundle for requested language");
        return Ok(());
    }
    i18n_embed::select(&*LOADER, &Localizations, &[lang]).map(|_| ())
}

pub fn current_language() -> String {
    LOADER.current_language().to_string()
}

/// Embedded language tags, sorted.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fl;

    #[test]
    fn fallback_language_is_present() {
        assert!(available_languages().iter().any(|l| l == "en-US"));
    }

    #[test]
    fn basic_lookup_works() {
        init();
        let s = fl!(&*LOADER, "nav-dashboard");
        assert_eq!(s, "Analyze");
    }

    #[test]
    fn unknown_language_keeps_current() {
        init();
        let before = fl!(&*LOADER, "nav-dashboard");
        let lang_before = current_language();
        assert!(set_language("zz-ZZ").is_ok());
        assert!(set_language("not a tag").is_ok());
        assert_eq!(fl!(&*LOADER, "nav-dashboard"), before);
        assert_eq!(current_language(), lang_before);
    }

    #[test]
    fn compile_time_domain_matches_loader() {
        let config = include_str!("../i18n.toml");
        let domain = config
            .lines()
            .filter_map(|line| line.trim().strip_prefix("domain"))
            .filter_map(|rest| rest.trim().strip_prefix('='))
            .map(|value| value.trim().trim_matches('"'))
            .next();
        assert_eq!(domain, Some(DOMAIN));
        assert!(Localizations::get(&format!("en-US/{DOMAIN}.ftl")).is_some());
    }

    #[test]
    fn spanish_bundle_is_embedded() {
        assert!(available_languages().iter().any(|l| l == "es-ES"));
    }
}

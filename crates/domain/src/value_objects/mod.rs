//! Value Objects - Immutable, identity-less domain primitives

mod provider_kind;
mod question;
mod voice_locale;

pub use provider_kind::ProviderKind;
pub use question::Question;
pub use voice_locale::VoiceLocale;

//! User-facing strings for the login window.
//!
//! The app ships in Kazakh. Every front end pulls its display text from this
//! one place so the dialogs and the store outcomes agree on the exact
//! wording.

/// Shown after a successful registration.
pub const REGISTER_SUCCESS: &str = "Тіркелу сәтті өтті!";

/// Shown when the submitted email is already registered.
pub const EMAIL_TAKEN: &str = "Бұл Email адресі тіркелген.";

/// Shown when the form is submitted with an empty field.
pub const FILL_ALL_FIELDS: &str = "Барлық өрістерді толтырыңыз.";

/// Shown when a login attempt fails. Deliberately silent on whether the
/// email or the password was the wrong half.
pub const INVALID_CREDENTIALS: &str = "Қате Email немесе Құпия сөз.";

/// Greeting shown after a successful login.
pub fn welcome(email: &str) -> String {
    format!("Қош келдіңіз, {email}!")
}

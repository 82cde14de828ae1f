//! Preference ports — persisted theme choice and the environment's signal.

use std::rc::Rc;

use expensepilot_domain::error::StorageError;

/// Origin-scoped key-value storage holding the theme preference under a
/// single fixed key.
pub trait PreferenceStore {
    /// Read the raw stored value, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when storage is unavailable.
    fn load(&self) -> Result<Option<String>, StorageError>;

    /// Overwrite the stored value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when storage is unavailable or full.
    fn save(&self, value: &str) -> Result<(), StorageError>;
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for Rc<T> {
    fn load(&self) -> Result<Option<String>, StorageError> {
        (**self).load()
    }

    fn save(&self, value: &str) -> Result<(), StorageError> {
        (**self).save(value)
    }
}

/// The environment's reported color-scheme preference.
pub trait ColorScheme {
    fn prefers_dark(&self) -> bool;
}

impl<T: ColorScheme + ?Sized> ColorScheme for Rc<T> {
    fn prefers_dark(&self) -> bool {
        (**self).prefers_dark()
    }
}

use std::ops::{Deref, DerefMut};

use blp_core::{BlpError, Transport};

use crate::BlpService;

/// Scoped use of a connected [`BlpService`].
///
/// Dereferences to the service; dropping the guard disconnects it, including
/// during unwinding.
pub struct Session<'a, T: Transport> {
    service: &'a mut BlpService<T>,
}

impl<T: Transport> Deref for Session<'_, T> {
    type Target = BlpService<T>;

    fn deref(&self) -> &Self::Target {
        self.service
    }
}

impl<T: Transport> DerefMut for Session<'_, T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.service
    }
}

impl<T: Transport> Drop for Session<'_, T> {
    fn drop(&mut self) {
        self.service.disconnect();
    }
}

impl<T: Transport> BlpService<T> {
    /// Connect and return a guard that disconnects when dropped.
    ///
    /// # Errors
    /// Returns `Connection` if the session cannot be started; nothing is left
    /// connected in that case.
    pub fn session(&mut self) -> Result<Session<'_, T>, BlpError> {
        self.connect()?;
        Ok(Session { service: self })
    }

    /// Connect, run `f`, and disconnect whether `f` succeeds, fails, or
    /// panics.
    ///
    /// # Errors
    /// Returns `Connection` if the session cannot be started, otherwise
    /// whatever `f` returns.
    pub fn with_session<R>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<R, BlpError>,
    ) -> Result<R, BlpError> {
        let mut session = self.session()?;
        f(&mut *session)
    }
}
